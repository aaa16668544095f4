use extcalc_core::calculate::CalculationResult;
use extcalc_core::error::CalcError;
use extcalc_core::export;
use extcalc_core::model::CalculationInput;
use extcalc_core::parsing::FormInput;
use std::path::{Path, PathBuf};

use crate::output;

pub fn run(
    flags: FormInput,
    form_file: Option<PathBuf>,
    tables_path: Option<&Path>,
    output_format: &str,
    out: Option<PathBuf>,
    verbose: bool,
) -> Result<(), CalcError> {
    let tables = super::load_tables(tables_path)?;

    let form = match form_file {
        Some(path) => {
            let bytes = std::fs::read(&path)?;
            serde_json::from_slice::<FormInput>(&bytes)?
        }
        None => flags,
    };

    let (input, result) = extcalc_core::calculate_form(&form, &tables)?;
    let Some(result) = result else {
        let field = extcalc_core::missing_field(&input).unwrap_or("input");
        println!("No result: enter the {field} to calculate the extinguisher requirement.");
        return Ok(());
    };

    match output_format {
        "json" => output::json::print(&input, &result)?,
        "csv" => export::write_csv(&input, &result, std::io::stdout().lock())?,
        "text" => print!("{}", export::summary_text(&input, &result)),
        _ => output::table::print(&input, &result, verbose),
    }

    if let Some(path) = out {
        write_export(&path, &input, &result)?;
        eprintln!("Export written to {}", path.display());
    }

    Ok(())
}

/// Plain-text summary for `.txt` files, CSV for everything else.
fn write_export(
    path: &Path,
    input: &CalculationInput,
    result: &CalculationResult,
) -> Result<(), CalcError> {
    let is_text = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("txt"));
    if is_text {
        std::fs::write(path, export::summary_text(input, result))?;
    } else {
        let file = std::fs::File::create(path)?;
        export::write_csv(input, result, file)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use extcalc_core::tables::builtin::load_default;

    fn category_d_room() -> (CalculationInput, CalculationResult) {
        let form = FormInput {
            object_type: "production".into(),
            area: "101".into(),
            category: "D".into(),
            floors: "3".into(),
            ..FormInput::default()
        };
        let (input, result) = extcalc_core::calculate_form(&form, &load_default().unwrap()).unwrap();
        (input, result.unwrap())
    }

    #[test]
    fn test_txt_export_writes_summary() {
        let (input, result) = category_d_room();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.TXT");
        write_export(&path, &input, &result).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, export::summary_text(&input, &result));
        assert!(written.lines().any(|l| l == "category: D"));
    }

    #[test]
    fn test_other_extensions_write_csv() {
        let (input, result) = category_d_room();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("result.csv");
        write_export(&path, &input, &result).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("key,value"));
        assert!(written.lines().any(|l| l == "category,D"));
    }

    #[test]
    fn test_incomplete_form_prints_prompt() {
        let form = FormInput {
            object_type: "petroleum".into(),
            area: "200".into(),
            ..FormInput::default()
        };
        assert!(run(form, None, None, "text", None, false).is_ok());
    }
}

//! Flat key/value exports of a calculation for download or archiving.

use crate::calculate::outcome::CalculationResult;
use crate::error::CalcError;
use crate::model::CalculationInput;
use std::io::Write;

/// Ordered `(key, value)` pairs describing the input snapshot and the result.
pub fn summary_rows(input: &CalculationInput, result: &CalculationResult) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = vec![
        ("object_type".to_string(), input.object_type.to_string()),
        ("area_m2".to_string(), input.area.to_string()),
    ];
    if let Some(category) = input.category {
        rows.push(("category".to_string(), category.to_string()));
    }
    if let Some(ref sub) = input.sub_category {
        rows.push(("sub_category".to_string(), sub.clone()));
    }
    rows.extend([
        ("floors".to_string(), input.floors.to_string()),
        ("has_aupt".to_string(), input.has_aupt.to_string()),
        ("has_electrical".to_string(), input.has_electrical.to_string()),
        ("has_cabinets".to_string(), input.has_cabinets.to_string()),
        ("reserve_percent".to_string(), input.reserve_percent.to_string()),
        ("powder_count".to_string(), result.powder_count.to_string()),
        ("co2_count".to_string(), result.co2_count.to_string()),
        ("water_count".to_string(), result.water_count.to_string()),
        ("mobile_count".to_string(), result.mobile_count.to_string()),
        ("reserve_count".to_string(), result.reserve_count.to_string()),
        ("total_portable".to_string(), result.total_portable.to_string()),
        ("total_count".to_string(), result.total_count.to_string()),
        ("max_distance_m".to_string(), result.max_distance.to_string()),
    ]);
    if let Some(sand) = result.sand {
        rows.push(("sand_m3".to_string(), sand.to_string()));
    }
    if let Some(blankets) = result.blanket_count {
        rows.push(("blanket_count".to_string(), blankets.to_string()));
    }
    for (i, units) in result.per_floor.iter().enumerate() {
        rows.push((format!("floor_{}", i + 1), units.to_string()));
    }
    for (i, reason) in result.reasons.iter().enumerate() {
        rows.push((
            format!("reason_{}", i + 1),
            format!("{}: {}", reason.label, reason.text),
        ));
    }
    for (i, warning) in result.warnings.iter().enumerate() {
        rows.push((format!("warning_{}", i + 1), warning.clone()));
    }
    rows
}

/// Write the summary as a two-column CSV with a `key,value` header.
pub fn write_csv<W: Write>(
    input: &CalculationInput,
    result: &CalculationResult,
    writer: W,
) -> Result<(), CalcError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["key", "value"])?;
    for (key, value) in summary_rows(input, result) {
        csv_writer.write_record([key.as_str(), value.as_str()])?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Plain-text `key: value` lines.
pub fn summary_text(input: &CalculationInput, result: &CalculationResult) -> String {
    let mut out = String::new();
    for (key, value) in summary_rows(input, result) {
        out.push_str(&format!("{key}: {value}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculate::compute;
    use crate::model::{Category, ObjectType};
    use crate::tables::builtin::load_default;
    use rust_decimal_macros::dec;

    #[test]
    fn test_csv_export() {
        let tables = load_default().unwrap();
        let mut input = CalculationInput::production(Category::D, dec!(101));
        input.has_cabinets = true;
        let result = compute(&tables, &input).unwrap();

        let mut buf = Vec::new();
        write_csv(&input, &result, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("key,value"));
        assert!(text.lines().any(|l| l == "category,D"));
        assert!(text.lines().any(|l| l == "total_count,3"));
        assert!(text.lines().any(|l| l == "floor_1,2"));
        assert!(text.contains("warning_1,"));
    }

    #[test]
    fn test_text_summary_petroleum_extras() {
        let tables = load_default().unwrap();
        let input = CalculationInput::facility(ObjectType::Petroleum, "oil_depot", dec!(1500));
        let result = compute(&tables, &input).unwrap();
        let text = summary_text(&input, &result);
        assert!(text.contains("sub_category: oil_depot"));
        assert!(text.contains("sand_m3: 2"));
        assert!(text.contains("blanket_count: 4"));
        assert!(!text.lines().any(|l| l.starts_with("category:")));
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), summary_rows(&input, &result).len());
    }
}

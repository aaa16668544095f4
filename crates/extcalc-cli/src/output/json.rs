use extcalc_core::calculate::CalculationResult;
use extcalc_core::error::CalcError;
use extcalc_core::model::CalculationInput;
use serde_json::json;

pub fn print(input: &CalculationInput, result: &CalculationResult) -> Result<(), CalcError> {
    let json = serde_json::to_string_pretty(&json!({ "input": input, "result": result }))?;
    println!("{json}");
    Ok(())
}

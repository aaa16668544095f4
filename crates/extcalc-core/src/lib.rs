pub mod calculate;
pub mod error;
pub mod export;
pub mod model;
pub mod parsing;
pub mod tables;

use calculate::outcome::CalculationResult;
use error::CalcError;
use model::CalculationInput;
use parsing::FormInput;
use tables::schema::ReferenceTables;

pub use calculate::compute;

/// Main API entry point: calculate the extinguisher requirement from raw form values.
///
/// Unknown object type, category or sub-category keys are errors. Incomplete
/// input (no area, no category or sub-category) is not: the result is `None`
/// and the returned input tells the caller which field to prompt for
/// (see [`missing_field`]).
pub fn calculate_form(
    form: &FormInput,
    tables: &ReferenceTables,
) -> Result<(CalculationInput, Option<CalculationResult>), CalcError> {
    let input = parsing::resolve_form(form, tables)?;
    let result = compute(tables, &input);
    Ok((input, result))
}

/// Name the field the user still has to fill in before a result can be shown.
pub fn missing_field(input: &CalculationInput) -> Option<&'static str> {
    let input = input.clamped();
    if input.area.is_zero() {
        return Some("area");
    }
    match input.object_type {
        model::ObjectType::Production if input.category.is_none() => Some("category"),
        model::ObjectType::Production => None,
        _ if input
            .sub_category
            .as_deref()
            .map_or(true, |s| s.trim().is_empty()) =>
        {
            Some("sub-category")
        }
        _ => None,
    }
}

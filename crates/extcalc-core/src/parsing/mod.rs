pub mod values;

use crate::error::CalcError;
use crate::model::{CalculationInput, Category, ObjectType};
use crate::tables::schema::ReferenceTables;
use serde::{Deserialize, Serialize};
use values::{parse_area, parse_floors, parse_reserve_percent};

/// Raw form values as the UI submits them. Numbers arrive as typed text.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FormInput {
    pub object_type: String,
    pub area: String,
    pub category: String,
    pub sub_category: String,
    pub floors: String,
    pub has_aupt: bool,
    pub has_electrical: bool,
    pub has_cabinets: bool,
    pub reserve_percent: String,
}

/// Turn raw form values into a `CalculationInput`.
///
/// Numeric fields never fail: they are coerced (see `values`). Enum keys and
/// sub-category keys are checked against the known variants and `tables`;
/// unknown keys are rejected here. Empty discriminators stay unset so that
/// `compute` yields no result instead of an error.
pub fn resolve_form(form: &FormInput, tables: &ReferenceTables) -> Result<CalculationInput, CalcError> {
    let object_type = if form.object_type.trim().is_empty() {
        ObjectType::default()
    } else {
        ObjectType::parse_key(&form.object_type).ok_or_else(|| CalcError::UnknownKey {
            field: "object type",
            value: form.object_type.clone(),
            expected: ObjectType::ALL.map(ObjectType::key).join(", "),
        })?
    };

    let mut input = CalculationInput {
        object_type,
        area: parse_area(&form.area),
        floors: parse_floors(&form.floors),
        has_aupt: form.has_aupt,
        has_electrical: form.has_electrical,
        has_cabinets: form.has_cabinets,
        reserve_percent: parse_reserve_percent(&form.reserve_percent),
        ..CalculationInput::default()
    };

    match tables.sub_table(object_type) {
        None => {
            let raw = form.category.trim();
            if !raw.is_empty() {
                let category = Category::parse_key(raw).ok_or_else(|| CalcError::UnknownKey {
                    field: "category",
                    value: raw.to_string(),
                    expected: Category::ALL.map(Category::key).join(", "),
                })?;
                input.category = Some(category);
            }
        }
        Some(table) => {
            let key = form.sub_category.trim();
            if !key.is_empty() {
                if !table.rows.contains_key(key) {
                    return Err(CalcError::UnknownSubCategory {
                        object_type: object_type.to_string(),
                        key: key.to_string(),
                    });
                }
                input.sub_category = Some(key.to_string());
            }
        }
    }

    tracing::trace!(?input, "resolved form input");
    Ok(input)
}

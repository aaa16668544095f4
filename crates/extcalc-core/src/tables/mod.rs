pub mod builtin;
pub mod schema;

use crate::error::CalcError;
use crate::model::{Category, ObjectType};
use rust_decimal::Decimal;
use schema::{ReferenceTables, SubCategoryTable};
use std::path::Path;

/// Load reference tables from a JSON file.
pub fn load_tables(path: &Path) -> Result<ReferenceTables, CalcError> {
    let content = std::fs::read_to_string(path).map_err(|e| CalcError::TablesLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_tables(&content, path)
}

/// Parse reference tables from a JSON string.
pub fn parse_tables(json: &str, source: &Path) -> Result<ReferenceTables, CalcError> {
    let tables: ReferenceTables = serde_json::from_str(json).map_err(|e| CalcError::TablesLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_tables(&tables)?;
    Ok(tables)
}

/// Parse reference tables from a JSON string (no file path context).
pub fn parse_tables_str(json: &str) -> Result<ReferenceTables, CalcError> {
    let tables: ReferenceTables = serde_json::from_str(json).map_err(CalcError::Json)?;
    validate_tables(&tables)?;
    Ok(tables)
}

/// Validate that a table set is well-formed.
pub fn validate_tables(tables: &ReferenceTables) -> Result<(), CalcError> {
    if tables.name.trim().is_empty() {
        return Err(CalcError::TablesInvalid("name must not be empty".into()));
    }
    if tables.version.trim().is_empty() {
        return Err(CalcError::TablesInvalid("version must not be empty".into()));
    }

    for cat in Category::ALL {
        let Some(rule) = tables.production.get(&cat) else {
            return Err(CalcError::TablesInvalid(format!(
                "production table has no rule for category '{}'",
                cat
            )));
        };
        if rule.block_area <= Decimal::ZERO {
            return Err(CalcError::TablesInvalid(format!(
                "category '{}' has non-positive block_area {}",
                cat, rule.block_area
            )));
        }
        if let Some(threshold) = rule.mobile_threshold {
            if threshold <= Decimal::ZERO {
                return Err(CalcError::TablesInvalid(format!(
                    "category '{}' has non-positive mobile_threshold {}",
                    cat, threshold
                )));
            }
        }
    }

    for object_type in [ObjectType::Service, ObjectType::Petroleum, ObjectType::Construction] {
        if let Some(table) = tables.sub_table(object_type) {
            validate_sub_table(object_type, table)?;
        }
    }

    Ok(())
}

fn validate_sub_table(object_type: ObjectType, table: &SubCategoryTable) -> Result<(), CalcError> {
    if table.max_distance == 0 {
        return Err(CalcError::TablesInvalid(format!(
            "{} table has zero max_distance",
            object_type
        )));
    }
    if table.rows.is_empty() {
        return Err(CalcError::TablesInvalid(format!(
            "{} table has no rows",
            object_type
        )));
    }

    for (key, row) in &table.rows {
        if key.trim().is_empty() {
            return Err(CalcError::TablesInvalid(format!(
                "{} table has an empty row key",
                object_type
            )));
        }
        if row.label.trim().is_empty() {
            return Err(CalcError::TablesInvalid(format!(
                "{} row '{}' has an empty label",
                object_type, key
            )));
        }
        if row.area_norm.is_sign_negative() {
            return Err(CalcError::TablesInvalid(format!(
                "{} row '{}' has negative area_norm {}",
                object_type, key, row.area_norm
            )));
        }
        // Petroleum rows are always scaled by area.
        if object_type == ObjectType::Petroleum && row.area_norm.is_zero() {
            return Err(CalcError::TablesInvalid(format!(
                "petroleum row '{}' must have a positive area_norm",
                key
            )));
        }
        if let Some(sand) = row.sand {
            if sand.is_sign_negative() {
                return Err(CalcError::TablesInvalid(format!(
                    "{} row '{}' has negative sand {}",
                    object_type, key, sand
                )));
            }
        }
    }

    Ok(())
}

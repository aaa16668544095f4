use crate::error::CalcError;
use crate::tables::schema::ReferenceTables;

const MCHS_RK_JSON: &str = include_str!("../../../../tables/mchs-rk.json");

/// Name of the built-in table set.
pub const DEFAULT_TABLES: &str = "mchs-rk";

/// Load the built-in reference tables.
pub fn load_default() -> Result<ReferenceTables, CalcError> {
    super::parse_tables_str(MCHS_RK_JSON)
}

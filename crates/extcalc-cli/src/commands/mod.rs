pub mod calc;
pub mod tables;

use extcalc_core::error::CalcError;
use extcalc_core::tables::schema::ReferenceTables;
use std::path::Path;

/// Custom tables when a path is given, the built-in ones otherwise.
pub fn load_tables(path: Option<&Path>) -> Result<ReferenceTables, CalcError> {
    match path {
        Some(path) => {
            tracing::info!(path = %path.display(), "loading custom reference tables");
            extcalc_core::tables::load_tables(path)
        }
        None => extcalc_core::tables::builtin::load_default(),
    }
}

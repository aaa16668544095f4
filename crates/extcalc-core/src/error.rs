use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CalcError {
    #[error("unknown {field} '{value}'. Expected one of: {expected}")]
    UnknownKey {
        field: &'static str,
        value: String,
        expected: String,
    },

    #[error("unknown sub-category '{key}' for object type {object_type}. Run `extcalc tables explain {object_type}` to see valid keys")]
    UnknownSubCategory { object_type: String, key: String },

    #[error("failed to load reference tables from {path}: {reason}")]
    TablesLoad { path: PathBuf, reason: String },

    #[error("invalid reference tables: {0}")]
    TablesInvalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

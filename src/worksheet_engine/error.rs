/// Failures from configuration and page layout. Problem generation itself
/// never fails.
#[derive(Debug, thiserror::Error)]
pub enum WorksheetError {
    #[error("Invalid worksheet config: {0}")]
    InvalidConfig(String),

    #[error("Worksheet too large: {requested} problems requested, at most {max} allowed")]
    TooManyProblems { requested: usize, max: usize },

    #[error("Config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

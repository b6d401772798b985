#[derive(Debug, thiserror::Error)]
pub enum CsvError {
    #[error("CSV config: {0}")]
    Config(String),

    #[error("CSV config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV io: {0}")]
    Io(#[from] std::io::Error),
}

impl CsvError {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

impl From<CsvError> for rowmap::Error {
    fn from(e: CsvError) -> Self {
        match e {
            CsvError::Io(e) => rowmap::Error::Io(e),
            other => rowmap::Error::collaborator(other),
        }
    }
}

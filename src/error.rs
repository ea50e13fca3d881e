use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
    #[error("invalid amount: must be a non-negative number")]
    InvalidAmount,
    #[error("trip not found")]
    TripNotFound,
    #[error("expense not found")]
    ExpenseNotFound,
    #[error("malformed import data: {0}")]
    MalformedImport(#[source] serde_json::Error),
    #[error("import data has no title")]
    MissingTitle,
    #[error("platform facility unavailable: {0}")]
    Unavailable(String),
}

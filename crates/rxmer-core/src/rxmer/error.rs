use thiserror::Error;

#[derive(Debug, Error)]
pub enum RxMerError {
    #[error("invalid RxMER value: {value}")]
    InvalidValue { value: f64 },
    #[error("RxMER data has not been processed yet")]
    NotProcessed,
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

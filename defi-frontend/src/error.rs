use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),
    #[error("amount must not be negative: {0}")]
    NegativeAmount(f64),
    #[error("failed to decode {name} mock data")]
    MockData {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

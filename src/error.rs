use crate::domain::payment_mode::PaymentMode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown client: {0}")]
    UnknownClient(u32),
    #[error("Unknown bank: {0}")]
    UnknownBank(String),
    #[error("Payment mode {mode} is not supported by {by}")]
    UnsupportedMode { mode: PaymentMode, by: String },
}

pub type Result<T> = std::result::Result<T, GatewayError>;

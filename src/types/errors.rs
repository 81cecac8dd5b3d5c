use thiserror::Error;

#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AmountError {
    #[error("Amount error: Value is empty")]
    Empty,
    #[error("Amount error: {0}")]
    InvalidFormat(String),
    #[error("Amount error: Value is not a finite number")]
    NotFinite,
    #[error("Amount error: Overflow")]
    Overflow {
        negative: bool
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[error("Unknown transfer type '{0}' (expected 'domestic' or 'international')")]
pub struct TransferTypeError(pub String);

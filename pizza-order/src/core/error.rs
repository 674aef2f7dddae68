//! Input validation failures raised by order setters.

use thiserror::Error;

/// Rejected selection. Raised synchronously by the setter that received the
/// input; the order is left exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("unknown flavor '{0}'")]
    UnknownFlavor(String),
    #[error("unknown size '{0}' (expected 25, 32 or 40)")]
    UnknownSize(String),
    #[error("unknown quantity '{0}' (expected 1, 2 or 3)")]
    UnknownQuantity(String),
    #[error("pickup date '{0}' is not among the offered options")]
    InvalidPickupDate(String),
}

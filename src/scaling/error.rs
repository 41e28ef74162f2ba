use thiserror::Error;

use crate::types::direction::Direction;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScaleError {
    #[error("no {coin} position found for this account")]
    MissingPosition { coin: String },

    #[error("account has no active {coin} position (size is 0)")]
    FlatPosition { coin: String },

    #[error("direction mismatch: you selected {declared} but the account is {actual}")]
    DirectionMismatch {
        declared: Direction,
        actual: Direction,
    },

    #[error("account position size is 0, cannot calculate ratio")]
    ZeroReferenceSize,

    #[error("{operation} overflowed, desired size is too large for this position")]
    Overflow { operation: &'static str },

    #[error("malformed response: field `{field}` has invalid value {value:?}")]
    MalformedResponse { field: &'static str, value: String },
}

use std::fmt;

use rust_decimal::Decimal;

use crate::scaling::error::ScaleError;
use crate::types::direction::Direction;
use crate::types::position::Position;

/// Multiplier from the reference account's exposure to the user's desired exposure.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ScalingRatio(Decimal);

impl ScalingRatio {
    /// `desired_size / reference_size`. The reference is taken as a magnitude.
    pub fn new(desired_size: Decimal, reference_size: Decimal) -> Result<Self, ScaleError> {
        if reference_size.is_zero() {
            return Err(ScaleError::ZeroReferenceSize);
        }

        desired_size
            .checked_div(reference_size.abs())
            .map(Self)
            .ok_or(ScaleError::Overflow {
                operation: "scaling ratio",
            })
    }

    pub fn apply(self, value: Decimal) -> Result<Decimal, ScaleError> {
        value.checked_mul(self.0).ok_or(ScaleError::Overflow {
            operation: "scaled size",
        })
    }
}

impl fmt::Display for ScalingRatio {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{:.4}", self.0.round_dp(4))
    }
}

/// Checks the user's declared direction against the account's position.
pub fn confirm_direction(
    declared: Direction,
    position: &Position,
) -> Result<Direction, ScaleError> {
    let actual = position.direction().ok_or_else(|| ScaleError::FlatPosition {
        coin: position.coin.clone(),
    })?;

    if actual != declared {
        return Err(ScaleError::DirectionMismatch { declared, actual });
    }

    Ok(actual)
}

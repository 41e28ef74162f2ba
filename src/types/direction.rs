use std::fmt;

use clap::ValueEnum;
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    /// Direction implied by a signed position size. A flat position has none.
    pub fn of(size: Decimal) -> Option<Self> {
        if size > Decimal::ZERO {
            Some(Self::Long)
        } else if size < Decimal::ZERO {
            Some(Self::Short)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Long => write!(f, "LONG"),
            Self::Short => write!(f, "SHORT"),
        }
    }
}

use rust_decimal::Decimal;

use crate::types::direction::Direction;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Position {
    pub coin: String,
    /// Signed size in base units. Positive = long, negative = short.
    pub size: Decimal,
    pub entry_price: Decimal,
}

impl Position {
    pub fn new(coin: impl Into<String>, size: Decimal, entry_price: Decimal) -> Self {
        Self {
            coin: coin.into().to_uppercase(),
            size,
            entry_price,
        }
    }

    pub fn direction(&self) -> Option<Direction> {
        Direction::of(self.size)
    }

    pub fn absolute_size(&self) -> Decimal {
        self.size.abs()
    }
}

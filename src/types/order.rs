use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::types::side::Side;

/// A resting limit order as reported by the venue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub coin: String,
    pub side: Side,
    pub size: Decimal,
    pub limit_price: Decimal,
    pub timestamp: Option<DateTime<Utc>>,
}

impl Order {
    pub fn new(coin: impl Into<String>, side: Side, size: Decimal, limit_price: Decimal) -> Self {
        Self {
            coin: coin.into().to_uppercase(),
            side,
            size,
            limit_price,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Utc>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// An order after the scaling ratio has been applied. The source order is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaledOrder {
    pub side: Side,
    pub price: Decimal,
    pub original_size: Decimal,
    pub scaled_size: Decimal,
    pub notional: Decimal,
}

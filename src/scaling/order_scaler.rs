use rust_decimal::Decimal;

use crate::scaling::error::ScaleError;
use crate::scaling::ratio::ScalingRatio;
use crate::types::numeric::truncate_to;
use crate::types::order::{Order, ScaledOrder};

#[derive(Debug, Copy, Clone)]
pub struct OrderScaler {
    ratio: ScalingRatio,
    size_decimals: u32,
}

impl OrderScaler {
    pub fn new(ratio: ScalingRatio, size_decimals: u32) -> Self {
        Self {
            ratio,
            size_decimals,
        }
    }

    /// Scaled size truncated toward zero at `size_decimals` places.
    pub fn scale_size(&self, size: Decimal) -> Result<Decimal, ScaleError> {
        Ok(truncate_to(self.ratio.apply(size.abs())?, self.size_decimals))
    }

    pub fn scale(&self, order: &Order) -> Result<ScaledOrder, ScaleError> {
        let original_size = order.size.abs();
        let scaled_size = self.scale_size(original_size)?;
        let notional = scaled_size
            .checked_mul(order.limit_price)
            .ok_or(ScaleError::Overflow {
                operation: "order notional",
            })?;

        Ok(ScaledOrder {
            side: order.side,
            price: order.limit_price,
            original_size,
            scaled_size,
            notional,
        })
    }

    /// Output preserves input order.
    pub fn scale_all(&self, orders: &[Order]) -> Result<Vec<ScaledOrder>, ScaleError> {
        orders.iter().map(|order| self.scale(order)).collect()
    }
}

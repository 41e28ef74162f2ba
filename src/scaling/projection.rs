use rust_decimal::Decimal;

use crate::scaling::error::ScaleError;
use crate::scaling::ratio::ScalingRatio;
use crate::types::order::ScaledOrder;
use crate::types::position::Position;
use crate::types::side::Side;

/// What the scaled position would look like if every order on one side filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FillProjection {
    pub side: Side,
    /// Signed, ratio-scaled size of the reference position.
    pub current_size: Decimal,
    pub total_size: Decimal,
    /// Sum of `scaled_size * price`; reported as the capital required.
    pub total_notional: Decimal,
    pub net_position: Decimal,
    /// Only present when the fills leave a position on this side's direction.
    pub average_entry: Option<Decimal>,
}

#[derive(Debug, Copy, Clone)]
pub struct ProjectionEngine {
    current_size: Decimal,
    entry_price: Decimal,
}

impl ProjectionEngine {
    pub fn new(position: &Position, ratio: ScalingRatio) -> Result<Self, ScaleError> {
        Ok(Self::from_scaled(ratio.apply(position.size)?, position.entry_price))
    }

    pub fn from_scaled(current_size: Decimal, entry_price: Decimal) -> Self {
        Self {
            current_size,
            entry_price,
        }
    }

    /// `Ok(None)` when there are no orders on `side`.
    pub fn project(
        &self,
        side: Side,
        orders: &[ScaledOrder],
    ) -> Result<Option<FillProjection>, ScaleError> {
        let mut side_orders = orders.iter().filter(|order| order.side == side).peekable();
        if side_orders.peek().is_none() {
            return Ok(None);
        }

        let (total_size, total_notional) = side_orders.try_fold(
            (Decimal::ZERO, Decimal::ZERO),
            |(size, notional), order| {
                let notional = order
                    .scaled_size
                    .checked_mul(order.price)
                    .and_then(|value| notional.checked_add(value));
                match (size.checked_add(order.scaled_size), notional) {
                    (Some(size), Some(notional)) => Ok((size, notional)),
                    _ => Err(overflow("projected order totals")),
                }
            },
        )?;

        let projection = match side {
            Side::Buy => self.buy_fill(total_size, total_notional)?,
            Side::Sell => self.sell_fill(total_size, total_notional)?,
        };

        Ok(Some(projection))
    }

    fn buy_fill(
        &self,
        total_size: Decimal,
        total_notional: Decimal,
    ) -> Result<FillProjection, ScaleError> {
        let net_position = self
            .current_size
            .checked_add(total_size)
            .ok_or_else(|| overflow("projected net position"))?;

        let average_entry = if net_position <= Decimal::ZERO {
            None
        } else if self.current_size > Decimal::ZERO {
            Some(blended_entry(
                self.current_size,
                self.entry_price,
                total_notional,
                net_position,
            )?)
        } else {
            // Buys close the short first; the new long is costed on buy volume alone.
            Some(average_or_zero(total_notional, total_size))
        };

        Ok(FillProjection {
            side: Side::Buy,
            current_size: self.current_size,
            total_size,
            total_notional,
            net_position,
            average_entry,
        })
    }

    fn sell_fill(
        &self,
        total_size: Decimal,
        total_notional: Decimal,
    ) -> Result<FillProjection, ScaleError> {
        let net_position = self
            .current_size
            .checked_sub(total_size)
            .ok_or_else(|| overflow("projected net position"))?;

        let average_entry = if net_position >= Decimal::ZERO {
            None
        } else if self.current_size < Decimal::ZERO {
            Some(blended_entry(
                self.current_size.abs(),
                self.entry_price,
                total_notional,
                net_position.abs(),
            )?)
        } else {
            Some(average_or_zero(total_notional, total_size))
        };

        Ok(FillProjection {
            side: Side::Sell,
            current_size: self.current_size,
            total_size,
            total_notional,
            net_position,
            average_entry,
        })
    }
}

/// `(held * entry + notional) / net`, all magnitudes.
fn blended_entry(
    held: Decimal,
    entry_price: Decimal,
    notional: Decimal,
    net: Decimal,
) -> Result<Decimal, ScaleError> {
    held.checked_mul(entry_price)
        .and_then(|cost| cost.checked_add(notional))
        .and_then(|cost| cost.checked_div(net))
        .ok_or_else(|| overflow("projected average entry"))
}

fn average_or_zero(notional: Decimal, size: Decimal) -> Decimal {
    notional.checked_div(size).unwrap_or(Decimal::ZERO)
}

fn overflow(operation: &'static str) -> ScaleError {
    ScaleError::Overflow { operation }
}

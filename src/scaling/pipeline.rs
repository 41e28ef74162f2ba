use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::account::account_state::orders_for;
use crate::account::snapshot::AccountSnapshot;
use crate::scaling::error::ScaleError;
use crate::scaling::order_scaler::OrderScaler;
use crate::scaling::projection::{FillProjection, ProjectionEngine};
use crate::scaling::ratio::{ScalingRatio, confirm_direction};
use crate::types::direction::Direction;
use crate::types::order::ScaledOrder;
use crate::types::side::Side;

#[derive(Debug, Clone)]
pub struct ScaleRequest {
    pub coin: String,
    pub direction: Direction,
    pub desired_size: Decimal,
    pub size_decimals: u32,
}

#[derive(Debug, Clone)]
pub struct ScaleReport {
    pub coin: String,
    pub account_direction: Direction,
    pub account_size: Decimal,
    pub entry_price: Decimal,
    pub desired_size: Decimal,
    pub ratio: ScalingRatio,
    /// Same order as the venue returned them.
    pub orders: Vec<ScaledOrder>,
    pub buy_projection: Option<FillProjection>,
    pub sell_projection: Option<FillProjection>,
}

#[derive(Debug, Clone)]
pub enum ScaleOutcome {
    NoPendingOrders { coin: String },
    Scaled(ScaleReport),
}

/// Validates the reference position and scales its pending orders.
///
/// Every failure is raised before a report is built, so callers never hold
/// a partial report alongside an error.
pub fn evaluate(
    snapshot: &AccountSnapshot,
    request: &ScaleRequest,
) -> Result<ScaleOutcome, ScaleError> {
    let position = snapshot
        .state
        .position(&request.coin)
        .ok_or_else(|| ScaleError::MissingPosition {
            coin: request.coin.clone(),
        })?;

    let account_direction = confirm_direction(request.direction, position)?;

    let orders = orders_for(&snapshot.orders, &request.coin);
    if orders.is_empty() {
        info!(coin = %request.coin, "no pending orders");
        return Ok(ScaleOutcome::NoPendingOrders {
            coin: request.coin.clone(),
        });
    }

    let account_size = position.absolute_size();
    let ratio = ScalingRatio::new(request.desired_size, account_size)?;

    info!(
        coin = %request.coin,
        direction = %account_direction,
        %account_size,
        desired_size = %request.desired_size,
        %ratio,
        orders = orders.len(),
        "scaling pending orders"
    );

    let scaled_orders = OrderScaler::new(ratio, request.size_decimals).scale_all(&orders)?;

    let engine = ProjectionEngine::new(position, ratio)?;
    let buy_projection = engine.project(Side::Buy, &scaled_orders)?;
    let sell_projection = engine.project(Side::Sell, &scaled_orders)?;

    debug!(?buy_projection, ?sell_projection);

    Ok(ScaleOutcome::Scaled(ScaleReport {
        coin: request.coin.clone(),
        account_direction,
        account_size,
        entry_price: position.entry_price,
        desired_size: request.desired_size,
        ratio,
        orders: scaled_orders,
        buy_projection,
        sell_projection,
    }))
}

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::account::AccountSource;
use crate::account::account_state::AccountState;
use crate::types::fill::Fill;
use crate::types::order::Order;

/// Everything fetched for one run. Never refreshed.
#[derive(Debug, Clone, Default)]
pub struct AccountSnapshot {
    pub state: AccountState,
    pub orders: Vec<Order>,
    pub fills: Vec<Fill>,
}

impl AccountSnapshot {
    /// Issues the three reads concurrently. Fills are best-effort.
    pub async fn fetch(source: &dyn AccountSource, address: &str) -> Result<Self> {
        let (state, orders, fills) = tokio::join!(
            source.account_state(address),
            source.open_orders(address),
            source.recent_fills(address),
        );

        let state = state.context("fetch account state failed")?;
        let orders = orders.context("fetch open orders failed")?;
        let fills = fills.unwrap_or_else(|error| {
            warn!(error = %error, "fetch user fills failed; continuing without fills");
            Vec::new()
        });

        debug!(
            positions = state.positions.len(),
            orders = orders.len(),
            fills = fills.len(),
            "account snapshot fetched"
        );

        Ok(Self {
            state,
            orders,
            fills,
        })
    }
}

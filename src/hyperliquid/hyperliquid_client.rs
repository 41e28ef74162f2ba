use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde_json::json;
use url::Url;

use crate::account::AccountSource;
use crate::account::account_state::AccountState;
use crate::hyperliquid::hyperliquid_config::HyperliquidConfig;
use crate::hyperliquid::hyperliquid_types::{ClearinghouseState, WireFill, WireOrder};
use crate::types::fill::Fill;
use crate::types::order::Order;

/// Client for the unauthenticated `info` endpoint.
#[derive(Clone, Debug)]
pub struct HyperliquidClient {
    http: reqwest::Client,
    api_url: Url,
}

impl HyperliquidClient {
    pub fn new(config: &HyperliquidConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .context("build http client failed")?;

        Ok(Self {
            http,
            api_url: config.api_url.clone(),
        })
    }

    async fn info<T: DeserializeOwned>(&self, request_type: &str, address: &str) -> Result<T> {
        let payload = json!({
            "type": request_type,
            "user": address,
        });

        let resp = self
            .http
            .post(self.api_url.clone())
            .json(&payload)
            .send()
            .await
            .with_context(|| format!("hyperliquid {request_type} request failed"))?;

        let status = resp.status();
        let text = resp.text().await.context("read response body failed")?;

        if !status.is_success() {
            anyhow::bail!("hyperliquid http error {status}: {text}");
        }

        match serde_json::from_str(&text) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                tracing::error!(error = %e, %text, request_type, "failed to parse hyperliquid JSON response");
                anyhow::bail!("malformed {request_type} response: {e}");
            }
        }
    }
}

#[async_trait]
impl AccountSource for HyperliquidClient {
    async fn account_state(&self, address: &str) -> Result<AccountState> {
        let wire: ClearinghouseState = self.info("clearinghouseState", address).await?;

        Ok(AccountState::try_from(wire)?)
    }

    async fn open_orders(&self, address: &str) -> Result<Vec<Order>> {
        let wire: Vec<WireOrder> = self.info("openOrders", address).await?;

        let orders = wire
            .into_iter()
            .map(Order::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(orders)
    }

    async fn recent_fills(&self, address: &str) -> Result<Vec<Fill>> {
        let wire: Vec<WireFill> = self.info("userFills", address).await?;

        Ok(wire.into_iter().map(Fill::from).collect())
    }
}

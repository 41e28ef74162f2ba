use std::env;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use url::Url;

pub const DEFAULT_ADDRESS: &str = "0xdae4df7207feb3b350e4284c8efe5f7dac37f637";
pub const DEFAULT_API_URL: &str = "https://api.hyperliquid.xyz/info";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HyperliquidConfig {
    /// Account whose orders are mirrored.
    pub address: String,
    pub api_url: Url,
    pub request_timeout: Duration,
}

impl HyperliquidConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let address = lookup("HYPERLIQUID_ADDRESS")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ADDRESS.to_string());

        let raw_url = lookup("HYPERLIQUID_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let api_url = Url::parse(&raw_url)
            .with_context(|| format!("HYPERLIQUID_API_URL is not a valid url: {raw_url}"))?;

        let request_timeout = match lookup("HYPERLIQUID_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    anyhow!("HYPERLIQUID_TIMEOUT_SECS must be a whole number, got {raw}")
                })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        };

        Ok(Self {
            address: address.trim().to_string(),
            api_url,
            request_timeout,
        })
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = HyperliquidConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.address, DEFAULT_ADDRESS);
        assert_eq!(config.api_url.as_str(), DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn address_comes_from_environment() {
        let custom = "0x1234567890abcdef1234567890abcdef12345678";
        let config =
            HyperliquidConfig::from_lookup(lookup(&[("HYPERLIQUID_ADDRESS", custom)])).unwrap();

        assert_eq!(config.address, custom);
    }

    #[test]
    fn blank_address_falls_back_to_default() {
        let config =
            HyperliquidConfig::from_lookup(lookup(&[("HYPERLIQUID_ADDRESS", "  ")])).unwrap();
        assert_eq!(config.address, DEFAULT_ADDRESS);
    }

    #[test]
    fn invalid_url_is_rejected() {
        let result = HyperliquidConfig::from_lookup(lookup(&[("HYPERLIQUID_API_URL", "not a url")]));
        assert!(result.is_err());
    }

    #[test]
    fn timeout_is_configurable() {
        let config =
            HyperliquidConfig::from_lookup(lookup(&[("HYPERLIQUID_TIMEOUT_SECS", "5")])).unwrap();
        assert_eq!(config.request_timeout, Duration::from_secs(5));

        assert!(
            HyperliquidConfig::from_lookup(lookup(&[("HYPERLIQUID_TIMEOUT_SECS", "soon")])).is_err()
        );
    }

    #[test]
    fn address_can_be_overridden() {
        let config = HyperliquidConfig::from_lookup(lookup(&[]))
            .unwrap()
            .with_address("0xabc");
        assert_eq!(config.address, "0xabc");
    }
}

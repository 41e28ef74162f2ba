use anyhow::{Context, Result, bail};
use once_cell::sync::OnceCell;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::io::ErrorKind;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
pub struct InstrumentRules {
    /// Decimal places scaled sizes are truncated to.
    pub size_decimals: u32,
}

impl InstrumentRules {
    pub const FALLBACK: Self = Self { size_decimals: 3 };

    const MAX_SIZE_DECIMALS: u32 = 12;

    pub fn for_coin(coin: &str) -> Result<Self> {
        Ok(Config::load()?.rules_for(coin))
    }

    fn validate(&self) -> Result<()> {
        if self.size_decimals > Self::MAX_SIZE_DECIMALS {
            bail!(
                "size_decimals must be <= {}, got {}",
                Self::MAX_SIZE_DECIMALS,
                self.size_decimals
            );
        }
        Ok(())
    }
}

#[derive(Debug, Default, Deserialize)]
struct Config {
    #[serde(default)]
    instrument_rules: HashMap<String, InstrumentRules>,
}

static CONFIG: OnceCell<Config> = OnceCell::new();

impl Config {
    const FILE_NAME: &'static str = "instrument_rules.yml";

    fn load() -> Result<&'static Config> {
        CONFIG.get_or_try_init(|| match fs::read_to_string(Self::FILE_NAME) {
            Ok(raw) => Self::parse(&raw)
                .with_context(|| format!("failed to load instrument rules {}", Self::FILE_NAME)),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::debug!(file = Self::FILE_NAME, "no instrument rules file, using fallback");
                Ok(Config::default())
            }
            Err(error) => Err(error)
                .with_context(|| format!("failed to read instrument rules {}", Self::FILE_NAME)),
        })
    }

    fn parse(raw: &str) -> Result<Config> {
        let config: Config =
            serde_yaml::from_str(raw).context("failed to parse instrument rules yaml")?;

        config
            .validate()
            .context("instrument rules config validation failed")?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        for (coin, rules) in &self.instrument_rules {
            rules
                .validate()
                .with_context(|| format!("invalid instrument_rules for {coin}"))?;
        }
        Ok(())
    }

    fn rules_for(&self, coin: &str) -> InstrumentRules {
        match self.instrument_rules.get(&coin.to_uppercase()) {
            Some(rules) => *rules,
            None => {
                tracing::warn!(%coin, "no instrument rules configured, using fallback granularity");
                InstrumentRules::FALLBACK
            }
        }
    }
}

use chrono::{DateTime, Utc};

/// A historical trade. Only its time matters here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fill {
    pub coin: String,
    pub time: Option<DateTime<Utc>>,
}

impl Fill {
    pub fn new(coin: impl Into<String>, time: Option<DateTime<Utc>>) -> Self {
        Self {
            coin: coin.into().to_uppercase(),
            time,
        }
    }
}

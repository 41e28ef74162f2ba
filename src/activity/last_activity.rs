use chrono::{DateTime, Utc};

use crate::types::fill::Fill;
use crate::types::order::Order;

const MINUTE: i64 = 60;
const HOUR: i64 = 60 * MINUTE;
const DAY: i64 = 24 * HOUR;
const WEEK: i64 = 7 * DAY;
const MONTH: i64 = 30 * DAY;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LastActivity {
    Unknown,
    At(DateTime<Utc>),
}

impl LastActivity {
    /// Latest timestamp seen on any open order or fill.
    pub fn from_snapshots(orders: &[Order], fills: &[Fill]) -> Self {
        orders
            .iter()
            .filter_map(|order| order.timestamp)
            .chain(fills.iter().filter_map(|fill| fill.time))
            .max()
            .map_or(Self::Unknown, Self::At)
    }

    pub fn describe(&self, now: DateTime<Utc>) -> String {
        match self {
            Self::Unknown => "Unknown".to_string(),
            Self::At(at) => relative_time(*at, now),
        }
    }
}

/// Coarse "N units ago" rendering with flat 7-day weeks and 30-day months.
pub fn relative_time(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = (now - then).num_seconds();

    if seconds < MINUTE {
        return "just now".to_string();
    }

    let (count, unit) = if seconds < HOUR {
        (seconds / MINUTE, "minute")
    } else if seconds < DAY {
        (seconds / HOUR, "hour")
    } else if seconds < WEEK {
        (seconds / DAY, "day")
    } else if seconds < MONTH {
        (seconds / WEEK, "week")
    } else {
        (seconds / MONTH, "month")
    };

    let plural = if count == 1 { "" } else { "s" };
    format!("{count} {unit}{plural} ago")
}

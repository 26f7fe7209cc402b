//! Position snapshot and inbound position records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One execution/status record contributing to a position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillRecord {
    /// Order id the fill belongs to
    pub oid: Uuid,
    /// Execution time
    pub time: DateTime<Utc>,
    /// Broker status, e.g. "filled"
    pub resp: String,
    /// Signed filled quantity
    pub size: f64,
    /// Execution price
    pub price: f64,
}

impl FillRecord {
    /// Create a fill timestamped now with a fresh order id
    pub fn new(size: f64, price: f64) -> Self {
        Self {
            oid: Uuid::new_v4(),
            time: Utc::now(),
            resp: "filled".to_string(),
            size,
            price,
        }
    }

    /// Notional value of the fill
    pub fn value(&self) -> f64 {
        self.size.abs() * self.price
    }
}

/// Broker position update
///
/// Only `avg_price` and `size` drive the overlay; the remaining fields are
/// carried for logging and are optional on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionMsg {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub broker: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    /// Signed position size
    pub size: f64,
    /// Average entry price of the open quantity
    pub avg_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl PositionMsg {
    pub fn new(avg_price: f64, size: f64) -> Self {
        Self {
            broker: None,
            account: None,
            symbol: None,
            size,
            avg_price,
            currency: None,
        }
    }

    pub fn with_symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }
}

/// Personal position ("pp") snapshot with its fill history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    /// Traded instrument
    pub symbol: String,
    /// Signed size: positive long, negative short, zero flat
    pub size: f64,
    /// Volume weighted average entry price
    pub avg_price: f64,
    /// Constituent fills in arrival order
    #[serde(default)]
    pub fills: Vec<FillRecord>,
}

impl Position {
    /// A flat position for `symbol`
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            size: 0.0,
            avg_price: 0.0,
            fills: Vec::new(),
        }
    }

    pub fn is_flat(&self) -> bool {
        self.size == 0.0
    }

    pub fn is_long(&self) -> bool {
        self.size > 0.0
    }

    pub fn is_short(&self) -> bool {
        self.size < 0.0
    }

    /// Overwrite size and price in place
    pub fn apply(&mut self, msg: &PositionMsg) {
        self.avg_price = msg.avg_price;
        self.size = msg.size;
    }

    /// Append a fill; history is never reordered
    pub fn push_fill(&mut self, fill: FillRecord) {
        self.fills.push(fill);
    }
}

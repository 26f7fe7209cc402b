//! Position data
//!
//! The plain snapshot the overlay renders: symbol, signed size, average
//! entry price and the fills that built it, plus the inbound broker
//! message that updates it.

mod types;

pub use types::{FillRecord, Position, PositionMsg};

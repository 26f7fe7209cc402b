#![deny(unreachable_pub)]
pub mod config;
mod errors;
pub mod host;
pub mod overlay;
pub mod position;
pub mod runner;

pub use errors::{OverlayError, OverlayResult};
pub use overlay::{LevelMarker, MarkerStyle, PositionTracker};
pub use position::{FillRecord, Position, PositionMsg};

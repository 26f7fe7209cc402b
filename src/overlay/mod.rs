//! Position Overlay Module
//!
//! Draws a live position ("pp") on a price chart:
//!
//! - a [`LevelMarker`] arrow at the average entry price, pinned to the view
//!   edge when that price is scrolled out of range
//! - a level line across the chart at the same price
//! - a "pp" label pinned to the marker and an entry size label beside it
//!
//! # Update flow
//!
//! - Position messages go through [`PositionTracker::update`], which mutates
//!   the snapshot and runs the level line state machine
//! - The marker pulls its level through a read accessor on every paint and
//!   range change, so it always reflects the current line level
//!
//! # Example
//!
//! ```rust
//! use std::rc::Rc;
//! use pp_overlay::host::mock::MockChart;
//! use pp_overlay::overlay::{MarkerStyle, PositionTracker};
//! use pp_overlay::position::PositionMsg;
//!
//! let chart = Rc::new(MockChart::new(90.0, 110.0, 400.0, 800.0));
//! let mut tracker = PositionTracker::new(chart, "XBTUSD");
//!
//! tracker.update(&PositionMsg::new(100.0, 5.0));
//! assert_eq!(tracker.level(), 100.0);
//! assert_eq!(tracker.marker().style(), Some(MarkerStyle::Up));
//!
//! tracker.update(&PositionMsg::new(100.0, 0.0));
//! assert!(!tracker.has_line());
//! ```

mod anchors;
mod marker;
mod tracker;

pub use anchors::{gpath_pin, marker_right_points, MarkerAnchors, PinLocation, DEFAULT_MARKER_SIZE};
pub use marker::{LevelFn, LevelMarker, MarkerGeometry, MarkerStyle};
pub use tracker::{LineState, PositionTracker, TrackerSnapshot};

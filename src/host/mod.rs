//! Chart Host Interface Module
//!
//! The overlay never draws on its own. Everything it needs from the hosting
//! chart widget is expressed as a small set of capabilities:
//!
//! - **Viewport**: visible vertical range, view height, view→scene mapping
//! - **Scene membership**: add/remove paintable items
//! - **Range-change subscription**: callbacks fired on pan/zoom
//! - **Label primitive**: formatted text with a pluggable anchor rule
//! - **Level-line primitive**: horizontal line at a price level
//!
//! All callbacks are dispatched synchronously on the host's single event
//! loop, so shared state uses `Rc<RefCell<_>>` rather than locks.
//!
//! # Testing
//!
//! [`mock`] provides a headless host:
//!
//! ```rust
//! use pp_overlay::host::{mock::MockChart, ChartView, Point};
//!
//! let chart = MockChart::new(0.0, 100.0, 200.0, 800.0);
//! assert_eq!(chart.map_from_view(Point::new(0.0, 50.0)).y, 100.0);
//! ```

pub mod mock;
mod traits;
mod types;

pub use traits::{ChartHost, ChartView, GraphicsItem, Label, LevelLine};
pub use types::{
    format_fields, AnchorRule, Color, ItemId, LabelSpec, LineOptions, Point, RangeCallback, Rect,
    Size, SubscriptionId,
};

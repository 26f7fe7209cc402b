//! Capability traits the chart host provides to the overlay
//!
//! The host owns the viewport, the scene graph and the paint schedule. The
//! overlay only queries it, registers items and callbacks, and asks it to
//! build labels and level lines.

use std::cell::RefCell;
use std::rc::Weak;

use serde_json::Value;

use super::types::{
    AnchorRule, Color, ItemId, LabelSpec, LineOptions, Point, RangeCallback, Size, SubscriptionId,
};

/// Anything the scene paints on each paint cycle
pub trait GraphicsItem {
    /// Recompute scene position and draw
    fn paint(&mut self);

    /// Whether the item is currently shown
    fn is_visible(&self) -> bool;
}

/// Viewport queries and scene membership
///
/// All methods take `&self`: the host is shared between the overlay items
/// and the range-change callbacks it dispatches, so implementations use
/// interior mutability.
pub trait ChartView {
    /// Visible vertical range `(ymin, ymax)` in view (price) coordinates
    fn view_range_y(&self) -> (f64, f64);

    /// Height of the view box in scene pixels
    fn view_height(&self) -> f64;

    /// Map a view-space point to scene space
    fn map_from_view(&self, point: Point) -> Point;

    /// Scene x of the right price axis
    fn right_axis_x(&self) -> f64;

    /// Width reserved left of the axis for L1 (bid/ask) labels
    fn l1_line_len(&self) -> f64 {
        0.0
    }

    /// Add an item to the scene; the scene holds it weakly
    fn add_item(&self, item: Weak<RefCell<dyn GraphicsItem>>) -> ItemId;

    /// Remove an item so no further paint calls reach it
    fn remove_item(&self, id: ItemId);

    /// Register a callback fired whenever the visible range changes
    fn subscribe_range_change(&self, callback: RangeCallback) -> SubscriptionId;

    /// Drop a range-change subscription
    fn unsubscribe(&self, id: SubscriptionId);
}

/// A text label with named fields and a pluggable anchor rule
pub trait Label {
    /// Set one format field; call [`Label::render`] to refresh the text
    fn set_field(&mut self, name: &str, value: Value);

    fn field(&self, name: &str) -> Option<&Value>;

    /// Recompute the displayed text from the current fields
    fn render(&mut self);

    /// Currently displayed text
    fn text(&self) -> &str;

    /// Replace the anchor rule used by [`Label::update`]
    fn set_anchor(&mut self, rule: AnchorRule);

    /// Re-run the anchor rule and move the label
    fn update(&mut self);

    /// Scene position of the label's top left corner
    fn pos(&self) -> Point;

    /// Rendered size of the current text
    fn size(&self) -> Size;

    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    /// Whether the label should be re-anchored when the view range changes
    fn updates_on_range_change(&self) -> bool;
}

/// A horizontal line drawn at a price level
pub trait LevelLine {
    fn level(&self) -> f64;

    fn set_level(&mut self, level: f64);

    fn show(&mut self);

    fn hide(&mut self);

    fn is_visible(&self) -> bool;

    /// Remove the line from the chart
    fn delete(&mut self);

    /// Current pen color
    fn color(&self) -> Color;
}

/// Full chart host: viewport plus label and line factories
pub trait ChartHost: ChartView {
    type Label: Label + 'static;
    type Line: LevelLine + 'static;

    fn make_label(&self, spec: LabelSpec) -> Self::Label;

    fn make_level_line(&self, level: f64, color: Color, opts: LineOptions) -> Self::Line;
}

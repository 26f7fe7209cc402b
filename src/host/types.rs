//! Geometry and value types shared between the overlay and its chart host

use std::collections::BTreeMap;
use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A point in either view (price) or scene (pixel) coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Width and height of a rendered item
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub w: f64,
    pub h: f64,
}

impl Size {
    pub fn new(w: f64, h: f64) -> Self {
        Self { w, h }
    }
}

/// Axis aligned rectangle, y grows downward as in scene space
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    /// Smallest rectangle containing all `points`, `None` for an empty slice
    pub fn bounding(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let (mut x0, mut y0, mut x1, mut y1) = (first.x, first.y, first.x, first.y);
        for p in &points[1..] {
            x0 = x0.min(p.x);
            y0 = y0.min(p.y);
            x1 = x1.max(p.x);
            y1 = y1.max(p.y);
        }
        Some(Self::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// The same rectangle moved by `offset`
    pub fn translated(&self, offset: Point) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn top_right(&self) -> Point {
        Point::new(self.x + self.w, self.y)
    }

    pub fn bottom_left(&self) -> Point {
        Point::new(self.x, self.y + self.h)
    }

    pub fn bottom_right(&self) -> Point {
        Point::new(self.x + self.w, self.y + self.h)
    }

    pub fn is_empty(&self) -> bool {
        self.w <= 0.0 || self.h <= 0.0
    }
}

/// Named chart color (e.g. "default_light"), resolved by the host's palette
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color(pub String);

impl Color {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::new("default_light")
    }
}

impl From<&str> for Color {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Handle of an item added to the host scene
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ItemId(pub u64);

/// Handle of a range-change subscription
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub u64);

/// Zero argument callback fired whenever the visible range changes
pub type RangeCallback = Box<dyn FnMut()>;

/// Computes a label's scene position; receives the label's own rendered size
pub type AnchorRule = Box<dyn Fn(Size) -> Point>;

/// Behaviour flags passed to the host when building a level line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineOptions {
    /// Attach the host's own level label to the line
    pub add_label: bool,
    /// Highlight the line on mouse hover
    pub hl_on_hover: bool,
    /// Allow dragging the line to a new level
    pub movable: bool,
    /// Hide the crosshair while hovering the line
    pub hide_xhair_on_hover: bool,
    /// Reserve a right margin for a level marker
    pub use_marker_margin: bool,
    /// Only draw end markers while hovered
    pub only_show_markers_on_hover: bool,
    /// Keep labels visible regardless of hover
    pub always_show_labels: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            add_label: true,
            hl_on_hover: true,
            movable: true,
            hide_xhair_on_hover: true,
            use_marker_margin: false,
            only_show_markers_on_hover: true,
            always_show_labels: false,
        }
    }
}

/// Construction parameters for a host label
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    /// Format string with `{field}` placeholders
    pub fmt_str: String,
    /// Initial field values
    pub fields: BTreeMap<String, Value>,
    pub color: Color,
    /// Re-anchor automatically on every view range change
    pub update_on_range_change: bool,
}

impl LabelSpec {
    pub fn new(fmt_str: impl Into<String>, color: Color) -> Self {
        Self {
            fmt_str: fmt_str.into(),
            fields: BTreeMap::new(),
            color,
            update_on_range_change: true,
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn static_anchor(mut self) -> Self {
        self.update_on_range_change = false;
        self
    }
}

/// Substitute `{name}` placeholders in `fmt_str` with values from `fields`.
///
/// Strings are inserted without quotes and integral floats without a
/// fractional part, so a size of `5.0` renders as `5`. Unknown placeholders
/// are left as-is.
pub fn format_fields(fmt_str: &str, fields: &BTreeMap<String, Value>) -> String {
    let mut out = String::with_capacity(fmt_str.len());
    let mut rest = fmt_str;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match tail.find('}') {
            Some(end) => {
                let name = &tail[1..end];
                match fields.get(name) {
                    Some(value) => out.push_str(&display_value(value)),
                    None => out.push_str(&tail[..=end]),
                }
                rest = &tail[end + 1..];
            }
            None => {
                out.push_str(tail);
                rest = "";
            }
        }
    }
    out.push_str(rest);
    out
}

fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => match n.as_f64() {
            Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => {
                format!("{}", f as i64)
            }
            _ => n.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rect_bounding() {
        let rect = Rect::bounding(&[
            Point::new(-0.5, 0.5),
            Point::new(0.0, -0.5),
            Point::new(0.5, 0.5),
        ])
        .unwrap();
        assert_eq!(rect, Rect::new(-0.5, -0.5, 1.0, 1.0));
        assert!(Rect::bounding(&[]).is_none());
    }

    #[test]
    fn test_rect_corners() {
        let rect = Rect::new(10.0, 20.0, 4.0, 6.0).translated(Point::new(1.0, -1.0));
        assert_eq!(rect.top_left(), Point::new(11.0, 19.0));
        assert_eq!(rect.top_right(), Point::new(15.0, 19.0));
        assert_eq!(rect.bottom_left(), Point::new(11.0, 25.0));
        assert_eq!(rect.bottom_right(), Point::new(15.0, 25.0));
    }

    #[test]
    fn test_rect_empty_when_either_side_collapses() {
        assert!(Rect::new(0.0, 0.0, 0.0, 5.0).is_empty());
        assert!(Rect::new(0.0, 0.0, 5.0, 0.0).is_empty());
        assert!(Rect::new(0.0, 0.0, -1.0, 5.0).is_empty());
        assert!(!Rect::new(0.0, 0.0, 1.0, 5.0).is_empty());
    }

    #[test]
    fn test_format_fields() {
        let mut fields = BTreeMap::new();
        fields.insert("entry_size".to_string(), json!(5.0));
        assert_eq!(format_fields("x{entry_size}", &fields), "x5");

        fields.insert("entry_size".to_string(), json!(-2.5));
        assert_eq!(format_fields("x{entry_size}", &fields), "x-2.5");

        fields.insert("name".to_string(), json!("pp"));
        assert_eq!(format_fields("{name}: {missing}", &fields), "pp: {missing}");
        assert_eq!(format_fields("pp", &fields), "pp");
        assert_eq!(format_fields("open {brace", &fields), "open {brace");
    }

    #[test]
    fn test_line_options_default() {
        let opts = LineOptions::default();
        assert!(opts.movable);
        assert!(!opts.always_show_labels);
    }
}

//! Anchor geometry for the marker and its labels

use serde::{Deserialize, Serialize};

use crate::host::{ChartView, Point, Rect, Size};

/// Marker size the right-edge anchors are computed for
pub const DEFAULT_MARKER_SIZE: f64 = 20.0;

/// Scene x positions along the right edge of the chart
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerAnchors {
    /// Where a level line stops short of the marker
    pub line_end: f64,
    /// Where level markers are drawn
    pub marker_right: f64,
    /// Right price axis
    pub r_axis_x: f64,
}

/// Right-edge anchor points, leaving room for the L1 labels and a marker
pub fn marker_right_points(chart: &dyn ChartView, marker_size: f64) -> MarkerAnchors {
    let r_axis_x = chart.right_axis_x();
    let up_to_l1 = r_axis_x - chart.l1_line_len();
    let marker_right = up_to_l1 - 1.375 * 2.0 * marker_size;
    let line_end = marker_right - 6.0 / 16.0 * marker_size;

    MarkerAnchors {
        line_end,
        marker_right,
        r_axis_x,
    }
}

/// Where a label sits relative to a glyph
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PinLocation {
    #[default]
    RightOfPathCentered,
    LeftOfPathCentered,
    BelowPathLeftAligned,
    BelowPathRightAligned,
}

/// Label position pinned to a glyph's scene bounding box
pub fn gpath_pin(glyph: Rect, label: Size, location: PinLocation) -> Point {
    match location {
        PinLocation::RightOfPathCentered => {
            glyph.top_right() - Point::new(label.h / 16.0, label.h / 3.0)
        }
        PinLocation::LeftOfPathCentered => {
            glyph.top_left() - Point::new(label.w, label.h / 6.0)
        }
        PinLocation::BelowPathLeftAligned => glyph.bottom_left() - Point::new(0.0, label.h / 6.0),
        PinLocation::BelowPathRightAligned => {
            glyph.bottom_right() - Point::new(label.w, label.h / 6.0)
        }
    }
}

//! Level marker glyph
//!
//! An arrow that repositions itself to a live price level on every paint
//! cycle, pinning to the top or bottom edge of the view when the level is
//! scrolled out of range.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use log::debug;
use serde::{Deserialize, Serialize};

use super::anchors::{marker_right_points, DEFAULT_MARKER_SIZE};
use crate::host::{ChartView, Color, GraphicsItem, ItemId, Label, Point, Rect, SubscriptionId};

/// Reads the level the marker should currently track
pub type LevelFn = Box<dyn Fn() -> f64>;

/// Arrow glyph shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerStyle {
    /// `|<`, drawn for long positions
    #[serde(rename = "|<")]
    Up,
    /// `>|`, drawn for short positions
    #[serde(rename = ">|")]
    Down,
}

impl MarkerStyle {
    /// Glyph for a signed position size, `None` when flat
    pub fn from_size(size: f64) -> Option<Self> {
        if size > 0.0 {
            Some(MarkerStyle::Up)
        } else if size < 0.0 {
            Some(MarkerStyle::Down)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MarkerStyle::Up => "|<",
            MarkerStyle::Down => ">|",
        }
    }

    pub fn direction(&self) -> &'static str {
        match self {
            MarkerStyle::Up => "up",
            MarkerStyle::Down => "down",
        }
    }

    /// Unit-sized glyph outline centered on the origin, as closed polygons
    fn unit_path(&self) -> Vec<Vec<Point>> {
        // bar across the base plus a triangle pointing away from it
        let up = vec![
            vec![
                Point::new(-0.5, 0.375),
                Point::new(0.5, 0.375),
                Point::new(0.5, 0.5),
                Point::new(-0.5, 0.5),
            ],
            vec![
                Point::new(0.0, -0.5),
                Point::new(0.5, 0.25),
                Point::new(-0.5, 0.25),
            ],
        ];
        match self {
            MarkerStyle::Up => up,
            MarkerStyle::Down => up
                .into_iter()
                .map(|poly| poly.into_iter().map(|p| Point::new(p.x, -p.y)).collect())
                .collect(),
        }
    }
}

impl fmt::Display for MarkerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scene placement of a marker, readable by label anchor rules
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MarkerGeometry {
    /// Glyph origin in scene coordinates
    pub pos: Point,
    /// Glyph bounding box in scene coordinates
    pub bounds: Rect,
}

/// Arrow marker that tracks a live level
pub struct LevelMarker {
    chart: Rc<dyn ChartView>,
    style: Option<MarkerStyle>,
    size: f64,
    /// scaled glyph outline
    path: Vec<Vec<Point>>,
    /// bounding box of `path`, only rewritten by `set_style`
    path_br: Option<Rect>,
    get_level: LevelFn,
    level: f64,
    keep_in_view: bool,
    pos: Point,
    visible: bool,
    pen: Option<Color>,
    brush: Option<Color>,
    /// re-anchored in link order after every move
    labels: Vec<Weak<RefCell<dyn Label>>>,
    geometry: Rc<Cell<MarkerGeometry>>,
    item_id: Option<ItemId>,
    subscription: Option<SubscriptionId>,
    deleted: bool,
}

impl LevelMarker {
    /// Build a marker of `size` pixels; a `None` style leaves the glyph empty
    ///
    /// # Panics
    /// Panics if a styled glyph produces an empty bounding box.
    pub fn new(
        chart: Rc<dyn ChartView>,
        style: Option<MarkerStyle>,
        get_level: LevelFn,
        size: f64,
        keep_in_view: bool,
    ) -> Self {
        let mut marker = Self {
            chart,
            style: None,
            size,
            path: Vec::new(),
            path_br: None,
            get_level,
            level: 0.0,
            keep_in_view,
            pos: Point::ORIGIN,
            visible: false,
            pen: None,
            brush: None,
            labels: Vec::new(),
            geometry: Rc::new(Cell::new(MarkerGeometry::default())),
            item_id: None,
            subscription: None,
            deleted: false,
        };

        if let Some(style) = style {
            marker.set_style(style);
            assert!(
                marker.path_br.is_some_and(|br| !br.is_empty()),
                "marker glyph path was not generated"
            );
        }
        marker
    }

    pub fn style(&self) -> Option<MarkerStyle> {
        self.style
    }

    /// Change the glyph; regenerates the path and its bounding box
    pub fn set_style(&mut self, style: MarkerStyle) {
        if self.style == Some(style) {
            return;
        }

        let size = self.size;
        self.path = style
            .unit_path()
            .into_iter()
            .map(|poly| {
                poly.into_iter()
                    .map(|p| Point::new(p.x * size, p.y * size))
                    .collect()
            })
            .collect();

        let points: Vec<Point> = self.path.iter().flatten().copied().collect();
        self.path_br = Rect::bounding(&points);
        self.style = Some(style);
        self.publish_geometry();
    }

    /// Scaled glyph outline in local coordinates
    pub fn path(&self) -> &[Vec<Point>] {
        &self.path
    }

    pub fn has_glyph(&self) -> bool {
        self.path_br.is_some()
    }

    fn path_br(&self) -> Rect {
        match self.path_br {
            Some(br) => br,
            None => panic!("marker glyph bounds requested before a style was set"),
        }
    }

    /// Glyph height in scene pixels
    pub fn height(&self) -> f64 {
        self.path_br().h
    }

    /// Glyph width in scene pixels
    pub fn width(&self) -> f64 {
        self.path_br().w
    }

    /// Last level explicitly assigned
    pub fn level(&self) -> f64 {
        self.level
    }

    pub fn set_level(&mut self, level: f64) {
        self.level = level;
    }

    /// Level read through the `get_level` capability
    pub fn current_level(&self) -> f64 {
        (self.get_level)()
    }

    pub fn keep_in_view(&self) -> bool {
        self.keep_in_view
    }

    pub fn set_keep_in_view(&mut self, keep: bool) {
        self.keep_in_view = keep;
    }

    pub fn pos(&self) -> Point {
        self.pos
    }

    /// Shared geometry cell, updated on every reposition
    pub fn geometry(&self) -> Rc<Cell<MarkerGeometry>> {
        Rc::clone(&self.geometry)
    }

    /// Link a label to re-anchor whenever the marker moves
    ///
    /// Labels are updated in link order, so a label anchored to another
    /// linked label must be linked after it.
    pub fn link_label(&mut self, label: Weak<RefCell<dyn Label>>) {
        self.labels.push(label);
    }

    pub fn clear_labels(&mut self) {
        self.labels.clear();
    }

    fn reanchor_labels(&self) {
        for label in self.labels.iter().filter_map(Weak::upgrade) {
            match label.try_borrow_mut() {
                Ok(mut label) => label.update(),
                Err(_) => debug!("marker label busy, skipping re-anchor"),
            }
        }
    }

    pub fn pen(&self) -> Option<&Color> {
        self.pen.as_ref()
    }

    pub fn set_pen(&mut self, color: Color) {
        self.pen = Some(color);
    }

    pub fn brush(&self) -> Option<&Color> {
        self.brush.as_ref()
    }

    pub fn set_brush(&mut self, color: Color) {
        self.brush = Some(color);
    }

    pub fn show(&mut self) {
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub fn item_id(&self) -> Option<ItemId> {
        self.item_id
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    fn scene_x(&self) -> f64 {
        marker_right_points(self.chart.as_ref(), DEFAULT_MARKER_SIZE).marker_right
    }

    fn set_pos(&mut self, pos: Point) {
        self.pos = pos;
        self.publish_geometry();
    }

    fn publish_geometry(&self) {
        let bounds = self
            .path_br
            .map(|br| br.translated(self.pos))
            .unwrap_or_else(|| Rect::new(self.pos.x, self.pos.y, 0.0, 0.0));
        self.geometry.set(MarkerGeometry {
            pos: self.pos,
            bounds,
        });
    }

    /// Off-screen indicator: place the marker at its level, or pin it to the
    /// view edge it scrolled past, then re-anchor the linked labels.
    pub fn position_in_view(&mut self) {
        let level = self.current_level();
        let (ymn, ymx) = self.chart.view_range_y();
        let x = self.scene_x();

        let y = if level > ymx {
            self.height() / 3.0
        } else if level < ymn {
            self.chart.view_height() - 4.0 / 3.0 * self.height()
        } else {
            self.chart.map_from_view(Point::new(0.0, level)).y
        };
        self.set_pos(Point::new(x, y));
        self.reanchor_labels();
    }

    /// Recompute the scene position for this paint cycle
    pub fn paint(&mut self) {
        if self.deleted || !self.has_glyph() {
            return;
        }

        if self.keep_in_view {
            self.position_in_view();
        } else {
            let level = self.current_level();
            let y = self.chart.map_from_view(Point::new(0.0, level)).y;
            let x = self.scene_x();
            self.set_pos(Point::new(x, y));
            self.reanchor_labels();
        }
    }

    /// Force a repaint
    pub fn update(&mut self) {
        self.paint();
    }

    /// Remove from the scene and drop the range-change subscription
    pub fn delete(&mut self) {
        if let Some(id) = self.item_id.take() {
            self.chart.remove_item(id);
        }
        if let Some(sub) = self.subscription.take() {
            self.chart.unsubscribe(sub);
        }
        self.visible = false;
        self.deleted = true;
    }

    /// Register `this` with the chart scene so it is painted each cycle
    pub fn add_to_scene(this: &Rc<RefCell<Self>>) {
        let chart = Rc::clone(&this.borrow().chart);
        let item: Rc<RefCell<dyn GraphicsItem>> = this.clone();
        let id = chart.add_item(Rc::downgrade(&item));
        this.borrow_mut().item_id = Some(id);
    }

    /// Reposition `this` whenever the view range changes; subscribes once
    pub fn connect_range_change(this: &Rc<RefCell<Self>>) {
        if this.borrow().is_subscribed() {
            return;
        }

        let chart = Rc::clone(&this.borrow().chart);
        let weak = Rc::downgrade(this);
        let id = chart.subscribe_range_change(Box::new(move || {
            let Some(marker) = weak.upgrade() else {
                return;
            };
            match marker.try_borrow_mut() {
                Ok(mut marker) if !marker.deleted && marker.has_glyph() => {
                    marker.position_in_view()
                }
                Ok(_) => {}
                Err(_) => debug!("marker busy during range change"),
            };
        }));
        this.borrow_mut().subscription = Some(id);
    }
}

impl GraphicsItem for LevelMarker {
    fn paint(&mut self) {
        LevelMarker::paint(self);
    }

    fn is_visible(&self) -> bool {
        self.visible
    }
}

impl fmt::Debug for LevelMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LevelMarker")
            .field("style", &self.style)
            .field("size", &self.size)
            .field("level", &self.level)
            .field("keep_in_view", &self.keep_in_view)
            .field("pos", &self.pos)
            .field("visible", &self.visible)
            .field("deleted", &self.deleted)
            .finish()
    }
}

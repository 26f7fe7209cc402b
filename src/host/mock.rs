//! Headless in-memory chart host
//!
//! Implements every host capability without a windowing toolkit so the
//! overlay can be driven from tests and from the replay binary.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet};
use std::rc::{Rc, Weak};

use log::debug;
use serde_json::Value;

use super::traits::{ChartHost, ChartView, GraphicsItem, Label, LevelLine};
use super::types::{
    format_fields, AnchorRule, Color, ItemId, LabelSpec, LineOptions, Point, RangeCallback, Size,
    SubscriptionId,
};

/// Approximate glyph advance used to size mock labels
pub const CHAR_WIDTH: f64 = 7.0;
/// Line height used to size mock labels
pub const LINE_HEIGHT: f64 = 14.0;

/// Counters shared between the chart and the lines it builds
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MockStats {
    pub lines_created: u64,
    pub lines_deleted: u64,
    pub labels_created: u64,
}

#[derive(Debug, Clone, Copy)]
struct ViewState {
    y_min: f64,
    y_max: f64,
    height: f64,
    right_axis_x: f64,
    l1_line_len: f64,
}

/// Mock chart with a linear price axis
///
/// View y maps to scene y as `(y_max - y) / (y_max - y_min) * height`;
/// x passes through unchanged.
pub struct MockChart {
    view: Cell<ViewState>,
    items: RefCell<BTreeMap<ItemId, Weak<RefCell<dyn GraphicsItem>>>>,
    callbacks: RefCell<BTreeMap<SubscriptionId, RangeCallback>>,
    cancelled: RefCell<BTreeSet<SubscriptionId>>,
    next_id: Cell<u64>,
    stats: Rc<Cell<MockStats>>,
}

impl MockChart {
    pub fn new(y_min: f64, y_max: f64, height: f64, right_axis_x: f64) -> Self {
        Self {
            view: Cell::new(ViewState {
                y_min,
                y_max,
                height,
                right_axis_x,
                l1_line_len: 0.0,
            }),
            items: RefCell::new(BTreeMap::new()),
            callbacks: RefCell::new(BTreeMap::new()),
            cancelled: RefCell::new(BTreeSet::new()),
            next_id: Cell::new(1),
            stats: Rc::new(Cell::new(MockStats::default())),
        }
    }

    pub fn with_l1_line_len(self, len: f64) -> Self {
        let mut view = self.view.get();
        view.l1_line_len = len;
        self.view.set(view);
        self
    }

    /// Pan/zoom to a new vertical range and notify subscribers
    pub fn set_view_range(&self, y_min: f64, y_max: f64) {
        let mut view = self.view.get();
        view.y_min = y_min;
        view.y_max = y_max;
        self.view.set(view);
        self.fire_range_changed();
    }

    /// Resize the view box and notify subscribers
    pub fn set_view_height(&self, height: f64) {
        let mut view = self.view.get();
        view.height = height;
        self.view.set(view);
        self.fire_range_changed();
    }

    /// Run one paint cycle over every visible scene item
    pub fn paint(&self) {
        let items: Vec<_> = self
            .items
            .borrow()
            .values()
            .filter_map(Weak::upgrade)
            .collect();

        for item in items {
            match item.try_borrow_mut() {
                Ok(mut item) if item.is_visible() => item.paint(),
                Ok(_) => {}
                Err(_) => debug!("skipping paint of item already borrowed"),
            }
        }
    }

    pub fn item_count(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn subscription_count(&self) -> usize {
        self.callbacks.borrow().len()
    }

    pub fn stats(&self) -> MockStats {
        self.stats.get()
    }

    fn next_id(&self) -> u64 {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        id
    }

    fn bump(&self, f: impl FnOnce(&mut MockStats)) {
        let mut stats = self.stats.get();
        f(&mut stats);
        self.stats.set(stats);
    }

    fn fire_range_changed(&self) {
        // Callbacks may subscribe or unsubscribe while running, so run them
        // outside the borrow and merge afterwards.
        let mut running = std::mem::take(&mut *self.callbacks.borrow_mut());
        for callback in running.values_mut() {
            callback();
        }

        let mut cancelled = self.cancelled.borrow_mut();
        let mut callbacks = self.callbacks.borrow_mut();
        for (id, callback) in running {
            if !cancelled.remove(&id) {
                callbacks.insert(id, callback);
            }
        }
        cancelled.clear();
    }
}

impl ChartView for MockChart {
    fn view_range_y(&self) -> (f64, f64) {
        let view = self.view.get();
        (view.y_min, view.y_max)
    }

    fn view_height(&self) -> f64 {
        self.view.get().height
    }

    fn map_from_view(&self, point: Point) -> Point {
        let view = self.view.get();
        let span = view.y_max - view.y_min;
        let y = if span.abs() < f64::EPSILON {
            view.height / 2.0
        } else {
            (view.y_max - point.y) / span * view.height
        };
        Point::new(point.x, y)
    }

    fn right_axis_x(&self) -> f64 {
        self.view.get().right_axis_x
    }

    fn l1_line_len(&self) -> f64 {
        self.view.get().l1_line_len
    }

    fn add_item(&self, item: Weak<RefCell<dyn GraphicsItem>>) -> ItemId {
        let id = ItemId(self.next_id());
        self.items.borrow_mut().insert(id, item);
        id
    }

    fn remove_item(&self, id: ItemId) {
        self.items.borrow_mut().remove(&id);
    }

    fn subscribe_range_change(&self, callback: RangeCallback) -> SubscriptionId {
        let id = SubscriptionId(self.next_id());
        self.callbacks.borrow_mut().insert(id, callback);
        id
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        if self.callbacks.borrow_mut().remove(&id).is_none() {
            // may be mid-dispatch in fire_range_changed
            self.cancelled.borrow_mut().insert(id);
        }
    }
}

impl ChartHost for MockChart {
    type Label = MockLabel;
    type Line = MockLine;

    fn make_label(&self, spec: LabelSpec) -> MockLabel {
        self.bump(|s| s.labels_created += 1);
        MockLabel::new(spec)
    }

    fn make_level_line(&self, level: f64, color: Color, opts: LineOptions) -> MockLine {
        self.bump(|s| s.lines_created += 1);
        MockLine {
            id: self.next_id(),
            level,
            color,
            opts,
            visible: false,
            deleted: false,
            stats: Rc::clone(&self.stats),
        }
    }
}

/// Label that lays text out on a fixed character grid
pub struct MockLabel {
    fmt_str: String,
    fields: BTreeMap<String, Value>,
    color: Color,
    update_on_range_change: bool,
    text: String,
    anchor: Option<AnchorRule>,
    pos: Point,
    visible: bool,
}

impl MockLabel {
    pub fn new(spec: LabelSpec) -> Self {
        Self {
            fmt_str: spec.fmt_str,
            fields: spec.fields,
            color: spec.color,
            update_on_range_change: spec.update_on_range_change,
            text: String::new(),
            anchor: None,
            pos: Point::ORIGIN,
            visible: false,
        }
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    pub fn has_anchor(&self) -> bool {
        self.anchor.is_some()
    }
}

impl Label for MockLabel {
    fn set_field(&mut self, name: &str, value: Value) {
        self.fields.insert(name.to_string(), value);
    }

    fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    fn render(&mut self) {
        self.text = format_fields(&self.fmt_str, &self.fields);
        self.update();
    }

    fn text(&self) -> &str {
        &self.text
    }

    fn set_anchor(&mut self, rule: AnchorRule) {
        self.anchor = Some(rule);
    }

    fn update(&mut self) {
        if let Some(anchor) = &self.anchor {
            self.pos = anchor(self.size());
        }
    }

    fn pos(&self) -> Point {
        self.pos
    }

    fn size(&self) -> Size {
        let lines: Vec<&str> = self.text.lines().collect();
        let widest = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        Size::new(widest as f64 * CHAR_WIDTH, lines.len() as f64 * LINE_HEIGHT)
    }

    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn updates_on_range_change(&self) -> bool {
        self.update_on_range_change
    }
}

/// Level line recording its options and lifecycle
#[derive(Debug)]
pub struct MockLine {
    id: u64,
    level: f64,
    color: Color,
    opts: LineOptions,
    visible: bool,
    deleted: bool,
    stats: Rc<Cell<MockStats>>,
}

impl MockLine {
    /// Unique per chart; lets tests tell line objects apart
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn options(&self) -> LineOptions {
        self.opts
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted
    }
}

impl LevelLine for MockLine {
    fn level(&self) -> f64 {
        self.level
    }

    fn set_level(&mut self, level: f64) {
        assert!(!self.deleted, "set_level on a deleted line");
        self.level = level;
    }

    fn show(&mut self) {
        assert!(!self.deleted, "show on a deleted line");
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
    }

    fn is_visible(&self) -> bool {
        self.visible
    }

    fn delete(&mut self) {
        if !self.deleted {
            self.deleted = true;
            self.visible = false;
            let mut stats = self.stats.get();
            stats.lines_deleted += 1;
            self.stats.set(stats);
        }
    }

    fn color(&self) -> Color {
        self.color.clone()
    }
}

//! Position tracker
//!
//! Owns a [`Position`] snapshot together with its level marker, level line
//! and labels, and keeps all of them consistent as position messages arrive.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info};
use serde::Serialize;
use serde_json::Value;

use super::anchors::gpath_pin;
use super::marker::{LevelFn, LevelMarker, MarkerStyle};
use crate::config::OverlayConfig;
use crate::host::{ChartHost, ChartView, Color, Label, LabelSpec, LevelLine, LineOptions, Point};
use crate::position::{FillRecord, Position, PositionMsg};

/// Presence of the position's level line
///
/// `Active` exactly when the tracked size is non-zero.
#[derive(Debug)]
pub enum LineState<L> {
    NoLine,
    Active(L),
}

impl<L: LevelLine> LineState<L> {
    pub fn is_active(&self) -> bool {
        matches!(self, LineState::Active(_))
    }

    /// Line level, 0 without a line
    pub fn level(&self) -> f64 {
        match self {
            LineState::Active(line) => line.level(),
            LineState::NoLine => 0.0,
        }
    }

    pub fn line(&self) -> Option<&L> {
        match self {
            LineState::Active(line) => Some(line),
            LineState::NoLine => None,
        }
    }
}

/// Serializable view of everything the tracker draws
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrackerSnapshot {
    pub symbol: String,
    pub size: f64,
    pub avg_price: f64,
    pub fills: usize,
    pub line_level: Option<f64>,
    pub line_visible: bool,
    pub marker_style: Option<MarkerStyle>,
    pub marker_level: f64,
    pub marker_pos: Point,
    pub marker_visible: bool,
    pub pp_label_pos: Point,
    pub pp_label_visible: bool,
    pub size_text: String,
    pub size_label_pos: Point,
    pub size_label_visible: bool,
}

/// Track and display a real-time position for a single symbol on a chart
pub struct PositionTracker<H: ChartHost + 'static> {
    chart: Rc<H>,
    config: OverlayConfig,
    info: Position,
    marker: Rc<RefCell<LevelMarker>>,
    line: Rc<RefCell<LineState<H::Line>>>,
    /// literally "pp", pinned to the marker
    pp_label: Rc<RefCell<H::Label>>,
    /// entry size, right of `pp_label`
    size_label: Rc<RefCell<H::Label>>,
}

impl<H: ChartHost + 'static> PositionTracker<H> {
    /// Create a tracker with default overlay settings
    pub fn new(chart: Rc<H>, symbol: impl Into<String>) -> Self {
        Self::with_config(chart, symbol, OverlayConfig::default())
    }

    /// Create a tracker for a flat position; nothing is visible until the
    /// first non-zero update.
    pub fn with_config(chart: Rc<H>, symbol: impl Into<String>, config: OverlayConfig) -> Self {
        let line = Rc::new(RefCell::new(LineState::NoLine));

        // placeholder "up" arrow
        let marker = Self::build_marker(&chart, &config, &line, 1.0);

        let color = Color::new(config.color.clone());
        let pp_label = Rc::new(RefCell::new(
            chart.make_label(LabelSpec::new("pp", color.clone()).static_anchor()),
        ));
        let size_label = Rc::new(RefCell::new(chart.make_label(
            LabelSpec::new("x{entry_size}", color).with_field("entry_size", 0),
        )));

        let tracker = Self {
            chart,
            config,
            info: Position::new(symbol),
            marker,
            line,
            pp_label,
            size_label,
        };

        tracker.pin_pp_label();
        tracker.pp_label.borrow_mut().render();

        let pp = Rc::downgrade(&tracker.pp_label);
        {
            let mut size_label = tracker.size_label.borrow_mut();
            size_label.set_anchor(Box::new(move |_| match pp.upgrade() {
                Some(pp) => {
                    let pp = pp.borrow();
                    pp.pos() + Point::new(pp.size().w, 0.0)
                }
                None => Point::ORIGIN,
            }));
            size_label.render();
        }

        tracker.hide();
        debug!("position tracker created for {}", tracker.info.symbol);
        tracker
    }

    /// Apply a broker position update to the snapshot and every graphic
    pub fn update(&mut self, msg: &PositionMsg) {
        let (avg_price, size) = (msg.avg_price, msg.size);
        self.info.apply(msg);

        self.update_line(avg_price, size);

        {
            let mut size_label = self.size_label.borrow_mut();
            size_label.set_field("entry_size", Value::from(size));
            size_label.render();
        }

        if size == 0.0 {
            self.hide();
        } else {
            {
                let mut marker = self.marker.borrow_mut();
                marker.set_level(avg_price);
                marker.update();
            }
            self.show();
        }
    }

    /// Drive the level line state machine for a new price and size
    pub fn update_line(&mut self, price: f64, size: f64) {
        let active = self.line.borrow().is_active();

        match (active, size != 0.0) {
            (false, true) => {
                let mut line = self.position_line(size, price);
                line.show();
                *self.line.borrow_mut() = LineState::Active(line);
                info!("{}: pp line created at {}", self.info.symbol, price);
            }
            (true, true) => {
                if let LineState::Active(line) = &mut *self.line.borrow_mut() {
                    line.set_level(price);
                    line.show();
                }
                let mut marker = self.marker.borrow_mut();
                if let Some(style) = MarkerStyle::from_size(size) {
                    marker.set_style(style);
                }
                marker.set_level(price);
                marker.update();
                debug!("{}: pp line moved to {}", self.info.symbol, price);
            }
            (true, false) => {
                let old = std::mem::replace(&mut *self.line.borrow_mut(), LineState::NoLine);
                if let LineState::Active(mut line) = old {
                    line.delete();
                }
                info!("{}: position flat, pp line removed", self.info.symbol);
            }
            (false, false) => {}
        }
    }

    /// Build the level line for a new position and bind the marker to it
    pub fn position_line(&mut self, size: f64, level: f64) -> H::Line {
        let mut line = self
            .chart
            .make_level_line(level, self.color(), Self::line_options());

        {
            let mut marker = self.marker.borrow_mut();
            if let Some(style) = MarkerStyle::from_size(size) {
                marker.set_style(style);
            }

            // marker takes the line's color
            let color = line.color();
            marker.set_pen(color.clone());
            marker.set_brush(color);
            marker.set_level(level);
            marker.update();
            marker.show();
        }

        // show the marker on the view edge when out of view
        LevelMarker::connect_range_change(&self.marker);

        line.set_level(level);
        line
    }

    /// Rebuild the marker glyph for `size`, replacing the current one
    pub fn level_marker(&mut self, size: f64) {
        self.marker.borrow_mut().delete();
        self.marker = Self::build_marker(&self.chart, &self.config, &self.line, size);
        self.pin_pp_label();

        let line_color = self.line.borrow().line().map(|line| line.color());
        if let Some(color) = line_color {
            {
                let mut marker = self.marker.borrow_mut();
                marker.set_pen(color.clone());
                marker.set_brush(color);
                marker.set_level(self.info.avg_price);
            }
            LevelMarker::connect_range_change(&self.marker);
        }
    }

    /// Show everything, unless the position is flat
    pub fn show(&self) {
        if self.info.size == 0.0 {
            return;
        }

        if let LineState::Active(line) = &mut *self.line.borrow_mut() {
            line.show();
        }
        self.marker.borrow_mut().show();
        self.pp_label.borrow_mut().show();
        self.size_label.borrow_mut().show();
    }

    /// Hide marker, labels and line
    pub fn hide(&self) {
        self.pp_label.borrow_mut().hide();
        self.marker.borrow_mut().hide();
        self.size_label.borrow_mut().hide();
        if let LineState::Active(line) = &mut *self.line.borrow_mut() {
            line.hide();
        }
    }

    /// Hide position details, leaving the marker and line up
    pub fn hide_info(&self) {
        self.size_label.borrow_mut().hide();
    }

    /// Current line level, 0 without a line; the marker reads this
    pub fn level(&self) -> f64 {
        self.line.borrow().level()
    }

    /// Anchor point just left of the marker, offset by the size label width.
    /// Not wired to any label yet.
    pub fn align_to_marker(&self) -> Point {
        if !self.line.borrow().is_active() {
            return Point::ORIGIN;
        }

        let mkr_pos = self.marker.borrow().pos();
        let w = self.size_label.borrow().size().w;
        Point::new(mkr_pos.x - w, mkr_pos.y)
    }

    /// Append an execution record to the position history
    pub fn record_fill(&mut self, fill: FillRecord) {
        debug!(
            "{}: fill {} {} @ {}",
            self.info.symbol, fill.oid, fill.size, fill.price
        );
        self.info.push_fill(fill);
    }

    pub fn info(&self) -> &Position {
        &self.info
    }

    pub fn symbol(&self) -> &str {
        &self.info.symbol
    }

    pub fn chart(&self) -> &Rc<H> {
        &self.chart
    }

    pub fn marker(&self) -> Ref<'_, LevelMarker> {
        self.marker.borrow()
    }

    pub fn pp_label(&self) -> Ref<'_, H::Label> {
        self.pp_label.borrow()
    }

    pub fn size_label(&self) -> Ref<'_, H::Label> {
        self.size_label.borrow()
    }

    pub fn has_line(&self) -> bool {
        self.line.borrow().is_active()
    }

    /// Run `f` against the level line if one exists
    pub fn with_line<R>(&self, f: impl FnOnce(&H::Line) -> R) -> Option<R> {
        self.line.borrow().line().map(f)
    }

    pub fn snapshot(&self) -> TrackerSnapshot {
        let line = self.line.borrow();
        let marker = self.marker.borrow();
        let pp_label = self.pp_label.borrow();
        let size_label = self.size_label.borrow();

        TrackerSnapshot {
            symbol: self.info.symbol.clone(),
            size: self.info.size,
            avg_price: self.info.avg_price,
            fills: self.info.fills.len(),
            line_level: line.line().map(|l| l.level()),
            line_visible: line.line().is_some_and(|l| l.is_visible()),
            marker_style: marker.style(),
            marker_level: marker.level(),
            marker_pos: marker.pos(),
            marker_visible: marker.is_visible(),
            pp_label_pos: pp_label.pos(),
            pp_label_visible: pp_label.is_visible(),
            size_text: size_label.text().to_string(),
            size_label_pos: size_label.pos(),
            size_label_visible: size_label.is_visible(),
        }
    }

    fn color(&self) -> Color {
        Color::new(self.config.color.clone())
    }

    fn line_options() -> LineOptions {
        LineOptions {
            // labels are drawn by the tracker itself
            add_label: false,
            hl_on_hover: false,
            movable: false,
            hide_xhair_on_hover: false,
            use_marker_margin: true,
            only_show_markers_on_hover: false,
            always_show_labels: true,
        }
    }

    fn level_accessor(line: &Rc<RefCell<LineState<H::Line>>>) -> LevelFn {
        let line = Rc::downgrade(line);
        Box::new(move || line.upgrade().map_or(0.0, |line| line.borrow().level()))
    }

    fn build_marker(
        chart: &Rc<H>,
        config: &OverlayConfig,
        line: &Rc<RefCell<LineState<H::Line>>>,
        size: f64,
    ) -> Rc<RefCell<LevelMarker>> {
        let style = MarkerStyle::from_size(size);
        let view: Rc<dyn ChartView> = chart.clone();

        let marker = Rc::new(RefCell::new(LevelMarker::new(
            view,
            style,
            Self::level_accessor(line),
            config.arrow_size(),
            config.keep_in_view,
        )));

        LevelMarker::add_to_scene(&marker);
        if style.is_some() {
            marker.borrow_mut().show();
        }
        marker
    }

    fn pin_pp_label(&self) {
        let geometry = self.marker.borrow().geometry();
        let pin = self.config.pin;
        self.pp_label
            .borrow_mut()
            .set_anchor(Box::new(move |size| gpath_pin(geometry.get().bounds, size, pin)));

        // size_label anchors off pp_label, so it is linked second
        let pp: Rc<RefCell<dyn Label>> = self.pp_label.clone();
        let size: Rc<RefCell<dyn Label>> = self.size_label.clone();
        let mut marker = self.marker.borrow_mut();
        marker.clear_labels();
        marker.link_label(Rc::downgrade(&pp));
        if self.size_label.borrow().updates_on_range_change() {
            marker.link_label(Rc::downgrade(&size));
        }
    }
}

impl<H: ChartHost + 'static> Drop for PositionTracker<H> {
    fn drop(&mut self) {
        if let Ok(mut marker) = self.marker.try_borrow_mut() {
            marker.delete();
        }
        if let Ok(mut line) = self.line.try_borrow_mut() {
            if let LineState::Active(l) = &mut *line {
                l.delete();
            }
            *line = LineState::NoLine;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::mock::{MockChart, MockLine};
    use crate::overlay::PinLocation;

    const ARROW: f64 = 22.0;

    fn chart() -> Rc<MockChart> {
        Rc::new(MockChart::new(10.0, 100.0, 400.0, 1000.0))
    }

    fn tracker() -> (Rc<MockChart>, PositionTracker<MockChart>) {
        let chart = chart();
        let tracker = PositionTracker::new(chart.clone(), "X");
        (chart, tracker)
    }

    fn visibility(t: &PositionTracker<MockChart>) -> (bool, bool, bool, bool) {
        let s = t.snapshot();
        (
            s.marker_visible,
            s.line_visible,
            s.pp_label_visible,
            s.size_label_visible,
        )
    }

    fn line_id(t: &PositionTracker<MockChart>) -> Option<u64> {
        t.with_line(MockLine::id)
    }

    #[test]
    fn test_new_tracker_is_flat_and_hidden() {
        let (chart, t) = tracker();
        assert_eq!(t.symbol(), "X");
        assert!(t.info().is_flat());
        assert!(!t.has_line());
        assert_eq!(t.level(), 0.0);
        assert_eq!(visibility(&t), (false, false, false, false));

        // marker exists and is in the scene even while hidden
        assert_eq!(chart.item_count(), 1);
        assert_eq!(t.marker().style(), Some(MarkerStyle::Up));
        assert_eq!(t.pp_label().text(), "pp");
        assert_eq!(t.size_label().text(), "x0");
        assert_eq!(chart.stats().labels_created, 2);
    }

    #[test]
    fn test_long_then_flat_scenario() {
        let (chart, mut t) = tracker();

        t.update(&PositionMsg::new(100.0, 5.0));
        assert!(t.has_line());
        assert_eq!(t.with_line(|l| l.level()), Some(100.0));
        assert_eq!(t.marker().style(), Some(MarkerStyle::Up));
        assert_eq!(t.marker().level(), 100.0);
        assert_eq!(t.size_label().text(), "x5");
        assert_eq!(visibility(&t), (true, true, true, true));
        assert_eq!(chart.stats().lines_created, 1);

        t.update(&PositionMsg::new(100.0, 0.0));
        assert!(!t.has_line());
        assert_eq!(chart.stats().lines_deleted, 1);
        assert_eq!(visibility(&t), (false, false, false, false));
    }

    #[test]
    fn test_short_reuses_line() {
        let (chart, mut t) = tracker();

        t.update(&PositionMsg::new(50.0, -3.0));
        let first = line_id(&t);
        assert_eq!(t.marker().style(), Some(MarkerStyle::Down));

        t.update(&PositionMsg::new(52.0, -3.0));
        assert_eq!(line_id(&t), first);
        assert_eq!(t.level(), 52.0);
        assert_eq!(t.marker().level(), 52.0);
        assert_eq!(t.marker().style(), Some(MarkerStyle::Down));
        assert_eq!(chart.stats().lines_created, 1);
    }

    #[test]
    fn test_repeated_update_is_idempotent() {
        let (chart, mut t) = tracker();
        let msg = PositionMsg::new(75.0, 2.0);

        t.update(&msg);
        let before = t.snapshot();
        let id = line_id(&t);

        t.update(&msg);
        assert_eq!(t.snapshot(), before);
        assert_eq!(line_id(&t), id);
        assert_eq!(chart.stats().lines_created, 1);
    }

    #[test]
    fn test_line_invariants_hold_over_sequence() {
        let (chart, mut t) = tracker();
        let steps = [
            (0.0, 0.0),
            (20.0, 3.0),
            (21.0, 3.0),
            (22.0, -2.0),
            (22.0, 0.0),
            (0.0, 0.0),
            (30.0, 1.0),
            (31.0, -1.0),
            (31.0, 0.0),
        ];

        for (avg_price, size) in steps {
            t.update(&PositionMsg::new(avg_price, size));

            assert_eq!(t.has_line(), size != 0.0, "line presence at size {size}");
            if size != 0.0 {
                assert_eq!(t.level(), avg_price);
                assert_eq!(t.marker().level(), avg_price);
                assert_eq!(t.marker().style(), MarkerStyle::from_size(size));
            }
        }

        // one line per non-zero run
        assert_eq!(chart.stats().lines_created, 2);
        assert_eq!(chart.stats().lines_deleted, 2);
    }

    #[test]
    fn test_flip_without_flat_changes_direction() {
        let (_chart, mut t) = tracker();
        t.update(&PositionMsg::new(40.0, 4.0));
        let id = line_id(&t);

        t.update(&PositionMsg::new(41.0, -4.0));
        assert_eq!(line_id(&t), id);
        assert_eq!(t.marker().style(), Some(MarkerStyle::Down));
    }

    #[test]
    fn test_show_when_flat_is_noop() {
        let (_chart, t) = tracker();
        let before = visibility(&t);
        t.show();
        assert_eq!(visibility(&t), before);
    }

    #[test]
    fn test_hide_always_hides() {
        let (_chart, mut t) = tracker();
        t.update(&PositionMsg::new(60.0, 1.0));
        assert_eq!(visibility(&t), (true, true, true, true));

        t.hide();
        assert_eq!(visibility(&t), (false, false, false, false));
        assert!(t.has_line());

        t.show();
        assert_eq!(visibility(&t), (true, true, true, true));
    }

    #[test]
    fn test_hide_info_only_hides_size_label() {
        let (_chart, mut t) = tracker();
        t.update(&PositionMsg::new(60.0, 1.0));
        t.hide_info();
        assert_eq!(visibility(&t), (true, true, true, false));
    }

    #[test]
    fn test_line_built_with_pp_options_and_color() {
        let (_chart, mut t) = tracker();
        t.update(&PositionMsg::new(60.0, 1.0));

        let opts = t.with_line(MockLine::options).unwrap();
        assert!(!opts.add_label);
        assert!(!opts.hl_on_hover);
        assert!(!opts.movable);
        assert!(!opts.hide_xhair_on_hover);
        assert!(opts.use_marker_margin);
        assert!(!opts.only_show_markers_on_hover);
        assert!(opts.always_show_labels);

        let color = t.with_line(|l| l.color()).unwrap();
        assert_eq!(t.marker().pen(), Some(&color));
        assert_eq!(t.marker().brush(), Some(&color));
    }

    #[test]
    fn test_marker_pins_off_screen_and_follows_range_changes() {
        let (chart, mut t) = tracker();
        t.update(&PositionMsg::new(150.0, 2.0));
        assert_eq!(t.marker().height(), ARROW);
        assert_eq!(t.marker().pos().y, ARROW / 3.0);

        chart.set_view_range(100.0, 200.0);
        let mapped = chart.map_from_view(Point::new(0.0, 150.0)).y;
        assert_eq!(t.marker().pos().y, mapped);

        chart.set_view_range(200.0, 300.0);
        assert_eq!(t.marker().pos().y, 400.0 - 4.0 / 3.0 * ARROW);

        // one subscription no matter how many lines were created
        t.update(&PositionMsg::new(150.0, 0.0));
        t.update(&PositionMsg::new(150.0, 2.0));
        assert_eq!(chart.subscription_count(), 1);
    }

    #[test]
    fn test_labels_follow_marker() {
        let (chart, mut t) = tracker();
        t.update(&PositionMsg::new(55.0, 3.0));

        let bounds = t.marker().geometry().get().bounds;
        let pp_size = t.pp_label().size();
        assert_eq!(
            t.pp_label().pos(),
            gpath_pin(bounds, pp_size, PinLocation::RightOfPathCentered)
        );
        assert_eq!(
            t.size_label().pos(),
            t.pp_label().pos() + Point::new(pp_size.w, 0.0)
        );

        // pan: both labels are re-anchored by the marker
        chart.set_view_range(40.0, 130.0);
        chart.paint();
        let bounds = t.marker().geometry().get().bounds;
        assert_eq!(
            t.pp_label().pos(),
            gpath_pin(bounds, pp_size, PinLocation::RightOfPathCentered)
        );
        assert_eq!(
            t.size_label().pos(),
            t.pp_label().pos() + Point::new(pp_size.w, 0.0)
        );
    }

    #[test]
    fn test_size_label_follows_pan_and_pin() {
        let (chart, mut t) = tracker();
        t.update(&PositionMsg::new(55.0, 3.0));
        let before = t.snapshot().size_label_pos;

        // zoom without a position update
        chart.set_view_range(40.0, 130.0);
        let s = t.snapshot();
        assert_ne!(s.size_label_pos, before);
        let pp_w = t.pp_label().size().w;
        assert_eq!(s.size_label_pos, s.pp_label_pos + Point::new(pp_w, 0.0));

        // level scrolled off the top: labels ride the pinned marker
        chart.set_view_range(0.0, 50.0);
        let s = t.snapshot();
        assert_eq!(s.marker_pos.y, ARROW / 3.0);
        assert_eq!(s.size_label_pos, s.pp_label_pos + Point::new(pp_w, 0.0));

        // still follows after a glyph rebuild
        t.level_marker(3.0);
        chart.set_view_range(60.0, 150.0);
        let s = t.snapshot();
        assert_eq!(s.size_label_pos, s.pp_label_pos + Point::new(pp_w, 0.0));
    }

    #[test]
    fn test_align_to_marker() {
        let (_chart, mut t) = tracker();
        assert_eq!(t.align_to_marker(), Point::ORIGIN);

        t.update(&PositionMsg::new(55.0, 3.0));
        let pos = t.marker().pos();
        let w = t.size_label().size().w;
        assert_eq!(t.align_to_marker(), Point::new(pos.x - w, pos.y));
    }

    #[test]
    fn test_level_marker_rebuild_replaces_glyph() {
        let (chart, mut t) = tracker();
        t.update(&PositionMsg::new(55.0, -3.0));
        let old_item = t.marker().item_id();

        t.level_marker(-3.0);
        assert_eq!(chart.item_count(), 1);
        assert_ne!(t.marker().item_id(), old_item);
        assert_eq!(t.marker().style(), Some(MarkerStyle::Down));
        assert_eq!(t.marker().level(), 55.0);
        assert!(t.marker().is_subscribed());
        assert_eq!(chart.subscription_count(), 1);

        // relinked: range changes move the pp label with the new glyph
        chart.set_view_range(60.0, 150.0);
        let bounds = t.marker().geometry().get().bounds;
        let size = t.pp_label().size();
        assert_eq!(
            t.pp_label().pos(),
            gpath_pin(bounds, size, PinLocation::RightOfPathCentered)
        );
    }

    #[test]
    fn test_level_marker_flat_has_no_direction() {
        let (_chart, mut t) = tracker();
        t.level_marker(0.0);
        assert_eq!(t.marker().style(), None);
        assert!(!t.marker().is_visible());

        t.update(&PositionMsg::new(20.0, 1.0));
        assert_eq!(t.marker().style(), Some(MarkerStyle::Up));
        assert!(t.marker().is_visible());
    }

    #[test]
    fn test_record_fill_appends() {
        let (_chart, mut t) = tracker();
        t.record_fill(FillRecord::new(1.0, 10.0));
        t.record_fill(FillRecord::new(2.0, 12.0));
        assert_eq!(t.info().fills.len(), 2);
        assert_eq!(t.snapshot().fills, 2);
    }

    #[test]
    fn test_custom_config_sizes_marker() {
        let chart = chart();
        let config = OverlayConfig {
            font_size_px: 8.0,
            color: "pp_green".to_string(),
            ..OverlayConfig::default()
        };
        let mut t = PositionTracker::with_config(chart, "Y", config);
        t.update(&PositionMsg::new(50.0, 1.0));

        assert_eq!(t.marker().height(), 11.0);
        assert_eq!(t.with_line(|l| l.color()), Some(Color::new("pp_green")));
    }

    #[test]
    fn test_drop_cleans_up_scene() {
        let chart = chart();
        {
            let mut t = PositionTracker::new(chart.clone(), "X");
            t.update(&PositionMsg::new(50.0, 1.0));
            assert_eq!(chart.item_count(), 1);
            assert_eq!(chart.subscription_count(), 1);
        }
        assert_eq!(chart.item_count(), 0);
        assert_eq!(chart.subscription_count(), 0);
        assert_eq!(chart.stats().lines_deleted, 1);
    }
}

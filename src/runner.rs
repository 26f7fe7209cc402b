use std::io::BufRead;
use std::path::Path;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::Deserialize;
use uuid::Uuid;

use crate::config::Settings;
use crate::errors::{OverlayError, OverlayResult};
use crate::host::mock::MockChart;
use crate::overlay::{PositionTracker, TrackerSnapshot};
use crate::position::{FillRecord, PositionMsg};

/// One line of a replay file
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    /// Broker position update
    Position(PositionMsg),
    /// Execution record appended to the position history
    Fill {
        size: f64,
        price: f64,
        #[serde(default)]
        oid: Option<Uuid>,
        #[serde(default)]
        time: Option<DateTime<Utc>>,
    },
    /// Pan/zoom the view to a new vertical range
    View { y_min: f64, y_max: f64 },
    /// Plain paint cycle
    Paint,
}

/// Replays position and view events through a tracker on a headless chart
pub struct ReplayRunner {
    config: Settings,
}

impl ReplayRunner {
    /// Create a new runner from a configuration file
    pub fn new(config_path: impl AsRef<Path>) -> OverlayResult<Self> {
        let config = Settings::new(&config_path.as_ref().to_string_lossy())?;
        Ok(Self { config })
    }

    pub fn from_settings(config: Settings) -> Self {
        Self { config }
    }

    pub fn settings(&self) -> &Settings {
        &self.config
    }

    /// Initialise env_logger, defaulting RUST_LOG to the configured level
    pub fn init_logging(&self) {
        env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(self.config.log.level.as_str()),
        )
        .try_init()
        .ok();
    }

    /// Run every event in `input` and return one snapshot per applied event
    ///
    /// Blank lines and lines starting with `#` are skipped.
    pub fn run<R: BufRead>(&self, symbol: &str, input: R) -> OverlayResult<Vec<TrackerSnapshot>> {
        let view = &self.config.view;
        let chart = Rc::new(
            MockChart::new(view.y_min, view.y_max, view.height, view.right_axis_x)
                .with_l1_line_len(view.l1_line_len),
        );
        let mut tracker =
            PositionTracker::with_config(chart.clone(), symbol, self.config.overlay.clone());

        info!("Replaying events for {}...", symbol);
        let mut snapshots = Vec::new();

        for (idx, line) in input.lines().enumerate() {
            let line_no = idx + 1;
            let line = line?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let event: ReplayEvent = serde_json::from_str(line).map_err(|source| {
                OverlayError::Json {
                    line: line_no,
                    source,
                }
            })?;

            match event {
                ReplayEvent::Position(msg) => {
                    if let Some(other) = msg.symbol.as_deref().filter(|s| *s != symbol) {
                        warn!("line {}: skipping position for {}", line_no, other);
                        continue;
                    }
                    tracker.update(&msg);
                }
                ReplayEvent::Fill {
                    size,
                    price,
                    oid,
                    time,
                } => {
                    let mut fill = FillRecord::new(size, price);
                    if let Some(oid) = oid {
                        fill.oid = oid;
                    }
                    if let Some(time) = time {
                        fill.time = time;
                    }
                    tracker.record_fill(fill);
                }
                ReplayEvent::View { y_min, y_max } => {
                    if y_min >= y_max {
                        return Err(OverlayError::InvalidEvent {
                            line: line_no,
                            reason: format!("empty view range [{}, {}]", y_min, y_max),
                        });
                    }
                    chart.set_view_range(y_min, y_max);
                }
                ReplayEvent::Paint => {}
            }

            chart.paint();
            let snapshot = tracker.snapshot();
            debug!("line {}: {:?}", line_no, snapshot);
            snapshots.push(snapshot);
        }

        info!("Replay finished: {} snapshots", snapshots.len());
        Ok(snapshots)
    }
}

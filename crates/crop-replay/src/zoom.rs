//! Turns a horizontal selection on a time-series graph into a time range.
//!

use crop_selection::{Bounds, Rect, SelectionEvent, SelectionListener};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Pixels between the left edge of the graph image and its plot area.
pub const DEFAULT_LEFT_MARGIN: i32 = 50;

/// Width in pixels of the plot area.
pub const DEFAULT_USABLE_WIDTH: i32 = 596;

/// Graph windows are addressed in whole minutes.
const SECONDS_PER_MINUTE: i64 = 60;

/// The time window currently shown by a graph, in Unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphZoom {
    /// Time at the left edge of the plot area.
    pub start: i64,
    /// Time at the right edge of the plot area.
    pub end: i64,
    /// Pixels before the plot area starts.
    #[serde(default = "default_left_margin")]
    pub left_margin: i32,
    /// Width of the plot area.
    #[serde(default = "default_usable_width")]
    pub usable_width: i32,
}

fn default_left_margin() -> i32 {
    DEFAULT_LEFT_MARGIN
}

fn default_usable_width() -> i32 {
    DEFAULT_USABLE_WIDTH
}

/// A span of time in Unix seconds, whole minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeRange {
    /// First second of the range.
    pub start: i64,
    /// Last second of the range.
    pub end: i64,
}

impl GraphZoom {
    /// A window from `start` to `end` with the default graph margins.
    pub fn new(start: i64, end: i64) -> Self {
        Self {
            start,
            end,
            left_margin: DEFAULT_LEFT_MARGIN,
            usable_width: DEFAULT_USABLE_WIDTH,
        }
    }

    /// The time range covered by the selection's x extent, `None` if nothing is selected.
    pub fn time_range(&self, rect: Rect) -> Option<TimeRange> {
        if rect.is_empty() || self.usable_width <= 0 {
            return None;
        }

        Some(TimeRange {
            start: self.time_at(rect.x1),
            end: self.time_at(rect.x2),
        })
    }

    /// The time under pixel `x`, floored to the minute.
    fn time_at(&self, x: i32) -> i64 {
        let span = self.end - self.start;
        let offset = (i64::from(x) - i64::from(self.left_margin)) * span;
        let time = self.start + offset.div_euclid(i64::from(self.usable_width));

        time - time.rem_euclid(SECONDS_PER_MINUTE)
    }
}

/// Listener that zooms into every completed selection.
///
/// Each zoom narrows the window the next selection is measured against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoomListener {
    zoom: GraphZoom,
    ranges: Vec<TimeRange>,
}

impl ZoomListener {
    /// Starts from the window `zoom` describes.
    pub fn new(zoom: GraphZoom) -> Self {
        Self {
            zoom,
            ranges: Vec::new(),
        }
    }

    /// The window the graph shows now.
    pub fn window(&self) -> TimeRange {
        TimeRange {
            start: self.zoom.start,
            end: self.zoom.end,
        }
    }

    /// Every range zoomed into, oldest first.
    pub fn ranges(&self) -> &[TimeRange] {
        &self.ranges
    }
}

impl SelectionListener for ZoomListener {
    fn on_event(&mut self, event: &SelectionEvent, _bounds: Bounds) {
        let SelectionEvent::Completed(selection) = event else {
            return;
        };

        let Some(range) = self.zoom.time_range(selection.rect) else {
            debug!("Nothing selected, keeping the current window");
            return;
        };

        info!("Zooming to {} - {}", range.start, range.end);
        self.zoom.start = range.start;
        self.zoom.end = range.end;
        self.ranges.push(range);
    }
}

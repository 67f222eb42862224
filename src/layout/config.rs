//! Layout configuration.
//!
//! All sizes are in pixels at zoom 1.0. Every field has a default, so a
//! partial JSON/TOML document deserializes into a complete config.

use serde::{Deserialize, Serialize};

/// Duration-based item classification, from shortest to longest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DurationClass {
    /// Within the first threshold (3 days by default).
    Short,
    /// Within the second threshold (7 days by default).
    Medium,
    /// Longer than every threshold.
    Long,
}

/// Maps items lasting at most `max_days` to `class`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DurationRule {
    /// Inclusive upper bound in days.
    pub max_days: i64,
    /// Class assigned when the bound holds.
    pub class: DurationClass,
}

/// Zoom bounds and step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    /// Smallest zoom factor.
    pub min: f64,
    /// Largest zoom factor.
    pub max: f64,
    /// Multiplier applied per zoom-in (divisor per zoom-out).
    pub step: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min: 0.3,
            max: 3.0,
            step: 1.2,
        }
    }
}

/// Timeline layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of one day.
    pub day_width: f64,
    /// Height of one lane.
    pub lane_height: f64,
    /// Vertical gap between a lane edge and its item bars.
    pub item_padding: f64,
    /// Canvas never narrower than this.
    pub min_canvas_width: f64,
    /// Space reserved above the lanes for the ruler.
    pub header_height: f64,
    /// Bars are drawn at least this many days wide.
    pub min_item_days: i64,
    /// Checked in order; the first matching rule wins.
    pub duration_rules: Vec<DurationRule>,
    /// Zoom bounds.
    pub zoom: ZoomConfig,
    /// Every ruler day is labelled at or above this zoom.
    pub day_label_zoom: f64,
    /// Below `day_label_zoom`, Mondays stay labelled at or above this zoom.
    pub week_label_zoom: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            day_width: 30.0,
            lane_height: 60.0,
            item_padding: 10.0,
            min_canvas_width: 1200.0,
            header_height: 100.0,
            min_item_days: 2,
            duration_rules: vec![
                DurationRule {
                    max_days: 3,
                    class: DurationClass::Short,
                },
                DurationRule {
                    max_days: 7,
                    class: DurationClass::Medium,
                },
            ],
            zoom: ZoomConfig::default(),
            day_label_zoom: 0.6,
            week_label_zoom: 0.4,
        }
    }
}

impl LayoutConfig {
    /// Creates the default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the day width.
    pub fn with_day_width(mut self, px: f64) -> Self {
        self.day_width = px;
        self
    }

    /// Sets the lane height.
    pub fn with_lane_height(mut self, px: f64) -> Self {
        self.lane_height = px;
        self
    }

    /// Sets the vertical gap between a lane edge and its bars.
    pub fn with_item_padding(mut self, px: f64) -> Self {
        self.item_padding = px;
        self
    }

    /// Sets the ruler header height.
    pub fn with_header_height(mut self, px: f64) -> Self {
        self.header_height = px;
        self
    }

    /// Sets the minimum rendered bar width in days.
    pub fn with_min_item_days(mut self, days: i64) -> Self {
        self.min_item_days = days;
        self
    }

    /// Sets the zoom thresholds for day and Monday labels.
    pub fn with_label_zooms(mut self, day_label_zoom: f64, week_label_zoom: f64) -> Self {
        self.day_label_zoom = day_label_zoom;
        self.week_label_zoom = week_label_zoom;
        self
    }

    /// Sets the minimum canvas width.
    pub fn with_min_canvas_width(mut self, px: f64) -> Self {
        self.min_canvas_width = px;
        self
    }

    /// Replaces the duration rules.
    pub fn with_duration_rules(mut self, rules: Vec<DurationRule>) -> Self {
        self.duration_rules = rules;
        self
    }

    /// Sets zoom bounds.
    pub fn with_zoom(mut self, zoom: ZoomConfig) -> Self {
        self.zoom = zoom;
        self
    }

    /// Classifies a duration; anything past every rule is `Long`.
    pub fn classify(&self, duration_days: i64) -> DurationClass {
        self.duration_rules
            .iter()
            .find(|r| duration_days <= r.max_days)
            .map_or(DurationClass::Long, |r| r.class)
    }
}

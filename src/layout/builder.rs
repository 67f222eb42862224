//! Timeline layout derived from a lane assignment.
//!
//! # Geometry
//!
//! Horizontal positions are day offsets from the timeline start scaled by
//! `day_width * zoom`; vertical positions are lane indices scaled by
//! `lane_height`. Ruler ticks cover every day in the timeline bounds.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use tracing::debug;

use super::{DurationClass, LayoutConfig};
use crate::lanes::LaneAssigner;
use crate::models::{DateRange, Item, LaneSet};
use crate::validation::ValidationError;

const MONTH_BLOCK_DAYS: i64 = 30;

/// An item positioned on the timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    /// The source item.
    pub item: Item,
    /// Lane index (0-based).
    pub lane: usize,
    /// Days from the timeline start to the item start.
    pub offset_days: i64,
    /// Inclusive length in days.
    pub duration_days: i64,
    /// Duration classification.
    pub class: DurationClass,
}

/// Pixel rectangle of an item bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemGeometry {
    /// Distance from the canvas's left edge.
    pub left: f64,
    /// Distance from the top of the lane area.
    pub top: f64,
    /// Bar width, never below `min_item_days` days.
    pub width: f64,
    /// Bar height.
    pub height: f64,
}

/// One day column on the ruler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTick {
    /// Calendar day of this column.
    pub date: NaiveDate,
    /// Days from the timeline start.
    pub offset_days: i64,
    /// Monday.
    pub week_start: bool,
    /// First of the month.
    pub month_start: bool,
}

/// Per-lane listing for the lane info view.
#[derive(Debug, Clone, PartialEq)]
pub struct LaneInfo {
    /// Lane index (0-based).
    pub lane: usize,
    /// Items on the lane, in placement order.
    pub entries: Vec<LaneEntry>,
}

/// One row of a [`LaneInfo`].
#[derive(Debug, Clone, PartialEq)]
pub struct LaneEntry {
    /// Item id.
    pub id: String,
    /// Item display name.
    pub name: String,
    /// Item days.
    pub range: DateRange,
    /// Duration classification.
    pub class: DurationClass,
}

/// A fixed-width block in the ruler's month row.
///
/// Blocks are 30 days wide and start at the timeline start, so they do not
/// line up with calendar months.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthTick {
    /// First day of the block.
    pub date: NaiveDate,
    /// Days from the timeline start (a multiple of 30).
    pub offset_days: i64,
}

impl MonthTick {
    /// Header text, e.g. `"Jan 2024"`.
    pub fn label(&self) -> String {
        self.date.format("%b %Y").to_string()
    }
}

/// Lanes plus everything a renderer needs to draw them.
#[derive(Debug, Clone)]
pub struct TimelineLayout {
    config: LayoutConfig,
    lanes: LaneSet,
    bounds: Option<DateRange>,
    items: Vec<PlacedItem>,
}

impl TimelineLayout {
    /// Assigns lanes (touching items conflict) and places every item.
    ///
    /// # Errors
    /// Propagates the assigner's `ValidationError`; no partial layout.
    pub fn build(items: &[Item], config: &LayoutConfig) -> Result<Self, ValidationError> {
        Self::build_with(items, config, &LaneAssigner::new())
    }

    /// Like [`TimelineLayout::build`] with an explicit assigner.
    pub fn build_with(
        items: &[Item],
        config: &LayoutConfig,
        assigner: &LaneAssigner,
    ) -> Result<Self, ValidationError> {
        let lanes = assigner.assign(items)?;
        let bounds = lanes.bounds();

        let placed = match bounds {
            Some(b) => lanes
                .flatten()
                .into_iter()
                .map(|li| {
                    let duration_days = li.item.duration_days();
                    PlacedItem {
                        offset_days: (li.item.start - b.start).num_days(),
                        duration_days,
                        class: config.classify(duration_days),
                        lane: li.lane,
                        item: li.item,
                    }
                })
                .collect(),
            None => Vec::new(),
        };

        debug!(
            items = placed.len(),
            lanes = lanes.len(),
            total_days = bounds.map_or(0, |b| b.days()),
            "built timeline layout"
        );

        Ok(Self {
            config: config.clone(),
            lanes,
            bounds,
            items: placed,
        })
    }

    /// The underlying lane assignment.
    pub fn lanes(&self) -> &LaneSet {
        &self.lanes
    }

    /// Placed items, lane by lane.
    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    /// Earliest start to latest end; `None` for an empty timeline.
    pub fn bounds(&self) -> Option<DateRange> {
        self.bounds
    }

    /// Whether there is nothing to draw.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Days covered by the timeline, inclusive.
    pub fn total_days(&self) -> i64 {
        self.bounds.map_or(0, |b| b.days())
    }

    /// Highest lane index, `None` for an empty timeline.
    pub fn max_lane(&self) -> Option<usize> {
        self.lanes.len().checked_sub(1)
    }

    /// Looks up a placed item by id.
    pub fn find(&self, id: &str) -> Option<&PlacedItem> {
        self.items.iter().find(|p| p.item.id == id)
    }

    /// Canvas width at `zoom`.
    pub fn canvas_width(&self, zoom: f64) -> f64 {
        let content = self.total_days() as f64 * self.config.day_width * zoom;
        content.max(self.config.min_canvas_width)
    }

    /// Canvas height: all lanes plus the ruler header.
    pub fn canvas_height(&self) -> f64 {
        self.lanes.len() as f64 * self.config.lane_height + self.config.header_height
    }

    /// Bar rectangle for a placed item at `zoom`.
    pub fn geometry(&self, placed: &PlacedItem, zoom: f64) -> ItemGeometry {
        let cfg = &self.config;
        let px_per_day = cfg.day_width * zoom;
        let shown_days = placed.duration_days.max(cfg.min_item_days);
        ItemGeometry {
            left: placed.offset_days as f64 * px_per_day,
            top: placed.lane as f64 * cfg.lane_height + cfg.item_padding,
            width: shown_days as f64 * px_per_day,
            height: cfg.lane_height - 2.0 * cfg.item_padding,
        }
    }

    /// One tick per day in the bounds.
    pub fn ruler(&self) -> Vec<DayTick> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        bounds
            .start
            .iter_days()
            .take_while(|d| *d <= bounds.end)
            .enumerate()
            .map(|(i, date)| DayTick {
                date,
                offset_days: i as i64,
                week_start: date.weekday() == Weekday::Mon,
                month_start: date.day() == 1,
            })
            .collect()
    }

    /// Month row blocks: `ceil(total_days / 30)` of them, 30 days apart.
    pub fn month_ticks(&self) -> Vec<MonthTick> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };
        let count = (bounds.days() + MONTH_BLOCK_DAYS - 1) / MONTH_BLOCK_DAYS;
        (0..count)
            .map(|i| {
                let offset_days = i * MONTH_BLOCK_DAYS;
                MonthTick {
                    date: bounds.start + Duration::days(offset_days),
                    offset_days,
                }
            })
            .collect()
    }

    /// Whether a day column carries a label at `zoom`.
    ///
    /// Every day is labelled from `day_label_zoom` up. Below that only month
    /// starts are, plus Mondays from `week_label_zoom` up.
    pub fn shows_label(&self, tick: &DayTick, zoom: f64) -> bool {
        zoom >= self.config.day_label_zoom
            || tick.month_start
            || (tick.week_start && zoom >= self.config.week_label_zoom)
    }

    /// Label text for a day column at `zoom`, `None` when hidden.
    ///
    /// Month starts read `"Jan 01"` when every day is labelled and `"Jan"`
    /// otherwise; other days show the day of month.
    pub fn day_label(&self, tick: &DayTick, zoom: f64) -> Option<String> {
        if !self.shows_label(tick, zoom) {
            return None;
        }
        let pattern = match (tick.month_start, zoom >= self.config.day_label_zoom) {
            (true, true) => "%b %d",
            (true, false) => "%b",
            (false, _) => "%d",
        };
        Some(tick.date.format(pattern).to_string())
    }

    /// Lane-by-lane listing for the lane info view.
    pub fn lane_info(&self) -> Vec<LaneInfo> {
        let mut info: Vec<LaneInfo> = (0..self.lanes.len())
            .map(|lane| LaneInfo {
                lane,
                entries: Vec::new(),
            })
            .collect();

        for placed in &self.items {
            if let (Some(slot), Some(range)) = (info.get_mut(placed.lane), placed.item.range()) {
                slot.entries.push(LaneEntry {
                    id: placed.item.id.clone(),
                    name: placed.item.name.clone(),
                    range,
                    class: placed.class,
                });
            }
        }
        info
    }

    /// Headline for the lane info view, e.g. `"2 lanes for 3 items"`.
    pub fn summary(&self) -> String {
        format!("{} lanes for {} items", self.lanes.len(), self.items.len())
    }
}

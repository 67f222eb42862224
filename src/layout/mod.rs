//! Derived timeline layout.
//!
//! Consumes a lane assignment and produces what a renderer draws: day
//! offsets, duration classes, pixel rectangles, ruler ticks, and the lane
//! info listing. Also holds the small amount of interactive state a
//! timeline view keeps (zoom, selected item).
//!
//! # Defaults
//!
//! | Parameter | Value |
//! |-----------|-------|
//! | Day width | 30 px |
//! | Lane height | 60 px |
//! | Minimum canvas width | 1200 px |
//! | Short / Medium thresholds | 3 / 7 days |
//! | Zoom range | 0.3 .. 3.0, step ×1.2 |
//! | All day labels / Monday labels from zoom | 0.6 / 0.4 |

mod builder;
mod config;
mod view;

pub use builder::{
    DayTick, ItemGeometry, LaneEntry, LaneInfo, MonthTick, PlacedItem, TimelineLayout,
};
pub use config::{DurationClass, DurationRule, LayoutConfig, ZoomConfig};
pub use view::{Selection, Zoom};

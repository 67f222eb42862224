//! Timeline domain models.
//!
//! Provides the input item type, its inclusive calendar-day range, and the
//! lane structures produced by assignment.
//!
//! # Domain Mappings
//!
//! | u-timeline | Project Planning | Operations | Events |
//! |------------|------------------|------------|--------|
//! | Item | Task | Maintenance Window | Booking |
//! | Lane | Gantt Row | Crew Slot | Room |
//! | LaneSet | Gantt Chart | Rota | Floor Plan |

mod item;
mod lane;
mod range;

pub use item::{Item, ItemId, ItemRecord};
pub use lane::{Lane, LaneItem, LaneSet};
pub use range::DateRange;

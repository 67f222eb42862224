//! Calendar-day ranges.
//!
//! # Bounds
//! Both bounds are inclusive: `[2024-01-01, 2024-01-03]` covers three days.
//! Two ranges overlap iff they share at least one calendar day, so ranges
//! that touch (one ends on the day the other starts) overlap.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An inclusive calendar-day interval `[start, end]`.
///
/// Invariant: `start <= end`. Construct through [`DateRange::new`] to have
/// it checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First covered day.
    pub start: NaiveDate,
    /// Last covered day.
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a range, or `None` if `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        (start <= end).then_some(Self { start, end })
    }

    /// A range covering exactly one day.
    pub fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Number of covered days (at least 1).
    #[inline]
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// Whether `day` falls within this range.
    #[inline]
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start <= day && day <= self.end
    }

    /// Whether the two ranges share at least one day.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Whether this range ends strictly before `other` begins.
    #[inline]
    pub fn is_strictly_before(&self, other: &Self) -> bool {
        self.end < other.start
    }

    /// Smallest range covering both.
    pub fn hull(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

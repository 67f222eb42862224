//! Greedy interval-partitioning lane assigner.
//!
//! # Algorithm
//!
//! 1. Validate every item range; reject the whole input on the first bad one.
//! 2. Stable-sort item indices by start date.
//! 3. Keep the last end date of each open lane in an indexed vector.
//! 4. Place each item on the first lane it fits after; otherwise open a lane.
//!
//! # Complexity
//! O(n log n + n * k) where n=items, k=lanes.
//!
//! # Reference
//! Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1: Interval Partitioning

use chrono::NaiveDate;
use tracing::{debug, trace};

use crate::models::{Item, Lane, LaneSet};
use crate::validation::ValidationError;

/// How to treat an item that starts on the day the previous item ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TouchPolicy {
    /// Touching items conflict and go on different lanes.
    ///
    /// An item fits after another only if `start > previous.end`.
    #[default]
    Conflict,
    /// Touching items may share a lane.
    ///
    /// An item fits after another if `start >= previous.end`.
    Share,
}

impl TouchPolicy {
    /// Whether an item starting on `start` fits after a lane ending on `lane_end`.
    #[inline]
    pub fn fits_after(self, lane_end: NaiveDate, start: NaiveDate) -> bool {
        match self {
            TouchPolicy::Conflict => start > lane_end,
            TouchPolicy::Share => start >= lane_end,
        }
    }
}

/// Partitions items into the minimum number of non-overlapping lanes.
///
/// Deterministic: equal inputs produce identical lanes in identical order.
///
/// # Example
///
/// ```
/// use u_timeline::lanes::LaneAssigner;
/// use u_timeline::models::Item;
///
/// let items = vec![
///     Item::parse("A", "2024-01-01", "2024-01-02").unwrap(),
///     Item::parse("B", "2024-01-02", "2024-01-03").unwrap(),
/// ];
///
/// // Touching items conflict by default.
/// let lanes = LaneAssigner::new().assign(&items).unwrap();
/// assert_eq!(lanes.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct LaneAssigner {
    touch_policy: TouchPolicy,
}

impl LaneAssigner {
    /// Creates an assigner where touching items conflict.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the touching-boundary policy.
    pub fn with_touch_policy(mut self, policy: TouchPolicy) -> Self {
        self.touch_policy = policy;
        self
    }

    /// The configured touching-boundary policy.
    pub fn touch_policy(&self) -> TouchPolicy {
        self.touch_policy
    }

    /// Assigns every item to exactly one lane.
    ///
    /// # Errors
    /// `ValidationError` (`InvertedRange`) for the first item, in input order,
    /// whose start is after its end. No partial result is returned.
    pub fn assign(&self, items: &[Item]) -> Result<LaneSet, ValidationError> {
        for item in items {
            if let Err(err) = item.checked_range() {
                debug!(item_id = %item.id, kind = ?err.kind, "rejecting lane assignment input");
                return Err(err);
            }
        }

        // sort_by_key is stable: equal starts keep input order
        let mut order: Vec<usize> = (0..items.len()).collect();
        order.sort_by_key(|&i| items[i].start);

        let mut lane_ends: Vec<NaiveDate> = Vec::new();
        let mut lanes: Vec<Lane> = Vec::new();

        for idx in order {
            let item = &items[idx];
            let slot = lane_ends
                .iter()
                .position(|&end| self.touch_policy.fits_after(end, item.start));

            match slot {
                Some(lane) => {
                    lane_ends[lane] = item.end;
                    lanes[lane].push(item.clone());
                    trace!(item_id = %item.id, lane, "placed item on open lane");
                }
                None => {
                    lane_ends.push(item.end);
                    lanes.push(Lane::starting_with(item.clone()));
                    trace!(item_id = %item.id, lane = lanes.len() - 1, "opened lane");
                }
            }
        }

        debug!(
            items = items.len(),
            lanes = lanes.len(),
            policy = ?self.touch_policy,
            "assigned lanes"
        );

        Ok(LaneSet::from_lanes(lanes))
    }
}

/// Assigns lanes with the default policy (touching items conflict).
///
/// Shorthand for `LaneAssigner::new().assign(items)`.
pub fn assign_lanes(items: &[Item]) -> Result<LaneSet, ValidationError> {
    LaneAssigner::new().assign(items)
}

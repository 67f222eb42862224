//! Lane metrics.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Lane Count | Number of lanes produced |
//! | Item Count | Items placed across all lanes |
//! | Lane Sizes | Items per lane, in lane order |
//! | Max Concurrency | Most items covering one calendar day (clique number) |
//!
//! Greedy start-ordered assignment is optimal iff lane count equals
//! max concurrency.
//!
//! # Reference
//! Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

use chrono::NaiveDate;

use crate::models::{Item, LaneSet};

/// Peak overlap of an interval set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Concurrency {
    /// Maximum number of items covering one day.
    pub count: usize,
    /// First day on which `count` is reached.
    pub day: NaiveDate,
}

/// Computes the maximum number of items covering a single day.
///
/// # Algorithm
/// Sweep over start/end events sorted by date. On the same date starts are
/// processed before ends, since bounds are inclusive. Items with inverted
/// ranges are ignored.
///
/// Returns `None` for an empty input.
pub fn max_concurrency(items: &[Item]) -> Option<Concurrency> {
    // (date, 0 = start / 1 = end)
    let mut events: Vec<(NaiveDate, u8)> = Vec::with_capacity(items.len() * 2);
    for range in items.iter().filter_map(Item::range) {
        events.push((range.start, 0));
        events.push((range.end, 1));
    }
    events.sort_unstable();

    let mut best: Option<Concurrency> = None;
    let mut active: usize = 0;
    for (day, kind) in events {
        if kind == 0 {
            active += 1;
            if best.map_or(true, |b| active > b.count) {
                best = Some(Concurrency { count: active, day });
            }
        } else {
            active -= 1;
        }
    }
    best
}

/// Summary of a lane assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaneStats {
    /// Number of lanes.
    pub lane_count: usize,
    /// Number of placed items.
    pub item_count: usize,
    /// Items per lane.
    pub lane_sizes: Vec<usize>,
    /// Peak overlap of the placed items, `None` when empty.
    pub max_concurrency: Option<Concurrency>,
}

impl LaneStats {
    /// Computes stats for a lane set.
    pub fn calculate(lanes: &LaneSet) -> Self {
        let placed: Vec<Item> = lanes
            .iter()
            .flat_map(|lane| lane.items().iter().cloned())
            .collect();

        Self {
            lane_count: lanes.len(),
            item_count: placed.len(),
            lane_sizes: lanes.iter().map(|lane| lane.len()).collect(),
            max_concurrency: max_concurrency(&placed),
        }
    }

    /// Whether lane count equals max concurrency.
    ///
    /// Always true for the default policy. Under `TouchPolicy::Share` the
    /// count may fall below the inclusive clique number.
    pub fn is_optimal(&self) -> bool {
        self.lane_count == self.max_concurrency.map_or(0, |c| c.count)
    }

    /// Mean items per lane (0.0 when there are no lanes).
    pub fn avg_lane_size(&self) -> f64 {
        if self.lane_count == 0 {
            0.0
        } else {
            self.item_count as f64 / self.lane_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lanes::{assign_lanes, LaneAssigner, TouchPolicy};

    fn item(id: &str, start: &str, end: &str) -> Item {
        Item::parse(id, start, end).unwrap()
    }

    fn d(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn test_concurrency_empty() {
        assert!(max_concurrency(&[]).is_none());
    }

    #[test]
    fn test_concurrency_touching_counts_twice() {
        let items = vec![
            item("A", "2024-01-01", "2024-01-02"),
            item("B", "2024-01-02", "2024-01-03"),
        ];
        let c = max_concurrency(&items).unwrap();
        assert_eq!(c.count, 2);
        assert_eq!(c.day, d("2024-01-02"));
    }

    #[test]
    fn test_concurrency_disjoint() {
        let items = vec![
            item("A", "2024-01-01", "2024-01-02"),
            item("B", "2024-01-03", "2024-01-04"),
            item("C", "2024-01-05", "2024-01-05"),
        ];
        let c = max_concurrency(&items).unwrap();
        assert_eq!(c.count, 1);
        assert_eq!(c.day, d("2024-01-01"));
    }

    #[test]
    fn test_concurrency_nested() {
        let items = vec![
            item("A", "2024-01-01", "2024-01-31"),
            item("B", "2024-01-10", "2024-01-20"),
            item("C", "2024-01-15", "2024-01-15"),
            item("D", "2024-01-21", "2024-01-25"),
        ];
        let c = max_concurrency(&items).unwrap();
        assert_eq!(c.count, 3);
        assert_eq!(c.day, d("2024-01-15"));
    }

    #[test]
    fn test_stats_basic() {
        let items = vec![
            item("A", "2024-01-01", "2024-01-03"),
            item("B", "2024-01-02", "2024-01-04"),
            item("C", "2024-01-05", "2024-01-06"),
        ];
        let stats = LaneStats::calculate(&assign_lanes(&items).unwrap());
        assert_eq!(stats.lane_count, 2);
        assert_eq!(stats.item_count, 3);
        assert_eq!(stats.lane_sizes, vec![2, 1]);
        assert!(stats.is_optimal());
        assert!((stats.avg_lane_size() - 1.5).abs() < 1e-10);
    }

    #[test]
    fn test_stats_empty() {
        let stats = LaneStats::calculate(&LaneSet::new());
        assert_eq!(stats.lane_count, 0);
        assert!(stats.max_concurrency.is_none());
        assert!(stats.is_optimal());
        assert!((stats.avg_lane_size() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_share_policy_beats_inclusive_clique() {
        // Under Share, touching items pack tighter than the inclusive clique
        let items = vec![
            item("A", "2024-01-01", "2024-01-02"),
            item("B", "2024-01-02", "2024-01-03"),
        ];
        let lanes = LaneAssigner::new()
            .with_touch_policy(TouchPolicy::Share)
            .assign(&items)
            .unwrap();
        let stats = LaneStats::calculate(&lanes);
        assert_eq!(stats.lane_count, 1);
        assert!(!stats.is_optimal());
    }
}

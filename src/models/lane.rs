//! Lane (assignment result) model.
//!
//! A lane is an ordered run of pairwise non-overlapping items; a lane set
//! is the ordered collection of lanes produced by one assignment. Lane
//! position is meaningful: index 0 is the top row.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{DateRange, Item};

/// One row of the timeline.
///
/// Items are in ascending start order, and each starts after the previous
/// one ends.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lane {
    items: Vec<Item>,
}

/// An item annotated with the lane it was placed on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaneItem {
    /// The placed item, unmodified.
    #[serde(flatten)]
    pub item: Item,
    /// Lane index (0-based).
    pub lane: usize,
}

/// Ordered lanes returned by one assignment run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LaneSet {
    lanes: Vec<Lane>,
}

impl Lane {
    pub(crate) fn starting_with(item: Item) -> Self {
        Self { items: vec![item] }
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Items in placement order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the lane holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// End date of the last placed item.
    pub fn last_end(&self) -> Option<NaiveDate> {
        self.items.last().map(|i| i.end)
    }

    /// Days spanned from the first item's start to the last item's end.
    pub fn span(&self) -> Option<DateRange> {
        let first = self.items.first()?;
        let last = self.items.last()?;
        DateRange::new(first.start, last.end)
    }

    /// Item ids in placement order.
    pub fn ids(&self) -> Vec<&str> {
        self.items.iter().map(|i| i.id.as_str()).collect()
    }

    /// Whether an item with `id` is on this lane.
    pub fn contains(&self, id: &str) -> bool {
        self.items.iter().any(|i| i.id == id)
    }
}

impl LaneSet {
    /// Creates an empty lane set.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_lanes(lanes: Vec<Lane>) -> Self {
        Self { lanes }
    }

    /// Lanes in order.
    pub fn lanes(&self) -> &[Lane] {
        &self.lanes
    }

    /// Lane at `index`.
    pub fn lane(&self, index: usize) -> Option<&Lane> {
        self.lanes.get(index)
    }

    /// Number of lanes.
    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    /// Whether there are no lanes (only for empty input).
    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Total number of placed items.
    pub fn item_count(&self) -> usize {
        self.lanes.iter().map(Lane::len).sum()
    }

    /// Iterates lanes in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Lane> {
        self.lanes.iter()
    }

    /// Index of the lane holding item `id`.
    pub fn lane_of(&self, id: &str) -> Option<usize> {
        self.lanes.iter().position(|lane| lane.contains(id))
    }

    /// Looks up a placed item by id.
    pub fn find(&self, id: &str) -> Option<&Item> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.items.iter())
            .find(|i| i.id == id)
    }

    /// Flattened view: every item with its lane index, lane by lane.
    pub fn flatten(&self) -> Vec<LaneItem> {
        self.lanes
            .iter()
            .enumerate()
            .flat_map(|(lane, l)| {
                l.items.iter().map(move |item| LaneItem {
                    item: item.clone(),
                    lane,
                })
            })
            .collect()
    }

    /// Range from the earliest start to the latest end, `None` when empty.
    pub fn bounds(&self) -> Option<DateRange> {
        self.lanes
            .iter()
            .flat_map(|lane| lane.items.iter())
            .filter_map(Item::range)
            .reduce(|acc, r| acc.hull(&r))
    }

    /// Consumes the set, returning plain nested vectors.
    pub fn into_inner(self) -> Vec<Vec<Item>> {
        self.lanes.into_iter().map(|l| l.items).collect()
    }
}

impl<'a> IntoIterator for &'a LaneSet {
    type Item = &'a Lane;
    type IntoIter = std::slice::Iter<'a, Lane>;

    fn into_iter(self) -> Self::IntoIter {
        self.lanes.iter()
    }
}

//! Timeline item model.
//!
//! An item is one schedulable unit with an inclusive calendar-day range.
//! Items are never mutated by assignment; lanes hold clones.
//!
//! # Input Forms
//! - [`Item`]: dates already parsed. Serializes dates as `YYYY-MM-DD`.
//! - [`ItemRecord`]: dates as strings, id as number or string. Converted
//!   with `Item::try_from`, which reports unparsable dates and inverted ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::DateRange;
use crate::validation::{parse_date, ValidationError};

/// A calendar-bounded item to be placed on a lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier.
    pub id: String,
    /// Display label. Not used by lane assignment.
    #[serde(default)]
    pub name: String,
    /// First day (inclusive).
    pub start: NaiveDate,
    /// Last day (inclusive).
    pub end: NaiveDate,
    /// Optional free text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Item {
    /// Creates an unnamed item. The range is not checked here; see [`Item::range`].
    pub fn new(id: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            start,
            end,
            description: None,
        }
    }

    /// Creates an item from ISO date strings, checking the range.
    pub fn parse(id: impl Into<String>, start: &str, end: &str) -> Result<Self, ValidationError> {
        let id = id.into();
        let start = parse_date(&id, "start", start)?;
        let end = parse_date(&id, "end", end)?;
        let item = Self::new(id, start, end);
        item.checked_range()?;
        Ok(item)
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// The item's range, or `None` if `start > end`.
    pub fn range(&self) -> Option<DateRange> {
        DateRange::new(self.start, self.end)
    }

    /// The item's range, or an `InvertedRange` error.
    pub fn checked_range(&self) -> Result<DateRange, ValidationError> {
        self.range()
            .ok_or_else(|| ValidationError::inverted_range(&self.id, self.start, self.end))
    }

    /// Inclusive length in days, as [`DateRange::days`]. Zero for inverted ranges.
    pub fn duration_days(&self) -> i64 {
        self.range().map_or(0, |r| r.days())
    }
}

/// Item identifier as it appears in source data: a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ItemId {
    /// Numeric id, e.g. `7`.
    Number(u64),
    /// Textual id, e.g. `"task-7"`.
    Text(String),
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Number(n) => write!(f, "{n}"),
            ItemId::Text(s) => f.write_str(s),
        }
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        match id {
            ItemId::Number(n) => n.to_string(),
            ItemId::Text(s) => s,
        }
    }
}

/// Unparsed item with string dates, as loaded from a data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Identifier (number or string).
    pub id: ItemId,
    /// Display label.
    #[serde(default)]
    pub name: String,
    /// Start date string (`YYYY-MM-DD` or ISO datetime).
    pub start: String,
    /// End date string (`YYYY-MM-DD` or ISO datetime).
    pub end: String,
    /// Optional free text.
    #[serde(default)]
    pub description: Option<String>,
}

impl TryFrom<ItemRecord> for Item {
    type Error = ValidationError;

    fn try_from(record: ItemRecord) -> Result<Self, Self::Error> {
        let id = String::from(record.id);
        let start = parse_date(&id, "start", &record.start)?;
        let end = parse_date(&id, "end", &record.end)?;
        let item = Item {
            id,
            name: record.name,
            start,
            end,
            description: record.description,
        };
        item.checked_range()?;
        Ok(item)
    }
}

//! Timeline lane assignment for the U-Engine ecosystem.
//!
//! Packs calendar-bounded items (tasks with a start and end date) into the
//! minimum number of rows ("lanes") such that no two items in a lane overlap,
//! and derives the geometry a timeline renderer needs from the result.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Item`, `ItemRecord`, `DateRange`, `Lane`,
//!   `LaneSet`, `LaneItem`
//! - **`validation`**: Date parsing and interval checks (`ValidationError`)
//! - **`lanes`**: The greedy interval-partitioning assigner and lane metrics
//! - **`layout`**: Day offsets, duration classes, pixel geometry, ruler ticks,
//!   zoom and selection state
//!
//! # Example
//!
//! ```
//! use u_timeline::lanes::assign_lanes;
//! use u_timeline::models::Item;
//!
//! let items = vec![
//!     Item::parse("A", "2024-01-01", "2024-01-03").unwrap(),
//!     Item::parse("B", "2024-01-02", "2024-01-04").unwrap(),
//!     Item::parse("C", "2024-01-05", "2024-01-06").unwrap(),
//! ];
//! let lanes = assign_lanes(&items).unwrap();
//! assert_eq!(lanes.len(), 2);
//! assert_eq!(lanes.lane_of("C"), Some(0));
//! ```
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1 (Interval Partitioning)
//! - Golumbic (2004), "Algorithmic Graph Theory and Perfect Graphs", Ch. 8

pub mod lanes;
pub mod layout;
pub mod models;
pub mod validation;

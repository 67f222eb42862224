//! Lane assignment and lane metrics.
//!
//! # Algorithm
//!
//! `LaneAssigner` solves interval partitioning greedily: items are visited in
//! ascending start order (stable, so ties keep input order) and each goes on
//! the lowest-indexed lane whose last item ends strictly before it starts. A
//! new lane is opened only when every open lane conflicts. The resulting lane
//! count equals the clique number of the interval set, which is optimal.
//!
//! # Metrics
//!
//! `LaneStats` reports lane count, per-lane sizes and the maximum number of
//! items covering a single day, which lets callers check optimality.
//!
//! # References
//!
//! - Kleinberg & Tardos (2005), "Algorithm Design", Ch. 4.1
//! - Cormen et al. (2009), "Introduction to Algorithms", Problem 16-1

mod assigner;
mod stats;

pub use assigner::{assign_lanes, LaneAssigner, TouchPolicy};
pub use stats::{max_concurrency, Concurrency, LaneStats};

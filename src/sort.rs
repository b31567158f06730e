//! Segment ordering policies.
//!
//! - `policy`: the closed set of ordering modes
//! - `timestamp`: reads the write-time timestamp out of segment diagnostics
//! - `sorter`: builds and caches the comparator for a policy

pub mod policy;
pub mod sorter;
pub mod timestamp;

pub use policy::SegmentSort;
pub use sorter::{LeafComparator, LeafSorter, SegmentTimeLeafSorter, sort_leaves};
pub use timestamp::extract_timestamp;

//! # Segsort
//!
//! Timestamp-driven ordering of index segments for reader construction.
//!
//! ## Features
//!
//! - Closed set of policies: no sort, oldest first, newest first
//! - Lazily built, cached comparator shared across reopen cycles
//! - Segments with missing or corrupt timestamps never block a sort
//! - JSON configuration

pub mod config;
mod error;
pub mod reader;
pub mod segment;
pub mod sort;

// Re-exports for the public API
pub use config::{SegmentSortConfig, SegmentSortConfigBuilder};
pub use error::{Result, SegSortError};
pub use reader::LeafReaderSet;
pub use segment::{SegmentDescriptor, SegmentInfo, TIMESTAMP_DIAGNOSTIC};
pub use sort::{
    LeafComparator, LeafSorter, SegmentSort, SegmentTimeLeafSorter, extract_timestamp,
    sort_leaves,
};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

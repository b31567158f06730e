use std::path::Path;
use std::sync::Arc;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::sort::{LeafSorter, SegmentSort, SegmentTimeLeafSorter};

/// Configuration for segment ordering when opening an index reader.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SegmentSortConfig {
    /// Policy applied to the reader's segments.
    pub segment_sort: SegmentSort,
}

impl SegmentSortConfig {
    pub fn new(segment_sort: SegmentSort) -> Self {
        Self { segment_sort }
    }

    pub fn builder() -> SegmentSortConfigBuilder {
        SegmentSortConfigBuilder::default()
    }

    /// Parse a configuration from JSON. Unknown policy names are rejected.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json_str(&content)?;
        debug!(
            "Loaded segment sort config from {}: {}",
            path.as_ref().display(),
            config.segment_sort
        );
        Ok(config)
    }

    pub fn build_leaf_sorter(&self) -> Arc<dyn LeafSorter> {
        Arc::new(SegmentTimeLeafSorter::new(self.segment_sort))
    }
}

#[derive(Debug, Default)]
pub struct SegmentSortConfigBuilder {
    segment_sort: SegmentSort,
}

impl SegmentSortConfigBuilder {
    pub fn segment_sort(mut self, segment_sort: SegmentSort) -> Self {
        self.segment_sort = segment_sort;
        self
    }

    /// Set the policy from its configured name, e.g. `"time_desc"`.
    pub fn segment_sort_name(mut self, name: &str) -> Result<Self> {
        self.segment_sort = name.parse()?;
        Ok(self)
    }

    pub fn build(self) -> SegmentSortConfig {
        SegmentSortConfig {
            segment_sort: self.segment_sort,
        }
    }
}

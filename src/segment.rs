//! Segment descriptors consumed by the ordering policy.
//!
//! A segment carries free-form string diagnostics written when it was
//! created. Only the [`TIMESTAMP_DIAGNOSTIC`] entry matters for ordering.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Diagnostic key holding the segment's write-time timestamp.
pub const TIMESTAMP_DIAGNOSTIC: &str = "timestamp";

/// Read access to an open segment's identity and diagnostics.
///
/// `diagnostic` returns `Ok(None)` when the key is absent and `Err` when the
/// segment metadata itself cannot be read.
pub trait SegmentDescriptor: Send + Sync {
    /// Segment identifier.
    fn segment_id(&self) -> &str;

    /// Look up a single diagnostic value.
    fn diagnostic(&self, key: &str) -> Result<Option<&str>>;
}

/// Information about a segment as recorded by the write path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SegmentInfo {
    /// Segment identifier.
    pub segment_id: String,

    /// Number of documents in this segment.
    #[serde(default)]
    pub doc_count: u64,

    /// Generation number of this segment.
    #[serde(default)]
    pub generation: u64,

    /// Diagnostics attached at creation time.
    #[serde(default)]
    pub diagnostics: HashMap<String, String>,
}

impl SegmentInfo {
    pub fn new(segment_id: impl Into<String>) -> Self {
        Self {
            segment_id: segment_id.into(),
            ..Default::default()
        }
    }

    pub fn with_doc_count(mut self, doc_count: u64) -> Self {
        self.doc_count = doc_count;
        self
    }

    pub fn with_generation(mut self, generation: u64) -> Self {
        self.generation = generation;
        self
    }

    pub fn with_diagnostic(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.diagnostics.insert(key.into(), value.into());
        self
    }

    /// Record `timestamp` under the timestamp diagnostic key.
    pub fn with_timestamp(self, timestamp: i64) -> Self {
        self.with_diagnostic(TIMESTAMP_DIAGNOSTIC, timestamp.to_string())
    }

    /// Raw timestamp diagnostic, if present.
    pub fn timestamp_diagnostic(&self) -> Option<&str> {
        self.diagnostics.get(TIMESTAMP_DIAGNOSTIC).map(String::as_str)
    }
}

impl SegmentDescriptor for SegmentInfo {
    fn segment_id(&self) -> &str {
        &self.segment_id
    }

    fn diagnostic(&self, key: &str) -> Result<Option<&str>> {
        Ok(self.diagnostics.get(key).map(String::as_str))
    }
}

impl<T: SegmentDescriptor + ?Sized> SegmentDescriptor for Arc<T> {
    fn segment_id(&self) -> &str {
        (**self).segment_id()
    }

    fn diagnostic(&self, key: &str) -> Result<Option<&str>> {
        (**self).diagnostic(key)
    }
}

impl<T: SegmentDescriptor + ?Sized> SegmentDescriptor for &T {
    fn segment_id(&self) -> &str {
        (**self).segment_id()
    }

    fn diagnostic(&self, key: &str) -> Result<Option<&str>> {
        (**self).diagnostic(key)
    }
}

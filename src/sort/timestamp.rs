//! Timestamp extraction from segment diagnostics.

use log::error;

use crate::error::{Result, SegSortError};
use crate::segment::{SegmentDescriptor, TIMESTAMP_DIAGNOSTIC};

/// Parse the timestamp diagnostic as a base-10 signed 64-bit integer.
pub(crate) fn parse_timestamp(segment: &dyn SegmentDescriptor) -> Result<i64> {
    let value = segment
        .diagnostic(TIMESTAMP_DIAGNOSTIC)?
        .ok_or_else(|| SegSortError::MissingDiagnostic {
            segment: segment.segment_id().to_string(),
            key: TIMESTAMP_DIAGNOSTIC.to_string(),
        })?;

    value
        .parse::<i64>()
        .map_err(|source| SegSortError::InvalidTimestamp {
            segment: segment.segment_id().to_string(),
            value: value.to_string(),
            source,
        })
}

/// Read the segment's timestamp, or `missing_value` if it cannot be read.
///
/// Failures are logged and never returned, so one damaged segment cannot
/// prevent the rest of the index from being ordered.
pub fn extract_timestamp(segment: &dyn SegmentDescriptor, missing_value: i64) -> i64 {
    match parse_timestamp(segment) {
        Ok(timestamp) => timestamp,
        Err(e) => {
            error!(
                "Error getting timestamp for segment {}: {}",
                segment.segment_id(),
                e
            );
            missing_value
        }
    }
}

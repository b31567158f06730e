use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SegSortError};

/// Order in which segments are presented to the reader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentSort {
    /// Keep the order in which segments were opened.
    #[default]
    #[serde(alias = "NONE")]
    None,

    /// Oldest segment first.
    #[serde(alias = "TIME_ASC")]
    TimeAsc,

    /// Newest segment first.
    #[serde(alias = "TIME_DESC")]
    TimeDesc,
}

impl SegmentSort {
    pub fn as_str(&self) -> &'static str {
        match self {
            SegmentSort::None => "none",
            SegmentSort::TimeAsc => "time_asc",
            SegmentSort::TimeDesc => "time_desc",
        }
    }

    /// Timestamp substituted for segments whose timestamp cannot be read.
    ///
    /// Both sentinels place such segments at the end of the resulting order.
    pub fn missing_value(&self) -> Option<i64> {
        match self {
            SegmentSort::None => None,
            SegmentSort::TimeAsc => Some(i64::MAX),
            SegmentSort::TimeDesc => Some(i64::MIN),
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SegmentSort::TimeDesc)
    }
}

impl fmt::Display for SegmentSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SegmentSort {
    type Err = SegSortError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(SegmentSort::None),
            "time_asc" => Ok(SegmentSort::TimeAsc),
            "time_desc" => Ok(SegmentSort::TimeDesc),
            _ => Err(SegSortError::invalid_config(format!(
                "unknown segment sort '{s}', expected one of none, time_asc, time_desc"
            ))),
        }
    }
}

//! Comparator construction and caching for segment ordering.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use log::debug;
use parking_lot::RwLock;

use crate::segment::SegmentDescriptor;
use crate::sort::policy::SegmentSort;
use crate::sort::timestamp::extract_timestamp;

/// Total order over segments, shared between the sorter and its callers.
pub type LeafComparator =
    Arc<dyn Fn(&dyn SegmentDescriptor, &dyn SegmentDescriptor) -> Ordering + Send + Sync>;

/// Supplies the order in which a reader visits its segments.
pub trait LeafSorter: Send + Sync + fmt::Debug + fmt::Display {
    /// The comparator to sort segments with, or `None` to keep open order.
    fn leaf_sorter(&self) -> Option<LeafComparator>;
}

/// Sort `leaves` in place with `sorter`'s comparator.
///
/// Returns `false` and leaves the slice untouched when the sorter has no
/// comparator. The sort is stable, so segments with equal timestamps keep
/// their open order.
pub fn sort_leaves<D: SegmentDescriptor>(sorter: &dyn LeafSorter, leaves: &mut [D]) -> bool {
    match sorter.leaf_sorter() {
        Some(comparator) => {
            leaves.sort_by(|a, b| {
                comparator(a as &dyn SegmentDescriptor, b as &dyn SegmentDescriptor)
            });
            true
        }
        None => false,
    }
}

/// Orders segments by the `timestamp` diagnostic written with each segment.
///
/// The comparator is built on first use and reused for the lifetime of the
/// sorter. Segments without a readable timestamp sort last in both
/// directions.
pub struct SegmentTimeLeafSorter {
    sort_options: SegmentSort,
    leaf_sorter: RwLock<Option<LeafComparator>>,
}

impl SegmentTimeLeafSorter {
    pub fn new(sort_options: SegmentSort) -> Self {
        Self {
            sort_options,
            leaf_sorter: RwLock::new(None),
        }
    }

    pub fn sort_options(&self) -> SegmentSort {
        self.sort_options
    }

    fn build_comparator(sort_options: SegmentSort) -> Option<LeafComparator> {
        let missing_value = sort_options.missing_value()?;
        let descending = sort_options.is_descending();

        let comparator: LeafComparator = Arc::new(
            move |a: &dyn SegmentDescriptor, b: &dyn SegmentDescriptor| {
                let ord = extract_timestamp(a, missing_value)
                    .cmp(&extract_timestamp(b, missing_value));
                if descending { ord.reverse() } else { ord }
            },
        );
        Some(comparator)
    }
}

impl Default for SegmentTimeLeafSorter {
    fn default() -> Self {
        Self::new(SegmentSort::default())
    }
}

impl LeafSorter for SegmentTimeLeafSorter {
    fn leaf_sorter(&self) -> Option<LeafComparator> {
        if self.sort_options == SegmentSort::None {
            return None;
        }

        // Optimistic check
        if let Some(comparator) = self.leaf_sorter.read().as_ref() {
            return Some(comparator.clone());
        }

        let mut cached = self.leaf_sorter.write();
        if cached.is_none() {
            debug!("Building segment comparator for {}", self.sort_options);
            *cached = Self::build_comparator(self.sort_options);
        }
        cached.clone()
    }
}

impl fmt::Debug for SegmentTimeLeafSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SegmentTimeLeafSorter")
            .field("sort_options", &self.sort_options)
            .field("cached", &self.leaf_sorter.read().is_some())
            .finish()
    }
}

impl fmt::Display for SegmentTimeLeafSorter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SegmentTimeLeafSorter{{{}}}", self.sort_options)
    }
}

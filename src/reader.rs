//! Ordered view over the segments of an index reader.

use std::collections::HashSet;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, SegSortError};
use crate::segment::SegmentDescriptor;
use crate::sort::{LeafSorter, sort_leaves};

/// The segments of an open index, in the order readers should visit them.
///
/// Leaves are ordered once at open time by the configured [`LeafSorter`];
/// without a comparator they stay in the order they were opened.
#[derive(Debug, Clone)]
pub struct LeafReaderSet<D: SegmentDescriptor> {
    leaves: Vec<D>,
    sorter: Arc<dyn LeafSorter>,
}

impl<D: SegmentDescriptor> LeafReaderSet<D> {
    pub fn open(mut leaves: Vec<D>, sorter: Arc<dyn LeafSorter>) -> Result<Self> {
        check_unique(&leaves)?;

        if sort_leaves(sorter.as_ref(), &mut leaves) {
            debug!("Ordered {} segments with {}", leaves.len(), sorter);
        } else {
            debug!("Keeping open order for {} segments", leaves.len());
        }

        Ok(Self { leaves, sorter })
    }

    /// Reopen with a new set of segments, keeping the same sorter.
    pub fn refresh(&self, leaves: Vec<D>) -> Result<Self> {
        Self::open(leaves, self.sorter.clone())
    }

    pub fn leaves(&self) -> &[D] {
        &self.leaves
    }

    pub fn len(&self) -> usize {
        self.leaves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leaves.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, D> {
        self.leaves.iter()
    }

    pub fn segment_ids(&self) -> Vec<&str> {
        self.leaves.iter().map(|leaf| leaf.segment_id()).collect()
    }

    pub fn sorter(&self) -> &Arc<dyn LeafSorter> {
        &self.sorter
    }

    /// Human-readable description of the active ordering.
    pub fn sort_description(&self) -> String {
        self.sorter.to_string()
    }

    pub fn into_leaves(self) -> Vec<D> {
        self.leaves
    }
}

fn check_unique<D: SegmentDescriptor>(leaves: &[D]) -> Result<()> {
    let mut seen = HashSet::with_capacity(leaves.len());
    for leaf in leaves {
        if !seen.insert(leaf.segment_id()) {
            return Err(SegSortError::invalid_argument(format!(
                "duplicate segment id: {}",
                leaf.segment_id()
            )));
        }
    }
    Ok(())
}

impl<'a, D: SegmentDescriptor> IntoIterator for &'a LeafReaderSet<D> {
    type Item = &'a D;
    type IntoIter = std::slice::Iter<'a, D>;

    fn into_iter(self) -> Self::IntoIter {
        self.leaves.iter()
    }
}

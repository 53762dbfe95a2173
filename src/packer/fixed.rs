use tracing::trace;

use super::{validate_dimensions, Packer};
use crate::error::Result;
use crate::model::{Placement, Slot};
use crate::tree::RegionTree;

/// Packs into a bin of fixed extent, set at construction and never resized.
///
/// Rectangles that do not fit anywhere in the remaining free regions are left
/// unplaced permanently; there is no retry and no resizing.
pub struct FixedPacker {
    width: u32,
    height: u32,
    tree: RegionTree,
}

impl FixedPacker {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        validate_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            tree: RegionTree::new(width, height),
        })
    }

    /// Discards all placements and starts over with a fresh root of the same
    /// extent. Trees are not designed for incremental reuse across
    /// independent rectangle sets; reset between runs instead.
    pub fn reset(&mut self) {
        self.tree = RegionTree::new(self.width, self.height);
    }

    /// The current occupied/free partition, including the root extent.
    pub fn tree(&self) -> &RegionTree {
        &self.tree
    }
}

impl<K> Packer<K> for FixedPacker {
    fn pack(&mut self, key: K, w: u32, h: u32) -> Result<Placement<K>> {
        validate_dimensions(w, h)?;
        let slot = self.tree.find(w, h).map(|id| {
            let node = self.tree.split(id, w, h);
            let rect = self.tree.node(node).rect;
            Slot {
                node,
                x: rect.x,
                y: rect.y,
            }
        });
        if slot.is_none() {
            trace!(
                w,
                h,
                bin_w = self.width,
                bin_h = self.height,
                "no free region; leaving unplaced"
            );
        }
        Ok(Placement { key, w, h, slot })
    }
}

use tracing::debug;

use super::{validate_dimensions, Packer};
use crate::error::Result;
use crate::model::{Placement, Slot};
use crate::tree::{NodeId, RegionTree};

/// Packs into a bin that starts at the first rectangle's size and grows on
/// demand.
///
/// When no free region fits, the current root is wrapped inside a larger root
/// extended rightward or downward; prior placements keep their coordinates.
/// Each growth step extends exactly one axis, so a rectangle wider *and*
/// taller than the current root cannot be accommodated and is left unplaced.
/// Feeding the largest rectangle first (e.g., sorted by the caller) makes
/// that case rare.
pub struct GrowingPacker {
    tree: RegionTree,
    started: bool,
}

impl GrowingPacker {
    pub fn new() -> Self {
        Self {
            tree: RegionTree::new(0, 0),
            started: false,
        }
    }

    /// The current occupied/free partition, including the root extent.
    /// Zero-sized until the first rectangle is packed.
    pub fn tree(&self) -> &RegionTree {
        &self.tree
    }

    /// Grows the bin along one axis and places the rectangle in the fresh
    /// strip. Prefers the axis that keeps the bin closer to square; ties
    /// resolve to right-growth.
    fn grow(&mut self, w: u32, h: u32) -> Option<NodeId> {
        let root = self.tree.root_rect();
        let can_grow_down = w <= root.w;
        let can_grow_right = h <= root.h;
        // Grow right when the bin is already tall relative to the width it
        // would become; symmetric for down.
        let should_grow_right = can_grow_right && root.h >= root.w + w;
        let should_grow_down = can_grow_down && root.w >= root.h + h;

        if should_grow_right {
            self.tree.grow_right(w);
        } else if should_grow_down {
            self.tree.grow_down(h);
        } else if can_grow_right {
            self.tree.grow_right(w);
        } else if can_grow_down {
            self.tree.grow_down(h);
        } else {
            debug!(
                w,
                h,
                root_w = root.w,
                root_h = root.h,
                "rectangle exceeds both root dimensions; cannot grow"
            );
            return None;
        }
        debug!(
            root_w = self.tree.width(),
            root_h = self.tree.height(),
            "grew bin"
        );
        // The fresh strip is at least w x h by construction.
        let id = self.tree.find(w, h)?;
        Some(self.tree.split(id, w, h))
    }
}

impl Default for GrowingPacker {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> Packer<K> for GrowingPacker {
    fn pack(&mut self, key: K, w: u32, h: u32) -> Result<Placement<K>> {
        validate_dimensions(w, h)?;
        if !self.started {
            // Root the tree at the first rectangle's size.
            self.tree = RegionTree::new(w, h);
            self.started = true;
        }
        let node = match self.tree.find(w, h) {
            Some(id) => Some(self.tree.split(id, w, h)),
            None => self.grow(w, h),
        };
        let slot = node.map(|id| {
            let rect = self.tree.node(id).rect;
            Slot {
                node: id,
                x: rect.x,
                y: rect.y,
            }
        });
        Ok(Placement { key, w, h, slot })
    }
}

use serde::{Deserialize, Serialize};

use crate::tree::NodeId;

/// Axis-aligned rectangle. `x,y` is top-left; `w,h` are sizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub fn area(&self) -> u64 {
        (self.w as u64) * (self.h as u64)
    }

    /// Inclusive right edge coordinate (`x + w - 1`).
    pub fn right(&self) -> u32 {
        self.x + self.w.saturating_sub(1)
    }

    /// Inclusive bottom edge coordinate (`y + h - 1`).
    pub fn bottom(&self) -> u32 {
        self.y + self.h.saturating_sub(1)
    }

    /// Returns true if `r` is fully inside `self` (inclusive edges).
    pub fn contains(&self, r: &Rect) -> bool {
        r.x >= self.x && r.y >= self.y && r.right() <= self.right() && r.bottom() <= self.bottom()
    }

    /// Returns true if `self` and `r` overlap with non-zero area.
    pub fn intersects(&self, r: &Rect) -> bool {
        self.x < r.x + r.w && r.x < self.x + self.w && self.y < r.y + r.h && r.y < self.y + self.h
    }
}

/// One rectangle to place.
///
/// `K` is an opaque caller key (e.g., filename or asset path) carried through
/// to the matching [`Placement`]; the packer never inspects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Request<K = String> {
    pub key: K,
    pub w: u32,
    pub h: u32,
}

impl<K> Request<K> {
    pub fn new(key: K, w: u32, h: u32) -> Self {
        Self { key, w, h }
    }
}

/// The region granted to a placed rectangle.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Slot {
    /// Region node that hosts the rectangle. Valid for the lifetime of the
    /// packer's tree; growth never invalidates it.
    pub node: NodeId,
    /// Assigned top-left corner.
    pub x: u32,
    pub y: u32,
}

/// Outcome for a single request.
///
/// Placements are produced in input order, one per request. An empty `slot`
/// is the explicit "unplaced" marker; it is an expected outcome, not an
/// error (a fixed bin was too small, or growth failed on both axes).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Placement<K = String> {
    pub key: K,
    pub w: u32,
    pub h: u32,
    pub slot: Option<Slot>,
}

impl<K> Placement<K> {
    pub fn is_placed(&self) -> bool {
        self.slot.is_some()
    }

    /// The placed rectangle, if any.
    pub fn rect(&self) -> Option<Rect> {
        self.slot.map(|s| Rect::new(s.x, s.y, self.w, self.h))
    }
}

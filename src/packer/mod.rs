use crate::error::Result;
use crate::model::{Placement, Request};

pub mod fixed;
pub mod growing;

pub use fixed::FixedPacker;
pub use growing::GrowingPacker;

/// A packer places rectangles into a bin, one at a time, mutating its region
/// tree.
///
/// Implementations must ensure placements never overlap and always lie inside
/// the current root extent. "Cannot place" is an expected outcome reported
/// through an empty [`Placement::slot`], not an error; errors are reserved
/// for malformed input (zero-sized rectangles).
pub trait Packer<K> {
    /// Places a single rectangle keyed by `key`.
    fn pack(&mut self, key: K, w: u32, h: u32) -> Result<Placement<K>>;

    /// Places every request strictly in the given order. The packer never
    /// reorders input; ordering is the caller's responsibility and materially
    /// affects the outcome of this greedy, non-backtracking algorithm.
    fn fit<I>(&mut self, requests: I) -> Result<Vec<Placement<K>>>
    where
        I: IntoIterator<Item = Request<K>>,
        Self: Sized,
    {
        requests
            .into_iter()
            .map(|r| self.pack(r.key, r.w, r.h))
            .collect()
    }
}

pub(crate) fn validate_dimensions(w: u32, h: u32) -> Result<()> {
    if w == 0 || h == 0 {
        return Err(crate::error::PackError::InvalidDimensions {
            width: w,
            height: h,
        });
    }
    Ok(())
}

//! Binary-tree rectangle packing for sprite sheets, texture atlases, and
//! layout nesting.
//!
//! - [`FixedPacker`]: first-fit packing into a bin of fixed width/height;
//!   rectangles that do not fit are reported as unplaced.
//! - [`GrowingPacker`]: starts the bin at the first rectangle's size and
//!   grows rightward or downward on demand, never moving prior placements.
//! - Both expose their [`tree::RegionTree`] of occupied/free regions so a
//!   caller can render the partition or read the final bin extent.
//! - The data model is serde-serializable.
//!
//! This is a fast greedy heuristic, not an optimal bin-packing solver: input
//! order matters (callers typically sort by decreasing size first), there is
//! no rotation, and placed rectangles are never repacked.
//!
//! Quick example:
//! ```
//! use bintree_packer::prelude::*;
//!
//! # fn main() -> bintree_packer::Result<()> {
//! let mut packer = GrowingPacker::new();
//! let placements = packer.fit(vec![
//!     Request::new("a", 64, 64),
//!     Request::new("b", 32, 64),
//!     Request::new("c", 32, 32),
//! ])?;
//! for p in &placements {
//!     match p.rect() {
//!         Some(r) => println!("{}: {},{} {}x{}", p.key, r.x, r.y, r.w, r.h),
//!         None => println!("{}: unplaced", p.key),
//!     }
//! }
//! println!("bin: {}x{}", packer.tree().width(), packer.tree().height());
//! # Ok(()) }
//! ```

pub mod error;
pub mod model;
pub mod packer;
pub mod tree;

pub use error::*;
pub use model::*;
pub use packer::*;
pub use tree::{Node, NodeId, RegionTree};

/// Convenience prelude for common types and functions.
/// Importing `bintree_packer::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::error::{PackError, Result};
    pub use crate::model::{Placement, Rect, Request, Slot};
    pub use crate::packer::{FixedPacker, GrowingPacker, Packer};
    pub use crate::tree::{Node, NodeId, RegionTree};
}

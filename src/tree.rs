//! Binary tree of occupied/free regions.
//!
//! Every region is a [`Node`] stored in an arena; child links are arena
//! indices ([`NodeId`]). Nodes are never removed or resized once created, so
//! ids issued by a tree stay valid for its lifetime. Growth wraps the current
//! root in a new, larger root instead of restructuring the tree, which keeps
//! every prior placement's coordinates intact.

use serde::{Deserialize, Serialize};

use crate::model::Rect;

/// Handle to a [`Node`] inside a [`RegionTree`] arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// A region of the bin: either free, or occupied with up to two child
/// regions carving the leftover space.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    pub rect: Rect,
    pub used: bool,
    /// Leftover space right of the occupant, spanning the occupant's height.
    pub right: Option<NodeId>,
    /// Leftover space below the occupant, spanning this node's full width.
    pub down: Option<NodeId>,
}

impl Node {
    fn free(rect: Rect) -> Self {
        Self {
            rect,
            used: false,
            right: None,
            down: None,
        }
    }
}

/// Arena-backed partition of a rectangular bin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegionTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl RegionTree {
    /// A tree whose single free root sits at the origin with the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            nodes: vec![Node::free(Rect::new(0, 0, width, height))],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Extent of the whole bin.
    pub fn root_rect(&self) -> Rect {
        self.node(self.root).rect
    }

    pub fn width(&self) -> u32 {
        self.root_rect().w
    }

    pub fn height(&self) -> u32 {
        self.root_rect().h
    }

    /// First-fit search for a free region of at least `w x h`, starting at
    /// the root. Right subtrees are searched before down subtrees, biasing
    /// toward filling width before height. Returns the first free region
    /// that is large enough, not the tightest one.
    pub fn find(&self, w: u32, h: u32) -> Option<NodeId> {
        self.find_from(self.root, w, h)
    }

    fn find_from(&self, id: NodeId, w: u32, h: u32) -> Option<NodeId> {
        let node = self.node(id);
        if node.used {
            node.right
                .and_then(|r| self.find_from(r, w, h))
                .or_else(|| node.down.and_then(|d| self.find_from(d, w, h)))
        } else if w <= node.rect.w && h <= node.rect.h {
            Some(id)
        } else {
            None
        }
    }

    /// Occupies the free region `id` with a `w x h` rectangle anchored at the
    /// region's top-left corner, carving the leftover space into a `down`
    /// child (full width, below the occupant) and a `right` child (occupant
    /// height, right of the occupant). Degenerate zero-area children are
    /// created as-is; they never match a future search.
    pub fn split(&mut self, id: NodeId, w: u32, h: u32) -> NodeId {
        let rect = self.node(id).rect;
        debug_assert!(!self.node(id).used);
        debug_assert!(w <= rect.w && h <= rect.h);

        let down = self.push(Node::free(Rect::new(rect.x, rect.y + h, rect.w, rect.h - h)));
        let right = self.push(Node::free(Rect::new(rect.x + w, rect.y, rect.w - w, h)));
        let node = &mut self.nodes[id.index()];
        node.used = true;
        node.down = Some(down);
        node.right = Some(right);
        id
    }

    /// Wraps the root in a new occupied root extended rightward by `w`. The
    /// old root becomes the `down` child at unchanged coordinates; the fresh
    /// strip right of it becomes the free `right` child.
    pub(crate) fn grow_right(&mut self, w: u32) {
        let old = self.root_rect();
        let fresh = self.push(Node::free(Rect::new(old.w, 0, w, old.h)));
        let root = self.push(Node {
            rect: Rect::new(0, 0, old.w + w, old.h),
            used: true,
            right: Some(fresh),
            down: Some(self.root),
        });
        self.root = root;
    }

    /// Wraps the root in a new occupied root extended downward by `h`.
    pub(crate) fn grow_down(&mut self, h: u32) {
        let old = self.root_rect();
        let fresh = self.push(Node::free(Rect::new(0, old.h, old.w, h)));
        let root = self.push(Node {
            rect: Rect::new(0, 0, old.w, old.h + h),
            used: true,
            right: Some(self.root),
            down: Some(fresh),
        });
        self.root = root;
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Preorder walk of the partition (node, then down, then right),
    /// starting at the root. Suitable for drawing region boundaries.
    pub fn regions(&self) -> Regions<'_> {
        Regions {
            tree: self,
            stack: vec![self.root],
        }
    }
}

/// Iterator returned by [`RegionTree::regions`].
pub struct Regions<'a> {
    tree: &'a RegionTree,
    stack: Vec<NodeId>,
}

impl<'a> Iterator for Regions<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.stack.pop()?;
        let node = self.tree.node(id);
        if let Some(right) = node.right {
            self.stack.push(right);
        }
        if let Some(down) = node.down {
            self.stack.push(down);
        }
        Some((id, node))
    }
}

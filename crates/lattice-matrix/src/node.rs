//! The unit of the lattice: one value plus links to its right and lower neighbours.
use std::fmt;

/// Index of a node inside the arena owned by a [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    pub(crate) const fn header() -> Self {
        Self(0)
    }

    pub(crate) fn new(value: usize) -> Self {
        Self(value)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

/// A lattice cell. Links are arena indices; a node never owns its neighbours.
#[derive(Clone, Debug, PartialEq)]
pub struct Node<T> {
    contents: T,
    right: Option<NodeId>,
    down: Option<NodeId>,
}

impl<T> Node<T> {
    pub fn new(contents: T) -> Self {
        Self {
            contents,
            right: None,
            down: None,
        }
    }

    pub fn contents(&self) -> &T {
        &self.contents
    }

    pub fn set_contents(&mut self, contents: T) {
        self.contents = contents;
    }

    /// Next node in the same row, if any.
    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn set_right(&mut self, id: NodeId) {
        self.right = Some(id);
    }

    /// Next node in the same column, if any.
    pub fn down(&self) -> Option<NodeId> {
        self.down
    }

    pub fn set_down(&mut self, id: NodeId) {
        self.down = Some(id);
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.contents, f)
    }
}

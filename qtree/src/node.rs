use crate::quad::{Quad, Quadrant};

/// A region of an image: either uniform, or split into four equal quadrants.
///
/// Each split exclusively owns its four children, so a `QuadNode` is always a strict tree.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum QuadNode {
    Leaf(u8),
    Split(Box<Quad<QuadNode>>),
}

impl QuadNode {
    /// value that marks a split node in the serialized form
    pub const SPLIT: i32 = -1;
    /// deepest tree that can describe an image whose pixel count fits in a `usize`
    pub const MAX_DEPTH: u32 = usize::BITS / 2;

    pub fn leaf(value: u8) -> Self {
        Self::Leaf(value)
    }
    pub fn split(children: Quad<QuadNode>) -> Self {
        Self::Split(Box::new(children))
    }
    pub fn new_split(ul: QuadNode, ur: QuadNode, ll: QuadNode, lr: QuadNode) -> Self {
        Self::split(Quad { ul, ur, ll, lr })
    }

    /// the grayscale value of a leaf, or [`QuadNode::SPLIT`]
    pub fn value(&self) -> i32 {
        match self {
            Self::Leaf(value) => i32::from(*value),
            Self::Split(_) => Self::SPLIT,
        }
    }
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
    pub fn leaf_value(&self) -> Option<u8> {
        match self {
            Self::Leaf(value) => Some(*value),
            Self::Split(_) => None,
        }
    }
    pub fn children(&self) -> Option<&Quad<QuadNode>> {
        match self {
            Self::Leaf(_) => None,
            Self::Split(children) => Some(children),
        }
    }
    pub fn child(&self, q: Quadrant) -> Option<&QuadNode> {
        self.children().map(|children| &children[q])
    }
    pub fn upper_left(&self) -> Option<&QuadNode> {
        self.child(Quadrant::UL)
    }
    pub fn upper_right(&self) -> Option<&QuadNode> {
        self.child(Quadrant::UR)
    }
    pub fn lower_left(&self) -> Option<&QuadNode> {
        self.child(Quadrant::LL)
    }
    pub fn lower_right(&self) -> Option<&QuadNode> {
        self.child(Quadrant::LR)
    }

    /// number of splits on the longest path to a leaf, 0 for a leaf
    pub fn depth(&self) -> u32 {
        match self {
            Self::Leaf(_) => 0,
            Self::Split(children) => 1 + children.iter().map(QuadNode::depth).max().unwrap_or(0),
        }
    }
}

impl From<u8> for QuadNode {
    fn from(value: u8) -> Self {
        Self::leaf(value)
    }
}
impl From<Quad<QuadNode>> for QuadNode {
    fn from(children: Quad<QuadNode>) -> Self {
        Self::split(children)
    }
}

use crate::{Quad, QuadNode};

pub trait NodeCount {
    /// number of values this contributes to the serialized form
    fn node_count(&self) -> usize;
    fn leaf_count(&self) -> usize;
}
impl<'a, T> NodeCount for &'a T
where
    T: NodeCount,
{
    fn node_count(&self) -> usize {
        (**self).node_count()
    }
    fn leaf_count(&self) -> usize {
        (**self).leaf_count()
    }
}

impl<T> NodeCount for Quad<T>
where
    T: NodeCount,
{
    fn node_count(&self) -> usize {
        self.iter().map(T::node_count).sum()
    }
    fn leaf_count(&self) -> usize {
        self.iter().map(T::leaf_count).sum()
    }
}

impl NodeCount for QuadNode {
    fn node_count(&self) -> usize {
        match self {
            QuadNode::Leaf(_) => 1,
            QuadNode::Split(children) => 1 + children.node_count(),
        }
    }
    fn leaf_count(&self) -> usize {
        match self {
            QuadNode::Leaf(_) => 1,
            QuadNode::Split(children) => children.leaf_count(),
        }
    }
}

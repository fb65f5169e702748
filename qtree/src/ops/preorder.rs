//! tree -> flat sequence

use std::fmt::Display;
use std::iter::FusedIterator;

use itertools::Itertools;

use crate::QuadNode;

impl QuadNode {
    /// values of every node, parents before children and children in `UL, UR, LL, LR` order
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
    pub fn serialize(&self) -> Vec<i32> {
        self.preorder().collect()
    }
}

/// walks a tree with an explicit stack, so depth is only bounded by memory
pub struct Preorder<'n> {
    stack: Vec<&'n QuadNode>,
}
impl<'n> Iterator for Preorder<'n> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let QuadNode::Split(children) = node {
            self.stack.extend(children.iter().rev());
        }
        Some(node.value())
    }
}
impl FusedIterator for Preorder<'_> {}

impl Display for QuadNode {
    /// space separated preorder values
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.preorder().format(" "))
    }
}

use crate::{Coord, QuadNode, Quadrant};

impl QuadNode {
    /// sample at `pos` of the `dim` x `dim` image this tree describes, without reconstructing it
    pub fn get(&self, dim: usize, pos: Coord) -> Option<u8> {
        if pos.row >= dim || pos.col >= dim {
            None
        } else {
            self.get_in_bounds(dim, pos)
        }
    }
    fn get_in_bounds(&self, size: usize, pos: Coord) -> Option<u8> {
        match self {
            QuadNode::Leaf(value) => Some(*value),
            // a split can't describe anything smaller than a pixel
            QuadNode::Split(_) if size == 1 => None,
            QuadNode::Split(children) => {
                let half = size / 2;
                let q = Quadrant::from_coord(pos, half);
                let offset = q.offset(half);
                let pos = Coord::new(pos.row - offset.row, pos.col - offset.col);
                children[q].get_in_bounds(half, pos)
            }
        }
    }
}

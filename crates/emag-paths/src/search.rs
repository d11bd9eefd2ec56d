use emag_core::{Coord, Dims};

// ---------------------------------------------------------------------------
// Internal node for the A* priority-queue search
// ---------------------------------------------------------------------------

#[derive(Clone)]
pub(crate) struct Node {
    /// Best known cost from the source.
    pub(crate) g: f64,
    /// `g` plus the estimate to the goal.
    pub(crate) f: f64,
    pub(crate) parent: usize,
    pub(crate) generation: u32,
    pub(crate) open: bool,
    pub(crate) closed: bool,
}

impl Default for Node {
    fn default() -> Self {
        Self {
            g: f64::INFINITY,
            f: f64::INFINITY,
            parent: usize::MAX,
            generation: 0,
            open: false,
            closed: false,
        }
    }
}

/// Reference into the node array, ordered for use in a `BinaryHeap`.
///
/// The heap pops the lowest `f` first; equal `f` pops the lowest flat index,
/// which is the smallest `(row, column)`.
#[derive(Clone, Copy)]
pub(crate) struct NodeRef {
    pub(crate) idx: usize,
    pub(crate) f: f64,
}

impl Ord for NodeRef {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reversed: BinaryHeap is a max-heap.
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.idx.cmp(&self.idx))
    }
}

impl PartialOrd for NodeRef {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for NodeRef {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other).is_eq()
    }
}

impl Eq for NodeRef {}

// ---------------------------------------------------------------------------
// PathSearch
// ---------------------------------------------------------------------------

/// Reusable A* workspace for grids of a given extent.
///
/// `PathSearch` owns the node array and scratch buffers, so repeated searches
/// on same-sized grids do not allocate for bookkeeping. Each search bumps a
/// generation counter instead of clearing the node array.
pub struct PathSearch {
    pub(crate) dims: Dims,
    pub(crate) nodes: Vec<Node>,
    pub(crate) generation: u32,
    pub(crate) nbuf: Vec<Coord>,
    pub(crate) expanded: usize,
}

impl PathSearch {
    /// Create a workspace for grids of extent `dims`.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            nodes: vec![Node::default(); dims.len()],
            generation: 0,
            nbuf: Vec::with_capacity(4),
            expanded: 0,
        }
    }

    /// The extent this workspace searches.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Switch to a new extent. The node array is only reallocated when it
    /// is too small.
    pub fn set_dims(&mut self, dims: Dims) {
        self.dims = dims;
        if dims.len() <= self.nodes.len() {
            self.next_generation();
            return;
        }
        self.nodes.clear();
        self.nodes.resize(dims.len(), Node::default());
        self.generation = 0;
    }

    /// Number of nodes expanded (moved to the closed set) by the last search.
    #[inline]
    pub fn last_expanded(&self) -> usize {
        self.expanded
    }

    /// Start a new generation, lazily invalidating every node.
    pub(crate) fn next_generation(&mut self) -> u32 {
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Wrapped: stale nodes could alias the new generation.
            for n in self.nodes.iter_mut() {
                *n = Node::default();
            }
            self.generation = 1;
        }
        self.generation
    }

    /// Flat index of `c`, or `None` if outside the extent.
    #[inline]
    pub(crate) fn idx(&self, c: Coord) -> Option<usize> {
        self.dims.index(c)
    }

    #[inline]
    pub(crate) fn coord(&self, idx: usize) -> Coord {
        self.dims.coord(idx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BinaryHeap;

    #[test]
    fn heap_pops_lowest_f_then_lowest_index() {
        let mut heap = BinaryHeap::new();
        heap.push(NodeRef { idx: 4, f: 2.0 });
        heap.push(NodeRef { idx: 7, f: 1.0 });
        heap.push(NodeRef { idx: 2, f: 2.0 });
        heap.push(NodeRef { idx: 1, f: 3.5 });
        let order: Vec<usize> = std::iter::from_fn(|| heap.pop().map(|n| n.idx)).collect();
        assert_eq!(order, vec![7, 2, 4, 1]);
    }

    #[test]
    fn set_dims_smaller_preserves_capacity() {
        let mut ps = PathSearch::new(Dims::new(20, 20));
        let cap = ps.nodes.len();
        ps.set_dims(Dims::new(5, 7));
        assert_eq!(ps.dims(), Dims::new(5, 7));
        assert_eq!(ps.nodes.len(), cap);
        assert!(ps.generation > 0);
    }

    #[test]
    fn set_dims_larger_reallocates() {
        let mut ps = PathSearch::new(Dims::new(5, 5));
        ps.set_dims(Dims::new(10, 20));
        assert_eq!(ps.nodes.len(), 200);
        assert_eq!(ps.generation, 0);
    }

    #[test]
    fn generation_wrap_resets_nodes() {
        let mut ps = PathSearch::new(Dims::new(2, 2));
        ps.generation = u32::MAX;
        ps.nodes[0].generation = 1;
        ps.nodes[0].g = 0.0;
        assert_eq!(ps.next_generation(), 1);
        assert_eq!(ps.nodes[0].generation, 0);
        assert!(ps.nodes[0].g.is_infinite());
    }

    #[test]
    fn index_uses_column_stride() {
        let ps = PathSearch::new(Dims::new(2, 3));
        assert_eq!(ps.idx(Coord::new(1, 2)), Some(5));
        assert_eq!(ps.coord(5), Coord::new(1, 2));
        assert_eq!(ps.idx(Coord::new(2, 0)), None);
    }
}

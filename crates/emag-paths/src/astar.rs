use std::collections::BinaryHeap;

use emag_core::Coord;

use crate::PathSearch;
use crate::search::NodeRef;
use crate::traits::AstarPather;

impl PathSearch {
    /// Compute the shortest path from `from` to `to` using A*.
    ///
    /// Returns the full path, `from` first and `to` last, or `None` if
    /// either endpoint lies outside [`dims`](Self::dims) or the open set
    /// runs out before `to` is reached.
    pub fn astar_path<P: AstarPather + ?Sized>(
        &mut self,
        pather: &P,
        from: Coord,
        to: Coord,
    ) -> Option<Vec<Coord>> {
        let start_idx = self.idx(from)?;
        let goal_idx = self.idx(to)?;

        self.expanded = 0;
        if start_idx == goal_idx {
            return Some(vec![from]);
        }

        let cur_gen = self.next_generation();

        {
            let node = &mut self.nodes[start_idx];
            node.g = 0.0;
            node.f = pather.estimate(from, to);
            node.parent = usize::MAX;
            node.generation = cur_gen;
            node.open = true;
            node.closed = false;
        }

        let mut open: BinaryHeap<NodeRef> = BinaryHeap::new();
        open.push(NodeRef {
            idx: start_idx,
            f: self.nodes[start_idx].f,
        });

        let mut nbuf = std::mem::take(&mut self.nbuf);

        let found = 'search: loop {
            let Some(current) = open.pop() else {
                break 'search false;
            };

            let ci = current.idx;

            // Skip stale entries.
            let cn = &self.nodes[ci];
            if cn.generation != cur_gen || !cn.open || cn.f < current.f {
                continue;
            }

            if ci == goal_idx {
                break 'search true;
            }

            self.nodes[ci].open = false;
            self.nodes[ci].closed = true;
            self.expanded += 1;
            let current_g = self.nodes[ci].g;
            let current_coord = self.coord(ci);

            nbuf.clear();
            pather.neighbors(current_coord, &mut nbuf);

            for &nc in nbuf.iter() {
                let Some(ni) = self.idx(nc) else {
                    continue;
                };
                let tentative_g = current_g + pather.cost(current_coord, nc);

                let n = &mut self.nodes[ni];
                if n.generation == cur_gen {
                    if n.closed || tentative_g >= n.g {
                        continue;
                    }
                } else {
                    n.generation = cur_gen;
                    n.closed = false;
                }

                n.g = tentative_g;
                n.f = tentative_g + pather.estimate(nc, to);
                n.parent = ci;
                n.open = true;

                open.push(NodeRef { idx: ni, f: n.f });
            }
        };

        self.nbuf = nbuf;
        log::trace!(
            "astar {from} -> {to}: {} expanded, {}",
            self.expanded,
            if found { "reached" } else { "unreachable" }
        );

        if !found {
            return None;
        }

        let mut path = Vec::new();
        let mut ci = goal_idx;
        while ci != usize::MAX {
            path.push(self.coord(ci));
            ci = self.nodes[ci].parent;
        }
        path.reverse();
        Some(path)
    }
}

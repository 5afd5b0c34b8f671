// Copyright (c) 2015-2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

//! Augmenting path searches in the residual network.
//!
//! Both searches only follow arcs whose remaining capacity is positive
//! and at least some threshold. The threshold is `0` for plain
//! augmenting path algorithms and the current scaling value for
//! capacity scaling.

use crate::collections::NodeSet;
use crate::network::{EdgeId, FlowNetwork, NodeId};

use num_traits::NumAssign;
use std::collections::VecDeque;

fn is_eligible<F>(cap: F, threshold: F) -> bool
where
    F: NumAssign + Ord + Copy,
{
    cap > F::zero() && cap >= threshold
}

/// Depth first search for an augmenting path.
///
/// The search uses an explicit stack. The arcs of each node are visited
/// in the order of the adjacency list and the search descends into the
/// first eligible arc, exactly as a recursive search would.
#[derive(Default)]
pub(crate) struct DepthFirstPath {
    visited: NodeSet,
    /// The nodes on the current path with the position of the next arc to consider.
    stack: Vec<(NodeId, usize)>,
    /// The arcs on the current path.
    path: Vec<EdgeId>,
}

impl DepthFirstPath {
    pub fn init(&mut self, n: usize) {
        self.visited = NodeSet::new(n);
        self.stack = Vec::with_capacity(n);
        self.path = Vec::with_capacity(n);
    }

    /// Return the arcs of the path found by the last successful search.
    pub fn path(&self) -> &[EdgeId] {
        &self.path
    }

    /// Search a path from `src` to `snk`.
    ///
    /// Returns `true` if a path has been found.
    pub fn find<F>(&mut self, net: &FlowNetwork<F>, src: NodeId, snk: NodeId, threshold: F) -> bool
    where
        F: NumAssign + Ord + Copy,
    {
        // start a new phase
        self.visited.clear();
        self.stack.clear();
        self.path.clear();

        self.visited.insert(src);
        self.stack.push((src, 0));
        while let Some(top) = self.stack.last_mut() {
            let u = top.0;
            if u == snk {
                return true;
            }

            let arcs = net.outedges(u);
            if top.1 < arcs.len() {
                let e = arcs[top.1];
                top.1 += 1;
                let edge = net.edge(e);
                if is_eligible(edge.remaining(), threshold) && self.visited.insert(edge.to()) {
                    self.path.push(e);
                    self.stack.push((edge.to(), 0));
                }
            } else {
                // dead end, go back
                self.stack.pop();
                self.path.pop();
            }
        }

        false
    }
}

/// Breadth first search for a shortest augmenting path.
#[derive(Default)]
pub(crate) struct BreadthFirstPath {
    visited: NodeSet,
    /// The arc over which each visited node has been reached.
    pred: Vec<EdgeId>,
    queue: VecDeque<NodeId>,
    path: Vec<EdgeId>,
}

impl BreadthFirstPath {
    pub fn init(&mut self, n: usize) {
        self.visited = NodeSet::new(n);
        self.pred = vec![usize::max_value(); n];
        self.queue = VecDeque::with_capacity(n);
        self.path = Vec::with_capacity(n);
    }

    /// Return the arcs of the path found by the last successful search.
    pub fn path(&self) -> &[EdgeId] {
        &self.path
    }

    /// Search a path with the minimal number of arcs from `src` to `snk`.
    ///
    /// Returns `true` if a path has been found.
    pub fn find<F>(&mut self, net: &FlowNetwork<F>, src: NodeId, snk: NodeId, threshold: F) -> bool
    where
        F: NumAssign + Ord + Copy,
    {
        self.visited.clear();
        self.queue.clear();
        self.path.clear();

        self.visited.insert(src);
        self.queue.push_back(src);
        'bfs: while let Some(u) = self.queue.pop_front() {
            for &e in net.outedges(u) {
                let edge = net.edge(e);
                let v = edge.to();
                if is_eligible(edge.remaining(), threshold) && self.visited.insert(v) {
                    self.pred[v] = e;
                    if v == snk {
                        break 'bfs;
                    }
                    self.queue.push_back(v);
                }
            }
        }

        // sink cannot be reached -> stop
        if !self.visited.contains(snk) {
            return false;
        }

        let mut v = snk;
        while v != src {
            let e = self.pred[v];
            self.path.push(e);
            v = net.edge(e).from();
        }
        self.path.reverse();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::{BreadthFirstPath, DepthFirstPath};
    use crate::network::FlowNetwork;

    fn diamond() -> FlowNetwork<i64> {
        // 0 -> 1 -> 3 and 0 -> 2 -> 3 plus the long detour 1 -> 4 -> 2
        let mut net = FlowNetwork::new(5).unwrap();
        net.add_edge(0, 1, 4).unwrap();
        net.add_edge(1, 4, 8).unwrap();
        net.add_edge(4, 2, 8).unwrap();
        net.add_edge(1, 3, 2).unwrap();
        net.add_edge(0, 2, 1).unwrap();
        net.add_edge(2, 3, 9).unwrap();
        net
    }

    #[test]
    fn test_depth_first_order() {
        let net = diamond();
        let mut dfs = DepthFirstPath::default();
        dfs.init(net.num_nodes());
        assert!(dfs.find(&net, 0, 3, 0));
        // the first arc of each node is tried first
        assert_eq!(dfs.path(), &[0, 2, 4, 10]);
        // with threshold 3 the arc 1 -> 3 is too small
        assert!(dfs.find(&net, 0, 3, 3));
        assert_eq!(dfs.path(), &[0, 2, 4, 10]);
        assert!(!dfs.find(&net, 0, 3, 5));
        assert!(dfs.path().is_empty());
    }

    #[test]
    fn test_breadth_first_shortest() {
        let net = diamond();
        let mut bfs = BreadthFirstPath::default();
        bfs.init(net.num_nodes());
        assert!(bfs.find(&net, 0, 3, 0));
        assert_eq!(bfs.path(), &[0, 6]);
        assert!(bfs.find(&net, 0, 3, 3));
        assert_eq!(bfs.path(), &[0, 2, 4, 10]);
        assert!(!bfs.find(&net, 3, 0, 0));
    }
}

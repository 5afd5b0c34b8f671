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

//! This module implements Dinic' max flow algorithm
//!
//! Each phase computes the level graph by a breadth first search from the
//! source and then a blocking flow in that level graph. The blocking flow
//! is found by an iterative depth first search that keeps a current arc
//! for each node, so an arc that has been found useless is never looked
//! at again in the same phase. Nodes from which the sink cannot be
//! reached anymore are removed from the level graph.
//!
//! # Example
//!
//! ```
//! use rs_netflow::maxflow::dinic;
//!
//! let (s, a, b, c, d, t) = (0, 1, 2, 3, 4, 5);
//! let edges = vec![
//!     (s, a, 5), (s, c, 5), (a, b, 2), (a, c, 1), (a, d, 1),
//!     (c, d, 2), (d, b, 2), (b, t, 4), (d, t, 5),
//! ];
//!
//! let (value, flow, mincut) = dinic(6, s, t, edges.iter().cloned()).unwrap();
//!
//! assert_eq!(value, 5);
//! assert!(flow.iter().zip(&edges).all(|(&f, &(_, _, cap))| f >= 0 && f <= cap));
//! assert!([a, b, c, d].iter().all(|&u| {
//!     let inflow: i32 = edges.iter().zip(&flow).filter(|(e, _)| e.1 == u).map(|(_, f)| f).sum();
//!     let outflow: i32 = edges.iter().zip(&flow).filter(|(e, _)| e.0 == u).map(|(_, f)| f).sum();
//!     inflow == outflow
//! }));
//! assert_eq!(mincut, vec![s, a, c]);
//! ```

use crate::error::Result;
use crate::network::{EdgeId, FlowNetwork, NodeId};
use crate::solver::{solve_maxflow, Algorithm, Outcome};

use log::{debug, trace};
use num_traits::NumAssign;

use std::collections::VecDeque;

/// Level of nodes that are not (or no longer) part of the level graph.
const UNREACHED: usize = usize::MAX;

/// The dinic max-flow algorithm.
#[derive(Default)]
pub struct Dinic {
    /// The BFS level of each node.
    level: Vec<usize>,
    /// The position of the current arc in the adjacency list of each node.
    current: Vec<usize>,
    queue: VecDeque<NodeId>,
    /// The arcs of the path currently explored by the blocking flow search.
    path: Vec<EdgeId>,
    /// The number of phases of the last run.
    pub cnt_phases: usize,
    /// The number of augmenting paths of the last run.
    pub cnt_augment: usize,
}

impl Dinic {
    fn init(&mut self, n: usize) {
        self.level = vec![UNREACHED; n];
        self.current = vec![0; n];
        self.queue = VecDeque::with_capacity(n);
        self.path = Vec::with_capacity(n);
        self.cnt_phases = 0;
        self.cnt_augment = 0;
    }

    /// Compute the level graph.
    ///
    /// Returns `true` if the sink is reachable from the source.
    fn search<F>(&mut self, net: &FlowNetwork<F>, src: NodeId, snk: NodeId) -> bool
    where
        F: NumAssign + Ord + Copy,
    {
        for l in &mut self.level {
            *l = UNREACHED;
        }
        for c in &mut self.current {
            *c = 0;
        }
        self.level[src] = 0;

        self.queue.clear();
        self.queue.push_back(src);
        while let Some(u) = self.queue.pop_front() {
            let d = self.level[u];
            // all nodes of the sink level have been found
            if d >= self.level[snk] {
                break;
            }
            for &e in net.outedges(u) {
                let edge = net.edge(e);
                let v = edge.to();
                if edge.is_admissible() && self.level[v] == UNREACHED {
                    self.level[v] = d + 1;
                    self.queue.push_back(v);
                }
            }
        }

        self.level[snk] != UNREACHED
    }

    /// Return `true` if arc `e` belongs to the level graph.
    fn is_level_arc<F>(&self, net: &FlowNetwork<F>, e: EdgeId) -> bool
    where
        F: NumAssign + Ord + Copy,
    {
        let edge = net.edge(e);
        let (lu, lv) = (self.level[edge.from()], self.level[edge.to()]);
        edge.is_admissible() && lu != UNREACHED && lv == lu + 1
    }

    /// Compute a blocking flow in the level graph.
    ///
    /// Returns the value of the blocking flow.
    fn augment<F>(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> F
    where
        F: NumAssign + Ord + Copy,
    {
        let mut value = F::zero();
        self.path.clear();

        loop {
            let u = match self.path.last() {
                Some(&e) => net.edge(e).to(),
                None => src,
            };

            if u == snk {
                let df = net.augment(&self.path);
                trace!("dinic: augmenting path with {} arcs", self.path.len());
                value += df;
                self.cnt_augment += 1;
                // retreat to the tail of the first saturated arc
                let k = self
                    .path
                    .iter()
                    .position(|&e| !net.edge(e).is_admissible())
                    .unwrap_or(0);
                self.path.truncate(k);
                continue;
            }

            // advance along the current arc of `u`
            let mut advanced = false;
            while self.current[u] < net.outedges(u).len() {
                let e = net.outedges(u)[self.current[u]];
                if self.is_level_arc(net, e) {
                    self.path.push(e);
                    advanced = true;
                    break;
                }
                self.current[u] += 1;
            }

            if !advanced {
                // dead end, remove the node from the level graph
                self.level[u] = UNREACHED;
                match self.path.pop() {
                    Some(e) => self.current[net.edge(e).from()] += 1,
                    None => break,
                }
            }
        }

        value
    }
}

impl<F> Algorithm<F> for Dinic
where
    F: NumAssign + Ord + Copy,
{
    const NAME: &'static str = "dinic";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        self.init(net.num_nodes());

        let mut value = F::zero();
        while self.search(net, src, snk) {
            self.cnt_phases += 1;
            let df = self.augment(net, src, snk);
            trace!("dinic: phase {} with blocking flow of {} paths", self.cnt_phases, self.cnt_augment);
            value += df;
        }

        debug!(
            "dinic: {} phases, {} augmenting paths",
            self.cnt_phases, self.cnt_augment
        );
        Ok(Outcome {
            value,
            cost: F::zero(),
        })
    }
}

/// Solve the maxflow problem using the algorithm of Dinic.
///
/// The function solves the max flow problem on a network with `n` nodes
/// from the source node `src` to the sink node `snk`. The edges are given
/// as triples `(u, v, capacity)`.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn dinic<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, Vec<F>, Vec<NodeId>)>
where
    F: NumAssign + Ord + Copy,
    I: IntoIterator<Item = (NodeId, NodeId, F)>,
{
    solve_maxflow::<Dinic, F, I>(n, src, snk, edges)
}

#[cfg(test)]
mod tests {
    use super::dinic;
    use crate::{DinicSolver, MaxFlowSolver};

    #[test]
    fn test_dinic() {
        let mut solver = DinicSolver::new(6, 0, 1).unwrap();
        for &(u, v, cap) in &[
            (0, 2, 15),
            (0, 4, 10),
            (2, 3, 6),
            (2, 4, 7),
            (3, 1, 5),
            (3, 5, 2),
            (4, 3, 11),
            (4, 5, 4),
            (5, 3, 4),
            (5, 1, 20),
        ] {
            solver.add_edge(u, v, cap).unwrap();
        }
        assert_eq!(solver.max_flow(), Ok(11));
        assert_eq!(solver.mincut(), Ok(vec![0, 2, 3, 4]));
    }

    #[test]
    fn test_phases() {
        // two disjoint paths of different length need two phases
        let (value, flow, _) = dinic(5, 0, 4, vec![(0, 1, 3u32), (1, 4, 3), (0, 2, 2), (2, 3, 2), (3, 4, 2)]).unwrap();
        assert_eq!(value, 5);
        assert_eq!(flow, vec![3, 3, 2, 2, 2]);

        let mut solver = DinicSolver::<u32>::new(5, 0, 4).unwrap();
        for &(u, v, cap) in &[(0, 1, 3), (1, 4, 3), (0, 2, 2), (2, 3, 2), (3, 4, 2)] {
            solver.add_edge(u, v, cap).unwrap();
        }
        assert_eq!(solver.max_flow(), Ok(5));
        assert_eq!(solver.algorithm().cnt_phases, 2);
        assert_eq!(solver.algorithm().cnt_augment, 2);
    }

    #[test]
    fn test_dead_ends() {
        // many branches that end before reaching the sink
        let mut solver = DinicSolver::<i64>::new(8, 0, 7).unwrap();
        for v in 1..6 {
            solver.add_edge(0, v, 10).unwrap();
        }
        solver.add_edge(5, 6, 10).unwrap();
        solver.add_edge(6, 7, 4).unwrap();
        assert_eq!(solver.max_flow(), Ok(4));
        assert_eq!(solver.mincut(), Ok(vec![0, 1, 2, 3, 4, 5, 6]));
    }
}

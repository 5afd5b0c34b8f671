/*
 * Copyright (c) 2017-2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! This module implements the max flow algorithm of Edmonds-Karp.
//!
//! Each augmenting path is a shortest path (with respect to the number of
//! arcs) in the residual network. This bounds the number of augmentations
//! by `O(n·m)`, hence the running time is `O(n·m²)`.
//!
//! # Example
//!
//! ```
//! use rs_netflow::maxflow::edmondskarp;
//!
//! let (s, a, b, c, d, t) = (0, 1, 2, 3, 4, 5);
//! let edges = vec![
//!     (s, a, 5), (s, c, 5), (a, b, 2), (a, c, 1), (a, d, 1),
//!     (c, d, 2), (d, b, 2), (b, t, 4), (d, t, 5),
//! ];
//!
//! let (value, flow, mincut) = edmondskarp(6, s, t, edges.iter().cloned()).unwrap();
//!
//! assert_eq!(value, 5);
//! assert!(flow.iter().zip(&edges).all(|(&f, &(_, _, cap))| f >= 0 && f <= cap));
//! assert_eq!(mincut, vec![s, a, c]);
//! ```

use super::paths::BreadthFirstPath;
use crate::error::Result;
use crate::network::{FlowNetwork, NodeId};
use crate::solver::{solve_maxflow, Algorithm, Outcome};

use log::{debug, trace};
use num_traits::NumAssign;

/// Max-flow algorithm of Edmonds and Karp.
#[derive(Default)]
pub struct EdmondsKarp {
    bfs: BreadthFirstPath,
    /// The number of augmenting paths found by the last run.
    pub cnt_augment: usize,
}

impl<F> Algorithm<F> for EdmondsKarp
where
    F: NumAssign + Ord + Copy,
{
    const NAME: &'static str = "edmonds-karp";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        self.bfs.init(net.num_nodes());
        self.cnt_augment = 0;

        let mut value = F::zero();

        // nothing to do if there is no edge
        if net.num_edges() == 0 {
            return Ok(Outcome {
                value,
                cost: F::zero(),
            });
        }

        // do bfs from source to sink until the sink cannot be reached
        while self.bfs.find(net, src, snk, F::zero()) {
            // compute augmentation value and augment the flow
            let df = net.augment(self.bfs.path());
            debug_assert!(df > F::zero());
            trace!("shortest augmenting path with {} arcs", self.bfs.path().len());

            value += df;
            self.cnt_augment += 1;
        }

        debug!("edmonds-karp: {} augmenting paths", self.cnt_augment);
        Ok(Outcome {
            value,
            cost: F::zero(),
        })
    }
}

/// Solve the maxflow problem using the algorithm of Edmonds-Karp.
///
/// The function solves the max flow problem on a network with `n` nodes
/// from the source node `src` to the sink node `snk`. The edges are given
/// as triples `(u, v, capacity)`.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn edmondskarp<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, Vec<F>, Vec<NodeId>)>
where
    F: NumAssign + Ord + Copy,
    I: IntoIterator<Item = (NodeId, NodeId, F)>,
{
    solve_maxflow::<EdmondsKarp, F, I>(n, src, snk, edges)
}

#[cfg(test)]
mod tests {
    use crate::{EdmondsKarpSolver, MaxFlowSolver};

    #[test]
    fn test_edmondskarp() {
        let edges = [
            (0, 1, 18),
            (0, 5, 27),
            (1, 2, 9),
            (1, 6, 6),
            (1, 3, 8),
            (3, 2, 1),
            (3, 4, 10),
            (2, 4, 8),
            (2, 3, 3),
            (4, 7, 33),
            (5, 2, 5),
            (5, 6, 9),
            (5, 8, 5),
            (6, 9, 6),
            (6, 4, 2),
            (8, 9, 4),
            (9, 4, 8),
            (9, 7, 6),
        ];
        let mut solver = EdmondsKarpSolver::new(10, 0, 7).unwrap();
        for &(u, v, cap) in &edges {
            solver.add_edge(u, v, cap).unwrap();
        }
        assert_eq!(solver.max_flow(), Ok(30));

        let mincut = solver.mincut().unwrap();
        let cut: i64 = edges
            .iter()
            .filter(|&&(u, v, _)| mincut.contains(&u) && !mincut.contains(&v))
            .map(|&(_, _, cap)| cap)
            .sum();
        assert_eq!(cut, 30);
    }

    #[test]
    fn test_no_edges() {
        let mut solver = EdmondsKarpSolver::new(2, 0, 1).unwrap();
        assert_eq!(solver.max_flow(), Ok(0));
        assert_eq!(solver.mincut(), Ok(vec![0]));
    }
}

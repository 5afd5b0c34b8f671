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

//! This module implements the max flow algorithm of Ford and Fulkerson.
//!
//! Augmenting paths are found by depth first search. The running time is
//! `O(f·m)` where `f` is the value of the maximum flow, so the algorithm
//! should only be used with small integral capacities.
//!
//! # Example
//!
//! ```
//! use rs_netflow::maxflow::fordfulkerson;
//!
//! let (value, flow, mincut) = fordfulkerson(
//!     6,
//!     5,
//!     4,
//!     vec![(5, 0, 10), (5, 1, 10), (3, 4, 10), (2, 4, 10), (0, 1, 2),
//!          (0, 2, 4), (0, 3, 8), (1, 3, 9), (3, 2, 6)],
//! )
//! .unwrap();
//!
//! assert_eq!(value, 19);
//! assert_eq!(flow[0] + flow[1], 19);
//! assert_eq!(flow[2] + flow[3], 19);
//! assert_eq!(mincut, vec![1, 5]);
//! ```

use super::paths::DepthFirstPath;
use crate::error::Result;
use crate::network::{FlowNetwork, NodeId};
use crate::solver::{solve_maxflow, Algorithm, Outcome};

use log::{debug, trace};
use num_traits::NumAssign;

/// Max-flow algorithm of Ford and Fulkerson.
#[derive(Default)]
pub struct FordFulkerson {
    dfs: DepthFirstPath,
    /// The number of augmenting paths found by the last run.
    pub cnt_augment: usize,
}

impl<F> Algorithm<F> for FordFulkerson
where
    F: NumAssign + Ord + Copy,
{
    const NAME: &'static str = "ford-fulkerson";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        self.dfs.init(net.num_nodes());
        self.cnt_augment = 0;

        let mut value = F::zero();
        while self.dfs.find(net, src, snk, F::zero()) {
            let df = net.augment(self.dfs.path());
            debug_assert!(df > F::zero());
            trace!("augmenting path with {} arcs", self.dfs.path().len());
            value += df;
            self.cnt_augment += 1;
        }

        debug!("ford-fulkerson: {} augmenting paths", self.cnt_augment);
        Ok(Outcome {
            value,
            cost: F::zero(),
        })
    }
}

/// Solve the maxflow problem using the algorithm of Ford-Fulkerson.
///
/// The function solves the max flow problem on a network with `n` nodes
/// from the source node `src` to the sink node `snk`. The edges are given
/// as triples `(u, v, capacity)`.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn fordfulkerson<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, Vec<F>, Vec<NodeId>)>
where
    F: NumAssign + Ord + Copy,
    I: IntoIterator<Item = (NodeId, NodeId, F)>,
{
    solve_maxflow::<FordFulkerson, F, I>(n, src, snk, edges)
}

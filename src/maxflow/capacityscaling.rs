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

//! Capacity scaling max flow algorithm.
//!
//! The algorithm keeps a scaling value $\Delta$, initially the largest
//! power of two not exceeding the largest capacity. In each phase only
//! arcs with a remaining capacity of at least $\Delta$ may be used by
//! augmenting paths. Once no such path exists, $\Delta$ is halved. The
//! algorithm stops after the phase with $\Delta = 1$.
//!
//! The number of augmentations is `O(m·log U)` where `U` is the largest
//! capacity. Capacities are expected to be integral.
//!
//! # Example
//!
//! ```
//! use rs_netflow::maxflow::{CapacityScaling, ScalingSearch};
//! use rs_netflow::{CapacityScalingSolver, MaxFlowSolver};
//!
//! let mut algorithm = CapacityScaling::default();
//! algorithm.search = ScalingSearch::BreadthFirst;
//! let mut solver = CapacityScalingSolver::with_algorithm(4, 0, 3, algorithm).unwrap();
//! solver.add_edge(0, 1, 1_000_000).unwrap();
//! solver.add_edge(0, 2, 1_000_000).unwrap();
//! solver.add_edge(1, 2, 1).unwrap();
//! solver.add_edge(1, 3, 1_000_000).unwrap();
//! solver.add_edge(2, 3, 1_000_000).unwrap();
//!
//! assert_eq!(solver.max_flow(), Ok(2_000_000));
//! assert!(solver.algorithm().cnt_augment <= 4);
//! ```

use super::paths::{BreadthFirstPath, DepthFirstPath};
use crate::error::Result;
use crate::network::{FlowNetwork, NodeId};
use crate::solver::{solve_maxflow, Algorithm, Outcome};

use log::{debug, trace};
use num_traits::NumAssign;

/// The search used to find augmenting paths in a scaling phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScalingSearch {
    DepthFirst,
    BreadthFirst,
}

impl Default for ScalingSearch {
    fn default() -> Self {
        ScalingSearch::DepthFirst
    }
}

/// The capacity scaling max-flow algorithm.
#[derive(Default)]
pub struct CapacityScaling {
    /// The path search used in each phase.
    pub search: ScalingSearch,
    /// The number of augmenting paths found by the last run.
    pub cnt_augment: usize,
    /// The number of scaling phases of the last run.
    pub cnt_phases: usize,
    dfs: DepthFirstPath,
    bfs: BreadthFirstPath,
}

impl CapacityScaling {
    /// Find an augmenting path of arcs with remaining capacity at least
    /// `delta` and augment along it.
    ///
    /// Returns the amount of flow pushed, which is `0` if there is no
    /// path.
    fn augment<F>(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId, delta: F) -> F
    where
        F: NumAssign + Ord + Copy,
    {
        match self.search {
            ScalingSearch::DepthFirst => {
                if self.dfs.find(net, src, snk, delta) {
                    net.augment(self.dfs.path())
                } else {
                    F::zero()
                }
            }
            ScalingSearch::BreadthFirst => {
                if self.bfs.find(net, src, snk, delta) {
                    net.augment(self.bfs.path())
                } else {
                    F::zero()
                }
            }
        }
    }
}

impl<F> Algorithm<F> for CapacityScaling
where
    F: NumAssign + Ord + Copy,
{
    const NAME: &'static str = "capacity-scaling";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        let n = net.num_nodes();
        match self.search {
            ScalingSearch::DepthFirst => self.dfs.init(n),
            ScalingSearch::BreadthFirst => self.bfs.init(n),
        }
        self.cnt_augment = 0;
        self.cnt_phases = 0;

        // largest power of two not exceeding the largest capacity
        let two = F::one() + F::one();
        let max_cap = net.max_capacity();
        let mut delta = F::one();
        while delta <= max_cap / two {
            delta *= two;
        }

        let mut value = F::zero();
        while delta >= F::one() {
            self.cnt_phases += 1;
            loop {
                let df = self.augment(net, src, snk, delta);
                if df.is_zero() {
                    break;
                }
                debug_assert!(df >= delta);
                value += df;
                self.cnt_augment += 1;
            }
            trace!("capacity scaling: phase {} finished", self.cnt_phases);
            delta = delta / two;
        }

        debug!(
            "capacity scaling: {} phases, {} augmenting paths",
            self.cnt_phases, self.cnt_augment
        );
        Ok(Outcome {
            value,
            cost: F::zero(),
        })
    }
}

/// Solve the maxflow problem using capacity scaling.
///
/// The function solves the max flow problem on a network with `n` nodes
/// from the source node `src` to the sink node `snk`. The edges are given
/// as triples `(u, v, capacity)`.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn capacity_scaling<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, Vec<F>, Vec<NodeId>)>
where
    F: NumAssign + Ord + Copy,
    I: IntoIterator<Item = (NodeId, NodeId, F)>,
{
    solve_maxflow::<CapacityScaling, F, I>(n, src, snk, edges)
}

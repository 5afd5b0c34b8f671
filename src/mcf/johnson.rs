/*
 * Copyright (c) 2021, 2022 Frank Fischer <frank-fischer@shadow-soft.de>
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

//! Successive shortest paths with node potentials.
//!
//! The initial potentials `h` are the distances from the source computed
//! by Bellman-Ford. Afterwards every residual arc `(u,v)` has a
//! non-negative reduced cost `c(u,v) + h(u) - h(v)`, so each cheapest
//! augmenting path can be found with Dijkstra's algorithm. After each
//! search the potentials are increased by the reduced distances, which
//! keeps all reduced costs non-negative after the augmentation.
//!
//! The algorithm requires that no negative cycle is reachable from the
//! source. Such a cycle is reported as [`FlowError::NegativeCycle`]
//! before any flow is sent.
//!
//! # Example
//!
//! ```
//! use rs_netflow::{JohnsonSolver, MaxFlowSolver, MinCostFlowSolver};
//!
//! let mut solver = JohnsonSolver::new(4, 0, 3).unwrap();
//! solver.add_edge_with_cost(0, 1, 3, 2).unwrap();
//! solver.add_edge_with_cost(0, 2, 2, 6).unwrap();
//! solver.add_edge_with_cost(1, 2, 2, -3).unwrap();
//! solver.add_edge_with_cost(1, 3, 2, 4).unwrap();
//! solver.add_edge_with_cost(2, 3, 3, 1).unwrap();
//!
//! assert_eq!(solver.max_flow(), Ok(5));
//! // 0-1-2-3 once, 0-1-3 and 0-2-3 twice
//! assert_eq!(solver.min_cost(), Ok(0 + 2 * 6 + 2 * 7));
//! ```

use super::bellmanford::{extract_path, find_cycle, shortest_paths};
use crate::collections::{BinHeap, NodeSet};
use crate::error::{FlowError, Result};
use crate::network::{EdgeId, FlowNetwork, NodeId};
use crate::solver::{solve_mincost, Algorithm, CostAlgorithm, Outcome};

use log::{debug, trace};
use num_traits::{NumAssign, Signed};

/// Min-cost-flow by successive shortest paths with Dijkstra on reduced costs.
pub struct Johnson<F> {
    /// The node potentials.
    potential: Vec<F>,
    /// The reduced distances of the last search.
    dist: Vec<F>,
    pred: Vec<Option<EdgeId>>,
    heap: BinHeap<F>,
    /// The nodes whose distance is final.
    done: NodeSet,
    path: Vec<EdgeId>,
    /// The number of augmenting paths of the last run.
    pub cnt_augment: usize,
}

impl<F> Default for Johnson<F>
where
    F: NumAssign + Ord + Copy,
{
    fn default() -> Self {
        Johnson {
            potential: vec![],
            dist: vec![],
            pred: vec![],
            heap: BinHeap::new(0),
            done: NodeSet::default(),
            path: vec![],
            cnt_augment: 0,
        }
    }
}

impl<F> Johnson<F>
where
    F: NumAssign + Ord + Copy + Signed,
{
    /// Return the current potential of each node.
    pub fn potentials(&self) -> &[F] {
        &self.potential
    }

    /// Compute the initial potentials.
    fn init_potentials(&mut self, net: &FlowNetwork<F>, src: NodeId) -> Result<()> {
        if let Some(v) = shortest_paths(net, src, &mut self.dist, &mut self.pred) {
            let u = find_cycle(net, v, &self.pred, &mut self.done).unwrap_or(v);
            debug!("johnson: negative cycle through node {} reachable from the source", u);
            return Err(FlowError::NegativeCycle(u));
        }
        // nodes not reachable from the source never get reachable later
        for u in 0..net.num_nodes() {
            self.potential[u] = if u == src || self.pred[u].is_some() {
                self.dist[u]
            } else {
                F::zero()
            };
        }
        Ok(())
    }

    /// Run Dijkstra on the reduced costs and update the potentials.
    ///
    /// Returns `true` if the sink can be reached.
    fn search(&mut self, net: &FlowNetwork<F>, src: NodeId, snk: NodeId) -> bool {
        self.heap.clear();
        self.done.clear();
        for p in &mut self.pred {
            *p = None;
        }

        self.heap.push_or_decrease(src, F::zero());
        while let Some((u, d)) = self.heap.pop_min() {
            self.dist[u] = d;
            self.done.insert(u);
            for &e in net.outedges(u) {
                let edge = net.edge(e);
                let v = edge.to();
                if !edge.is_admissible() || self.done.contains(v) {
                    continue;
                }
                let reduced = edge.cost() + self.potential[u] - self.potential[v];
                debug_assert!(reduced >= F::zero());
                if self.heap.push_or_decrease(v, d + reduced) {
                    self.pred[v] = Some(e);
                }
            }
        }

        for u in 0..net.num_nodes() {
            if self.done.contains(u) {
                self.potential[u] += self.dist[u];
            }
        }

        self.done.contains(snk)
    }
}

impl<F> Algorithm<F> for Johnson<F>
where
    F: NumAssign + Ord + Copy + Signed,
{
    const NAME: &'static str = "johnson";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        let n = net.num_nodes();
        self.potential = vec![F::zero(); n];
        self.dist = vec![F::zero(); n];
        self.pred = vec![None; n];
        self.heap = BinHeap::new(n);
        self.done = NodeSet::new(n);
        self.path = Vec::with_capacity(n);
        self.cnt_augment = 0;

        self.init_potentials(net, src)?;

        let mut value = F::zero();
        let mut cost = F::zero();
        while self.search(net, src, snk) {
            extract_path(net, src, snk, &self.pred, &mut self.path);
            let df = net.augment(&self.path);
            debug_assert!(df > F::zero());
            trace!("johnson: cheapest augmenting path with {} arcs", self.path.len());
            value += df;
            cost += df * net.path_cost(&self.path);
            self.cnt_augment += 1;
        }

        debug!("johnson: {} augmenting paths", self.cnt_augment);
        Ok(Outcome { value, cost })
    }
}

impl<F> CostAlgorithm<F> for Johnson<F> where F: NumAssign + Ord + Copy + Signed {}

/// Solve the min-cost-max-flow problem by successive shortest paths with
/// node potentials.
///
/// The edges are given as tuples `(u, v, capacity, cost)`. The function
/// fails if a negative cycle is reachable from `src`.
///
/// The function returns the flow value, the total cost and the flow on
/// each edge.
pub fn johnson_mcf<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, F, Vec<F>)>
where
    F: NumAssign + Ord + Copy + Signed,
    I: IntoIterator<Item = (NodeId, NodeId, F, F)>,
{
    solve_mincost::<Johnson<F>, F, I>(n, src, snk, edges)
}

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

//! Successive shortest paths with the algorithm of Bellman-Ford.
//!
//! Each augmenting path is a cheapest path in the residual network. The
//! costs of residual arcs may be negative, so the paths are computed with
//! the algorithm of Bellman-Ford in `O(n·m)` time, which gives a total
//! running time of `O(f·n·m)`.
//!
//! A negative cycle reachable from the source is either cancelled by
//! pushing flow around it (the default) or reported as
//! [`FlowError::NegativeCycle`].
//!
//! # Example
//!
//! ```
//! use rs_netflow::mcf::bellmanford_mcf;
//!
//! // two parallel routes, the cheap one has small capacity
//! let (value, cost, flow) = bellmanford_mcf(
//!     4,
//!     0,
//!     3,
//!     vec![(0, 1, 4, 1), (1, 3, 4, 1), (0, 2, 10, 3), (2, 3, 10, 3)],
//! )
//! .unwrap();
//!
//! assert_eq!(value, 14);
//! assert_eq!(cost, 4 * 2 + 10 * 6);
//! assert_eq!(flow, vec![4, 4, 10, 10]);
//! ```

use crate::collections::NodeSet;
use crate::error::{FlowError, Result};
use crate::network::{EdgeId, FlowNetwork, NodeId};
use crate::solver::{solve_mincost, Algorithm, CostAlgorithm, Outcome};

use log::{debug, trace};
use num_traits::{NumAssign, Signed};

/// Compute cheapest paths from `src` in the residual network.
///
/// Only arcs with positive remaining capacity are used. After the call
/// `pred[v]` is the last arc of a cheapest path to `v` of cost `dist[v]`,
/// or `None` if `v` cannot be reached (or `v == src`).
///
/// Returns `Some(v)` if a negative cycle is reachable from `src`. In this
/// case following the `pred` arcs backwards from `v` leads into such a
/// cycle.
pub(crate) fn shortest_paths<F>(
    net: &FlowNetwork<F>,
    src: NodeId,
    dist: &mut [F],
    pred: &mut [Option<EdgeId>],
) -> Option<NodeId>
where
    F: NumAssign + Ord + Copy,
{
    let n = net.num_nodes();
    for d in dist.iter_mut() {
        *d = F::zero();
    }
    for p in pred.iter_mut() {
        *p = None;
    }

    for i in 0..n {
        let mut changed = false;
        for (e, edge) in net.edges().iter().enumerate() {
            if !edge.is_admissible() {
                continue;
            }
            let (u, v) = (edge.from(), edge.to());

            // skip tails that have not been seen, yet
            if u != src && pred[u].is_none() {
                continue;
            }

            let newdist = dist[u] + edge.cost();
            if newdist < dist[v] || (v != src && pred[v].is_none()) {
                dist[v] = newdist;
                pred[v] = Some(e);
                changed = true;

                if i + 1 == n {
                    return Some(v);
                }
            }
        }
        if !changed {
            break;
        }
    }

    None
}

/// Collect the arcs of the path from `src` to `v` given by `pred`.
///
/// The path is empty if `v` cannot be reached.
pub(crate) fn extract_path<F>(
    net: &FlowNetwork<F>,
    src: NodeId,
    v: NodeId,
    pred: &[Option<EdgeId>],
    path: &mut Vec<EdgeId>,
) where
    F: NumAssign + Ord + Copy,
{
    path.clear();
    let mut v = v;
    while v != src {
        match pred[v] {
            Some(e) => {
                path.push(e);
                v = net.edge(e).from();
            }
            None => {
                path.clear();
                return;
            }
        }
    }
    path.reverse();
}

/// Follow the `pred` arcs backwards from `v` until some node repeats.
///
/// Returns that node, which lies on a cycle of `pred` arcs, or `None` if
/// the walk ends at a node without predecessor.
pub(crate) fn find_cycle<F>(
    net: &FlowNetwork<F>,
    v: NodeId,
    pred: &[Option<EdgeId>],
    seen: &mut NodeSet,
) -> Option<NodeId>
where
    F: NumAssign + Ord + Copy,
{
    seen.clear();
    let mut u = v;
    while seen.insert(u) {
        u = net.edge(pred[u]?).from();
    }
    Some(u)
}

/// Min-cost-flow by successive shortest paths computed with Bellman-Ford.
pub struct BellmanFord<F> {
    dist: Vec<F>,
    pred: Vec<Option<EdgeId>>,
    path: Vec<EdgeId>,
    seen: NodeSet,
    /// Whether negative cycles are cancelled instead of failing.
    pub cancel_negative_cycles: bool,
    /// The number of augmenting paths of the last run.
    pub cnt_augment: usize,
    /// The number of cancelled negative cycles of the last run.
    pub cnt_cancelled: usize,
}

impl<F> Default for BellmanFord<F> {
    fn default() -> Self {
        BellmanFord {
            dist: vec![],
            pred: vec![],
            path: vec![],
            seen: NodeSet::default(),
            cancel_negative_cycles: true,
            cnt_augment: 0,
            cnt_cancelled: 0,
        }
    }
}

impl<F> BellmanFord<F>
where
    F: NumAssign + Ord + Copy + Signed,
{
    /// Push flow around the cycle of `pred` arcs through node `start`.
    ///
    /// Returns the (negative) change of the total cost.
    fn cancel_cycle(&mut self, net: &mut FlowNetwork<F>, start: NodeId) -> F {
        self.path.clear();
        let mut u = start;
        while let Some(e) = self.pred[u] {
            self.path.push(e);
            u = net.edge(e).from();
            if u == start {
                break;
            }
        }
        debug_assert_eq!(u, start);
        self.path.reverse();

        let cycle_cost = net.path_cost(&self.path);
        debug_assert!(cycle_cost < F::zero());
        let df = net.augment(&self.path);
        trace!("bellman-ford: cancelled cycle with {} arcs through node {}", self.path.len(), start);
        df * cycle_cost
    }
}

impl<F> Algorithm<F> for BellmanFord<F>
where
    F: NumAssign + Ord + Copy + Signed,
{
    const NAME: &'static str = "bellman-ford";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        let n = net.num_nodes();
        self.dist = vec![F::zero(); n];
        self.pred = vec![None; n];
        self.path = Vec::with_capacity(n);
        self.seen = NodeSet::new(n);
        self.cnt_augment = 0;
        self.cnt_cancelled = 0;

        let mut value = F::zero();
        let mut cost = F::zero();
        loop {
            if let Some(v) = shortest_paths(net, src, &mut self.dist, &mut self.pred) {
                let u = find_cycle(net, v, &self.pred, &mut self.seen).ok_or(FlowError::NegativeCycle(v))?;
                if !self.cancel_negative_cycles {
                    return Err(FlowError::NegativeCycle(u));
                }
                cost += self.cancel_cycle(net, u);
                self.cnt_cancelled += 1;
                continue;
            }

            extract_path(net, src, snk, &self.pred, &mut self.path);
            if self.path.is_empty() {
                break;
            }

            let df = net.augment(&self.path);
            debug_assert!(df > F::zero());
            let path_cost = net.path_cost(&self.path);
            trace!("bellman-ford: cheapest augmenting path with {} arcs", self.path.len());
            value += df;
            cost += df * path_cost;
            self.cnt_augment += 1;
        }

        debug!(
            "bellman-ford: {} augmenting paths, {} cancelled cycles",
            self.cnt_augment, self.cnt_cancelled
        );
        Ok(Outcome { value, cost })
    }
}

impl<F> CostAlgorithm<F> for BellmanFord<F> where F: NumAssign + Ord + Copy + Signed {}

/// Solve the min-cost-max-flow problem by successive shortest paths with
/// Bellman-Ford.
///
/// The edges are given as tuples `(u, v, capacity, cost)`. Negative
/// cycles reachable from `src` are cancelled.
///
/// The function returns the flow value, the total cost and the flow on
/// each edge.
pub fn bellmanford_mcf<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, F, Vec<F>)>
where
    F: NumAssign + Ord + Copy + Signed,
    I: IntoIterator<Item = (NodeId, NodeId, F, F)>,
{
    solve_mincost::<BellmanFord<F>, F, I>(n, src, snk, edges)
}

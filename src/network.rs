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

//! The residual network all flow algorithms work on.
//!
//! A network is a digraph where each edge is represented by a pair of
//! arcs -- the forward arc and its reverse (residual) arc. All arcs are
//! stored in one arena:
//!
//!   - the edge added `i`-th is mapped to the arcs `2*i` (forward arc)
//!     and `2*i+1` (residual arc),
//!   - hence the residual arc of arc `e` is always `e ^ 1`.
//!
//! Each arc stores its *remaining* capacity. Pushing `df` units of flow
//! over an arc decreases its remaining capacity and increases the
//! remaining capacity of its residual arc by the same amount, so the sum
//! of both never changes.
//!
//! # Example
//!
//! ```
//! use rs_netflow::FlowNetwork;
//!
//! let mut net = FlowNetwork::<i64>::new(3).unwrap();
//! let e = net.add_edge(0, 1, 5).unwrap();
//! let f = net.add_edge(1, 2, 3).unwrap();
//!
//! assert_eq!(net.num_nodes(), 3);
//! assert_eq!(net.num_edges(), 2);
//! assert_eq!(net.num_arcs(), 4);
//! assert_eq!(net.reverse(e), e + 1);
//! assert_eq!(net.edge(f).remaining(), 3);
//! assert_eq!(net.edge(net.reverse(f)).remaining(), 0);
//! assert_eq!(net.outedges(1), &[e + 1, f]);
//! ```

use crate::error::{FlowError, Result};

use num_traits::{NumAssign, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

use std::cmp::min;
use std::collections::VecDeque;

/// Index of a node.
pub type NodeId = usize;

/// Index of an arc in the network.
pub type EdgeId = usize;

/// An arc of the residual network.
#[derive(Clone, Debug)]
pub struct Edge<F> {
    from: NodeId,
    to: NodeId,
    /// The remaining capacity.
    cap: F,
    /// The capacity at construction.
    original: F,
    cost: F,
}

impl<F> Edge<F>
where
    F: NumAssign + Ord + Copy,
{
    /// The tail of this arc.
    pub fn from(&self) -> NodeId {
        self.from
    }

    /// The head of this arc.
    pub fn to(&self) -> NodeId {
        self.to
    }

    /// The capacity that can still be pushed over this arc.
    pub fn remaining(&self) -> F {
        self.cap
    }

    /// The capacity of this arc when it has been created.
    ///
    /// This is `0` for residual arcs.
    pub fn original_capacity(&self) -> F {
        self.original
    }

    /// The cost per unit of flow over this arc.
    pub fn cost(&self) -> F {
        self.cost
    }

    /// Return `true` if flow can still be pushed over this arc.
    pub fn is_admissible(&self) -> bool {
        self.cap > F::zero()
    }

    fn flow(&self) -> F {
        if self.original > self.cap {
            self.original - self.cap
        } else {
            F::zero()
        }
    }
}

/// A read-only snapshot of an arc.
///
/// The flow of an edge is reported on its forward arc, residual arcs
/// always report a flow of `0`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct EdgeView<F> {
    pub from: NodeId,
    pub to: NodeId,
    pub flow: F,
    pub remaining: F,
    pub original_capacity: F,
    pub cost: F,
    /// Whether this is the residual arc of some edge.
    pub residual: bool,
}

/// A residual network on the nodes `0..n`.
#[derive(Clone, Debug)]
pub struct FlowNetwork<F = i64> {
    /// All arcs, forward arc `2*i` and residual arc `2*i+1`.
    edges: Vec<Edge<F>>,
    /// The outgoing arcs of each node.
    outedges: Vec<Vec<EdgeId>>,
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy,
{
    /// Create a network with `n` nodes and no edges.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(FlowError::EmptyNetwork);
        }
        Ok(FlowNetwork {
            edges: vec![],
            outedges: vec![vec![]; n],
        })
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.outedges.len()
    }

    /// Return the number of edges added to the network.
    pub fn num_edges(&self) -> usize {
        self.edges.len() / 2
    }

    /// Return the number of arcs, i.e. twice the number of edges.
    pub fn num_arcs(&self) -> usize {
        self.edges.len()
    }

    /// Fail with `InvalidNode` if `u` is not a node of this network.
    pub fn check_node(&self, u: NodeId) -> Result<()> {
        if u < self.num_nodes() {
            Ok(())
        } else {
            Err(FlowError::InvalidNode {
                node: u,
                n: self.num_nodes(),
            })
        }
    }

    /// Add an edge from `u` to `v` with capacity `cap`.
    ///
    /// Returns the id of the forward arc, the residual arc has id `e + 1`.
    pub fn add_edge(&mut self, u: NodeId, v: NodeId, cap: F) -> Result<EdgeId> {
        self.add_arc_pair(u, v, cap, F::zero(), F::zero())
    }

    fn add_arc_pair(&mut self, u: NodeId, v: NodeId, cap: F, cost: F, rcost: F) -> Result<EdgeId> {
        self.check_node(u)?;
        self.check_node(v)?;
        if cap < F::zero() {
            return Err(FlowError::InvalidCapacity { from: u, to: v });
        }

        let e = self.edges.len();
        self.edges.push(Edge {
            from: u,
            to: v,
            cap,
            original: cap,
            cost,
        });
        self.edges.push(Edge {
            from: v,
            to: u,
            cap: F::zero(),
            original: F::zero(),
            cost: rcost,
        });
        self.outedges[u].push(e);
        self.outedges[v].push(e | 1);
        Ok(e)
    }

    /// Return the arc with id `e`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is not an arc of the network.
    pub fn edge(&self, e: EdgeId) -> &Edge<F> {
        &self.edges[e]
    }

    /// Return all arcs of the network.
    pub fn edges(&self) -> &[Edge<F>] {
        &self.edges
    }

    /// Return the residual arc of `e`.
    pub fn reverse(&self, e: EdgeId) -> EdgeId {
        e ^ 1
    }

    /// Return `true` if `e` is the residual arc of some edge.
    pub fn is_residual(&self, e: EdgeId) -> bool {
        e & 1 == 1
    }

    /// Return the outgoing arcs (including residual arcs) of node `u`.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of the network.
    pub fn outedges(&self, u: NodeId) -> &[EdgeId] {
        &self.outedges[u]
    }

    /// Return the flow over arc `e`.
    ///
    /// Residual arcs always have flow `0`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is not an arc of the network.
    pub fn flow(&self, e: EdgeId) -> F {
        if self.is_residual(e) {
            F::zero()
        } else {
            self.edges[e].flow()
        }
    }

    /// Return the largest capacity of any edge.
    pub fn max_capacity(&self) -> F {
        self.edges
            .iter()
            .step_by(2)
            .map(|e| e.original)
            .max()
            .unwrap_or_else(F::zero)
    }

    /// Return a snapshot of arc `e`.
    ///
    /// # Panics
    ///
    /// Panics if `e` is not an arc of the network.
    pub fn view(&self, e: EdgeId) -> EdgeView<F> {
        let edge = &self.edges[e];
        EdgeView {
            from: edge.from,
            to: edge.to,
            flow: self.flow(e),
            remaining: edge.cap,
            original_capacity: edge.original,
            cost: edge.cost,
            residual: self.is_residual(e),
        }
    }

    /// Return snapshots of all outgoing arcs of node `u`.
    pub fn views(&self, u: NodeId) -> impl Iterator<Item = EdgeView<F>> + '_ {
        self.outedges[u].iter().map(move |&e| self.view(e))
    }

    /// Return snapshots of the outgoing arcs of all nodes.
    pub fn snapshot(&self) -> Vec<Vec<EdgeView<F>>> {
        (0..self.num_nodes()).map(|u| self.views(u).collect()).collect()
    }

    /// Push `df` units of flow over arc `e`.
    pub(crate) fn push(&mut self, e: EdgeId, df: F) {
        debug_assert!(df > F::zero() && df <= self.edges[e].cap);
        self.edges[e].cap -= df;
        self.edges[e ^ 1].cap += df;
    }

    /// Return the smallest remaining capacity on a path.
    ///
    /// The path must not be empty.
    pub(crate) fn bottleneck(&self, path: &[EdgeId]) -> F {
        debug_assert!(!path.is_empty());
        let mut df = self.edges[path[0]].cap;
        for &e in &path[1..] {
            df = min(df, self.edges[e].cap);
        }
        df
    }

    /// Push the bottleneck capacity over all arcs of a path.
    ///
    /// Returns the amount of flow pushed.
    pub(crate) fn augment(&mut self, path: &[EdgeId]) -> F {
        let df = self.bottleneck(path);
        if df > F::zero() {
            for &e in path {
                self.push(e, df);
            }
        }
        df
    }

    /// Return the sum of the costs of all arcs on a path.
    pub(crate) fn path_cost(&self, path: &[EdgeId]) -> F {
        let mut cost = F::zero();
        for &e in path {
            cost += self.edges[e].cost;
        }
        cost
    }

    /// Return the nodes reachable from `src` over arcs with positive
    /// remaining capacity.
    ///
    /// # Panics
    ///
    /// Panics if `src` is not a node of the network.
    pub fn reachable(&self, src: NodeId) -> Vec<bool> {
        let mut seen = vec![false; self.num_nodes()];
        let mut queue = VecDeque::new();
        seen[src] = true;
        queue.push_back(src);
        while let Some(u) = queue.pop_front() {
            for &e in &self.outedges[u] {
                let edge = &self.edges[e];
                if edge.is_admissible() && !seen[edge.to] {
                    seen[edge.to] = true;
                    queue.push_back(edge.to);
                }
            }
        }
        seen
    }

    /// Return the excess (inflow minus outflow) of node `u`.
    ///
    /// The excess is signed, so it is only available for signed types.
    ///
    /// # Panics
    ///
    /// Panics if `u` is not a node of the network.
    pub fn excess(&self, u: NodeId) -> F
    where
        F: Signed,
    {
        let mut excess = F::zero();
        for &e in &self.outedges[u] {
            let fwd = e & !1;
            if self.is_residual(e) {
                excess += self.flow(fwd);
            } else {
                excess -= self.flow(fwd);
            }
        }
        excess
    }
}

impl<F> FlowNetwork<F>
where
    F: NumAssign + Ord + Copy + Signed,
{
    /// Add an edge from `u` to `v` with capacity `cap` and cost `cost`.
    ///
    /// The residual arc gets cost `-cost`.
    pub fn add_edge_with_cost(&mut self, u: NodeId, v: NodeId, cap: F, cost: F) -> Result<EdgeId> {
        self.add_arc_pair(u, v, cap, cost, -cost)
    }
}

#[cfg(test)]
mod tests {
    use super::FlowNetwork;
    use crate::error::FlowError;

    #[test]
    fn test_invalid_input() {
        assert_eq!(FlowNetwork::<i64>::new(0).unwrap_err(), FlowError::EmptyNetwork);

        let mut net = FlowNetwork::<i64>::new(3).unwrap();
        assert_eq!(net.add_edge(0, 3, 1), Err(FlowError::InvalidNode { node: 3, n: 3 }));
        assert_eq!(net.add_edge(5, 1, 1), Err(FlowError::InvalidNode { node: 5, n: 3 }));
        assert_eq!(net.add_edge(0, 1, -1), Err(FlowError::InvalidCapacity { from: 0, to: 1 }));
        assert_eq!(net.num_edges(), 0);
    }

    #[test]
    fn test_residual_pairs() {
        let mut net = FlowNetwork::<i64>::new(4).unwrap();
        net.add_edge_with_cost(0, 1, 4, 2).unwrap();
        net.add_edge_with_cost(1, 2, 3, -5).unwrap();
        net.add_edge(2, 3, 7).unwrap();
        net.add_edge(2, 2, 1).unwrap();

        for e in 0..net.num_arcs() {
            let f = net.reverse(e);
            assert_eq!(net.reverse(f), e);
            assert_eq!(net.edge(e).from(), net.edge(f).to());
            assert_eq!(net.edge(e).to(), net.edge(f).from());
            assert_eq!(net.edge(e).cost(), -net.edge(f).cost());
        }
        assert_eq!(net.edge(1).original_capacity(), 0);
        assert_eq!(net.max_capacity(), 7);
    }

    #[test]
    fn test_augment() {
        let mut net = FlowNetwork::<i64>::new(3).unwrap();
        let e = net.add_edge_with_cost(0, 1, 5, 1).unwrap();
        let f = net.add_edge_with_cost(1, 2, 3, 4).unwrap();

        assert_eq!(net.bottleneck(&[e, f]), 3);
        assert_eq!(net.path_cost(&[e, f]), 5);
        assert_eq!(net.augment(&[e, f]), 3);

        assert_eq!(net.flow(e), 3);
        assert_eq!(net.flow(f), 3);
        assert_eq!(net.flow(net.reverse(f)), 0);
        assert_eq!(net.edge(e).remaining() + net.edge(net.reverse(e)).remaining(), 5);
        assert_eq!(net.excess(1), 0);
        assert_eq!(net.excess(2), 3);
        assert_eq!(net.excess(0), -3);

        // undo one unit over the residual arc
        net.push(net.reverse(f), 1);
        assert_eq!(net.flow(f), 2);
        assert_eq!(net.reachable(0), vec![true, true, true]);

        let view = net.view(net.reverse(e));
        assert!(view.residual);
        assert_eq!(view.remaining, 3);
        assert_eq!(view.flow, 0);
        assert_eq!(net.snapshot()[1].len(), 2);
    }

    #[test]
    #[should_panic]
    fn test_edge_out_of_range() {
        let mut net = FlowNetwork::<i64>::new(2).unwrap();
        net.add_edge(0, 1, 1).unwrap();
        net.edge(2);
    }

    #[test]
    #[should_panic]
    fn test_excess_out_of_range() {
        let net = FlowNetwork::<i64>::new(2).unwrap();
        net.excess(2);
    }
}

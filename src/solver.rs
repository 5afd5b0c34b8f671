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

//! The common solver interface.
//!
//! A [`Solver`] owns a [`FlowNetwork`] together with a source and a sink
//! node and an algorithm implementing [`Algorithm`]. Edges are added
//! while the solver is being built. The first call to a result accessor
//! runs the algorithm exactly once, all later calls return the cached
//! result. Adding edges after that fails with
//! [`FlowError::AlreadySolved`].
//!
//! # Example
//!
//! ```
//! use rs_netflow::{DinicSolver, MaxFlowSolver};
//!
//! let mut solver = DinicSolver::new(4, 3, 2).unwrap();
//! solver.add_edge(3, 0, 5).unwrap();
//! solver.add_edge(0, 1, 3).unwrap();
//! solver.add_edge(1, 2, 7).unwrap();
//!
//! assert_eq!(solver.max_flow(), Ok(3));
//! assert_eq!(solver.mincut(), Ok(vec![0, 3]));
//! assert!(solver.add_edge(0, 2, 1).is_err());
//! ```

use crate::error::{FlowError, Result};
use crate::network::{EdgeId, EdgeView, FlowNetwork, NodeId};

use log::{debug, warn};
use num_traits::{NumAssign, Signed};

#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The result of a flow computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Outcome<F> {
    /// The flow value.
    pub value: F,
    /// The total cost of the flow (`0` for algorithms ignoring costs).
    pub cost: F,
}

/// A flow algorithm.
///
/// An algorithm computes a flow from `src` to `snk` by pushing flow over
/// the arcs of the network. It may keep working data between runs, but
/// the solver calls `run` at most once.
pub trait Algorithm<F>: Default {
    /// The name of the algorithm used in log messages.
    const NAME: &'static str;

    /// Compute the flow.
    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>>;
}

/// An algorithm computing a maximum flow of minimal cost.
pub trait CostAlgorithm<F>: Algorithm<F> {}

/// The basic operations of a max-flow solver.
pub trait MaxFlowSolver<F> {
    /// Add an edge from `u` to `v` with capacity `cap`.
    fn add_edge(&mut self, u: NodeId, v: NodeId, cap: F) -> Result<EdgeId>;

    /// Return the value of the maximum flow.
    fn max_flow(&mut self) -> Result<F>;

    /// Return the residual network after solving.
    fn graph(&mut self) -> Result<&FlowNetwork<F>>;
}

/// The additional operations of a min-cost-max-flow solver.
pub trait MinCostFlowSolver<F>: MaxFlowSolver<F> {
    /// Add an edge from `u` to `v` with capacity `cap` and cost `cost` per unit.
    fn add_edge_with_cost(&mut self, u: NodeId, v: NodeId, cap: F, cost: F) -> Result<EdgeId>;

    /// Return the cost of the minimum cost maximum flow.
    fn min_cost(&mut self) -> Result<F>;
}

#[derive(Clone, Debug)]
enum Status<F> {
    /// Edges may be added.
    Building,
    /// The problem has been solved.
    Solved(Outcome<F>),
    /// The algorithm failed.
    Failed(FlowError),
}

/// A flow problem together with the algorithm solving it.
pub struct Solver<A, F = i64> {
    net: FlowNetwork<F>,
    src: NodeId,
    snk: NodeId,
    status: Status<F>,
    algorithm: A,
}

impl<A, F> Solver<A, F>
where
    A: Algorithm<F>,
    F: NumAssign + Ord + Copy,
{
    /// Create a solver for a network with `n` nodes.
    pub fn new(n: usize, src: NodeId, snk: NodeId) -> Result<Self> {
        Self::with_algorithm(n, src, snk, A::default())
    }

    /// Create a solver using a configured algorithm.
    pub fn with_algorithm(n: usize, src: NodeId, snk: NodeId, algorithm: A) -> Result<Self> {
        let net = FlowNetwork::new(n)?;
        net.check_node(src)?;
        net.check_node(snk)?;
        if src == snk {
            return Err(FlowError::SourceIsSink(src));
        }
        Ok(Solver {
            net,
            src,
            snk,
            status: Status::Building,
            algorithm,
        })
    }

    /// Return the number of nodes.
    pub fn num_nodes(&self) -> usize {
        self.net.num_nodes()
    }

    /// Return the source node.
    pub fn source(&self) -> NodeId {
        self.src
    }

    /// Return the sink node.
    pub fn sink(&self) -> NodeId {
        self.snk
    }

    /// Return the algorithm, e.g. to read its statistics.
    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Return the algorithm to change its parameters before solving.
    pub fn algorithm_mut(&mut self) -> &mut A {
        &mut self.algorithm
    }

    /// Return `true` if the algorithm has been run.
    pub fn is_solved(&self) -> bool {
        !matches!(self.status, Status::Building)
    }

    fn check_building(&self) -> Result<()> {
        match self.status {
            Status::Building => Ok(()),
            _ => Err(FlowError::AlreadySolved),
        }
    }

    /// Run the algorithm if this has not been done, yet.
    fn execute(&mut self) -> Result<Outcome<F>> {
        if let Status::Building = self.status {
            debug!(
                "{}: solving network with {} nodes and {} edges from {} to {}",
                A::NAME,
                self.net.num_nodes(),
                self.net.num_edges(),
                self.src,
                self.snk
            );
            self.status = match self.algorithm.run(&mut self.net, self.src, self.snk) {
                Ok(outcome) => Status::Solved(outcome),
                Err(err) => {
                    warn!("{}: {}", A::NAME, err);
                    Status::Failed(err)
                }
            };
        }

        match &self.status {
            Status::Solved(outcome) => Ok(*outcome),
            Status::Failed(err) => Err(*err),
            Status::Building => unreachable!("solver has just been executed"),
        }
    }

    /// Return the value and the cost of the computed flow.
    pub fn outcome(&mut self) -> Result<Outcome<F>> {
        self.execute()
    }

    /// Return the flow over arc `e`.
    pub fn flow(&mut self, e: EdgeId) -> Result<F> {
        self.execute()?;
        if e >= self.net.num_arcs() {
            return Err(FlowError::InvalidEdge {
                edge: e,
                m: self.net.num_arcs(),
            });
        }
        Ok(self.net.flow(e))
    }

    /// Return the flows over all edges in the order they have been added.
    pub fn flows(&mut self) -> Result<Vec<F>> {
        self.execute()?;
        Ok((0..self.net.num_edges()).map(|i| self.net.flow(i << 1)).collect())
    }

    /// Return the source side of a minimal cut.
    ///
    /// These are the nodes reachable from the source in the final
    /// residual network, in increasing order.
    pub fn mincut(&mut self) -> Result<Vec<NodeId>> {
        self.execute()?;
        Ok(self
            .net
            .reachable(self.src)
            .into_iter()
            .enumerate()
            .filter_map(|(u, seen)| if seen { Some(u) } else { None })
            .collect())
    }

    /// Return snapshots of the outgoing arcs of each node after solving.
    pub fn residual_graph(&mut self) -> Result<Vec<Vec<EdgeView<F>>>> {
        self.execute()?;
        Ok(self.net.snapshot())
    }
}

impl<A, F> MaxFlowSolver<F> for Solver<A, F>
where
    A: Algorithm<F>,
    F: NumAssign + Ord + Copy,
{
    fn add_edge(&mut self, u: NodeId, v: NodeId, cap: F) -> Result<EdgeId> {
        self.check_building()?;
        self.net.add_edge(u, v, cap)
    }

    fn max_flow(&mut self) -> Result<F> {
        self.execute().map(|outcome| outcome.value)
    }

    fn graph(&mut self) -> Result<&FlowNetwork<F>> {
        self.execute()?;
        Ok(&self.net)
    }
}

impl<A, F> MinCostFlowSolver<F> for Solver<A, F>
where
    A: CostAlgorithm<F>,
    F: NumAssign + Ord + Copy + Signed,
{
    fn add_edge_with_cost(&mut self, u: NodeId, v: NodeId, cap: F, cost: F) -> Result<EdgeId> {
        self.check_building()?;
        self.net.add_edge_with_cost(u, v, cap, cost)
    }

    fn min_cost(&mut self) -> Result<F> {
        self.execute().map(|outcome| outcome.cost)
    }
}

/// Build a solver from a list of edges `(u, v, capacity)` and solve it.
///
/// Returns the flow value, the flow on each edge and the source side of
/// a minimal cut.
pub(crate) fn solve_maxflow<A, F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, Vec<F>, Vec<NodeId>)>
where
    A: Algorithm<F>,
    F: NumAssign + Ord + Copy,
    I: IntoIterator<Item = (NodeId, NodeId, F)>,
{
    let mut solver = Solver::<A, F>::new(n, src, snk)?;
    for (u, v, cap) in edges {
        solver.add_edge(u, v, cap)?;
    }
    Ok((solver.max_flow()?, solver.flows()?, solver.mincut()?))
}

/// Build a solver from a list of edges `(u, v, capacity, cost)` and solve it.
///
/// Returns the flow value, its cost and the flow on each edge.
pub(crate) fn solve_mincost<A, F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, F, Vec<F>)>
where
    A: CostAlgorithm<F>,
    F: NumAssign + Ord + Copy + Signed,
    I: IntoIterator<Item = (NodeId, NodeId, F, F)>,
{
    let mut solver = Solver::<A, F>::new(n, src, snk)?;
    for (u, v, cap, cost) in edges {
        solver.add_edge_with_cost(u, v, cap, cost)?;
    }
    let outcome = solver.outcome()?;
    Ok((outcome.value, outcome.cost, solver.flows()?))
}

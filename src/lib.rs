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

#![forbid(unsafe_code)]

//! Maximum flow and minimum cost maximum flow solvers.
//!
//! All solvers work on a [`FlowNetwork`], a residual network with nodes
//! `0..n` in which each edge is stored as a forward arc together with its
//! residual arc. A [`Solver`] combines a network, a source and a sink
//! with an algorithm. The solver computes the flow lazily on the first
//! query and caches the result.
//!
//! # Example
//!
//! ```
//! use rs_netflow::{BellmanFordSolver, DinicSolver, MaxFlowSolver, MinCostFlowSolver};
//!
//! let edges = [(5, 0, 10), (5, 1, 10), (3, 4, 10), (2, 4, 10), (0, 1, 2),
//!              (0, 2, 4), (0, 3, 8), (1, 3, 9), (3, 2, 6)];
//!
//! let mut maxflow = DinicSolver::new(6, 5, 4).unwrap();
//! let mut mincost = BellmanFordSolver::new(6, 5, 4).unwrap();
//! for &(u, v, cap) in &edges {
//!     maxflow.add_edge(u, v, cap).unwrap();
//!     mincost.add_edge_with_cost(u, v, cap, 1).unwrap();
//! }
//!
//! assert_eq!(maxflow.max_flow(), Ok(19));
//! assert_eq!(mincost.max_flow(), Ok(19));
//!
//! for u in 0..4 {
//!     let net = maxflow.graph().unwrap();
//!     assert_eq!(net.excess(u), 0);
//! }
//! ```

pub mod collections;

pub mod error;
pub use self::error::{FlowError, Result};

pub mod network;
pub use self::network::{Edge, EdgeId, EdgeView, FlowNetwork, NodeId};

pub mod solver;
pub use self::solver::{Algorithm, CostAlgorithm, MaxFlowSolver, MinCostFlowSolver, Outcome, Solver};

// # Algorithms

pub mod maxflow;
pub mod mcf;

use self::maxflow::{CapacityScaling, Dinic, EdmondsKarp, FordFulkerson, PushRelabel};
use self::mcf::{BellmanFord, Johnson};

/// Max flow solver using Ford-Fulkerson.
pub type FordFulkersonSolver<F = i64> = Solver<FordFulkerson, F>;

/// Max flow solver using Edmonds-Karp.
pub type EdmondsKarpSolver<F = i64> = Solver<EdmondsKarp, F>;

/// Max flow solver using capacity scaling.
pub type CapacityScalingSolver<F = i64> = Solver<CapacityScaling, F>;

/// Max flow solver using Dinic' algorithm.
pub type DinicSolver<F = i64> = Solver<Dinic, F>;

/// Max flow solver using push-relabel.
pub type PushRelabelSolver<F = i64> = Solver<PushRelabel<F>, F>;

/// Min cost max flow solver using successive shortest paths with Bellman-Ford.
pub type BellmanFordSolver<F = i64> = Solver<BellmanFord<F>, F>;

/// Min cost max flow solver using successive shortest paths with node potentials.
pub type JohnsonSolver<F = i64> = Solver<Johnson<F>, F>;

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

//! Minimum cost maximum flow algorithms.
//!
//! Both algorithms compute a maximum flow from the source to the sink
//! whose total cost is minimal. They repeatedly augment along a cheapest
//! path in the residual network, where residual arcs have the negated
//! cost of their edge.
//!
//! - [`BellmanFord`] searches each path with the algorithm of Bellman and
//!   Ford. It can cancel negative cycles reachable from the source.
//! - [`Johnson`] computes node potentials once and then searches each
//!   path with Dijkstra's algorithm on the non-negative reduced costs.
//!   It rejects networks with a negative cycle reachable from the source.

pub mod bellmanford;
pub use self::bellmanford::{bellmanford_mcf, BellmanFord};

pub mod johnson;
pub use self::johnson::{johnson_mcf, Johnson};

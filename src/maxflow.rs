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

//! Maximum flow algorithms.
//!
//! All algorithms implement [`Algorithm`](crate::solver::Algorithm) and
//! are used through a [`Solver`](crate::Solver). Each module also
//! provides a function solving a problem given as a list of edges.
//!
//! | algorithm          | running time   |
//! |--------------------|----------------|
//! | Ford-Fulkerson     | `O(f·m)`       |
//! | Edmonds-Karp       | `O(n·m²)`      |
//! | capacity scaling   | `O(m²·log U)`  |
//! | Dinic              | `O(n²·m)`      |
//! | push-relabel       | `O(n²·√m)`     |

mod paths;

pub mod capacityscaling;
pub use self::capacityscaling::{capacity_scaling, CapacityScaling, ScalingSearch};

pub mod dinic;
pub use self::dinic::{dinic, Dinic};

pub mod edmondskarp;
pub use self::edmondskarp::{edmondskarp, EdmondsKarp};

pub mod fordfulkerson;
pub use self::fordfulkerson::{fordfulkerson, FordFulkerson};

pub mod pushrelabel;
pub use self::pushrelabel::{pushrelabel, PushRelabel};

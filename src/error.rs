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

//! Errors reported by networks and solvers.

use thiserror::Error;

/// Error raised when building or solving a flow problem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum FlowError {
    /// The network has been created without any node.
    #[error("a network must contain at least one node")]
    EmptyNetwork,
    /// A node index is not in the range `0..n`.
    #[error("node {node} is out of range (the network has {n} nodes)")]
    InvalidNode { node: usize, n: usize },
    /// An arc index is not in the range `0..m`.
    #[error("arc {edge} is out of range (the network has {m} arcs)")]
    InvalidEdge { edge: usize, m: usize },
    /// Source and sink are the same node.
    #[error("source and sink must be different nodes (both are {0})")]
    SourceIsSink(usize),
    /// An edge has been added with a negative capacity.
    #[error("edge ({from}, {to}) has a negative capacity")]
    InvalidCapacity { from: usize, to: usize },
    /// A cycle of negative cost is reachable from the source.
    ///
    /// The node is some node on that cycle.
    #[error("negative cost cycle through node {0} is reachable from the source")]
    NegativeCycle(usize),
    /// The problem has already been solved, the network must not be changed anymore.
    #[error("the flow problem has already been solved")]
    AlreadySolved,
}

impl FlowError {
    /// Return `true` if this error has been caused by invalid input data.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            FlowError::EmptyNetwork
                | FlowError::InvalidNode { .. }
                | FlowError::InvalidEdge { .. }
                | FlowError::SourceIsSink(_)
                | FlowError::InvalidCapacity { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::FlowError;

    #[test]
    fn test_messages() {
        assert_eq!(
            FlowError::InvalidNode { node: 7, n: 4 }.to_string(),
            "node 7 is out of range (the network has 4 nodes)"
        );
        assert_eq!(
            FlowError::InvalidCapacity { from: 1, to: 2 }.to_string(),
            "edge (1, 2) has a negative capacity"
        );
    }

    #[test]
    fn test_classification() {
        assert!(FlowError::EmptyNetwork.is_invalid_argument());
        assert!(FlowError::SourceIsSink(3).is_invalid_argument());
        assert!(!FlowError::NegativeCycle(0).is_invalid_argument());
        assert!(!FlowError::AlreadySolved.is_invalid_argument());
    }
}

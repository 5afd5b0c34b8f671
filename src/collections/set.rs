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

/// A set of nodes `0..n` that can be cleared in constant time.
///
/// Each node stores the generation in which it has been inserted. The
/// set contains exactly the nodes whose stored generation equals the
/// current one, so `clear` only has to start a new generation.
///
/// # Example
///
/// ```
/// use rs_netflow::collections::NodeSet;
///
/// let mut visited = NodeSet::new(4);
/// assert!(visited.insert(2));
/// assert!(!visited.insert(2));
/// assert!(visited.contains(2));
///
/// visited.clear();
/// assert!(!visited.contains(2));
/// assert!(visited.is_empty());
/// ```
#[derive(Clone, Debug)]
pub struct NodeSet {
    /// The generation in which each node has been inserted last.
    last: Vec<usize>,
    /// The current generation.
    token: usize,
    /// Number of nodes in the current generation.
    len: usize,
}

impl NodeSet {
    /// Create an empty set for the nodes `0..n`.
    pub fn new(n: usize) -> Self {
        NodeSet {
            last: vec![0; n],
            token: 1,
            len: 0,
        }
    }

    /// Return the number of nodes this set can hold.
    pub fn num_nodes(&self) -> usize {
        self.last.len()
    }

    /// Return `true` if this set is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return the number of nodes in this set.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Remove all nodes from the set.
    pub fn clear(&mut self) {
        if self.token == usize::max_value() {
            // generation counter wrapped around
            self.last.iter_mut().for_each(|t| *t = 0);
            self.token = 0;
        }
        self.token += 1;
        self.len = 0;
    }

    /// Add node `u` to the set.
    ///
    /// Return `true` iff `u` had not been contained in this set before.
    pub fn insert(&mut self, u: usize) -> bool {
        if self.last[u] == self.token {
            false
        } else {
            self.last[u] = self.token;
            self.len += 1;
            true
        }
    }

    /// Remove node `u` from the set.
    ///
    /// Return `true` if the node had been contained in the set.
    pub fn remove(&mut self, u: usize) -> bool {
        if self.last[u] == self.token {
            self.last[u] = 0;
            self.len -= 1;
            true
        } else {
            false
        }
    }

    /// Return `true` iff node `u` is contained in this set.
    pub fn contains(&self, u: usize) -> bool {
        self.last[u] == self.token
    }
}

impl Default for NodeSet {
    fn default() -> Self {
        NodeSet::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::NodeSet;

    #[test]
    fn test_generations() {
        let mut set = NodeSet::new(5);
        for round in 0..10 {
            assert!(set.is_empty());
            assert!(set.insert(round % 5));
            assert!(set.insert((round + 1) % 5));
            assert_eq!(set.len(), 2);
            assert!(set.remove(round % 5));
            assert!(!set.remove(round % 5));
            assert!(set.contains((round + 1) % 5));
            assert_eq!(set.len(), 1);
            set.clear();
        }
    }

    #[test]
    fn test_wrap_around() {
        let mut set = NodeSet::new(3);
        set.token = usize::max_value();
        set.insert(1);
        set.clear();
        assert!(!set.contains(1));
        assert!(set.insert(1));
        assert!(set.contains(1));
        assert!(!set.contains(0));
    }
}

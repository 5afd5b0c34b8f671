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

//! Binary heap implementation

const NOT_IN_HEAP: usize = usize::MAX;

/// A binary min-heap over the nodes `0..n` with decrease-key.
///
/// Each node is on the heap at most once. Its position is stored so that
/// its value can be decreased in logarithmic time.
///
/// # Example
///
/// ```
/// use rs_netflow::collections::BinHeap;
///
/// let mut heap = BinHeap::new(4);
/// heap.push_or_decrease(0, 7);
/// heap.push_or_decrease(3, 5);
/// heap.push_or_decrease(2, 9);
/// assert!(heap.push_or_decrease(2, 1));
/// assert!(!heap.push_or_decrease(3, 6));
///
/// assert_eq!(heap.pop_min(), Some((2, 1)));
/// assert_eq!(heap.pop_min(), Some((3, 5)));
/// assert_eq!(heap.pop_min(), Some((0, 7)));
/// assert_eq!(heap.pop_min(), None);
/// ```
#[derive(Clone, Debug)]
pub struct BinHeap<V> {
    /// The heap elements, node and value.
    heap: Vec<(usize, V)>,
    /// Position of each node on the heap.
    pos: Vec<usize>,
}

impl<V> BinHeap<V>
where
    V: PartialOrd + Copy,
{
    /// Create an empty heap for the nodes `0..n`.
    pub fn new(n: usize) -> Self {
        BinHeap {
            heap: Vec::with_capacity(n),
            pos: vec![NOT_IN_HEAP; n],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Remove all elements from the heap.
    pub fn clear(&mut self) {
        for &(u, _) in &self.heap {
            self.pos[u] = NOT_IN_HEAP;
        }
        self.heap.clear();
    }

    /// Return `true` if node `u` is currently on the heap.
    pub fn contains(&self, u: usize) -> bool {
        self.pos[u] != NOT_IN_HEAP
    }

    /// Return the current value of node `u` if it is on the heap.
    pub fn value(&self, u: usize) -> Option<V> {
        match self.pos[u] {
            NOT_IN_HEAP => None,
            p => Some(self.heap[p].1),
        }
    }

    /// Push node `u` or decrease its value.
    ///
    /// Return `true` if the node has been added or its value has been
    /// decreased, `false` if it already had a value not larger than
    /// `value`.
    pub fn push_or_decrease(&mut self, u: usize, value: V) -> bool {
        let p = self.pos[u];
        if p == NOT_IN_HEAP {
            self.pos[u] = self.heap.len();
            self.heap.push((u, value));
            self.upheap(self.heap.len() - 1);
            true
        } else if self.heap[p].1 > value {
            self.heap[p].1 = value;
            self.upheap(p);
            true
        } else {
            false
        }
    }

    /// Remove and return the node with the smallest value.
    pub fn pop_min(&mut self) -> Option<(usize, V)> {
        if self.heap.is_empty() {
            return None;
        }

        let min = self.heap.swap_remove(0);
        self.pos[min.0] = NOT_IN_HEAP;
        if !self.heap.is_empty() {
            self.downheap(0);
        }
        Some(min)
    }

    /// Move the element at position `cur_pos` up in the heap until its
    /// parent does not have a larger value or the root is reached.
    fn upheap(&mut self, mut cur_pos: usize) {
        let item = self.heap[cur_pos];
        while cur_pos > 0 {
            let parent_pos = (cur_pos - 1) / 2;
            // Using > instead of >= moves the item up as far as possible,
            // so among equal values the most recent one is popped first.
            if item.1 > self.heap[parent_pos].1 {
                break;
            }
            self.heap[cur_pos] = self.heap[parent_pos];
            self.pos[self.heap[cur_pos].0] = cur_pos;
            cur_pos = parent_pos;
        }
        self.heap[cur_pos] = item;
        self.pos[item.0] = cur_pos;
    }

    /// Move the element at position `cur_pos` down in the heap until both
    /// children have values not smaller than its own.
    fn downheap(&mut self, mut cur_pos: usize) {
        let n = self.heap.len();
        let item = self.heap[cur_pos];
        loop {
            let left_pos = 2 * cur_pos + 1;
            let right_pos = left_pos + 1;
            let next_pos = if left_pos >= n {
                break;
            } else if right_pos >= n || self.heap[left_pos].1 < self.heap[right_pos].1 {
                left_pos
            } else {
                right_pos
            };

            if item.1 <= self.heap[next_pos].1 {
                break;
            }

            self.heap[cur_pos] = self.heap[next_pos];
            self.pos[self.heap[cur_pos].0] = cur_pos;
            cur_pos = next_pos;
        }
        self.heap[cur_pos] = item;
        self.pos[item.0] = cur_pos;
    }
}

#[cfg(test)]
mod tests {
    use super::BinHeap;

    #[test]
    fn test_heap_sort() {
        let values = [13, 4, 9, 4, 1, 22, 7, 0, 15, 3];
        let mut heap = BinHeap::new(values.len());
        for (u, &v) in values.iter().enumerate() {
            assert!(heap.push_or_decrease(u, v));
        }
        assert_eq!(heap.len(), values.len());

        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let popped: Vec<_> = std::iter::from_fn(|| heap.pop_min()).map(|(_, v)| v).collect();
        assert_eq!(popped, sorted);
    }

    #[test]
    fn test_decrease_key() {
        let mut heap = BinHeap::new(6);
        for u in 0..6 {
            heap.push_or_decrease(u, 10 * (u as i64 + 1));
        }
        assert!(heap.push_or_decrease(5, -1));
        assert!(heap.push_or_decrease(3, 15));
        assert_eq!(heap.value(3), Some(15));
        assert_eq!(heap.pop_min(), Some((5, -1)));
        assert_eq!(heap.pop_min(), Some((0, 10)));
        assert_eq!(heap.pop_min(), Some((3, 15)));
        assert!(!heap.contains(3));

        heap.clear();
        assert!(heap.is_empty());
        assert_eq!(heap.value(1), None);
        assert!(heap.push_or_decrease(1, 3));
        assert_eq!(heap.pop_min(), Some((1, 3)));
    }
}

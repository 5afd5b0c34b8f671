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

//! This module implements a push relabel algorithm for solving max
//! flow problems.
//!
//! Active nodes are always discharged in order of decreasing height
//! (highest-label rule). The algorithm works in two phases. Phase I
//! computes a maximum preflow, i.e. it moves as much excess as possible
//! to the sink. Nodes that get a height of at least `n` are cut off from
//! the sink and are left alone until phase II, which sends their excess
//! back to the source.
//!
//! This implementation uses the gap heuristic and, optionally, the global
//! relabelling heuristic.
//!
//! # Example
//!
//! ```
//! use rs_netflow::maxflow::pushrelabel;
//!
//! let (s, a, b, c, d, t) = (0, 1, 2, 3, 4, 5);
//! let edges = vec![
//!     (s, a, 5), (s, c, 5), (a, b, 2), (a, c, 1), (a, d, 1),
//!     (c, d, 2), (d, b, 2), (b, t, 4), (d, t, 5),
//! ];
//!
//! let (value, flow, mincut) = pushrelabel(6, s, t, edges.iter().cloned()).unwrap();
//!
//! assert_eq!(value, 5);
//! assert!(flow.iter().zip(&edges).all(|(&f, &(_, _, cap))| f >= 0 && f <= cap));
//! assert_eq!(mincut, vec![s, a, c]);
//! ```

use crate::error::Result;
use crate::network::{FlowNetwork, NodeId};
use crate::solver::{solve_maxflow, Algorithm, Outcome};

use log::{debug, trace};
use num_traits::NumAssign;

use std::cmp::min;
use std::collections::VecDeque;

/// Marks the end of a list of active nodes.
const NONE: usize = usize::MAX;

/// Data associated with a node.
#[derive(Clone)]
struct NodeInfo<F> {
    height: usize,
    excess: F,
    /// The next active node of the same height.
    next_act: usize,
    /// The position of the current arc in the adjacency list.
    current: usize,
}

/// The nodes of some height.
///
/// The active nodes form a singly linked list, the inactive nodes are
/// only counted.
#[derive(Clone)]
struct Bucket {
    first_act: usize,
    num_inact: usize,
}

impl Bucket {
    fn clear(&mut self) {
        self.first_act = NONE;
        self.num_inact = 0;
    }

    /// Return `true` if there is no node of this height.
    fn is_empty(&self) -> bool {
        self.first_act == NONE && self.num_inact == 0
    }
}

/// The push-relabel algorithm.
pub struct PushRelabel<F> {
    nodes: Vec<NodeInfo<F>>,
    /// One bucket for each height `0..2n`.
    buckets: Vec<Bucket>,
    queue: VecDeque<NodeId>,
    /// The largest height of an active node.
    largest_act: usize,
    /// The number of relabel operations of the last run.
    pub cnt_relabel: usize,
    /// Whether to use the global relabelling heuristic.
    pub use_global_relabelling: bool,
}

impl<F> Default for PushRelabel<F> {
    fn default() -> Self {
        PushRelabel {
            nodes: vec![],
            buckets: vec![],
            queue: VecDeque::new(),
            largest_act: 0,
            cnt_relabel: 0,
            use_global_relabelling: true,
        }
    }
}

impl<F> PushRelabel<F>
where
    F: NumAssign + Ord + Copy,
{
    fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Saturate all arcs leaving the source.
    ///
    /// The source gets height `n`, all other nodes height `0`.
    fn init_preflow(&mut self, net: &mut FlowNetwork<F>, src: NodeId) {
        let n = net.num_nodes();
        self.nodes = vec![
            NodeInfo {
                height: 0,
                excess: F::zero(),
                next_act: NONE,
                current: 0,
            };
            n
        ];
        self.buckets = vec![
            Bucket {
                first_act: NONE,
                num_inact: 0,
            };
            2 * n
        ];
        self.queue = VecDeque::with_capacity(n);
        self.largest_act = 0;
        self.cnt_relabel = 0;

        for i in 0..net.outedges(src).len() {
            let e = net.outedges(src)[i];
            let cap = net.edge(e).remaining();
            if cap > F::zero() {
                net.push(e, cap);
                self.nodes[net.edge(e).to()].excess += cap;
            }
        }

        self.nodes[src].height = n;
    }

    /// Compute exact heights.
    ///
    /// The heights are the distances to the sink in the residual network
    /// (phase I). In phase II nodes that cannot reach the sink get `n`
    /// plus their distance to the source.
    fn update_heights(&mut self, net: &FlowNetwork<F>, src: NodeId, snk: NodeId, from_src: bool) {
        let n = self.num_nodes();

        for node in &mut self.nodes {
            node.height = 2 * n;
            node.current = 0;
        }
        self.nodes[snk].height = 0;
        self.nodes[src].height = n;

        let buckets = if from_src {
            &mut self.buckets[n + 1..]
        } else {
            &mut self.buckets[..n]
        };
        for b in buckets {
            b.clear();
        }
        // source and sink count as inactive
        self.buckets[0].num_inact = 1;
        self.buckets[n].num_inact = 1;

        self.queue.clear();
        self.queue.push_back(snk);
        self.largest_act = 0;
        loop {
            while let Some(v) = self.queue.pop_front() {
                let h = self.nodes[v].height + 1;
                for &e in net.outedges(v) {
                    // `u` can reach `v` if the reverse arc has capacity
                    let u = net.edge(e).to();
                    if self.nodes[u].height > h && net.edge(net.reverse(e)).is_admissible() {
                        self.nodes[u].height = h;
                        self.queue.push_back(u);
                        if self.nodes[u].excess > F::zero() {
                            self.nodes[u].next_act = self.buckets[h].first_act;
                            self.buckets[h].first_act = u;
                            self.largest_act = h;
                            debug_assert!(from_src || self.largest_act < n);
                        } else {
                            self.buckets[h].num_inact += 1;
                        }
                    }
                }
            }

            if self.largest_act >= n || !from_src {
                break;
            }
            // continue from the source for the nodes cut off from the sink
            self.largest_act = n;
            self.queue.push_back(src);
        }
    }

    /// Return the largest height `<= h` with an active node (or `0`).
    fn find_largest_active(&self, h: usize) -> usize {
        (0..=h).rev().find(|&h| self.buckets[h].first_act != NONE).unwrap_or(0)
    }

    /// Push and relabel the active node `u` until it has no excess left.
    ///
    /// In phase I the node may keep some excess if its height reaches `n`.
    fn discharge(&mut self, net: &mut FlowNetwork<F>, u: NodeId) {
        let n = self.num_nodes();
        let deg = net.outedges(u).len();

        loop {
            // smallest height of a neighbor reachable over a non-saturated arc
            let mut h_neighbor = 2 * n;
            let h_u = self.nodes[u].height;
            let first = self.nodes[u].current;

            for cur in first..deg {
                let e = net.outedges(u)[cur];
                let cap = net.edge(e).remaining();
                if cap.is_zero() {
                    continue;
                }
                let v = net.edge(e).to();
                if h_u != self.nodes[v].height + 1 {
                    h_neighbor = h_neighbor.min(self.nodes[v].height);
                    continue;
                }

                let df = min(self.nodes[u].excess, cap);
                debug_assert!(df > F::zero());

                if self.nodes[v].excess.is_zero() {
                    // `v` becomes active
                    let h = self.nodes[v].height;
                    self.nodes[v].next_act = self.buckets[h].first_act;
                    self.buckets[h].first_act = v;
                    debug_assert!(self.buckets[h].num_inact > 0);
                    self.buckets[h].num_inact -= 1;
                }

                net.push(e, df);
                self.nodes[u].excess -= df;
                self.nodes[v].excess += df;

                if self.nodes[u].excess.is_zero() {
                    self.buckets[h_u].num_inact += 1;
                    self.largest_act = self.find_largest_active(h_u);
                    self.nodes[u].current = cur;
                    return;
                }
            }

            // the arcs before the current arc are candidates for the new height, too
            self.nodes[u].current = 0;
            for &e in &net.outedges(u)[..first] {
                if net.edge(e).is_admissible() {
                    h_neighbor = h_neighbor.min(self.nodes[net.edge(e).to()].height);
                }
            }

            if !self.relabel(net, u, h_neighbor + 1) {
                break;
            }
        }
    }

    /// Relabel `u` to height `h_new`.
    ///
    /// Returns `true` iff `u` should be discharged again, which is not the
    /// case in phase I if the new height is at least `n`.
    fn relabel(&mut self, net: &FlowNetwork<F>, u: NodeId, h_new: usize) -> bool {
        debug_assert!(self.nodes[u].excess > F::zero());
        debug_assert!(
            net.outedges(u)
                .iter()
                .filter(|&&e| net.edge(e).is_admissible())
                .map(|&e| self.nodes[net.edge(e).to()].height + 1)
                .min()
                == Some(h_new)
        );

        self.cnt_relabel += 1;

        let n = self.num_nodes();
        let h_old = self.nodes[u].height;
        debug_assert!(h_new > h_old);

        if h_old < n {
            let mut h_new = h_new;

            // gap heuristic: no node left at the old height, so every
            // node above is cut off from the sink
            if self.buckets[h_old].is_empty() {
                for h in h_old + 1..n {
                    if self.buckets[h].is_empty() {
                        break;
                    }
                    self.buckets[h].clear();
                }
                for node in &mut self.nodes {
                    if h_old < node.height && node.height < n {
                        node.height = n + 1;
                    }
                }
                h_new = n + 1;
                trace!("push-relabel: gap at height {}", h_old);
            }

            if h_new >= n {
                debug_assert_eq!(self.largest_act, h_old);
                self.nodes[u].height = h_new;
                // phase I ends when this reaches 0
                self.largest_act = self.find_largest_active(h_old);
                return false;
            }
        }

        self.nodes[u].height = h_new;
        self.largest_act = h_new;
        true
    }
}

impl<F> Algorithm<F> for PushRelabel<F>
where
    F: NumAssign + Ord + Copy,
{
    const NAME: &'static str = "push-relabel";

    fn run(&mut self, net: &mut FlowNetwork<F>, src: NodeId, snk: NodeId) -> Result<Outcome<F>> {
        let n = net.num_nodes();
        self.init_preflow(net, src);
        self.update_heights(net, src, snk, false);

        let mut next_global = if self.use_global_relabelling { n } else { usize::MAX };

        loop {
            // no active node can reach the sink, possibly right after the
            // initial preflow
            if self.largest_act == 0 {
                trace!("push-relabel: end of phase I after {} relabels", self.cnt_relabel);
                self.update_heights(net, src, snk, true);
            }
            if self.largest_act == n {
                break;
            }

            let l = self.largest_act;
            let u = self.buckets[l].first_act;
            self.buckets[l].first_act = self.nodes[u].next_act;
            self.discharge(net, u);

            if self.cnt_relabel >= next_global && self.largest_act < n {
                self.update_heights(net, src, snk, false);
                next_global += n;
            }
        }

        debug!("push-relabel: {} relabel operations", self.cnt_relabel);
        Ok(Outcome {
            value: self.nodes[snk].excess,
            cost: F::zero(),
        })
    }
}

/// Solve the maxflow problem using the push-relabel algorithm.
///
/// The function solves the max flow problem on a network with `n` nodes
/// from the source node `src` to the sink node `snk`. The edges are given
/// as triples `(u, v, capacity)`.
///
/// The function returns the flow value, the flow on each edge and the
/// nodes in a minimal cut.
pub fn pushrelabel<F, I>(n: usize, src: NodeId, snk: NodeId, edges: I) -> Result<(F, Vec<F>, Vec<NodeId>)>
where
    F: NumAssign + Ord + Copy,
    I: IntoIterator<Item = (NodeId, NodeId, F)>,
{
    solve_maxflow::<PushRelabel<F>, F, I>(n, src, snk, edges)
}

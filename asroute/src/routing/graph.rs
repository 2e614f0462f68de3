// AsRoute: Forwarding Tables for Autonomous System Topologies
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Weighted Graph
//!
//! Dense cost matrix over a fixed number of routers. Every cell holds either the cost of the
//! directed link `from -> to`, or `None` if the two routers are not connected. The diagonal is
//! never used as a link, but it can store a self cost of the router.

use crate::routing::{IgpNetwork, LinkCost, RouterId};
use itertools::iproduct;
use petgraph::prelude::*;

/// # Weighted Graph
///
/// The matrix is stored flattened, row by row (`costs[from * num_nodes + to]`). Its size is fixed
/// at construction. Cloning the graph creates a deep copy of the matrix.
///
/// All functions taking a [`RouterId`] **panic** if the index is not smaller than
/// [`WeightedGraph::num_nodes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedGraph {
    num_nodes: usize,
    costs: Vec<Option<LinkCost>>,
}

/// Directed link, extracted from the cost matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    /// Source of the link
    pub from: RouterId,
    /// Target of the link
    pub to: RouterId,
    /// Cost of the link
    pub cost: LinkCost,
}

impl WeightedGraph {
    /// Create a new graph with `num_nodes` routers and no links.
    pub fn new(num_nodes: usize) -> Self {
        Self { num_nodes, costs: vec![None; num_nodes * num_nodes] }
    }

    /// Number of routers in the graph
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Number of directed links (the diagonal is not counted).
    pub fn num_edges(&self) -> usize {
        self.edges().count()
    }

    /// Set the cost of the directed link `from -> to`, overwriting the previous value.
    pub fn set_edge(&mut self, from: RouterId, to: RouterId, cost: LinkCost) {
        let idx = self.idx(from, to);
        self.costs[idx] = Some(cost);
    }

    /// Set the cost of the link in both directions.
    pub fn set_link(&mut self, a: RouterId, b: RouterId, cost: LinkCost) {
        self.set_edge(a, b, cost);
        self.set_edge(b, a, cost);
    }

    /// Remove the directed link `from -> to`. Returns the previous cost.
    pub fn remove_edge(&mut self, from: RouterId, to: RouterId) -> Option<LinkCost> {
        let idx = self.idx(from, to);
        self.costs[idx].take()
    }

    /// Returns the cost of the directed link `from -> to`, or `None` if there is no such link.
    pub fn get_edge(&self, from: RouterId, to: RouterId) -> Option<LinkCost> {
        self.costs[self.idx(from, to)]
    }

    /// Set the self cost of a router (the diagonal of the matrix).
    pub fn set_node(&mut self, router: RouterId, cost: LinkCost) {
        let idx = self.idx(router, router);
        self.costs[idx] = Some(cost);
    }

    /// Returns the self cost of a router.
    pub fn get_node(&self, router: RouterId) -> Option<LinkCost> {
        self.costs[self.idx(router, router)]
    }

    /// Returns an iterator over all directed links, ordered first by `from`, and then by `to`.
    /// The diagonal is skipped. Every call scans the matrix again.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.num_nodes;
        iproduct!(0..n, 0..n).filter(|(from, to)| from != to).filter_map(move |(from, to)| {
            self.costs[from * n + to].map(|cost| Edge {
                from: NodeIndex::new(from),
                to: NodeIndex::new(to),
                cost,
            })
        })
    }

    /// Returns an iterator over all routers.
    pub fn routers(&self) -> impl Iterator<Item = RouterId> {
        (0..self.num_nodes).map(NodeIndex::new)
    }

    /// Export the graph as petgraph graph. The node indices are the same as in the matrix.
    pub fn to_igp_network(&self) -> IgpNetwork {
        let mut g = IgpNetwork::with_capacity(self.num_nodes, self.costs.len());
        for _ in 0..self.num_nodes {
            g.add_node(());
        }
        for e in self.edges() {
            g.add_edge(e.from, e.to, e.cost);
        }
        g
    }

    fn idx(&self, from: RouterId, to: RouterId) -> usize {
        assert!(
            from.index() < self.num_nodes && to.index() < self.num_nodes,
            "router index out of range: ({}, {}) in a graph with {} nodes",
            from.index(),
            to.index(),
            self.num_nodes
        );
        from.index() * self.num_nodes + to.index()
    }
}

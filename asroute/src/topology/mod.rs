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

//! # Topology
//!
//! Description of the network as it is read from the configuration: an ordered list of routers,
//! each with its name, its AS number and the list of peers it declares. A peer is referred to by
//! its AS number, and the topology keeps a lookup from the AS number to the router, such that
//! peers can be resolved in constant time.
//!
//! Once complete, the topology is turned into a [`Snapshot`], containing the cost matrix, the AS
//! map and the names of the routers. The snapshot is immutable, and is shared by all workers
//! computing the forwarding tables.

mod error;
pub mod parser;

pub use error::TopologyError;
pub use parser::{parse_topology, read_topology, ParseError};

use crate::routing::{AsId, LinkCost, Router, RouterId, RoutingError, WeightedGraph};
use log::*;
use petgraph::dot::Dot;
use petgraph::prelude::*;
use std::collections::HashMap;

/// Router declared in the topology
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeConfig {
    /// Name of the router
    pub name: String,
    /// AS number of the router
    pub as_id: AsId,
    /// Declared peers, in the order of declaration
    pub peers: Vec<PeerConfig>,
}

/// Peer declared by a router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeerConfig {
    /// AS number of the peer
    pub as_id: AsId,
    /// Cost of the link towards the peer
    pub cost: LinkCost,
}

/// # Topology
///
/// Routers get their [`RouterId`] in the order in which they are added.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    nodes: Vec<NodeConfig>,
    lookup: HashMap<AsId, RouterId>,
}

impl Topology {
    /// Create an empty topology
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new router. Returns [`TopologyError::DuplicateAs`] if the AS number is already used.
    pub fn add_node(
        &mut self,
        name: impl Into<String>,
        as_id: AsId,
    ) -> Result<RouterId, TopologyError> {
        if self.lookup.contains_key(&as_id) {
            return Err(TopologyError::DuplicateAs(as_id));
        }
        let router_id = RouterId::new(self.nodes.len());
        self.nodes.push(NodeConfig { name: name.into(), as_id, peers: Vec::new() });
        self.lookup.insert(as_id, router_id);
        Ok(router_id)
    }

    /// Declare `peer` as peer of `router`, with the given cost. This creates a single directed
    /// link `router -> peer`. The peer does not need to exist yet. It is only resolved when the
    /// snapshot is created.
    pub fn add_peer(
        &mut self,
        router: RouterId,
        peer: AsId,
        cost: LinkCost,
    ) -> Result<(), TopologyError> {
        let node =
            self.nodes.get_mut(router.index()).ok_or(TopologyError::DeviceNotFound(router))?;
        if node.peers.iter().any(|p| p.as_id == peer) {
            return Err(TopologyError::DuplicatePeer(router, peer));
        }
        node.peers.push(PeerConfig { as_id: peer, cost });
        Ok(())
    }

    /// Number of routers in the topology
    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the router belonging to the AS.
    pub fn get_router_id(&self, as_id: AsId) -> Option<RouterId> {
        self.lookup.get(&as_id).copied()
    }

    /// Returns the name of a router
    pub fn get_name(&self, router: RouterId) -> Result<&str, TopologyError> {
        self.nodes
            .get(router.index())
            .map(|n| n.name.as_str())
            .ok_or(TopologyError::DeviceNotFound(router))
    }

    /// Returns all routers, ordered by their id.
    pub fn nodes(&self) -> std::slice::Iter<'_, NodeConfig> {
        self.nodes.iter()
    }

    /// Returns the AS number of every router, ordered by their id.
    pub fn as_map(&self) -> Vec<AsId> {
        self.nodes.iter().map(|n| n.as_id).collect()
    }

    /// Create the snapshot of the topology. Every declared peer becomes a directed link. Peers are
    /// never made symmetric. A router declaring itself as peer sets its self cost. If a peer
    /// refers to an unknown AS, [`TopologyError::UnknownPeer`] is returned.
    pub fn snapshot(&self) -> Result<Snapshot, TopologyError> {
        let mut graph = WeightedGraph::new(self.nodes.len());
        for (i, node) in self.nodes.iter().enumerate() {
            let router = RouterId::new(i);
            for peer in node.peers.iter() {
                let target = self
                    .get_router_id(peer.as_id)
                    .ok_or(TopologyError::UnknownPeer(router, peer.as_id))?;
                if target == router {
                    graph.set_node(router, peer.cost);
                } else {
                    graph.set_edge(router, target, peer.cost);
                }
            }
        }
        debug!(
            "Created snapshot with {} routers and {} links",
            graph.num_nodes(),
            graph.num_edges()
        );
        Ok(Snapshot {
            graph,
            as_map: self.as_map(),
            names: self.nodes.iter().map(|n| n.name.clone()).collect(),
        })
    }
}

/// # Snapshot
///
/// Immutable view of the topology, containing everything a worker needs to compute the
/// forwarding table of any router: the cost matrix, the AS map and the names.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    graph: WeightedGraph,
    as_map: Vec<AsId>,
    names: Vec<String>,
}

impl Snapshot {
    /// Create a snapshot from its parts. Returns [`RoutingError::AsMapMismatch`] if the AS map or
    /// the names do not have one entry per node of the graph.
    pub fn new(
        graph: WeightedGraph,
        as_map: Vec<AsId>,
        names: Vec<String>,
    ) -> Result<Self, RoutingError> {
        let expected = graph.num_nodes();
        if as_map.len() != expected {
            return Err(RoutingError::AsMapMismatch { expected, got: as_map.len() });
        }
        if names.len() != expected {
            return Err(RoutingError::AsMapMismatch { expected, got: names.len() });
        }
        Ok(Self { graph, as_map, names })
    }

    /// Returns the cost matrix
    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    /// Returns the AS number of every router, indexed by the router id
    pub fn as_map(&self) -> &[AsId] {
        &self.as_map
    }

    /// Returns the names of every router, indexed by the router id
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of routers
    pub fn num_nodes(&self) -> usize {
        self.graph.num_nodes()
    }

    /// Compute the forwarding table of a router.
    pub fn build_router(&self, router: RouterId) -> Result<Router, RoutingError> {
        let as_id = *self.as_map.get(router.index()).ok_or(RoutingError::DeviceNotFound(router))?;
        Router::build(as_id, &self.graph, &self.as_map, self.names[router.index()].as_str())
    }

    /// Compute the forwarding table of the router belonging to `as_id`. Returns
    /// [`RoutingError::UnknownAs`] or [`RoutingError::DuplicateAs`] if the AS number does not
    /// identify exactly one router.
    pub fn build_as(&self, as_id: AsId) -> Result<Router, RoutingError> {
        let name = self
            .as_map
            .iter()
            .position(|a| *a == as_id)
            .map(|i| self.names[i].as_str())
            .unwrap_or_default();
        Router::build(as_id, &self.graph, &self.as_map, name)
    }

    /// Returns the topology in the graphviz dot format. Nodes are labeled with their name and AS
    /// number, and edges with their cost.
    pub fn to_dot(&self) -> String {
        let mut g: Graph<String, LinkCost> = Graph::new();
        for (name, as_id) in self.names.iter().zip(self.as_map.iter()) {
            g.add_node(format!("{} (AS {})", name, as_id));
        }
        for e in self.graph.edges() {
            g.add_edge(e.from, e.to, e.cost);
        }
        format!("{}", Dot::new(&g))
    }
}

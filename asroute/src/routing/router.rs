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

//! Module defining the router, which holds the forwarding table of one autonomous system.

use crate::routing::bellman_ford::bellman_ford;
use crate::routing::next_hop::{resolve_next_hops, resolve_next_hops_per_node};
use crate::routing::{AsId, LinkCost, RouterId, RoutingError, WeightedGraph};
use log::*;

/// # Router
///
/// Forwarding table of a single autonomous system. For every router in the topology, it stores
/// the next hop (the neighbor over which the destination is reached), and the total cost of the
/// path. The router is built once with [`Router::build`], and is independent of the graph
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Router {
    /// Name of the router
    name: String,
    /// ID of the router
    router_id: RouterId,
    /// AS Id of the router
    as_id: AsId,
    /// AS number of every router in the topology
    as_map: Vec<AsId>,
    /// Next hop towards every router, or `None` if there is no route.
    next_hops: Vec<Option<RouterId>>,
    /// Cost to reach every router, or `None` if the router is unreachable.
    distances: Vec<Option<LinkCost>>,
    /// A negative cycle was detected while computing the shortest paths.
    negative_cycle: bool,
}

impl Router {
    /// Compute the forwarding table of the router belonging to `as_id`.
    ///
    /// The source router is the unique index `i` with `as_map[i] == as_id`. If no such router
    /// exists, [`RoutingError::UnknownAs`] is returned. If multiple routers share the AS number,
    /// [`RoutingError::DuplicateAs`] is returned.
    ///
    /// A negative cycle does not make the build fail. Instead, the router is flagged (see
    /// [`Router::has_negative_cycle`]). If the predecessor tree cannot be collapsed because of the
    /// cycle, every destination is resolved on its own, and only those whose predecessor chain
    /// does not lead back to the router are marked as not reachable.
    pub fn build(
        as_id: AsId,
        graph: &WeightedGraph,
        as_map: &[AsId],
        name: impl Into<String>,
    ) -> Result<Self, RoutingError> {
        let name = name.into();
        if as_map.len() != graph.num_nodes() {
            return Err(RoutingError::AsMapMismatch {
                expected: graph.num_nodes(),
                got: as_map.len(),
            });
        }

        let router_id = find_source(as_id, as_map)?;
        debug!("Building forwarding table of {} (AS {}, id {})", name, as_id, router_id.index());

        let paths = bellman_ford(graph, router_id)?;
        let next_hops = match resolve_next_hops(&paths.predecessors, router_id) {
            Ok(next_hops) => next_hops,
            Err(e) if paths.negative_cycle => {
                warn!("Cannot resolve all next hops of {} due to a negative cycle: {}", name, e);
                resolve_next_hops_per_node(&paths.predecessors, router_id)?
            }
            Err(e) => return Err(e),
        };

        Ok(Self {
            name,
            router_id,
            as_id,
            as_map: as_map.to_vec(),
            next_hops,
            distances: paths.distances,
            negative_cycle: paths.negative_cycle,
        })
    }

    /// Return the idx of the Router
    pub fn router_id(&self) -> RouterId {
        self.router_id
    }

    /// Return the name of the Router
    pub fn name(&self) -> &str {
        self.name.as_ref()
    }

    /// Return the AS ID of the Router
    pub fn as_id(&self) -> AsId {
        self.as_id
    }

    /// Returns the AS number of every router in the topology, indexed by the router id.
    pub fn as_map(&self) -> &[AsId] {
        &self.as_map
    }

    /// Returns the AS number of a router in the topology.
    pub fn get_as_id(&self, router: RouterId) -> Option<AsId> {
        self.as_map.get(router.index()).copied()
    }

    /// Number of routers in the forwarding table
    pub fn num_nodes(&self) -> usize {
        self.as_map.len()
    }

    /// Returns the next hop towards `target`, or `None` if there is no route.
    pub fn get_next_hop(&self, target: RouterId) -> Option<RouterId> {
        self.next_hops.get(target.index()).copied().flatten()
    }

    /// Returns the cost to reach `target`, or `None` if it is not reachable.
    pub fn get_distance(&self, target: RouterId) -> Option<LinkCost> {
        self.distances.get(target.index()).copied().flatten()
    }

    /// Returns the next hops of all routers, indexed by the router id.
    pub fn next_hops(&self) -> &[Option<RouterId>] {
        &self.next_hops
    }

    /// Returns the distances to all routers, indexed by the router id.
    pub fn distances(&self) -> &[Option<LinkCost>] {
        &self.distances
    }

    /// Returns true if a negative cycle was detected while computing this table. In this case, the
    /// distances are not reliable.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle
    }

    /// Returns the IGP Forwarding table. The table maps the ID of every router in the network to
    /// a tuple `(next_hop, cost)` of the next hop on the path and the cost to reach the
    /// destination, or `None` if the destination is not reachable.
    pub fn get_fw_table(
        &self,
    ) -> impl Iterator<Item = (RouterId, Option<(RouterId, LinkCost)>)> + '_ {
        self.next_hops.iter().zip(self.distances.iter()).enumerate().map(|(i, (nh, d))| {
            let entry = match (nh, d) {
                (Some(nh), Some(d)) => Some((*nh, *d)),
                _ => None,
            };
            (RouterId::new(i), entry)
        })
    }

    /// Returns all neighbors that are used as next hop, together with the cost to reach them.
    /// These are the routers which are reached directly, i.e., whose next hop is themselves.
    pub fn utilized_peers(&self) -> impl Iterator<Item = (RouterId, LinkCost)> + '_ {
        let own = self.router_id;
        self.get_fw_table().filter_map(move |(r, entry)| match entry {
            Some((nh, cost)) if nh == r && r != own => Some((r, cost)),
            _ => None,
        })
    }
}

/// Find the router that belongs to `as_id`.
fn find_source(as_id: AsId, as_map: &[AsId]) -> Result<RouterId, RoutingError> {
    let mut candidates = as_map.iter().enumerate().filter(|(_, a)| **a == as_id).map(|(i, _)| i);
    match (candidates.next(), candidates.next()) {
        (Some(i), None) => Ok(RouterId::new(i)),
        (None, _) => Err(RoutingError::UnknownAs(as_id)),
        (Some(_), Some(_)) => Err(RoutingError::DuplicateAs(as_id)),
    }
}

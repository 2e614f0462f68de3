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

//! # Bellman-Ford
//!
//! Single-source shortest paths on a [`WeightedGraph`], allowing negative link costs. The
//! relaxation runs exactly `num_nodes - 1` passes, followed by one additional pass to detect
//! negative cycles. A negative cycle does not abort the computation. Instead, the result is
//! flagged, and the caller decides what to do with the distances.

use crate::routing::{Edge, LinkCost, RouterId, RoutingError, WeightedGraph};
use log::*;

/// Result of the shortest path computation from a single source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    /// Source of the computation
    pub source: RouterId,
    /// Cost to reach each router from the source. `None` means that the router is unreachable.
    /// The distance of the source is always `0`.
    pub distances: Vec<Option<LinkCost>>,
    /// Predecessor of each router on the shortest path tree. The source, and all unreachable
    /// routers have no predecessor. This also holds if the source lies on a negative cycle.
    pub predecessors: Vec<Option<RouterId>>,
    /// Set if some link could still be relaxed after `num_nodes - 1` passes.
    pub negative_cycle: bool,
}

impl ShortestPaths {
    /// Number of routers covered by the result
    pub fn num_nodes(&self) -> usize {
        self.distances.len()
    }

    /// Returns the distance from the source to `target`, or `None` if it is unreachable.
    pub fn distance(&self, target: RouterId) -> Option<LinkCost> {
        self.distances.get(target.index()).copied().flatten()
    }

    /// Returns the predecessor of `target` on the shortest path tree.
    pub fn predecessor(&self, target: RouterId) -> Option<RouterId> {
        self.predecessors.get(target.index()).copied().flatten()
    }

    /// Returns true if `target` can be reached from the source.
    pub fn is_reachable(&self, target: RouterId) -> bool {
        self.distance(target).is_some()
    }
}

/// Compute the shortest paths from `source` to every router in the graph.
///
/// The graph is copied before the edges are extracted, such that the computation never observes
/// modifications made to `graph` afterwards. If `source` is not part of the graph,
/// [`RoutingError::DeviceNotFound`] is returned.
pub fn bellman_ford(
    graph: &WeightedGraph,
    source: RouterId,
) -> Result<ShortestPaths, RoutingError> {
    let working_graph = graph.clone();
    let num_nodes = working_graph.num_nodes();
    if source.index() >= num_nodes {
        return Err(RoutingError::DeviceNotFound(source));
    }

    let edges: Vec<Edge> = working_graph.edges().collect();
    trace!("Bellman-Ford from {:?} on {} nodes and {} edges", source, num_nodes, edges.len());

    let mut distances: Vec<Option<LinkCost>> = vec![None; num_nodes];
    let mut predecessors: Vec<Option<RouterId>> = vec![None; num_nodes];
    distances[source.index()] = Some(0);

    // relax all edges num_nodes - 1 times. Do not stop early, the number of passes is fixed.
    for _ in 1..num_nodes {
        // the source stays at distance 0, without predecessor
        for e in edges.iter().filter(|e| e.to != source) {
            if let Some(candidate) = relaxed_cost(&distances, e) {
                distances[e.to.index()] = Some(candidate);
                predecessors[e.to.index()] = Some(e.from);
            }
        }
    }

    // one more pass to check for negative cycles. Edges towards the source are checked as well,
    // which catches cycles through the source.
    let negative_cycle = edges.iter().any(|e| relaxed_cost(&distances, e).is_some());
    if negative_cycle {
        warn!("Graph contains a negative-weight cycle reachable from {:?}", source);
    }

    Ok(ShortestPaths { source, distances, predecessors, negative_cycle })
}

/// Returns the new distance of `e.to` if the edge can be relaxed, and `None` otherwise. An edge
/// leaving an unreachable router never relaxes.
fn relaxed_cost(distances: &[Option<LinkCost>], e: &Edge) -> Option<LinkCost> {
    let candidate = distances[e.from.index()]?.saturating_add(e.cost);
    match distances[e.to.index()] {
        Some(current) if current <= candidate => None,
        _ => Some(candidate),
    }
}

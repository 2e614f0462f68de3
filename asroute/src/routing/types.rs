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

//! Module containing all type definitions

use petgraph::prelude::*;
use thiserror::Error;

type IndexType = u32;
/// Router Identification (and index into the cost matrix)
pub type RouterId = NodeIndex<IndexType>;
/// AS Number
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct AsId(pub u32);
/// Cost of a link, or the total cost of a path
pub type LinkCost = i64;
/// Topology exported as a petgraph graph, with the link cost as edge weight.
pub type IgpNetwork = Graph<(), LinkCost, Directed, IndexType>;

impl std::fmt::Display for AsId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Routing Errors, raised while computing the forwarding table of a single router.
#[derive(Error, Debug, PartialEq)]
pub enum RoutingError {
    /// Router is not part of the graph
    #[error("Router {0:?} is not present in the topology")]
    DeviceNotFound(RouterId),
    /// No node is mapped to the requested AS number
    #[error("No router belongs to AS {0}")]
    UnknownAs(AsId),
    /// The requested AS number is mapped to more than one node
    #[error("AS {0} is assigned to multiple routers")]
    DuplicateAs(AsId),
    /// The AS map does not cover every node of the graph
    #[error("AS map has {got} entries, but the graph has {expected} nodes")]
    AsMapMismatch {
        /// number of nodes in the graph
        expected: usize,
        /// number of entries in the AS map
        got: usize,
    },
    /// Next hop resolution did not terminate within the sweep bound. The predecessor array
    /// contains a cycle which does not pass through the source.
    #[error("Predecessor cycle detected while resolving the next hop of {0:?}")]
    PredecessorCycle(RouterId),
    /// The predecessor chain of a reachable router ends before reaching the source.
    #[error("Predecessor chain of {0:?} does not lead back to the source")]
    BrokenPredecessorChain(RouterId),
}

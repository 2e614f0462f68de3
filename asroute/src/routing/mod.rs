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

#![deny(missing_docs, missing_debug_implementations)]

//! # Routing
//!
//! This module computes the forwarding table of a router in a network of autonomous systems. Each
//! AS is a node in a [`WeightedGraph`], and each peering link a directed edge with an integer
//! cost, which may be negative. The forwarding table is computed in three steps:
//!
//! 1. [`bellman_ford`] computes the shortest path tree rooted at the router, and detects negative
//!    cycles.
//! 2. [`resolve_next_hops`] collapses the shortest path tree, such that every destination maps to
//!    the neighbor over which it is reached.
//! 3. [`Router::build`] combines both steps for a given AS number.
//!
//! ## Example usage
//!
//! ```rust
//! use asroute::routing::{AsId, Router, RouterId, WeightedGraph};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut g = WeightedGraph::new(3);
//!     let r0: RouterId = 0.into();
//!     let r1: RouterId = 1.into();
//!     let r2: RouterId = 2.into();
//!     g.set_link(r0, r1, 2);
//!     g.set_link(r1, r2, 3);
//!     g.set_edge(r0, r2, 10);
//!
//!     let as_map = vec![AsId(100), AsId(200), AsId(300)];
//!     let router = Router::build(AsId(100), &g, &as_map, "R0")?;
//!
//!     // AS 300 is reached over AS 200
//!     assert_eq!(router.get_next_hop(r2), Some(r1));
//!     assert_eq!(router.get_distance(r2), Some(5));
//!     assert!(!router.has_negative_cycle());
//!
//!     Ok(())
//! }
//! ```

pub mod bellman_ford;
pub mod graph;
pub mod next_hop;
pub mod printer;
pub mod router;
pub(crate) mod types;

pub use bellman_ford::{bellman_ford, ShortestPaths};
pub use graph::{Edge, WeightedGraph};
pub use next_hop::{resolve_next_hops, resolve_next_hops_per_node};
pub use router::Router;
pub use types::{AsId, IgpNetwork, LinkCost, RouterId, RoutingError};

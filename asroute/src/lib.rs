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

#![deny(missing_docs)]

//! # AsRoute: Forwarding Tables for Autonomous System Topologies
//! This is a library for computing the forwarding table of every router in a network of
//! autonomous systems. The network is a directed graph with integer link costs (possibly
//! negative). For every AS, the library computes the cost to reach every other AS, and the
//! neighbor over which it should forward the traffic.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Routing`](routing)**: The core of the library. It contains the cost matrix
//!   [`WeightedGraph`](routing::WeightedGraph), the
//!   [`Bellman-Ford`](routing::bellman_ford()) algorithm with negative cycle detection, the
//!   [`next hop resolution`](routing::resolve_next_hops), and the
//!   [`Router`](routing::Router) holding the resulting forwarding table. The
//!   [`printer`](routing::printer) module formats the forwarding tables.
//!
//! - **[`Topology`](topology)**: Description of the network as declared in the configuration,
//!   the parser for the configuration file, and the immutable
//!   [`Snapshot`](topology::Snapshot) used to compute the forwarding tables.
//!
//! - **[`Distribution`](distribute)**: Compute the forwarding tables of all routers in parallel,
//!   using a fixed number of worker threads.
//!
//! - **[`ExampleTopologies`](example_topologies)**: Collection of prepared topologies, including a
//!   seeded random topology generator.
//!
//! ## Usage
//!
//! ```
//! use asroute::distribute::compute_routing_tables;
//! use asroute::routing::AsId;
//! use asroute::topology::parse_topology;
//! use asroute::Error;
//! use std::sync::Arc;
//!
//! fn main() -> Result<(), Error> {
//!     let topo = parse_topology(
//!         "ROUTER a 1\nPEER 2 1\nROUTER b 2\nPEER 1 1\nPEER 3 5\nROUTER c 3\nPEER 2 5\n",
//!     )?;
//!     let snapshot = Arc::new(topo.snapshot()?);
//!
//!     for (router_id, result) in compute_routing_tables(snapshot, None) {
//!         let router = result?;
//!         println!("{:?}: {:?}", router_id, router.next_hops());
//!     }
//!
//!     Ok(())
//! }
//! ```

// test modules
pub mod example_topologies;
mod test;

pub mod distribute;
mod error;
pub mod routing;
pub mod topology;

pub use error::Error;

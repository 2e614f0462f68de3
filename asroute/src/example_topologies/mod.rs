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

//! Topologies for testing

use crate::topology::Topology;

mod simplenet;
pub use simplenet::SimpleNet;

mod negative_cycle_net;
pub use negative_cycle_net::NegativeCycleNet;

mod random_net;
pub use random_net::RandomNet;

/// Trait for easier access to example topologies.
pub trait ExampleTopology {
    /// Get the topology
    fn topology() -> Topology;
}

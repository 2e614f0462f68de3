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

//! Module that contains definitions for the topology errors

use thiserror::Error;

use crate::routing::{AsId, RouterId};

/// Error while building a topology
#[derive(Debug, Error, PartialEq)]
pub enum TopologyError {
    /// Two routers are declared with the same AS number
    #[error("AS {0} is declared twice")]
    DuplicateAs(AsId),
    /// A router declares the same peer twice
    #[error("Router {0:?} declares peer AS {1} twice")]
    DuplicatePeer(RouterId, AsId),
    /// A peer refers to an AS number which is not declared by any router
    #[error("Router {0:?} has an unknown peer: AS {1}")]
    UnknownPeer(RouterId, AsId),
    /// Router is not present in the topology
    #[error("Router was not found in the topology: {0:?}")]
    DeviceNotFound(RouterId),
}

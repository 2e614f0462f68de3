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

//! Module containing all error types

use crate::routing::RoutingError;
use crate::topology::{ParseError, TopologyError};
use thiserror::Error;

/// Main error type
#[derive(Debug, Error)]
pub enum Error {
    /// Error propagated from `routing`
    #[error("Routing Error: {0}")]
    RoutingError(#[from] RoutingError),
    /// The topology is invalid
    #[error("Topology Error: {0}")]
    TopologyError(#[from] TopologyError),
    /// The topology file cannot be parsed
    #[error("Cannot parse the topology: {0}")]
    ParseError(#[from] ParseError),
    /// Io Error, while writing a report
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// The worker responsible for this router panicked while computing it
    #[error("Worker {0} panicked")]
    WorkerPanicked(usize),
}

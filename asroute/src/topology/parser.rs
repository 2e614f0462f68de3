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

//! Parses topology files
//!
//! The file contains one statement per line. A router is declared with `ROUTER <name> <as>`, and
//! all following `PEER <as> <cost>` lines declare the peers of that router. Empty lines and lines
//! starting with `#` are ignored.
//!
//! ```text
//! ROUTER Krakow 2137
//! PEER 666 1
//! PEER 42 3
//! ROUTER Gdansk 666
//! PEER 2137 1
//! ```

use super::{Topology, TopologyError};
use crate::routing::{AsId, LinkCost, RouterId};

use log::*;
use std::fs::read_to_string;
use std::num::ParseIntError;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Read and parse the topology file.
pub fn read_topology(filename: impl AsRef<Path>) -> Result<Topology, ParseError> {
    let content = read_to_string(filename.as_ref())?;
    let topo = parse_topology(&content)?;
    info!("Read {} routers from {}", topo.num_nodes(), filename.as_ref().display());
    Ok(topo)
}

/// Parse the topology from a string. Routers are assigned their id in the order in which they
/// appear.
pub fn parse_topology(content: &str) -> Result<Topology, ParseError> {
    let mut topo = Topology::new();
    let mut current_router: Option<RouterId> = None;

    for (i, line) in content.lines().enumerate() {
        let line_nr = i + 1;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut tokens = line.split_whitespace();
        match tokens.next() {
            Some("ROUTER") => {
                let name = tokens
                    .next()
                    .ok_or(ParseError::MissingField { line: line_nr, field: "name" })?;
                let as_id = AsId(parse_field(tokens.next(), line_nr, "as number")?);
                expect_end(tokens.next(), line_nr)?;
                let router = topo
                    .add_node(name, as_id)
                    .map_err(|source| ParseError::TopologyError { line: line_nr, source })?;
                trace!("line {}: router {} in AS {}", line_nr, name, as_id);
                current_router = Some(router);
            }
            Some("PEER") => {
                let router = current_router.ok_or(ParseError::PeerWithoutRouter(line_nr))?;
                let peer = AsId(parse_field(tokens.next(), line_nr, "peer as number")?);
                let cost: LinkCost = parse_field(tokens.next(), line_nr, "distance")?;
                expect_end(tokens.next(), line_nr)?;
                topo.add_peer(router, peer, cost)
                    .map_err(|source| ParseError::TopologyError { line: line_nr, source })?;
            }
            _ => {
                return Err(ParseError::UnexpectedToken {
                    line: line_nr,
                    content: String::from(line),
                })
            }
        }
    }

    Ok(topo)
}

fn parse_field<T>(token: Option<&str>, line: usize, field: &'static str) -> Result<T, ParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    token
        .ok_or(ParseError::MissingField { line, field })?
        .parse()
        .map_err(|source| ParseError::ParseIntError { line, source })
}

fn expect_end(token: Option<&str>, line: usize) -> Result<(), ParseError> {
    match token {
        None => Ok(()),
        Some(t) => Err(ParseError::UnexpectedToken { line, content: String::from(t) }),
    }
}

/// Error while parsing a topology file
#[derive(Debug, Error)]
pub enum ParseError {
    /// Io Error
    #[error("IO Error: {0}")]
    IoError(#[from] std::io::Error),
    /// Unexpected Token
    #[error("Unexpected Token on line {line}: {content}")]
    UnexpectedToken {
        /// line number, starting at 1
        line: usize,
        /// the unexpected content
        content: String,
    },
    /// A statement is missing a field
    #[error("Missing field {field} on line {line}")]
    MissingField {
        /// line number, starting at 1
        line: usize,
        /// name of the missing field
        field: &'static str,
    },
    /// ParseIntError
    #[error("Cannot parse an integer on line {line}: {source}")]
    ParseIntError {
        /// line number, starting at 1
        line: usize,
        /// the parse error
        source: ParseIntError,
    },
    /// A peer is declared before any router
    #[error("Peer declared before any router on line {0}")]
    PeerWithoutRouter(usize),
    /// The statement is not valid for the topology
    #[error("Invalid topology on line {line}: {source}")]
    TopologyError {
        /// line number, starting at 1
        line: usize,
        /// the topology error
        source: TopologyError,
    },
}

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

//! # Helper (printer) functions for the Router
//! Module containing helper functions to get formatted strings of a forwarding table, and to
//! write the report of a router to a file.

use crate::routing::{Router, RouterId, RoutingError};
use crate::Error;
use log::*;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header line printed in reports of routers, for which a negative cycle was detected.
pub const NEGATIVE_CYCLE_NOTICE: &str = "NEGATIVE CYCLE DETECTED";

/// Returns the report of a router. The report starts with the AS number and the name of the
/// router, followed by the list of utilized peers, and finally the route to every other AS. If a
/// negative cycle was detected, the report says so right after the header, since the distances
/// cannot be trusted.
pub fn report(router: &Router) -> Result<String, RoutingError> {
    let mut lines: Vec<String> = Vec::new();
    lines.push(format!("Autonomous System {} - {}", router.as_id(), router.name()));
    if router.has_negative_cycle() {
        lines.push(String::from(NEGATIVE_CYCLE_NOTICE));
    }
    for (peer, cost) in router.utilized_peers() {
        lines.push(format!("UTILIZED PEER {} DIST {}", as_of(router, peer)?, cost));
    }
    lines.push(String::from("ROUTING"));
    for (target, entry) in router.get_fw_table() {
        if target == router.router_id() {
            continue;
        }
        lines.push(match entry {
            Some((next_hop, cost)) => format!(
                " AS {} VIA {} DIST {}",
                as_of(router, target)?,
                as_of(router, next_hop)?,
                cost
            ),
            None => format!(" AS {} UNREACHABLE", as_of(router, target)?),
        });
    }
    let mut result = lines.join("\n");
    result.push('\n');
    Ok(result)
}

/// Returns one line per destination, formatted for the terminal.
pub fn fw_table(router: &Router) -> Result<Vec<String>, RoutingError> {
    router
        .get_fw_table()
        .map(|(target, entry)| {
            Ok(match entry {
                Some((next_hop, cost)) => format!(
                    "  AS {} via AS {} (cost: {})",
                    as_of(router, target)?,
                    as_of(router, next_hop)?,
                    cost
                ),
                None => format!("  AS {} unreachable!", as_of(router, target)?),
            })
        })
        .collect()
}

/// Print the forwarding table of a router.
pub fn print_fw_table(router: &Router) -> Result<(), RoutingError> {
    println!("Forwarding table for {} (AS {})", router.name(), router.as_id());
    if router.has_negative_cycle() {
        println!("  {}", NEGATIVE_CYCLE_NOTICE);
    }
    for line in fw_table(router)? {
        println!("{}", line);
    }
    println!();
    Ok(())
}

/// Name of the report file of a router: `AS<number>.txt`
pub fn report_filename(router: &Router) -> String {
    format!("AS{}.txt", router.as_id())
}

/// Write the report of the router into the directory `dir`. Returns the path of the written file.
pub fn write_report(dir: impl AsRef<Path>, router: &Router) -> Result<PathBuf, Error> {
    let path = dir.as_ref().join(report_filename(router));
    let content = report(router)?;
    let mut file = File::create(&path)?;
    file.write_all(content.as_bytes())?;
    debug!("Report of {} written to {}", router.name(), path.display());
    Ok(path)
}

fn as_of(router: &Router, id: RouterId) -> Result<u32, RoutingError> {
    router.get_as_id(id).map(|a| a.0).ok_or(RoutingError::DeviceNotFound(id))
}

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

//! # Next Hop Resolution
//!
//! The predecessor array of a shortest path tree describes the complete path to every router.
//! A router only needs the first hop of that path, which is the neighbor whose predecessor is the
//! source itself. This module collapses the predecessor chains into these first hops.

use crate::routing::{RouterId, RoutingError};
use log::*;

/// Collapse the shortest path tree into a forwarding table.
///
/// The result maps every router to the neighbor of `source` over which it is reached. The source
/// maps to itself, and routers without predecessor (unreachable) map to `None`. For every other
/// router `r`, the result `nh` satisfies `predecessors[nh] == source`.
///
/// Each sweep moves every unresolved entry one step closer to the source. Since no path is longer
/// than `num_nodes - 1` hops, more than `num_nodes` sweeps mean that the predecessors contain a
/// cycle, which is reported as [`RoutingError::PredecessorCycle`].
pub fn resolve_next_hops(
    predecessors: &[Option<RouterId>],
    source: RouterId,
) -> Result<Vec<Option<RouterId>>, RoutingError> {
    let num_nodes = predecessors.len();
    if source.index() >= num_nodes {
        return Err(RoutingError::DeviceNotFound(source));
    }

    let mut next_hops: Vec<Option<RouterId>> = predecessors
        .iter()
        .enumerate()
        .map(|(i, p)| {
            if i == source.index() || p.is_some() {
                Some(RouterId::new(i))
            } else {
                None
            }
        })
        .collect();

    let mut num_sweeps: usize = 0;
    loop {
        let mut had_to_fix = false;
        for i in 0..num_nodes {
            if i == source.index() {
                continue;
            }
            let hop = match next_hops[i] {
                Some(hop) => hop,
                None => continue,
            };
            match predecessors[hop.index()] {
                // directly connected to the source
                Some(p) if p == source => {}
                Some(p) => {
                    trace!("Swapped next hop of {} from {} to {}", i, hop.index(), p.index());
                    next_hops[i] = Some(p);
                    had_to_fix = true;
                }
                None => return Err(RoutingError::BrokenPredecessorChain(RouterId::new(i))),
            }
        }

        if !had_to_fix {
            break;
        }
        num_sweeps += 1;
        if num_sweeps > num_nodes {
            // report the first router which is still not resolved
            let unresolved = (0..num_nodes)
                .filter(|i| *i != source.index())
                .find(|i| match next_hops[*i] {
                    Some(hop) => predecessors[hop.index()] != Some(source),
                    None => false,
                })
                .map(RouterId::new)
                .unwrap_or(source);
            return Err(RoutingError::PredecessorCycle(unresolved));
        }
    }

    Ok(next_hops)
}

/// Resolve the next hop of every router independently, by walking its predecessor chain for at
/// most `num_nodes` steps.
///
/// Unlike [`resolve_next_hops`], this never fails on an inconsistent predecessor array. A router
/// whose chain reaches the source gets the neighbor of the source on that chain. A router whose
/// chain ends without reaching the source, or runs into a cycle, maps to `None`. The source maps
/// to itself.
pub fn resolve_next_hops_per_node(
    predecessors: &[Option<RouterId>],
    source: RouterId,
) -> Result<Vec<Option<RouterId>>, RoutingError> {
    let num_nodes = predecessors.len();
    if source.index() >= num_nodes {
        return Err(RoutingError::DeviceNotFound(source));
    }

    Ok((0..num_nodes)
        .map(RouterId::new)
        .map(|target| {
            if target == source {
                return Some(source);
            }
            let mut hop = target;
            for _ in 0..num_nodes {
                match predecessors[hop.index()] {
                    Some(p) if p == source => return Some(hop),
                    Some(p) => hop = p,
                    None => break,
                }
            }
            trace!("No route from {} to {}", source.index(), target.index());
            None
        })
        .collect())
}

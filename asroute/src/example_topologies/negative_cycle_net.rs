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

//! # Topology containing a negative cycle

use super::ExampleTopology;
use crate::routing::AsId;
use crate::topology::Topology;

/// # Negative Cycle Net
///
/// Four autonomous systems `a (1)`, `b (2)`, `c (3)` and `d (4)`. The routers `b`, `c` and `d`
/// form the cycle `b -> c -> d -> b` with total cost `-1`, which is reachable from `a`.
///
/// ```text
///   a --2--> b --1--> c
///            ^        |
///           -4        2
///            |        v
///            +------- d
/// ```
pub struct NegativeCycleNet {}

impl ExampleTopology for NegativeCycleNet {
    fn topology() -> Topology {
        let mut t = Topology::new();

        let a = t.add_node("a", AsId(1)).unwrap();
        let b = t.add_node("b", AsId(2)).unwrap();
        let c = t.add_node("c", AsId(3)).unwrap();
        let d = t.add_node("d", AsId(4)).unwrap();

        t.add_peer(a, AsId(2), 2).unwrap();
        t.add_peer(b, AsId(3), 1).unwrap();
        t.add_peer(c, AsId(4), 2).unwrap();
        t.add_peer(d, AsId(2), -4).unwrap();

        t
    }
}

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

//! # Simplenet Topology

use super::ExampleTopology;
use crate::routing::AsId;
use crate::topology::Topology;

/// # Simplenet
///
/// Five autonomous systems. All peerings are directed, the arrows show the direction of the link
/// and its cost.
///
/// ```text
///   Krakow (2137) <--1--> Gdansk (666)
///        ^  |               |
///        3  3               4
///        |  v               |
///   Warszawa (42) <---------+
///        ^  |
///        2  1
///        |  v
///   Poznan (55) <--3-- Lublin (11)
/// ```
///
/// Seen from Gdansk (666), Krakow and Warszawa are direct peers, Poznan is reached over Warszawa,
/// and Lublin is unreachable, since it has no incoming link.
pub struct SimpleNet {}

impl ExampleTopology for SimpleNet {
    fn topology() -> Topology {
        let mut t = Topology::new();

        let krakow = t.add_node("Krakow", AsId(2137)).unwrap();
        let gdansk = t.add_node("Gdansk", AsId(666)).unwrap();
        let warszawa = t.add_node("Warszawa", AsId(42)).unwrap();
        let poznan = t.add_node("Poznan", AsId(55)).unwrap();
        let lublin = t.add_node("Lublin", AsId(11)).unwrap();

        t.add_peer(krakow, AsId(666), 1).unwrap();
        t.add_peer(krakow, AsId(42), 3).unwrap();
        t.add_peer(gdansk, AsId(2137), 1).unwrap();
        t.add_peer(gdansk, AsId(42), 4).unwrap();
        t.add_peer(warszawa, AsId(2137), 3).unwrap();
        t.add_peer(warszawa, AsId(55), 1).unwrap();
        t.add_peer(poznan, AsId(42), 2).unwrap();
        t.add_peer(lublin, AsId(55), 3).unwrap();

        t
    }
}

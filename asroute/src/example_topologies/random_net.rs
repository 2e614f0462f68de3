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

//! # Random Topology

use crate::routing::{AsId, LinkCost, RouterId};
use crate::topology::Topology;
use rand::prelude::*;

/// # Random Net
///
/// Generates a random topology with `num_nodes` routers named `R0`, `R1`, ..., in the AS
/// `65001`, `65002`, .... Every ordered pair of routers is connected with probability
/// `link_prob`, with a cost drawn uniformly from `min_cost..=max_cost`. The same seed always
/// produces the same topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomNet {}

impl RandomNet {
    /// AS number of the first router
    pub const FIRST_AS: u32 = 65001;

    /// Generate the random topology.
    pub fn topology(
        seed: u64,
        num_nodes: usize,
        link_prob: f64,
        min_cost: LinkCost,
        max_cost: LinkCost,
    ) -> Topology {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut t = Topology::new();
        for i in 0..num_nodes {
            t.add_node(format!("R{}", i), Self::as_id(i)).unwrap();
        }
        for from in 0..num_nodes {
            for to in 0..num_nodes {
                if from != to && rng.gen_bool(link_prob) {
                    let cost = rng.gen_range(min_cost, max_cost + 1);
                    t.add_peer(RouterId::new(from), Self::as_id(to), cost).unwrap();
                }
            }
        }
        t
    }

    fn as_id(i: usize) -> AsId {
        AsId(Self::FIRST_AS + i as u32)
    }
}

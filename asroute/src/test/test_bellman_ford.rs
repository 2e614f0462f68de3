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

use crate::example_topologies::{ExampleTopology, NegativeCycleNet, RandomNet, SimpleNet};
use crate::routing::{bellman_ford, IgpNetwork, LinkCost, RouterId, RoutingError, WeightedGraph};
use petgraph::algo::all_simple_paths;
use rand::prelude::*;

/// Minimal cost over all simple paths, computed by enumerating every path.
fn brute_force_distance(net: &IgpNetwork, source: RouterId, target: RouterId) -> Option<LinkCost> {
    if source == target {
        return Some(0);
    }
    all_simple_paths::<Vec<_>, _>(net, source, target, 0, None)
        .map(|path| {
            path.windows(2).map(|w| net[net.find_edge(w[0], w[1]).unwrap()]).sum::<LinkCost>()
        })
        .min()
}

/// Random directed acyclic graph. Links only go from lower to higher indices, such that negative
/// costs can never form a cycle.
fn random_dag(seed: u64, num_nodes: usize) -> WeightedGraph {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut g = WeightedGraph::new(num_nodes);
    for from in 0..num_nodes {
        for to in (from + 1)..num_nodes {
            if rng.gen_bool(0.5) {
                g.set_edge(RouterId::new(from), RouterId::new(to), rng.gen_range(-5, 10));
            }
        }
    }
    g
}

#[test]
fn test_simplenet() {
    let snapshot = SimpleNet::topology().snapshot().unwrap();
    let result = bellman_ford(snapshot.graph(), 1.into()).unwrap();
    assert_eq!(result.source, RouterId::new(1));
    assert_eq!(result.distances, vec![Some(1), Some(0), Some(4), Some(5), None]);
    let r1: RouterId = 1.into();
    let r2: RouterId = 2.into();
    assert_eq!(result.predecessors, vec![Some(r1), None, Some(r1), Some(r2), None]);
    assert!(!result.negative_cycle);
    assert!(result.is_reachable(3.into()));
    assert!(!result.is_reachable(4.into()));
    assert_eq!(result.distance(3.into()), Some(5));
    assert_eq!(result.predecessor(RouterId::new(3)), Some(RouterId::new(2)));
}

#[test]
fn test_simplenet_from_lublin() {
    let snapshot = SimpleNet::topology().snapshot().unwrap();
    let result = bellman_ford(snapshot.graph(), 4.into()).unwrap();
    assert_eq!(result.distances, vec![Some(8), Some(9), Some(5), Some(3), Some(0)]);
    let r0: RouterId = 0.into();
    let r2: RouterId = 2.into();
    let r3: RouterId = 3.into();
    let r4: RouterId = 4.into();
    assert_eq!(result.predecessors, vec![Some(r2), Some(r0), Some(r3), Some(r4), None]);
}

#[test]
fn test_no_edges() {
    let g = WeightedGraph::new(4);
    let result = bellman_ford(&g, 2.into()).unwrap();
    assert_eq!(result.distances, vec![None, None, Some(0), None]);
    assert_eq!(result.predecessors, vec![None; 4]);
    assert!(!result.negative_cycle);
}

#[test]
fn test_single_node() {
    let g = WeightedGraph::new(1);
    let result = bellman_ford(&g, 0.into()).unwrap();
    assert_eq!(result.distances, vec![Some(0)]);
    assert_eq!(result.num_nodes(), 1);
}

#[test]
fn test_source_out_of_range() {
    let g = WeightedGraph::new(3);
    assert_eq!(bellman_ford(&g, 3.into()), Err(RoutingError::DeviceNotFound(3.into())));
    let g = WeightedGraph::new(0);
    assert_eq!(bellman_ford(&g, 0.into()), Err(RoutingError::DeviceNotFound(0.into())));
}

#[test]
fn test_negative_edge_without_cycle() {
    let mut g = WeightedGraph::new(3);
    g.set_edge(0.into(), 1.into(), 4);
    g.set_edge(0.into(), 2.into(), 2);
    g.set_edge(2.into(), 1.into(), -3);
    let result = bellman_ford(&g, 0.into()).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(-1), Some(2)]);
    assert_eq!(result.predecessor(RouterId::new(1)), Some(RouterId::new(2)));
    assert!(!result.negative_cycle);
}

#[test]
fn test_unreachable_node_ignores_negative_edges() {
    // router 2 is not reachable, its negative link must not change anything.
    let mut g = WeightedGraph::new(3);
    g.set_edge(0.into(), 1.into(), 1);
    g.set_edge(2.into(), 1.into(), -10);
    let result = bellman_ford(&g, 0.into()).unwrap();
    assert_eq!(result.distances, vec![Some(0), Some(1), None]);
    assert_eq!(result.predecessors, vec![None, Some(RouterId::new(0)), None]);
}

#[test]
fn test_negative_cycle_detected() {
    let snapshot = NegativeCycleNet::topology().snapshot().unwrap();
    let result = bellman_ford(snapshot.graph(), 0.into()).unwrap();
    assert!(result.negative_cycle);
    // the fixed number of passes still produces defined distances
    assert_eq!(result.distances, vec![Some(0), Some(-1), Some(1), Some(3)]);
    let r1: RouterId = 1.into();
    let r2: RouterId = 2.into();
    let r3: RouterId = 3.into();
    assert_eq!(result.predecessors, vec![None, Some(r3), Some(r1), Some(r2)]);

    // raise the cycle to a total cost of 0
    let mut g = snapshot.graph().clone();
    g.set_edge(3.into(), 1.into(), -3);
    let result = bellman_ford(&g, 0.into()).unwrap();
    assert!(!result.negative_cycle);
    assert_eq!(result.distances, vec![Some(0), Some(2), Some(3), Some(5)]);
}

#[test]
fn test_negative_cycle_through_source() {
    let mut g = WeightedGraph::new(3);
    g.set_edge(0.into(), 1.into(), 1);
    g.set_edge(1.into(), 0.into(), -3);
    g.set_edge(1.into(), 2.into(), 2);
    let source: RouterId = 0.into();
    let result = bellman_ford(&g, source).unwrap();
    assert!(result.negative_cycle);
    assert_eq!(result.distance(source), Some(0));
    assert_eq!(result.predecessor(source), None);
    assert_eq!(result.distances, vec![Some(0), Some(1), Some(3)]);
    assert_eq!(result.predecessors, vec![None, Some(source), Some(RouterId::new(1))]);
}

#[test]
fn test_unreachable_negative_cycle() {
    // the cycle 1 -> 2 -> 1 is negative, but cannot be reached from 0
    let mut g = WeightedGraph::new(3);
    g.set_edge(1.into(), 2.into(), -2);
    g.set_edge(2.into(), 1.into(), 1);
    let result = bellman_ford(&g, 0.into()).unwrap();
    assert!(!result.negative_cycle);
    assert_eq!(result.distances, vec![Some(0), None, None]);
}

#[test]
fn test_idempotent() {
    for seed in 0..10 {
        let snapshot = RandomNet::topology(seed, 8, 0.3, -2, 10).snapshot().unwrap();
        for source in snapshot.graph().routers() {
            let a = bellman_ford(snapshot.graph(), source).unwrap();
            let b = bellman_ford(snapshot.graph(), source).unwrap();
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_graph_is_not_modified() {
    let snapshot = RandomNet::topology(42, 6, 0.5, 0, 5).snapshot().unwrap();
    let g = snapshot.graph().clone();
    for source in g.routers() {
        bellman_ford(&g, source).unwrap();
    }
    assert_eq!(&g, snapshot.graph());
}

#[test]
fn test_brute_force_non_negative() {
    for seed in 0..20 {
        let snapshot = RandomNet::topology(seed, 6, 0.4, 0, 9).snapshot().unwrap();
        let g = snapshot.graph();
        let net = g.to_igp_network();
        for source in g.routers() {
            let result = bellman_ford(g, source).unwrap();
            assert!(!result.negative_cycle);
            assert_eq!(result.distance(source), Some(0));
            assert_eq!(result.predecessor(source), None);
            for target in g.routers() {
                assert_eq!(
                    result.distance(target),
                    brute_force_distance(&net, source, target),
                    "seed {}, {:?} -> {:?}",
                    seed,
                    source,
                    target
                );
            }
        }
    }
}

#[test]
fn test_brute_force_negative_dag() {
    for seed in 0..20 {
        let g = random_dag(seed, 7);
        let net = g.to_igp_network();
        for source in g.routers() {
            let result = bellman_ford(&g, source).unwrap();
            assert!(!result.negative_cycle);
            for target in g.routers() {
                assert_eq!(result.distance(target), brute_force_distance(&net, source, target));
            }
        }
    }
}

#[test]
fn test_relaxation_fixed_point() {
    for seed in 0..20 {
        let snapshot = RandomNet::topology(seed, 8, 0.3, -3, 10).snapshot().unwrap();
        let g = snapshot.graph();
        for source in g.routers() {
            let result = bellman_ford(g, source).unwrap();
            if result.negative_cycle {
                continue;
            }
            for e in g.edges() {
                if let Some(du) = result.distance(e.from) {
                    let dv = result.distance(e.to).unwrap();
                    assert!(du + e.cost >= dv);
                }
            }
            // every reachable router except the source has a predecessor
            for r in g.routers().filter(|r| *r != source) {
                assert_eq!(result.is_reachable(r), result.predecessor(r).is_some());
            }
        }
    }
}

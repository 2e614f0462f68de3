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

use crate::distribute::*;
use crate::example_topologies::{ExampleTopology, NegativeCycleNet, RandomNet, SimpleNet};
use crate::routing::{AsId, RouterId, RoutingError, WeightedGraph};
use crate::topology::{Snapshot, Topology};
use crate::Error;
use std::io;
use std::sync::Arc;

fn assert_matches_sequential(snapshot: &Arc<Snapshot>, n_threads: Option<usize>) {
    let results = compute_routing_tables(snapshot.clone(), n_threads);
    assert_eq!(results.len(), snapshot.num_nodes());
    for (i, (r, result)) in results.into_iter().enumerate() {
        assert_eq!(r.index(), i);
        assert_eq!(result.unwrap(), snapshot.build_router(r).unwrap());
    }
}

#[test]
fn test_simplenet() {
    let snapshot = Arc::new(SimpleNet::topology().snapshot().unwrap());
    assert_matches_sequential(&snapshot, Some(2));
}

#[test]
fn test_random_net() {
    let snapshot = Arc::new(RandomNet::topology(7, 30, 0.15, 1, 10).snapshot().unwrap());
    assert_matches_sequential(&snapshot, Some(4));
    assert_matches_sequential(&snapshot, None);
}

#[test]
fn test_single_thread() {
    let snapshot = Arc::new(RandomNet::topology(3, 10, 0.3, 1, 5).snapshot().unwrap());
    assert_matches_sequential(&snapshot, Some(1));
    // zero threads are treated as one
    assert_matches_sequential(&snapshot, Some(0));
}

#[test]
fn test_more_threads_than_routers() {
    let snapshot = Arc::new(SimpleNet::topology().snapshot().unwrap());
    assert_matches_sequential(&snapshot, Some(64));
}

#[test]
fn test_empty_snapshot() {
    let snapshot = Arc::new(Topology::new().snapshot().unwrap());
    assert!(compute_routing_tables(snapshot, Some(4)).is_empty());
}

#[test]
fn test_negative_cycle_is_not_an_error() {
    let snapshot = Arc::new(NegativeCycleNet::topology().snapshot().unwrap());
    let results = compute_routing_tables(snapshot, Some(2));
    assert!(results.iter().all(|(_, r)| r.is_ok()));
    assert!(results[0].1.as_ref().unwrap().has_negative_cycle());
}

#[test]
fn test_job_failure_is_isolated() {
    let snapshot = Arc::new(SimpleNet::topology().snapshot().unwrap());
    let results = compute_parallel(snapshot, Some(2), |r| {
        if r.as_id() == AsId(42) {
            Err(Error::IoError(io::Error::new(io::ErrorKind::Other, "disk full")))
        } else {
            Ok(r.as_id())
        }
    });
    assert_eq!(results.len(), 5);
    for (r, result) in results {
        if r == RouterId::new(2) {
            assert!(matches!(result, Err(Error::IoError(_))));
        } else {
            assert!(result.is_ok());
        }
    }
}

#[test]
fn test_build_failure_is_isolated() {
    let mut graph = WeightedGraph::new(3);
    graph.set_link(0.into(), 1.into(), 1);
    graph.set_link(1.into(), 2.into(), 1);
    let as_map = vec![AsId(1), AsId(1), AsId(2)];
    let names = vec!["x".to_string(), "y".to_string(), "z".to_string()];
    let snapshot = Arc::new(Snapshot::new(graph, as_map, names).unwrap());

    let results = compute_routing_tables(snapshot, Some(3));
    assert!(matches!(
        results[0].1,
        Err(Error::RoutingError(RoutingError::DuplicateAs(AsId(1))))
    ));
    assert!(matches!(
        results[1].1,
        Err(Error::RoutingError(RoutingError::DuplicateAs(AsId(1))))
    ));
    let z = results[2].1.as_ref().unwrap();
    assert_eq!(z.get_next_hop(0.into()), Some(RouterId::new(1)));
}

#[test]
fn test_worker_panic() {
    let snapshot = Arc::new(SimpleNet::topology().snapshot().unwrap());
    let results = compute_parallel(snapshot, Some(2), |r| {
        if r.router_id() == RouterId::new(2) {
            panic!("job failed");
        }
        Ok(())
    });
    assert_eq!(results.len(), 5);
    // worker 0 handles the routers 0, 2 and 4. Only router 2 is lost.
    for (r, result) in results {
        if r == RouterId::new(2) {
            assert!(matches!(result, Err(Error::WorkerPanicked(0))));
        } else {
            assert!(result.is_ok());
        }
    }
}

#[test]
fn test_panic_keeps_other_results_of_worker() {
    let snapshot = Arc::new(SimpleNet::topology().snapshot().unwrap());
    let results = compute_parallel(snapshot.clone(), Some(1), |r| {
        if r.as_id() == AsId(666) {
            panic!("job failed");
        }
        Ok(r.clone())
    });
    assert_eq!(results.len(), 5);
    for (r, result) in results {
        match result {
            Ok(router) => assert_eq!(router, snapshot.build_router(r).unwrap()),
            Err(e) => {
                assert_eq!(r, RouterId::new(1));
                assert!(matches!(e, Error::WorkerPanicked(0)));
            }
        }
    }
}

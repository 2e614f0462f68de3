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

//! # Distribution
//!
//! The forwarding table of each router only depends on the shared snapshot and on its own AS
//! number. This module spawns a fixed number of worker threads, each computing the tables of a
//! disjoint subset of the routers. Worker `k` of `n` handles the routers `k`, `k + n`, `k + 2n`
//! and so on. The snapshot is shared read-only using an `Arc`.
//!
//! A failure is local to a single router. If a build fails, or if the job fails or panics, the
//! error is recorded for that router, and the worker continues with the next one. A panic is
//! reported as [`Error::WorkerPanicked`]. Only if the worker thread itself dies, all routers
//! assigned to it are reported with that error.

use crate::routing::{Router, RouterId};
use crate::topology::Snapshot;
use crate::Error;

use log::*;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::thread;

/// Result of one router, computed by a worker
pub type WorkerResult<T> = (RouterId, Result<T, Error>);

/// # Compute all forwarding tables in parallel
///
/// Builds the [`Router`] of every node in the snapshot using `n_threads` workers (the number of
/// CPUs if `None`), and calls `job` on each router inside the worker that built it. The results
/// are returned sorted by the router id.
///
/// ## Usage
///
/// ```
/// use asroute::distribute::compute_parallel;
/// use asroute::example_topologies::{ExampleTopology, SimpleNet};
/// use asroute::routing::printer;
/// use std::sync::Arc;
///
/// fn main() -> Result<(), asroute::Error> {
///     let snapshot = Arc::new(SimpleNet::topology().snapshot()?);
///     let reports = compute_parallel(snapshot, Some(2), |r| Ok(printer::report(r)?));
///     assert_eq!(reports.len(), 5);
///     for (_, report) in reports {
///         println!("{}", report?);
///     }
///     Ok(())
/// }
/// ```
pub fn compute_parallel<T, F>(
    snapshot: Arc<Snapshot>,
    n_threads: Option<usize>,
    job: F,
) -> Vec<WorkerResult<T>>
where
    T: Send + 'static,
    F: Fn(&Router) -> Result<T, Error> + Send + Sync + 'static,
{
    let num_nodes = snapshot.num_nodes();
    let n_threads = n_threads.unwrap_or_else(num_cpus::get).max(1).min(num_nodes.max(1));
    info!("Spawning {} threads for {} routers", n_threads, num_nodes);

    let job = Arc::new(job);
    let handles = (0..n_threads)
        .map(|worker| {
            let s = snapshot.clone();
            let j = job.clone();
            let handle = thread::spawn(move || {
                (worker..s.num_nodes())
                    .step_by(n_threads)
                    .map(RouterId::new)
                    .map(|r| {
                        let result = panic::catch_unwind(AssertUnwindSafe(|| -> Result<T, Error> {
                            let router = s.build_router(r)?;
                            (*j)(&router)
                        }))
                        .unwrap_or_else(|_| {
                            error!("Worker {} panicked on router {}", worker, r.index());
                            Err(Error::WorkerPanicked(worker))
                        });
                        (r, result)
                    })
                    .collect::<Vec<_>>()
            });
            (worker, handle)
        })
        .collect::<Vec<_>>();

    let mut results: Vec<WorkerResult<T>> = Vec::with_capacity(num_nodes);

    // wait until all threads are done
    for (worker, handle) in handles {
        match handle.join() {
            Ok(worker_results) => results.extend(worker_results),
            Err(_) => {
                error!("Worker {} panicked", worker);
                results.extend(
                    (worker..num_nodes)
                        .step_by(n_threads)
                        .map(|r| (RouterId::new(r), Err(Error::WorkerPanicked(worker)))),
                );
            }
        }
    }

    results.sort_by_key(|(r, _)| *r);

    for (r, result) in results.iter() {
        if let Err(e) = result {
            warn!(
                "Could not compute the forwarding table of {}: {}",
                snapshot.names()[r.index()],
                e
            );
        }
    }

    results
}

/// Compute the forwarding tables of all routers in parallel, and return them sorted by their id.
pub fn compute_routing_tables(
    snapshot: Arc<Snapshot>,
    n_threads: Option<usize>,
) -> Vec<WorkerResult<Router>> {
    compute_parallel(snapshot, n_threads, |r| Ok(r.clone()))
}

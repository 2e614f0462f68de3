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

use asroute::distribute::compute_parallel;
use asroute::routing::{printer, AsId};
use asroute::topology::read_topology;

use clap::{Parser, Subcommand};
use log::*;
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

fn main() -> Result<(), Box<dyn Error>> {
    // initialize the env logger
    pretty_env_logger::init();

    // run clap
    let args = CommandLineArguments::parse();

    match args.cmd {
        MainCommand::Compute { topology, output, num_threads } => {
            compute(topology, output, num_threads)?
        }
        MainCommand::Table { topology, as_id } => {
            let snapshot = read_topology(&topology)?.snapshot()?;
            let router = snapshot.build_as(AsId(as_id))?;
            printer::print_fw_table(&router)?;
        }
        MainCommand::Dot { topology } => {
            let snapshot = read_topology(&topology)?.snapshot()?;
            println!("{}", snapshot.to_dot());
        }
    }
    Ok(())
}

fn compute(
    topology: PathBuf,
    output: PathBuf,
    num_threads: Option<usize>,
) -> Result<(), Box<dyn Error>> {
    let snapshot = Arc::new(read_topology(&topology)?.snapshot()?);
    fs::create_dir_all(&output)?;

    info!("Computing the forwarding tables of {} routers", snapshot.num_nodes());
    let results = compute_parallel(snapshot.clone(), num_threads, move |r| {
        printer::write_report(&output, r)
    });

    let num_failed = results.iter().filter(|(_, r)| r.is_err()).count();
    info!(
        "Wrote {} reports, {} routers failed",
        results.len() - num_failed,
        num_failed
    );
    if num_failed > 0 {
        for (router, result) in results.iter() {
            if let Err(e) = result {
                error!("AS {}: {}", snapshot.as_map()[router.index()], e);
            }
        }
        return Err(format!("{} of {} routers failed", num_failed, results.len()).into());
    }
    Ok(())
}

/// Compute the forwarding table of every autonomous system in a topology file, and write one
/// report per AS.
#[derive(Parser, Debug)]
#[clap(name = "AsRoute", author = "Tibor Schneider")]
struct CommandLineArguments {
    /// Action to perform
    #[clap(subcommand)]
    cmd: MainCommand,
}

#[derive(Subcommand, Debug)]
enum MainCommand {
    /// Compute all forwarding tables and write the reports
    #[clap(name = "compute")]
    Compute {
        /// Topology file
        topology: PathBuf,
        /// Directory, in which the reports are written
        #[clap(short = 'o', long, default_value = ".")]
        output: PathBuf,
        /// Number of worker threads (defaults to the number of CPUs)
        #[clap(short = 'j', long)]
        num_threads: Option<usize>,
    },
    /// Print the forwarding table of a single AS
    #[clap(name = "table")]
    Table {
        /// Topology file
        topology: PathBuf,
        /// AS number of the router
        as_id: u32,
    },
    /// Print the topology in the graphviz dot format
    #[clap(name = "dot")]
    Dot {
        /// Topology file
        topology: PathBuf,
    },
}

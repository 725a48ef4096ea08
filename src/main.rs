#![allow(dead_code)]

use std::path::Path;

use clap::{CommandFactory, FromArgMatches};
use log::{info, warn};
use os_str_bytes::OsStrBytesExt;
use rand::random;
use took::Timer;

use crate::problem::generator::random_connected_graph;
use crate::problem::graph::Graph;
use crate::utils::create_seeded_rng;

mod cli;
mod io;
mod mst;
mod problem;
mod solver;
mod utils;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = argfile::expand_args_from(
        std::env::args_os(),
        argfile::parse_fromfile,
        argfile::PREFIX,
    )?;
    let args = cli::ProgramArguments::from_arg_matches(
        &cli::ProgramArguments::command().get_matches_from(
            args.iter()
                .flat_map(|it| it.split(" ").into_iter().collect::<Vec<_>>()),
        ),
    )?;
    info!("{:?}", &args);

    let (seed_value, mut rng) = {
        let seed_value = args.seed.unwrap_or_else(|| random::<i128>().abs());
        info!("seed: {}", seed_value);
        (seed_value, create_seeded_rng(seed_value))
    };

    let load_timer = Timer::new();
    let graphs = if let Some(num_vertices) = args.generate.generate_vertices {
        let num_edges = args.generate.generate_edges.unwrap_or(num_vertices * 2);
        let graphs: Vec<Graph> = (0..args.generate.num_graphs)
            .map(|it| random_connected_graph(it as u32 + 1, num_vertices, num_edges, &mut rng))
            .collect();
        info!(
            "generated {} graph(s) ({} vertices, {} edges) with seed {}",
            graphs.len(),
            num_vertices,
            num_edges,
            seed_value
        );
        if let Some(out) = &args.generate.instance_out {
            io::json_instance::write_instance(Path::new(out), &graphs)?;
            info!("generated instance written to {}", out);
        }
        graphs
    } else {
        // required_unless_present guarantees the path is set on this branch
        let path = args.instance.clone().unwrap_or_default();
        io::load_instance(path)?
    };
    info!("{} graph(s) ready after {}", graphs.len(), load_timer.took());

    if graphs.is_empty() {
        warn!("no graphs to process");
        return Ok(());
    }

    let solve_timer = Timer::new();
    let mut results = Vec::with_capacity(graphs.len());
    for graph in &graphs {
        if args.print_graphs {
            println!("Graph ID: {}", graph.id);
            println!("{}", graph.adjacency().to_display_string());
        }
        let comparison = solver::run_comparison(graph);
        if args.print_summary_to_stdout {
            println!(
                "{},{},{},{:.3},{:.3}",
                comparison.graph_id,
                comparison.prim.total_cost,
                comparison.kruskal.total_cost,
                comparison.prim.execution_time_ms,
                comparison.kruskal.execution_time_ms
            );
        }
        results.push(comparison);
    }
    info!("finished after {}", solve_timer.took());

    if let Some(report_path) = &args.report {
        io::report::write_report(Path::new(report_path), &results)?;
        info!("report written to {}", report_path);
    }

    Ok(())
}

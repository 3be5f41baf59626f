use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use graph_search::{
    graphs::{Distance, Graph, VertexId, INFINITY},
    queue::QueueKind,
    read_graph,
    search::dijkstra::single_source,
    utility::init_tracing,
    GraphFormat, Result,
};
use itertools::Itertools;
use serde::Serialize;

/// Prints the shortest distance from a start vertex to every vertex of a
/// graph read from a file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,
    /// Format of the graph file
    #[arg(short, long, value_enum, default_value_t = GraphFormat::Edges)]
    format: GraphFormat,
    /// Vertex to start from
    #[arg(short, long, default_value_t = 1)]
    start: VertexId,
    /// Also print a shortest path to this vertex
    #[arg(short, long)]
    target: Option<VertexId>,
    /// Priority queue driving the search
    #[arg(short, long, value_enum, default_value_t = QueueKind::Binary)]
    queue: QueueKind,
    /// Print the adjacency lists before searching
    #[arg(long)]
    print_graph: bool,
    /// Print the result as json, unreachable vertices as null
    #[arg(long)]
    json: bool,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Output {
    source: VertexId,
    distances: Vec<Option<Distance>>,
    path: Option<Vec<VertexId>>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = init_tracing(args.verbose) {
        eprintln!("unable to initialize logging: {}", error);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "dijkstra failed");
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let graph = read_graph(&args.graph, args.format)?;
    if args.print_graph {
        print!("{}", graph);
    }

    let mut queue = args.queue.build();
    let data = single_source(&graph, args.start, queue.as_mut())?;

    let path = match args.target {
        Some(target) => {
            graph.check_vertex(target)?;
            data.get_path(target).map(|path| path.vertices)
        }
        None => None,
    };

    if args.json {
        let output = Output {
            source: args.start,
            distances: data
                .distances
                .iter()
                .map(|&distance| (distance != INFINITY).then_some(distance))
                .collect(),
            path,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    for (vertex, &distance) in data.distances.iter().enumerate() {
        if distance == INFINITY {
            println!("{}: inf", vertex);
        } else {
            println!("{}: {}", vertex, distance);
        }
    }
    match (args.target, path) {
        (Some(target), Some(path)) => println!(
            "path to {} ({}): {}",
            target,
            data.get_distance(target),
            path.iter().join(" -> ")
        ),
        (Some(target), None) => println!("{} is not reachable from {}", target, args.start),
        _ => {}
    }

    Ok(())
}

use std::{path::PathBuf, process::ExitCode};

use clap::Parser;
use graph_search::{
    graphs::VertexId, read_graph, search::bfs::bfs, utility::init_tracing, GraphFormat, Result,
};
use itertools::Itertools;

/// Prints the breadth first visitation order of a graph read from a file.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Graph file
    #[arg(short, long)]
    graph: PathBuf,
    /// Format of the graph file
    #[arg(short, long, value_enum, default_value_t = GraphFormat::Adjacency)]
    format: GraphFormat,
    /// Vertex to start from
    #[arg(short, long, default_value_t = 1)]
    start: VertexId,
    /// Print the order as a json array
    #[arg(long)]
    json: bool,
    /// Log debug output to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(error) = init_tracing(args.verbose) {
        eprintln!("unable to initialize logging: {}", error);
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::error!(%error, "bfs failed");
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let graph = read_graph(&args.graph, args.format)?;
    let order = bfs(&graph, args.start)?;

    if args.json {
        println!("{}", serde_json::to_string(&order)?);
    } else {
        println!("{}", order.iter().join(" "));
    }

    Ok(())
}

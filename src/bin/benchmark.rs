use std::process::ExitCode;

use clap::Parser;
use graph_search::{
    graphs::{Graph, Weight},
    queue::QueueKind,
    utility::{benchmark, count_invalid_paths, gen_tests_cases, init_tracing, random_graph},
    Result,
};
use rand::{rngs::StdRng, SeedableRng};

/// Compares the priority queues on a random undirected graph and validates
/// random pair queries against full searches.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of vertices of the random graph
    #[arg(short = 'n', long, default_value_t = 100_000)]
    vertices: u32,
    /// Number of undirected edges of the random graph
    #[arg(short = 'm', long, default_value_t = 400_000)]
    edges: u32,
    /// Largest edge weight
    #[arg(short = 'w', long, default_value_t = 1_000)]
    max_weight: Weight,
    /// Number of searches per queue
    #[arg(short, long, default_value_t = 100)]
    searches: u32,
    /// Seed of the random number generator
    #[arg(long, default_value_t = 0)]
    seed: u64,
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
        Ok(0) => ExitCode::SUCCESS,
        Ok(invalid) => {
            eprintln!("error: {} pair queries returned an invalid path", invalid);
            ExitCode::FAILURE
        }
        Err(error) => {
            tracing::error!(%error, "benchmark failed");
            eprintln!("error: {}", error);
            ExitCode::FAILURE
        }
    }
}

/// Returns the number of pair queries that produced an invalid path.
fn run(args: &Args) -> Result<usize> {
    let mut rng = StdRng::seed_from_u64(args.seed);

    println!("Generating random graph");
    let graph = random_graph(args.vertices, args.edges, args.max_weight, &mut rng)?;
    println!(
        "Graph has {} vertices and {} adjacency entries",
        graph.number_of_vertices(),
        graph.number_of_edges()
    );

    println!("Generating test cases");
    let test_cases = gen_tests_cases(&graph, args.searches, &mut rng)?;

    println!("Validating pair queries");
    let invalid = count_invalid_paths(&graph, &test_cases)?;

    let sources: Vec<_> = test_cases
        .iter()
        .map(|test_case| test_case.request.source())
        .collect();
    for queue_kind in [QueueKind::Binary, QueueKind::Radix] {
        let average = benchmark(&graph, &sources, queue_kind)?;
        println!(
            "Average single source duration with {:?} queue is {:?}",
            queue_kind, average
        );
    }

    Ok(invalid)
}

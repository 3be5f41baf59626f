use std::time::{Duration, Instant};

use indicatif::{ProgressBar, ProgressIterator, ProgressStyle};
use rand::Rng;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::{
    error::Result,
    graphs::{
        adjacency_graph::AdjacencyGraph, graph_functions::validate_path, Graph, VertexId, Weight,
        INFINITY,
    },
    queue::{binary_min_heap::BinaryMinHeap, DijkstraQueueElement, QueueKind},
    search::{
        dijkstra::{shortest_path, single_source},
        path::{ShortestPathRequest, ShortestPathTestCase},
    },
};

pub fn get_progressbar_long_jobs(job_name: &str, len: u64) -> ProgressBar {
    let bar = ProgressBar::new(len);
    bar.set_message(job_name.to_string());
    bar.set_style(
        ProgressStyle::with_template(" {msg} {wide_bar} estimated remaining: {eta_precise}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    bar
}

pub fn get_progressspinner(job_name: &str) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(job_name.to_string());
    spinner
}

/// Installs a stderr subscriber. `RUST_LOG` or `GRAPH_SEARCH_LOG` override the
/// level chosen by `verbose`.
pub fn init_tracing(verbose: bool) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "graph_search=debug"
    } else {
        "graph_search=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("GRAPH_SEARCH_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}

/// Undirected graph with `number_of_edges` random edges. Self loops are
/// allowed, weights are drawn from `0..=max_weight`.
pub fn random_graph<R: Rng>(
    number_of_vertices: u32,
    number_of_edges: u32,
    max_weight: Weight,
    rng: &mut R,
) -> Result<AdjacencyGraph> {
    let mut graph = AdjacencyGraph::new(number_of_vertices);
    if number_of_vertices == 0 {
        return Ok(graph);
    }

    for _ in 0..number_of_edges {
        let tail = rng.gen_range(0..number_of_vertices);
        let head = rng.gen_range(0..number_of_vertices);
        let weight = rng.gen_range(0..=max_weight.max(0));
        graph.add_edge(tail, head, weight)?;
    }

    Ok(graph)
}

pub fn random_requests<R: Rng>(
    graph: &dyn Graph,
    number_of_requests: u32,
    rng: &mut R,
) -> Vec<ShortestPathRequest> {
    let number_of_vertices = graph.number_of_vertices();
    if number_of_vertices == 0 {
        return Vec::new();
    }

    (0..number_of_requests)
        .map(|_| {
            ShortestPathRequest::new(
                rng.gen_range(0..number_of_vertices),
                rng.gen_range(0..number_of_vertices),
            )
        })
        .collect()
}

/// Pairs a random request with its distance computed by a full search.
pub fn gen_tests_cases<R: Rng>(
    graph: &dyn Graph,
    number_of_tests: u32,
    rng: &mut R,
) -> Result<Vec<ShortestPathTestCase>> {
    random_requests(graph, number_of_tests, rng)
        .into_iter()
        .progress_with(get_progressbar_long_jobs(
            "Generating test cases",
            number_of_tests as u64,
        ))
        .map(|request| -> Result<ShortestPathTestCase> {
            let mut queue = BinaryMinHeap::<DijkstraQueueElement>::new();
            let data = single_source(graph, request.source(), &mut queue)?;
            let distance = data
                .is_reachable(request.target())
                .then(|| data.get_distance(request.target()));
            Ok(ShortestPathTestCase { request, distance })
        })
        .collect()
}

/// Average duration of a full single source search per source.
pub fn benchmark(
    graph: &dyn Graph,
    sources: &[VertexId],
    queue_kind: QueueKind,
) -> Result<Duration> {
    let mut queue = queue_kind.build();
    let mut total = Duration::ZERO;
    let mut reached = 0usize;

    let bar = get_progressbar_long_jobs(
        &format!("Benchmarking {:?} queue", queue_kind),
        sources.len() as u64,
    );
    for &source in sources.iter().progress_with(bar) {
        let start = Instant::now();
        let data = single_source(graph, source, queue.as_mut())?;
        total += start.elapsed();
        reached += data
            .distances
            .iter()
            .filter(|&&distance| distance != INFINITY)
            .count();
    }

    tracing::debug!(?queue_kind, reached, "benchmark finished");
    Ok(average_duration(total, sources.len()))
}

/// Mean of `count` runs taking `total` together, zero if there were none.
pub fn average_duration(total: Duration, count: usize) -> Duration {
    if count == 0 {
        return Duration::ZERO;
    }
    total.div_f64(count as f64)
}

/// Runs a pair query for every test case and returns how many of them
/// produced an invalid path. Every failure is logged.
pub fn count_invalid_paths(graph: &dyn Graph, test_cases: &[ShortestPathTestCase]) -> Result<usize> {
    let mut invalid = 0;
    for test_case in test_cases {
        let path = shortest_path(graph, &test_case.request)?;
        if let Err(reason) = validate_path(graph, test_case, &path) {
            tracing::error!(?test_case, %reason, "invalid path");
            invalid += 1;
        }
    }
    Ok(invalid)
}

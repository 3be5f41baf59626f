use std::io::Write;

use graph_search::{
    error::Error,
    graphs::{edge::WeightedEdge, graph_factory::GraphFactory, Graph},
    read_graph,
    search::{bfs::bfs, dijkstra::shortest_paths},
    GraphFormat,
};
use tempfile::NamedTempFile;

const ADJACENCY_LIST: &str = "\
# undirected, both directions listed
1: 2,3
2: 1,4, 5
3: 1,6
4: 2
5: 2,6
6: 3,5,
7:
";

#[test]
fn reads_adjacency_list() {
    let graph = GraphFactory::from_adjacency_reader(ADJACENCY_LIST.as_bytes()).unwrap();

    assert_eq!(graph.number_of_vertices(), 8);
    assert_eq!(graph.number_of_edges(), 12);
    assert_eq!(
        graph.edges(2).collect::<Vec<_>>(),
        vec![
            WeightedEdge::new(2, 1, 1),
            WeightedEdge::new(2, 4, 1),
            WeightedEdge::new(2, 5, 1)
        ]
    );
    assert_eq!(graph.edges(7).len(), 0);

    assert_eq!(bfs(&graph, 1).unwrap(), vec![1, 2, 3, 4, 5, 6]);
}

#[test]
fn reads_weighted_adjacency_entries() {
    let graph = GraphFactory::from_adjacency_reader("0: 1/4, 2\n1: 2/1\n".as_bytes()).unwrap();

    assert_eq!(graph.number_of_vertices(), 3);
    assert_eq!(shortest_paths(&graph, 0).unwrap(), vec![0, 4, 1]);
}

#[test]
fn reports_malformed_lines() {
    let missing_colon = GraphFactory::from_adjacency_reader("1: 2\n2 1\n".as_bytes());
    assert!(matches!(missing_colon, Err(Error::Parse { line: 2, .. })));

    let bad_target = GraphFactory::from_adjacency_reader("\n\n1: 2,x\n".as_bytes());
    assert!(matches!(bad_target, Err(Error::Parse { line: 3, .. })));

    let bad_weight = GraphFactory::from_adjacency_reader("1: 2/heavy\n".as_bytes());
    assert!(matches!(bad_weight, Err(Error::Parse { line: 1, .. })));

    let negative = GraphFactory::from_adjacency_reader("1: 2/-1\n".as_bytes());
    assert!(matches!(negative, Err(Error::NegativeWeight { weight: -1, .. })));
}

#[test]
fn rejects_largest_vertex_id() {
    let adjacency = GraphFactory::from_adjacency_reader("4294967295: 1\n".as_bytes());
    assert!(matches!(adjacency, Err(Error::Parse { line: 1, .. })));

    let adjacency_head = GraphFactory::from_adjacency_reader("0: 1\n1: 4294967295\n".as_bytes());
    assert!(matches!(adjacency_head, Err(Error::Parse { line: 2, .. })));

    let edge_list = GraphFactory::from_edge_list_reader("0 4294967295 1\n".as_bytes());
    assert!(matches!(edge_list, Err(Error::Parse { line: 1, .. })));

    let largest = GraphFactory::from_edge_list_reader("0 9 1\n".as_bytes()).unwrap();
    assert_eq!(largest.number_of_vertices(), 10);
}

#[test]
fn reads_edge_list() {
    let edges = "\
# tail head weight
1 2 3
2 3 7
2 4 4
3 5 2
4 5 6
5 6 5
";
    let graph = GraphFactory::from_edge_list_reader(edges.as_bytes()).unwrap();

    assert_eq!(graph.number_of_vertices(), 7);
    assert_eq!(graph.number_of_edges(), 12);
    assert_eq!(shortest_paths(&graph, 1).unwrap()[1..], [0, 3, 10, 7, 12, 17]);
}

#[test]
fn edge_list_requires_three_values() {
    let missing_weight = GraphFactory::from_edge_list_reader("1 2 3\n1 2\n".as_bytes());
    assert!(matches!(missing_weight, Err(Error::Parse { line: 2, .. })));

    let trailing = GraphFactory::from_edge_list_reader("1 2 3 4\n".as_bytes());
    assert!(matches!(trailing, Err(Error::Parse { line: 1, .. })));
}

#[test]
fn empty_input_gives_empty_graph() {
    let graph = GraphFactory::from_adjacency_reader("# nothing\n\n".as_bytes()).unwrap();
    assert_eq!(graph.number_of_vertices(), 0);
}

#[test]
fn reads_graph_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(ADJACENCY_LIST.as_bytes()).unwrap();
    file.flush().unwrap();

    let graph = read_graph(file.path(), GraphFormat::Adjacency).unwrap();
    assert_eq!(graph.number_of_vertices(), 8);
}

#[test]
fn missing_file_is_an_io_error() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("missing.txt");

    assert!(matches!(
        read_graph(&path, GraphFormat::Edges),
        Err(Error::Io(_))
    ));
}

pub mod dijkstra_data;
pub mod visited_set;

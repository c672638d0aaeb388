pub mod graph;
pub mod table;

pub use graph::{GRAPH_RANGE, graph_points, render_graph};
pub use table::{render_table, table_rows};

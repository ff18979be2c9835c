pub mod order_graph;

pub use order_graph::{change_from_line, LineKey, NodeId, OrderGraph};

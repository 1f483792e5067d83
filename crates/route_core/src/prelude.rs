//! Re-exports of the most commonly used items in `route_core`.
pub use crate::error::RouteError;
pub use crate::graph::RoutableGraph;
pub use crate::graph_builder::{build_graph, GraphBuilder, MissingCoordinatePolicy};
pub use crate::planner::{build_network, plan_route, RouteConfig};
pub use crate::route::Route;
pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path::ShortestPath;

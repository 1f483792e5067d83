//! Crate to route on OpenStreetMap road networks.
//!
//! # Basic usage
//! ```no_run
//! use osm_reader::{OsmData, TravelMode};
//! use route_core::prelude::*;
//! use std::path::Path;
//!
//! // Path to pbf file
//! let path = Path::new("path/to/pbf/file.osm.pbf");
//!
//! // Decode the ways routable by car and the nodes they reference
//! let data = OsmData::from_pbf(path, TravelMode::Car).expect("Failed to read pbf file");
//!
//! // Filter, build the graph and search
//! let cfg = RouteConfig::new(TravelMode::Car, 442535874, 995356803);
//! let route = plan_route(&data, &cfg).expect("No route");
//!
//! println!("{} km over {} nodes", route.distance_km, route.nodes.len());
//!```
pub mod constants;
pub mod error;
pub mod graph;
pub mod graph_builder;
pub mod planner;
pub mod prelude;
pub mod route;
pub mod search;
pub mod statistics;
pub mod util;

pub use osm_reader::Node;

use log::info;
use osm_reader::{way_filter::accepted_ways, OsmData, TravelMode};

use crate::{
    constants::OsmId,
    error::Result,
    graph::RoutableGraph,
    graph_builder::{GraphBuilder, MissingCoordinatePolicy},
    route::Route,
    search::dijkstra::Dijkstra,
    statistics::BuildStats,
};

/// Options of one routing run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteConfig {
    pub mode: TravelMode,
    pub start: OsmId,
    pub end: OsmId,
    pub missing_coordinates: MissingCoordinatePolicy,
}

impl RouteConfig {
    pub fn new(mode: TravelMode, start: OsmId, end: OsmId) -> Self {
        RouteConfig {
            mode,
            start,
            end,
            missing_coordinates: MissingCoordinatePolicy::default(),
        }
    }

    /// Like [`RouteConfig::new`] but with the mode given by name (`car` or `walking`)
    pub fn parse(mode: &str, start: OsmId, end: OsmId) -> Result<Self> {
        Ok(Self::new(mode.parse()?, start, end))
    }

    pub fn missing_coordinates(mut self, policy: MissingCoordinatePolicy) -> Self {
        self.missing_coordinates = policy;
        self
    }
}

/// Builds the routable graph of `mode` from decoded data
pub fn build_network(
    data: &OsmData,
    mode: TravelMode,
    policy: MissingCoordinatePolicy,
) -> Result<(RoutableGraph, BuildStats)> {
    GraphBuilder::new(&data.nodes)
        .missing_coordinates(policy)
        .build(accepted_ways(&data.ways, mode))
}

/// Runs filter, graph construction and search for one start/end pair
pub fn plan_route(data: &OsmData, cfg: &RouteConfig) -> Result<Route> {
    info!(
        "Routing {} -> {} by {}",
        cfg.start, cfg.end, cfg.mode
    );

    let (graph, _) = build_network(data, cfg.mode, cfg.missing_coordinates)?;

    let mut dijkstra = Dijkstra::new(&graph);
    let sp = dijkstra.search(cfg.start, cfg.end)?;

    Route::from_path(sp, &data.nodes)
}

use osm_reader::UnsupportedMode;
use thiserror::Error;

use crate::constants::OsmId;

pub type Result<T> = std::result::Result<T, RouteError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RouteError {
    #[error(transparent)]
    UnsupportedMode(#[from] UnsupportedMode),
    /// `way` is the way referencing the node, if the node came from one
    #[error("No coordinates for node {node}{}", way.map(|w| format!(" of way {w}")).unwrap_or_default())]
    MissingNodeCoordinate { node: OsmId, way: Option<OsmId> },
    #[error("Node {0} is not part of the routable graph")]
    EndpointNotInGraph(OsmId),
    #[error("No path from {start} to {end}")]
    TargetUnreachable { start: OsmId, end: OsmId },
    #[error("Deadline exceeded after {nodes_settled} settled nodes")]
    DeadlineExceeded { nodes_settled: usize },
    #[error("Search was cancelled")]
    Cancelled,
}

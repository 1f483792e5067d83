use std::path::Path;

use log::debug;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::{
    constants::{OsmId, Weight},
    error::{Result, RouteError},
    search::shortest_path::ShortestPath,
    Node,
};

/// Final route handed to the map view: node ids and their `[lat, lon]` polyline
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    pub distance_km: Weight,
    pub nodes: Vec<OsmId>,
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Serialize)]
struct RoutePoint {
    id: OsmId,
    lat: f64,
    lon: f64,
}

impl Route {
    /// Attaches coordinates to every node of `path`.
    ///
    /// Fails instead of returning a partial polyline if a node is missing.
    pub fn from_path(path: ShortestPath, nodes: &FxHashMap<OsmId, Node>) -> Result<Self> {
        let coordinates = path
            .nodes
            .iter()
            .map(|id| {
                nodes
                    .get(id)
                    .map(|node| [node.lat, node.lon])
                    .ok_or(RouteError::MissingNodeCoordinate {
                        node: *id,
                        way: None,
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Route {
            distance_km: path.weight,
            nodes: path.nodes,
            coordinates,
        })
    }

    /// Writes the route as `id,lat,lon` rows
    pub fn write_csv(&self, path: &Path) -> anyhow::Result<()> {
        let mut wtr = csv::Writer::from_path(path)?;

        debug!("BEGIN writing route to {}", path.display());
        for (id, [lat, lon]) in self.nodes.iter().zip(self.coordinates.iter()) {
            wtr.serialize(RoutePoint {
                id: *id,
                lat: *lat,
                lon: *lon,
            })?;
        }

        wtr.flush()?;
        debug!("FINISHED writing route");
        Ok(())
    }
}

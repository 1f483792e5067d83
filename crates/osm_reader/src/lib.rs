use anyhow::Context;
use log::info;
use osmpbf::{Element, IndexedReader};
use rustc_hash::FxHashMap;
use std::path::Path;

mod travel_mode;
pub mod way_filter;

pub use travel_mode::{TravelMode, UnsupportedMode};
pub use way_filter::accept;

/// Type which represents a OpenStreetMap ID (<https://wiki.openstreetmap.org/wiki/Node>)
pub type OsmId = i64;

/// Decoded OSM node with WGS84 coordinates in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: OsmId,
    pub lat: f64,
    pub lon: f64,
}

impl Node {
    pub fn new(id: OsmId, lat: f64, lon: f64) -> Self {
        Node { id, lat, lon }
    }
}

/// Decoded OSM way: ordered node refs plus its key/value tags
#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub id: OsmId,
    pub refs: Vec<OsmId>,
    pub tags: Vec<(String, String)>,
}

impl Way {
    pub fn new(id: OsmId, refs: Vec<OsmId>, tags: &[(&str, &str)]) -> Self {
        Way {
            id,
            refs,
            tags: tags
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// Value of the tag with the given key
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Node table and way list as produced by the map-data decoder.
#[derive(Debug, Default, Clone)]
pub struct OsmData {
    pub nodes: FxHashMap<OsmId, Node>,
    pub ways: Vec<Way>,
}

impl OsmData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node.id, node);
    }

    pub fn add_way(&mut self, way: Way) {
        self.ways.push(way);
    }

    pub fn node(&self, id: OsmId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Reads ways and the nodes they reference from a `.osm.pbf` file.
    ///
    /// Only ways passing the way filter for `mode` are kept, which also limits
    /// the node table to their dependencies.
    pub fn from_pbf(pbf_path: &Path, mode: TravelMode) -> anyhow::Result<OsmData> {
        let mut data = OsmData::new();

        let mut reader = IndexedReader::from_path(pbf_path)
            .with_context(|| format!("Could not open {}", pbf_path.display()))?;

        let road_filter = |way: &osmpbf::Way| way_filter::accepts_tags(way.tags(), mode);

        let now = std::time::Instant::now();
        info!("BEGIN parsing {}", pbf_path.display());
        reader
            .read_ways_and_deps(road_filter, |element| match element {
                Element::Way(way) => {
                    data.add_way(Way {
                        id: way.id(),
                        refs: way.refs().collect(),
                        tags: way
                            .tags()
                            .map(|(k, v)| (k.to_string(), v.to_string()))
                            .collect(),
                    });
                }
                Element::Node(node) => {
                    data.add_node(Node::new(node.id(), node.lat(), node.lon()));
                }
                Element::DenseNode(dense_node) => {
                    data.add_node(Node::new(dense_node.id(), dense_node.lat(), dense_node.lon()));
                }
                Element::Relation(_) => {}
            })
            .with_context(|| format!("Failed to decode {}", pbf_path.display()))?;
        info!(
            "FINISHED parsing. Took {:?} ({} nodes, {} ways)",
            now.elapsed(),
            data.nodes.len(),
            data.ways.len()
        );

        Ok(data)
    }
}

use crate::constants::{OsmId, Weight};

#[derive(Debug, PartialEq, Clone)]
pub struct ShortestPath {
    /// Node ids from start to end, both inclusive
    pub nodes: Vec<OsmId>,
    /// Total distance in kilometers
    pub weight: Weight,
}

impl ShortestPath {
    pub fn new(nodes: Vec<OsmId>, weight: Weight) -> Self {
        ShortestPath { nodes, weight }
    }
}

use log::{debug, error, info, warn};
use rustc_hash::FxHashMap;

use crate::{
    constants::{OsmId, Weight},
    error::{Result, RouteError},
    graph::RoutableGraph,
    statistics::BuildStats,
    util::math::geodesic_km,
    Node,
};

/// What to do when a way references a node that is missing from the node table.
///
/// This happens for extracts clipped to a region: ways crossing the border
/// keep their refs, but the nodes outside are not part of the file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MissingCoordinatePolicy {
    /// Fail the build with [`RouteError::MissingNodeCoordinate`]
    #[default]
    Abort,
    /// Drop every pair touching the node and keep building
    Skip,
}

/// Builds a [`RoutableGraph`] from accepted ways and the node table.
///
/// Every consecutive pair of refs becomes an undirected edge weighted with the
/// distance between both nodes. Pairs that are already an edge are skipped
/// before the distance is computed.
pub struct GraphBuilder<'a, D = fn(&Node, &Node) -> Weight> {
    nodes: &'a FxHashMap<OsmId, Node>,
    distance: D,
    policy: MissingCoordinatePolicy,
}

impl<'a> GraphBuilder<'a> {
    /// Creates a builder using [`geodesic_km`] as edge weight
    pub fn new(nodes: &'a FxHashMap<OsmId, Node>) -> Self {
        GraphBuilder {
            nodes,
            distance: geodesic_km,
            policy: MissingCoordinatePolicy::default(),
        }
    }
}

impl<'a, D> GraphBuilder<'a, D>
where
    D: Fn(&Node, &Node) -> Weight,
{
    /// Replaces the distance function, e.g. with a cheaper approximation
    pub fn with_distance<E>(self, distance: E) -> GraphBuilder<'a, E>
    where
        E: Fn(&Node, &Node) -> Weight,
    {
        GraphBuilder {
            nodes: self.nodes,
            distance,
            policy: self.policy,
        }
    }

    pub fn missing_coordinates(mut self, policy: MissingCoordinatePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Builds the graph from `(way id, node refs)` pairs.
    ///
    /// Only nodes of the given ways become graph nodes. The order of `ways`
    /// has no effect on the resulting graph.
    pub fn build<'w, I>(&self, ways: I) -> Result<(RoutableGraph, BuildStats)>
    where
        I: IntoIterator<Item = (OsmId, &'w [OsmId])>,
    {
        let now = std::time::Instant::now();
        info!("BEGIN building graph");

        let mut graph = RoutableGraph::new();
        let mut stats = BuildStats::default();

        for (way_id, refs) in ways {
            stats.ways += 1;

            for &node_id in refs {
                if self.nodes.contains_key(&node_id) {
                    graph.add_node(node_id);
                    continue;
                }
                match self.policy {
                    MissingCoordinatePolicy::Abort => {
                        error!("Node {} of way {} has no coordinates", node_id, way_id);
                        return Err(RouteError::MissingNodeCoordinate {
                            node: node_id,
                            way: Some(way_id),
                        });
                    }
                    MissingCoordinatePolicy::Skip => {
                        debug!("Skipping node {} of way {}", node_id, way_id);
                    }
                }
            }

            for pair in refs.windows(2) {
                let (a, b) = (pair[0], pair[1]);

                // Repeated refs would form a self loop
                if a == b {
                    continue;
                }

                if graph.contains_edge(a, b) {
                    stats.duplicate_pairs += 1;
                    continue;
                }

                let (Some(node_a), Some(node_b)) = (self.nodes.get(&a), self.nodes.get(&b)) else {
                    stats.skipped_pairs += 1;
                    continue;
                };

                // Lower id first, so the weight does not depend on way direction
                let weight = if a < b {
                    (self.distance)(node_a, node_b)
                } else {
                    (self.distance)(node_b, node_a)
                };
                graph.add_edge(a, b, weight);
                stats.edges += 1;
            }
        }

        if stats.skipped_pairs > 0 {
            warn!(
                "Skipped {} node pairs with missing coordinates",
                stats.skipped_pairs
            );
        }

        stats.duration = Some(now.elapsed());
        info!("FINISHED building graph. Took {:?}", now.elapsed());
        info!(
            "Graph has {} nodes and {} edges",
            graph.num_nodes(),
            graph.num_edges()
        );

        Ok((graph, stats))
    }
}

/// Builds a graph with geodesic weights, aborting on missing coordinates.
pub fn build_graph<'w, I>(ways: I, nodes: &FxHashMap<OsmId, Node>) -> Result<RoutableGraph>
where
    I: IntoIterator<Item = (OsmId, &'w [OsmId])>,
{
    GraphBuilder::new(nodes).build(ways).map(|(graph, _)| graph)
}

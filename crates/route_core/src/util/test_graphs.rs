use osm_reader::{OsmData, Way};
use rustc_hash::FxHashMap;

use crate::{
    constants::{OsmId, Weight},
    graph::RoutableGraph,
    node, Node,
};

/// Node table keyed by id
pub fn node_table(nodes: Vec<Node>) -> FxHashMap<OsmId, Node> {
    nodes.into_iter().map(|node| (node.id, node)).collect()
}

/// Graph from explicit undirected edges, bypassing the geodesic weights
pub fn weighted_graph(edges: &[(OsmId, OsmId, Weight)]) -> RoutableGraph {
    let mut g = RoutableGraph::new();
    for &(a, b, weight) in edges {
        g.add_edge(a, b, weight);
    }
    g
}

pub fn generate_complex_graph() -> RoutableGraph {
    // A = 0, B = 1, ..., K = 10
    weighted_graph(&[
        (0, 1, 3.0),  // A <=> B
        (0, 2, 5.0),  // A <=> C
        (0, 10, 3.0), // A <=> K
        (1, 3, 5.0),  // B <=> D
        (1, 2, 3.0),  // B <=> C
        (2, 3, 2.0),  // C <=> D
        (2, 9, 2.0),  // C <=> J
        (3, 9, 4.0),  // D <=> J
        (3, 4, 7.0),  // D <=> E
        (4, 9, 3.0),  // E <=> J
        (4, 5, 6.0),  // E <=> F
        (5, 7, 2.0),  // F <=> H
        (5, 6, 4.0),  // F <=> G
        (6, 7, 3.0),  // G <=> H
        (6, 8, 5.0),  // G <=> I
        (7, 8, 3.0),  // H <=> I
        (7, 9, 2.0),  // H <=> J
        (8, 9, 4.0),  // I <=> J
        (8, 10, 6.0), // I <=> K
        (9, 10, 3.0), // J <=> K
    ])
}

/// Nodes of a small square, each side roughly 0.7-1.1 km
///
/// 4 --- 3
/// |     |
/// 1 --- 2
pub fn square_nodes() -> FxHashMap<OsmId, Node> {
    node_table(vec![
        node!(1, 47.0, 9.5),
        node!(2, 47.0, 9.51),
        node!(3, 47.01, 9.51),
        node!(4, 47.01, 9.5),
    ])
}

/// Square as one closed residential way
pub fn generate_square_graph() -> (RoutableGraph, FxHashMap<OsmId, Node>) {
    let nodes = square_nodes();
    let (g, _) = crate::graph_builder::GraphBuilder::new(&nodes)
        .build([(1, &[1, 2, 3, 4, 1][..])])
        .expect("square nodes are complete");
    (g, nodes)
}

/// Decoded data of a `size` x `size` grid of residential streets.
///
/// Node ids are `row * size + col + 1`, spaced 0.001° apart. Every row and
/// column is one way, so each inner node is shared by two ways.
pub fn grid_network(size: i64) -> OsmData {
    let id = |row: i64, col: i64| row * size + col + 1;
    let mut data = OsmData::new();

    for row in 0..size {
        for col in 0..size {
            data.add_node(Node::new(
                id(row, col),
                47.0 + row as f64 * 0.001,
                9.5 + col as f64 * 0.001,
            ));
        }
    }

    let tags = [("highway", "residential")];
    for i in 0..size {
        data.add_way(Way::new(i + 1, (0..size).map(|col| id(i, col)).collect(), &tags));
        data.add_way(Way::new(
            size + i + 1,
            (0..size).map(|row| id(row, i)).collect(),
            &tags,
        ));
    }
    data
}

#[cfg(test)]
pub(crate) type Network = (FxHashMap<OsmId, Node>, Vec<(OsmId, Vec<OsmId>)>);

/// Random node table with ids `0..num_nodes` and a few random ways over them
#[cfg(test)]
pub(crate) fn arb_network(num_nodes: i64) -> impl proptest::strategy::Strategy<Value = Network> {
    use proptest::{collection::vec, strategy::Strategy};

    let coords = vec((47.0..47.05f64, 9.5..9.55f64), num_nodes as usize);
    let ways = vec(vec(0..num_nodes, 2..6), 1..8);

    (coords, ways).prop_map(|(coords, ways)| {
        let nodes = coords
            .into_iter()
            .enumerate()
            .map(|(i, (lat, lon))| (i as OsmId, Node::new(i as OsmId, lat, lon)))
            .collect();
        let ways = ways
            .into_iter()
            .enumerate()
            .map(|(i, refs)| (i as OsmId, refs))
            .collect();
        (nodes, ways)
    })
}

/// Random graph over ids `0..num_nodes` with arbitrary edge weights
#[cfg(test)]
pub(crate) fn arb_weighted_graph(
    num_nodes: i64,
) -> impl proptest::strategy::Strategy<Value = RoutableGraph> {
    use proptest::{collection::vec, strategy::Strategy};

    let edges = vec(
        (0..num_nodes, 0..num_nodes, 0.0..10.0f64),
        0..(3 * num_nodes as usize),
    );

    edges.prop_map(|edges| {
        let edges: Vec<_> = edges.into_iter().filter(|(a, b, _)| a != b).collect();
        weighted_graph(&edges)
    })
}

use crate::constants::{OsmId, Weight};
use rustc_hash::{FxHashMap, FxHashSet};

/// Undirected road graph keyed by OSM node id.
///
/// `adjacency` and `distances` are kept in lockstep: `b` is adjacent to `a`
/// iff `distances[a][b]` holds the edge weight, and both directions share
/// the same stored value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoutableGraph {
    adjacency: FxHashMap<OsmId, FxHashSet<OsmId>>,
    distances: FxHashMap<OsmId, FxHashMap<OsmId, Weight>>,
    num_edges: usize,
}

impl RoutableGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `id` as a graph node without any edges.
    pub(crate) fn add_node(&mut self, id: OsmId) {
        self.adjacency.entry(id).or_default();
        self.distances.entry(id).or_default();
    }

    /// Inserts the undirected edge `a <=> b`.
    ///
    /// Returns `false` and leaves the graph untouched if the edge already exists.
    pub(crate) fn add_edge(&mut self, a: OsmId, b: OsmId, weight: Weight) -> bool {
        debug_assert!(a != b, "Self loop at node {a}");
        debug_assert!(weight >= 0.0 && weight.is_finite(), "Invalid weight {weight}");

        if !self.adjacency.entry(a).or_default().insert(b) {
            return false;
        }
        self.adjacency.entry(b).or_default().insert(a);

        self.distances.entry(a).or_default().insert(b, weight);
        self.distances.entry(b).or_default().insert(a, weight);

        self.num_edges += 1;
        true
    }

    pub fn contains(&self, id: OsmId) -> bool {
        self.adjacency.contains_key(&id)
    }

    pub fn contains_edge(&self, a: OsmId, b: OsmId) -> bool {
        self.adjacency.get(&a).is_some_and(|adj| adj.contains(&b))
    }

    /// Ids of all nodes adjacent to `id`
    pub fn adjacent(&self, id: OsmId) -> Option<&FxHashSet<OsmId>> {
        self.adjacency.get(&id)
    }

    /// Neighbors of `id` together with the edge weight. Empty for unknown nodes.
    pub fn neighbors(&self, id: OsmId) -> impl Iterator<Item = (OsmId, Weight)> + '_ {
        self.distances
            .get(&id)
            .into_iter()
            .flat_map(|targets| targets.iter().map(|(target, weight)| (*target, *weight)))
    }

    pub fn weight(&self, a: OsmId, b: OsmId) -> Option<Weight> {
        self.distances.get(&a)?.get(&b).copied()
    }

    /// Returns an iterator over all node ids of the graph
    pub fn nodes(&self) -> impl Iterator<Item = OsmId> + '_ {
        self.adjacency.keys().copied()
    }

    /// Returns every undirected edge once, as `(a, b, weight)` with `a < b`
    pub fn edges(&self) -> impl Iterator<Item = (OsmId, OsmId, Weight)> + '_ {
        self.distances.iter().flat_map(|(a, targets)| {
            targets
                .iter()
                .filter(move |(b, _)| a < *b)
                .map(move |(b, weight)| (*a, *b, *weight))
        })
    }

    pub fn degree(&self, id: OsmId) -> usize {
        self.adjacency.get(&id).map_or(0, |adj| adj.len())
    }

    pub fn num_nodes(&self) -> usize {
        self.adjacency.len()
    }

    pub fn num_edges(&self) -> usize {
        self.num_edges
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}

/// Macro to create a decoded node with a given id, lat, lon
/// node!(0, 47.0, 9.5)
#[macro_export]
macro_rules! node {
    ($id:expr, $lat:expr, $lon:expr) => {
        $crate::Node::new($id, $lat, $lon)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edge_is_symmetric() {
        let mut g = RoutableGraph::new();

        assert!(g.add_edge(1, 2, 0.5));

        assert!(g.contains_edge(1, 2));
        assert!(g.contains_edge(2, 1));
        assert_eq!(g.weight(1, 2), Some(0.5));
        assert_eq!(g.weight(2, 1), Some(0.5));
        assert_eq!(g.num_nodes(), 2);
        assert_eq!(g.num_edges(), 1);
    }

    #[test]
    fn add_duplicate_edges() {
        let mut g = RoutableGraph::new();

        assert!(g.add_edge(1, 2, 0.5));
        assert!(!g.add_edge(1, 2, 0.1));
        assert!(!g.add_edge(2, 1, 0.1));

        assert_eq!(g.num_edges(), 1);
        assert_eq!(g.weight(1, 2), Some(0.5));
        assert_eq!(g.degree(1), 1);
    }

    #[test]
    fn isolated_node() {
        let mut g = RoutableGraph::new();
        g.add_node(7);

        assert!(g.contains(7));
        assert_eq!(g.degree(7), 0);
        assert_eq!(g.neighbors(7).count(), 0);
        assert_eq!(g.neighbors(8).count(), 0);
        assert!(g.adjacent(8).is_none());
    }

    #[test]
    fn edges_are_listed_once() {
        // 1 - 2 - 3
        //     |
        //     4
        let mut g = RoutableGraph::new();
        g.add_edge(1, 2, 1.0);
        g.add_edge(3, 2, 2.0);
        g.add_edge(2, 4, 3.0);

        let mut edges: Vec<_> = g.edges().collect();
        edges.sort_by(|a, b| a.0.cmp(&b.0).then(a.1.cmp(&b.1)));

        assert_eq!(edges, vec![(1, 2, 1.0), (2, 3, 2.0), (2, 4, 3.0)]);
        assert_eq!(g.degree(2), 3);

        let mut nodes: Vec<_> = g.nodes().collect();
        nodes.sort();
        assert_eq!(nodes, vec![1, 2, 3, 4]);
    }
}

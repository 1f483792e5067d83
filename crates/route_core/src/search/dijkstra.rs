use std::{
    cmp::Ordering,
    collections::BinaryHeap,
    sync::{atomic::AtomicBool, Arc},
    time::Instant,
};

use log::{debug, info};
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    constants::{OsmId, Weight},
    error::{Result, RouteError},
    graph::RoutableGraph,
    search::{check_endpoints, reconstruct_path, shortest_path::ShortestPath, SearchLimits},
    statistics::SearchStats,
};

#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    pub(crate) node: OsmId,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node: OsmId, weight: Weight) -> Self {
        Self { node, weight }
    }
}

// Reversed so the max-heap pops the smallest weight, ties go to the lower id
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .weight
            .total_cmp(&self.weight)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

/// Dijkstra search on a binary heap with lazy deletion of stale entries.
///
/// Nodes are settled in order of tentative distance, ties broken by the lower
/// node id, so results match [`LinearScan`](super::linear_scan::LinearScan)
/// exactly.
pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a RoutableGraph,
    limits: SearchLimits,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a RoutableGraph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
            limits: SearchLimits::default(),
        }
    }

    /// Abort with [`RouteError::DeadlineExceeded`] once `deadline` has passed
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.limits.deadline = Some(deadline);
        self
    }

    /// Abort with [`RouteError::Cancelled`] as soon as `cancel` is set
    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.limits.cancel = Some(cancel);
        self
    }

    pub fn search(&mut self, start: OsmId, end: OsmId) -> Result<ShortestPath> {
        self.stats.init();
        check_endpoints(self.g, start, end)?;

        let mut distances: FxHashMap<OsmId, Weight> = FxHashMap::default();
        let mut predecessors: FxHashMap<OsmId, OsmId> = FxHashMap::default();
        let mut settled: FxHashSet<OsmId> = FxHashSet::default();
        let mut queue = BinaryHeap::new();

        distances.insert(start, 0.0);
        queue.push(Candidate::new(start, 0.0));

        while let Some(Candidate { node, weight }) = queue.pop() {
            // Stale entry, node was settled or improved after the push
            if settled.contains(&node) || weight > distances[&node] {
                continue;
            }

            self.limits.check(self.stats.nodes_settled)?;
            settled.insert(node);
            self.stats.nodes_settled += 1;

            if node == end {
                self.stats.finish();
                let sp = reconstruct_path(start, end, weight, &predecessors)
                    .ok_or(RouteError::TargetUnreachable { start, end })?;
                debug!("Path found: {:?}", sp);
                info!(
                    "Path found: {:?}/{} nodes settled",
                    self.stats.duration.unwrap_or_default(),
                    self.stats.nodes_settled
                );
                return Ok(sp);
            }

            for (target, edge_weight) in self.g.neighbors(node) {
                if settled.contains(&target) {
                    continue;
                }
                let new_distance = weight + edge_weight;
                if new_distance < *distances.get(&target).unwrap_or(&f64::INFINITY) {
                    distances.insert(target, new_distance);
                    predecessors.insert(target, node);
                    queue.push(Candidate::new(target, new_distance));
                }
            }
        }

        self.stats.finish();
        info!(
            "No path found: {:?}/{} nodes settled",
            self.stats.duration.unwrap_or_default(),
            self.stats.nodes_settled
        );
        Err(RouteError::TargetUnreachable { start, end })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering as AtomicOrdering;

    use crate::{
        graph_builder::GraphBuilder,
        search::{assert_path, assert_unreachable},
        util::test_graphs::{
            arb_network, generate_complex_graph, generate_square_graph, weighted_graph,
        },
    };

    /// Shortest distance over all simple paths, by exhaustive enumeration
    fn brute_force(g: &RoutableGraph, start: OsmId, end: OsmId) -> Option<Weight> {
        fn visit(
            g: &RoutableGraph,
            node: OsmId,
            end: OsmId,
            distance: Weight,
            on_path: &mut FxHashSet<OsmId>,
            best: &mut Option<Weight>,
        ) {
            if node == end {
                *best = Some(best.map_or(distance, |b: Weight| b.min(distance)));
                return;
            }
            for (target, weight) in g.neighbors(node) {
                if on_path.insert(target) {
                    visit(g, target, end, distance + weight, on_path, best);
                    on_path.remove(&target);
                }
            }
        }

        let mut best = None;
        let mut on_path = FxHashSet::default();
        on_path.insert(start);
        visit(g, start, end, 0.0, &mut on_path, &mut best);
        best
    }

    use super::*;

    #[test]
    fn simple_path() {
        //      7 - 8 - 9
        //      |       |
        // 0 -- 5 - 6 - |
        // |        |  \|
        // 1 -- 2 - 3 - 4
        let g = weighted_graph(&[
            (0, 1, 1.0),
            (1, 2, 1.0),
            (2, 3, 1.0),
            (3, 4, 20.0),
            (0, 5, 5.0),
            (5, 6, 1.0),
            (6, 4, 20.0),
            (6, 3, 20.0),
            (5, 7, 5.0),
            (7, 8, 1.0),
            (8, 9, 1.0),
            (9, 4, 1.0),
        ]);

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 5, 7, 8, 9, 4], 13.0, d.search(0, 4));
        assert_path(vec![4, 9, 8, 7, 5, 0], 13.0, d.search(4, 0));
        assert_path(vec![6, 5, 0, 1, 2, 3], 9.0, d.search(6, 3));
        assert_path(vec![4], 0.0, d.search(4, 4));
        assert_path(vec![1, 0, 5, 7, 8, 9, 4], 14.0, d.search(1, 4));
    }

    #[test]
    fn disconnected_graph() {
        // 0 - 1 - 2
        // 3 - 4 - 5
        let g = weighted_graph(&[(0, 1, 1.0), (1, 2, 1.0), (3, 4, 3.0), (4, 5, 1.0)]);

        let mut d = Dijkstra::new(&g);

        assert_unreachable(0, 3, d.search(0, 3));
        assert_unreachable(5, 2, d.search(5, 2));
        assert_path(vec![0, 1, 2], 2.0, d.search(0, 2));
        assert_path(vec![5, 4, 3], 4.0, d.search(5, 3));
    }

    #[test]
    fn go_around() {
        // 0 - 1
        // |   |
        // 2 - 3
        let g = weighted_graph(&[(0, 1, 10.0), (0, 2, 1.0), (2, 3, 1.0), (3, 1, 1.0)]);

        let mut d = Dijkstra::new(&g);

        assert_path(vec![0, 2, 3, 1], 3.0, d.search(0, 1));
    }

    #[test]
    fn ties_prefer_lower_ids() {
        //   2
        //  / \
        // 1   4
        //  \ /
        //   3
        let g = weighted_graph(&[(1, 3, 1.0), (3, 4, 1.0), (1, 2, 1.0), (2, 4, 1.0)]);

        let mut d = Dijkstra::new(&g);

        assert_path(vec![1, 2, 4], 2.0, d.search(1, 4));
        assert_path(vec![4, 2, 1], 2.0, d.search(4, 1));
    }

    #[test]
    fn complex_graph() {
        let g = generate_complex_graph();

        let mut d = Dijkstra::new(&g);

        // A -> K -> J -> H -> F
        assert_path(vec![0, 10, 9, 7, 5], 10.0, d.search(0, 5));
        // B -> C -> J -> E
        assert_path(vec![1, 2, 9, 4], 8.0, d.search(1, 4));
    }

    #[test]
    fn settles_in_distance_order() {
        let g = generate_complex_graph();

        let mut d = Dijkstra::new(&g);
        d.search(0, 0).unwrap();
        assert_eq!(d.stats.nodes_settled, 1);

        // G is the farthest node from A
        d.search(0, 6).unwrap();
        assert_eq!(d.stats.nodes_settled, 11);
    }

    #[test]
    fn square_with_real_coordinates() {
        // 4 --- 3
        // |     |
        // 1 --- 2
        let (g, _) = generate_square_graph();

        let mut d = Dijkstra::new(&g);
        let sp = d.search(1, 3).unwrap();

        assert_eq!(Some(sp.weight), brute_force(&g, 1, 3));
        // Parallels shrink towards the pole, so 4-3 is a bit shorter than 1-2
        assert_eq!(sp.nodes, vec![1, 4, 3]);
        assert_eq!(sp.weight, g.weight(1, 4).unwrap() + g.weight(4, 3).unwrap());
    }

    #[test]
    fn matches_brute_force() {
        let mut runner = proptest::test_runner::TestRunner::default();

        runner
            .run(&(arb_network(7), 0..7i64, 0..7i64), |((nodes, ways), a, b)| {
                let ways: Vec<_> = ways.iter().map(|(id, refs)| (*id, refs.as_slice())).collect();
                let (g, _) = GraphBuilder::new(&nodes).build(ways).unwrap();
                if !g.contains(a) || !g.contains(b) {
                    return Ok(());
                }

                match (Dijkstra::new(&g).search(a, b), brute_force(&g, a, b)) {
                    (Ok(sp), Some(expected)) => {
                        approx::assert_abs_diff_eq!(sp.weight, expected, epsilon = 1e-9);
                        assert_eq!(sp.nodes.first(), Some(&a));
                        assert_eq!(sp.nodes.last(), Some(&b));

                        // Prefix distances never decrease along the path
                        let mut total = 0.0;
                        for pair in sp.nodes.windows(2) {
                            let weight = g.weight(pair[0], pair[1]).unwrap();
                            assert!(weight >= 0.0);
                            total += weight;
                        }
                        approx::assert_abs_diff_eq!(total, sp.weight, epsilon = 1e-9);
                    }
                    (Err(err), None) => {
                        assert_eq!(err, RouteError::TargetUnreachable { start: a, end: b })
                    }
                    (result, expected) => panic!("{:?} != {:?}", result, expected),
                }
                Ok(())
            })
            .unwrap();
    }

    #[test]
    fn deadline_in_the_past() {
        let g = generate_complex_graph();

        let mut d = Dijkstra::new(&g).with_deadline(Instant::now());

        assert_eq!(
            d.search(0, 6),
            Err(RouteError::DeadlineExceeded { nodes_settled: 0 })
        );
    }

    #[test]
    fn cancelled_search() {
        let g = generate_complex_graph();
        let cancel = Arc::new(AtomicBool::new(true));

        let mut d = Dijkstra::new(&g).with_cancel_flag(cancel.clone());
        assert_eq!(d.search(0, 6), Err(RouteError::Cancelled));

        cancel.store(false, AtomicOrdering::Relaxed);
        assert!(d.search(0, 6).is_ok());
    }
}

use std::{
    sync::{atomic::AtomicBool, Arc},
    time::Instant,
};

use log::info;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{
    constants::{OsmId, Weight},
    error::{Result, RouteError},
    graph::RoutableGraph,
    search::{check_endpoints, reconstruct_path, shortest_path::ShortestPath, SearchLimits},
    statistics::SearchStats,
};

/// Dijkstra search selecting the next node by scanning all unsettled nodes.
///
/// O(V²), kept as reference for [`Dijkstra`](super::dijkstra::Dijkstra) and
/// for very small graphs. Ties are broken by the lower node id.
pub struct LinearScan<'a> {
    pub stats: SearchStats,
    g: &'a RoutableGraph,
    limits: SearchLimits,
}

impl<'a> LinearScan<'a> {
    pub fn new(graph: &'a RoutableGraph) -> Self {
        LinearScan {
            g: graph,
            stats: SearchStats::default(),
            limits: SearchLimits::default(),
        }
    }

    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.limits.deadline = Some(deadline);
        self
    }

    pub fn with_cancel_flag(mut self, cancel: Arc<AtomicBool>) -> Self {
        self.limits.cancel = Some(cancel);
        self
    }

    pub fn search(&mut self, start: OsmId, end: OsmId) -> Result<ShortestPath> {
        self.stats.init();
        check_endpoints(self.g, start, end)?;

        let mut distances: FxHashMap<OsmId, Weight> = FxHashMap::default();
        let mut predecessors: FxHashMap<OsmId, OsmId> = FxHashMap::default();
        let mut visited: FxHashSet<OsmId> = FxHashSet::default();

        distances.insert(start, 0.0);

        loop {
            self.limits.check(self.stats.nodes_settled)?;

            // Nodes without a distance are still at infinity
            let next = self
                .g
                .nodes()
                .filter(|node| !visited.contains(node))
                .filter_map(|node| distances.get(&node).map(|weight| (node, *weight)))
                .min_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

            let Some((node, weight)) = next else {
                self.stats.finish();
                info!(
                    "No path found: {:?}/{} nodes settled",
                    self.stats.duration.unwrap_or_default(),
                    self.stats.nodes_settled
                );
                return Err(RouteError::TargetUnreachable { start, end });
            };

            self.stats.nodes_settled += 1;

            if node == end {
                self.stats.finish();
                return reconstruct_path(start, end, weight, &predecessors)
                    .ok_or(RouteError::TargetUnreachable { start, end });
            }

            visited.insert(node);

            for (target, edge_weight) in self.g.neighbors(node) {
                if visited.contains(&target) {
                    continue;
                }
                let new_distance = weight + edge_weight;
                if new_distance < *distances.get(&target).unwrap_or(&f64::INFINITY) {
                    distances.insert(target, new_distance);
                    predecessors.insert(target, node);
                }
            }
        }
    }
}

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Instant,
};

use rustc_hash::FxHashMap;

use crate::{
    constants::{OsmId, Weight},
    error::{Result, RouteError},
    graph::RoutableGraph,
};

use self::{dijkstra::Dijkstra, shortest_path::ShortestPath};

pub mod dijkstra;
pub mod linear_scan;
pub mod shortest_path;

/// Shortest path from `start` to `end` using [`Dijkstra`]
pub fn shortest_path(graph: &RoutableGraph, start: OsmId, end: OsmId) -> Result<ShortestPath> {
    Dijkstra::new(graph).search(start, end)
}

/// Optional bounds on a running search, checked once per settled node.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    pub deadline: Option<Instant>,
    pub cancel: Option<Arc<AtomicBool>>,
}

impl SearchLimits {
    pub(crate) fn check(&self, nodes_settled: usize) -> Result<()> {
        if let Some(cancel) = &self.cancel {
            if cancel.load(Ordering::Relaxed) {
                return Err(RouteError::Cancelled);
            }
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(RouteError::DeadlineExceeded { nodes_settled });
            }
        }
        Ok(())
    }
}

pub(crate) fn check_endpoints(graph: &RoutableGraph, start: OsmId, end: OsmId) -> Result<()> {
    for node in [start, end] {
        if !graph.contains(node) {
            return Err(RouteError::EndpointNotInGraph(node));
        }
    }
    Ok(())
}

/// Follows the predecessor chain from `end` back to `start`
pub(crate) fn reconstruct_path(
    start: OsmId,
    end: OsmId,
    weight: Weight,
    predecessors: &FxHashMap<OsmId, OsmId>,
) -> Option<ShortestPath> {
    let mut path = vec![end];
    let mut node = end;

    while node != start {
        node = *predecessors.get(&node)?;
        path.push(node);
    }
    path.reverse();
    Some(ShortestPath::new(path, weight))
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<OsmId>,
    expected_weight: Weight,
    path: Result<ShortestPath>,
) {
    let path = path.expect("Expected a path");
    assert_eq!(expected_path, path.nodes);
    approx::assert_abs_diff_eq!(expected_weight, path.weight, epsilon = 1e-9);
}

#[cfg(test)]
pub(crate) fn assert_unreachable(start: OsmId, end: OsmId, path: Result<ShortestPath>) {
    assert_eq!(Err(RouteError::TargetUnreachable { start, end }), path);
}

use std::{
    fmt::{Debug, Display},
    time::{Duration, Instant},
};

use crate::graph::RoutableGraph;

#[derive(Debug, Default, Clone)]
pub struct SearchStats {
    pub nodes_settled: usize,
    pub duration: Option<Duration>,
    start_time: Option<Instant>,
}

impl SearchStats {
    pub fn init(&mut self) {
        self.nodes_settled = 0;
        self.duration = None;
        self.start_timer();
    }

    fn start_timer(&mut self) {
        self.start_time = Some(Instant::now());
    }

    pub fn finish(&mut self) {
        if let Some(start_time) = self.start_time {
            self.duration = Some(start_time.elapsed());
        }
    }
}

impl Display for SearchStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} nodes settled in {:?}",
            self.nodes_settled, self.duration
        )
    }
}

/// Counters collected while building a [`RoutableGraph`]
#[derive(Debug, Default, Clone, PartialEq)]
pub struct BuildStats {
    /// Accepted ways consumed
    pub ways: usize,
    /// Undirected edges inserted
    pub edges: usize,
    /// Consecutive pairs that were already an edge
    pub duplicate_pairs: usize,
    /// Consecutive pairs dropped because a node had no coordinates
    pub skipped_pairs: usize,
    pub duration: Option<Duration>,
}

impl Display for BuildStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Stats: {} ways, {} edges, {} duplicate pairs, {} skipped pairs in {:?}",
            self.ways, self.edges, self.duplicate_pairs, self.skipped_pairs, self.duration
        )
    }
}

pub fn average_degree(g: &RoutableGraph) -> f64 {
    if g.is_empty() {
        return 0.0;
    }
    let sum: usize = g.nodes().map(|node| g.degree(node)).sum();
    sum as f64 / g.num_nodes() as f64
}

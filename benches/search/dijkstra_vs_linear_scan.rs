use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use osm_reader::TravelMode;
use rand::prelude::*;
use route_core::{
    graph::RoutableGraph,
    graph_builder::MissingCoordinatePolicy,
    planner::build_network,
    search::{dijkstra::Dijkstra, linear_scan::LinearScan},
    util::test_graphs::{grid_network, weighted_graph},
};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

fn gen_rand_graph(number_nodes: i64) -> RoutableGraph {
    let mut rng = rand::thread_rng();

    // 2.5 edges per node on average
    let number_edges = (number_nodes as f32 * 2.5) as usize;

    let edges: Vec<_> = (0..number_edges)
        .map(|_| {
            let source = rng.gen_range(0..number_nodes);
            let target = rng.gen_range(0..number_nodes);
            let weight = rng.gen_range(1..100) as f64 / 100.0;
            (source, target, weight)
        })
        .filter(|(source, target, _)| source != target)
        .collect();

    weighted_graph(&edges)
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut graphs: Vec<RoutableGraph> = [500, 2_000].iter().map(|i| gen_rand_graph(*i)).collect();

    for size in [20, 50] {
        let data = grid_network(size);
        let (g, _) = build_network(&data, TravelMode::Car, MissingCoordinatePolicy::Abort).unwrap();
        graphs.push(g);
    }

    let mut group = c.benchmark_group("dijkstra_vs_linear_scan");
    let mut rng = rand::thread_rng();
    for graph in graphs {
        let nodes: Vec<_> = graph.nodes().collect();
        let src = *nodes.choose(&mut rng).unwrap();
        let dst = *nodes.choose(&mut rng).unwrap();

        group.bench_with_input(
            BenchmarkId::new("Dijkstra", graph.num_nodes()),
            &graph,
            |b, g| {
                let mut dijkstra = Dijkstra::new(g);
                b.iter(|| {
                    let _ = dijkstra.search(src, dst);
                });
            },
        );
        group.bench_with_input(
            BenchmarkId::new("LinearScan", graph.num_nodes()),
            &graph,
            |b, g| {
                let mut linear_scan = LinearScan::new(g);
                b.iter(|| {
                    let _ = linear_scan.search(src, dst);
                });
            },
        );
    }
    group.finish();
}

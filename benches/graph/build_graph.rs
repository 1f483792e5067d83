use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use osm_reader::TravelMode;
use route_core::{
    graph_builder::MissingCoordinatePolicy, planner::build_network, util::test_graphs::grid_network,
};

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);

pub fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_graph");
    for size in [50, 100, 200] {
        let data = grid_network(size);
        group.bench_with_input(BenchmarkId::from_parameter(size * size), &data, |b, data| {
            b.iter(|| {
                build_network(
                    black_box(data),
                    TravelMode::Walking,
                    MissingCoordinatePolicy::Abort,
                )
            })
        });
    }
    group.finish();
}

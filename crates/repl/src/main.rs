//! Interactive shell to query routes on a loaded map
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use osm_reader::{OsmData, OsmId, TravelMode};
use reedline_repl_rs::clap::{value_parser, Arg, ArgMatches, Command};
use reedline_repl_rs::{Repl, Result};
use route_core::{
    graph::RoutableGraph, graph_builder::MissingCoordinatePolicy, planner::build_network,
    route::Route, search::dijkstra::Dijkstra, statistics::average_degree,
};

/// Print graph info
fn info(_args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    Ok(Some(format!(
        "{} graph has {} nodes and {} edges (average degree {:.2})",
        context.mode,
        context.graph.num_nodes(),
        context.graph.num_edges(),
        average_degree(&context.graph)
    )))
}

fn run_route(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    let src = *args.get_one::<OsmId>("src").expect("src is required");
    let dst = *args.get_one::<OsmId>("dst").expect("dst is required");

    let mut dijkstra = Dijkstra::new(&context.graph);
    let sp = match dijkstra.search(src, dst) {
        Ok(sp) => sp,
        Err(err) => return Ok(Some(err.to_string())),
    };

    let route = match Route::from_path(sp, &context.data.nodes) {
        Ok(route) => route,
        Err(err) => return Ok(Some(err.to_string())),
    };

    let mut out = String::new();
    for (id, [lat, lon]) in route.nodes.iter().zip(route.coordinates.iter()) {
        out.push_str(&format!("{}\t{:.7}\t{:.7}\n", id, lat, lon));
    }
    out.push_str(&format!("Distance: {:.3} km\n", route.distance_km));
    out.push_str(&format!("Took: {:?}", dijkstra.stats.duration));
    Ok(Some(out))
}

fn measure_routes(args: ArgMatches, context: &mut Context) -> Result<Option<String>> {
    use rand::seq::SliceRandom;

    let n = *args.get_one::<usize>("n").unwrap_or(&10);

    let nodes: Vec<OsmId> = context.graph.nodes().collect();
    if nodes.is_empty() {
        return Ok(Some("Graph is empty".to_string()));
    }

    // Select n random start and end nodes
    let mut rng = rand::thread_rng();
    let mut res = String::new();
    for _ in 0..n {
        let (Some(src), Some(dst)) = (nodes.choose(&mut rng), nodes.choose(&mut rng)) else {
            continue;
        };
        let mut dijkstra = Dijkstra::new(&context.graph);
        match dijkstra.search(*src, *dst) {
            Ok(sp) => res.push_str(&format!(
                "{} -> {}: {:.3} km, {}\n",
                src, dst, sp.weight, dijkstra.stats
            )),
            Err(err) => res.push_str(&format!("{} -> {}: {}\n", src, dst, err)),
        }
    }

    Ok(Some(res))
}

#[derive(Default)]
struct Context {
    mode: TravelMode,
    data: OsmData,
    graph: RoutableGraph,
}

fn load(path: &Path, mode: TravelMode) -> anyhow::Result<Context> {
    let data = OsmData::from_pbf(path, mode)?;
    let (graph, stats) = build_network(&data, mode, MissingCoordinatePolicy::Skip)
        .context("Could not build graph")?;
    println!("{}", stats);
    Ok(Context { mode, data, graph })
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // Init Graph
    let mut args = std::env::args().skip(1);
    let path_to_pbf = args.next().context("No path to PBF file given")?;
    let mode: TravelMode = args.next().as_deref().unwrap_or("car").parse()?;
    let context = load(Path::new(&path_to_pbf), mode)?;

    let mut repl = Repl::new(context)
        .with_name("Pathfinder")
        .with_version("v0.1.0")
        .with_description("Simple REPL to query shortest routes")
        .with_banner("Welcome to Pathfinder")
        .with_history(PathBuf::from(r".\history"), 100)
        .with_command(Command::new("info").about("Print graph info"), info)
        .with_command(
            Command::new("route")
                .arg(
                    Arg::new("src")
                        .value_parser(value_parser!(OsmId))
                        .allow_negative_numbers(true)
                        .required(true)
                        .help("OSM id of start node"),
                )
                .arg(
                    Arg::new("dst")
                        .value_parser(value_parser!(OsmId))
                        .allow_negative_numbers(true)
                        .required(true)
                        .help("OSM id of end node"),
                )
                .about("Calculate the shortest route and its coordinates"),
            run_route,
        )
        .with_command(
            Command::new("routem")
                .arg(
                    Arg::new("n")
                        .value_parser(value_parser!(usize))
                        .required(false)
                        .help("Number of random routes to calculate"),
                )
                .about("Measure `n` random shortest route calculations"),
            measure_routes,
        );

    repl.run().map_err(|err| anyhow::anyhow!("{err}"))?;
    Ok(())
}

use anyhow::Context;
use osm_reader::OsmData;
use route_core::{planner::plan_route, util::cli};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse()?;

    let data = OsmData::from_pbf(&cfg.pbf_file, cfg.route.mode)?;
    let route = plan_route(&data, &cfg.route).with_context(|| {
        format!(
            "Could not route from {} to {}",
            cfg.route.start, cfg.route.end
        )
    })?;

    println!("Total distance: {:.3} km", route.distance_km);
    println!("Shortest path: {:?}", route.nodes);
    println!("Coordinates: {:?}", route.coordinates);

    if let Some(csv) = &cfg.csv {
        route.write_csv(csv)?;
        println!("Route written to {}", csv.display());
    }

    Ok(())
}

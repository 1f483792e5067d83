use std::path::PathBuf;

use clap::Parser;

use crate::{
    constants::OsmId,
    error::Result,
    graph_builder::MissingCoordinatePolicy,
    planner::RouteConfig,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the .pbf file
    pbf_file: String,

    /// Travel mode. Possible values are "car" and "walking"
    #[arg(short, long, default_value = "car")]
    mode: String,

    /// OSM id of the start node
    #[arg(short, long, value_name = "id", allow_negative_numbers = true)]
    start: OsmId,

    /// OSM id of the end node
    #[arg(short, long, value_name = "id", allow_negative_numbers = true)]
    end: OsmId,

    /// If set, edges touching nodes without coordinates are skipped instead of aborting
    #[arg(long, default_value = "false")]
    skip_missing: bool,

    /// Write the route as `id,lat,lon` rows to this file
    #[arg(long, value_name = "file")]
    csv: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub pbf_file: PathBuf,
    pub route: RouteConfig,
    pub csv: Option<PathBuf>,
}

/// Parses the process arguments.
///
/// An unknown travel mode is reported before any file is touched.
pub fn parse() -> Result<Cfg> {
    from_cli(Cli::parse())
}

/// Parses `args`, where the first item is the binary name
pub fn parse_from<I, T>(args: I) -> anyhow::Result<Cfg>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = Cli::try_parse_from(args)?;
    Ok(from_cli(cli)?)
}

fn from_cli(cli: Cli) -> Result<Cfg> {
    let mut route = RouteConfig::parse(&cli.mode, cli.start, cli.end)?;

    if cli.skip_missing {
        route = route.missing_coordinates(MissingCoordinatePolicy::Skip);
    }

    Ok(Cfg {
        pbf_file: PathBuf::from(cli.pbf_file),
        route,
        csv: cli.csv,
    })
}

/// Edge weight type, great-circle distance in kilometers
pub type Weight = f64;
/// Type which represents a OpenStreetMap ID (<https://wiki.openstreetmap.org/wiki/Node>)
pub use osm_reader::OsmId;

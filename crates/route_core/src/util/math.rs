use geo::{Distance, Geodesic, Point};

use crate::{constants::Weight, Node};

/// Great-circle distance in kilometers on the WGS84 ellipsoid
pub fn geodesic_km(src: &Node, dst: &Node) -> Weight {
    let a = Point::new(src.lon, src.lat);
    let b = Point::new(dst.lon, dst.lat);
    Geodesic.distance(a, b) / 1000.0
}

use crate::{OsmId, TravelMode, Way};

/// Returns the node refs of `way` if it belongs to the routable network of `mode`.
///
/// Ways carrying a `building` tag are never routable, whatever their highway
/// value is. Otherwise the `highway` tag must be one of the mode's accepted
/// values. The refs are returned in their original order.
pub fn accept(way: &Way, mode: TravelMode) -> Option<&[OsmId]> {
    let tags = way.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()));
    accepts_tags(tags, mode).then_some(way.refs.as_slice())
}

/// Tag-level check behind [`accept`], usable on tags that are still borrowed
/// from the decoder.
pub fn accepts_tags<'a>(
    tags: impl IntoIterator<Item = (&'a str, &'a str)>,
    mode: TravelMode,
) -> bool {
    let mut highway = None;
    for (key, value) in tags {
        match key {
            "building" => return false,
            "highway" => highway = Some(value),
            _ => {}
        }
    }
    highway.is_some_and(|value| mode.accepts_highway(value))
}

/// Filters `ways` by [`accept`], keeping way ids next to the node refs.
pub fn accepted_ways(
    ways: &[Way],
    mode: TravelMode,
) -> impl Iterator<Item = (OsmId, &[OsmId])> + '_ {
    ways.iter().filter_map(move |way| accept(way, mode).map(|refs| (way.id, refs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn way(tags: &[(&str, &str)]) -> Way {
        Way::new(1, vec![10, 11, 12], tags)
    }

    #[test]
    fn residential_is_accepted_for_both_modes() {
        let w = way(&[("highway", "residential"), ("name", "Dorfstrasse")]);

        assert_eq!(accept(&w, TravelMode::Car), Some(&[10, 11, 12][..]));
        assert_eq!(accept(&w, TravelMode::Walking), Some(&[10, 11, 12][..]));
    }

    #[test]
    fn motorway_only_for_cars() {
        let w = way(&[("highway", "motorway")]);

        assert!(accept(&w, TravelMode::Car).is_some());
        assert!(accept(&w, TravelMode::Walking).is_none());
    }

    #[test]
    fn building_is_never_routable() {
        let w = way(&[("highway", "service"), ("building", "garage")]);
        assert!(accept(&w, TravelMode::Car).is_none());
        assert!(accept(&w, TravelMode::Walking).is_none());

        let w = way(&[("building", "yes"), ("highway", "footway")]);
        assert!(accept(&w, TravelMode::Walking).is_none());
    }

    #[test]
    fn missing_or_unknown_highway() {
        assert!(accept(&way(&[("waterway", "river")]), TravelMode::Car).is_none());
        assert!(accept(&way(&[("highway", "bus_stop")]), TravelMode::Car).is_none());
        assert!(accept(&way(&[]), TravelMode::Walking).is_none());
    }

    #[test]
    fn tag_check_on_borrowed_tags() {
        let tags = [("highway", "steps"), ("surface", "stone")];
        assert!(accepts_tags(tags, TravelMode::Walking));
        assert!(!accepts_tags(tags, TravelMode::Car));
        assert!(!accepts_tags([("building", "yes"), ("highway", "steps")], TravelMode::Walking));
    }

    #[test]
    fn ref_order_is_kept() {
        let w = Way::new(7, vec![3, 1, 2, 1], &[("highway", "path")]);
        assert_eq!(accept(&w, TravelMode::Walking), Some(&[3, 1, 2, 1][..]));
    }

    #[test]
    fn accepted_ways_keeps_ids() {
        let ways = vec![
            Way::new(1, vec![1, 2], &[("highway", "motorway")]),
            Way::new(2, vec![2, 3], &[("highway", "footway")]),
            Way::new(3, vec![3, 4], &[("highway", "track")]),
        ];

        let car: Vec<_> = accepted_ways(&ways, TravelMode::Car).map(|(id, _)| id).collect();
        let walk: Vec<_> = accepted_ways(&ways, TravelMode::Walking)
            .map(|(id, _)| id)
            .collect();

        assert_eq!(car, vec![1, 3]);
        assert_eq!(walk, vec![2, 3]);
    }
}

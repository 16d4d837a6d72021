// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Forest basics.
//!
//! Build a small forest over a handful of places and run two box queries.
//!
//! Run:
//! - `cargo run -p waypoint_demos --example forest_search`

use waypoint_geo::{GeoBounds, GeoPoint};
use waypoint_index::{BkdForest, BoxQuery, GeoRecord};

fn main() {
    let mut records = vec![
        GeoRecord::new("rotterdam", 4.47, 51.92),
        GeoRecord::new("amsterdam", 4.90, 52.37),
        GeoRecord::new("antwerp", 4.40, 51.22),
        GeoRecord::new("oslo", 10.75, 59.91),
        GeoRecord::new("lisbon", -9.14, 38.72),
        GeoRecord::new("reykjavik", -21.94, 64.15),
        GeoRecord::new("suva", 178.44, -18.14),
        GeoRecord::new("nukualofa", -175.20, -21.14),
    ];

    let forest = BkdForest::new(&mut records, 2);
    for tree in forest.trees() {
        println!("{tree:?}");
    }

    // Everything in a box around the Low Countries.
    let low_countries = GeoBounds::new(GeoPoint::new(7.0, 54.0), GeoPoint::new(3.0, 50.0));
    report(&forest, &records, "low countries", &low_countries);

    // A box over the South Pacific, crossing the antimeridian.
    let south_pacific = GeoBounds::new(GeoPoint::new(-170.0, -10.0), GeoPoint::new(170.0, -30.0));
    report(&forest, &records, "south pacific", &south_pacific);
}

fn report(forest: &BkdForest, records: &[GeoRecord], label: &str, bounds: &GeoBounds) {
    let mut hits = Vec::new();
    forest.query(records, bounds, &mut hits);
    let ids: Vec<&str> = hits.iter().map(|&i| records[i].id.as_str()).collect();
    println!("{label}: {} hit(s): {ids:?}", ids.len());
}

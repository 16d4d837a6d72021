// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Box relations across the antimeridian.
//!
//! Show how a `max_lon < min_lon` box wraps and how `relate` reports it.
//!
//! Run:
//! - `cargo run -p waypoint_demos --example antimeridian`

use waypoint_geo::{GeoBounds, GeoPoint};

fn main() {
    // Covers [170, 180] ∪ [-180, -160]: thirty degrees around the seam.
    let strait = GeoBounds::new(GeoPoint::new(-160.0, 20.0), GeoPoint::new(170.0, -20.0));
    println!("strait valid: {}", strait.is_valid());

    for (label, lon) in [("fiji", 178.44), ("samoa", -172.1), ("hawaii", -155.58)] {
        let inside = strait.contains(GeoPoint::new(lon, 0.0));
        println!("{label} ({lon}): {}", if inside { "inside" } else { "outside" });
    }

    let narrow = GeoBounds::new(GeoPoint::new(-175.0, 10.0), GeoPoint::new(175.0, -10.0));
    println!("strait vs narrow: {:?}", strait.relate(&narrow));
    println!("narrow vs strait: {:?}", narrow.relate(&strait));
}

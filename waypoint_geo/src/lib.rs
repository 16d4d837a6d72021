// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Geo: bounding-box geometry on the longitude-wrapped sphere.
//!
//! This crate is the geometry kernel under the Waypoint spatial index. It
//! knows nothing about trees or records; it provides points, boxes, and the
//! two predicates every index layer is built from:
//!
//! - [`GeoBounds::contains`]: is a point inside a box?
//! - [`GeoBounds::relate`]: how do two boxes relate
//!   ([`Disjoint`](Relation::Disjoint), [`Intersects`](Relation::Intersects),
//!   [`Contains`](Relation::Contains), [`Within`](Relation::Within))?
//!
//! Longitudes live in `[-180, 180]` and wrap modulo 360: a box whose
//! `max_lon` is smaller than its `min_lon` crosses the antimeridian and
//! covers `[min_lon, 180] ∪ [-180, max_lon]`. A raw width of exactly 360
//! covers every longitude. Latitudes live in `[-90, 90]` and never wrap.
//!
//! All operations are pure predicates with no error paths. Inputs are not
//! validated here; callers gate ingestion with [`valid_longitude`],
//! [`valid_latitude`], and [`GeoBounds::is_valid`], all of which reject
//! NaN and infinities by IEEE comparison. Feeding unvalidated coordinates
//! into the predicates yields well-defined but meaningless booleans.
//!
//! # Example
//!
//! ```rust
//! use waypoint_geo::{GeoBounds, GeoPoint, Relation};
//!
//! // A box straddling the antimeridian: max_lon < min_lon.
//! let strait = GeoBounds::new(GeoPoint::new(-178.0, 2.0), GeoPoint::new(178.0, -2.0));
//! assert!(strait.is_valid());
//! assert!(strait.contains(GeoPoint::new(179.5, 0.0)));
//! assert!(strait.contains(GeoPoint::new(-179.5, 0.0)));
//! assert!(!strait.contains(GeoPoint::new(0.0, 0.0)));
//!
//! let world = GeoBounds::new(GeoPoint::new(180.0, 90.0), GeoPoint::new(-180.0, -90.0));
//! assert_eq!(world.relate(&strait), Relation::Contains);
//! assert_eq!(strait.relate(&world), Relation::Within);
//! ```
//!
//! This crate is `no_std` and allocation-free.

#![no_std]

/// A longitude/latitude pair in degrees.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoPoint {
    /// Longitude in `[-180, 180]`.
    pub lon: f64,
    /// Latitude in `[-90, 90]`.
    pub lat: f64,
}

impl GeoPoint {
    /// Create a point from a longitude and a latitude.
    pub const fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Componentwise minimum of two points.
    pub fn component_min(self, other: Self) -> Self {
        Self {
            lon: self.lon.min(other.lon),
            lat: self.lat.min(other.lat),
        }
    }

    /// Componentwise maximum of two points.
    pub fn component_max(self, other: Self) -> Self {
        Self {
            lon: self.lon.max(other.lon),
            lat: self.lat.max(other.lat),
        }
    }
}

/// How one box relates to another, as reported by [`GeoBounds::relate`].
///
/// `a.relate(&b)` reads left to right: `Contains` means `a` entirely covers
/// `b`, `Within` means `a` lies entirely inside `b`. Swapping the operands
/// swaps `Contains` and `Within`; `Disjoint` and `Intersects` are symmetric.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Relation {
    /// The boxes share no point.
    Disjoint,
    /// The boxes overlap without either covering the other.
    Intersects,
    /// The first box entirely covers the second.
    Contains,
    /// The first box lies entirely inside the second.
    Within,
}

/// An axis-aligned box on the longitude-wrapped sphere.
///
/// `upper` is the `(max_lon, max_lat)` corner, `lower` the
/// `(min_lon, min_lat)` corner. `upper.lat >= lower.lat` is required for the
/// box to be valid; `upper.lon < lower.lon` is meaningful and denotes a box
/// crossing the antimeridian.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GeoBounds {
    /// The `(max_lon, max_lat)` corner.
    pub upper: GeoPoint,
    /// The `(min_lon, min_lat)` corner.
    pub lower: GeoPoint,
}

impl GeoBounds {
    /// Create a box from its upper and lower corners.
    pub const fn new(upper: GeoPoint, lower: GeoPoint) -> Self {
        Self { upper, lower }
    }

    /// Whether both corners carry in-range, finite coordinates and the
    /// latitude band is not inverted. Longitude order is not constrained.
    pub fn is_valid(&self) -> bool {
        valid_longitude(self.upper.lon)
            && valid_longitude(self.lower.lon)
            && valid_latitude(self.upper.lat)
            && valid_latitude(self.lower.lat)
            && self.upper.lat >= self.lower.lat
    }

    /// Whether the point lies inside this box, honoring longitude wrap.
    pub fn contains(&self, point: GeoPoint) -> bool {
        if point.lat > self.upper.lat || point.lat < self.lower.lat {
            return false;
        }
        let min_x = self.lower.lon;
        let mut max_x = self.upper.lon;
        let mut px = point.lon;
        let raw_width = max_x - min_x;
        if raw_width < 0.0 {
            // Crossing box: remap onto a non-wrapping interval on the
            // extended line, then bring the candidate into the same frame.
            max_x = min_x + raw_width + 360.0;
        }
        if px < min_x {
            px += 360.0;
        } else {
            if px <= max_x {
                return true;
            }
            px -= 360.0;
        }
        px >= min_x && px <= max_x
    }

    /// Relation of this box to `other`.
    ///
    /// Latitude is compared on the plain line, longitude on the wrapped one.
    /// When the two axes disagree and neither span is shared, the result is
    /// [`Relation::Intersects`].
    pub fn relate(&self, other: &GeoBounds) -> Relation {
        let lat = relate_linear(
            self.lower.lat,
            self.upper.lat,
            other.lower.lat,
            other.upper.lat,
        );
        if lat == Relation::Disjoint {
            return Relation::Disjoint;
        }
        let lon = relate_longitude(
            self.lower.lon,
            self.upper.lon,
            other.lower.lon,
            other.upper.lon,
        );
        if lon == Relation::Disjoint {
            return Relation::Disjoint;
        }
        if lon == lat {
            return lon;
        }
        if self.upper.lat == other.upper.lat && self.lower.lat == other.lower.lat {
            return lon;
        }
        if self.upper.lon == other.upper.lon && self.lower.lon == other.lower.lon {
            return lat;
        }
        Relation::Intersects
    }
}

/// Whether a longitude is finite and within `[-180, 180]`.
pub fn valid_longitude(lon: f64) -> bool {
    (-180.0..=180.0).contains(&lon)
}

/// Whether a latitude is finite and within `[-90, 90]`.
pub fn valid_latitude(lat: f64) -> bool {
    (-90.0..=90.0).contains(&lat)
}

/// 1-D interval relation on the plain (non-wrapping) line.
fn relate_linear(min1: f64, max1: f64, min2: f64, max2: f64) -> Relation {
    if min2 > max1 || max2 < min1 {
        return Relation::Disjoint;
    }
    if min2 >= min1 && max2 <= max1 {
        return Relation::Contains;
    }
    if min2 <= min1 && max2 >= max1 {
        return Relation::Within;
    }
    Relation::Intersects
}

/// 1-D interval relation on the wrapped longitude axis.
///
/// A raw width of exactly 360 spans every longitude and short-circuits.
/// Crossing intervals are unwrapped onto the extended line; if the two
/// intervals then sit apart, the entirely-left one is shifted a full turn
/// right so both live in one frame before the linear comparison.
fn relate_longitude(min1: f64, max1: f64, min2: f64, max2: f64) -> Relation {
    let raw_width1 = max1 - min1;
    if raw_width1 == 360.0 {
        return Relation::Contains;
    }
    let mut max1 = if raw_width1 < 0.0 {
        min1 + raw_width1 + 360.0
    } else {
        max1
    };
    let raw_width2 = max2 - min2;
    if raw_width2 == 360.0 {
        return Relation::Within;
    }
    let mut max2 = if raw_width2 < 0.0 {
        min2 + raw_width2 + 360.0
    } else {
        max2
    };
    let mut min1 = min1;
    let mut min2 = min2;
    if max1 < min2 {
        min1 += 360.0;
        max1 += 360.0;
    } else if max2 < min1 {
        min2 += 360.0;
        max2 += 360.0;
    }
    relate_linear(min1, max1, min2, max2)
}

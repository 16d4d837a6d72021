// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The indexed record: an opaque identifier plus its position.

use alloc::string::String;
use core::cmp::Ordering;

use waypoint_geo::GeoPoint;

/// A geographic record: an opaque identifier tagged with a position.
///
/// Records are owned by one contiguous slice; trees never copy them and
/// refer to them by index. Equality is the identifier plus both coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct GeoRecord {
    /// Opaque identifier, preserved verbatim from ingestion.
    pub id: String,
    /// Position on the sphere.
    pub point: GeoPoint,
}

impl GeoRecord {
    /// Create a record from an identifier and a longitude/latitude pair.
    pub fn new(id: impl Into<String>, lon: f64, lat: f64) -> Self {
        Self {
            id: id.into(),
            point: GeoPoint::new(lon, lat),
        }
    }
}

/// Longitude order for the construction sorts. NaN compares equal, keeping
/// the comparison total; ingestion rejects non-finite coordinates upstream.
pub(crate) fn compare_lon(a: &GeoRecord, b: &GeoRecord) -> Ordering {
    a.point.lon.partial_cmp(&b.point.lon).unwrap_or(Ordering::Equal)
}

/// Latitude order for the construction sorts; same NaN stance as
/// [`compare_lon`].
pub(crate) fn compare_lat(a: &GeoRecord, b: &GeoRecord) -> Ordering {
    a.point.lat.partial_cmp(&b.point.lat).unwrap_or(Ordering::Equal)
}

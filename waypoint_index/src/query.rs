// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The one capability every index shape shares: a bounding-box query.

use alloc::vec::Vec;

use waypoint_geo::GeoBounds;

use crate::record::GeoRecord;

/// Bounding-box containment query over an indexed record slice.
///
/// Implemented by [`KdbTree`](crate::KdbTree) and
/// [`BkdForest`](crate::BkdForest); callers generic over either need nothing
/// more than this trait. `records` must be the same slice, unmodified, that
/// the index was built over. Matching record indices are appended to `out`
/// in the implementation's deterministic construction order; callers must
/// not rely on any other order.
///
/// Implementations keep no per-query state on `self`, so one index may serve
/// concurrent queries against distinct collectors.
pub trait BoxQuery {
    /// Append the indices of all records inside `bounds` to `out`.
    fn query(&self, records: &[GeoRecord], bounds: &GeoBounds, out: &mut Vec<usize>);
}

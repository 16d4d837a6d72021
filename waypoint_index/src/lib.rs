// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Waypoint Index: a bulk-loaded BKD forest over geographic points.
//!
//! The index answers one question fast: which records fall inside an
//! axis-aligned longitude/latitude box, antimeridian crossings included. It
//! is built once from the complete input and is immutable afterwards; there
//! is no insertion, deletion, or persistence.
//!
//! - [`GeoRecord`]: an opaque identifier plus a position. The caller owns
//!   the records in one contiguous slice; the index stores only indices
//!   into it.
//! - [`KdbTree`]: a static, complete binary tree over a range of that
//!   slice. Corners live in flat arrays indexed by node id (`left = 2n`,
//!   `right = 2n + 1`), so there are no node allocations and navigation is
//!   pure arithmetic.
//! - [`BkdForest`]: longitude-banded [`KdbTree`]s partitioning the whole
//!   slice; all trees but the last are filled to capacity.
//! - [`BoxQuery`]: the single shared operation, implemented by both shapes.
//!
//! Construction sorts the slice in place (one longitude pass, then one
//! latitude pass per leaf group) and rolls bounding boxes up the tree; three
//! passes over the data in total. Queries recurse over node ids held in
//! call frames, never on the tree, so a built index may serve concurrent
//! queries against distinct collectors.
//!
//! Coordinates must be finite and in range (longitude `[-180, 180]`,
//! latitude `[-90, 90]`); ingestion is expected to validate with
//! [`waypoint_geo`] before records reach a constructor.
//!
//! # Example
//!
//! ```rust
//! use waypoint_geo::{GeoBounds, GeoPoint};
//! use waypoint_index::{BkdForest, BoxQuery, GeoRecord};
//!
//! let mut records = vec![
//!     GeoRecord::new("harbor", 4.47, 51.92),
//!     GeoRecord::new("airport", 4.76, 52.31),
//!     GeoRecord::new("antipode", -175.53, -51.92),
//! ];
//! let forest = BkdForest::new(&mut records, 2);
//!
//! // Everything in a box around the Low Countries.
//! let query = GeoBounds::new(GeoPoint::new(7.0, 54.0), GeoPoint::new(3.0, 50.0));
//! let mut hits = Vec::new();
//! forest.query(&records, &query, &mut hits);
//! let mut ids: Vec<&str> = hits.iter().map(|&i| records[i].id.as_str()).collect();
//! ids.sort_unstable();
//! assert_eq!(ids, ["airport", "harbor"]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod forest;
pub mod kdb;
pub mod query;
pub mod record;

pub use forest::BkdForest;
pub use kdb::KdbTree;
pub use query::BoxQuery;
pub use record::GeoRecord;

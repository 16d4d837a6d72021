// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The BKD forest: longitude-banded KDB trees over one shared record slice.

use alloc::vec::Vec;
use core::fmt::Debug;

use waypoint_geo::GeoBounds;

use crate::kdb::KdbTree;
use crate::query::BoxQuery;
use crate::record::{GeoRecord, compare_lon};

/// An ordered set of [`KdbTree`]s whose ranges partition the record slice.
///
/// Construction sorts the whole slice by longitude once, then bites "full"
/// trees off the front: each bite is the largest power-of-two-leaf tree that
/// still fits the remainder, so every tree but the last is filled to
/// capacity and total leaf occupancy never drops below half. The trees
/// inherit the longitude order and skip their own longitude pass.
///
/// Queries dispatch to every tree in order and append to one collector; the
/// ranges are disjoint, so no result appears twice.
pub struct BkdForest {
    trees: Vec<KdbTree>,
}

impl BkdForest {
    /// Bulk-load a forest, sorting `records` in place.
    ///
    /// # Panics
    ///
    /// Panics if `records` is empty or `max_per_leaf < 2`. Callers ingesting
    /// external data are expected to reject both before reaching the index.
    pub fn new(records: &mut [GeoRecord], max_per_leaf: usize) -> Self {
        assert!(
            max_per_leaf >= 2,
            "records per leaf must be at least 2, got {max_per_leaf}"
        );
        assert!(!records.is_empty(), "cannot index an empty record slice");

        records.sort_by(compare_lon);

        let mut trees = Vec::new();
        let mut cursor = 0;
        while cursor < records.len() {
            let bite = full_tree_len(records.len() - cursor, max_per_leaf);
            trees.push(KdbTree::over_range(
                records,
                cursor..cursor + bite,
                max_per_leaf,
                true,
            ));
            cursor += bite;
        }
        Self { trees }
    }

    /// The trees, in ascending longitude-band order.
    pub fn trees(&self) -> &[KdbTree] {
        &self.trees
    }

    /// Total number of records indexed across all trees.
    pub fn len(&self) -> usize {
        self.trees.iter().map(KdbTree::len).sum()
    }

    /// Always false: construction refuses empty input.
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }
}

impl BoxQuery for BkdForest {
    fn query(&self, records: &[GeoRecord], bounds: &GeoBounds, out: &mut Vec<usize>) {
        for tree in &self.trees {
            tree.query(records, bounds, out);
        }
    }
}

impl Debug for BkdForest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BkdForest")
            .field("trees", &self.trees.len())
            .field("records", &self.len())
            .finish_non_exhaustive()
    }
}

/// Records consumed by the next tree for a remainder of `remaining`: the
/// whole remainder if one leaf can take it, otherwise the capacity of the
/// largest full tree not exceeding it (at least half of `remaining`).
fn full_tree_len(remaining: usize, max_per_leaf: usize) -> usize {
    if remaining <= max_per_leaf {
        return remaining;
    }
    let mut level: u32 = 2;
    while (1usize << (level - 1)) * max_per_leaf < remaining {
        level += 1;
    }
    (1usize << (level - 2)) * max_per_leaf
}

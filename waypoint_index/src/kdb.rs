// Copyright 2026 the Waypoint Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A static KDB tree: a complete binary tree over a record range, stored as
//! two flat corner arrays and navigated by index arithmetic alone.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::ops::Range;

use waypoint_geo::{GeoBounds, GeoPoint, Relation};

use crate::query::BoxQuery;
use crate::record::{GeoRecord, compare_lat, compare_lon};

/// A bulk-loaded, immutable KDB tree over a half-open range of a shared
/// record slice.
///
/// The tree is complete: `leaf_count` is a power of two and every node id
/// `n` in `[1, 2·leaf_count)` is populated, with `left = 2n`, `right = 2n+1`
/// and leaves at `n >= leaf_count`. Per-node corners live in two flat arrays
/// indexed by `n - 1`; there are no node objects and no child pointers.
///
/// Construction sorts the range in place: one longitude pass (skipped when
/// the range is pre-sorted) and one latitude pass per leaf group, then a
/// single bottom-up corner rollup. The record slice must not be reordered
/// afterwards; queries take it by shared reference and return indices into
/// it.
pub struct KdbTree {
    start: usize,
    end: usize,
    max_level: u32,
    /// Number of leaves; also the node id of the first leaf.
    leaf_count: usize,
    min_per_leaf: usize,
    /// Leaves `[0, extra_leaves)` hold one record more than `min_per_leaf`.
    extra_leaves: usize,
    /// `(min_lon, min_lat)` corner per node, indexed by `node - 1`.
    lower_bounds: Vec<GeoPoint>,
    /// `(max_lon, max_lat)` corner per node, indexed by `node - 1`.
    upper_bounds: Vec<GeoPoint>,
}

const ROOT: usize = 1;

impl KdbTree {
    /// Default number of records per leaf node.
    pub const DEFAULT_RECORDS_PER_LEAF: usize = 1024;

    /// Bulk-load a tree over a whole record slice, sorting it in place.
    ///
    /// # Panics
    ///
    /// Panics if `records` is empty or `max_per_leaf < 2`. Callers ingesting
    /// external data are expected to reject both before reaching the index.
    pub fn new(records: &mut [GeoRecord], max_per_leaf: usize) -> Self {
        let len = records.len();
        Self::over_range(records, 0..len, max_per_leaf, false)
    }

    /// Bulk-load a tree over `range` of `records`, sorting that range in
    /// place. `lon_sorted` skips the longitude pass when the range is
    /// already sorted (the forest sorts once for all its trees).
    ///
    /// # Panics
    ///
    /// Panics if `range` is empty or out of bounds, or `max_per_leaf < 2`.
    pub fn over_range(
        records: &mut [GeoRecord],
        range: Range<usize>,
        max_per_leaf: usize,
        lon_sorted: bool,
    ) -> Self {
        assert!(
            max_per_leaf >= 2,
            "records per leaf must be at least 2, got {max_per_leaf}"
        );
        assert!(!range.is_empty(), "cannot index an empty record range");
        assert!(
            range.end <= records.len(),
            "record range {range:?} out of bounds for {} records",
            records.len()
        );

        let len = range.len();
        let mut max_level: u32 = 1;
        while (1usize << (max_level - 1)) * max_per_leaf < len {
            max_level += 1;
        }
        let leaf_count = 1usize << (max_level - 1);
        let node_count = 2 * leaf_count - 1;

        let mut tree = Self {
            start: range.start,
            end: range.end,
            max_level,
            leaf_count,
            min_per_leaf: len / leaf_count,
            extra_leaves: len % leaf_count,
            lower_bounds: vec![GeoPoint::new(0.0, 0.0); node_count],
            upper_bounds: vec![GeoPoint::new(0.0, 0.0); node_count],
        };
        tree.build(records, lon_sorted);
        tree
    }

    /// The half-open range of the record slice this tree indexes.
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// Number of records indexed.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: a tree indexes at least one record.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Number of levels, root level being 1.
    pub fn max_level(&self) -> u32 {
        self.max_level
    }

    /// Number of leaf nodes (a power of two).
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// The box enclosing every indexed record.
    pub fn bounds(&self) -> GeoBounds {
        self.node_bounds(ROOT)
    }

    /// First record index of leaf `leaf`; `leaf == leaf_count` yields the
    /// end of the range, so consecutive calls bracket each leaf.
    fn leaf_start(&self, leaf: usize) -> usize {
        self.start + leaf * self.min_per_leaf + leaf.min(self.extra_leaves)
    }

    fn is_leaf(&self, node: usize) -> bool {
        node >= self.leaf_count
    }

    fn node_bounds(&self, node: usize) -> GeoBounds {
        GeoBounds::new(self.upper_bounds[node - 1], self.lower_bounds[node - 1])
    }

    /// Leaf positions `(first, last)` covered by `node`, from the
    /// complete-tree shape: the `k`-th node at depth `d` spans
    /// `[k · 2^h, (k+1) · 2^h)` leaves where `h` is its height above them.
    fn leaf_span(&self, node: usize) -> (usize, usize) {
        let depth = node.ilog2();
        let height = self.max_level - 1 - depth;
        let first_on_level = node - (1usize << depth);
        (
            first_on_level << height,
            ((first_on_level + 1) << height) - 1,
        )
    }

    fn build(&mut self, records: &mut [GeoRecord], lon_sorted: bool) {
        if !lon_sorted {
            records[self.start..self.end].sort_by(compare_lon);
        }

        // Latitude pass: the leaves split into equal groups of consecutive
        // leaves, one group per longitude cut above the latitude levels;
        // each group's records are ordered by latitude independently.
        let groups = 1usize << (self.max_level / 2);
        let leaves_per_group = self.leaf_count / groups;
        for group in 0..groups {
            let from = self.leaf_start(group * leaves_per_group);
            let to = self.leaf_start((group + 1) * leaves_per_group);
            records[from..to].sort_by(compare_lat);
        }

        // Leaf corners from a single scan per leaf.
        for leaf in 0..self.leaf_count {
            let from = self.leaf_start(leaf);
            let to = self.leaf_start(leaf + 1);
            let mut lower = records[from].point;
            let mut upper = records[from].point;
            for record in &records[from + 1..to] {
                lower = lower.component_min(record.point);
                upper = upper.component_max(record.point);
            }
            let slot = self.leaf_count - 1 + leaf;
            self.lower_bounds[slot] = lower;
            self.upper_bounds[slot] = upper;
        }

        // Internal corners, one level at a time towards the root. Level l
        // occupies nodes [2^(l-1), 2^l); children of node n sit at array
        // slots 2n - 1 and 2n.
        for level in (1..self.max_level).rev() {
            let first = 1usize << (level - 1);
            for node in first..2 * first {
                self.lower_bounds[node - 1] =
                    self.lower_bounds[2 * node - 1].component_min(self.lower_bounds[2 * node]);
                self.upper_bounds[node - 1] =
                    self.upper_bounds[2 * node - 1].component_max(self.upper_bounds[2 * node]);
            }
        }
    }

    /// Recursive descent with the node id as a parameter; the tree itself
    /// stays untouched, so concurrent queries are safe.
    fn query_node(
        &self,
        node: usize,
        records: &[GeoRecord],
        bounds: &GeoBounds,
        out: &mut Vec<usize>,
    ) {
        match self.node_bounds(node).relate(bounds) {
            Relation::Disjoint => {}
            Relation::Within => {
                // The whole node sits inside the query box.
                let (first, last) = self.leaf_span(node);
                out.extend(self.leaf_start(first)..self.leaf_start(last + 1));
            }
            _ if self.is_leaf(node) => {
                let leaf = node - self.leaf_count;
                for index in self.leaf_start(leaf)..self.leaf_start(leaf + 1) {
                    if bounds.contains(records[index].point) {
                        out.push(index);
                    }
                }
            }
            _ => {
                self.query_node(2 * node, records, bounds, out);
                self.query_node(2 * node + 1, records, bounds, out);
            }
        }
    }
}

impl BoxQuery for KdbTree {
    fn query(&self, records: &[GeoRecord], bounds: &GeoBounds, out: &mut Vec<usize>) {
        debug_assert!(
            self.end <= records.len(),
            "query slice shorter than the indexed range"
        );
        self.query_node(ROOT, records, bounds, out);
    }
}

impl Debug for KdbTree {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("KdbTree")
            .field("records", &self.len())
            .field("levels", &self.max_level)
            .field("leaves", &self.leaf_count)
            .field("min_per_leaf", &self.min_per_leaf)
            .finish_non_exhaustive()
    }
}

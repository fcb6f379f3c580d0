//! Per-column extents of a tile set.

use std::collections::BTreeMap;

use tacgrid_core::Point;

/// Lowest and highest row seen in one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeInfo {
    pub column: i32,
    pub min: i32,
    pub max: i32,
}

impl RangeInfo {
    /// The extremal tiles of the column, bottom (`max`) first. A single
    /// tile column yields the same point twice.
    pub fn ends(&self) -> [Point; 2] {
        [
            Point::new(self.column, self.max),
            Point::new(self.column, self.min),
        ]
    }
}

/// Silhouette of a tile set: one [`RangeInfo`] per distinct column,
/// iterated in column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeInfoList {
    columns: BTreeMap<i32, RangeInfo>,
}

impl RangeInfoList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the silhouette of `points`.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a Point>) -> Self {
        let mut list = Self::new();
        for &p in points {
            list.record(p);
        }
        list
    }

    /// Widen the extent of `p`'s column to include `p`.
    pub fn record(&mut self, p: Point) {
        self.columns
            .entry(p.x)
            .and_modify(|r| {
                r.min = r.min.min(p.y);
                r.max = r.max.max(p.y);
            })
            .or_insert(RangeInfo {
                column: p.x,
                min: p.y,
                max: p.y,
            });
    }

    pub fn get(&self, column: i32) -> Option<&RangeInfo> {
        self.columns.get(&column)
    }

    pub fn iter(&self) -> impl Iterator<Item = &RangeInfo> {
        self.columns.values()
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

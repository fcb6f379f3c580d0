//! Growing a tile set outward by an ability's reach.

use std::collections::{HashSet, VecDeque};

use tacgrid_core::{CARDINALS, Point};

use crate::board::{Board, BoardError};
use crate::silhouette::RangeInfoList;

/// Anything with an ability reach, typically a unit.
pub trait AbilityReach {
    /// Number of cardinal steps an ability reaches past the unit's tile.
    fn horizontal_reach(&self) -> u32;
}

impl AbilityReach for u32 {
    fn horizontal_reach(&self) -> u32 {
        *self
    }
}

impl Board {
    /// Flood-fill from `seed` up to `radius` steps, appending every tile not
    /// already in `set`.
    ///
    /// Tiles already in `set` are neither added again nor expanded through.
    /// Membership is by position. Existing entries are never removed or
    /// reordered.
    pub fn expand_range(
        &self,
        seed: Point,
        radius: u32,
        set: &mut Vec<Point>,
    ) -> Result<(), BoardError> {
        let mut members: HashSet<Point> = set.iter().copied().collect();
        self.expand_into(seed, radius, set, &mut members)
    }

    /// Extend `tiles` by the reach of `unit`.
    ///
    /// Only the silhouette is expanded: for each column of `tiles`, the
    /// topmost and bottommost tile seed a [`expand_range`](Self::expand_range).
    /// This suits connected movement ranges such as a search result plus its
    /// start; for arbitrary sets interior holes are not filled.
    ///
    /// The result starts with `tiles` in their original order.
    pub fn max_range<U: AbilityReach + ?Sized>(
        &self,
        unit: &U,
        tiles: &[Point],
    ) -> Result<Vec<Point>, BoardError> {
        let radius = unit.horizontal_reach();
        let mut result = tiles.to_vec();
        let mut members: HashSet<Point> = result.iter().copied().collect();
        let silhouette = RangeInfoList::from_points(tiles);
        for info in silhouette.iter() {
            for seed in info.ends() {
                self.expand_into(seed, radius, &mut result, &mut members)?;
            }
        }
        log::debug!(
            "max range: {} tiles over {} columns, reach {radius} -> {} tiles",
            tiles.len(),
            silhouette.len(),
            result.len()
        );
        Ok(result)
    }

    fn expand_into(
        &self,
        seed: Point,
        radius: u32,
        set: &mut Vec<Point>,
        members: &mut HashSet<Point>,
    ) -> Result<(), BoardError> {
        let si = self.require(seed)?;
        let mut current: VecDeque<(usize, u32)> = VecDeque::from([(si, 0)]);
        let mut next: VecDeque<(usize, u32)> = VecDeque::new();

        while let Some((ci, steps)) = current.pop_front() {
            for d in CARDINALS {
                if let Some(ni) = self.step(ci, d) {
                    let np = self.tiles[ni].pos;
                    if steps < radius && members.insert(np) {
                        set.push(np);
                        next.push_back((ni, steps + 1));
                    }
                }
                if current.is_empty() {
                    std::mem::swap(&mut current, &mut next);
                }
            }
        }
        Ok(())
    }
}

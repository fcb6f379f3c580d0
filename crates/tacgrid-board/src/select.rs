//! Highlight flags for rendering selectable tiles.
//!
//! Search never touches these flags; a renderer reads them back through
//! [`Tile::is_highlighted`] or [`Board::highlighted`].

use tacgrid_core::Point;

use crate::board::Board;
use crate::tile::Tile;

impl Board {
    /// Highlight the tiles at `points`. Positions without a tile are
    /// skipped. Returns how many tiles were flagged.
    pub fn select(&mut self, points: impl IntoIterator<Item = Point>) -> usize {
        self.set_highlight(points, true)
    }

    /// Remove the highlight from the tiles at `points`.
    pub fn deselect(&mut self, points: impl IntoIterator<Item = Point>) -> usize {
        self.set_highlight(points, false)
    }

    /// Remove every highlight.
    pub fn clear_highlights(&mut self) {
        for t in self.tiles.iter_mut() {
            t.highlighted = false;
        }
    }

    /// Currently highlighted tiles, in load order.
    pub fn highlighted(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter().filter(|t| t.highlighted)
    }

    fn set_highlight(&mut self, points: impl IntoIterator<Item = Point>, on: bool) -> usize {
        let mut n = 0;
        for p in points {
            match self.idx(p) {
                Some(i) => {
                    self.tiles[i].highlighted = on;
                    n += 1;
                }
                None => log::debug!("highlight: no tile at {p}"),
            }
        }
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tile::Level;
    use crate::wavefront::{Traversal, Wavefront};
    use tacgrid_core::TerrainTable;

    fn board() -> Board {
        Board::from_level(&TerrainTable::standard(), &Level::filled(3, 3)).unwrap()
    }

    #[test]
    fn select_and_deselect() {
        let mut b = board();
        let n = b.select([Point::new(0, 0), Point::new(1, 1), Point::new(9, 9)]);
        assert_eq!(n, 2);
        assert!(b.tile(Point::new(1, 1)).unwrap().is_highlighted());
        assert_eq!(b.highlighted().count(), 2);

        assert_eq!(b.deselect([Point::new(0, 0)]), 1);
        let lit: Vec<Point> = b.highlighted().map(|t| t.pos()).collect();
        assert_eq!(lit, vec![Point::new(1, 1)]);

        b.clear_highlights();
        assert_eq!(b.highlighted().count(), 0);
    }

    #[test]
    fn highlight_search_results() {
        let mut b = board();
        let mut wf = Wavefront::new();
        let reached: Vec<Point> = wf
            .search(&b, Point::new(0, 0), Traversal::Uniform, |_, _| true)
            .unwrap()
            .iter()
            .map(|n| n.pos)
            .collect();
        assert_eq!(b.select(reached), 8);
        assert!(!b.tile(Point::new(0, 0)).unwrap().is_highlighted());

        // Searching again leaves highlights alone.
        wf.search(&b, Point::new(2, 2), Traversal::Uniform, |_, _| false)
            .unwrap();
        assert_eq!(b.highlighted().count(), 8);
    }
}

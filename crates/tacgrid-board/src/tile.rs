//! Board cells and the parsed level input they are built from.

use tacgrid_core::{DEFAULT_TERRAIN, Point, TerrainKind};

/// One cell of the board.
///
/// Terrain attributes are fixed when the board is loaded. The only mutable
/// state is the highlight flag, owned by the selection helpers; search state
/// lives in [`Wavefront`](crate::Wavefront), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub(crate) pos: Point,
    pub(crate) terrain: TerrainKind,
    pub(crate) walk_penalty: i32,
    pub(crate) highlighted: bool,
}

impl Tile {
    pub(crate) fn new(pos: Point, terrain: TerrainKind, walk_penalty: i32) -> Self {
        Self {
            pos,
            terrain,
            walk_penalty,
            highlighted: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Point {
        self.pos
    }

    #[inline]
    pub fn terrain(&self) -> TerrainKind {
        self.terrain
    }

    /// Cost of entering this tile on foot. Always > 0.
    #[inline]
    pub fn walk_penalty(&self) -> i32 {
        self.walk_penalty
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }
}

/// A tile as described by level data: a position and a terrain tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileDesc {
    pub pos: Point,
    #[cfg_attr(feature = "serde", serde(default = "default_tag"))]
    pub terrain: String,
}

#[cfg(feature = "serde")]
fn default_tag() -> String {
    DEFAULT_TERRAIN.to_string()
}

impl TileDesc {
    pub fn new(pos: Point, terrain: impl Into<String>) -> Self {
        Self {
            pos,
            terrain: terrain.into(),
        }
    }
}

/// Parsed level data: the tiles a board is built from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Level {
    pub tiles: Vec<TileDesc>,
}

impl Level {
    /// A `width` × `height` rectangle of default tiles with its corner at
    /// the origin.
    pub fn filled(width: i32, height: i32) -> Self {
        let mut tiles = Vec::with_capacity(width.max(0) as usize * height.max(0) as usize);
        for y in 0..height {
            for x in 0..width {
                tiles.push(TileDesc::new(Point::new(x, y), DEFAULT_TERRAIN));
            }
        }
        Self { tiles }
    }

    /// Set the terrain tag at `pos`, adding the tile if absent.
    pub fn set(&mut self, pos: Point, terrain: &str) -> &mut Self {
        match self.tiles.iter_mut().find(|t| t.pos == pos) {
            Some(t) => t.terrain = terrain.to_string(),
            None => self.tiles.push(TileDesc::new(pos, terrain)),
        }
        self
    }

    /// Drop the tile at `pos`, leaving a hole.
    pub fn remove(&mut self, pos: Point) -> &mut Self {
        self.tiles.retain(|t| t.pos != pos);
        self
    }
}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn level_from_json() {
        let json = r#"{"tiles": [
            {"pos": {"x": 0, "y": 0}, "terrain": "water"},
            {"pos": {"x": 1, "y": 0}}
        ]}"#;
        let level: Level = serde_json::from_str(json).unwrap();
        assert_eq!(level.tiles[0], TileDesc::new(Point::new(0, 0), "water"));
        assert_eq!(level.tiles[1].terrain, DEFAULT_TERRAIN);
    }
}

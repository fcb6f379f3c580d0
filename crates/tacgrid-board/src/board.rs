use std::collections::HashMap;
use std::fmt;

use tacgrid_core::{Point, TerrainError, TerrainTable};

use crate::tile::{Level, Tile, TileDesc};

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The tile graph: every tile of a level, addressed by position.
///
/// Tiles are stored densely and addressed internally by a stable index, so
/// search scratch ([`Wavefront`](crate::Wavefront)) can be a flat array.
/// The set of tiles is fixed once the board is built.
#[derive(Debug, Clone, Default)]
pub struct Board {
    pub(crate) tiles: Vec<Tile>,
    pub(crate) index: HashMap<Point, usize>,
}

impl Board {
    /// Build a board from level data, resolving terrain tags in `table`.
    ///
    /// Unknown tags get the default terrain. A position listed twice is an
    /// error.
    pub fn from_level(table: &TerrainTable, level: &Level) -> Result<Self, BoardError> {
        Self::from_descs(table, &level.tiles)
    }

    /// Build a board from a list of tile descriptors.
    pub fn from_descs(table: &TerrainTable, descs: &[TileDesc]) -> Result<Self, BoardError> {
        let mut tiles = Vec::with_capacity(descs.len());
        let mut index = HashMap::with_capacity(descs.len());
        for desc in descs {
            if index.insert(desc.pos, tiles.len()).is_some() {
                return Err(BoardError::DuplicateTile(desc.pos));
            }
            let kind = table.kind_or_default(&desc.terrain);
            tiles.push(Tile::new(desc.pos, kind, table.walk_penalty(kind)));
        }
        log::debug!("board loaded with {} tiles", tiles.len());
        Ok(Self { tiles, index })
    }

    /// Number of tiles.
    #[inline]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Whether a tile exists at `p`.
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.index.contains_key(&p)
    }

    /// The tile at `p`, if any.
    pub fn tile(&self, p: Point) -> Option<&Tile> {
        self.idx(p).map(|i| &self.tiles[i])
    }

    /// Iterate over all tiles in load order.
    pub fn iter(&self) -> impl Iterator<Item = &Tile> {
        self.tiles.iter()
    }

    #[inline]
    pub(crate) fn idx(&self, p: Point) -> Option<usize> {
        self.index.get(&p).copied()
    }

    /// Index of the tile one step along `d` from tile `i`. Steps past the
    /// edge of the coordinate space have no tile.
    #[inline]
    pub(crate) fn step(&self, i: usize, d: Point) -> Option<usize> {
        self.tiles[i].pos.checked_add(d).and_then(|p| self.idx(p))
    }

    /// Index of `p`, or [`BoardError::UnknownTile`].
    pub(crate) fn require(&self, p: Point) -> Result<usize, BoardError> {
        self.idx(p).ok_or(BoardError::UnknownTile(p))
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors from building or querying a [`Board`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Level data lists the same position twice.
    DuplicateTile(Point),
    /// A query was rooted at a position with no tile.
    UnknownTile(Point),
    /// Invalid terrain configuration.
    Terrain(TerrainError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateTile(p) => write!(f, "board: duplicate tile at {p}"),
            Self::UnknownTile(p) => write!(f, "board: no tile at {p}"),
            Self::Terrain(e) => write!(f, "board: {e}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Terrain(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TerrainError> for BoardError {
    fn from(e: TerrainError) -> Self {
        Self::Terrain(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tacgrid_core::TerrainKind;

    #[test]
    fn load_resolves_terrain() {
        let mut level = Level::filled(3, 3);
        level.set(Point::new(1, 1), "water").set(Point::new(2, 2), "boue");
        let board = Board::from_level(&TerrainTable::standard(), &level).unwrap();

        assert_eq!(board.len(), 9);
        let water = board.tile(Point::new(1, 1)).unwrap();
        assert_eq!(water.terrain(), TerrainKind::WATER);
        assert_eq!(water.walk_penalty(), 3);
        let mud = board.tile(Point::new(2, 2)).unwrap();
        assert_eq!(mud.terrain(), TerrainKind::MUD);
        assert_eq!(board.tile(Point::new(0, 0)).unwrap().walk_penalty(), 1);
        assert!(board.iter().all(|t| !t.is_highlighted()));
    }

    #[test]
    fn unknown_terrain_uses_default() {
        let level = Level {
            tiles: vec![TileDesc::new(Point::new(0, 0), "lava")],
        };
        let board = Board::from_level(&TerrainTable::standard(), &level).unwrap();
        assert_eq!(
            board.tile(Point::new(0, 0)).unwrap().terrain(),
            TerrainKind::DEFAULT
        );
    }

    #[test]
    fn duplicate_position_fails() {
        let mut level = Level::filled(2, 1);
        level.tiles.push(TileDesc::new(Point::new(1, 0), "mud"));
        let err = Board::from_level(&TerrainTable::standard(), &level).unwrap_err();
        assert_eq!(err, BoardError::DuplicateTile(Point::new(1, 0)));
    }

    #[test]
    fn missing_tiles_are_absent() {
        let mut level = Level::filled(2, 2);
        level.remove(Point::new(0, 1));
        let board = Board::from_level(&TerrainTable::standard(), &level).unwrap();
        assert!(!board.contains(Point::new(0, 1)));
        assert!(board.tile(Point::new(0, 1)).is_none());
        assert!(board.contains(Point::new(1, 1)));
        assert_eq!(
            board.require(Point::new(9, 9)),
            Err(BoardError::UnknownTile(Point::new(9, 9)))
        );
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            BoardError::DuplicateTile(Point::new(1, 2)).to_string(),
            "board: duplicate tile at (1, 2)"
        );
        let e: BoardError = TerrainError::MissingDefault.into();
        assert!(std::error::Error::source(&e).is_some());
    }
}

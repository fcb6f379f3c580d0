//! Tile graph and range queries for grid-based tactics games.
//!
//! A [`Board`] is built once from parsed level data and a
//! [`TerrainTable`](tacgrid_core::TerrainTable). It answers three kinds of
//! query:
//!
//! - **Movement range** ([`Wavefront::search`]): every tile reachable from a
//!   start under a traversal rule, with costs and backtrack links.
//! - **Range expansion** ([`Board::expand_range`]): flood-fill a fixed number
//!   of steps from a seed, skipping tiles already in a set.
//! - **Ability range** ([`Board::max_range`]): grow a movement range by a
//!   unit's reach, expanding only from its silhouette ([`RangeInfoList`]).
//!
//! Search state lives in a [`Wavefront`] owned by the caller, so the board
//! is only borrowed immutably and several searches may share it. Highlight
//! flags for rendering are set with [`Board::select`] and
//! [`Board::deselect`].

mod board;
mod range;
mod select;
mod silhouette;
mod tile;
mod wavefront;

pub use board::{Board, BoardError};
pub use range::AbilityReach;
pub use silhouette::{RangeInfo, RangeInfoList};
pub use tile::{Level, Tile, TileDesc};
pub use wavefront::{PathNode, Traversal, UNREACHABLE, Wavefront};

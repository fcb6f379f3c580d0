//! **tacgrid-core** — core types for grid-based tactics boards.
//!
//! This crate provides the coordinate type shared by every board query, the
//! fixed cardinal direction table, and the terrain configuration that maps
//! level tags to movement costs.

pub mod geom;
pub mod terrain;

pub use geom::{CARDINALS, Point, manhattan};
pub use terrain::{DEFAULT_TERRAIN, TerrainDef, TerrainError, TerrainKind, TerrainTable};

//! Shared code for the tacgrid demos: compute a unit's movement and ability
//! range on a bundled level and draw it as text.

use std::collections::HashSet;

use tacgrid_board::{Board, BoardError, Level, Tile, Traversal, Wavefront};
use tacgrid_core::{Point, TerrainKind, TerrainTable};

/// Level bundled with the demos.
pub const LEVEL: &str = include_str!("../data/level.json");
/// Terrain table bundled with the demos.
pub const TERRAIN: &str = include_str!("../data/terrain.json");

/// What to preview.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreviewConfig {
    pub start: Point,
    pub mode: Traversal,
    /// Movement budget; tiles costing more are out of range.
    pub moves: i32,
    /// Ability reach past the movement range.
    pub reach: u32,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            start: Point::new(1, 1),
            mode: Traversal::Foot,
            moves: 3,
            reach: 1,
        }
    }
}

impl PreviewConfig {
    /// Parse `[x y [moves [reach [mode]]]]`, keeping defaults for anything
    /// missing.
    pub fn from_args(args: &[String]) -> Result<Self, String> {
        let mut cfg = Self::default();
        let num = |i: usize| -> Result<Option<i32>, String> {
            args.get(i)
                .map(|s| s.parse::<i32>().map_err(|e| format!("argument {s:?}: {e}")))
                .transpose()
        };
        if let (Some(x), Some(y)) = (num(0)?, num(1)?) {
            cfg.start = Point::new(x, y);
        }
        if let Some(m) = num(2)? {
            cfg.moves = m;
        }
        if let Some(r) = num(3)? {
            cfg.reach = u32::try_from(r).map_err(|_| format!("reach must be >= 0, got {r}"))?;
        }
        if let Some(mode) = args.get(4) {
            cfg.mode = mode.parse().unwrap_or_default();
        }
        Ok(cfg)
    }
}

/// Result of a preview query.
#[derive(Debug, Clone, Default)]
pub struct Preview {
    /// Tiles the unit can move to, start included.
    pub movement: Vec<Point>,
    /// `movement` extended by the unit's reach.
    pub extended: Vec<Point>,
}

/// Water is impassable for the demo unit.
fn admissible(_: &Tile, to: &Tile) -> bool {
    to.terrain() != TerrainKind::WATER
}

/// Compute the movement range within `cfg.moves` and its extension.
pub fn preview(board: &Board, cfg: &PreviewConfig) -> Result<Preview, BoardError> {
    let mut wf = Wavefront::new();
    let nodes = wf.search(board, cfg.start, cfg.mode, admissible)?;
    let movement: Vec<Point> = std::iter::once(cfg.start)
        .chain(
            nodes
                .iter()
                .filter(|n| n.cost <= cfg.moves)
                .map(|n| n.pos),
        )
        .collect();
    let extended = board.max_range(&cfg.reach, &movement)?;
    Ok(Preview { movement, extended })
}

/// Draw the board: `@` start, `*` movement range, `+` ability reach,
/// otherwise the terrain (`.` default, `~` water, `,` mud).
pub fn render(board: &Board, table: &TerrainTable, start: Point, preview: &Preview) -> String {
    let Some(first) = board.iter().next() else {
        return String::new();
    };
    let (mut min, mut max) = (first.pos(), first.pos());
    for t in board.iter() {
        let p = t.pos();
        min = Point::new(min.x.min(p.x), min.y.min(p.y));
        max = Point::new(max.x.max(p.x), max.y.max(p.y));
    }
    let movement: HashSet<Point> = preview.movement.iter().copied().collect();
    let extended: HashSet<Point> = preview.extended.iter().copied().collect();

    let mut out = String::new();
    for y in min.y..=max.y {
        for x in min.x..=max.x {
            let p = Point::new(x, y);
            let ch = match board.tile(p) {
                None => ' ',
                Some(_) if p == start => '@',
                Some(_) if movement.contains(&p) => '*',
                Some(_) if extended.contains(&p) => '+',
                Some(t) => match table.def(t.terrain()).name.as_str() {
                    "water" => '~',
                    "mud" => ',',
                    _ => '.',
                },
            };
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Load the bundled level and terrain table.
pub fn load_bundled() -> Result<(TerrainTable, Board), Box<dyn std::error::Error>> {
    let table: TerrainTable = serde_json::from_str(TERRAIN)?;
    let level: Level = serde_json::from_str(LEVEL)?;
    let board = Board::from_level(&table, &level)?;
    Ok((table, board))
}

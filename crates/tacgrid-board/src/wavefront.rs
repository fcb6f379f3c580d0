//! Cost-aware wavefront expansion with a pluggable traversal rule.

use std::collections::VecDeque;
use std::convert::Infallible;
use std::str::FromStr;

use tacgrid_core::{CARDINALS, Point};

use crate::board::{Board, BoardError};
use crate::tile::Tile;

/// Sentinel distance for tiles the last search did not reach.
pub const UNREACHABLE: i32 = i32::MAX;

const NO_PREV: usize = usize::MAX;

/// How a unit moves, which decides the cost of each step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Traversal {
    /// Entering a tile costs its walk penalty.
    Foot,
    /// Every step costs 1 whatever the terrain.
    #[default]
    Uniform,
}

impl Traversal {
    /// Cost of stepping onto `to`.
    #[inline]
    pub fn step_cost(self, to: &Tile) -> i32 {
        match self {
            Self::Foot => to.walk_penalty,
            Self::Uniform => 1,
        }
    }
}

/// `"foot"` selects [`Traversal::Foot`]; anything else is uniform.
impl FromStr for Traversal {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "foot" { Self::Foot } else { Self::Uniform })
    }
}

/// A tile reached by a search, with its final cost and predecessor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathNode {
    pub pos: Point,
    pub cost: i32,
    /// Previous tile on the best known path. `None` only for the root.
    pub prev: Option<Point>,
}

/// Scratch state for [`search`](Self::search).
///
/// Holds the per-tile distances, backtrack links and frontiers of one
/// search. The board itself is only read, so each caller can keep its own
/// `Wavefront` and search the same board independently. Buffers are reused
/// between calls.
///
/// Query methods take the board that was searched; passing another board
/// gives meaningless answers.
#[derive(Debug, Clone, Default)]
pub struct Wavefront {
    dist: Vec<i32>,
    prev: Vec<usize>,
    /// Cached predicate answers, by tile and [`CARDINALS`] slot.
    edges: Vec<[Option<bool>; 4]>,
    order: Vec<usize>,
    results: Vec<PathNode>,
    current: VecDeque<usize>,
    next: VecDeque<usize>,
    root: Option<Point>,
}

impl Wavefront {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute every tile reachable from `start` and its cost.
    ///
    /// A neighbour is relaxed when stepping onto it from the tile being
    /// expanded would lower its cost and `admissible(current, candidate)`
    /// agrees. Each improved tile is queued for expansion again, so costs
    /// settle to the cheapest admissible path. The predicate is only
    /// consulted for edges that would improve a cost, at most once per
    /// directed edge; later expansions reuse its first answer.
    ///
    /// Returns the reached tiles (the start excluded) in the order they were
    /// first reached, each with its final cost and predecessor.
    pub fn search<F>(
        &mut self,
        board: &Board,
        start: Point,
        mode: Traversal,
        mut admissible: F,
    ) -> Result<&[PathNode], BoardError>
    where
        F: FnMut(&Tile, &Tile) -> bool,
    {
        let si = board.require(start)?;
        self.reset(board.len());
        self.root = Some(start);
        self.dist[si] = 0;
        self.current.push_back(si);

        while let Some(ci) = self.current.pop_front() {
            let tile = &board.tiles[ci];
            for (slot, d) in CARDINALS.into_iter().enumerate() {
                if let Some(ni) = board.step(ci, d) {
                    let next = &board.tiles[ni];
                    let nd = self.dist[ci].saturating_add(mode.step_cost(next));
                    if nd < self.dist[ni]
                        && self.edge_allowed(ci, slot, || admissible(tile, next))
                    {
                        if self.dist[ni] == UNREACHABLE {
                            self.order.push(ni);
                        }
                        log::trace!("relax {} -> {} at {}", tile.pos, next.pos, nd);
                        self.dist[ni] = nd;
                        self.prev[ni] = ci;
                        self.next.push_back(ni);
                    }
                }
                // The frontiers swap as soon as the current one drains, even
                // halfway through a tile's neighbours.
                if self.current.is_empty() {
                    std::mem::swap(&mut self.current, &mut self.next);
                }
            }
        }

        self.results.extend(self.order.iter().map(|&i| PathNode {
            pos: board.tiles[i].pos,
            cost: self.dist[i],
            prev: Some(board.tiles[self.prev[i]].pos),
        }));
        log::debug!(
            "wavefront from {start} ({mode:?}) reached {} tiles",
            self.results.len()
        );
        Ok(&self.results)
    }

    /// Tiles reached by the last search.
    pub fn results(&self) -> &[PathNode] {
        &self.results
    }

    /// Start of the last search.
    pub fn root(&self) -> Option<Point> {
        self.root
    }

    /// Cost of `p` in the last search, or [`UNREACHABLE`].
    pub fn cost_at(&self, board: &Board, p: Point) -> i32 {
        match board.idx(p) {
            Some(i) if i < self.dist.len() => self.dist[i],
            _ => UNREACHABLE,
        }
    }

    /// Predecessor of `p` in the last search.
    pub fn prev_at(&self, board: &Board, p: Point) -> Option<Point> {
        let i = board.idx(p)?;
        match self.prev.get(i) {
            Some(&pi) if pi != NO_PREV => Some(board.tiles[pi].pos),
            _ => None,
        }
    }

    /// Follow the backtrack chain from `to` to the root.
    ///
    /// Returns the path root first, `to` last, or `None` if `to` was not
    /// reached.
    pub fn path_to(&self, board: &Board, to: Point) -> Option<Vec<Point>> {
        if self.cost_at(board, to) == UNREACHABLE {
            return None;
        }
        let mut path = Vec::new();
        let mut ci = board.idx(to)?;
        while ci != NO_PREV {
            path.push(board.tiles[ci].pos);
            ci = self.prev[ci];
        }
        path.reverse();
        Some(path)
    }

    /// Answer for the edge leaving tile `ci` through direction `slot`,
    /// asking `admissible` only the first time.
    fn edge_allowed(
        &mut self,
        ci: usize,
        slot: usize,
        admissible: impl FnOnce() -> bool,
    ) -> bool {
        *self.edges[ci][slot].get_or_insert_with(admissible)
    }

    fn reset(&mut self, len: usize) {
        self.dist.clear();
        self.dist.resize(len, UNREACHABLE);
        self.prev.clear();
        self.prev.resize(len, NO_PREV);
        self.edges.clear();
        self.edges.resize(len, [None; 4]);
        self.order.clear();
        self.results.clear();
        self.current.clear();
        self.next.clear();
        self.root = None;
    }
}

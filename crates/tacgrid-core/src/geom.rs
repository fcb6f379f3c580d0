//! Board coordinates: [`Point`], the cardinal direction table, and
//! [`manhattan`] distance.

use std::fmt;
use std::ops::{Add, Neg, Sub};

// ---------------------------------------------------------------------------
// Point
// ---------------------------------------------------------------------------

/// A tile coordinate on the board. `x` selects the column, `y` the row.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The four cardinal unit vectors, in search enumeration order.
///
/// The order only affects tie-breaking between equal-cost paths.
pub const CARDINALS: [Point; 4] = [
    Point::new(0, 1),
    Point::new(1, 0),
    Point::new(0, -1),
    Point::new(-1, 0),
];

impl Point {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Return a point shifted by (dx, dy).
    #[inline]
    pub const fn shift(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Componentwise addition, or `None` if either coordinate overflows.
    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match (self.x.checked_add(rhs.x), self.y.checked_add(rhs.y)) {
            (Some(x), Some(y)) => Some(Self { x, y }),
            _ => None,
        }
    }

    /// The four cardinal neighbours, in [`CARDINALS`] order.
    #[inline]
    pub fn neighbors_4(self) -> [Point; 4] {
        CARDINALS.map(|d| self + d)
    }
}

impl PartialOrd for Point {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Row-major ordering (by `y`, then `x`).
impl Ord for Point {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.y.cmp(&other.y).then(self.x.cmp(&other.x))
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

impl Add for Point {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn point_arithmetic() {
        let a = Point::new(2, 3);
        let b = Point::new(-1, 4);
        assert_eq!(a + b, Point::new(1, 7));
        assert_eq!(a - b, Point::new(3, -1));
        assert_eq!(-a, Point::new(-2, -3));
        assert_eq!(a.shift(1, -1), Point::new(3, 2));
        assert_eq!(Point::from((5, 6)), Point::new(5, 6));
    }

    #[test]
    fn checked_add_at_coordinate_limits() {
        let edge = Point::new(i32::MAX, 0);
        assert_eq!(edge.checked_add(Point::new(1, 0)), None);
        assert_eq!(Point::new(0, i32::MIN).checked_add(Point::new(0, -1)), None);
        assert_eq!(
            edge.checked_add(Point::new(-1, 1)),
            Some(Point::new(i32::MAX - 1, 1))
        );
    }

    #[test]
    fn cardinals_are_unit_and_distinct() {
        let set: HashSet<Point> = CARDINALS.iter().copied().collect();
        assert_eq!(set.len(), 4);
        for d in CARDINALS {
            assert_eq!(manhattan(Point::ZERO, d), 1);
            assert!(set.contains(&-d));
        }
    }

    #[test]
    fn neighbors_follow_cardinal_order() {
        let p = Point::new(1, 1);
        assert_eq!(
            p.neighbors_4(),
            [
                Point::new(1, 2),
                Point::new(2, 1),
                Point::new(1, 0),
                Point::new(0, 1),
            ]
        );
    }

    #[test]
    fn distinct_points_hash_apart() {
        let set: HashSet<Point> = [Point::new(1, 2), Point::new(2, 1), Point::new(1, 2)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn row_major_ordering() {
        let mut pts = vec![Point::new(1, 1), Point::new(0, 2), Point::new(2, 0)];
        pts.sort();
        assert_eq!(pts, vec![Point::new(2, 0), Point::new(1, 1), Point::new(0, 2)]);
    }

    #[test]
    fn manhattan_distance() {
        assert_eq!(manhattan(Point::new(0, 0), Point::new(3, -4)), 7);
        assert_eq!(manhattan(Point::new(2, 2), Point::new(2, 2)), 0);
    }
}

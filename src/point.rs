use std::collections::HashSet;
use std::fmt::{self, Display, Formatter};

#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Hash, Clone, Copy)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

impl Point {
    pub fn new(x: u32, y: u32) -> Point {
        Point { x, y }
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl From<(u32, u32)> for Point {
    fn from((x, y): (u32, u32)) -> Point {
        Point { x, y }
    }
}

pub type PointSet = HashSet<Point>;

/// Largest x and largest y over all points, or `None` for an empty set.
pub fn extent(points: &PointSet) -> Option<(u32, u32)> {
    points.iter().fold(None, |acc, p| match acc {
        None => Some((p.x, p.y)),
        Some((max_x, max_y)) => Some((max_x.max(p.x), max_y.max(p.y))),
    })
}

#[test]
fn test_extent() {
    assert_eq!(extent(&PointSet::new()), None);
    let points: PointSet = [(3, 0), (0, 7), (1, 1)]
        .into_iter()
        .map(Point::from)
        .collect();
    assert_eq!(extent(&points), Some((3, 7)));
}

#[test]
fn test_display() {
    assert_eq!(Point::new(6, 10).to_string(), "(6,10)");
}

use std::fmt::{self, Display, Formatter};

use tracing::{event, Level};

use crate::error::{OrigamiError, Result};
use crate::point::{Point, PointSet};

#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Axis {
    X,
    Y,
}

/// Fold the bottom half up (`Y`) or the right half left (`X`) along a line.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum Fold {
    X(u32),
    Y(u32),
}

pub type Folds = Vec<Fold>;

impl Fold {
    pub fn new(axis: Axis, line: u32) -> Fold {
        match axis {
            Axis::X => Fold::X(line),
            Axis::Y => Fold::Y(line),
        }
    }

    pub fn axis(&self) -> Axis {
        match self {
            Fold::X(_) => Axis::X,
            Fold::Y(_) => Axis::Y,
        }
    }

    pub fn line(&self) -> u32 {
        match self {
            Fold::X(v) | Fold::Y(v) => *v,
        }
    }
}

impl Display for Fold {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let indicator = match self.axis() {
            Axis::X => 'x',
            Axis::Y => 'y',
        };
        write!(f, "fold along {}={}", indicator, self.line())
    }
}

/// Mirror `coord` across `line`; coordinates on or before the line stay put.
fn reflect(coord: u32, line: u32) -> Option<u32> {
    if coord <= line {
        Some(coord)
    } else {
        line.checked_sub(coord - line)
    }
}

#[test]
fn test_reflect() {
    assert_eq!(reflect(3, 7), Some(3));
    assert_eq!(reflect(7, 7), Some(7));
    assert_eq!(reflect(10, 7), Some(4));
    assert_eq!(reflect(14, 7), Some(0));
    assert_eq!(reflect(15, 7), None);
}

impl Point {
    pub fn transform(&self, fold: &Fold) -> Result<Point> {
        let moved = match fold {
            Fold::X(v) => reflect(self.x, *v).map(|x| Point { x, y: self.y }),
            Fold::Y(v) => reflect(self.y, *v).map(|y| Point { x: self.x, y }),
        };
        moved.ok_or(OrigamiError::FoldOutOfRange {
            point: *self,
            fold: *fold,
        })
    }
}

#[test]
fn test_transform() {
    assert_eq!(
        Point::new(10, 6).transform(&Fold::Y(5)).ok(),
        Some(Point::new(10, 4))
    );
    assert_eq!(
        Point::new(6, 10).transform(&Fold::X(5)).ok(),
        Some(Point::new(4, 10))
    );
    assert_eq!(
        Point::new(5, 10).transform(&Fold::X(5)).ok(),
        Some(Point::new(5, 10))
    );
    assert!(matches!(
        Point::new(11, 0).transform(&Fold::X(5)),
        Err(OrigamiError::FoldOutOfRange { .. })
    ));
}

/// Apply a single fold, producing a fresh set. Points that land on
/// the same spot merge.
pub fn fold_points(dots: &PointSet, fold: &Fold) -> Result<PointSet> {
    let folded = dots
        .iter()
        .map(|dot| dot.transform(fold))
        .collect::<Result<PointSet>>()?;
    event!(
        Level::DEBUG,
        "{}: {} dots before, {} after",
        fold,
        dots.len(),
        folded.len(),
    );
    Ok(folded)
}

/// Apply every fold in order, each to the output of the previous one.
pub fn fold_all(dots: &PointSet, folds: &[Fold]) -> Result<PointSet> {
    folds
        .iter()
        .try_fold(dots.clone(), |current, fold| fold_points(&current, fold))
}

#[cfg(test)]
fn points(coords: &[(u32, u32)]) -> PointSet {
    coords.iter().copied().map(Point::from).collect()
}

#[test]
fn test_fold_points_merges() {
    let dots = points(&[(0, 0), (2, 0), (0, 2)]);
    let folded = fold_points(&dots, &Fold::Y(1)).unwrap();
    assert_eq!(folded, points(&[(0, 0), (2, 0)]));
    // The input is untouched.
    assert_eq!(dots.len(), 3);
}

#[test]
fn test_fold_beyond_all_points_is_noop() {
    let dots = points(&[(1, 2), (3, 4)]);
    assert_eq!(fold_points(&dots, &Fold::X(100)).unwrap(), dots);
}

#[test]
fn test_fold_all() {
    let dots = points(&[(0, 0), (4, 0)]);
    assert_eq!(fold_all(&dots, &[Fold::X(2)]).unwrap(), points(&[(0, 0)]));
    assert_eq!(fold_all(&dots, &[]).unwrap(), dots);
    assert_eq!(
        fold_all(&points(&[(4, 4)]), &[Fold::X(2), Fold::Y(3)]).unwrap(),
        points(&[(0, 2)])
    );
}

#[test]
fn test_fold_display() {
    assert_eq!(Fold::X(655).to_string(), "fold along x=655");
    assert_eq!(Fold::new(Axis::Y, 7), Fold::Y(7));
    assert_eq!(Fold::Y(7).axis(), Axis::Y);
}

use tracing::{span, Level};

use crate::error::{OrigamiError, Result};
use crate::fold::{fold_all, fold_points, Fold};
use crate::point::PointSet;

/// Number of dots visible after only the first fold.
pub fn part1(dots: &PointSet, folds: &[Fold]) -> Result<usize> {
    let span = span!(Level::INFO, "part1", dots = dots.len());
    let _enter = span.enter();
    let first_fold = folds.first().ok_or(OrigamiError::NoFolds)?;
    Ok(fold_points(dots, first_fold)?.len())
}

/// The dots left after every fold; these spell out the code.
pub fn part2(dots: &PointSet, folds: &[Fold]) -> Result<PointSet> {
    let span = span!(Level::INFO, "part2", dots = dots.len(), folds = folds.len());
    let _enter = span.enter();
    if folds.is_empty() {
        return Err(OrigamiError::NoFolds);
    }
    fold_all(dots, folds)
}

#[cfg(test)]
use crate::point::Point;

#[cfg(test)]
fn points(coords: &[(u32, u32)]) -> PointSet {
    coords.iter().copied().map(Point::from).collect()
}

#[test]
fn test_part1() {
    let dots = points(&[(0, 0), (2, 0), (0, 2)]);
    assert_eq!(part1(&dots, &[Fold::Y(1)]).unwrap(), 2);
}

#[test]
fn test_part2() {
    let dots = points(&[(0, 0), (4, 0)]);
    let folded = part2(&dots, &[Fold::X(2)]).unwrap();
    assert_eq!(folded, points(&[(0, 0)]));
    assert_eq!(crate::render::render(&folded), "#\n");
}

#[test]
fn test_no_folds() {
    let dots = points(&[(0, 0)]);
    assert!(matches!(part1(&dots, &[]), Err(OrigamiError::NoFolds)));
    assert!(matches!(part2(&dots, &[]), Err(OrigamiError::NoFolds)));
}

#[test]
fn test_sample() {
    let (dots, folds) = crate::parser::parse_input(crate::parser::SAMPLE).unwrap();
    assert_eq!(part1(&dots, &folds).unwrap(), 17);
    let folded = part2(&dots, &folds).unwrap();
    assert_eq!(folded.len(), 16);
    assert_eq!(
        crate::render::render(&folded),
        "#####\n#...#\n#...#\n#...#\n#####\n"
    );
}

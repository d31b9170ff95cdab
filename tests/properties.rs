use std::collections::HashSet;

use proptest::prelude::*;

use origami::parser::parse_input;
use origami::{fold_points, Fold, Point, PointSet};

fn to_input(coords: &[(u32, u32)], folds: &[Fold]) -> String {
    let mut text = String::new();
    for (x, y) in coords {
        text.push_str(&format!("{},{}\n", x, y));
    }
    text.push('\n');
    for fold in folds {
        text.push_str(&format!("{}\n", fold));
    }
    text
}

proptest! {
    #[test]
    fn parsing_keeps_one_point_per_distinct_pair(
        coords in prop::collection::vec((0u32..50, 0u32..50), 1..40)
    ) {
        let (dots, folds) = parse_input(&to_input(&coords, &[Fold::X(3)])).unwrap();
        let distinct: HashSet<(u32, u32)> = coords.iter().copied().collect();
        prop_assert_eq!(dots.len(), distinct.len());
        prop_assert_eq!(folds, vec![Fold::X(3)]);
    }

    #[test]
    fn near_side_points_are_unchanged(x in 0u32..1000, y in 0u32..1000, d in 0u32..1000) {
        let v = x.max(y) + d;
        let p = Point::new(x, y);
        prop_assert_eq!(p.transform(&Fold::X(v)).unwrap(), p);
        prop_assert_eq!(p.transform(&Fold::Y(v)).unwrap(), p);
    }

    #[test]
    fn far_side_points_are_reflected(k in 0u32..1000, d in 0u32..1000, y in 0u32..1000) {
        let v = k + d;
        prop_assert_eq!(
            Point::new(v + k, y).transform(&Fold::X(v)).unwrap(),
            Point::new(v - k, y)
        );
        prop_assert_eq!(
            Point::new(y, v + k).transform(&Fold::Y(v)).unwrap(),
            Point::new(y, v - k)
        );
    }

    #[test]
    fn mirrored_points_merge(k in 0u32..1000, d in 0u32..1000, y in 0u32..1000) {
        let v = k + d;
        let dots: PointSet = [Point::new(v + k, y), Point::new(v - k, y)].into_iter().collect();
        let folded = fold_points(&dots, &Fold::X(v)).unwrap();
        prop_assert_eq!(folded.len(), 1);
        prop_assert!(folded.contains(&Point::new(v - k, y)));
    }
}

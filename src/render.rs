use ndarray::prelude::*;

use crate::point::{extent, Point, PointSet};

fn make_grid(points: &PointSet, max_x: u32, max_y: u32) -> Array2<char> {
    let mut grid: Array2<char> =
        Array2::from_elem((max_y as usize + 1, max_x as usize + 1), '.');
    for Point { x, y } in points.iter() {
        grid[(*y as usize, *x as usize)] = '#';
    }
    grid
}

/// Draw the dots as rows of `#` and `.`, covering the box from the
/// origin to the furthest dot. An empty set draws nothing.
pub fn render(points: &PointSet) -> String {
    let (max_x, max_y) = match extent(points) {
        Some(extent) => extent,
        None => return String::new(),
    };
    let grid = make_grid(points, max_x, max_y);
    let mut result = String::with_capacity(grid.len() + grid.nrows());
    for row in grid.rows() {
        result.extend(row.iter());
        result.push('\n');
    }
    result
}

#[cfg(test)]
fn points(coords: &[(u32, u32)]) -> PointSet {
    coords.iter().copied().map(Point::from).collect()
}

#[test]
fn test_render_single_dot() {
    assert_eq!(render(&points(&[(0, 0)])), "#\n");
}

#[test]
fn test_render_bounding_box() {
    assert_eq!(render(&points(&[(2, 0), (0, 1)])), "..#\n#..\n");
}

#[test]
fn test_render_empty() {
    assert_eq!(render(&PointSet::new()), "");
}

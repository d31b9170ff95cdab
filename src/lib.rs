//! Transparent origami: fold a sheet of dots along axis-aligned lines.

pub mod error;
pub mod fold;
pub mod input;
pub mod parser;
pub mod point;
pub mod render;
pub mod solve;

pub use error::{OrigamiError, Result};
pub use fold::{fold_all, fold_points, Axis, Fold, Folds};
pub use point::{Point, PointSet};

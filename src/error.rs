use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::fold::Fold;
use crate::point::Point;

#[derive(Debug, Error)]
pub enum OrigamiError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("line {line_number}: {reason}: '{line}'")]
    Format {
        line_number: usize,
        line: String,
        reason: String,
    },

    #[error("no fold instructions")]
    NoFolds,

    /// The reflection of `point` would land left of (or above) the origin.
    #[error("{fold} would move {point} to a negative coordinate")]
    FoldOutOfRange { point: Point, fold: Fold },
}

pub type Result<T> = std::result::Result<T, OrigamiError>;

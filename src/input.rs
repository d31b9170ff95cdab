use std::fs;
use std::path::{Path, PathBuf};

use tracing::{event, Level};

use crate::error::{OrigamiError, Result};

pub const INPUT_DIR: &str = "input";
pub const INPUT_FILE: &str = "day13.txt";

/// Where the puzzle input lives unless the caller says otherwise.
pub fn default_input_path() -> PathBuf {
    Path::new(INPUT_DIR).join(INPUT_FILE)
}

pub fn read_input(path: &Path) -> Result<String> {
    event!(Level::DEBUG, "reading input from {}", path.display());
    fs::read_to_string(path).map_err(|source| OrigamiError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[test]
fn test_default_input_path() {
    assert_eq!(default_input_path(), Path::new("input/day13.txt"));
}

#[test]
fn test_read_missing_input() {
    let path = Path::new("no/such/dir/day13.txt");
    match read_input(path) {
        Err(OrigamiError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected an I/O error, got {:?}", other),
    }
}

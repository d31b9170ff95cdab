//! Reading the dot coordinates and fold instructions.
//!
//! The input is two sections separated by the first blank line: `x,y`
//! dots, then `fold along x=N` / `fold along y=N` instructions.

use std::str::FromStr;

use nom::{
    bytes::complete::tag,
    character::complete::{anychar, char, digit1},
    combinator::map_res,
    sequence::{preceded, separated_pair},
    IResult,
};
use tracing::{event, Level};

use crate::error::{OrigamiError, Result};
use crate::fold::{Axis, Fold, Folds};
use crate::point::{Point, PointSet};

fn u32_parser(input: &str) -> IResult<&str, u32> {
    map_res(digit1, FromStr::from_str)(input)
}

fn parse_dot(input: &str) -> IResult<&str, (u32, u32)> {
    separated_pair(u32_parser, char(','), u32_parser)(input)
}

fn parse_fold(input: &str) -> IResult<&str, (char, u32)> {
    preceded(
        tag("fold along "),
        separated_pair(anychar, char('='), u32_parser),
    )(input)
}

fn format_error(line_number: usize, line: &str, reason: String) -> OrigamiError {
    OrigamiError::Format {
        line_number,
        line: line.to_string(),
        reason,
    }
}

/// Run `parser` over the whole of `line`, rejecting trailing junk.
fn parse_line<'a, T>(
    line_number: usize,
    line: &'a str,
    parser: fn(&'a str) -> IResult<&'a str, T>,
) -> Result<T> {
    match parser(line) {
        Ok(("", value)) => Ok(value),
        Ok((unparsed, _)) => Err(format_error(
            line_number,
            line,
            format!("unexpected trailing junk '{}'", unparsed),
        )),
        Err(e) => Err(format_error(line_number, line, e.to_string())),
    }
}

fn parse_dots<'a, I>(lines: I) -> Result<PointSet>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    lines
        .map(|(line_number, line)| {
            parse_line(line_number, line, parse_dot).map(Point::from)
        })
        .collect()
}

fn parse_folds<'a, I>(lines: I) -> Result<Folds>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut folds = Folds::new();
    for (line_number, line) in lines.filter(|(_, line)| !line.is_empty()) {
        let (axis, value) = parse_line(line_number, line, parse_fold)?;
        match axis {
            'x' => folds.push(Fold::new(Axis::X, value)),
            'y' => folds.push(Fold::new(Axis::Y, value)),
            other => {
                event!(
                    Level::WARN,
                    "line {}: ignoring fold along unknown axis '{}'",
                    line_number,
                    other,
                );
            }
        }
    }
    Ok(folds)
}

/// Split `input` at its first blank line and parse both halves.
///
/// Input without a blank line is treated as dots only.
pub fn parse_input(input: &str) -> Result<(PointSet, Folds)> {
    let lines: Vec<(usize, &str)> = input
        .lines()
        .map(str::trim)
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .collect();
    let (dot_lines, fold_lines) = match lines.iter().position(|(_, line)| line.is_empty()) {
        Some(separator) => (&lines[..separator], &lines[separator + 1..]),
        None => (&lines[..], &lines[lines.len()..]),
    };
    let dots = parse_dots(dot_lines.iter().copied())?;
    let folds = parse_folds(fold_lines.iter().copied())?;
    event!(
        Level::DEBUG,
        "parsed {} distinct dots from {} lines and {} folds",
        dots.len(),
        dot_lines.len(),
        folds.len(),
    );
    Ok((dots, folds))
}

#[cfg(test)]
pub(crate) const SAMPLE: &str = "6,10
0,14
9,10
0,3
10,4
4,11
6,0
6,12
4,1
0,13
10,12
3,4
3,0
8,4
1,10
2,14
8,10
9,0

fold along y=7
fold along x=5
";

#[test]
fn test_parse_sample() {
    let (dots, folds) = parse_input(SAMPLE).unwrap();
    assert_eq!(dots.len(), 18);
    assert!(dots.contains(&Point::new(6, 10)));
    assert!(dots.contains(&Point::new(9, 0)));
    assert_eq!(folds, vec![Fold::Y(7), Fold::X(5)]);
}

#[test]
fn test_parse_dedups() {
    let (dots, folds) = parse_input("1,2\n1,2\n3,4\n\nfold along x=2\n").unwrap();
    assert_eq!(dots.len(), 2);
    assert_eq!(folds, vec![Fold::X(2)]);
}

#[test]
fn test_parse_crlf_and_trailing_blank_lines() {
    let (dots, folds) = parse_input("1,2\r\n\r\nfold along y=1\r\n\r\n\r\n").unwrap();
    assert_eq!(dots.len(), 1);
    assert_eq!(folds, vec![Fold::Y(1)]);
}

#[test]
fn test_parse_ignores_unknown_axis() {
    let (_, folds) = parse_input("0,0\n\nfold along z=3\nfold along y=1\n").unwrap();
    assert_eq!(folds, vec![Fold::Y(1)]);
}

#[test]
fn test_parse_without_separator() {
    let (dots, folds) = parse_input("0,0\n4,0").unwrap();
    assert_eq!(dots.len(), 2);
    assert!(folds.is_empty());
}

#[test]
fn test_parse_bad_dot() {
    match parse_input("0,0\n3;4\n\nfold along x=1\n") {
        Err(OrigamiError::Format { line_number, line, .. }) => {
            assert_eq!(line_number, 2);
            assert_eq!(line, "3;4");
        }
        other => panic!("expected a format error, got {:?}", other),
    }
    assert!(matches!(
        parse_input("0,-4\n"),
        Err(OrigamiError::Format { line_number: 1, .. })
    ));
    assert!(matches!(
        parse_input("0,4,5\n"),
        Err(OrigamiError::Format { line_number: 1, .. })
    ));
}

#[test]
fn test_parse_bad_fold() {
    assert!(matches!(
        parse_input("0,0\n\nfold along x=\n"),
        Err(OrigamiError::Format { line_number: 3, .. })
    ));
    assert!(matches!(
        parse_input("0,0\n\nfold across y=2\n"),
        Err(OrigamiError::Format { line_number: 3, .. })
    ));
}

#![cfg_attr(feature = "strict", deny(warnings))]
#![cfg_attr(feature = "strict", deny(clippy::all))]
#![cfg_attr(feature = "strict", deny(missing_docs))]

//! This crate contains helper functions that are used exclusively in defining binaries, that is
//! main functions.
use common::{GridDimensions, GridError, GridResult, Obstacle};
use std::fs;
use std::io::Read;
use std::path::Path;

/// A grid together with its obstacles, as read from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// The grid to walk through.
    pub grid: GridDimensions,
    /// The obstacles, in input order.
    pub obstacles: Vec<Obstacle>,
}

fn next_number<'t>(
    tokens: &mut impl Iterator<Item = &'t str>,
    what: &str,
) -> GridResult<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| GridError::InvalidInput(format!("input ended before {}", what)))?;
    token.parse().map_err(|err| {
        GridError::InvalidInput(format!("{} must be a number, got {:?}: {}", what, token, err))
    })
}

/// Parse a problem from whitespace separated integers:
/// `rows columns count` followed by `count` obstacles given as `row_start col_start row_end col_end`.
/// Obstacles are not validated against the grid here.
/// # Returns
/// - An [GridError::InvalidInput] if a number is missing or malformed or the grid is empty.
/// - An `Err` wrapping the io error if reading fails.
/// # Example
/// ```
/// # use executables::read_problem;
/// let problem = read_problem("4 5 1\n2 2 3 4".as_bytes()).unwrap();
/// assert_eq!(problem.grid.rows(), 4);
/// assert_eq!(problem.obstacles.len(), 1);
/// ```
pub fn read_problem<R: Read>(mut reader: R) -> GridResult<Problem> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    let mut tokens = input.split_ascii_whitespace();

    let rows = next_number(&mut tokens, "the number of rows")?;
    let columns = next_number(&mut tokens, "the number of columns")?;
    let count = next_number(&mut tokens, "the number of obstacles")?;
    let grid = GridDimensions::new(rows, columns)?;

    let obstacles = (0..count)
        .map(|idx| -> GridResult<Obstacle> {
            let what = format!("a corner of obstacle {}", idx + 1);
            Ok(Obstacle::new(
                next_number(&mut tokens, &what)?,
                next_number(&mut tokens, &what)?,
                next_number(&mut tokens, &what)?,
                next_number(&mut tokens, &what)?,
            ))
        })
        .collect::<GridResult<Vec<_>>>()?;

    if tokens.next().is_some() {
        log::warn!("Ignoring input after the last of {} obstacles", count);
    }

    Ok(Problem { grid, obstacles })
}

/// Read a problem from the file at `path`.
pub fn read_problem_from_path<P>(path: P) -> GridResult<Problem>
where
    P: AsRef<Path>,
{
    let file_handle = fs::File::open(path)?;
    read_problem(file_handle)
}

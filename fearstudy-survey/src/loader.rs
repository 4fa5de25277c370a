//! Dataset loading
//!
//! The first line is a header and is discarded. Every following line is
//! parsed into a [`Subject`] whose index is its 1-based position after the
//! header. Loading is all-or-nothing: the first malformed row fails the
//! whole load.

use crate::error::{Result, SurveyError};
use crate::subject::Subject;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use tracing::{info, trace};

/// Open and load a dataset file
///
/// The file handle is dropped before parsing begins, so it is released on
/// every exit path.
pub fn load_dataset(path: &Path) -> Result<Vec<Subject>> {
    let file = File::open(path).map_err(|source| SurveyError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let lines = read_lines(BufReader::new(file)).map_err(|source| SurveyError::SourceUnreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let subjects = parse_lines(&lines)?;
    info!("Loaded {} subjects from {}", subjects.len(), path.display());
    Ok(subjects)
}

/// Load subjects from any line source
pub fn load_subjects<R: BufRead>(reader: R) -> Result<Vec<Subject>> {
    let lines = read_lines(reader)?;
    parse_lines(&lines)
}

fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut lines = reader.lines().collect::<std::io::Result<Vec<String>>>()?;

    // Blank lines at the very end of the source carry no records
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    Ok(lines)
}

fn parse_lines(lines: &[String]) -> Result<Vec<Subject>> {
    lines
        .iter()
        .enumerate()
        .skip(1)
        .map(|(row, line)| {
            let subject = Subject::parse(row, line)?;
            trace!("{}", subject);
            Ok(subject)
        })
        .collect()
}

//! Reads comma-delimited course data into a [`CourseIndex`].
//!
//! Each non-blank line is `number,name[,prerequisite...]`. There is no header row and no
//! quoting; fields are trimmed of surrounding whitespace.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::course::CourseRecord;
use crate::error::{LoadError, LoadResult};
use crate::index::CourseIndex;

/// Parses one line of course data. `line_no` is 1-based and only used for error reporting.
///
/// Returns `Ok(None)` for a blank line.
///
/// # Errors
///
/// [`LoadError::MissingField`] if the course number or name is absent or empty.
///
/// # Examples
///
/// ```
/// use course_planner::loader::parse_line;
///
/// let course = parse_line("CS300, Algorithms, CS200, MATH201", 1).unwrap().unwrap();
///
/// assert_eq!(course.number(), "CS300");
/// assert_eq!(course.name(), "Algorithms");
/// assert_eq!(course.prerequisites(), ["CS200", "MATH201"]);
///
/// assert!(parse_line("   ", 2).unwrap().is_none());
/// assert!(parse_line("CS300", 3).is_err());
/// ```
pub fn parse_line(line: &str, line_no: usize) -> LoadResult<Option<CourseRecord>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let mut fields = line.split(',').map(str::trim);
    let number = match fields.next() {
        Some(n) if !n.is_empty() => n,
        _ => return Err(missing(line_no, "course number")),
    };
    let name = match fields.next() {
        Some(n) if !n.is_empty() => n,
        _ => return Err(missing(line_no, "course name")),
    };

    Ok(Some(CourseRecord::new(number, name, fields)))
}

fn missing(line: usize, field: &'static str) -> LoadError {
    LoadError::MissingField { line, field }
}

/// Parses every line from `reader` and inserts the courses into `index`, returning how many
/// were inserted. Stops at the first malformed line; courses before it stay inserted.
///
/// # Errors
///
/// [`LoadError::Read`] if reading fails, otherwise whatever [`parse_line`] or
/// [`CourseIndex::insert`] reports for the offending line.
pub fn load_courses<R: BufRead>(reader: R, index: &mut CourseIndex) -> LoadResult<usize> {
    let mut inserted = 0;
    for (i, line) in reader.lines().enumerate() {
        let line_no = i + 1;
        let Some(course) = parse_line(&line?, line_no)? else {
            continue;
        };

        index
            .insert(course)
            .map_err(|source| LoadError::Index {
                line: line_no,
                source,
            })?;
        inserted += 1;
    }

    for number in unknown_prerequisites(index) {
        warn!(prerequisite = number, "prerequisite does not name a loaded course");
    }
    info!(inserted, total = index.len(), "courses loaded");
    Ok(inserted)
}

/// Opens `path` and loads it with [`load_courses`].
///
/// # Errors
///
/// [`LoadError::Open`] if the file can't be opened, otherwise as [`load_courses`].
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn load_file<P: AsRef<Path>>(path: P, index: &mut CourseIndex) -> LoadResult<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("opened course file");

    load_courses(BufReader::new(file), index)
}

/// Prerequisite numbers referenced by some course in `index` that no course in `index` carries,
/// sorted and without repeats. Empty entries are ignored.
pub fn unknown_prerequisites(index: &CourseIndex) -> Vec<&str> {
    let unknown: BTreeSet<&str> = index
        .iter()
        .flat_map(|c| c.prerequisites())
        .map(String::as_str)
        .filter(|p| !p.is_empty() && index.find(p).is_none())
        .collect();

    unknown.into_iter().collect()
}

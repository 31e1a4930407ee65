// src/input/parser.rs

use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::errors::{Result, StepdagError};

/// One dependency constraint: `before` must finish before `after` can begin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    pub before: String,
    pub after: String,
}

static CONSTRAINT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^Step (\w+) must be finished before step (\w+) can begin\.$")
        .expect("constraint pattern is a valid regex")
});

/// Parse a single constraint line.
///
/// `line_no` is the 1-based line number, used only for the error message.
pub fn parse_line(line: &str, line_no: usize) -> Result<Constraint> {
    let caps = CONSTRAINT_RE
        .captures(line.trim())
        .ok_or_else(|| StepdagError::ParseError {
            line: line_no,
            message: format!(
                "expected `Step <X> must be finished before step <Y> can begin.`, got {line:?}"
            ),
        })?;

    Ok(Constraint {
        before: caps[1].to_string(),
        after: caps[2].to_string(),
    })
}

/// Parse constraint text, one constraint per line.
///
/// Blank lines are skipped; any other non-matching line is a fatal parse
/// error. The scheduling core never sees a malformed pair.
pub fn parse_constraints(text: &str) -> Result<Vec<Constraint>> {
    let mut constraints = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        constraints.push(parse_line(line, idx + 1)?);
    }

    Ok(constraints)
}

/// Read a constraint file from disk and parse it.
pub fn read_constraints(path: impl AsRef<Path>) -> Result<Vec<Constraint>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;

    let constraints = parse_constraints(&contents)?;
    debug!(
        path = %path.display(),
        count = constraints.len(),
        "parsed constraint file"
    );

    Ok(constraints)
}

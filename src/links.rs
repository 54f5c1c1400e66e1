// src/links.rs
//! Reading tab-separated link lists.
//!
//! One link per line: `source<TAB>target`. The source is taken verbatim; the
//! target loses its line terminator. Extra fields are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{Result, WikinetError};

/// A `(source, target)` link.
pub type Link = (String, String);

/// Parses links from in-memory text.
///
/// # Errors
/// Returns [`WikinetError::MalformedLink`] for a non-blank line without a tab.
pub fn parse_links(text: &str) -> Result<Vec<Link>> {
    parse_with_origin(text, Path::new("<input>"))
}

/// Reads links from a file.
///
/// # Errors
/// Returns error if the file cannot be read or a line is malformed.
pub fn read_links(path: &Path) -> Result<Vec<Link>> {
    let text = fs::read_to_string(path).map_err(|source| WikinetError::Io {
        source,
        path: path.to_path_buf(),
    })?;
    let links = parse_with_origin(&text, path)?;
    debug!(path = %path.display(), links = links.len(), "read link list");
    Ok(links)
}

fn parse_with_origin(text: &str, origin: &Path) -> Result<Vec<Link>> {
    let mut links = Vec::new();

    for (idx, line) in text.split_terminator('\n').enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            warn!(line = line_no, "skipping blank line in link list");
            continue;
        }
        links.push(parse_line(line).ok_or_else(|| malformed(origin, line_no))?);
    }

    Ok(links)
}

fn parse_line(line: &str) -> Option<Link> {
    let mut fields = line.split('\t');
    let source = fields.next()?;
    let target = fields.next()?;
    Some((source.to_string(), target.to_string()))
}

fn malformed(origin: &Path, line: usize) -> WikinetError {
    WikinetError::MalformedLink {
        path: PathBuf::from(origin),
        line,
    }
}

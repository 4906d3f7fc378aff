//! Nested loading of the products file.
//!
//! The innermost frame opens the file, the middle frame passes any failure
//! straight up with `?`, and `check_products` is the first frame that handles
//! it. Every frame writes a call trace to the supplied stream, one tab of
//! indentation per level.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::error::Result;

pub const FILE_NOT_FOUND: &str = "File not found";

fn trace(log: &mut dyn Write, depth: usize, message: &str) {
    // Trace output is best effort; a closed stderr must not change control flow.
    let _ = writeln!(log, "{}{}", "\t".repeat(depth), message);
}

/// Opens `path` and returns its first line, `None` for an empty file.
pub fn open_products(path: &Path, log: &mut dyn Write) -> Result<Option<String>> {
    trace(log, 3, "In open_products: Entering.");

    let mut reader = BufReader::new(File::open(path)?);
    let mut line = String::new();
    let first = match reader.read_line(&mut line)? {
        0 => None,
        _ => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    };

    trace(log, 3, "In open_products: Exiting.");
    Ok(first)
}

pub fn load_products(path: &Path, log: &mut dyn Write) -> Result<Option<String>> {
    trace(log, 2, "In load_products: calling open_products.");
    let first = open_products(path, log)?;
    trace(log, 2, "In load_products: returned from open_products.");
    Ok(first)
}

/// Returns `false` when loading failed. The failure is reported, never
/// propagated.
pub fn check_products(path: &Path, log: &mut dyn Write) -> bool {
    trace(log, 1, "In check_products: calling load_products.");
    let loaded = match load_products(path, log) {
        Ok(first) => {
            info!(path = %path.display(), first_line = ?first, "Products file loaded");
            true
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Products file could not be loaded");
            trace(log, 0, FILE_NOT_FOUND);
            false
        }
    };
    trace(log, 1, "In check_products: returned from load_products.");
    loaded
}

pub fn run(path: &Path, log: &mut dyn Write) -> bool {
    trace(log, 0, "In main: calling check_products.");
    let loaded = check_products(path, log);
    trace(log, 0, "In main: returned from check_products.");
    loaded
}

#[cfg(test)]
mod tests {
    use super::*;

    fn output(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn open_products_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = Vec::new();

        let result = open_products(&dir.path().join("products.ran"), &mut log);

        assert!(result.is_err());
        let out = output(log);
        assert!(out.contains("Entering"));
        assert!(!out.contains("Exiting"));
    }

    #[test]
    fn open_products_empty_file_is_none() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let mut log = Vec::new();

        assert_eq!(open_products(file.path(), &mut log).unwrap(), None);
    }

    #[test]
    fn load_products_propagates_without_return_trace() {
        let dir = tempfile::tempdir().unwrap();
        let mut log = Vec::new();

        assert!(load_products(&dir.path().join("products.ran"), &mut log).is_err());
        assert!(!output(log).contains("returned from open_products"));
    }

    #[test]
    fn trace_is_indented_by_depth() {
        let mut log = Vec::new();
        trace(&mut log, 2, "hello");
        assert_eq!(output(log), "\t\thello\n");
    }
}

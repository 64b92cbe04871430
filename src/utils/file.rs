//! File reading utilities

use crate::error::{BginfoError, Result};
use std::fs;
use std::path::Path;

/// Safely read a file to string with error handling
pub fn read_file_safe<P: AsRef<Path>>(path: P) -> Result<String> {
    fs::read_to_string(path).map_err(BginfoError::from)
}

/// Find the first line starting with `prefix`, reading line by line
/// so large procfs files stop early
pub fn find_line<P: AsRef<Path>>(path: P, prefix: &str) -> Result<Option<String>> {
    use std::fs::File;
    use std::io::{BufRead, BufReader};

    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut line = String::with_capacity(64);

    loop {
        line.clear();
        let bytes_read = reader.read_line(&mut line)?;
        if bytes_read == 0 {
            return Ok(None);
        }
        if line.starts_with(prefix) {
            return Ok(Some(line.trim_end().to_string()));
        }
    }
}

/// True when both paths name the same file on disk
pub fn same_file<A: AsRef<Path>, B: AsRef<Path>>(a: A, b: B) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

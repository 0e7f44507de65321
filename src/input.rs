use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{Result, SummaryError};

/// Path that stands for standard input.
pub const STDIN_PATH: &str = "-";

/// Read the whole source text from `path`, or from stdin when it is `-`.
pub fn read_source(path: &Path) -> Result<String> {
    if path == Path::new(STDIN_PATH) {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .map_err(SummaryError::Stdin)?;
        return Ok(text);
    }

    fs::read_to_string(path).map_err(|e| SummaryError::read(path, e))
}

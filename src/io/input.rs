//! Reading the query and reference from plain or gzipped text

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::errors::AlignError;

/// Open the given path for reading, or standard input if no path is given
///
/// Files ending in `.gz` are decompressed on the fly.
pub fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, AlignError> {
    let Some(path) = path else {
        return Ok(Box::new(io::stdin().lock()));
    };

    let is_gzipped = path
        .file_name()
        .map(|v| v.to_string_lossy().ends_with(".gz"))
        .unwrap_or(false);

    let reader: Box<dyn BufRead> = if is_gzipped {
        Box::new(
            File::open(path)
                .map(MultiGzDecoder::new)
                .map(BufReader::new)?,
        )
    } else {
        Box::new(File::open(path).map(BufReader::new)?)
    };

    Ok(reader)
}

fn read_trimmed_line(reader: &mut impl BufRead, which: &'static str) -> Result<Vec<u8>, AlignError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(AlignError::MissingSequence(which));
    }

    Ok(line.trim().as_bytes().to_vec())
}

/// Read the query from the first line and the reference from the second line
///
/// Surrounding whitespace is stripped from both. An empty line is an empty sequence, but a
/// missing line is an error.
pub fn read_sequence_pair(mut reader: impl BufRead) -> Result<(Vec<u8>, Vec<u8>), AlignError> {
    let query = read_trimmed_line(&mut reader, "query")?;
    let reference = read_trimmed_line(&mut reader, "reference")?;

    Ok((query, reference))
}

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::AlignError;

pub const DEFAULT_MAX_JUMP: usize = 1000;
pub const DEFAULT_MIN_SEGMENT_LENGTH: usize = 15;

/// Tunable constants of the state graph and the segment reconstruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlignmentConfig {
    /// Maximum distance between the query position and the reference anchor of a jump
    pub max_jump: usize,

    /// Segments must satisfy `query_end - query_start + 1 > min_segment_length` to be reported
    pub min_segment_length: usize,
}

impl AlignmentConfig {
    pub fn new(max_jump: usize, min_segment_length: usize) -> Self {
        Self { max_jump, min_segment_length }
    }

    /// Load a configuration from a JSON file. Missing fields take their default value.
    pub fn from_json_file(path: &Path) -> Result<Self, AlignError> {
        let reader = File::open(path).map(BufReader::new)?;

        serde_json::from_reader(reader)
            .map_err(|e| AlignError::IOError(e.into()))
    }
}

impl Default for AlignmentConfig {
    fn default() -> Self {
        Self {
            max_jump: DEFAULT_MAX_JUMP,
            min_segment_length: DEFAULT_MIN_SEGMENT_LENGTH,
        }
    }
}

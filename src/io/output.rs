use std::io::Write;

use crate::aligner::{format_segments, AlignmentResult};
use crate::errors::AlignError;

/// Write the segments as a single line of `(qStart,qEnd,rStart,rEnd)` tuples
pub fn write_text(mut writer: impl Write, result: &AlignmentResult) -> Result<(), AlignError> {
    writeln!(writer, "{}", format_segments(&result.segments))?;

    Ok(())
}

/// Write the score and segments as a single JSON object
pub fn write_json(mut writer: impl Write, result: &AlignmentResult) -> Result<(), AlignError> {
    serde_json::to_writer(&mut writer, result)
        .map_err(|e| AlignError::IOError(e.into()))?;
    writeln!(writer)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{write_json, write_text};
    use crate::aligner::{AlignmentResult, Segment};

    fn example_result() -> AlignmentResult {
        AlignmentResult {
            score: Some(3),
            segments: vec![Segment::new(0, 20, 0, 20), Segment::new(20, 40, 30, 50)],
            num_queued: 10,
            num_visited: 5,
        }
    }

    #[test]
    fn test_write_text() {
        let mut out = Vec::new();
        write_text(&mut out, &example_result()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[(0,20,0,20), (20,40,30,50)]\n");

        let mut out = Vec::new();
        write_text(&mut out, &AlignmentResult::default()).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }

    #[test]
    fn test_write_json() {
        let mut out = Vec::new();
        write_json(&mut out, &example_result()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["score"], 3);
        assert_eq!(value["segments"][1]["ref_start"], 30);
        assert!(value.get("num_queued").is_none());
    }
}

use std::fmt::{Display, Formatter};

use itertools::Itertools;
use serde::Serialize;

/// A matched region between the query and the reference
///
/// End coordinates are the cursor positions after the last consumed symbol. Reference
/// coordinates are signed since reverse-strand segments that end at reference position 0 start
/// at -1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Segment {
    pub query_start: usize,
    pub query_end: usize,
    pub ref_start: isize,
    pub ref_end: isize,
}

impl Segment {
    pub fn new(query_start: usize, query_end: usize, ref_start: isize, ref_end: isize) -> Self {
        Self { query_start, query_end, ref_start, ref_end }
    }
}

impl Display for Segment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{},{},{})", self.query_start, self.query_end, self.ref_start, self.ref_end)
    }
}

/// Format segments as a bracketed list of tuples, e.g., `[(0,20,10,30), (20,40,45,65)]`
pub fn format_segments(segments: &[Segment]) -> String {
    format!("[{}]", segments.iter().join(", "))
}

#[cfg(test)]
mod tests {
    use super::{format_segments, Segment};

    #[test]
    fn test_format_segments() {
        assert_eq!(format_segments(&[]), "[]");
        assert_eq!(format_segments(&[Segment::new(0, 20, 9, 10)]), "[(0,20,9,10)]");
        assert_eq!(
            format_segments(&[Segment::new(0, 20, 0, 20), Segment::new(20, 40, -1, 0)]),
            "[(0,20,0,20), (20,40,-1,0)]"
        );
    }

    #[test]
    fn test_segment_json() {
        let json = serde_json::to_string(&Segment::new(1, 2, 3, 4)).unwrap();
        assert_eq!(json, r#"{"query_start":1,"query_end":2,"ref_start":3,"ref_end":4}"#);
    }
}

use tracing::trace;

use crate::aligner::alignment::Segment;
use crate::aligner::search::CostTable;
use crate::aligner::state::{AlignmentState, StateKind};
use crate::errors::AlignError;

/// Walk the parent pointers from `goal` back to the start state and collect the matched segments
///
/// While walking backwards, a `Forward` or `Reverse` state entered from a `Control` state opens a
/// segment, and a `Control` state entered from a `Forward` or `Reverse` state marks the end
/// coordinates of the previous segment. Only segments with
/// `query_end - query_start + 1 > min_segment_length` are kept. The returned segments are
/// ordered by query position.
pub fn reconstruct_segments(
    costs: &CostTable,
    goal: &AlignmentState,
    min_segment_length: usize,
) -> Result<Vec<Segment>, AlignError> {
    let start = AlignmentState::start();

    let mut segments = Vec::new();
    let mut q_end = goal.qry_idx;
    let mut r_end = goal.ref_idx;

    let mut node = *goal;
    while node != start {
        let Some(record) = costs.get(&node) else {
            return Err(AlignError::BrokenBacktrace(node));
        };

        let parent = record.parent;
        if parent == node {
            return Err(AlignError::BrokenBacktrace(node));
        }

        match node.kind {
            StateKind::Forward | StateKind::Reverse if node.kind != parent.kind => {
                let q_start = node.qry_idx;

                // Reverse segments are anchored one position before the segment end
                let r_start = if node.kind == StateKind::Forward {
                    node.ref_idx as isize
                } else {
                    r_end as isize - 1
                };

                if q_end - q_start + 1 > min_segment_length {
                    let segment = Segment::new(q_start, q_end, r_start, r_end as isize);
                    trace!(?segment, kind = ?node.kind, "segment");
                    segments.push(segment);
                }
            },
            StateKind::Control if node.kind != parent.kind => {
                r_end = parent.ref_idx;
                q_end = parent.qry_idx;
            },
            _ => ()
        }

        node = parent;
    }

    segments.reverse();
    Ok(segments)
}

#[cfg(test)]
mod tests {
    use super::reconstruct_segments;
    use crate::aligner::alignment::Segment;
    use crate::aligner::search::CostTable;
    use crate::aligner::state::{AlignmentState, PathRecord};
    use crate::errors::AlignError;

    /// Build a cost table from a chain of states, the first being the start state.
    fn chain(states: &[AlignmentState]) -> CostTable {
        let mut costs = CostTable::default();
        costs.insert(states[0], PathRecord { cost: 0, parent: states[0] });

        for (i, pair) in states.windows(2).enumerate() {
            costs.insert(pair[1], PathRecord { cost: i + 1, parent: pair[0] });
        }

        costs
    }

    #[test]
    fn test_start_is_goal() {
        let costs = chain(&[AlignmentState::start()]);
        let segments = reconstruct_segments(&costs, &AlignmentState::start(), 15).unwrap();
        assert!(segments.is_empty());
    }

    #[test]
    fn test_forward_then_reverse() {
        let mut states = vec![AlignmentState::start()];
        states.extend((0..=4).map(|i| AlignmentState::forward(10 + i, i)));
        states.push(AlignmentState::control(4));
        states.extend((0..=3).map(|i| AlignmentState::reverse(20 - i, 4 + i)));

        let costs = chain(&states);
        let goal = *states.last().unwrap();
        let segments = reconstruct_segments(&costs, &goal, 2).unwrap();

        assert_eq!(segments, vec![
            Segment::new(0, 4, 10, 14),
            Segment::new(4, 7, 16, 17),
        ]);
    }

    #[test]
    fn test_short_segments_are_dropped() {
        let mut states = vec![AlignmentState::start()];
        states.extend((0..=2).map(|i| AlignmentState::forward(i, i)));
        states.push(AlignmentState::control(2));
        states.extend((0..=6).map(|i| AlignmentState::forward(5 + i, 2 + i)));

        let costs = chain(&states);
        let goal = *states.last().unwrap();

        // Lengths are 3 and 7 by the `end - start + 1` rule
        let segments = reconstruct_segments(&costs, &goal, 3).unwrap();
        assert_eq!(segments, vec![Segment::new(2, 8, 5, 11)]);

        let segments = reconstruct_segments(&costs, &goal, 2).unwrap();
        assert_eq!(segments.len(), 2);
    }

    #[test]
    fn test_reverse_segment_at_reference_start() {
        let states = [
            AlignmentState::start(),
            AlignmentState::reverse(2, 0),
            AlignmentState::reverse(1, 1),
            AlignmentState::reverse(0, 2),
        ];

        let costs = chain(&states);
        let segments = reconstruct_segments(&costs, &states[3], 0).unwrap();
        assert_eq!(segments, vec![Segment::new(0, 2, -1, 0)]);
    }

    #[test]
    fn test_broken_chain() {
        let costs = chain(&[AlignmentState::start(), AlignmentState::forward(0, 0)]);
        let result = reconstruct_segments(&costs, &AlignmentState::forward(3, 3), 0);

        assert!(matches!(result, Err(AlignError::BrokenBacktrace(s)) if s == AlignmentState::forward(3, 3)));
    }
}

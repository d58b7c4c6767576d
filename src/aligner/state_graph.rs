use std::cmp::min;

use crate::aligner::config::AlignmentConfig;
use crate::aligner::state::{AlignmentState, StateEdge, StateKind};
use crate::sequences::SequenceStore;

/// The implicit alignment state graph
///
/// Nodes are never stored. Outgoing edges of a state are computed on demand from the sequences,
/// and always emitted in the same order, which the search relies on for tie-breaking:
///
/// - `Control`: reference positions ascending, `Forward` before `Reverse` for each position.
/// - `Forward`/`Reverse`: diagonal, reference advance, query advance, close segment.
pub struct StateGraph<'a> {
    seqs: &'a SequenceStore,
    max_jump: usize,
}

impl<'a> StateGraph<'a> {
    pub fn new(seqs: &'a SequenceStore, config: &AlignmentConfig) -> Self {
        Self {
            seqs,
            max_jump: config.max_jump,
        }
    }

    /// A state is an end state when it has consumed the whole query
    #[inline]
    pub fn is_end(&self, state: &AlignmentState) -> bool {
        state.qry_idx == self.seqs.query_len()
    }

    pub fn expand<F>(&self, state: &AlignmentState, f: F)
    where
        F: FnMut(StateEdge),
    {
        match state.kind {
            StateKind::Control => self.expand_control(state.qry_idx, f),
            StateKind::Forward => self.expand_forward(state.ref_idx, state.qry_idx, f),
            StateKind::Reverse => self.expand_reverse(state.ref_idx, state.qry_idx, f),
        }
    }

    fn expand_control<F>(&self, q: usize, mut f: F)
    where
        F: FnMut(StateEdge),
    {
        let first = q.saturating_sub(self.max_jump);
        let last = min(self.seqs.reference_len(), q.saturating_add(self.max_jump));

        for r in first..=last {
            f(StateEdge::new(AlignmentState::forward(r, q), 1));
            f(StateEdge::new(AlignmentState::reverse(r, q), 1));
        }
    }

    fn expand_forward<F>(&self, r: usize, q: usize, mut f: F)
    where
        F: FnMut(StateEdge),
    {
        let ref_len = self.seqs.reference_len();
        let qry_len = self.seqs.query_len();

        if r < ref_len && q < qry_len {
            let cost = if self.seqs.reference()[r] == self.seqs.query()[q] { 0 } else { 1 };
            f(StateEdge::new(AlignmentState::forward(r + 1, q + 1), cost));
        }

        if r < ref_len {
            f(StateEdge::new(AlignmentState::forward(r + 1, q), 1));
        }

        if q < qry_len {
            f(StateEdge::new(AlignmentState::forward(r, q + 1), 1));
        }

        f(StateEdge::new(AlignmentState::control(q), 1));
    }

    fn expand_reverse<F>(&self, r: usize, q: usize, mut f: F)
    where
        F: FnMut(StateEdge),
    {
        let qry_len = self.seqs.query_len();

        if r > 0 && q < qry_len {
            let cost = if self.seqs.reference_rc()[r - 1] == self.seqs.query()[q] { 0 } else { 1 };
            f(StateEdge::new(AlignmentState::reverse(r - 1, q + 1), cost));
        }

        if r > 0 {
            f(StateEdge::new(AlignmentState::reverse(r - 1, q), 1));
        }

        if q < qry_len {
            f(StateEdge::new(AlignmentState::reverse(r, q + 1), 1));
        }

        f(StateEdge::new(AlignmentState::control(q), 1));
    }
}

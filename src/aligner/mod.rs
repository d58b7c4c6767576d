pub mod alignment;
pub mod backtrace;
pub mod config;
pub mod queue;
pub mod search;
pub mod state;
pub mod state_graph;

use serde::Serialize;
use tracing::{debug, span, Level};

pub use alignment::{format_segments, Segment};
pub use config::AlignmentConfig;

use crate::aligner::backtrace::reconstruct_segments;
use crate::aligner::search::SearchSession;
use crate::aligner::state_graph::StateGraph;
use crate::errors::AlignError;
use crate::sequences::SequenceStore;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AlignmentResult {
    /// Total cost of the best path, `None` when no path spans the whole query
    pub score: Option<usize>,
    pub segments: Vec<Segment>,

    #[serde(skip)]
    pub num_queued: usize,
    #[serde(skip)]
    pub num_visited: usize,
}

/// Aligns a query against both strands of a reference
///
/// Each call to [`JumpAligner::align`] runs an independent search, so one aligner can be reused
/// for any number of sequence pairs.
#[derive(Debug, Clone, Default)]
pub struct JumpAligner {
    config: AlignmentConfig,
}

impl JumpAligner {
    pub fn new(config: AlignmentConfig) -> Self {
        Self { config }
    }

    pub fn align<Q, R>(&self, query: &Q, reference: &R) -> Result<AlignmentResult, AlignError>
    where
        Q: AsRef<[u8]> + ?Sized,
        R: AsRef<[u8]> + ?Sized,
    {
        self.align_u8(query.as_ref(), reference.as_ref())
    }

    fn align_u8(&self, query: &[u8], reference: &[u8]) -> Result<AlignmentResult, AlignError> {
        let span = span!(Level::INFO, "jump_align", qry_len = query.len(), ref_len = reference.len());
        let _enter = span.enter();

        let seqs = SequenceStore::new(query, reference);
        let graph = StateGraph::new(&seqs, &self.config);
        let mut session = SearchSession::new(&graph);

        let mut result = AlignmentResult::default();
        let goal = session.run();

        result.num_queued = session.num_queued();
        result.num_visited = session.num_visited();

        let Some(goal) = goal else {
            return Ok(result);
        };

        result.score = session.cost_of(&goal);
        result.segments = reconstruct_segments(session.cost_table(), &goal, self.config.min_segment_length)?;

        debug!(score = ?result.score, num_segments = result.segments.len(), "Done.");

        Ok(result)
    }
}

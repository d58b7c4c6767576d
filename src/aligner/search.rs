use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, trace};

use crate::aligner::queue::ZeroOneQueue;
use crate::aligner::state::{AlignmentState, PathRecord};
use crate::aligner::state_graph::StateGraph;

/// Best known cost and parent for every state reached so far
pub type CostTable = FxHashMap<AlignmentState, PathRecord>;

/// Outcome of a single iteration of the search loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStep {
    /// Popped a state that was already finalized through a cheaper or earlier path
    Stale(AlignmentState),

    /// Finalized a state at its minimal cost and relaxed its outgoing edges
    Finalized { state: AlignmentState, cost: usize },

    /// Popped a state spanning the whole query. The search is done.
    Reached(AlignmentState),

    /// The queue ran empty before any state spanning the whole query was reached
    Exhausted,
}

/// State of a single 0/1-BFS run over the alignment state graph
///
/// A session is created for one alignment and thrown away after the segments are
/// reconstructed from its cost table.
pub struct SearchSession<'a, 'g> {
    graph: &'g StateGraph<'a>,
    costs: CostTable,
    finalized: FxHashSet<AlignmentState>,
    queue: ZeroOneQueue<AlignmentState>,

    num_queued: usize,
    num_visited: usize,
}

impl<'a, 'g> SearchSession<'a, 'g> {
    pub fn new(graph: &'g StateGraph<'a>) -> Self {
        let start = AlignmentState::start();

        let mut costs = CostTable::default();
        costs.insert(start, PathRecord { cost: 0, parent: start });

        let mut queue = ZeroOneQueue::new();
        queue.queue_deferred(start);

        Self {
            graph,
            costs,
            finalized: FxHashSet::default(),
            queue,
            num_queued: 1,
            num_visited: 0,
        }
    }

    pub fn step(&mut self) -> SearchStep {
        let Some(front) = self.queue.pop() else {
            return SearchStep::Exhausted;
        };

        if self.finalized.contains(&front) {
            return SearchStep::Stale(front);
        }

        if self.graph.is_end(&front) {
            // Keep the goal at the front, where the backtrace expects to find it
            self.queue.queue_urgent(front);
            return SearchStep::Reached(front);
        }

        self.finalized.insert(front);
        self.num_visited += 1;

        let cost = self.cost_of(&front).unwrap_or_default();
        trace!(?front, cost, "finalize");

        self.relax(&front, cost);

        SearchStep::Finalized { state: front, cost }
    }

    /// Run the search until a state spanning the whole query is reached
    ///
    /// Returns the goal state, or `None` if the queue emptied first.
    pub fn run(&mut self) -> Option<AlignmentState> {
        loop {
            match self.step() {
                SearchStep::Stale(_) | SearchStep::Finalized { .. } => continue,
                SearchStep::Reached(goal) => {
                    debug!(
                        ?goal,
                        score = ?self.cost_of(&goal),
                        num_visited = self.num_visited,
                        num_queued = self.num_queued,
                        "reached end of query"
                    );

                    break Some(goal);
                },
                SearchStep::Exhausted => {
                    debug!(num_visited = self.num_visited, "queue exhausted before reaching end of query");
                    break None;
                }
            }
        }
    }

    fn relax(&mut self, state: &AlignmentState, cost: usize) {
        let costs = &mut self.costs;
        let queue = &mut self.queue;
        let num_queued = &mut self.num_queued;

        self.graph.expand(state, |edge| {
            let new_cost = cost + edge.cost as usize;

            // Strictly lower only, the first path to reach a state at a given cost wins ties
            let improves = costs.get(&edge.target)
                .map_or(true, |record| record.cost > new_cost);

            if improves {
                costs.insert(edge.target, PathRecord { cost: new_cost, parent: *state });
                queue.queue(edge.target, edge.is_urgent());
                *num_queued += 1;
            }
        });
    }

    #[inline]
    pub fn cost_of(&self, state: &AlignmentState) -> Option<usize> {
        self.costs.get(state).map(|record| record.cost)
    }

    #[inline]
    pub fn is_finalized(&self, state: &AlignmentState) -> bool {
        self.finalized.contains(state)
    }

    /// The state at the front of the work queue, i.e., the goal after a successful run
    #[inline]
    pub fn front(&self) -> Option<&AlignmentState> {
        self.queue.front()
    }

    #[inline]
    pub fn cost_table(&self) -> &CostTable {
        &self.costs
    }

    pub fn num_queued(&self) -> usize {
        self.num_queued
    }

    pub fn num_visited(&self) -> usize {
        self.num_visited
    }
}

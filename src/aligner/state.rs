/// Which sequence an alignment state is walking through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StateKind {
    /// Advancing through the reference left-to-right
    Forward,

    /// Advancing through the reference's reverse complement
    Reverse,

    /// Not inside a matched segment, free to jump to a new anchor
    Control,
}

/// A node in the implicit alignment state graph
///
/// `ref_idx` indexes the sequence selected by `kind` and is always 0 for [`StateKind::Control`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AlignmentState {
    pub kind: StateKind,
    pub ref_idx: usize,
    pub qry_idx: usize,
}

impl AlignmentState {
    #[inline]
    pub fn new(kind: StateKind, ref_idx: usize, qry_idx: usize) -> Self {
        Self { kind, ref_idx, qry_idx }
    }

    #[inline]
    pub fn forward(ref_idx: usize, qry_idx: usize) -> Self {
        Self::new(StateKind::Forward, ref_idx, qry_idx)
    }

    #[inline]
    pub fn reverse(ref_idx: usize, qry_idx: usize) -> Self {
        Self::new(StateKind::Reverse, ref_idx, qry_idx)
    }

    #[inline]
    pub fn control(qry_idx: usize) -> Self {
        Self::new(StateKind::Control, 0, qry_idx)
    }

    /// The state every search starts from
    #[inline]
    pub fn start() -> Self {
        Self::control(0)
    }
}

/// Best known cost to reach a state, and the state it was reached from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathRecord {
    pub cost: usize,
    pub parent: AlignmentState,
}

/// An outgoing edge of an alignment state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateEdge {
    pub target: AlignmentState,
    pub cost: u8,
}

impl StateEdge {
    #[inline]
    pub fn new(target: AlignmentState, cost: u8) -> Self {
        Self { target, cost }
    }

    /// Zero-cost edges go to the front of the work queue
    #[inline]
    pub fn is_urgent(&self) -> bool {
        self.cost == 0
    }
}

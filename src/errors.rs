use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io;

use crate::aligner::state::AlignmentState;

#[derive(Debug)]
pub enum AlignError {
    /// The input ended before the named sequence could be read
    MissingSequence(&'static str),

    /// The parent pointer chain does not lead back to the start state
    BrokenBacktrace(AlignmentState),

    /// Error variant when we couldn't read the input or write the output
    IOError(io::Error),
}

impl Error for AlignError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            Self::IOError(ref source) => Some(source),
            _ => None
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(value: io::Error) -> Self {
        Self::IOError(value)
    }
}

impl Display for AlignError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            Self::MissingSequence(which) =>
                write!(f, "Input ended before the {which} sequence could be read!"),
            Self::BrokenBacktrace(ref state) =>
                write!(f, "Backtrace got stuck at {state:?} before reaching the start state!"),
            Self::IOError(ref err) =>
                err.fmt(f),
        }
    }
}

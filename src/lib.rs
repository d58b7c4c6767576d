pub mod errors;
pub mod sequences;
pub mod aligner;
pub mod io;

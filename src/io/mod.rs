pub mod input;
pub mod output;

pub use input::{open_input, read_sequence_pair};
pub use output::{write_json, write_text};

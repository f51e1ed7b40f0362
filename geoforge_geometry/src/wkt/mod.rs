//! Well-Known-Text output.

mod writer;

pub use writer::*;

//! Instance input and route output.
//!
//! - [`parse_instance`] / [`read_instance`] — Instance text format
//! - [`ResultSink`] — Consumer of a resolved route
//! - [`CsvSink`] — Writes `x,y` lines to any writer
//! - [`VecSink`] — Collects routes in memory

mod reader;
mod writer;

pub use reader::{parse_instance, read_instance};
pub use writer::{CsvSink, ResultSink, VecSink};

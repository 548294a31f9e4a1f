//! Log setup shared by the command-line tools

mod lazy_file_writer;
mod tracing;

pub use lazy_file_writer::LazyFileWriter;
pub use self::tracing::{LOG_LEVEL_VAR, TracingLevel};

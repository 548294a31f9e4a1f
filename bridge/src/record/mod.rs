//! Field mapping from arbitrary JSON records into the fixed nine-column shape

mod field;
mod normalized;

pub use field::{FieldDefault, NormalizedField};
pub use normalized::{NormalizedRecord, Record, parse_record};

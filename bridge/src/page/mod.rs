//! Creating database rows from records

mod properties;
mod publish;

pub use properties::{MAX_RICH_TEXT_CHARS, PageProperties};
pub use publish::{PublishOptions, PublishReport, publish};

//! Required database columns and the additive schema synchronizer

mod diff;
mod property;
mod remote;
mod required;
mod sync;

pub use diff::{SchemaDiff, SchemaPatch, TypeMismatch};
pub use property::{PropertyDefinition, PropertyKind};
pub use remote::RemoteSchema;
pub use required::RequiredSchema;
pub use sync::{SchemaSynchronizer, SyncReport, SyncState};

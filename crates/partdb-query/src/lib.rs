//! # partdb-query
//!
//! Read-only row fetching from the Part-DB database.
//!
//! Two queries exist: parts joined to their storage location, and
//! storage locations joined to their parent location. Both take an
//! inclusive lower-bound id cursor and return rows ordered ascending
//! by id, so a partial export can be resumed by passing the last seen
//! id plus one.

pub mod error;
pub mod records;
pub mod source;

pub use error::QueryError;
pub use records::{LocationRecord, PartRecord};
pub use source::{InventorySource, MySqlInventorySource};

//! Route table module.
//!
//! Provides the `RouteEntry` triple and the validated, ordered `RouteTable`.

pub mod entry;
pub mod table;

pub use entry::RouteEntry;
pub use table::RouteTable;

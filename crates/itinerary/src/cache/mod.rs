//! Key-value stores behind the local cache backend.
//!
//! Implementations of `itinerary_core::cache::Cache`:
//!
//! - `MemoryCache`: process-local, lost on exit
//! - `SqliteCache` (feature `sqlite`, default): persisted in a SQLite file

mod memory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::MemoryCache;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteCache;

//! SQLite key-value store.
//!
//! Persists cache values in a single `kv` table using `rusqlite` for
//! synchronous operations and `tokio-rusqlite` for async wrapping.

mod cache;
mod error;
mod schema;

pub use cache::SqliteCache;

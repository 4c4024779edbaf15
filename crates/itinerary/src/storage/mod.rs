//! Holiday storage backends and the synchronizing store.
//!
//! This module provides concrete implementations of the repository traits
//! defined in `itinerary_core::storage`:
//!
//! - [`inmemory`]: process-local remote backend for tests and demos
//! - [`dynamodb`] (feature `dynamodb`): AWS DynamoDB remote backend
//! - [`local`]: the local cache backend over any `Cache`
//! - [`remote`]: lazy, init-once connection to the remote backend
//! - [`synced`]: [`HolidayStore`], the entry point that ties them together
//!
//! # Examples
//!
//! Build with the DynamoDB remote:
//! ```bash
//! cargo build -p itinerary --features dynamodb
//! ```

#[cfg(feature = "dynamodb")]
pub mod dynamodb;

pub mod inmemory;
pub mod local;
pub mod remote;
pub mod synced;

#[cfg(feature = "dynamodb")]
pub use dynamodb::{DynamoDbConnector, DynamoDbRepository};

pub use inmemory::{InMemoryConnector, InMemoryRepository};
pub use local::LocalCacheBackend;
pub use remote::{Backend, RemoteHandle};
pub use synced::{HolidayStore, WriteFallback};

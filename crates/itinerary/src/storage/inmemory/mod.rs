//! In-memory remote backend for testing.
//!
//! This module provides an in-memory implementation of the remote backend
//! that stores all data in a HashMap wrapped in `Arc<RwLock<_>>`. It assigns
//! UUID identifiers like a hosted document store would, and can be switched
//! unreachable to exercise the cache fallback paths.
//!
//! # Example
//!
//! ```rust,ignore
//! use itinerary::storage::inmemory::{InMemoryConnector, InMemoryRepository};
//!
//! let connector = InMemoryConnector::new(InMemoryRepository::new());
//! // Hand the connector to a HolidayStore...
//! ```

mod connector;
mod repository;

pub use connector::InMemoryConnector;
pub use repository::InMemoryRepository;

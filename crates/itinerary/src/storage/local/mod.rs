//! Local cache backend.
//!
//! Stores every holiday as one JSON array under a single cache key. Used as
//! full standalone storage when the remote backend is unconfigured or
//! unreachable, and as a passive mirror of the remote backend otherwise.

mod backend;

pub use backend::LocalCacheBackend;

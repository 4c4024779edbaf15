//! The synchronizing holiday store.
//!
//! [`HolidayStore`] is the single entry point for callers. It prefers the
//! remote backend, mirrors every successful remote read into the local cache,
//! and falls back to the local cache whenever the remote backend is
//! unconfigured or fails.

mod policy;
mod store;

pub use policy::{ParseWriteFallbackError, WriteFallback};
pub use store::HolidayStore;

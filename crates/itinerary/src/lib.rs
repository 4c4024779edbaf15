//! itinerary - holiday storage with a remote document store and an offline
//! cache.
//!
//! The [`storage::HolidayStore`] is the single entry point for callers. It
//! lazily connects to the remote backend, mirrors every successful remote
//! read and write into the local cache, and falls back to the cache when the
//! remote backend is unconfigured or unreachable.

pub mod cache;
pub mod cli;
pub mod config;
pub mod output;
pub mod storage;

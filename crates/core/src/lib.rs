//! Core domain for the itinerary holiday tracker.
//!
//! Pure types and functions shared by every storage backend: the holiday
//! record schema, sanitization and identifier rules, dashboard status math,
//! and the repository/cache contracts the backends implement.

pub mod cache;
pub mod holiday;
pub mod storage;

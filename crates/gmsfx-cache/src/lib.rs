//! GMSFX Sound Cache
//!
//! Keeps track of every sound file written to disk so that they can be
//! removed again in one sweep.

mod cache;

pub use cache::PathCache;

//! The independent gate checks.
//!
//! Apart from the rate limiter (a hard gate applied before any of these
//! run), every check here is non-short-circuiting: a FAIL on one never
//! suppresses the others, so a finished evaluation always carries the full
//! diagnostic trail.

pub mod entry;
pub mod events;
pub mod levels;
pub mod momentum;
pub mod premium;
pub mod structure;
pub mod tradability;

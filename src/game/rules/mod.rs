//! Win detection rules.
//!
//! Two strategies, selected by the configured win combo length: `tally`
//! covers the full-line case with O(1) incremental counters, `scan` covers
//! shorter runs with a local walk around the last move.

pub(crate) mod scan;
pub(crate) mod tally;

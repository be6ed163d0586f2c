//! Next-departure predictions for 511 transit stops.
//!
//! Answers "when is the next bus at stop X": fetches the 511 XML feed for a
//! stop code and turns it into one schedule line per route.

pub mod domain;
pub mod muni;

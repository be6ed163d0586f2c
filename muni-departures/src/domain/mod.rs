//! Domain types for the departures client.
//!
//! These are the types handed to consumers, independent of the XML wire
//! format the 511 API speaks.

mod schedule;
mod stop_code;

pub use schedule::{HumanReadableSchedule, SortOrder, sort_schedules};
pub use stop_code::{InvalidStopCode, StopCode};

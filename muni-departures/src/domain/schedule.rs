//! Flattened, human-readable departure schedules.

use std::fmt;

use serde::Serialize;

/// Upcoming departures of one route at one stop.
///
/// `next` holds minutes until departure, in the order the API reported them.
/// Negative values are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HumanReadableSchedule {
    pub name: String,
    pub next: Vec<i32>,
}

impl HumanReadableSchedule {
    pub fn new(name: impl Into<String>, next: Vec<i32>) -> Self {
        Self {
            name: name.into(),
            next,
        }
    }
}

impl fmt::Display for HumanReadableSchedule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.next.is_empty() {
            return write!(f, "{}: no departures", self.name);
        }

        write!(f, "{}: ", self.name)?;
        for (i, mins) in self.next.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{mins}")?;
        }
        f.write_str(" min")
    }
}

/// Ordering applied to schedules by route name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Sort schedules by route name.
///
/// The sort is stable: schedules sharing a route name keep their relative
/// order. Departure times are never used as a tiebreak.
pub fn sort_schedules(schedules: &mut [HumanReadableSchedule], order: SortOrder) {
    match order {
        SortOrder::Ascending => schedules.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::Descending => schedules.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

//! Conversion from 511 DTOs to human-readable schedules.
//!
//! Decoding happens in two steps: the XML body becomes an [`Rtt`] tree, and
//! the first agency of that tree is flattened into one
//! [`HumanReadableSchedule`] per (route, direction, stop).

use tracing::{debug, warn};

use crate::domain::{HumanReadableSchedule, SortOrder, StopCode, sort_schedules};

use super::error::MuniError;
use super::types::{Agency, Rtt};

/// Longest body excerpt kept in an XML error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Decode a `GetNextDeparturesByStopCode` response body.
///
/// Malformed XML or a body that is not valid UTF-8 is an [`MuniError::Xml`].
/// A well-formed response with no agency is [`MuniError::NoData`], reported
/// against `stop_code`.
pub fn decode_departures(body: &[u8], stop_code: StopCode) -> Result<Rtt, MuniError> {
    let excerpt = || {
        Some(
            String::from_utf8_lossy(body)
                .chars()
                .take(BODY_EXCERPT_CHARS)
                .collect(),
        )
    };

    let text = std::str::from_utf8(body).map_err(|e| MuniError::Xml {
        message: format!("body is not valid UTF-8: {e}"),
        body: excerpt(),
    })?;

    let rtt: Rtt = quick_xml::de::from_str(text).map_err(|e| MuniError::Xml {
        message: e.to_string(),
        body: excerpt(),
    })?;

    if rtt.agencies().is_empty() {
        return Err(MuniError::NoData { stop_code });
    }

    Ok(rtt)
}

/// The agency a stop's departures are read from.
///
/// Only the first agency is used. Responses carrying more than one are
/// logged; their remaining agencies are ignored rather than merged.
pub fn primary_agency(rtt: &Rtt, stop_code: StopCode) -> Result<&Agency, MuniError> {
    let agencies = rtt.agencies();

    if agencies.len() > 1 {
        warn!(
            stop = %stop_code,
            agencies = agencies.len(),
            ignored = ?agencies[1..].iter().map(|a| a.name.as_str()).collect::<Vec<_>>(),
            "response has more than one agency, using the first"
        );
    }

    agencies.first().ok_or(MuniError::NoData { stop_code })
}

/// Flatten an agency into schedules, sorted by route name descending.
///
/// Emits one schedule per stop under every direction of every route, in
/// document order, then sorts. Departure times are copied as received.
pub fn to_schedules(agency: &Agency) -> Vec<HumanReadableSchedule> {
    let mut schedules: Vec<HumanReadableSchedule> = agency
        .routes()
        .iter()
        .flat_map(|route| {
            route.directions().iter().flat_map(move |direction| {
                direction.stops().iter().map(move |stop| {
                    HumanReadableSchedule::new(route.name.clone(), stop.departure_times().to_vec())
                })
            })
        })
        .collect();

    sort_schedules(&mut schedules, SortOrder::Descending);

    debug!(
        agency = %agency.name,
        routes = agency.routes().len(),
        schedules = schedules.len(),
        "flattened departures"
    );

    schedules
}

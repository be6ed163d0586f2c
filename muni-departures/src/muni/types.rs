//! 511 Transit API response DTOs.
//!
//! These types map directly onto the `GetNextDeparturesByStopCode` XML
//! response. Attribute names are case-sensitive and inconsistent upstream
//! (`Name` on most elements, `name` on `Stop`); the renames below must match
//! the wire exactly.
//!
//! Every list sits inside a wrapper element (`RouteList>Route`, ...). A
//! missing or self-closing wrapper decodes as an empty list.

use serde::de::{self, Unexpected};
use serde::{Deserialize, Deserializer};

/// Root `<RTT>` element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Rtt {
    #[serde(rename = "AgencyList", default)]
    pub agency_list: AgencyList,
}

impl Rtt {
    /// Agencies in document order.
    pub fn agencies(&self) -> &[Agency] {
        &self.agency_list.agencies
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgencyList {
    #[serde(rename = "Agency", default)]
    pub agencies: Vec<Agency>,
}

/// A transit operator, e.g. SF-MUNI.
#[derive(Debug, Clone, Deserialize)]
pub struct Agency {
    #[serde(rename = "@Name", default)]
    pub name: String,

    /// Whether routes of this agency are split by direction.
    /// Upstream sends `True`/`False`.
    #[serde(rename = "@HasDirection", default, deserialize_with = "flag")]
    pub has_direction: bool,

    /// Transport mode, e.g. "Bus" or "Rail".
    #[serde(rename = "@Mode", default)]
    pub mode: String,

    #[serde(rename = "RouteList", default)]
    pub route_list: RouteList,
}

impl Agency {
    pub fn routes(&self) -> &[Route] {
        &self.route_list.routes
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteList {
    #[serde(rename = "Route", default)]
    pub routes: Vec<Route>,
}

/// A transit line.
#[derive(Debug, Clone, Deserialize)]
pub struct Route {
    #[serde(rename = "@Name", default)]
    pub name: String,

    /// Route code. Mostly numeric, but upstream also uses codes like "5R"
    /// and "KT", so this stays a string.
    #[serde(rename = "@Code", default)]
    pub code: String,

    #[serde(rename = "RouteDirectionList", default)]
    pub route_direction_list: RouteDirectionList,
}

impl Route {
    pub fn directions(&self) -> &[RouteDirection] {
        &self.route_direction_list.directions
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RouteDirectionList {
    #[serde(rename = "RouteDirection", default)]
    pub directions: Vec<RouteDirection>,
}

/// One direction of travel along a route.
#[derive(Debug, Clone, Deserialize)]
pub struct RouteDirection {
    /// e.g. "Inbound".
    #[serde(rename = "@Code", default)]
    pub code: String,

    /// e.g. "Inbound to Downtown".
    #[serde(rename = "@Name", default)]
    pub name: String,

    #[serde(rename = "StopList", default)]
    pub stop_list: StopList,
}

impl RouteDirection {
    pub fn stops(&self) -> &[Stop] {
        &self.stop_list.stops
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct StopList {
    #[serde(rename = "Stop", default)]
    pub stops: Vec<Stop>,
}

/// A stop with its pending departures.
#[derive(Debug, Clone, Deserialize)]
pub struct Stop {
    /// Lowercase `name` attribute, unlike every other element.
    #[serde(rename = "@name", default)]
    pub name: String,

    #[serde(rename = "@StopCode", default)]
    pub stop_code: u32,

    #[serde(rename = "DepartureTimeList", default)]
    pub departure_time_list: DepartureTimeList,
}

impl Stop {
    /// Minutes until each departure, as reported. Can be negative for a
    /// vehicle that has just left.
    pub fn departure_times(&self) -> &[i32] {
        &self.departure_time_list.departure_times
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DepartureTimeList {
    #[serde(rename = "DepartureTime", default)]
    pub departure_times: Vec<i32>,
}

/// Accepts `true`/`false` in any case, plus `1`/`0`.
fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(de::Error::invalid_value(
            Unexpected::Str(&raw),
            &"True, False, 1 or 0",
        )),
    }
}

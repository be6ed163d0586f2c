//! 511 Transit (my511.org) next-departures client.
//!
//! This module provides an HTTP client for the 511 Transit 2.0 XML API,
//! which provides real-time predictions for SF-MUNI and other Bay Area
//! operators.
//!
//! Key characteristics of the API:
//! - Authentication is a `token` query parameter
//! - Responses are XML: `Agency > Route > RouteDirection > Stop`, each list
//!   wrapped in its own `*List` element
//! - Departure times are minutes from now, not clock times

mod client;
mod convert;
mod error;
mod types;

pub use client::{MuniClient, MuniConfig};
pub use convert::{decode_departures, primary_agency, to_schedules};
pub use error::MuniError;
pub use types::{Agency, Route, RouteDirection, Rtt, Stop};

use std::process::ExitCode;

use tracing::error;
use tracing_subscriber::EnvFilter;

use muni_departures::domain::StopCode;
use muni_departures::muni::{MuniClient, MuniConfig};

const USAGE: &str = "usage: muni-departures <stop-code>...";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut stop_codes = Vec::new();
    for arg in std::env::args().skip(1) {
        match StopCode::parse(&arg) {
            Ok(stop) => stop_codes.push(stop),
            Err(e) => {
                eprintln!("{arg}: {e}");
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
        }
    }
    if stop_codes.is_empty() {
        eprintln!("{USAGE}");
        return ExitCode::from(2);
    }

    // Get credentials from environment
    let token = std::env::var("MUNI_TOKEN").unwrap_or_else(|_| {
        eprintln!("Warning: MUNI_TOKEN not set. API calls will fail.");
        String::new()
    });

    let mut config = MuniConfig::new(token);
    if let Ok(endpoint) = std::env::var("MUNI_ENDPOINT") {
        config = config.with_base_url(endpoint);
    }

    let client = match MuniClient::new(config) {
        Ok(client) => client,
        Err(e) => {
            error!(error = %e, "failed to create 511 client");
            return ExitCode::FAILURE;
        }
    };

    let mut failed = false;
    for stop in stop_codes {
        match client.next(stop).await {
            Ok(schedules) => {
                println!("Stop {stop}:");
                for schedule in &schedules {
                    println!("  {schedule}");
                }
            }
            Err(e) => {
                error!(stop = %stop, error = %e, "failed to get departures");
                failed = true;
            }
        }
    }

    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

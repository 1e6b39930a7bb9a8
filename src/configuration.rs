use crate::upstream::{DEFAULT_MAP_BASE_URL, DEFAULT_SEGMENT_BASE_URL};
use clap::Parser;
use std::net::IpAddr;
use std::time::Duration;
use warp::http::uri::Authority;

const DEFAULT_ALLOWED_ORIGINS: &[&str] = &[
    "http://localhost",
    "http://localhost:3000",
    "http://127.0.0.1",
    "http://127.0.0.1:3000",
    "https://marijusgudiskis.com",
    "http://marijusgudiskis.com",
    "https://gpx.marijusgudiskis.com",
    "http://gpx.marijusgudiskis.com",
    "https://gpx-backend.marijusgudiskis.com",
    "http://gpx-backend.marijusgudiskis.com",
];

/// Serves SchweizMobil hiking and cycling routes as GPX files.
#[derive(Parser, Debug, Clone)]
#[command(version, about)]
pub struct Configuration {
    /// Address to listen on
    #[arg(long, env = "ROUTE_GPX_HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    #[arg(long, env = "ROUTE_GPX_PORT", default_value_t = 3030)]
    pub port: u16,

    /// Host of the featuresmultilayers endpoint (full routes)
    #[arg(long, env = "ROUTE_GPX_MAP_BASE_URL", default_value = DEFAULT_MAP_BASE_URL)]
    pub map_base_url: String,

    /// Host of the route_or_segment endpoint
    #[arg(long, env = "ROUTE_GPX_SEGMENT_BASE_URL", default_value = DEFAULT_SEGMENT_BASE_URL)]
    pub segment_base_url: String,

    /// Per-request upstream timeout
    #[arg(
        long,
        env = "ROUTE_GPX_TIMEOUT_SECS",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_secs: u64,

    /// CORS origin allowed to call the API, e.g. `https://example.org`; repeat for several
    #[arg(
        long = "allowed-origin",
        env = "ROUTE_GPX_ALLOWED_ORIGINS",
        value_delimiter = ',',
        value_parser = parse_origin
    )]
    pub allowed_origins: Vec<String>,
}

/// Accepts `http(s)://host[:port]` and nothing else, so the CORS builder
/// never sees an origin it cannot parse.
fn parse_origin(s: &str) -> Result<String, String> {
    let (scheme, authority) = s
        .split_once("://")
        .ok_or_else(|| format!("{s} has no scheme"))?;
    if scheme != "http" && scheme != "https" {
        return Err(format!("{s}: scheme must be http or https"));
    }
    if authority.is_empty() || authority.contains(|c| c == '@' || c == '/') {
        return Err(format!("{s}: expected a bare host"));
    }
    authority
        .parse::<Authority>()
        .map_err(|e| format!("{s}: {e}"))?;
    Ok(s.to_string())
}

impl Configuration {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Configured origins, or the built-in list when none were given.
    pub fn cors_origins(&self) -> Vec<String> {
        if self.allowed_origins.is_empty() {
            DEFAULT_ALLOWED_ORIGINS.iter().map(|s| s.to_string()).collect()
        } else {
            self.allowed_origins.clone()
        }
    }
}

//! Serves SchweizMobil hiking and cycling routes as GPX downloads.
//!
//! Route geometry is fetched from the upstream map service in the Swiss LV03
//! grid, converted to WGS84 with the swisstopo approximation formulas and
//! written out as a one-track GPX 1.1 document.

pub mod configuration;
pub mod error;
pub mod fetcher;
pub mod projection;
pub mod route_category;
pub mod track;
pub mod upstream;
pub mod web;

pub use configuration::Configuration;
pub use fetcher::RouteFetcher;
pub use projection::{lv03_to_wgs84, GeoPoint, ProjectedPoint};
pub use route_category::RouteCategory;

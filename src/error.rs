//! Error types of the fetch and build pipeline.
//!
//! None of these cross the HTTP boundary: the web layer folds every failure
//! into a static not-found (or internal error) reply.
use thiserror::Error;

/// Why one upstream query produced no usable coordinates.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Connection failure or timeout
    #[error("upstream request failed")]
    Transport(#[from] reqwest::Error),
    #[error("upstream answered with status {0}")]
    Status(reqwest::StatusCode),
    /// Body is not the JSON shape we expect
    #[error("malformed upstream response")]
    Decode(#[from] serde_json::Error),
    /// A position without easting, northing and altitude
    #[error("position {0:?} has fewer than three components")]
    InvalidPosition(Vec<f64>),
    /// Well-formed answer, but nothing in it
    #[error("upstream returned no coordinates")]
    Empty,
}

/// Failure while serializing a track document.
#[derive(Error, Debug)]
pub enum TrackError {
    #[error("could not write GPX: {0}")]
    Gpx(#[from] gpx::errors::GpxError),
}

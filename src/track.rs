use crate::error::TrackError;
use crate::projection::{lv03_to_wgs84, GeoPoint, ProjectedPoint};
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};

const CREATOR: &str = "route-gpx";

fn gpx_from_points(points: &[GeoPoint]) -> Gpx {
    let segment = TrackSegment {
        points: points
            .iter()
            .map(|p| {
                let mut waypoint = Waypoint::new(Point::new(p.longitude, p.latitude));
                waypoint.elevation = Some(p.altitude);
                waypoint
            })
            .collect(),
    };

    let mut track = Track::default();
    track.segments.push(segment);

    Gpx {
        version: GpxVersion::Gpx11,
        creator: Some(CREATOR.to_string()),
        tracks: vec![track],
        ..Default::default()
    }
}

/// Serializes the points as a single-track, single-segment GPX document.
/// Returns `None` for an empty path.
pub fn build(points: &[GeoPoint]) -> Result<Option<Vec<u8>>, TrackError> {
    if points.is_empty() {
        return Ok(None);
    }
    let mut bytes = Vec::new();
    gpx::write(&gpx_from_points(points), &mut bytes)?;
    Ok(Some(bytes))
}

/// Full pipeline from fetched LV03 points to GPX bytes.
pub fn convert_to_gpx(points: Option<Vec<ProjectedPoint>>) -> Result<Option<Vec<u8>>, TrackError> {
    let wgs84_points: Vec<GeoPoint> = points
        .unwrap_or_default()
        .into_iter()
        .map(lv03_to_wgs84)
        .collect();
    build(&wgs84_points)
}

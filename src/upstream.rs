use crate::error::FetchError;
use crate::projection::ProjectedPoint;
use geojson::LineStringType;
use serde::Deserialize;
use std::future::Future;
use std::time::Duration;

pub const DEFAULT_MAP_BASE_URL: &str = "https://map.schweizmobil.ch";
pub const DEFAULT_SEGMENT_BASE_URL: &str = "https://schweizmobil.ch";

/// Source of raw upstream bodies. One call per query, no retries.
pub trait Upstream: Send + Sync + 'static {
    fn get(&self, url: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

pub struct HttpUpstream {
    client: reqwest::Client,
}

impl HttpUpstream {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client })
    }
}

impl Upstream for HttpUpstream {
    async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}

pub fn full_route_url(base: &str, label: &str, route_number: u32) -> String {
    format!("{base}/api/4/query/featuresmultilayers?{label}={route_number}")
}

pub fn segment_url(base: &str, label: &str, route_number: u32, segment_number: u32) -> String {
    format!("{base}/api/4/route_or_segment/{label}/{route_number}/{segment_number}.json")
}

/// Body of `featuresmultilayers`. A missing `features` key reads as no match.
/// Features stay raw so that only the first one is decoded.
#[derive(Deserialize, Debug)]
pub struct FeaturesResponse {
    #[serde(default)]
    pub features: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug)]
pub struct Feature {
    pub geometry: Geometry,
}

/// Multi-line geometry; also the whole body of `route_or_segment`.
#[derive(Deserialize, Debug)]
pub struct Geometry {
    pub coordinates: Vec<LineStringType>,
}

impl Geometry {
    /// Points of the first coordinate ring, in path order.
    pub fn into_first_ring(self) -> Result<Vec<ProjectedPoint>, FetchError> {
        let ring = self
            .coordinates
            .into_iter()
            .next()
            .filter(|ring| !ring.is_empty())
            .ok_or(FetchError::Empty)?;

        ring.into_iter()
            .map(|position| {
                ProjectedPoint::from_position(&position)
                    .ok_or_else(|| FetchError::InvalidPosition(position))
            })
            .collect()
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_upstream_urls() {
        assert_eq!(
            full_route_url(DEFAULT_MAP_BASE_URL, "WanderlandRoutenNational", 1),
            "https://map.schweizmobil.ch/api/4/query/featuresmultilayers?WanderlandRoutenNational=1"
        );
        assert_eq!(
            segment_url(DEFAULT_SEGMENT_BASE_URL, "hike", 3, 12),
            "https://schweizmobil.ch/api/4/route_or_segment/hike/3/12.json"
        );
    }

    #[test]
    fn reads_first_ring_of_feature() {
        let body = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Via Alpina"},
                "geometry": {
                    "type": "MultiLineString",
                    "coordinates": [
                        [[601000, 201000, 500], [601010.5, 201020.5, 510]],
                        [[700000, 250000, 900]]
                    ]
                }
            }]
        }"#;
        let response: FeaturesResponse = serde_json::from_str(body).unwrap();
        let first = response.features.into_iter().next().unwrap();
        let geometry = serde_json::from_value::<Feature>(first).unwrap().geometry;
        let ring = geometry.into_first_ring().unwrap();
        assert_eq!(
            ring,
            vec![
                ProjectedPoint::new(601000.0, 201000.0, 500.0),
                ProjectedPoint::new(601010.5, 201020.5, 510.0),
            ]
        );
    }

    #[test]
    fn missing_features_reads_as_empty() {
        let response: FeaturesResponse = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(response.features.is_empty());
    }

    #[test]
    fn empty_ring_is_an_error() {
        let geometry: Geometry = serde_json::from_str(r#"{"coordinates": [[]]}"#).unwrap();
        assert!(matches!(geometry.into_first_ring(), Err(FetchError::Empty)));

        let geometry: Geometry = serde_json::from_str(r#"{"coordinates": []}"#).unwrap();
        assert!(matches!(geometry.into_first_ring(), Err(FetchError::Empty)));
    }

    #[test]
    fn flat_position_is_an_error() {
        let geometry: Geometry =
            serde_json::from_str(r#"{"coordinates": [[[601000, 201000]]]}"#).unwrap();
        assert!(matches!(
            geometry.into_first_ring(),
            Err(FetchError::InvalidPosition(_))
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let upstream = HttpUpstream::new(Duration::from_secs(2)).unwrap();
        let result = upstream.get("http://127.0.0.1:1/api/4/query").await;
        assert!(matches!(result, Err(FetchError::Transport(_))));
    }
}

use crate::error::FetchError;
use crate::projection::ProjectedPoint;
use crate::route_category::RouteCategory;
use crate::upstream::{self, Feature, FeaturesResponse, Geometry, Upstream};
use log::{debug, info};

/// Resolves route requests into LV03 coordinate sequences.
///
/// Stateless apart from its configuration: every call issues fresh upstream
/// queries and nothing is cached.
pub struct RouteFetcher<U: Upstream> {
    upstream: U,
    map_base_url: String,
    segment_base_url: String,
}

impl<U: Upstream> RouteFetcher<U> {
    pub fn new(upstream: U, map_base_url: impl Into<String>, segment_base_url: impl Into<String>) -> Self {
        RouteFetcher {
            upstream,
            map_base_url: map_base_url.into(),
            segment_base_url: segment_base_url.into(),
        }
    }

    pub fn upstream(&self) -> &U {
        &self.upstream
    }

    /// Tries each of the category's layers in order; the first one with a
    /// feature wins and later layers are not queried, even when that
    /// feature's coordinates turn out to be unusable.
    pub async fn fetch_full_route(&self, category: &str, route_number: u32) -> Option<Vec<ProjectedPoint>> {
        let category: RouteCategory = category.parse().ok()?;

        for label in category.full_route_labels() {
            let url = upstream::full_route_url(&self.map_base_url, label, route_number);
            let geometry = match self.query_features(&url).await {
                Ok(geometry) => geometry,
                Err(e) => {
                    debug!("No route {route_number} in {label}: {e}");
                    continue;
                }
            };

            return match geometry.into_first_ring() {
                Ok(points) => {
                    info!("Route {route_number} found in {label} ({} points)", points.len());
                    Some(points)
                }
                Err(e) => {
                    debug!("Route {route_number} in {label} has no usable coordinates: {e}");
                    None
                }
            };
        }
        None
    }

    pub async fn fetch_segment(
        &self,
        category: &str,
        route_number: u32,
        segment_number: u32,
    ) -> Option<Vec<ProjectedPoint>> {
        let category: RouteCategory = category.parse().ok()?;
        let url = upstream::segment_url(
            &self.segment_base_url,
            category.segment_label(),
            route_number,
            segment_number,
        );

        match self.query_geometry(&url).await {
            Ok(points) => {
                info!("Segment {route_number}/{segment_number} found ({} points)", points.len());
                Some(points)
            }
            Err(e) => {
                debug!("No segment {route_number}/{segment_number}: {e}");
                None
            }
        }
    }

    /// Geometry of the first feature. Later features are never decoded.
    async fn query_features(&self, url: &str) -> Result<Geometry, FetchError> {
        let body = self.upstream.get(url).await?;
        let response: FeaturesResponse = serde_json::from_str(&body)?;
        let first = response.features.into_iter().next().ok_or(FetchError::Empty)?;
        let feature: Feature = serde_json::from_value(first)?;
        Ok(feature.geometry)
    }

    async fn query_geometry(&self, url: &str) -> Result<Vec<ProjectedPoint>, FetchError> {
        let body = self.upstream.get(url).await?;
        let geometry: Geometry = serde_json::from_str(&body)?;
        geometry.into_first_ring()
    }
}

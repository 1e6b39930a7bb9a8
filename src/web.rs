use crate::configuration::Configuration;
use crate::error::TrackError;
use crate::fetcher::RouteFetcher;
use crate::track;
use crate::upstream::{HttpUpstream, Upstream};
use anyhow::Context;
use log::{error, info};
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::reply::Response;
use warp::{Filter, Rejection, Reply};

const ROUTE_NOT_FOUND: &str = "Route not found";
const SEGMENT_NOT_FOUND: &str = "Segment not found";
const BUILD_FAILED: &str = "Could not build GPX document";

fn detail_reply(status: StatusCode, detail: &str) -> Response {
    warp::reply::with_status(warp::reply::json(&json!({ "detail": detail })), status).into_response()
}

fn gpx_reply(result: Result<Option<Vec<u8>>, TrackError>, not_found: &str) -> Response {
    match result {
        Ok(Some(xml)) => warp::reply::with_header(xml, "Content-Type", "application/xml").into_response(),
        Ok(None) => detail_reply(StatusCode::NOT_FOUND, not_found),
        Err(e) => {
            error!("{e}");
            detail_reply(StatusCode::INTERNAL_SERVER_ERROR, BUILD_FAILED)
        }
    }
}

async fn full_route<U: Upstream>(
    category: String,
    route_number: u32,
    fetcher: Arc<RouteFetcher<U>>,
) -> Result<Response, Infallible> {
    let lv03_points = fetcher.fetch_full_route(&category, route_number).await;
    Ok(gpx_reply(track::convert_to_gpx(lv03_points), ROUTE_NOT_FOUND))
}

async fn route_part<U: Upstream>(
    category: String,
    route_number: u32,
    segment_number: u32,
    fetcher: Arc<RouteFetcher<U>>,
) -> Result<Response, Infallible> {
    let lv03_points = fetcher
        .fetch_segment(&category, route_number, segment_number)
        .await;
    Ok(gpx_reply(track::convert_to_gpx(lv03_points), SEGMENT_NOT_FOUND))
}

fn with_fetcher<U: Upstream>(
    fetcher: Arc<RouteFetcher<U>>,
) -> impl Filter<Extract = (Arc<RouteFetcher<U>>,), Error = Infallible> + Clone {
    warp::any().map(move || fetcher.clone())
}

/// `GET /route/{category}/{nr}` and `GET /route/{category}/{nr}/part/{segment}`.
pub fn routes<U: Upstream>(
    fetcher: Arc<RouteFetcher<U>>,
) -> impl Filter<Extract = (Response,), Error = Rejection> + Clone {
    let full = warp::get()
        .and(warp::path!("route" / String / u32))
        .and(with_fetcher(fetcher.clone()))
        .and_then(full_route::<U>);

    let part = warp::get()
        .and(warp::path!("route" / String / u32 / "part" / u32))
        .and(with_fetcher(fetcher))
        .and_then(route_part::<U>);

    full.or(part).unify()
}

/// Routes wrapped with the CORS policy and request logging.
pub fn api<U: Upstream>(
    fetcher: Arc<RouteFetcher<U>>,
    allowed_origins: &[String],
) -> impl Filter<Extract = (impl Reply,), Error = Rejection> + Clone {
    let cors_policy = warp::cors()
        .allow_origins(allowed_origins.iter().map(String::as_str))
        .allow_credentials(true)
        .allow_headers(vec![
            "Origin",
            "Accept",
            "X-Requested-With",
            "Content-Type",
            "Authorization",
        ])
        .allow_methods(["GET"]);

    routes(fetcher)
        .with(cors_policy)
        .with(warp::log("route_gpx"))
}

pub async fn main(config: Configuration) -> anyhow::Result<()> {
    let upstream = HttpUpstream::new(config.timeout()).context("Could not build HTTP client")?;
    let fetcher = Arc::new(RouteFetcher::new(
        upstream,
        &config.map_base_url,
        &config.segment_base_url,
    ));

    let routes = api(fetcher, &config.cors_origins());

    info!("Listening on {}:{}", config.host, config.port);
    warp::serve(routes).run((config.host, config.port)).await;
    Ok(())
}

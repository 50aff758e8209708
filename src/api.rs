// src/api.rs
//! Public HTTP surface: root banner, health probe, and the enrich endpoint.

use shuttle_axum::axum::{
    body::Bytes,
    http::{header, HeaderMap, Method},
    routing::{any, get},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

use crate::enrich;
use crate::error::ApiError;
use crate::telemetry;
use crate::templates::Enrichment;

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/health/", get(health))
        // `any` instead of `post`: the 405 body must name the method we got,
        // which a method-filtered route cannot produce.
        .route("/api/enrich/", any(enrich_company))
        .layer(CorsLayer::very_permissive())
}

#[derive(serde::Serialize)]
struct RootResp {
    status: &'static str,
    api_endpoints: Vec<&'static str>,
}

async fn root() -> Json<RootResp> {
    Json(RootResp {
        status: "Backend is running",
        api_endpoints: vec!["/api/enrich/"],
    })
}

#[derive(serde::Serialize)]
struct HealthResp {
    status: &'static str,
    message: &'static str,
}

async fn health() -> Json<HealthResp> {
    Json(HealthResp {
        status: "ok",
        message: "API is reachable",
    })
}

#[derive(serde::Deserialize)]
struct EnrichReq {
    // Strictly a string or absent: a non-string `url` fails deserialization
    // and surfaces as `InvalidPayload` (400), not an internal error.
    #[serde(default)]
    url: Option<String>,
}

async fn enrich_company(
    method: Method,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Enrichment>, ApiError> {
    let origin = headers
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("No Origin");
    info!(%method, path = "/api/enrich/", origin, "enrichment request started");

    if method != Method::POST {
        warn!(%method, "invalid method");
        return Err(reject(ApiError::MethodNotAllowed(method)));
    }

    let req: EnrichReq = serde_json::from_slice(&body).map_err(|_| {
        warn!("failed to decode JSON body");
        reject(ApiError::InvalidPayload)
    })?;

    let url = match req.url {
        Some(u) if !u.is_empty() => u,
        _ => {
            warn!("url missing in request body");
            return Err(reject(ApiError::MissingField));
        }
    };

    let url = enrich::normalize_url(&url);
    let (category, payload) = enrich::enrich(&url);
    info!(%url, category = category.as_str(), "enriching company");
    telemetry::record_request(category);
    info!("enrichment successful");

    Ok(Json(payload))
}

fn reject(err: ApiError) -> ApiError {
    telemetry::record_rejection(err.kind());
    err
}

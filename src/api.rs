// 🌐 Read-only JSON API over the catalog, plus the single-page front-end
//
// The catalog is immutable after load, so handlers share it through an `Arc`
// without locking. Filtering runs per request through the same pure engine the
// terminal front-end uses.

use crate::catalog::Catalog;
use crate::filter::{filter_places, FilterState};
use crate::links::PlaceLinks;
use crate::palette::{badge_style, BadgeStyle};
use crate::place::Place;
use crate::stats::{CatalogStats, HERO_HEADLINES};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::debug;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

impl AppState {
    pub fn new(catalog: Catalog) -> Self {
        AppState {
            catalog: Arc::new(catalog),
        }
    }
}

/// API Response wrapper
#[derive(Serialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn ok(data: T) -> Response {
        let body = ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        };
        (StatusCode::OK, Json(body)).into_response()
    }
}

fn not_found(message: String) -> Response {
    let body: ApiResponse<()> = ApiResponse {
        success: false,
        data: None,
        error: Some(message),
    };
    (StatusCode::NOT_FOUND, Json(body)).into_response()
}

/// Query string of `GET /api/places`; absent fields mean "no constraint"
#[derive(Debug, Default, Deserialize)]
pub struct PlacesQuery {
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default, rename = "type")]
    pub place_type: Option<String>,
    #[serde(default)]
    pub q: Option<String>,
}

impl PlacesQuery {
    fn filter_state(&self) -> FilterState {
        FilterState::new(
            self.district.as_deref().unwrap_or_default(),
            self.place_type.as_deref().unwrap_or_default(),
            self.q.as_deref().unwrap_or_default(),
        )
    }
}

/// Place plus the presentation fields the page needs
#[derive(Serialize)]
struct PlaceResponse<'a> {
    #[serde(flatten)]
    place: &'a Place,
    state_name: &'static str,
    display_image: &'a str,
    badge: BadgeStyle,
}

impl<'a> From<&'a Place> for PlaceResponse<'a> {
    fn from(place: &'a Place) -> Self {
        PlaceResponse {
            place,
            state_name: place.state.name(),
            display_image: place.display_image(),
            badge: badge_style(place.place_type),
        }
    }
}

#[derive(Serialize)]
struct PlacesResponse<'a> {
    summary: String,
    count: usize,
    places: Vec<PlaceResponse<'a>>,
}

#[derive(Serialize)]
struct PlaceDetailResponse<'a> {
    place: PlaceResponse<'a>,
    links: PlaceLinks,
}

#[derive(Serialize)]
struct StatsResponse {
    catalog: CatalogStats,
    headlines: Vec<Headline>,
}

#[derive(Serialize)]
struct Headline {
    value: &'static str,
    caption: &'static str,
}

#[derive(Serialize)]
struct FiltersResponse {
    districts: Vec<String>,
    types: Vec<String>,
}

// ============================================================================
// API Handlers
// ============================================================================

/// GET /api/health - Health check
async fn health_check() -> Response {
    ApiResponse::ok("OK")
}

/// GET /api/places - Filtered places in catalog order
async fn list_places(State(state): State<AppState>, Query(query): Query<PlacesQuery>) -> Response {
    let filter = query.filter_state();
    let visible = filter_places(state.catalog.places(), &filter);
    debug!(visible = visible.len(), ?filter, "places filtered");

    ApiResponse::ok(PlacesResponse {
        summary: filter.describe(visible.len()),
        count: visible.len(),
        places: visible.into_iter().map(PlaceResponse::from).collect(),
    })
}

/// GET /api/places/:id - One place with its links
async fn get_place(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(place) => ApiResponse::ok(PlaceDetailResponse {
            place: PlaceResponse::from(place),
            links: PlaceLinks::for_place(place),
        }),
        None => not_found(format!("place '{}' not found", id)),
    }
}

/// GET /api/places/:id/links - Directions, map, website and phone links
async fn get_place_links(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get(&id) {
        Some(place) => ApiResponse::ok(PlaceLinks::for_place(place)),
        None => not_found(format!("place '{}' not found", id)),
    }
}

/// GET /api/stats - Catalog counts and hero headline figures
async fn get_stats(State(state): State<AppState>) -> Response {
    ApiResponse::ok(StatsResponse {
        catalog: CatalogStats::compute(state.catalog.places()),
        headlines: HERO_HEADLINES
            .iter()
            .map(|&(value, caption)| Headline { value, caption })
            .collect(),
    })
}

/// GET /api/filters - Selector options, sentinels first
async fn get_filters(State(state): State<AppState>) -> Response {
    ApiResponse::ok(FiltersResponse {
        districts: state.catalog.district_options(),
        types: Catalog::type_options(),
    })
}

/// GET / - Serve index.html
async fn serve_index() -> impl IntoResponse {
    Html(include_str!("../web/index.html"))
}

pub fn router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/health", get(health_check))
        .route("/places", get(list_places))
        .route("/places/:id", get(get_place))
        .route("/places/:id/links", get(get_place_links))
        .route("/stats", get(get_stats))
        .route("/filters", get(get_filters))
        .with_state(state);

    Router::new()
        .route("/", get(serve_index))
        .nest("/api", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(AppState::new(Catalog::builtin().unwrap()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let (status, body) = get_json("/api/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"], "OK");
    }

    #[tokio::test]
    async fn test_places_unfiltered_returns_catalog() {
        let total = Catalog::builtin().unwrap().len();
        let (status, body) = get_json("/api/places").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["count"], total);
        assert_eq!(body["data"]["summary"], format!("Showing {} places", total));
    }

    #[tokio::test]
    async fn test_places_filtered_by_type_and_query() {
        let (_, body) = get_json("/api/places?district=All%20Districts&type=Mosque&q=mecca").await;
        let places = body["data"]["places"].as_array().unwrap();
        assert!(!places.is_empty());
        for place in places {
            assert_eq!(place["type"], "Mosque");
            assert!(place["badge"]["css"].as_str().unwrap().contains("green"));
        }
    }

    #[tokio::test]
    async fn test_place_detail_and_missing() {
        let (status, body) = get_json("/api/places/tirumala-venkateswara").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body["data"]["links"]["directions"],
            "https://www.google.com/maps/dir//13.6833,79.3474"
        );

        let (status, body) = get_json("/api/places/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["success"], false);
    }

    #[tokio::test]
    async fn test_filters_start_with_sentinels() {
        let (_, body) = get_json("/api/filters").await;
        assert_eq!(body["data"]["districts"][0], "All Districts");
        assert_eq!(body["data"]["types"][0], "All Types");
    }

    #[tokio::test]
    async fn test_index_page_ignores_stale_results_and_inline_handlers() {
        let response = app()
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let page = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(page.contains("if (request !== latestRequest) return;"));
        assert!(page.contains(r#"data-url="${esc(links.phone)}""#));
        assert!(!page.contains("onclick="));
    }
}

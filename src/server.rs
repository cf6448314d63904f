use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::get,
    Router,
};
use metrics::{counter, describe_counter, describe_gauge, gauge};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::error::Result;
use crate::page::render_index;
use crate::query::{Bounds, QueryService};

pub const INVALID_LOOKUP: &str = "Invalid generation or index";

// --- Types ---

#[derive(Clone)]
pub struct AppState {
    pub service: QueryService,
    pub bounds: Bounds,
    // Rendered once at startup; bounds never change.
    pub index_html: Arc<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    fn invalid_lookup() -> Self {
        Self {
            error: INVALID_LOOKUP.to_string(),
        }
    }
}

impl AppState {
    /// Fails when bounds cannot be computed, which aborts startup.
    pub fn new(service: QueryService) -> Result<Self> {
        let bounds = service.bounds()?;
        let index_html = Arc::new(render_index(&bounds));
        gauge!("genview_generations_loaded", service.generation_count() as f64);
        Ok(Self {
            service,
            bounds,
            index_html,
        })
    }
}

pub fn describe_metrics() {
    describe_counter!(
        "genview_index_requests_total",
        "Index page renders served"
    );
    describe_counter!(
        "genview_chromosome_requests_total",
        "Chromosome lookups by outcome"
    );
    describe_gauge!(
        "genview_generations_loaded",
        "Generations parsed from the run log"
    );
}

// --- App Factory ---

pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/chromosome", get(get_chromosome))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    counter!("genview_index_requests_total", 1);
    Html(state.index_html.as_ref().clone())
}

async fn get_chromosome(
    State(state): State<AppState>,
    params: std::result::Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Response {
    let pairs = match params {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            debug!("Rejected query string: {}", e);
            return bad_request();
        }
    };

    let (generation, index) = match (
        parse_param(first_value(&pairs, "generation")),
        parse_param(first_value(&pairs, "index")),
    ) {
        (Some(generation), Some(index)) => (generation, index),
        _ => {
            debug!("Rejected lookup with params {:?}", pairs);
            return bad_request();
        }
    };

    match state.service.get_chromosome(generation, index) {
        Ok(entry) => {
            counter!("genview_chromosome_requests_total", 1, "outcome" => "hit");
            Json(entry).into_response()
        }
        Err(e) => {
            counter!("genview_chromosome_requests_total", 1, "outcome" => "miss");
            debug!("{}", e);
            // The error body keeps the default 200 status.
            Json(ErrorBody::invalid_lookup()).into_response()
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "generations": state.service.generation_count(),
        "bounds": state.bounds,
    }))
}

fn bad_request() -> Response {
    counter!("genview_chromosome_requests_total", 1, "outcome" => "bad_request");
    (StatusCode::BAD_REQUEST, Json(ErrorBody::invalid_lookup())).into_response()
}

// Repeated keys resolve to their first occurrence.
fn first_value<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_param(value: Option<&str>) -> Option<i64> {
    value?.trim().parse().ok()
}

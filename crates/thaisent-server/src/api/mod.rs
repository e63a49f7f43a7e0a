mod demo;
mod predict;

use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderName, Method},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use thaisent_core::Sentiment;
use thaisent_model::SentimentModel;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

#[derive(Clone)]
pub struct AppState {
    pub model: Arc<SentimentModel>,
}

#[derive(Debug, Serialize)]
struct HealthData {
    status: &'static str,
    model: &'static str,
    labels: Vec<Sentiment>,
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/predict", get(predict::usage).post(predict::predict))
        .route("/demo", get(demo::page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

/// Health probe. No side effects; the model is loaded before the router
/// exists, so this always reports ok.
async fn health(State(state): State<AppState>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        model: "loaded",
        labels: state.model.labels().to_vec(),
    })
}

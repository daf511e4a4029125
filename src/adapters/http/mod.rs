pub mod render;
pub mod routes;
pub mod state;

use axum::{extract::DefaultBodyLimit, routing::post, Router};

use crate::adapters::http::state::HttpState;

/// Upload size cap. Leaf photos are a few MB at most.
const MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

pub fn router(state: HttpState) -> Router {
    Router::new()
        .route("/predict", post(routes::predict))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .with_state(state)
}

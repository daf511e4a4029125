use std::sync::Arc;
use tower_http::services::ServeDir;

use apple_leaf_onnx_web::adapters::{
    advice::store::EmbeddedAdviceStore,
    http::{router, state::HttpState},
    onnx::classifier::OnnxLeafClassifier,
};
use apple_leaf_onnx_web::application::services::DiagnosisService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info");
    }
    tracing_subscriber::fmt::init();

    // Model load is fatal: no classifier, no traffic.
    let model_path =
        std::env::var("MODEL_PATH").unwrap_or_else(|_| "apple_disease_model.onnx".into());
    tracing::info!("Loading leaf classifier from {}", model_path);
    let classifier = Arc::new(OnnxLeafClassifier::load(&model_path)?);
    tracing::info!("Model loaded");

    let advice = Arc::new(EmbeddedAdviceStore::load()?);
    let diagnosis = Arc::new(DiagnosisService::new(classifier, advice));

    let state = HttpState { diagnosis };

    // The upload form and its assets come straight from ./static.
    let app = router(state).fallback_service(ServeDir::new("static"));

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(5000);
    let addr = format!("0.0.0.0:{}", port);

    tracing::info!("🚀 Leaf diagnosis server listening at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

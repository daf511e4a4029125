//! End-to-end tests of the /predict route with a stub classifier behind
//! the port, so no model artifact is needed.

use std::path::Path;
use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use tower::ServiceExt;

use apple_leaf_onnx_web::adapters::{
    advice::store::EmbeddedAdviceStore,
    http::{router, state::HttpState},
};
use apple_leaf_onnx_web::application::{ports::ClassifierPort, services::DiagnosisService};
use apple_leaf_onnx_web::domain::{
    errors::{DomainError, DomainResult},
    prediction::Prediction,
};

const BOUNDARY: &str = "leaf-test-boundary";

/// Stub returning a fixed healthy prediction, counting invocations.
struct HealthyStub {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ClassifierPort for HealthyStub {
    async fn classify(&self, _image_path: &Path) -> DomainResult<Prediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(Prediction::from_distribution([0.01, 0.02, 0.035, 0.9321]))
    }
}

/// Stub that always fails, counting invocations.
struct FailingStub {
    calls: Arc<AtomicUsize>,
}

#[async_trait]
impl ClassifierPort for FailingStub {
    async fn classify(&self, _image_path: &Path) -> DomainResult<Prediction> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(DomainError::Inference("corrupt image data".into()))
    }
}

fn app(classifier: Arc<dyn ClassifierPort>) -> Router {
    let advice = Arc::new(EmbeddedAdviceStore::load().unwrap());
    let diagnosis = Arc::new(DiagnosisService::new(classifier, advice));
    router(HttpState { diagnosis })
}

fn healthy_app() -> (Router, Arc<AtomicUsize>) {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = app(Arc::new(HealthyStub { calls: calls.clone() }));
    (app, calls)
}

/// name, optional filename, payload.
type Field<'a> = (&'a str, Option<&'a str>, &'a [u8]);

fn multipart_request(fields: &[Field<'_>]) -> Request<Body> {
    let mut body: Vec<u8> = Vec::new();
    for (name, filename, data) in fields {
        body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
        match filename {
            Some(fname) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{name}\"; filename=\"{fname}\"\r\n\
                     Content-Type: image/jpeg\r\n\r\n"
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
            ),
        }
        body.extend_from_slice(data);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(
            "content-type",
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[tokio::test]
async fn prediction_renders_localized_card() {
    let (app, _) = healthy_app();
    let (status, body) = send(
        &app,
        multipart_request(&[
            ("lang", None, b"en"),
            ("file", Some("leaf.jpg"), b"fake image bytes"),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("93.21"));
    assert!(body.contains("Healthy"));

    // All four classes, totalling ~100%.
    for name in ["Apple Scab", "Black Rot", "Cedar Apple Rust"] {
        assert!(body.contains(name), "missing probability row for {name}");
    }
    let total = 1.0 + 2.0 + 3.5 + 93.21_f32;
    assert!((total - 100.0).abs() < 1.0);
}

#[tokio::test]
async fn missing_file_is_client_error_without_classifier_call() {
    let (app, calls) = healthy_app();
    let (status, body) = send(&app, multipart_request(&[("lang", None, b"en")])).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.contains("No file uploaded"));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn unknown_locale_behaves_like_english() {
    let (app, _) = healthy_app();
    let french = multipart_request(&[
        ("lang", None, b"fr"),
        ("file", Some("leaf.jpg"), b"fake image bytes"),
    ]);
    let english = multipart_request(&[
        ("lang", None, b"en"),
        ("file", Some("leaf.jpg"), b"fake image bytes"),
    ]);

    let (fr_status, fr_body) = send(&app, french).await;
    let (en_status, en_body) = send(&app, english).await;

    assert_eq!(fr_status, StatusCode::OK);
    assert_eq!(fr_status, en_status);
    assert_eq!(fr_body, en_body);
}

#[tokio::test]
async fn hindi_locale_renders_translated_names() {
    let (app, _) = healthy_app();
    let (status, body) = send(
        &app,
        multipart_request(&[
            ("lang", None, b"hi"),
            ("file", Some("leaf.jpg"), b"fake image bytes"),
        ]),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.contains("93.21"));
    assert!(body.contains("स्वस्थ पत्ता"));
}

#[tokio::test]
async fn classifier_failure_is_server_error_with_error_fragment() {
    let calls = Arc::new(AtomicUsize::new(0));
    let app = app(Arc::new(FailingStub { calls: calls.clone() }));

    let (status, body) = send(
        &app,
        multipart_request(&[("file", Some("leaf.jpg"), b"not an image")]),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body.contains("alert-danger"));
    // No partial result card, and no raw error detail leaked.
    assert!(!body.contains("result-card"));
    assert!(!body.contains("corrupt image data"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn repeated_classification_is_deterministic() {
    let (app, calls) = healthy_app();
    let request = || {
        multipart_request(&[
            ("lang", None, b"te"),
            ("file", Some("leaf.jpg"), b"fake image bytes"),
        ])
    };

    let (first_status, first_body) = send(&app, request()).await;
    let (second_status, second_body) = send(&app, request()).await;

    assert_eq!(first_status, StatusCode::OK);
    assert_eq!(first_status, second_status);
    assert_eq!(first_body, second_body);
    assert_eq!(calls.load(Ordering::SeqCst), 2);
}

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{Html, IntoResponse},
};
use std::io::Write;
use tempfile::NamedTempFile;

use crate::adapters::http::{render, state::HttpState};
use crate::domain::condition::Locale;

/// `POST /predict` — multipart upload with a required `file` field and an
/// optional `lang` field. Pipeline per request: scratch write → classify →
/// advice lookup → render. The scratch file is deleted on every exit path
/// when the `NamedTempFile` drops.
pub async fn predict(State(st): State<HttpState>, mut multipart: Multipart) -> impl IntoResponse {
    let mut lang: Option<String> = None;
    let mut file: Option<Vec<u8>> = None;

    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().map(str::to_owned);
                match name.as_deref() {
                    Some("lang") => lang = field.text().await.ok(),
                    Some("file") => file = field.bytes().await.ok().map(|b| b.to_vec()),
                    _ => {}
                }
            }
            Ok(None) => break,
            Err(e) => {
                return (StatusCode::BAD_REQUEST, format!("malformed upload: {e}")).into_response()
            }
        }
    }

    // Unrecognized languages silently fall back to English.
    let locale = Locale::resolve(lang.as_deref());

    let Some(bytes) = file else {
        return (StatusCode::BAD_REQUEST, "No file uploaded").into_response();
    };

    let scratch = match write_scratch(&bytes) {
        Ok(f) => f,
        Err(e) => {
            tracing::error!("scratch file write failed: {e}");
            return internal_error();
        }
    };

    match st.diagnosis.diagnose(scratch.path(), locale).await {
        Ok(report) => Html(render::result_card(&report)).into_response(),
        Err(e) => {
            // Log the cause, return a generic message to the caller.
            tracing::error!("diagnosis failed: {e}");
            internal_error()
        }
    }
}

fn write_scratch(bytes: &[u8]) -> std::io::Result<NamedTempFile> {
    let mut file = NamedTempFile::new()?;
    file.write_all(bytes)?;
    file.flush()?;
    Ok(file)
}

fn internal_error() -> axum::response::Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Html(render::error_fragment("analysis failed, please try again")),
    )
        .into_response()
}

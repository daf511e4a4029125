use std::sync::Arc;

use crate::application::services::DiagnosisService;

/// Shared state for the axum handlers: the use-case services, constructed
/// once at startup and cloned per request.
#[derive(Clone)]
pub struct HttpState {
    pub diagnosis: Arc<DiagnosisService>,
}

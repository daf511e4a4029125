use async_trait::async_trait;
use std::path::Path;

use crate::domain::{
    advice::{AdviceEntry, UiStrings},
    condition::{LeafCondition, Locale},
    errors::DomainResult,
    prediction::Prediction,
};

/// Image classification backend. One call per request; the call is atomic
/// and side-effect free, any failure surfaces as a single inference error.
#[async_trait]
pub trait ClassifierPort: Send + Sync {
    async fn classify(&self, image_path: &Path) -> DomainResult<Prediction>;
}

/// Read-only advice lookup. Total over the declared condition set: lookup
/// misses degrade to placeholder content instead of failing.
pub trait AdviceStorePort: Send + Sync {
    fn advice(&self, condition: LeafCondition, locale: Locale) -> AdviceEntry;
    fn display_name(&self, condition: LeafCondition, locale: Locale) -> String;
    fn ui(&self, locale: Locale) -> UiStrings;
}

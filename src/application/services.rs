use std::path::Path;
use std::sync::Arc;

use crate::{
    application::{
        dto::{DiagnosisReport, ProbabilityRow},
        ports::{AdviceStorePort, ClassifierPort},
    },
    domain::{
        condition::{LeafCondition, Locale},
        errors::DomainResult,
        prediction::percent,
    },
};

/// Orchestrates one diagnosis: classify the uploaded image, look up the
/// localized advice, assemble the report. The classifier is invoked exactly
/// once per request; any failure short-circuits, advice lookups never fail.
#[derive(Clone)]
pub struct DiagnosisService {
    classifier: Arc<dyn ClassifierPort>,
    advice: Arc<dyn AdviceStorePort>,
}

impl DiagnosisService {
    pub fn new(classifier: Arc<dyn ClassifierPort>, advice: Arc<dyn AdviceStorePort>) -> Self {
        Self { classifier, advice }
    }

    pub async fn diagnose(&self, image_path: &Path, locale: Locale) -> DomainResult<DiagnosisReport> {
        let prediction = self.classifier.classify(image_path).await?;

        let advice = self.advice.advice(prediction.condition, locale);
        let ui = self.advice.ui(locale);

        // Probability rows stay in the model's class ordering.
        let rows = LeafCondition::ALL
            .iter()
            .zip(prediction.distribution.iter())
            .map(|(&condition, &p)| ProbabilityRow {
                name: self.advice.display_name(condition, locale),
                percent: percent(p),
            })
            .collect();

        Ok(DiagnosisReport {
            locale,
            prediction,
            advice,
            ui,
            rows,
        })
    }
}

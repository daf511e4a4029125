use serde::{Deserialize, Serialize};

use crate::domain::{
    advice::{AdviceEntry, UiStrings},
    condition::Locale,
    prediction::Prediction,
};

/// One row of the all-class probability list. Rows keep the model's fixed
/// class ordering, never confidence order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbabilityRow {
    pub name: String,
    pub percent: f32,
}

/// Everything the renderer needs for one diagnosis. Ephemeral: built per
/// request, dropped with the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosisReport {
    pub locale: Locale,
    pub prediction: Prediction,
    pub advice: AdviceEntry,
    pub ui: UiStrings,
    pub rows: Vec<ProbabilityRow>,
}

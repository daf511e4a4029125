use serde::{Deserialize, Serialize};

/// Agronomic advice for one (condition, locale) pair. Loaded once at
/// startup, never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceEntry {
    /// Localized disease display name.
    pub disease: String,
    pub precautions: Vec<String>,
    pub fertilizers: Vec<String>,
    pub pesticides: Vec<String>,
}

impl AdviceEntry {
    /// Degraded entry for a lookup miss. Prediction success is never blocked
    /// by missing translation data.
    pub fn unknown() -> Self {
        Self {
            disease: "Unknown".to_string(),
            precautions: Vec::new(),
            fertilizers: Vec::new(),
            pesticides: Vec::new(),
        }
    }
}

/// Localized section headers of the result card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionHeaders {
    pub prec: String,
    pub fert: String,
    pub pest: String,
}

/// Localized chrome strings of the result card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiStrings {
    pub match_label: String,
    pub analysis_badge: String,
    pub prob_header: String,
    pub headers: SectionHeaders,
}

impl UiStrings {
    pub fn english() -> Self {
        Self {
            match_label: "Match".to_string(),
            analysis_badge: "Analysis Complete".to_string(),
            prob_header: "\u{1F4CA} All Class Probabilities:".to_string(),
            headers: SectionHeaders {
                prec: "Precautions".to_string(),
                fert: "Fertilizers".to_string(),
                pest: "Pesticides".to_string(),
            },
        }
    }
}

use serde::{Deserialize, Serialize};

/// Leaf conditions the classifier can report. The variant order is the
/// model's output ordering and must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeafCondition {
    AppleScab,
    BlackRot,
    CedarAppleRust,
    Healthy,
}

impl LeafCondition {
    pub const ALL: [LeafCondition; 4] = [
        LeafCondition::AppleScab,
        LeafCondition::BlackRot,
        LeafCondition::CedarAppleRust,
        LeafCondition::Healthy,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Self::AppleScab => "apple_scab",
            Self::BlackRot => "black_rot",
            Self::CedarAppleRust => "cedar_apple_rust",
            Self::Healthy => "healthy",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.key() == key)
    }

    /// English display name, also the fallback when a locale has no entry.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::AppleScab => "Apple Scab",
            Self::BlackRot => "Black Rot",
            Self::CedarAppleRust => "Cedar Apple Rust",
            Self::Healthy => "Healthy",
        }
    }
}

/// Supported response languages. English is the default and the fallback
/// for anything unrecognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Hi,
    Te,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::En, Locale::Hi, Locale::Te];

    pub fn key(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Hi => "hi",
            Self::Te => "te",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.key() == key)
    }

    /// Resolve an optional request parameter. Unknown or absent values fall
    /// back to English silently; a wrong `lang` is never a request error.
    pub fn resolve(param: Option<&str>) -> Self {
        param.and_then(Self::from_key).unwrap_or(Self::En)
    }
}

impl Default for Locale {
    fn default() -> Self {
        Self::En
    }
}

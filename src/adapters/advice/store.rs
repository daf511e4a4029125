use std::collections::HashMap;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::warn;

use crate::application::ports::AdviceStorePort;
use crate::domain::{
    advice::{AdviceEntry, UiStrings},
    condition::{LeafCondition, Locale},
};

/// Embedded advice resource. One normalized record per (label, locale) pair
/// plus per-locale UI chrome strings.
const ADVICE_JSON: &str = include_str!("../../../data/advice.json");

#[derive(Debug, Deserialize)]
struct AdviceFile {
    ui: HashMap<String, UiStrings>,
    advice: Vec<AdviceRecord>,
}

#[derive(Debug, Deserialize)]
struct AdviceRecord {
    label: String,
    locale: String,
    disease: String,
    precautions: Vec<String>,
    fertilizers: Vec<String>,
    pesticides: Vec<String>,
}

/// Read-only advice table, parsed once at startup and shared across
/// requests without locking. Lookups are O(1) by (condition, locale) and
/// never fail: misses degrade to placeholder content.
pub struct EmbeddedAdviceStore {
    entries: HashMap<(LeafCondition, Locale), AdviceEntry>,
    ui: HashMap<Locale, UiStrings>,
}

impl EmbeddedAdviceStore {
    pub fn load() -> Result<Self> {
        Self::from_json(ADVICE_JSON)
    }

    fn from_json(json: &str) -> Result<Self> {
        let file: AdviceFile =
            serde_json::from_str(json).context("parsing embedded advice data")?;

        let mut entries = HashMap::new();
        for record in file.advice {
            let Some(condition) = LeafCondition::from_key(&record.label) else {
                warn!("advice data: skipping unknown label '{}'", record.label);
                continue;
            };
            let Some(locale) = Locale::from_key(&record.locale) else {
                warn!("advice data: skipping unknown locale '{}'", record.locale);
                continue;
            };
            entries.insert(
                (condition, locale),
                AdviceEntry {
                    disease: record.disease,
                    precautions: record.precautions,
                    fertilizers: record.fertilizers,
                    pesticides: record.pesticides,
                },
            );
        }

        let mut ui = HashMap::new();
        for (key, strings) in file.ui {
            let Some(locale) = Locale::from_key(&key) else {
                warn!("advice data: skipping UI strings for unknown locale '{key}'");
                continue;
            };
            ui.insert(locale, strings);
        }

        Ok(Self { entries, ui })
    }
}

impl AdviceStorePort for EmbeddedAdviceStore {
    fn advice(&self, condition: LeafCondition, locale: Locale) -> AdviceEntry {
        self.entries
            .get(&(condition, locale))
            .cloned()
            .unwrap_or_else(AdviceEntry::unknown)
    }

    fn display_name(&self, condition: LeafCondition, locale: Locale) -> String {
        self.entries
            .get(&(condition, locale))
            .map(|e| e.disease.clone())
            .unwrap_or_else(|| condition.display_name().to_string())
    }

    fn ui(&self, locale: Locale) -> UiStrings {
        self.ui
            .get(&locale)
            .cloned()
            .unwrap_or_else(UiStrings::english)
    }
}

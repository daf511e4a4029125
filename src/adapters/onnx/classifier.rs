use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::adapters::onnx::leaf_engine::OnnxLeafEngine;
use crate::application::ports::ClassifierPort;
use crate::domain::{
    errors::{DomainError, DomainResult},
    prediction::Prediction,
};

/// `ClassifierPort` backed by the ONNX engine. The session is shared behind
/// a mutex; decode + inference run on the blocking pool so concurrent
/// requests do not stall the async runtime.
pub struct OnnxLeafClassifier {
    engine: Arc<Mutex<OnnxLeafEngine>>,
}

impl OnnxLeafClassifier {
    /// Load the model artifact. Failure here is fatal for the process: the
    /// service must not start without a usable classifier.
    pub fn load(model_path: &str) -> anyhow::Result<Self> {
        let engine = OnnxLeafEngine::load(model_path)?;
        Ok(Self {
            engine: Arc::new(Mutex::new(engine)),
        })
    }
}

#[async_trait]
impl ClassifierPort for OnnxLeafClassifier {
    async fn classify(&self, image_path: &Path) -> DomainResult<Prediction> {
        let engine = self.engine.clone();
        let path: PathBuf = image_path.to_path_buf();

        let result = tokio::task::spawn_blocking(move || -> anyhow::Result<Prediction> {
            let rgb = image::open(&path)?.to_rgb8();
            let mut engine = engine.lock().unwrap();
            let distribution = engine.infer(&rgb)?;
            Ok(Prediction::from_distribution(distribution))
        })
        .await
        .map_err(|e| DomainError::Inference(e.to_string()))?;

        result.map_err(|e| DomainError::Inference(e.to_string()))
    }
}

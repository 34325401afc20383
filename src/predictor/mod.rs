//! Energy Predictor - wraps the trained regression artifact
//!
//! Lifecycle: Unloaded -> Loaded. The artifact is loaded at startup if it is
//! present, otherwise on the first prediction. Once loaded it stays loaded
//! for the life of the process. A missing artifact is reported on every call
//! until an operator supplies one.

pub mod model;

pub use model::{DecisionTree, ModelError, RegressionModel, TreeNode, N_FEATURES};

use crate::error::PredictError;
use crate::utils::round_to;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictorState {
    Unloaded,
    Loaded,
}

/// Energy usage predictor backed by a model file
#[derive(Debug)]
pub struct EnergyPredictor {
    model_path: PathBuf,
    model: OnceLock<Arc<RegressionModel>>,
}

impl EnergyPredictor {
    /// Create an Unloaded predictor; nothing is read yet
    pub fn new(model_path: impl Into<PathBuf>) -> Self {
        Self {
            model_path: model_path.into(),
            model: OnceLock::new(),
        }
    }

    /// Create a predictor and try to load the artifact immediately.
    ///
    /// A missing or unreadable artifact is logged and leaves the predictor
    /// Unloaded; the next prediction tries again.
    pub fn with_startup_load(model_path: impl Into<PathBuf>) -> Self {
        let predictor = Self::new(model_path);
        match predictor.load() {
            Ok(model) => tracing::info!(
                "Model loaded from {:?} ({})",
                predictor.model_path,
                model.describe()
            ),
            Err(e) => tracing::warn!("{}", e),
        }
        predictor
    }

    /// Predictor that is already Loaded with `model`
    pub fn from_model(model: RegressionModel) -> Self {
        let predictor = Self::new(PathBuf::new());
        let _ = predictor.model.set(Arc::new(model));
        predictor
    }

    pub fn model_path(&self) -> &Path {
        &self.model_path
    }

    pub fn state(&self) -> PredictorState {
        if self.model.get().is_some() {
            PredictorState::Loaded
        } else {
            PredictorState::Unloaded
        }
    }

    /// Load the artifact if not already Loaded. Idempotent.
    pub fn load(&self) -> Result<Arc<RegressionModel>, PredictError> {
        if let Some(model) = self.model.get() {
            return Ok(model.clone());
        }

        let model = Arc::new(read_model(&self.model_path)?);
        // A concurrent load may have won; either copy is the same artifact
        Ok(self.model.get_or_init(|| model).clone())
    }

    /// Predicted energy use (kWh), rounded to 4 decimal places
    pub fn predict(&self, temperature: f64, humidity: f64, hour: f64) -> Result<f64, PredictError> {
        let model = self.load()?;

        let value = model
            .predict(&[temperature, humidity, hour])
            .map_err(|e| PredictError::Internal(e.to_string()))?;

        tracing::debug!(
            "Predicted {:.4} kWh for temperature={} humidity={} hour={}",
            value,
            temperature,
            humidity,
            hour
        );

        Ok(round_to(value, 4))
    }
}

fn read_model(path: &Path) -> Result<RegressionModel, PredictError> {
    if !path.exists() {
        return Err(PredictError::ServiceUnavailable(format!(
            "model not found at {:?}; train a model and place it there",
            path
        )));
    }

    let contents = std::fs::read_to_string(path)
        .map_err(|e| PredictError::ServiceUnavailable(format!("failed to read {:?}: {}", path, e)))?;

    serde_json::from_str(&contents)
        .map_err(|e| PredictError::ServiceUnavailable(format!("failed to parse {:?}: {}", path, e)))
}

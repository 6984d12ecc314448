//! Loading and scoring of the pre-trained model artifact.
//!
//! The artifact is a single JSON file produced by the (external) training
//! pipeline. It carries everything the serving side needs: the ordered
//! class labels, the categorical domains each field was trained on, the
//! budget bounds, and the weights of a multinomial linear classifier.
//! This module never trains anything; it only loads and evaluates.

use std::fs;
use std::io;
use std::path::Path;

use log::info;
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use crate::predictor::{InferenceError, InputRecord};

/// Errors raised while loading or validating a model artifact.
///
/// These are fatal at process start; they are never produced per-request.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read model artifact: {0}")]
    Io(#[from] io::Error),
    #[error("failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid model artifact: {0}")]
    Invalid(String),
}

/// The categorical domains the classifier was trained on, in the fixed
/// column order the scoring function expects: age range, income level,
/// gender, ZIP code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryDomains {
    pub age_ranges: Vec<String>,
    pub income_levels: Vec<String>,
    pub genders: Vec<String>,
    pub zip_codes: Vec<String>,
}

impl CategoryDomains {
    /// One-hot width of the four categorical fields plus the budget column.
    pub fn feature_len(&self) -> usize {
        self.age_ranges.len()
            + self.income_levels.len()
            + self.genders.len()
            + self.zip_codes.len()
            + 1
    }
}

/// On-disk shape of the artifact. Weights are stored row-per-class so the
/// JSON stays readable by the training pipeline's tooling.
#[derive(Debug, Serialize, Deserialize)]
struct ModelArtifact {
    name: String,
    classes: Vec<String>,
    domains: CategoryDomains,
    budget_range: (f64, f64),
    weights: Vec<Vec<f32>>,
    bias: Vec<f32>,
}

/// An immutable, pre-trained classifier loaded once at startup.
///
/// `ModelStore` is `Send + Sync` and is shared read-only (behind an `Arc`)
/// for the process lifetime. Scoring is a pure function of the record, so
/// repeated calls with the same input return identical probabilities.
#[derive(Debug)]
pub struct ModelStore {
    name: String,
    classes: Vec<String>,
    domains: CategoryDomains,
    budget_range: (f64, f64),
    weights: Array2<f32>,
    bias: Array1<f32>,
}

impl ModelStore {
    /// Builds a store from its parts, validating shape consistency.
    ///
    /// # Errors
    /// Returns [`StoreError::Invalid`] if the class list or any domain is
    /// empty, the budget range is not a proper interval, or the weight
    /// matrix / bias vector do not match `classes × feature_len`.
    pub fn new(
        name: impl Into<String>,
        classes: Vec<String>,
        domains: CategoryDomains,
        budget_range: (f64, f64),
        weights: Vec<Vec<f32>>,
        bias: Vec<f32>,
    ) -> Result<Self, StoreError> {
        if classes.is_empty() {
            return Err(StoreError::Invalid("class list is empty".into()));
        }
        for (field, domain) in [
            ("age_ranges", &domains.age_ranges),
            ("income_levels", &domains.income_levels),
            ("genders", &domains.genders),
            ("zip_codes", &domains.zip_codes),
        ] {
            if domain.is_empty() {
                return Err(StoreError::Invalid(format!("domain '{}' is empty", field)));
            }
        }
        let (min, max) = budget_range;
        if !(min < max) {
            return Err(StoreError::Invalid(format!(
                "budget range [{}, {}] is not a proper interval",
                min, max
            )));
        }

        let feature_len = domains.feature_len();
        if weights.len() != classes.len() {
            return Err(StoreError::Invalid(format!(
                "weight matrix has {} rows, expected one per class ({})",
                weights.len(),
                classes.len()
            )));
        }
        if let Some(row) = weights.iter().find(|row| row.len() != feature_len) {
            return Err(StoreError::Invalid(format!(
                "weight row has {} columns, expected {}",
                row.len(),
                feature_len
            )));
        }
        if bias.len() != classes.len() {
            return Err(StoreError::Invalid(format!(
                "bias vector has {} entries, expected {}",
                bias.len(),
                classes.len()
            )));
        }

        let flat: Vec<f32> = weights.into_iter().flatten().collect();
        let weights = Array2::from_shape_vec((classes.len(), feature_len), flat)
            .map_err(|e| StoreError::Invalid(e.to_string()))?;

        Ok(Self {
            name: name.into(),
            classes,
            domains,
            budget_range,
            weights,
            bias: Array1::from_vec(bias),
        })
    }

    /// Loads the artifact from a JSON file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let artifact: ModelArtifact = serde_json::from_str(&raw)?;
        let store = Self::new(
            artifact.name,
            artifact.classes,
            artifact.domains,
            artifact.budget_range,
            artifact.weights,
            artifact.bias,
        )?;
        info!(
            "loaded model '{}' from {:?}: {} classes, {} features",
            store.name,
            path,
            store.classes.len(),
            store.domains.feature_len()
        );
        Ok(store)
    }

    /// Writes the artifact back out as JSON. Used by artifact tooling and
    /// round-trip tests; the serving path never writes.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), StoreError> {
        let artifact = ModelArtifact {
            name: self.name.clone(),
            classes: self.classes.clone(),
            domains: self.domains.clone(),
            budget_range: self.budget_range,
            weights: self
                .weights
                .rows()
                .into_iter()
                .map(|row| row.to_vec())
                .collect(),
            bias: self.bias.to_vec(),
        };
        let raw = serde_json::to_string_pretty(&artifact)
            .map_err(StoreError::Parse)?;
        fs::write(path, raw)?;
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Ordered class labels; probability vectors are aligned to this order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn num_classes(&self) -> usize {
        self.classes.len()
    }

    pub fn domains(&self) -> &CategoryDomains {
        &self.domains
    }

    pub fn budget_range(&self) -> (f64, f64) {
        self.budget_range
    }

    /// Scores one record, returning one probability per class label.
    ///
    /// The vector is aligned to [`classes`](Self::classes) and sums to 1.
    ///
    /// # Errors
    /// Returns [`InferenceError::UnknownCategory`] if any categorical field
    /// is outside the trained domain. Budget bounds are the caller's
    /// concern; out-of-range budgets extrapolate rather than fail here.
    pub fn predict_proba(&self, record: &InputRecord) -> Result<Array1<f32>, InferenceError> {
        let x = self.encode(record)?;
        let logits = self.weights.dot(&x) + &self.bias;
        Ok(softmax(logits))
    }

    /// One-hot encodes the categorical fields in fixed column order and
    /// appends the min-max-normalized budget.
    fn encode(&self, record: &InputRecord) -> Result<Array1<f32>, InferenceError> {
        let mut x = Array1::zeros(self.domains.feature_len());
        let mut base = 0;
        for (field, value, domain) in [
            ("age_range", &record.age_range, &self.domains.age_ranges),
            ("income_level", &record.income_level, &self.domains.income_levels),
            ("gender", &record.gender, &self.domains.genders),
            ("zip_code", &record.zip_code, &self.domains.zip_codes),
        ] {
            let idx = domain.iter().position(|v| v == value).ok_or_else(|| {
                InferenceError::UnknownCategory {
                    field,
                    value: value.clone(),
                }
            })?;
            x[base + idx] = 1.0;
            base += domain.len();
        }
        let (min, max) = self.budget_range;
        x[base] = ((record.budget - min) / (max - min)) as f32;
        Ok(x)
    }
}

fn softmax(logits: Array1<f32>) -> Array1<f32> {
    // Shift by the max logit for numerical stability.
    let max = logits.iter().cloned().fold(f32::NEG_INFINITY, f32::max);
    let exp = logits.mapv(|v| (v - max).exp());
    let sum = exp.sum();
    exp / sum
}

use std::cmp::Ordering;
use std::sync::Arc;

use log::debug;
use ndarray::Array1;

use super::error::InferenceError;
use super::record::InputRecord;
use crate::store::ModelStore;

/// How many ranked classes a prediction carries at most.
pub const TOP_PREDICTIONS: usize = 3;

/// Scores submitted records against an immutable [`ModelStore`].
///
/// The store is an explicit dependency injected at construction and shared
/// by reference; the predictor itself holds no mutable state, so one
/// instance can serve any number of independent submissions.
///
/// # Example
/// ```
/// # use std::sync::Arc;
/// # use showroom::{CategoryDomains, InputRecord, ModelStore, Predictor};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// # let domains = CategoryDomains {
/// #     age_ranges: vec!["25–34".into()],
/// #     income_levels: vec!["Under $50,000".into()],
/// #     genders: vec!["Female".into()],
/// #     zip_codes: vec!["12345".into()],
/// # };
/// # let store = ModelStore::new(
/// #     "demo",
/// #     vec!["Sedan LX".into(), "SUV Max".into()],
/// #     domains,
/// #     (5_000.0, 100_000.0),
/// #     vec![vec![0.0; 5]; 2],
/// #     vec![0.4, 0.1],
/// # )?;
/// let predictor = Predictor::new(Arc::new(store));
/// let record = InputRecord::new("25–34", "Under $50,000", "Female", "12345", 25_000.0);
/// let prediction = predictor.predict(&record)?;
/// for entry in prediction.entries() {
///     println!("{}: {:.1}%", entry.label, entry.percentage());
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Predictor {
    store: Arc<ModelStore>,
}

impl Predictor {
    pub fn new(store: Arc<ModelStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &ModelStore {
        &self.store
    }

    /// Returns information about the loaded model.
    pub fn info(&self) -> super::PredictorInfo {
        super::PredictorInfo {
            model_name: self.store.name().to_string(),
            num_classes: self.store.num_classes(),
            class_labels: self.store.classes().to_vec(),
            budget_range: self.store.budget_range(),
        }
    }

    /// Scores one record and returns the ranked top classes.
    ///
    /// The record is validated against the model's trained domains before
    /// the store is called, so a bad category or an out-of-range budget
    /// surfaces as a typed [`InferenceError`] rather than an opaque scoring
    /// failure. The result holds `min(3, num_classes)` entries sorted by
    /// probability descending; ties keep the model's class order.
    pub fn predict(&self, record: &InputRecord) -> Result<Prediction, InferenceError> {
        self.validate(record)?;
        let proba = self.store.predict_proba(record)?;
        debug!(
            "scored record (budget {}, zip {}): probability mass over {} classes",
            record.budget,
            record.zip_code,
            proba.len()
        );
        Ok(Prediction::rank(self.store.classes(), &proba))
    }

    /// Allow-list check of every field against the trained domains.
    fn validate(&self, record: &InputRecord) -> Result<(), InferenceError> {
        let domains = self.store.domains();
        for (field, value, domain) in [
            ("age_range", &record.age_range, &domains.age_ranges),
            ("income_level", &record.income_level, &domains.income_levels),
            ("gender", &record.gender, &domains.genders),
            ("zip_code", &record.zip_code, &domains.zip_codes),
        ] {
            if !domain.iter().any(|v| v == value) {
                return Err(InferenceError::UnknownCategory {
                    field,
                    value: value.clone(),
                });
            }
        }
        let (min, max) = self.store.budget_range();
        if !(min..=max).contains(&record.budget) {
            return Err(InferenceError::BudgetOutOfRange {
                value: record.budget,
                min,
                max,
            });
        }
        Ok(())
    }
}

/// The ranked outcome of one submission: up to [`TOP_PREDICTIONS`] classes,
/// highest probability first.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    entries: Vec<RankedClass>,
}

impl Prediction {
    /// Ranks a probability vector aligned to `labels` and keeps the top
    /// entries. A stable descending sort means equal probabilities stay in
    /// the model's class order.
    fn rank(labels: &[String], proba: &Array1<f32>) -> Self {
        let mut entries: Vec<RankedClass> = labels
            .iter()
            .cloned()
            .zip(proba.iter().copied())
            .map(|(label, probability)| RankedClass { label, probability })
            .collect();
        entries.sort_by(|a, b| {
            b.probability
                .partial_cmp(&a.probability)
                .unwrap_or(Ordering::Equal)
        });
        entries.truncate(TOP_PREDICTIONS);
        Self { entries }
    }

    pub fn entries(&self) -> &[RankedClass] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One class label with its probability and display helpers.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedClass {
    pub label: String,
    pub probability: f32,
}

impl RankedClass {
    /// Probability as a percentage rounded to exactly one decimal place.
    pub fn percentage(&self) -> f64 {
        (self.probability as f64 * 1000.0).round() / 10.0
    }

    /// Qualitative display band for the percentage. Purely cosmetic; no
    /// other part of the system reads it.
    pub fn band(&self) -> ConfidenceBand {
        let pct = self.percentage();
        if pct >= 80.0 {
            ConfidenceBand::High
        } else if pct >= 50.0 {
            ConfidenceBand::Medium
        } else {
            ConfidenceBand::Low
        }
    }
}

/// Display band of a prediction percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceBand {
    High,
    Medium,
    Low,
}

impl ConfidenceBand {
    /// Lowercase name, used as a CSS class on the probability bar.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl std::fmt::Display for ConfidenceBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

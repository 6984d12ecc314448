mod error;
mod record;
#[allow(clippy::module_inception)]
mod predictor;

pub use error::InferenceError;
pub use predictor::{ConfidenceBand, Prediction, Predictor, RankedClass, TOP_PREDICTIONS};
pub use record::InputRecord;

/// Information about a predictor's loaded model.
#[derive(Debug, Clone)]
pub struct PredictorInfo {
    /// Name the training pipeline gave the artifact
    pub model_name: String,
    /// Number of class labels the model can predict
    pub num_classes: usize,
    /// The ordered class labels
    pub class_labels: Vec<String>,
    /// Inclusive budget bounds the model was trained on
    pub budget_range: (f64, f64),
}

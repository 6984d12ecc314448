/// Errors raised while scoring a submitted record.
///
/// Every variant maps to a user-visible message at the UI boundary; the
/// interaction then returns to the form. Nothing here is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InferenceError {
    /// A categorical field holds a value the model was not trained on.
    #[error("unknown {field} value '{value}': not among the model's trained categories")]
    UnknownCategory { field: &'static str, value: String },
    /// The budget falls outside the range the model was trained on.
    #[error("budget {value} is outside the supported range {min}–{max}")]
    BudgetOutOfRange { value: f64, min: f64, max: f64 },
    /// The model store failed internally while scoring.
    #[error("model scoring failed: {0}")]
    Model(String),
}

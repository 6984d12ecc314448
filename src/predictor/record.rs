/// One customer's answers, captured atomically on form submission.
///
/// A record is built once per submission, scored once, and discarded.
/// Field values are validated against the model's trained domains by
/// [`Predictor::predict`](super::Predictor::predict) before scoring.
///
/// ZIP codes are strings: the training pipeline treats them as a
/// categorical, not a number, and leading zeros are significant.
#[derive(Debug, Clone, PartialEq)]
pub struct InputRecord {
    pub age_range: String,
    pub income_level: String,
    pub gender: String,
    pub zip_code: String,
    pub budget: f64,
}

impl InputRecord {
    pub fn new(
        age_range: impl Into<String>,
        income_level: impl Into<String>,
        gender: impl Into<String>,
        zip_code: impl Into<String>,
        budget: f64,
    ) -> Self {
        Self {
            age_range: age_range.into(),
            income_level: income_level.into(),
            gender: gender.into(),
            zip_code: zip_code.into(),
            budget,
        }
    }
}

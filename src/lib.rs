//! Vehicle-model prediction from customer demographics.
//!
//! A pre-trained classifier artifact is loaded once from disk into a
//! [`ModelStore`], wrapped by a [`Predictor`] that validates submitted
//! records and ranks the top predicted vehicle models, and served through
//! a single-page web form ([`server::app`]).
//!
//! # Basic Usage
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use showroom::{CategoryDomains, InputRecord, ModelStore, Predictor};
//!
//! # let domains = CategoryDomains {
//! #     age_ranges: vec!["25–34".into()],
//! #     income_levels: vec!["Under $50,000".into()],
//! #     genders: vec!["Female".into()],
//! #     zip_codes: vec!["12345".into()],
//! # };
//! # let store = ModelStore::new(
//! #     "demo",
//! #     vec!["Sedan LX".into(), "SUV Max".into(), "Coupe S".into()],
//! #     domains,
//! #     (5_000.0, 100_000.0),
//! #     vec![vec![0.0; 5]; 3],
//! #     vec![0.6, 0.3, 0.1],
//! # )?;
//! // let store = ModelStore::load("vehicle_model.json")?;
//! let predictor = Predictor::new(Arc::new(store));
//!
//! let record = InputRecord::new("25–34", "Under $50,000", "Female", "12345", 25_000.0);
//! let prediction = predictor.predict(&record)?;
//!
//! for entry in prediction.entries() {
//!     println!("{}: {:.1}% ({})", entry.label, entry.percentage(), entry.band());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Thread Safety
//!
//! The [`ModelStore`] is immutable after load and the [`Predictor`] holds
//! no per-request state, so one `Arc<Predictor>` is shared by every
//! concurrent form submission without locking.

pub mod predictor;
pub mod server;
pub mod store;

pub use predictor::{
    ConfidenceBand, InferenceError, InputRecord, Prediction, Predictor, PredictorInfo,
    RankedClass, TOP_PREDICTIONS,
};
pub use server::{app, SharedPredictor};
pub use store::{CategoryDomains, ModelStore, StoreError};

pub fn init_logger() {
    env_logger::init();
}

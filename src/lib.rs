//! Student pass/fail predictor.
//!
//! A small web front end: study and sleep figures come in through an HTML
//! form, are turned into the five features a pre-trained classifier expects,
//! and the classifier's verdict is rendered back into the page.

pub mod config;
pub mod error;
pub mod features;
pub mod form;
pub mod model;
pub mod page;
pub mod routes;

pub use features::{derive_features, FeatureVector, RawInputs, SleepCategory};
pub use model::{Classifier, ModelHost, Outcome};

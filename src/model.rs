use std::fmt;
use std::fs;
use std::path::Path;

use linfa::traits::{Predict, PredictInplace};
use ndarray::{Array1, Array2};
use serde::Deserialize;

use crate::error::{ModelLoadError, PredictError};
use crate::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Anything that maps `[n, 5]` feature rows onto `n` labels in `{0, 1}`.
///
/// Implemented for every `Send + Sync` linfa model predicting `u8` labels
/// from an `Array2<f64>`.
pub trait Classifier: Send + Sync {
    fn classify(&self, features: &Array2<f64>) -> Array1<u8>;
}

impl<M> Classifier for M
where
    M: PredictInplace<Array2<f64>, Array1<u8>> + Send + Sync,
{
    fn classify(&self, features: &Array2<f64>) -> Array1<u8> {
        self.predict(features)
    }
}

/// On-disk form of a fitted classifier.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifierArtifact {
    #[serde(default)]
    pub feature_names: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

fn default_threshold() -> f64 {
    0.5
}

/// Fitted binary logistic regression over the five study/sleep features.
#[derive(Debug, Clone)]
pub struct LogisticClassifier {
    weights: Array1<f64>,
    intercept: f64,
    threshold: f64,
}

impl TryFrom<ClassifierArtifact> for LogisticClassifier {
    type Error = ModelLoadError;

    fn try_from(artifact: ClassifierArtifact) -> Result<Self, Self::Error> {
        if !artifact.feature_names.is_empty() && artifact.feature_names != FEATURE_NAMES {
            return Err(ModelLoadError::Invalid(format!(
                "feature order {:?} does not match {:?}",
                artifact.feature_names, FEATURE_NAMES
            )));
        }
        if artifact.coefficients.len() != FEATURE_COUNT {
            return Err(ModelLoadError::Invalid(format!(
                "expected {FEATURE_COUNT} coefficients, found {}",
                artifact.coefficients.len()
            )));
        }
        if !artifact.coefficients.iter().all(|c| c.is_finite()) || !artifact.intercept.is_finite() {
            return Err(ModelLoadError::Invalid(
                "coefficients and intercept must be finite".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&artifact.threshold) {
            return Err(ModelLoadError::Invalid(format!(
                "threshold {} is outside [0, 1]",
                artifact.threshold
            )));
        }

        Ok(Self {
            weights: Array1::from_vec(artifact.coefficients),
            intercept: artifact.intercept,
            threshold: artifact.threshold,
        })
    }
}

impl PredictInplace<Array2<f64>, Array1<u8>> for LogisticClassifier {
    fn predict_inplace(&self, x: &Array2<f64>, y: &mut Array1<u8>) {
        assert_eq!(
            x.nrows(),
            y.len(),
            "the number of data points must match the number of output targets"
        );

        let scores = x.dot(&self.weights) + self.intercept;
        for (label, score) in y.iter_mut().zip(scores.iter()) {
            *label = u8::from(sigmoid(*score) >= self.threshold);
        }
    }

    fn default_target(&self, x: &Array2<f64>) -> Array1<u8> {
        Array1::zeros(x.nrows())
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

/// Final verdict rendered back to the student.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn from_label(label: u8) -> Result<Self, PredictError> {
        match label {
            1 => Ok(Outcome::Pass),
            0 => Ok(Outcome::Fail),
            other => Err(PredictError::UnexpectedLabel(other)),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::Pass => "Pass",
            Outcome::Fail => "Fail",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The classifier loaded once at startup and shared read-only by every request.
pub struct ModelHost {
    classifier: Box<dyn Classifier>,
}

impl ModelHost {
    pub fn new(classifier: impl Classifier + 'static) -> Self {
        Self {
            classifier: Box::new(classifier),
        }
    }

    /// Reads and validates a JSON classifier artifact.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelLoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ModelLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let artifact: ClassifierArtifact =
            serde_json::from_str(&content).map_err(|source| ModelLoadError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        Ok(Self::new(LogisticClassifier::try_from(artifact)?))
    }

    /// Classifies one feature vector. Rows containing NaN or infinity are
    /// rejected before they reach the classifier.
    pub fn predict(&self, features: &FeatureVector) -> Result<Outcome, PredictError> {
        if let Some(index) = features.to_array().iter().position(|v| !v.is_finite()) {
            return Err(PredictError::NonFinite {
                feature: FEATURE_NAMES[index],
            });
        }

        let labels = self.classifier.classify(&features.to_row());
        let label = labels.iter().next().copied().ok_or(PredictError::EmptyPrediction)?;
        Outcome::from_label(label)
    }
}

impl fmt::Debug for ModelHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHost").finish_non_exhaustive()
    }
}

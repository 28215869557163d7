use ndarray::Array2;
use serde::Serialize;

/// Number of features the classifier consumes.
pub const FEATURE_COUNT: usize = 5;

/// Feature names in the exact column order the classifier was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "study_hours",
    "sleep_hours",
    "study_efficiency",
    "study_sleep_ratio",
    "sleep_category_encoded",
];

/// Raw, already-parsed values submitted by a student.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawInputs {
    pub study_hours: f64,
    pub sleep_hours: f64,
    pub marks: f64,
}

/// Ordinal sleep bucket used at training time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepCategory {
    Low = 0,
    Optimal = 1,
    High = 2,
}

impl SleepCategory {
    /// Buckets nightly sleep hours with inclusive bands.
    ///
    /// `[9, inf)` is High and `[6, 8]` is Optimal. Everything else is Low,
    /// including the uncovered gap `(8, 9)`: the deployed classifier was
    /// trained on exactly this encoding.
    pub fn from_hours(sleep_hours: f64) -> Self {
        if sleep_hours >= 9.0 {
            SleepCategory::High
        } else if (6.0..=8.0).contains(&sleep_hours) {
            SleepCategory::Optimal
        } else {
            SleepCategory::Low
        }
    }

    pub fn encoded(self) -> u8 {
        self as u8
    }
}

/// The five model inputs, in training order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureVector {
    pub study_hours: f64,
    pub sleep_hours: f64,
    pub study_efficiency: f64,
    pub study_sleep_ratio: f64,
    pub sleep_category_encoded: u8,
}

impl FeatureVector {
    pub fn to_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.study_hours,
            self.sleep_hours,
            self.study_efficiency,
            self.study_sleep_ratio,
            f64::from(self.sleep_category_encoded),
        ]
    }

    /// A single-row `[1, 5]` matrix, the shape the classifier predicts on.
    pub fn to_row(&self) -> Array2<f64> {
        let row = self.to_array();
        Array2::from_shape_fn((1, FEATURE_COUNT), |(_, col)| row[col])
    }
}

/// Maps raw inputs onto the feature vector the classifier expects.
///
/// Zero denominators are not errors: the affected ratio becomes `0.0`.
pub fn derive_features(inputs: &RawInputs) -> FeatureVector {
    let study_efficiency = if inputs.study_hours != 0.0 {
        inputs.marks / inputs.study_hours
    } else {
        0.0
    };

    let study_sleep_ratio = if inputs.sleep_hours != 0.0 {
        inputs.study_hours / inputs.sleep_hours
    } else {
        0.0
    };

    FeatureVector {
        study_hours: inputs.study_hours,
        sleep_hours: inputs.sleep_hours,
        study_efficiency,
        study_sleep_ratio,
        sleep_category_encoded: SleepCategory::from_hours(inputs.sleep_hours).encoded(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(study_hours: f64, sleep_hours: f64, marks: f64) -> RawInputs {
        RawInputs {
            study_hours,
            sleep_hours,
            marks,
        }
    }

    #[test]
    fn test_typical_student() {
        let v = derive_features(&inputs(5.0, 7.0, 50.0));
        assert_eq!(v.study_efficiency, 10.0);
        assert!((v.study_sleep_ratio - 5.0 / 7.0).abs() < 1e-12);
        assert_eq!(v.sleep_category_encoded, 1);

        let row = v.to_array();
        assert_eq!(row[0], 5.0);
        assert_eq!(row[1], 7.0);
        assert_eq!(row[2], 10.0);
        assert!((row[3] - 0.714).abs() < 1e-3);
        assert_eq!(row[4], 1.0);
    }

    #[test]
    fn test_zero_study_hours_guards_efficiency() {
        let v = derive_features(&inputs(0.0, 8.0, 40.0));
        assert_eq!(v.study_efficiency, 0.0);
        assert_eq!(v.study_sleep_ratio, 0.0);
        assert_eq!(v.sleep_category_encoded, 1);
    }

    #[test]
    fn test_negative_zero_counts_as_zero() {
        let v = derive_features(&inputs(-0.0, 7.0, 40.0));
        assert_eq!(v.study_efficiency, 0.0);
    }

    #[test]
    fn test_omitted_marks_and_long_sleep() {
        let v = derive_features(&inputs(4.0, 10.0, 0.0));
        assert_eq!(v.study_efficiency, 0.0);
        assert!((v.study_sleep_ratio - 0.4).abs() < 1e-12);
        assert_eq!(v.sleep_category_encoded, 2);
    }

    #[test]
    fn test_zero_sleep_guards_ratio() {
        let v = derive_features(&inputs(6.0, 0.0, 30.0));
        assert_eq!(v.study_efficiency, 5.0);
        assert_eq!(v.study_sleep_ratio, 0.0);
        assert_eq!(v.sleep_category_encoded, 0);
    }

    #[test]
    fn test_efficiency_ignores_marks_when_study_is_zero() {
        for marks in [0.0, 1.0, 99.5, -20.0] {
            assert_eq!(derive_features(&inputs(0.0, 7.0, marks)).study_efficiency, 0.0);
        }
    }

    #[test]
    fn test_sleep_bands() {
        let cases = [
            (0.0, SleepCategory::Low),
            (5.99, SleepCategory::Low),
            (6.0, SleepCategory::Optimal),
            (7.5, SleepCategory::Optimal),
            (8.0, SleepCategory::Optimal),
            (8.01, SleepCategory::Low),
            (8.5, SleepCategory::Low),
            (8.99, SleepCategory::Low),
            (9.0, SleepCategory::High),
            (14.0, SleepCategory::High),
            (-1.0, SleepCategory::Low),
        ];
        for (hours, expected) in cases {
            assert_eq!(SleepCategory::from_hours(hours), expected, "sleep_hours={hours}");
        }
    }

    #[test]
    fn test_gap_between_optimal_and_high_is_low() {
        let v = derive_features(&inputs(3.0, 8.5, 30.0));
        assert_eq!(v.sleep_category_encoded, 0);
    }

    #[test]
    fn test_nan_sleep_is_low() {
        assert_eq!(SleepCategory::from_hours(f64::NAN), SleepCategory::Low);
    }

    #[test]
    fn test_serializes_with_training_names() {
        let v = derive_features(&inputs(4.0, 10.0, 0.0));
        let json = serde_json::to_value(v).unwrap();
        assert_eq!(json["study_hours"], 4.0);
        assert_eq!(json["study_sleep_ratio"], 0.4);
        assert_eq!(json["sleep_category_encoded"], 2);
        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), FEATURE_NAMES.len());
        for name in FEATURE_NAMES {
            assert!(json.get(name).is_some(), "missing {name}");
        }
    }

    #[test]
    fn test_row_shape_and_order() {
        let v = derive_features(&inputs(2.0, 4.0, 12.0));
        let row = v.to_row();
        assert_eq!(row.shape(), &[1, FEATURE_COUNT]);
        assert_eq!(row.row(0).to_vec(), vec![2.0, 4.0, 6.0, 0.5, 0.0]);
    }
}

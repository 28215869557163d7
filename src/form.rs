use crate::error::InputParseFailure;
use crate::features::RawInputs;

/// The `/predict` form body as submitted, before any validation.
#[derive(Debug, Clone, Default)]
pub struct PredictForm {
    pub study_hours: Option<String>,
    pub sleep_hours: Option<String>,
    pub marks: Option<String>,
}

impl PredictForm {
    /// Collects the known fields from decoded key/value pairs.
    ///
    /// A repeated key keeps its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut form = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "study_hours" => &mut form.study_hours,
                "sleep_hours" => &mut form.sleep_hours,
                "marks" => &mut form.marks,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        form
    }

    /// Parses every field into a number.
    ///
    /// `marks` falls back to `0.0` only when the field is absent; a present
    /// but blank or non-numeric value is rejected like the other fields.
    pub fn parse(&self) -> Result<RawInputs, InputParseFailure> {
        let study_hours = required("study_hours", self.study_hours.as_deref())?;
        let sleep_hours = required("sleep_hours", self.sleep_hours.as_deref())?;
        let marks = match self.marks.as_deref() {
            Some(raw) => parse_number("marks", raw)?,
            None => 0.0,
        };

        Ok(RawInputs {
            study_hours,
            sleep_hours,
            marks,
        })
    }
}

fn required(field: &'static str, value: Option<&str>) -> Result<f64, InputParseFailure> {
    let raw = value.ok_or(InputParseFailure::Missing { field })?;
    parse_number(field, raw)
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, InputParseFailure> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| InputParseFailure::NotNumeric {
            field,
            value: raw.to_string(),
        })
}

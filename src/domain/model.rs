use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::utils::error::{Result, SizerError};
use crate::utils::validation::validate_range;

pub const MIN_HEIGHT_CM: f64 = 120.0;
pub const MAX_HEIGHT_CM: f64 = 220.0;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 200.0;

pub const DEFAULT_HEIGHT_CM: f64 = 170.0;
pub const DEFAULT_WEIGHT_KG: f64 = 70.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// The ordered size scale this gender's garments come in.
    pub fn scale(&self) -> &'static [SizeLabel; 7] {
        use SizeLabel::*;
        const MALE: [SizeLabel; 7] = [XS, S, M, L, XL, XXL, XXXL];
        const FEMALE: [SizeLabel; 7] = [XXS, XS, S, M, L, XL, XXL];
        match self {
            Gender::Male => &MALE,
            Gender::Female => &FEMALE,
        }
    }

    pub fn has_size(&self, label: SizeLabel) -> bool {
        self.scale().contains(&label)
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            other => Err(SizerError::InvalidConfigValueError {
                field: "gender".to_string(),
                value: other.to_string(),
                reason: "Expected 'male' or 'female'".to_string(),
            }),
        }
    }
}

/// Garment size codes, ordered smallest to largest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SizeLabel {
    #[serde(rename = "XXS")]
    XXS,
    #[serde(rename = "XS")]
    XS,
    #[serde(rename = "S")]
    S,
    #[serde(rename = "M")]
    M,
    #[serde(rename = "L")]
    L,
    #[serde(rename = "XL")]
    XL,
    #[serde(rename = "2XL")]
    XXL,
    #[serde(rename = "3XL")]
    XXXL,
}

impl SizeLabel {
    pub const ALL: [SizeLabel; 8] = [
        SizeLabel::XXS,
        SizeLabel::XS,
        SizeLabel::S,
        SizeLabel::M,
        SizeLabel::L,
        SizeLabel::XL,
        SizeLabel::XXL,
        SizeLabel::XXXL,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            SizeLabel::XXS => "XXS",
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "2XL",
            SizeLabel::XXXL => "3XL",
        }
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for SizeLabel {
    type Err = SizerError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_uppercase();
        let label = match normalized.as_str() {
            "XXS" => SizeLabel::XXS,
            "XS" => SizeLabel::XS,
            "S" => SizeLabel::S,
            "M" => SizeLabel::M,
            "L" => SizeLabel::L,
            "XL" => SizeLabel::XL,
            "2XL" | "XXL" => SizeLabel::XXL,
            "3XL" | "XXXL" => SizeLabel::XXXL,
            _ => {
                return Err(SizerError::InvalidConfigValueError {
                    field: "size".to_string(),
                    value: s.to_string(),
                    reason: "Expected one of XXS, XS, S, M, L, XL, 2XL, 3XL".to_string(),
                })
            }
        };
        Ok(label)
    }
}

/// Height and weight of one person, in centimeters and kilograms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub height_cm: f64,
    pub weight_kg: f64,
}

impl Default for Measurement {
    fn default() -> Self {
        Self {
            height_cm: DEFAULT_HEIGHT_CM,
            weight_kg: DEFAULT_WEIGHT_KG,
        }
    }
}

impl Measurement {
    /// Clamps both values into their supported domains, the way the input
    /// sliders do. Non-finite values fall back to the defaults.
    pub fn clamped(height_cm: f64, weight_kg: f64) -> Self {
        let height_cm = if height_cm.is_finite() {
            height_cm.clamp(MIN_HEIGHT_CM, MAX_HEIGHT_CM)
        } else {
            DEFAULT_HEIGHT_CM
        };
        let weight_kg = if weight_kg.is_finite() {
            weight_kg.clamp(MIN_WEIGHT_KG, MAX_WEIGHT_KG)
        } else {
            DEFAULT_WEIGHT_KG
        };
        Self {
            height_cm,
            weight_kg,
        }
    }

    /// Strict constructor: rejects non-finite or out-of-domain values.
    pub fn try_new(height_cm: f64, weight_kg: f64) -> Result<Self> {
        check_measurement("height_cm", height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
        check_measurement("weight_kg", weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
        Ok(Self {
            height_cm,
            weight_kg,
        })
    }
}

fn check_measurement(field: &str, value: f64, min: f64, max: f64) -> Result<()> {
    validate_range(field, value, min, max).map_err(|e| match e {
        SizerError::InvalidConfigValueError {
            field,
            value,
            reason,
        } => SizerError::InvalidMeasurementError {
            field,
            value,
            reason,
        },
        other => other,
    })
}

/// Reference body measurements for one size, all in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeChartEntry {
    pub top_length: f64,
    pub shoulder: f64,
    pub chest: f64,
    pub sleeve_length: f64,
    pub sleeve_bottom: f64,
    pub pants_length: f64,
    pub waist: f64,
    pub thigh: f64,
    pub pants_bottom: f64,
}

/// One user's opinion on a recommendation, as posted to the collection endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRecord {
    pub recommended_size: SizeLabel,
    pub actual_size: SizeLabel,
    pub height_cm: f64,
    pub weight_kg: f64,
    pub gender: Gender,
    pub client_ip: Option<String>,
    pub user_agent: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl FeedbackRecord {
    pub fn is_accurate(&self) -> bool {
        self.recommended_size == self.actual_size
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackOutcome {
    Submitted,
    Skipped,
    Failed { message: String },
}

impl FeedbackOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, FeedbackOutcome::Submitted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scales_exclude_undefined_sizes() {
        assert!(!Gender::Male.has_size(SizeLabel::XXS));
        assert!(!Gender::Female.has_size(SizeLabel::XXXL));
        assert_eq!(Gender::Male.scale()[0], SizeLabel::XS);
        assert_eq!(Gender::Female.scale()[6], SizeLabel::XXL);
    }

    #[test]
    fn test_size_label_parse_and_display() {
        assert_eq!("2xl".parse::<SizeLabel>().unwrap(), SizeLabel::XXL);
        assert_eq!("XXXL".parse::<SizeLabel>().unwrap(), SizeLabel::XXXL);
        assert_eq!(SizeLabel::XXXL.to_string(), "3XL");
        assert!("XXXXL".parse::<SizeLabel>().is_err());
        assert!(SizeLabel::XXS < SizeLabel::XXXL);
    }

    #[test]
    fn test_size_label_serde_uses_codes() {
        let json = serde_json::to_string(&SizeLabel::XXL).unwrap();
        assert_eq!(json, "\"2XL\"");
        let gender: Gender = serde_json::from_str("\"female\"").unwrap();
        assert_eq!(gender, Gender::Female);
    }

    #[test]
    fn test_measurement_clamped() {
        let m = Measurement::clamped(250.0, 10.0);
        assert_eq!(m.height_cm, MAX_HEIGHT_CM);
        assert_eq!(m.weight_kg, MIN_WEIGHT_KG);

        let m = Measurement::clamped(f64::NAN, f64::INFINITY);
        assert_eq!(m, Measurement::default());
    }

    #[test]
    fn test_measurement_try_new() {
        assert!(Measurement::try_new(170.0, 70.0).is_ok());
        assert!(matches!(
            Measurement::try_new(119.9, 70.0),
            Err(SizerError::InvalidMeasurementError { .. })
        ));
        assert!(Measurement::try_new(170.0, f64::NAN).is_err());
    }
}

//! Scrub size estimation.
//!
//! The recommendation is a heuristic: a chest circumference is approximated
//! from height and weight with a linear formula per gender, then bucketed
//! against chest thresholds taken from the reference size chart. It is not a
//! certified tailoring or medical formula and callers should present it as
//! guidance only.
//!
//! Everything in this module is pure. Range checking is the caller's job
//! (see [`Measurement::clamped`]); any numeric input produces a label from the
//! gender's scale, and non-finite input saturates to the largest label.

use serde::Serialize;

use crate::domain::model::{Gender, Measurement, SizeLabel};

struct ChestFormula {
    height_factor: f64,
    weight_factor: f64,
    offset: f64,
}

const MALE_FORMULA: ChestFormula = ChestFormula {
    height_factor: 0.35,
    weight_factor: 0.5,
    offset: 20.0,
};

const FEMALE_FORMULA: ChestFormula = ChestFormula {
    height_factor: 0.33,
    weight_factor: 0.45,
    offset: 18.0,
};

// 上界為不含（chest < bound），依序由小到大
const MALE_THRESHOLDS: [(f64, SizeLabel); 6] = [
    (107.0, SizeLabel::XS),
    (112.0, SizeLabel::S),
    (116.0, SizeLabel::M),
    (122.0, SizeLabel::L),
    (127.0, SizeLabel::XL),
    (132.0, SizeLabel::XXL),
];

const FEMALE_THRESHOLDS: [(f64, SizeLabel); 6] = [
    (97.0, SizeLabel::XXS),
    (102.0, SizeLabel::XS),
    (107.0, SizeLabel::S),
    (112.0, SizeLabel::M),
    (117.0, SizeLabel::L),
    (122.0, SizeLabel::XL),
];

fn formula(gender: Gender) -> &'static ChestFormula {
    match gender {
        Gender::Male => &MALE_FORMULA,
        Gender::Female => &FEMALE_FORMULA,
    }
}

fn thresholds(gender: Gender) -> &'static [(f64, SizeLabel)] {
    match gender {
        Gender::Male => &MALE_THRESHOLDS,
        Gender::Female => &FEMALE_THRESHOLDS,
    }
}

/// Estimated chest circumference in centimeters.
pub fn estimate_chest(gender: Gender, height_cm: f64, weight_kg: f64) -> f64 {
    let f = formula(gender);
    f.height_factor * height_cm + f.weight_factor * weight_kg + f.offset
}

/// Maps an estimated chest circumference onto the gender's size scale.
pub fn size_for_chest(gender: Gender, chest_cm: f64) -> SizeLabel {
    thresholds(gender)
        .iter()
        .find(|(bound, _)| chest_cm < *bound)
        .map(|(_, label)| *label)
        .unwrap_or_else(|| largest_size(gender))
}

/// Recommends a scrub size. Total over numeric input.
pub fn estimate_size(gender: Gender, height_cm: f64, weight_kg: f64) -> SizeLabel {
    size_for_chest(gender, estimate_chest(gender, height_cm, weight_kg))
}

fn largest_size(gender: Gender) -> SizeLabel {
    gender.scale()[gender.scale().len() - 1]
}

/// A computed recommendation together with the inputs and intermediate chest value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeEstimate {
    pub gender: Gender,
    pub measurement: Measurement,
    pub chest_cm: f64,
    pub label: SizeLabel,
}

impl SizeEstimate {
    pub fn compute(gender: Gender, measurement: Measurement) -> Self {
        let chest_cm = estimate_chest(gender, measurement.height_cm, measurement.weight_kg);
        Self {
            gender,
            measurement,
            chest_cm,
            label: size_for_chest(gender, chest_cm),
        }
    }
}

use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

use crate::domain::model::{Gender, SizeChartEntry, SizeLabel};

const fn entry(
    top_length: f64,
    shoulder: f64,
    chest: f64,
    sleeve_length: f64,
    sleeve_bottom: f64,
    pants_length: f64,
    waist: f64,
    thigh: f64,
    pants_bottom: f64,
) -> SizeChartEntry {
    SizeChartEntry {
        top_length,
        shoulder,
        chest,
        sleeve_length,
        sleeve_bottom,
        pants_length,
        waist,
        thigh,
        pants_bottom,
    }
}

// 索引與 Gender::scale() 的順序一致
const MALE_CHART: [SizeChartEntry; 7] = [
    entry(66.0, 47.0, 107.0, 21.0, 36.0, 99.0, 82.0, 66.0, 38.0),
    entry(68.5, 48.5, 112.0, 22.0, 37.0, 100.0, 84.0, 68.0, 38.0),
    entry(71.0, 50.0, 117.0, 23.0, 38.0, 101.0, 86.0, 70.0, 38.0),
    entry(73.5, 51.5, 122.0, 24.0, 39.0, 102.0, 88.0, 72.0, 40.0),
    entry(76.0, 53.0, 127.0, 25.0, 40.0, 103.0, 90.0, 74.0, 40.0),
    entry(78.5, 54.5, 132.0, 26.0, 41.0, 104.0, 92.0, 76.0, 40.0),
    entry(81.0, 56.0, 137.0, 27.0, 42.0, 105.0, 94.0, 78.0, 40.0),
];

const FEMALE_CHART: [SizeChartEntry; 7] = [
    entry(62.5, 42.5, 97.0, 17.0, 33.0, 95.0, 80.0, 64.0, 38.0),
    entry(65.0, 44.0, 102.0, 18.0, 34.0, 96.0, 82.0, 66.0, 38.0),
    entry(67.5, 45.5, 107.0, 19.0, 35.0, 97.0, 84.0, 68.0, 38.0),
    entry(70.0, 47.0, 112.0, 20.0, 36.0, 98.0, 86.0, 70.0, 40.0),
    entry(72.5, 48.5, 117.0, 21.0, 37.0, 99.0, 88.0, 72.0, 40.0),
    entry(75.0, 50.0, 122.0, 22.0, 38.0, 100.0, 90.0, 74.0, 40.0),
    entry(77.5, 51.5, 127.0, 23.0, 39.0, 101.0, 92.0, 76.0, 40.0),
];

fn rows(gender: Gender) -> &'static [SizeChartEntry; 7] {
    match gender {
        Gender::Male => &MALE_CHART,
        Gender::Female => &FEMALE_CHART,
    }
}

/// Reference measurements for `label`, or `None` when the gender's scale has
/// no such size (male XXS, female 3XL).
pub fn chart_entry(gender: Gender, label: SizeLabel) -> Option<&'static SizeChartEntry> {
    let index = gender.scale().iter().position(|l| *l == label)?;
    rows(gender).get(index)
}

/// All chart rows for a gender in scale order.
pub fn size_chart(gender: Gender) -> impl Iterator<Item = (SizeLabel, &'static SizeChartEntry)> {
    gender.scale().iter().copied().zip(rows(gender).iter())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Language {
    #[default]
    En,
    Ar,
}

pub fn size_description(label: SizeLabel, language: Language) -> &'static str {
    match language {
        Language::En => match label {
            SizeLabel::XXS => "Extra Extra Small",
            SizeLabel::XS => "Extra Small",
            SizeLabel::S => "Small",
            SizeLabel::M => "Medium",
            SizeLabel::L => "Large",
            SizeLabel::XL => "Extra Large",
            SizeLabel::XXL => "Double Extra Large",
            SizeLabel::XXXL => "Triple Extra Large",
        },
        Language::Ar => match label {
            SizeLabel::XXS => "صغير جداً جداً",
            SizeLabel::XS => "صغير جداً",
            SizeLabel::S => "صغير",
            SizeLabel::M => "متوسط",
            SizeLabel::L => "كبير",
            SizeLabel::XL => "كبير جداً",
            SizeLabel::XXL => "كبير جداً جداً",
            SizeLabel::XXXL => "كبير جداً جداً جداً",
        },
    }
}

pub fn size_chart_disclaimer(language: Language) -> &'static str {
    match language {
        Language::En => {
            "Scrub sizes are approximate and may vary between manufacturers. \
             For best results, check the brand's own size chart when available."
        }
        Language::Ar => {
            "مقاسات الأزياء الطبية تقريبية وقد تختلف بين الشركات المصنعة. \
             للحصول على أفضل النتائج، تحقق من جداول المقاسات الخاصة بالعلامة التجارية عند توفرها."
        }
    }
}

/// Renders the gender's chart as a plain-text table. The `highlight` row, if
/// it belongs to the scale, is marked with `*`.
pub fn render_size_chart(gender: Gender, highlight: Option<SizeLabel>) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "  {:<5} {:>7} {:>9} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>8}",
        "Size", "Top", "Shoulder", "Chest", "Sleeve", "Cuff", "Pants", "Waist", "Thigh", "Hem"
    );
    for (label, row) in size_chart(gender) {
        let marker = if highlight == Some(label) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{} {:<5} {:>7} {:>9} {:>7} {:>7} {:>7} {:>7} {:>7} {:>7} {:>8}",
            marker,
            label.code(),
            row.top_length,
            row.shoulder,
            row.chest,
            row.sleeve_length,
            row.sleeve_bottom,
            row.pants_length,
            row.waist,
            row.thigh,
            row.pants_bottom
        );
    }
    out
}

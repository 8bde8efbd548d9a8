//! Derived academic values: letter grades and percentages.
//!
//! Grades are banded on the exact ratio `marks / total` using integer
//! arithmetic, so a boundary score (e.g. 90 of 100) always lands in the
//! higher band.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Letter grade stored on a result row.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(2))")]
pub enum Grade {
    #[sea_orm(string_value = "A+")]
    #[serde(rename = "A+")]
    #[strum(serialize = "A+")]
    APlus,
    #[sea_orm(string_value = "A")]
    #[serde(rename = "A")]
    #[strum(serialize = "A")]
    A,
    #[sea_orm(string_value = "B+")]
    #[serde(rename = "B+")]
    #[strum(serialize = "B+")]
    BPlus,
    #[sea_orm(string_value = "B")]
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[sea_orm(string_value = "C+")]
    #[serde(rename = "C+")]
    #[strum(serialize = "C+")]
    CPlus,
    #[sea_orm(string_value = "C")]
    #[serde(rename = "C")]
    #[strum(serialize = "C")]
    C,
    #[sea_orm(string_value = "F")]
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    F,
}

/// Lower bound (percent, inclusive) of each passing band, highest first.
const BANDS: [(i64, Grade); 6] = [
    (90, Grade::APlus),
    (80, Grade::A),
    (70, Grade::BPlus),
    (60, Grade::B),
    (50, Grade::CPlus),
    (40, Grade::C),
];

impl Grade {
    /// Bands `marks` out of `total`. A non-positive `total` yields `F`.
    pub fn from_marks(marks: i32, total: i32) -> Grade {
        if total <= 0 {
            return Grade::F;
        }
        let scaled = i64::from(marks) * 100;
        let total = i64::from(total);
        BANDS
            .iter()
            .find(|(band, _)| scaled >= band * total)
            .map(|(_, grade)| *grade)
            .unwrap_or(Grade::F)
    }
}

/// Grade for a nullable mark. No marks means no grade.
pub fn grade_for(marks: Option<i32>, total: i32) -> Option<Grade> {
    marks.map(|m| Grade::from_marks(m, total))
}

/// Helper to compute percentage safely.
pub fn percentage(earned: f64, total: f64) -> f64 {
    if total <= 0.0 {
        0.0
    } else {
        (earned * 100.0) / total
    }
}

/// Rounds to one decimal place for display.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

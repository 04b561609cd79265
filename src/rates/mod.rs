//! Green Book discount rate tables and discounting
//!
//! The standard schedule declines over the long term (2022 guidance):
//! - 3.5% for years 0-30
//! - 3.0% for years 31-75
//! - 2.5% for years 76-125
//! - 2.0% for years 126-200
//! - 1.5% for years 201-300
//! - 1.0% for years 301+
//!
//! Health effects are discounted at a flat 1.5%, and the reduced 3.0% rate
//! is used for sensitivity testing.

mod factor;
mod schedule;

pub use factor::{discount_factor, discount_factor_closed_form};
pub use schedule::{DiscountSchedule, ScheduleParams, ScheduleRow, MAX_HORIZON};

use crate::error::AppraisalError;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Flat rate applied to health effects
pub const HEALTH_RATE: f64 = 0.015;

/// Flat rate used for sensitivity runs
pub const REDUCED_RATE: f64 = 0.030;

/// A contiguous range of years sharing one standard discount rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearBand {
    /// Inclusive upper year of the band, None for the open-ended final band
    pub last_year: Option<u32>,
    pub rate: f64,
}

impl YearBand {
    pub fn contains(&self, year: u32) -> bool {
        self.last_year.map_or(true, |last| year <= last)
    }
}

/// Standard declining schedule, ordered by year
pub const STANDARD_BANDS: [YearBand; 6] = [
    YearBand { last_year: Some(30), rate: 0.035 },
    YearBand { last_year: Some(75), rate: 0.030 },
    YearBand { last_year: Some(125), rate: 0.025 },
    YearBand { last_year: Some(200), rate: 0.020 },
    YearBand { last_year: Some(300), rate: 0.015 },
    YearBand { last_year: None, rate: 0.010 },
];

/// Which Green Book rate schedule to discount with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum RateCategory {
    /// Declining long-term schedule
    #[default]
    Standard,
    /// Flat rate for health effects
    Health,
    /// Flat rate for sensitivity analysis
    Reduced,
}

impl RateCategory {
    pub const ALL: [RateCategory; 3] = [
        RateCategory::Standard,
        RateCategory::Health,
        RateCategory::Reduced,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RateCategory::Standard => "standard",
            RateCategory::Health => "health",
            RateCategory::Reduced => "reduced",
        }
    }

    /// Bands this category discounts with. Flat categories are a single open band.
    pub fn bands(&self) -> &'static [YearBand] {
        const HEALTH_BANDS: [YearBand; 1] = [YearBand { last_year: None, rate: HEALTH_RATE }];
        const REDUCED_BANDS: [YearBand; 1] = [YearBand { last_year: None, rate: REDUCED_RATE }];

        match self {
            RateCategory::Standard => &STANDARD_BANDS,
            RateCategory::Health => &HEALTH_BANDS,
            RateCategory::Reduced => &REDUCED_BANDS,
        }
    }
}

impl fmt::Display for RateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RateCategory {
    type Err = AppraisalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RateCategory::ALL
            .into_iter()
            .find(|category| category.as_str() == s)
            .ok_or_else(|| AppraisalError::UnknownRateCategory {
                given: s.to_string(),
                valid: RateCategory::ALL.iter().map(|c| c.as_str()).collect(),
            })
    }
}

/// Get the Green Book discount rate for a year from project start
///
/// Year 0 (the base year) falls in the first standard band; it is never
/// actually applied because factors only compound years 1..=N.
pub fn discount_rate(year: u32, category: RateCategory) -> f64 {
    match category {
        RateCategory::Health => HEALTH_RATE,
        RateCategory::Reduced => REDUCED_RATE,
        RateCategory::Standard => STANDARD_BANDS
            .iter()
            .find(|band| band.contains(year))
            .map(|band| band.rate)
            // final band is open-ended
            .unwrap_or(STANDARD_BANDS[STANDARD_BANDS.len() - 1].rate),
    }
}

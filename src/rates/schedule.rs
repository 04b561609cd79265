//! Precomputed discount factors for a fixed horizon

use super::{discount_factor_closed_form, discount_rate, RateCategory};
use serde::{Deserialize, Serialize};

/// One year of a discount schedule
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    pub year: u32,
    /// Rate applied when stepping into this year (year 0 is never discounted)
    pub rate: f64,
    pub factor: f64,
}

/// Longest horizon accepted from serialized or command-line input
pub const MAX_HORIZON: u32 = 1000;

/// Serialized form of a schedule; the table is always rebuilt on load
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScheduleParams {
    pub category: RateCategory,
    pub horizon: u32,
}

/// Discount factors for years 0..=horizon under one rate category
///
/// Built with a single cumulative pass, so each lookup inside the horizon is
/// O(1). Years beyond the horizon fall back to the closed form.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ScheduleParams", into = "ScheduleParams")]
pub struct DiscountSchedule {
    category: RateCategory,
    factors: Vec<f64>,
}

impl TryFrom<ScheduleParams> for DiscountSchedule {
    type Error = String;

    fn try_from(params: ScheduleParams) -> Result<Self, Self::Error> {
        if params.horizon > MAX_HORIZON {
            return Err(format!(
                "horizon {} exceeds maximum of {}",
                params.horizon, MAX_HORIZON
            ));
        }
        Ok(Self::new(params.category, params.horizon))
    }
}

impl From<DiscountSchedule> for ScheduleParams {
    fn from(schedule: DiscountSchedule) -> Self {
        Self {
            category: schedule.category,
            horizon: schedule.horizon(),
        }
    }
}

impl DiscountSchedule {
    pub fn new(category: RateCategory, horizon: u32) -> Self {
        let mut factors = Vec::with_capacity(horizon as usize + 1);
        let mut factor = 1.0;
        factors.push(factor);

        for year in 1..=horizon {
            factor /= 1.0 + discount_rate(year, category);
            factors.push(factor);
        }

        log::debug!(
            "Built {} discount schedule to year {} (final factor {:.6})",
            category,
            horizon,
            factor
        );

        Self { category, factors }
    }

    pub fn category(&self) -> RateCategory {
        self.category
    }

    /// Last year held in the table
    pub fn horizon(&self) -> u32 {
        self.factors.len().saturating_sub(1) as u32
    }

    /// Discount factor for a year, from the table when within the horizon
    pub fn factor(&self, year: u32) -> f64 {
        self.factors
            .get(year as usize)
            .copied()
            .unwrap_or_else(|| discount_factor_closed_form(year, self.category))
    }

    /// Tabular view of the schedule
    pub fn rows(&self) -> Vec<ScheduleRow> {
        self.factors
            .iter()
            .enumerate()
            .map(|(year, &factor)| {
                let year = year as u32;
                ScheduleRow {
                    year,
                    rate: if year == 0 { 0.0 } else { discount_rate(year, self.category) },
                    factor,
                }
            })
            .collect()
    }
}

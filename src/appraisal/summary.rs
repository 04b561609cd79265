//! Appraisal configuration and headline results

use super::{present_value, CostBenefitSeries};
use crate::error::{AppraisalError, Result};
use crate::optimism::ProjectType;
use crate::rates::RateCategory;
use serde::{Deserialize, Serialize};
use std::env::{self, VarError};

/// Environment variable selecting the rate schedule
pub const RATE_CATEGORY_VAR: &str = "APPRAISAL_RATE_CATEGORY";

/// Environment variable enabling optimism bias for a project type
pub const PROJECT_TYPE_VAR: &str = "APPRAISAL_PROJECT_TYPE";

/// How an appraisal is discounted and adjusted
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AppraisalConfig {
    pub rate_category: RateCategory,

    /// Uplift costs for this project type before discounting.
    /// None leaves cost estimates as given.
    #[serde(default)]
    pub optimism_bias: Option<ProjectType>,
}

impl AppraisalConfig {
    pub fn new(rate_category: RateCategory) -> Self {
        Self {
            rate_category,
            optimism_bias: None,
        }
    }

    pub fn with_optimism_bias(mut self, project_type: ProjectType) -> Self {
        self.optimism_bias = Some(project_type);
        self
    }

    /// Read config from APPRAISAL_RATE_CATEGORY and APPRAISAL_PROJECT_TYPE,
    /// falling back to the defaults for unset or blank variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| env::var(name))
    }

    /// Build config from any variable source shaped like `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&'static str) -> std::result::Result<String, VarError>,
    {
        let rate_category = match setting(&lookup, RATE_CATEGORY_VAR)? {
            Some(value) => value.parse()?,
            None => RateCategory::default(),
        };

        let optimism_bias = match setting(&lookup, PROJECT_TYPE_VAR)? {
            Some(value) => Some(value.parse()?),
            None => None,
        };

        Ok(Self {
            rate_category,
            optimism_bias,
        })
    }
}

/// Trimmed value of a variable; unset and blank both read as None
fn setting<F>(lookup: &F, name: &'static str) -> Result<Option<String>>
where
    F: Fn(&'static str) -> std::result::Result<String, VarError>,
{
    match lookup(name) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(VarError::NotPresent) => Ok(None),
        Err(VarError::NotUnicode(raw)) => Err(AppraisalError::InvalidSetting {
            name,
            value: raw.to_string_lossy().into_owned(),
        }),
    }
}

/// Headline discounted results for one cost/benefit series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppraisalSummary {
    pub rate_category: RateCategory,
    pub optimism_bias: Option<ProjectType>,
    pub years: usize,

    /// Discounted costs as estimated, before any optimism bias
    pub pv_costs_unadjusted: f64,
    /// Discounted costs used for NPV and BCR
    pub pv_costs: f64,
    pub pv_benefits: f64,

    /// pv_benefits - pv_costs
    pub npv: f64,

    /// None when discounted costs are zero
    pub bcr: Option<f64>,
}

impl AppraisalSummary {
    /// Whether the appraisal shows positive value for money
    pub fn is_favourable(&self) -> bool {
        self.npv > 0.0 && self.bcr.map_or(true, |bcr| bcr > 1.0)
    }
}

/// Appraise a cost/benefit series under the given config
pub fn appraise(series: &CostBenefitSeries, config: &AppraisalConfig) -> AppraisalSummary {
    let category = config.rate_category;
    let years = series.years();

    let pv_costs_unadjusted = present_value(&series.costs(), &years, category);
    let pv_costs = match config.optimism_bias {
        Some(project_type) => {
            present_value(&series.with_optimism_bias(project_type).costs(), &years, category)
        }
        None => pv_costs_unadjusted,
    };
    let pv_benefits = present_value(&series.benefits(), &years, category);

    let bcr = if pv_costs == 0.0 {
        log::warn!("Discounted costs are zero; BCR is undefined");
        None
    } else {
        Some(pv_benefits / pv_costs)
    };

    log::info!(
        "Appraised {} years at {} rates: NPV {:.2}, BCR {}",
        series.len(),
        category,
        pv_benefits - pv_costs,
        bcr.map_or_else(|| "n/a".to_string(), |b| format!("{:.4}", b))
    );

    AppraisalSummary {
        rate_category: category,
        optimism_bias: config.optimism_bias,
        years: series.len(),
        pv_costs_unadjusted,
        pv_costs,
        pv_benefits,
        npv: pv_benefits - pv_costs,
        bcr,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appraisal::{calculate_bcr, calculate_npv};
    use approx::assert_relative_eq;

    const COSTS: [f64; 5] = [1_000_000.0, 50_000.0, 50_000.0, 50_000.0, 50_000.0];
    const BENEFITS: [f64; 5] = [0.0, 300_000.0, 320_000.0, 340_000.0, 360_000.0];

    fn example() -> CostBenefitSeries {
        CostBenefitSeries::new(&COSTS, &BENEFITS, None).unwrap()
    }

    #[test]
    fn test_summary_matches_calculators() {
        let summary = appraise(&example(), &AppraisalConfig::default());

        let bcr = calculate_bcr(&COSTS, &BENEFITS, None, RateCategory::Standard).unwrap();
        assert_relative_eq!(summary.bcr.unwrap(), bcr, max_relative = 1e-12);

        let net: Vec<f64> = BENEFITS.iter().zip(&COSTS).map(|(b, c)| b - c).collect();
        let npv = calculate_npv(&net, None, RateCategory::Standard).unwrap();
        assert!((summary.npv - npv).abs() < 1e-6);
        assert!((summary.npv - 25_304.258).abs() < 0.01);

        assert_eq!(summary.pv_costs, summary.pv_costs_unadjusted);
        assert_eq!(summary.years, 5);
        assert!(summary.is_favourable());
    }

    #[test]
    fn test_optimism_bias_applied_before_discounting() {
        let config = AppraisalConfig::new(RateCategory::Standard)
            .with_optimism_bias(ProjectType::StandardCivilEngineering);
        let summary = appraise(&example(), &config);

        assert_relative_eq!(summary.pv_costs, summary.pv_costs_unadjusted * 1.44, max_relative = 1e-12);
        assert!((summary.bcr.unwrap() - 0.70929).abs() < 1e-4);
        assert!(!summary.is_favourable());
    }

    #[test]
    fn test_zero_costs_leave_bcr_undefined() {
        let series = CostBenefitSeries::new(&[0.0, 0.0], &[10.0, 10.0], None).unwrap();
        let summary = appraise(&series, &AppraisalConfig::default());
        assert!(summary.bcr.is_none());
        assert!(summary.npv > 0.0);
    }

    fn vars<'a>(pairs: &'a [(&'static str, &'static str)]) -> impl Fn(&'static str) -> std::result::Result<String, VarError> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    #[test]
    fn test_config_from_variables() {
        let config = AppraisalConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config, AppraisalConfig::default());

        let config = AppraisalConfig::from_lookup(vars(&[
            (RATE_CATEGORY_VAR, " reduced "),
            (PROJECT_TYPE_VAR, "outsourcing"),
        ]))
        .unwrap();
        assert_eq!(config.rate_category, RateCategory::Reduced);
        assert_eq!(config.optimism_bias, Some(ProjectType::Outsourcing));
    }

    #[test]
    fn test_blank_variables_read_as_unset() {
        let config = AppraisalConfig::from_lookup(vars(&[
            (RATE_CATEGORY_VAR, ""),
            (PROJECT_TYPE_VAR, "  "),
        ]))
        .unwrap();
        assert_eq!(config, AppraisalConfig::default());
    }

    #[test]
    fn test_invalid_variables_rejected() {
        let result = AppraisalConfig::from_lookup(vars(&[(RATE_CATEGORY_VAR, "social")]));
        assert!(matches!(result, Err(AppraisalError::UnknownRateCategory { .. })));

        let result = AppraisalConfig::from_lookup(|name| {
            if name == PROJECT_TYPE_VAR {
                Err(VarError::NotUnicode(std::ffi::OsString::from("bridge")))
            } else {
                Err(VarError::NotPresent)
            }
        });
        assert!(matches!(
            result,
            Err(AppraisalError::InvalidSetting { name: PROJECT_TYPE_VAR, .. })
        ));
    }

    #[test]
    fn test_config_json() {
        let config: AppraisalConfig =
            serde_json::from_str(r#"{"rate_category": "health"}"#).unwrap();
        assert_eq!(config, AppraisalConfig::new(RateCategory::Health));

        let config: AppraisalConfig = serde_json::from_str(
            r#"{"rate_category": "reduced", "optimism_bias": "outsourcing"}"#,
        )
        .unwrap();
        assert_eq!(config.optimism_bias, Some(ProjectType::Outsourcing));
    }
}

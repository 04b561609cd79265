//! Sensitivity runner for repeated appraisals
//!
//! Green Book guidance asks for results under alternative discount rates
//! (the reduced rate in particular) alongside the central case. The runner
//! holds one cost/benefit series and appraises it under many configs.

use crate::appraisal::{appraise, AppraisalConfig, AppraisalSummary, CostBenefitSeries};
use crate::optimism::ProjectType;
use crate::rates::RateCategory;
use rayon::prelude::*;

/// Appraises a fixed series under several configurations
///
/// # Example
/// ```ignore
/// let runner = SensitivityRunner::new(series);
///
/// for summary in runner.run_categories(&RateCategory::ALL) {
///     println!("{}: NPV {:.0}", summary.rate_category, summary.npv);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SensitivityRunner {
    series: CostBenefitSeries,
    optimism_bias: Option<ProjectType>,
}

impl SensitivityRunner {
    pub fn new(series: CostBenefitSeries) -> Self {
        Self {
            series,
            optimism_bias: None,
        }
    }

    /// Uplift costs for this project type in every run
    pub fn with_optimism_bias(mut self, project_type: ProjectType) -> Self {
        self.optimism_bias = Some(project_type);
        self
    }

    /// Appraise under one config. The config's own project type wins over the runner's.
    pub fn run(&self, config: &AppraisalConfig) -> AppraisalSummary {
        appraise(&self.series, &self.effective(config))
    }

    /// Appraise under each rate category, results in input order
    pub fn run_categories(&self, categories: &[RateCategory]) -> Vec<AppraisalSummary> {
        let configs: Vec<AppraisalConfig> = categories
            .iter()
            .map(|&category| AppraisalConfig {
                rate_category: category,
                optimism_bias: self.optimism_bias,
            })
            .collect();
        self.run_scenarios(&configs)
    }

    /// Appraise under arbitrary configs in parallel, results in input order
    pub fn run_scenarios(&self, configs: &[AppraisalConfig]) -> Vec<AppraisalSummary> {
        configs
            .par_iter()
            .map(|config| appraise(&self.series, &self.effective(config)))
            .collect()
    }

    fn effective(&self, config: &AppraisalConfig) -> AppraisalConfig {
        AppraisalConfig {
            optimism_bias: config.optimism_bias.or(self.optimism_bias),
            ..*config
        }
    }

    pub fn series(&self) -> &CostBenefitSeries {
        &self.series
    }
}

/// Appraise many series under one config in parallel
pub fn run_batch(series: &[CostBenefitSeries], config: &AppraisalConfig) -> Vec<AppraisalSummary> {
    series.par_iter().map(|s| appraise(s, config)).collect()
}

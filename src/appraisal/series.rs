//! Typed cash flow and cost/benefit streams

use super::{calculate_bcr, calculate_npv};
use crate::error::{AppraisalError, Result};
use crate::optimism::{apply_optimism_bias, ProjectType};
use crate::rates::RateCategory;
use serde::{Deserialize, Serialize};

/// A single amount at a year offset from the base year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    pub year: u32,
    pub amount: f64,
}

/// Signed cash flows (costs negative, benefits positive by convention)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CashFlowSeries {
    pub flows: Vec<CashFlow>,
}

impl CashFlowSeries {
    pub fn new(flows: Vec<CashFlow>) -> Self {
        Self { flows }
    }

    /// Amounts at consecutive years from 0
    pub fn consecutive(amounts: &[f64]) -> Result<Self> {
        let years = super::position_years(amounts.len())?;
        Ok(Self {
            flows: years
                .into_iter()
                .zip(amounts)
                .map(|(year, &amount)| CashFlow { year, amount })
                .collect(),
        })
    }

    pub fn years(&self) -> Vec<u32> {
        self.flows.iter().map(|f| f.year).collect()
    }

    pub fn amounts(&self) -> Vec<f64> {
        self.flows.iter().map(|f| f.amount).collect()
    }

    pub fn npv(&self, category: RateCategory) -> f64 {
        let years = self.years();
        // Years come from the same flows, so lengths always agree
        super::present_value(&self.amounts(), &years, category)
    }
}

/// One year of a cost/benefit appraisal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostBenefitRow {
    pub year: u32,
    #[serde(default)]
    pub cost: f64,
    #[serde(default)]
    pub benefit: f64,
}

/// Positionally aligned costs and benefits (both positive by convention)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBenefitSeries {
    pub rows: Vec<CostBenefitRow>,
}

impl CostBenefitSeries {
    /// Build from parallel sequences; `years` defaults to 0, 1, 2, ...
    pub fn new(costs: &[f64], benefits: &[f64], years: Option<&[u32]>) -> Result<Self> {
        if costs.len() != benefits.len() {
            return Err(AppraisalError::length_mismatch(
                "costs",
                costs.len(),
                "benefits",
                benefits.len(),
            ));
        }
        let years = super::aligned_years("costs", costs.len(), years)?;

        let rows = costs
            .iter()
            .zip(benefits)
            .zip(years.iter())
            .map(|((&cost, &benefit), &year)| CostBenefitRow { year, cost, benefit })
            .collect();

        Ok(Self { rows })
    }

    pub fn from_rows(rows: Vec<CostBenefitRow>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn years(&self) -> Vec<u32> {
        self.rows.iter().map(|r| r.year).collect()
    }

    pub fn costs(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.cost).collect()
    }

    pub fn benefits(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.benefit).collect()
    }

    /// Benefit minus cost for each row
    pub fn net_flows(&self) -> CashFlowSeries {
        CashFlowSeries::new(
            self.rows
                .iter()
                .map(|r| CashFlow { year: r.year, amount: r.benefit - r.cost })
                .collect(),
        )
    }

    /// Copy of the series with every cost uplifted for optimism bias
    pub fn with_optimism_bias(&self, project_type: ProjectType) -> Self {
        Self {
            rows: self
                .rows
                .iter()
                .map(|r| CostBenefitRow {
                    cost: apply_optimism_bias(r.cost, project_type),
                    ..*r
                })
                .collect(),
        }
    }

    pub fn npv(&self, category: RateCategory) -> Result<f64> {
        let net = self.net_flows();
        calculate_npv(&net.amounts(), Some(net.years().as_slice()), category)
    }

    pub fn bcr(&self, category: RateCategory) -> Result<f64> {
        calculate_bcr(&self.costs(), &self.benefits(), Some(self.years().as_slice()), category)
    }
}

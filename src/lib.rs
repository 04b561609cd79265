//! Green Book Appraisal - discounting and value-for-money utilities
//!
//! This library provides:
//! - Declining long-term discount rates and cumulative discount factors
//! - Net Present Value and Benefit-Cost Ratio calculations
//! - Optimism bias uplifts for cost estimates
//! - CSV loading and multi-rate sensitivity runs

pub mod error;
pub mod rates;
pub mod appraisal;
pub mod optimism;
pub mod scenario;
pub mod format;

// Re-export commonly used types
pub use error::{AppraisalError, Result};
pub use rates::{discount_rate, discount_factor, DiscountSchedule, RateCategory};
pub use appraisal::{calculate_npv, calculate_bcr, appraise, AppraisalConfig, AppraisalSummary, CashFlowSeries, CostBenefitSeries};
pub use optimism::{apply_optimism_bias, ProjectType};
pub use scenario::SensitivityRunner;

//! Benefit-Cost Ratio with Green Book declining rates

use super::{aligned_years, present_value};
use crate::error::{AppraisalError, Result};
use crate::rates::RateCategory;

/// Calculate the Benefit-Cost Ratio using Green Book discount rates
///
/// Costs and benefits are positionally aligned and share `years`
/// (consecutive from 0 when `None`). A BCR above 1 indicates positive value
/// for money. The ratio is neither clamped nor rounded.
///
/// # Errors
/// * `LengthMismatch` when costs, benefits and years do not align
/// * `ZeroDenominator` when total discounted costs are exactly zero
pub fn calculate_bcr(
    costs: &[f64],
    benefits: &[f64],
    years: Option<&[u32]>,
    category: RateCategory,
) -> Result<f64> {
    if costs.len() != benefits.len() {
        return Err(AppraisalError::length_mismatch(
            "costs",
            costs.len(),
            "benefits",
            benefits.len(),
        ));
    }
    let years = aligned_years("costs", costs.len(), years)?;

    let pv_costs = present_value(costs, &years, category);
    let pv_benefits = present_value(benefits, &years, category);

    if pv_costs == 0.0 {
        return Err(AppraisalError::ZeroDenominator);
    }
    if pv_costs < 0.0 || pv_benefits < 0.0 {
        log::warn!(
            "Negative discounted totals in BCR (costs {:.2}, benefits {:.2}); costs and benefits are expected as positive amounts",
            pv_costs,
            pv_benefits
        );
    }

    let bcr = pv_benefits / pv_costs;
    log::debug!(
        "BCR at {} rates: PV benefits {:.2} / PV costs {:.2} = {:.4}",
        category,
        pv_benefits,
        pv_costs,
        bcr
    );

    Ok(bcr)
}

//! Discounted appraisal of cash flow and cost/benefit streams

mod bcr;
mod npv;
mod series;
mod summary;
pub mod loader;

pub use bcr::calculate_bcr;
pub use npv::calculate_npv;
pub use series::{CashFlow, CashFlowSeries, CostBenefitRow, CostBenefitSeries};
pub use summary::{appraise, AppraisalConfig, AppraisalSummary};

use crate::error::{AppraisalError, Result};
use crate::rates::{discount_factor, RateCategory};
use std::borrow::Cow;

/// Years for a stream of `len` values: the given years, or 0, 1, 2, ... by position
pub(crate) fn aligned_years<'a>(
    values: &'static str,
    len: usize,
    years: Option<&'a [u32]>,
) -> Result<Cow<'a, [u32]>> {
    match years {
        Some(years) if years.len() != len => Err(AppraisalError::length_mismatch(
            values,
            len,
            "years",
            years.len(),
        )),
        Some(years) => Ok(Cow::Borrowed(years)),
        None => Ok(Cow::Owned(position_years(len)?)),
    }
}

/// Consecutive years 0, 1, 2, ... for `len` values
pub(crate) fn position_years(len: usize) -> Result<Vec<u32>> {
    let count = u32::try_from(len).map_err(|_| AppraisalError::TooManyYears(len))?;
    Ok((0..count).collect())
}

/// Sum of amounts discounted to the base year. Lengths must already agree.
pub(crate) fn present_value(amounts: &[f64], years: &[u32], category: RateCategory) -> f64 {
    amounts
        .iter()
        .zip(years)
        .map(|(amount, &year)| amount * discount_factor(year, category))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_years_are_positions() {
        let years = aligned_years("cash_flows", 4, None).unwrap();
        assert_eq!(&*years, &[0, 1, 2, 3]);
    }

    #[test]
    fn test_given_years_must_align() {
        let given = [0, 5];
        assert_eq!(&*aligned_years("costs", 2, Some(&given)).unwrap(), &given);
        assert!(aligned_years("costs", 3, Some(&given)).is_err());
    }

    #[test]
    #[cfg(target_pointer_width = "64")]
    fn test_positions_beyond_u32_rejected() {
        let len = u32::MAX as usize + 2;
        assert!(matches!(position_years(len), Err(AppraisalError::TooManyYears(n)) if n == len));
        assert!(aligned_years("cash_flows", len, None).is_err());
    }

    #[test]
    fn test_present_value_at_base_year() {
        let pv = present_value(&[100.0, 250.0], &[0, 0], RateCategory::Standard);
        assert_eq!(pv, 350.0);
    }
}

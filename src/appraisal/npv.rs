//! Net Present Value with Green Book declining rates

use super::{aligned_years, present_value};
use crate::error::Result;
use crate::rates::RateCategory;

/// Calculate Net Present Value using Green Book discount rates
///
/// # Arguments
/// * `cash_flows` - Cash flows (costs negative, benefits positive by convention)
/// * `years` - Year of each cash flow; `None` means consecutive years from 0.
///   Duplicates and any ordering are allowed.
/// * `category` - Rate schedule to discount with
///
/// # Errors
/// `LengthMismatch` when `years` is given with a different length.
pub fn calculate_npv(
    cash_flows: &[f64],
    years: Option<&[u32]>,
    category: RateCategory,
) -> Result<f64> {
    let years = aligned_years("cash_flows", cash_flows.len(), years)?;
    let npv = present_value(cash_flows, &years, category);

    log::debug!(
        "NPV of {} cash flows at {} rates: {:.2}",
        cash_flows.len(),
        category,
        npv
    );

    Ok(npv)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppraisalError;
    use crate::rates::discount_factor;

    const INFRASTRUCTURE: [f64; 6] = [-1_000_000.0, 200_000.0, 250_000.0, 300_000.0, 350_000.0, 400_000.0];

    #[test]
    fn test_five_year_infrastructure_project() {
        let npv = calculate_npv(&INFRASTRUCTURE, None, RateCategory::Standard).unwrap();
        assert!((npv - 338_991.248).abs() < 1.0, "NPV was {}", npv);
    }

    #[test]
    fn test_explicit_consecutive_years_match_default() {
        let years = [0, 1, 2, 3, 4, 5];
        let explicit = calculate_npv(&INFRASTRUCTURE, Some(&years), RateCategory::Standard).unwrap();
        let implicit = calculate_npv(&INFRASTRUCTURE, None, RateCategory::Standard).unwrap();
        assert!((explicit - implicit).abs() < 1e-6);
    }

    #[test]
    fn test_unordered_and_duplicate_years() {
        let flows = [100.0, 100.0, -50.0];
        let years = [10, 0, 10];
        let npv = calculate_npv(&flows, Some(&years), RateCategory::Health).unwrap();

        let expected = 100.0 + 50.0 * discount_factor(10, RateCategory::Health);
        assert!((npv - expected).abs() < 1e-9);
    }

    #[test]
    fn test_lower_rate_gives_higher_npv() {
        let standard = calculate_npv(&INFRASTRUCTURE, None, RateCategory::Standard).unwrap();
        let health = calculate_npv(&INFRASTRUCTURE, None, RateCategory::Health).unwrap();
        assert!(health > standard);
    }

    #[test]
    fn test_empty_series() {
        assert_eq!(calculate_npv(&[], None, RateCategory::Standard).unwrap(), 0.0);
    }

    #[test]
    fn test_mismatched_years_rejected() {
        let result = calculate_npv(&INFRASTRUCTURE, Some(&[0, 1, 2]), RateCategory::Standard);
        match result {
            Err(AppraisalError::LengthMismatch { left_len, right_len, .. }) => {
                assert_eq!(left_len, 6);
                assert_eq!(right_len, 3);
            }
            other => panic!("expected LengthMismatch, got {:?}", other),
        }
    }
}

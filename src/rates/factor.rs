//! Cumulative discount factors under declining rates

use super::{discount_rate, RateCategory};

/// Calculate the cumulative discount factor for a year from project start
///
/// Compounds year by year, so a horizon crossing a band boundary picks up
/// each band's rate for the years it covers. Year 0 is exactly 1.0.
///
/// This is O(year). For repeated lookups over long horizons use
/// [`discount_factor_closed_form`] or a [`super::DiscountSchedule`].
pub fn discount_factor(year: u32, category: RateCategory) -> f64 {
    if year == 0 {
        return 1.0;
    }

    let mut factor = 1.0;
    for y in 1..=year {
        factor /= 1.0 + discount_rate(y, category);
    }
    factor
}

/// Same factor as [`discount_factor`], computed with one power per band
///
/// Agrees with the iterative loop to floating-point tolerance, not bit for bit.
pub fn discount_factor_closed_form(year: u32, category: RateCategory) -> f64 {
    if year == 0 {
        return 1.0;
    }

    let mut factor = 1.0;
    // First discounted year of the current band
    let mut first = 1u32;

    for band in category.bands() {
        if first > year {
            break;
        }
        let last = band.last_year.map_or(year, |l| l.min(year));
        if last >= first {
            let years_in_band = f64::from(last - first + 1);
            factor *= (1.0 + band.rate).powf(-years_in_band);
        }
        first = match band.last_year {
            Some(l) => l.saturating_add(1).max(first),
            None => break,
        };
    }

    factor
}

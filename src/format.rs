//! Display helpers for binaries

/// Format an amount as whole pounds with thousands separators, e.g. `£1,240,000`
pub fn pounds(amount: f64) -> String {
    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if rounded < 0.0 {
        format!("-£{}", grouped)
    } else {
        format!("£{}", grouped)
    }
}

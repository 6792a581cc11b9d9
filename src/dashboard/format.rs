//! Display formatting for dashboard values

/// Currency prefix for revenue and earnings
pub const CURRENCY_SYMBOL: &str = "₹";

/// Shown in place of a missing average rating
pub const NOT_AVAILABLE: &str = "N/A";

const RATING_STAR: &str = "★";

/// Maximum fraction digits kept when grouping amounts
const MAX_FRACTION_DIGITS: usize = 3;

/// Extra digits printed when looking for an exact halfway value. A double
/// that is not exactly halfway sits further than this from the midpoint.
const TIE_PROBE_DIGITS: usize = 25;

/// Fixed-point digits of `magnitude` (non-negative), with exact halfway
/// values rounded up
///
/// `{:.N}` breaks exact ties to even, so `4.125` would print as `4.12`.
/// Ratings averaged over a handful of reviews land on such ties often.
fn fixed_magnitude(magnitude: f64, digits: usize) -> String {
    let wide = format!("{:.*}", digits + TIE_PROBE_DIGITS, magnitude);
    let is_tie = wide
        .split_once('.')
        .and_then(|(_, frac)| frac.get(digits..))
        .map(|rest| rest.starts_with('5') && rest[1..].bytes().all(|b| b == b'0'))
        .unwrap_or(false);

    if is_tie {
        let half_unit = 0.5 / 10f64.powi(digits as i32);
        format!("{:.*}", digits, magnitude + half_unit)
    } else {
        format!("{:.*}", digits, magnitude)
    }
}

/// Format a number with comma thousands separators
///
/// Keeps at most three fraction digits and trims trailing zeros, so
/// `1234567.5` becomes `1,234,567.5` and `2000.0` becomes `2,000`.
pub fn group_thousands(value: f64) -> String {
    let value = if value.is_finite() { value } else { 0.0 };

    let fixed = fixed_magnitude(value.abs(), MAX_FRACTION_DIGITS);
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let sign = if value.is_sign_negative() && !is_zero { "-" } else { "" };

    if frac_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, frac_part)
    }
}

/// `₹` followed by the grouped amount
pub fn format_currency(amount: f64) -> String {
    format!("{}{}", CURRENCY_SYMBOL, group_thousands(amount))
}

/// Two decimals and a star, e.g. `4.50 ★`
pub fn format_rating(rating: f64) -> String {
    let sign = if rating < 0.0 { "-" } else { "" };
    format!("{}{} {}", sign, fixed_magnitude(rating.abs(), 2), RATING_STAR)
}

/// Rating for the summary card; absent or zero averages read `N/A ★`
pub fn format_average_rating(rating: Option<f64>) -> String {
    match rating {
        Some(r) if r != 0.0 && r.is_finite() => format_rating(r),
        _ => format!("{} {}", NOT_AVAILABLE, RATING_STAR),
    }
}

//! Display formatting for prices. Amounts are integer rupiah everywhere else.

/// Groups the digits of `amount` in threes using `separator`
fn group_digits(amount: u128, separator: char) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats a rupiah amount as `Rp 3.200.000`
pub fn format_idr(amount: u64) -> String {
    format!("Rp {}", group_digits(u128::from(amount), '.'))
}

/// Converts rupiah to dollars at `rate` rupiah per dollar, rounding half-up to cents.
///
/// Returns `None` when `rate` is zero.
pub fn format_usd(amount: u64, rate: u64) -> Option<String> {
    if rate == 0 {
        return None;
    }
    let rate = u128::from(rate);
    let cents = (u128::from(amount) * 100 + rate / 2) / rate;
    Some(format!("${}.{:02}", group_digits(cents / 100, ','), cents % 100))
}

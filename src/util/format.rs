//! Display formatting for amounts, counts, and date ranges.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group digits in threes: `1500000` -> `1,500,000`.
pub fn group_digits(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// KRW amount: `₩1,500,000`.
pub fn format_won(amount: i64) -> String {
    format!("₩{}", group_digits(amount))
}

/// Compact audience size: `950`, `1.2K`, `3.4M`.
///
/// Rounds to one decimal before picking the unit, so `999_950` is `1M`.
pub fn format_count(count: i64) -> String {
    let abs = count.unsigned_abs();
    if abs < 1_000 {
        return count.to_string();
    }
    // Tenths of a thousand, rounded half up.
    let mut tenths = (abs + 50) / 100;
    let mut suffix = "K";
    if tenths >= 10_000 {
        tenths = (abs + 50_000) / 100_000;
        suffix = "M";
    }
    let sign = if count < 0 { "-" } else { "" };
    let (whole, frac) = (tenths / 10, tenths % 10);
    if frac == 0 { format!("{sign}{whole}{suffix}") } else { format!("{sign}{whole}.{frac}{suffix}") }
}

/// Percentage with one decimal: `3.456` -> `3.5%`.
pub fn format_rate(rate: f64) -> String {
    format!("{rate:.1}%")
}

/// `start ~ end`, collapsing missing ends.
pub fn format_period(start: &str, end: &str) -> String {
    match (start.trim(), end.trim()) {
        ("", "") => "Dates to be announced".to_owned(),
        (start, "") => format!("From {start}"),
        ("", end) => format!("Until {end}"),
        (start, end) => format!("{start} ~ {end}"),
    }
}

use super::*;

#[test]
fn group_digits_inserts_commas() {
    assert_eq!(group_digits(0), "0");
    assert_eq!(group_digits(999), "999");
    assert_eq!(group_digits(1_000), "1,000");
    assert_eq!(group_digits(1_500_000), "1,500,000");
    assert_eq!(group_digits(-12_345), "-12,345");
}

#[test]
fn format_won_prefixes_currency() {
    assert_eq!(format_won(300_000), "₩300,000");
}

#[test]
fn format_count_compacts_large_values() {
    assert_eq!(format_count(950), "950");
    assert_eq!(format_count(1_000), "1K");
    assert_eq!(format_count(1_260), "1.3K");
    assert_eq!(format_count(3_400_000), "3.4M");
    assert_eq!(format_count(-2_000), "-2K");
}

#[test]
fn format_count_rolls_over_to_next_unit_after_rounding() {
    assert_eq!(format_count(999), "999");
    assert_eq!(format_count(999_949), "999.9K");
    assert_eq!(format_count(999_950), "1M");
    assert_eq!(format_count(1_250), "1.3K");
    assert_eq!(format_count(i64::MIN), "-9223372036854.8M");
}

#[test]
fn format_rate_one_decimal() {
    assert_eq!(format_rate(3.456), "3.5%");
    assert_eq!(format_rate(0.0), "0.0%");
}

#[test]
fn format_period_variants() {
    assert_eq!(format_period("2024-04-01", "2024-04-30"), "2024-04-01 ~ 2024-04-30");
    assert_eq!(format_period("2024-04-01", ""), "From 2024-04-01");
    assert_eq!(format_period("", "2024-04-30"), "Until 2024-04-30");
    assert_eq!(format_period(" ", ""), "Dates to be announced");
}

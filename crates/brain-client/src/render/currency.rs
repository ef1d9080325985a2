//! Currency formatting with thousands separators

/// Format an amount with comma grouping and at most three fraction digits,
/// trailing zeros dropped: `1500.0` → `1,500`, `3200.5` → `3,200.5`.
/// Ties round half away from zero: `0.0625` → `0.063`.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    // `{:.3}` alone rounds exact ties to even
    let rounded = (value.abs() * 1000.0).round() / 1000.0;
    let fixed = format!("{:.3}", rounded);
    let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');

    let mut out = String::with_capacity(fixed.len() + whole.len() / 3 + 1);
    if value < 0.0 && (whole.chars().any(|c| c != '0') || !fraction.is_empty()) {
        out.push('-');
    }
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out
}

/// [`group_thousands`] with a leading dollar sign
pub fn format_currency(value: f64) -> String {
    format!("${}", group_thousands(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_small_values_are_ungrouped() {
        assert_eq!(group_thousands(0.0), "0");
        assert_eq!(group_thousands(500.0), "500");
        assert_eq!(group_thousands(999.0), "999");
    }

    #[test]
    fn test_grouping() {
        assert_eq!(group_thousands(1500.0), "1,500");
        assert_eq!(group_thousands(15000.0), "15,000");
        assert_eq!(group_thousands(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(group_thousands(3200.5), "3,200.5");
        assert_eq!(group_thousands(450.25), "450.25");
        assert_eq!(group_thousands(1.23456), "1.235");
        assert_eq!(group_thousands(999.9996), "1,000");
    }

    #[test]
    fn test_ties_round_away_from_zero() {
        assert_eq!(group_thousands(0.0625), "0.063");
        assert_eq!(group_thousands(1234.5625), "1,234.563");
        assert_eq!(group_thousands(-0.0625), "-0.063");
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(group_thousands(-2500.0), "-2,500");
        assert_eq!(group_thousands(-0.0001), "0");
    }

    #[test]
    fn test_currency_prefix() {
        assert_eq!(format_currency(5000.0), "$5,000");
    }

    /// Reference grouping built from the digit string in reverse
    fn reference_grouping(n: u64) -> String {
        let digits: Vec<char> = n.to_string().chars().rev().collect();
        let grouped: Vec<String> = digits
            .chunks(3)
            .map(|chunk| chunk.iter().rev().collect())
            .collect();
        grouped.into_iter().rev().collect::<Vec<_>>().join(",")
    }

    proptest! {
        /// Property: whole amounts group exactly like the reference
        #[test]
        fn whole_amounts_match_reference(n in 0u64..1_000_000_000_000) {
            prop_assert_eq!(group_thousands(n as f64), reference_grouping(n));
        }

        /// Property: removing separators gives back the plain number
        #[test]
        fn separators_are_the_only_addition(n in 0u64..1_000_000_000_000) {
            let grouped = group_thousands(n as f64);
            prop_assert_eq!(grouped.replace(',', ""), n.to_string());
        }
    }
}

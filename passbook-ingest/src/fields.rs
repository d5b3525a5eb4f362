//! Field cleaning: quote/whitespace stripping and money-string parsing.

use std::sync::OnceLock;

use regex::Regex;

fn non_numeric_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9.\-]").expect("invalid non-numeric regex"))
}

fn leading_number_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^-?(?:[0-9]+\.?[0-9]*|\.[0-9]+)").expect("invalid leading number regex")
    })
}

/// Trim whitespace and remove one pair of quotes wrapping the whole field.
pub fn clean_field(raw: &str) -> String {
    let s = raw.trim();
    let unquoted = if s.len() >= 2 {
        s.strip_prefix('"')
            .and_then(|rest| rest.strip_suffix('"'))
            .unwrap_or(s)
    } else {
        s
    };
    unquoted.trim().to_string()
}

/// Strip everything but digits, `.` and `-`, then read the longest leading decimal.
///
/// Returns `None` when nothing numeric remains. Sign is kept here.
pub fn parse_amount(raw: &str) -> Option<f64> {
    let compact: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let digits = non_numeric_re().replace_all(&compact, "");
    let m = leading_number_re().find(&digits)?;
    m.as_str().parse::<f64>().ok()
}

/// Money string to a non-negative amount. Empty or unparseable input is zero.
///
/// Direction comes from which column held the value, so any sign is dropped.
pub fn clean_amount(raw: &str) -> f64 {
    if raw.is_empty() {
        return 0.0;
    }
    parse_amount(raw).map(f64::abs).unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_field_strips_wrapping_quotes() {
        assert_eq!(clean_field("  \"ABC STORE\"  "), "ABC STORE");
        assert_eq!(clean_field("\" padded \""), "padded");
        assert_eq!(clean_field("plain"), "plain");
    }

    #[test]
    fn test_clean_field_leaves_partial_quoting() {
        assert_eq!(clean_field("\"half"), "\"half");
        assert_eq!(clean_field("say \"hi\""), "say \"hi\"");
        assert_eq!(clean_field("\""), "\"");
        assert_eq!(clean_field("\"\""), "");
    }

    #[test]
    fn test_clean_amount_basic() {
        assert_eq!(clean_amount("1500.00"), 1500.0);
        assert_eq!(clean_amount(""), 0.0);
        assert_eq!(clean_amount("   "), 0.0);
    }

    #[test]
    fn test_clean_amount_strips_symbols_and_separators() {
        assert_eq!(clean_amount("₹ 1,23,456.50"), 123456.5);
        assert_eq!(clean_amount("INR 2 500"), 2500.0);
        assert_eq!(clean_amount("\"3,000.00\""), 3000.0);
    }

    #[test]
    fn test_clean_amount_discards_sign() {
        assert_eq!(clean_amount("-42.10"), 42.1);
    }

    #[test]
    fn test_clean_amount_unparseable_is_zero() {
        assert_eq!(clean_amount("N/A"), 0.0);
        assert_eq!(clean_amount("-"), 0.0);
        assert_eq!(clean_amount("--5"), 0.0);
    }

    #[test]
    fn test_parse_amount_reads_leading_decimal() {
        assert_eq!(parse_amount("1.2.3"), Some(1.2));
        assert_eq!(parse_amount("12-34"), Some(12.0));
        assert_eq!(parse_amount(".5"), Some(0.5));
        assert_eq!(parse_amount("UPI"), None);
        assert_eq!(parse_amount(""), None);
    }
}

//! Display helpers shared by the web pages and the terminal console.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

/// Placeholder rendered for missing values.
pub const EM_DASH: &str = "—";

const DATE_DISPLAY_FORMAT: &str = "%d %b %Y";

/// Formats a value with en-AU digit grouping and at most two fractional
/// digits, followed by the unit when one is given.
///
/// Missing and non-finite values render as an em-dash.
pub fn format_number(value: Option<f64>, unit: &str) -> String {
    let Some(value) = value.filter(|v| v.is_finite()) else {
        return EM_DASH.to_string();
    };

    let rounded = round_to_two_places(value);
    let (sign, unsigned) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };
    let (integer, fraction) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    let mut number = format!("{}{}", sign, group_thousands(integer));
    if let Some(fraction) = fraction {
        number.push('.');
        number.push_str(fraction);
    }

    let unit = unit.trim();
    if unit.is_empty() {
        number
    } else {
        format!("{} {}", number, unit)
    }
}

/// Rounds half away from zero on the shortest decimal representation of
/// `value` and strips trailing zeros.
fn round_to_two_places(value: f64) -> String {
    match Decimal::from_str(&value.to_string()) {
        Ok(decimal) => {
            let rounded = decimal
                .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
                .normalize();
            if rounded.is_zero() {
                "0".to_string()
            } else {
                rounded.to_string()
            }
        }
        // Beyond Decimal's range; fall back to float formatting.
        Err(_) => {
            let fixed = format!("{:.2}", value);
            fixed.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats an ISO-8601 date or timestamp as `dd Mon yyyy`.
///
/// Missing input renders as an em-dash. Input that cannot be parsed is
/// logged and returned unchanged.
pub fn format_date(raw: Option<&str>) -> String {
    let raw = match raw.map(str::trim) {
        None | Some("") => return EM_DASH.to_string(),
        Some(raw) => raw,
    };

    match parse_iso_date(raw) {
        Some(date) => date.format(DATE_DISPLAY_FORMAT).to_string(),
        None => {
            log::error!("Failed to format date '{}': not an ISO-8601 date", raw);
            raw.to_string()
        }
    }
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.date_naive());
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(timestamp.date());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01-01", raw), "%Y-%m-%d"))
        .ok()
}

/// Raw numeric value or an em-dash, for figures shown without grouping.
pub fn display_or_dash(value: Option<f64>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| EM_DASH.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_missing_value() {
        assert_eq!(format_number(None, "AUD"), "—");
        assert_eq!(format_number(Some(f64::NAN), "AUD"), "—");
    }

    #[test]
    fn test_format_number_groups_and_appends_unit() {
        assert_eq!(format_number(Some(1234.5), "AUD"), "1,234.5 AUD");
        assert_eq!(format_number(Some(1234567.891), "AUD"), "1,234,567.89 AUD");
        assert_eq!(format_number(Some(999.0), ""), "999");
        assert_eq!(format_number(Some(1000.0), "  "), "1,000");
    }

    #[test]
    fn test_format_number_rounding() {
        assert_eq!(format_number(Some(1.005), ""), "1.01");
        assert_eq!(format_number(Some(2.499), "%"), "2.5 %");
        assert_eq!(format_number(Some(0.001), ""), "0");
        assert_eq!(format_number(Some(-0.001), ""), "0");
    }

    #[test]
    fn test_format_number_negative() {
        assert_eq!(format_number(Some(-1234567.0), "people"), "-1,234,567 people");
        assert_eq!(format_number(Some(-12.345), ""), "-12.35");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands("1"), "1");
        assert_eq!(group_thousands("123"), "123");
        assert_eq!(group_thousands("1234"), "1,234");
        assert_eq!(group_thousands("123456"), "123,456");
    }

    #[test]
    fn test_format_date_missing() {
        assert_eq!(format_date(None), "—");
        assert_eq!(format_date(Some("")), "—");
    }

    #[test]
    fn test_format_date_invalid_returns_input() {
        assert_eq!(format_date(Some("not-a-date")), "not-a-date");
        assert_eq!(format_date(Some("2024-13-45")), "2024-13-45");
    }

    #[test]
    fn test_format_date_iso_variants() {
        assert_eq!(format_date(Some("2024-03-01")), "01 Mar 2024");
        assert_eq!(format_date(Some("2024-03-01T10:15:00Z")), "01 Mar 2024");
        assert_eq!(format_date(Some("2024-03-01T23:15:00+10:00")), "01 Mar 2024");
        assert_eq!(format_date(Some("2024-03-01T10:15:00.123")), "01 Mar 2024");
        assert_eq!(format_date(Some("2024-03")), "01 Mar 2024");
        assert_eq!(format_date(Some("2024")), "01 Jan 2024");
    }

    #[test]
    fn test_display_or_dash() {
        assert_eq!(display_or_dash(Some(0.4)), "0.4");
        assert_eq!(display_or_dash(Some(7.0)), "7");
        assert_eq!(display_or_dash(None), "—");
    }
}

//! Field normalizers for locale-formatted numeric text.
//!
//! The source table carries values like `NOK 87 mill.`, `0.3% av kjede` or
//! `1 200` in free text. Each parser here is total: malformed input yields
//! `None` (or `0` for counts), never an error.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_NUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\d.,\-]").unwrap());

static MILLIONS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*mill").unwrap());

static PERCENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\d.]+)%").unwrap());

/// Extracts a plain number from text such as `NOK 450 000` or `1,234`.
///
/// Strips everything that is not a digit, dot, comma or minus, then drops
/// commas (thousands separators) and parses the remainder as `f64`.
/// Empty input and the placeholder `-` yield `None`.
pub fn clean_number(value: &str) -> Option<f64> {
    if value.is_empty() || value == "-" {
        return None;
    }

    let cleaned = NON_NUMERIC.replace_all(value, "").replace(',', "");
    if cleaned.is_empty() {
        return None;
    }

    cleaned.parse().ok()
}

/// Parses revenue text like `NOK 87 mill.` into millions (87.0).
///
/// Values without a `mill` marker fall back to [`clean_number`], so a bare
/// `120` still parses.
pub fn parse_revenue(value: &str) -> Option<f64> {
    if value.is_empty() || value == "-" {
        return None;
    }

    if let Some(caps) = MILLIONS.captures(value) {
        return caps[1].parse().ok();
    }

    clean_number(value)
}

/// Extracts the number in front of a `%` sign, kept as raw text.
///
/// `0.3% av kjede` gives `"0.3"`. The original formatting is preserved so
/// the output renders exactly what the source table said.
pub fn parse_percent(value: &str) -> Option<String> {
    if value.is_empty() || value == "-" {
        return None;
    }

    PERCENT.captures(value).map(|caps| caps[1].to_string())
}

/// Parses an employee/location count, defaulting to 0 when nothing numeric
/// can be extracted. Fractions are truncated toward zero.
pub fn parse_count(value: &str) -> i64 {
    clean_number(value).map_or(0, |n| n as i64)
}

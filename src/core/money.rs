//! Brazilian real (BRL) text handling for price inputs.
//!
//! The input mask reads every typed digit as cents, so typing `4`, `5`, `0`
//! shows `0,04`, `0,45`, `4,50`. Parsing never fails: unreadable text counts
//! as zero and the form check decides whether that blocks submission.

use crate::domain::model::Money;
use regex::Regex;
use std::sync::LazyLock;

/// `1.234` or `12.345.678`: dots grouping thousands, no decimal part.
static THOUSANDS_ONLY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{1,3}(\.[0-9]{3})+$").expect("valid thousands pattern"));

/// Masks raw keystroke text into `<reais>,<cents>`.
///
/// Non-digits are dropped, so re-masking a masked value returns it unchanged.
pub fn format_brl_input(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    let significant = digits.trim_start_matches('0');
    let padded = format!("{:0>3}", significant);
    let (reais, cents) = padded.split_at(padded.len() - 2);
    format!("{},{}", reais, cents)
}

/// Renders a canonical amount the same way the input mask would show it.
pub fn format_brl(amount: Money) -> String {
    amount.to_string()
}

/// Reads masked or hand-typed BRL text (`4,50`, `R$ 1.234,56`, `4.5`).
pub fn parse_brl(text: &str) -> Money {
    match parse_cents(text) {
        Some(cents) => Money::from_cents(cents),
        None => {
            tracing::trace!(input = text, "unreadable BRL text treated as zero");
            Money::ZERO
        }
    }
}

pub fn parse_brl_to_number(text: &str) -> f64 {
    parse_brl(text).as_f64()
}

/// Plain decimal parse for quantities such as weights. A lone comma is
/// accepted as the decimal separator.
pub fn parse_plain_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized = if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        trimmed.replacen(',', ".", 1)
    };
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_cents(text: &str) -> Option<u64> {
    let trimmed = text.trim();
    let trimmed = trimmed.strip_prefix("R$").unwrap_or(trimmed);
    let cleaned: String = trimmed.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.is_empty() {
        return None;
    }

    // With a comma present, or in `1.234` grouping, dots are thousands
    // separators. Otherwise a single dot is the decimal point.
    let (whole, fraction) = match cleaned.split_once(',') {
        Some((whole, fraction)) => (whole.replace('.', ""), fraction.to_string()),
        None if THOUSANDS_ONLY.is_match(&cleaned) => (cleaned.replace('.', ""), String::new()),
        None => match cleaned.split_once('.') {
            Some((whole, fraction)) => (whole.to_string(), fraction.to_string()),
            None => (cleaned.clone(), String::new()),
        },
    };

    let is_digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if !is_digits(&whole) || !is_digits(&fraction) || (whole.is_empty() && fraction.is_empty()) {
        return None;
    }

    let whole_value: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut fraction_digits = fraction.bytes().map(|b| u64::from(b - b'0'));
    let tenths = fraction_digits.next().unwrap_or(0);
    let hundredths = fraction_digits.next().unwrap_or(0);
    let round_up = fraction_digits.next().is_some_and(|d| d >= 5);

    whole_value
        .checked_mul(100)?
        .checked_add(tenths * 10 + hundredths)?
        .checked_add(u64::from(round_up))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_reads_digits_as_cents() {
        assert_eq!(format_brl_input("450"), "4,50");
        assert_eq!(format_brl_input("4"), "0,04");
        assert_eq!(format_brl_input("45"), "0,45");
        assert_eq!(format_brl_input("123456"), "1234,56");
    }

    #[test]
    fn test_mask_empty_and_zero() {
        assert_eq!(format_brl_input(""), "0,00");
        assert_eq!(format_brl_input("0"), "0,00");
        assert_eq!(format_brl_input("0000"), "0,00");
        assert_eq!(format_brl_input("abc"), "0,00");
    }

    #[test]
    fn test_mask_drops_leading_zeros_and_symbols() {
        assert_eq!(format_brl_input("0,045"), "0,45");
        assert_eq!(format_brl_input("R$ 4,505"), "45,05");
        assert_eq!(format_brl_input("00012"), "0,12");
    }

    #[test]
    fn test_mask_handles_long_input() {
        let raw = "9".repeat(40);
        let masked = format_brl_input(&raw);
        assert_eq!(masked.len(), 41);
        assert_eq!(format_brl_input(&masked), masked);
    }

    #[test]
    fn test_parse_masked_text() {
        assert_eq!(parse_brl("4,50"), Money::from_cents(450));
        assert_eq!(parse_brl_to_number("4,50"), 4.5);
        assert_eq!(parse_brl("0,05").cents(), 5);
        assert_eq!(parse_brl("R$ 1.234,56").cents(), 123_456);
    }

    #[test]
    fn test_parse_loose_text() {
        assert_eq!(parse_brl("4.5").cents(), 450);
        assert_eq!(parse_brl("12").cents(), 1200);
        assert_eq!(parse_brl(",5").cents(), 50);
        assert_eq!(parse_brl("1,005").cents(), 101);
        assert_eq!(parse_brl("1,004").cents(), 100);
    }

    #[test]
    fn test_parse_dotted_thousands() {
        assert_eq!(parse_brl("1.234").cents(), 123_400);
        assert_eq!(parse_brl("12.345").cents(), 1_234_500);
        assert_eq!(parse_brl("1.234.567").cents(), 123_456_700);
        assert_eq!(parse_brl("R$ 1.234"), parse_brl("1.234,00"));
        // Not a thousands grouping, so the dot stays a decimal point.
        assert_eq!(parse_brl("1.23").cents(), 123);
        assert_eq!(parse_brl("1234.5").cents(), 123_450);
        assert_eq!(parse_brl("1.2345").cents(), 123);
    }

    #[test]
    fn test_parse_garbage_is_zero() {
        assert_eq!(parse_brl(""), Money::ZERO);
        assert_eq!(parse_brl("abc"), Money::ZERO);
        assert_eq!(parse_brl("-4,50"), Money::ZERO);
        assert_eq!(parse_brl("4,5,0"), Money::ZERO);
        assert_eq!(parse_brl(","), Money::ZERO);
        assert_eq!(parse_brl(&"9".repeat(30)), Money::ZERO);
    }

    #[test]
    fn test_plain_number() {
        assert_eq!(parse_plain_number("0.15"), Some(0.15));
        assert_eq!(parse_plain_number("0,15"), Some(0.15));
        assert_eq!(parse_plain_number("  2 "), Some(2.0));
        assert_eq!(parse_plain_number(""), None);
        assert_eq!(parse_plain_number("kg"), None);
        assert_eq!(parse_plain_number("inf"), None);
        assert_eq!(parse_plain_number("NaN"), None);
    }
}

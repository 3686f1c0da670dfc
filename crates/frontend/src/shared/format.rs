//! Locale-aware number and date formatting.
//!
//! Percentages always use fixed one-decimal precision; monetary values use
//! the locale's grouping and decimal separators. Switching locale changes
//! only symbols and separators, never the underlying digits.

use crate::shared::locale::Locale;
use chrono::NaiveDate;
use contracts::shared::indicators::ValueFormat;

pub fn format_value(val: f64, fmt: ValueFormat, locale: Locale) -> String {
    match fmt {
        ValueFormat::Money => format_currency(val, locale),
        ValueFormat::Percent => format_percent(val, locale),
        ValueFormat::Integer => format_integer(val as i64, locale),
    }
}

/// Currency with two decimals: `R$ 1.234,56` (pt-BR) / `$1,234.56` (en).
pub fn format_currency(val: f64, locale: Locale) -> String {
    let negative = val < 0.0;
    let cents = (val.abs() * 100.0).round() as i64;
    let int_part = cents / 100;
    let frac = cents % 100;
    let sign = if negative { "-" } else { "" };

    match locale {
        Locale::PtBr => format!("R$ {}{},{:02}", sign, group_thousands(int_part, '.'), frac),
        Locale::En => format!("${}{}.{:02}", sign, group_thousands(int_part, ','), frac),
    }
}

/// Percentage with fixed one-decimal precision: `20,0%` (pt-BR) / `20.0%` (en).
pub fn format_percent(val: f64, locale: Locale) -> String {
    let formatted = format!("{:.1}%", val);
    match locale {
        Locale::PtBr => formatted.replace('.', ","),
        Locale::En => formatted,
    }
}

pub fn format_integer(n: i64, locale: Locale) -> String {
    let sep = match locale {
        Locale::PtBr => '.',
        Locale::En => ',',
    };
    let sign = if n < 0 { "-" } else { "" };
    format!("{}{}", sign, group_thousands(n.abs(), sep))
}

/// Calendar date: `07/01/2024` (pt-BR) / `01/07/2024` (en).
pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::PtBr => date.format("%d/%m/%Y").to_string(),
        Locale::En => date.format("%m/%d/%Y").to_string(),
    }
}

fn group_thousands(n: i64, sep: char) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(sep);
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn digits(s: &str) -> String {
        s.chars().filter(|c| c.is_ascii_digit()).collect()
    }

    #[test]
    fn currency_pt_br() {
        assert_eq!(format_currency(1234.56, Locale::PtBr), "R$ 1.234,56");
        assert_eq!(format_currency(500.0, Locale::PtBr), "R$ 500,00");
        assert_eq!(format_currency(-42.5, Locale::PtBr), "R$ -42,50");
        assert_eq!(format_currency(1_000_000.0, Locale::PtBr), "R$ 1.000.000,00");
    }

    #[test]
    fn currency_en() {
        assert_eq!(format_currency(1234.56, Locale::En), "$1,234.56");
        assert_eq!(format_currency(500.0, Locale::En), "$500.00");
        assert_eq!(format_currency(-42.5, Locale::En), "$-42.50");
    }

    #[test]
    fn percent_has_one_decimal() {
        assert_eq!(format_percent(20.0, Locale::En), "20.0%");
        assert_eq!(format_percent(20.0, Locale::PtBr), "20,0%");
        assert_eq!(format_percent(7.25, Locale::En), "7.2%");
        assert_eq!(format_percent(-3.14, Locale::PtBr), "-3,1%");
    }

    #[test]
    fn integer_grouping() {
        assert_eq!(format_integer(1234567, Locale::PtBr), "1.234.567");
        assert_eq!(format_integer(1234567, Locale::En), "1,234,567");
        assert_eq!(format_integer(42, Locale::En), "42");
    }

    #[test]
    fn date_per_locale() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        assert_eq!(format_date(date, Locale::PtBr), "07/01/2024");
        assert_eq!(format_date(date, Locale::En), "01/07/2024");
    }

    #[test]
    fn locale_switch_preserves_digits() {
        // Same document, different locale: only symbols/separators differ.
        for val in [0.0, 500.0, 1234.56, 98765.4] {
            assert_eq!(
                digits(&format_currency(val, Locale::PtBr)),
                digits(&format_currency(val, Locale::En))
            );
            assert_eq!(
                digits(&format_percent(val, Locale::PtBr)),
                digits(&format_percent(val, Locale::En))
            );
        }
    }
}

//! Text formatting for transfer rows
//!
//! Amounts are rendered in the transfer's own currency. Dates are rendered
//! in UTC with one of two fixed granularities chosen per adapter.

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

/// Date/time granularity used by a transfers adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateStyle {
    /// `January 5, 2024 at 3:04 PM`
    Long,
    /// `1/5/24, 3:04 PM`
    Short,
}

impl DateStyle {
    pub fn format(self, date: &DateTime<Utc>) -> String {
        match self {
            DateStyle::Long => date.format("%B %-d, %Y at %-I:%M %p").to_string(),
            DateStyle::Short => date.format("%-m/%-d/%y, %-I:%M %p").to_string(),
        }
    }
}

/// Symbol for well-known ISO 4217 codes
fn currency_symbol(code: &str) -> Option<&'static str> {
    let symbol = match code {
        "USD" => "$",
        "EUR" => "€",
        "GBP" => "£",
        "JPY" => "¥",
        "CNY" => "CN¥",
        "INR" => "₹",
        "KRW" => "₩",
        "CAD" => "CA$",
        "AUD" => "A$",
        "BRL" => "R$",
        "MXN" => "MX$",
        _ => return None,
    };
    Some(symbol)
}

/// Number of minor units shown for a currency
fn minor_units(code: &str) -> u32 {
    match code {
        "JPY" | "KRW" | "VND" | "CLP" | "ISK" => 0,
        "BHD" | "KWD" | "JOD" | "OMR" | "TND" | "IQD" | "LYD" => 3,
        _ => 2,
    }
}

/// Insert `,` every three digits of an integer string
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Render `amount` in the currency named by `code`
///
/// Known codes get their symbol (`$1,234.50`), anything else is prefixed
/// with the code itself (`CHF 1,234.50`). Rounds half to even.
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let code = code.trim().to_uppercase();
    let scale = minor_units(&code);

    let mut rounded = amount
        .round_dp_with_strategy(scale, RoundingStrategy::MidpointNearestEven)
        .abs();
    rounded.rescale(scale);
    let text = rounded.to_string();

    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (text.as_str(), None),
    };

    let mut number = group_thousands(int_part);
    if let Some(frac) = frac_part {
        number.push('.');
        number.push_str(frac);
    }

    let sign = if amount.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    match currency_symbol(&code) {
        Some(symbol) => format!("{}{}{}", sign, symbol, number),
        None => format!("{}{} {}", sign, code, number),
    }
}

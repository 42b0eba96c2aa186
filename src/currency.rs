//! Currency types, FX conversion and display formatting

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currencies (ISO 4217 codes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// US Dollar
    USD,
    /// Euro
    EUR,
}

impl Currency {
    /// Get ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "€",
        }
    }

    /// Parse from ISO code
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Convert a USD amount to local currency, given the rate in USD per local unit.
pub fn usd_to_local(amount_usd: f64, usd_per_local: f64) -> f64 {
    amount_usd / usd_per_local
}

/// Convert a local amount to USD, given the rate in USD per local unit.
pub fn local_to_usd(amount_local: f64, usd_per_local: f64) -> f64 {
    amount_local * usd_per_local
}

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

fn format_grouped(value: f64, decimals: usize) -> String {
    let rendered = format!("{:.*}", decimals, value.abs());
    let (int_part, frac_part) = match rendered.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rendered.as_str(), None),
    };

    let mut out = group_thousands(int_part);
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Format an amount with symbol and thousands separators, e.g. `-$1,234.50`.
pub fn format_currency(value: f64, currency: Currency, decimals: usize) -> String {
    if !value.is_finite() {
        return format!("{}{}", currency.symbol(), value);
    }

    let body = format_grouped(value, decimals);
    let zero = body.chars().all(|c| c == '0' || c == '.' || c == ',');
    if value < 0.0 && !zero {
        format!("-{}{}", currency.symbol(), body)
    } else {
        format!("{}{}", currency.symbol(), body)
    }
}

/// Format a gram quantity, e.g. `1,234.5678 g`.
pub fn format_grams(value: f64) -> String {
    if !value.is_finite() {
        return format!("{} g", value);
    }
    let sign = if value < 0.0 { "-" } else { "" };
    format!("{}{} g", sign, format_grouped(value, 4))
}

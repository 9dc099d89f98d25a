//! Presentation helpers for amounts held in minor currency units.

use dues_domain::PaymentStatus;

/// Largest number of minor-unit digits a `u64` amount can be split into.
pub const MAX_PRECISION: u8 = 19;

/// Locale-aware rendering preferences for monetary amounts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmountFormat {
    pub currency: String,
    pub precision: u8,
    pub decimal_separator: char,
    pub grouping_separator: char,
}

impl Default for AmountFormat {
    fn default() -> Self {
        Self {
            currency: "USD".into(),
            precision: 2,
            decimal_separator: '.',
            grouping_separator: ',',
        }
    }
}

impl AmountFormat {
    /// Builds a format for `locale` (e.g. `es-CL`, `en-US`). Locales whose
    /// language writes decimal commas swap the separators.
    pub fn for_locale(locale: &str, currency: &str, precision: Option<u8>) -> Self {
        let currency = currency.trim().to_uppercase();
        let precision = precision
            .unwrap_or_else(|| minor_units_for(&currency))
            .min(MAX_PRECISION);
        let language = locale
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        let (decimal_separator, grouping_separator) = match language.as_str() {
            "es" | "pt" | "de" | "it" | "nl" | "fr" => (',', '.'),
            _ => ('.', ','),
        };
        Self {
            currency,
            precision,
            decimal_separator,
            grouping_separator,
        }
    }

    /// Renders `cents` as e.g. `USD 1,234.50`.
    pub fn format(&self, cents: u64) -> String {
        format!("{} {}", self.currency, self.format_number(cents))
    }

    /// Renders a signed amount, prefixing negatives with `-`.
    pub fn format_signed(&self, cents: i64) -> String {
        let body = self.format_number(cents.unsigned_abs());
        if cents < 0 {
            format!("{} -{}", self.currency, body)
        } else {
            format!("{} {}", self.currency, body)
        }
    }

    fn format_number(&self, cents: u64) -> String {
        let precision = self.precision.min(MAX_PRECISION);
        if precision == 0 {
            return group_digits(&cents.to_string(), self.grouping_separator);
        }
        let scale = 10u64.pow(u32::from(precision));
        let whole = group_digits(&(cents / scale).to_string(), self.grouping_separator);
        format!(
            "{}{}{:0width$}",
            whole,
            self.decimal_separator,
            cents % scale,
            width = usize::from(precision)
        )
    }
}

/// Number of minor units conventionally used by `code`.
pub fn minor_units_for(code: &str) -> u8 {
    match code {
        "JPY" | "CLP" | "PYG" | "KRW" => 0,
        "KWD" | "BHD" => 3,
        _ => 2,
    }
}

/// Short fixed-width label used in tabular reports.
pub fn status_label(status: PaymentStatus) -> &'static str {
    match status {
        PaymentStatus::Current => "CURRENT",
        PaymentStatus::Overdue => "OVERDUE",
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

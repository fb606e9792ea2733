//! Display currencies and amount formatting.
//!
//! The selected [`Currency`] only changes the symbol used when rendering; stored
//! amounts are never converted.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{domain::TransactionKind, errors::ExpenseError};

/// Display currencies offered by the currency picker.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    #[default]
    Rupee,
    Dollar,
    Euro,
    Pound,
    Yen,
    AustralianDollar,
}

const ALL: [Currency; 6] = [
    Currency::Rupee,
    Currency::Dollar,
    Currency::Euro,
    Currency::Pound,
    Currency::Yen,
    Currency::AustralianDollar,
];

const MAJOR_PRESETS: [&str; 6] = ["10", "50", "100", "200", "400", "500"];

impl Currency {
    /// All currencies in picker order.
    pub fn all() -> &'static [Currency] {
        &ALL
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Currency::Rupee => "₹",
            Currency::Dollar => "$",
            Currency::Euro => "€",
            Currency::Pound => "£",
            Currency::Yen => "¥",
            Currency::AustralianDollar => "A$",
        }
    }

    /// ISO 4217 code stamped on newly created records.
    pub fn code(self) -> &'static str {
        match self {
            Currency::Rupee => "INR",
            Currency::Dollar => "USD",
            Currency::Euro => "EUR",
            Currency::Pound => "GBP",
            Currency::Yen => "JPY",
            Currency::AustralianDollar => "AUD",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Currency::Rupee => "Indian Rupee",
            Currency::Dollar => "US Dollar",
            Currency::Euro => "Euro",
            Currency::Pound => "British Pound",
            Currency::Yen => "Japanese Yen",
            Currency::AustralianDollar => "Australian Dollar",
        }
    }

    /// Preset amounts offered as shortcut chips when entering a transaction.
    pub fn quick_amounts(self) -> &'static [&'static str] {
        match self {
            Currency::Rupee => &["100", "500", "1000", "2000", "4000", "5000"],
            Currency::Yen => &["1000", "5000", "10000", "20000", "40000", "50000"],
            Currency::Dollar | Currency::Euro | Currency::Pound | Currency::AustralianDollar => {
                &MAJOR_PRESETS
            }
        }
    }

    /// Enum name as persisted by the preference store, e.g. `AUSTRALIAN_DOLLAR`.
    pub fn key(self) -> &'static str {
        match self {
            Currency::Rupee => "RUPEE",
            Currency::Dollar => "DOLLAR",
            Currency::Euro => "EURO",
            Currency::Pound => "POUND",
            Currency::Yen => "YEN",
            Currency::AustralianDollar => "AUSTRALIAN_DOLLAR",
        }
    }

    pub fn from_code(code: &str) -> Option<Currency> {
        let code = code.trim();
        ALL.iter()
            .copied()
            .find(|currency| currency.code().eq_ignore_ascii_case(code))
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.symbol())
    }
}

impl FromStr for Currency {
    type Err = ExpenseError;

    /// Accepts the enum key (`DOLLAR`, `australian_dollar`) or an ISO code (`USD`).
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let normalized = trimmed.replace(['-', ' '], "_");
        ALL.iter()
            .copied()
            .find(|currency| currency.key().eq_ignore_ascii_case(&normalized))
            .or_else(|| Currency::from_code(trimmed))
            .ok_or_else(|| ExpenseError::UnknownCurrency(trimmed.to_string()))
    }
}

/// Where the minus sign goes for negative amounts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NegativeStyle {
    /// `$-12.34`: symbol first, then the signed number.
    #[default]
    AfterSymbol,
    /// `-$12.34`
    BeforeSymbol,
}

/// Renders `amount` with two fractional digits prefixed by the currency symbol.
pub fn format_amount(amount: f64, currency: Currency) -> String {
    format_amount_with(amount, currency, NegativeStyle::default())
}

pub fn format_amount_with(amount: f64, currency: Currency, style: NegativeStyle) -> String {
    let body = format!("{:.2}", amount.abs());
    // -0.001 rounds to zero and must not render as "-0.00"
    let negative = amount < 0.0 && body.bytes().any(|b| matches!(b, b'1'..=b'9'));
    let symbol = currency.symbol();
    match (negative, style) {
        (false, _) => format!("{symbol}{body}"),
        (true, NegativeStyle::AfterSymbol) => format!("{symbol}-{body}"),
        (true, NegativeStyle::BeforeSymbol) => format!("-{symbol}{body}"),
    }
}

/// Transaction-row rendering: `+` for income, `-` for expense, then the amount.
pub fn format_signed(amount: f64, kind: TransactionKind, currency: Currency) -> String {
    let sign = match kind {
        TransactionKind::Income => '+',
        TransactionKind::Expense => '-',
    };
    format!("{sign}{}", format_amount(amount, currency))
}

use colored::Colorize;

use crate::core::aggregation::{CategoryTotal, MonthlyTotals};
use crate::core::feed::FeedRenderer;
use crate::core::services::Totals;
use crate::currency::{format_amount, format_signed, Currency};
use crate::domain::{TransactionKind, TransactionRecord};

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Section,
    Info,
    Success,
    Warning,
}

pub fn styled(kind: MessageKind, text: &str) -> String {
    match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()).bold().to_string(),
        MessageKind::Info => text.to_string(),
        MessageKind::Success => text.green().to_string(),
        MessageKind::Warning => format!("WARNING: {text}").yellow().to_string(),
    }
}

/// Colours a pre-formatted amount by direction; balances go red when negative.
pub fn colored_amount(text: String, positive: bool) -> String {
    if positive {
        text.green().to_string()
    } else {
        text.red().to_string()
    }
}

pub fn totals_lines(totals: &Totals, currency: Currency) -> Vec<String> {
    vec![
        format!(
            "Income:  {}",
            colored_amount(format_amount(totals.income, currency), true)
        ),
        format!(
            "Expense: {}",
            colored_amount(format_amount(totals.expense, currency), false)
        ),
        format!(
            "Balance: {}",
            colored_amount(format_amount(totals.balance, currency), totals.balance >= 0.0)
        ),
    ]
}

pub fn transaction_line(record: &TransactionRecord, currency: Currency) -> String {
    let amount = colored_amount(
        format_signed(record.amount, record.kind, currency),
        record.is_income(),
    );
    format!(
        "{amount}  {} [{}]  {}",
        record.title,
        record.category,
        record.display_date()
    )
}

/// Plain-text rendering of the statistics feed.
pub struct TextRenderer {
    pub currency: Currency,
}

impl FeedRenderer for TextRenderer {
    type Output = String;

    fn summary(&mut self, totals: &Totals) -> String {
        format!(
            "Income: {} | Expense: {}",
            colored_amount(format_amount(totals.income, self.currency), true),
            colored_amount(format_amount(totals.expense, self.currency), false)
        )
    }

    fn balance(&mut self, balance: f64) -> String {
        format!(
            "Balance: {}",
            colored_amount(format_amount(balance, self.currency), balance >= 0.0)
        )
    }

    fn header(&mut self, title: &str) -> String {
        styled(MessageKind::Section, title)
    }

    fn category(&mut self, entry: &CategoryTotal, kind: TransactionKind) -> String {
        format!(
            "  {:<20} {:>6}  {}",
            entry.category,
            format!("{:.1}%", entry.share),
            colored_amount(
                format_amount(entry.amount, self.currency),
                kind == TransactionKind::Income
            )
        )
    }

    fn monthly(&mut self, bucket: &MonthlyTotals) -> String {
        format!(
            "  {:<10} in {}  out {}  net {}",
            bucket.label.to_string(),
            format_amount(bucket.income, self.currency),
            format_amount(bucket.expense, self.currency),
            format_amount(bucket.net(), self.currency)
        )
    }

    fn ad(&mut self) -> String {
        "  [ad]".dimmed().to_string()
    }
}

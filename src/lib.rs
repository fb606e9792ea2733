#![doc(test(attr(deny(warnings))))]

//! Expense Core turns an owner's income and expense records into the totals,
//! category rankings and monthly breakdowns shown by a personal-finance tracker,
//! and formats amounts for the selected display currency.
//!
//! ```
//! use expense_core::core::aggregation::{net_balance, total_for};
//! use expense_core::currency::{format_amount, Currency};
//! use expense_core::domain::{TransactionKind, TransactionRecord};
//!
//! let records = vec![
//!     TransactionRecord::new("1", "Salary", 1000.0, "Salary", TransactionKind::Income, "me"),
//!     TransactionRecord::new("2", "Rent", 300.0, "Bills & Utilities", TransactionKind::Expense, "me"),
//! ];
//! assert_eq!(total_for(&records, TransactionKind::Expense), 300.0);
//! assert_eq!(format_amount(net_balance(&records), Currency::Dollar), "$700.00");
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod currency;
pub mod domain;
pub mod errors;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Expense Core tracing initialized.");
    });
}

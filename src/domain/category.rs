//! Category suggestions offered when entering a transaction.
//!
//! Records store categories as free text; these lists only seed the picker.

use super::transaction::TransactionKind;

pub const INCOME_CATEGORIES: [&str; 8] = [
    "Salary",
    "Business",
    "Freelance",
    "Investment",
    "Gift",
    "Bonus",
    "Rental",
    "Other Income",
];

pub const EXPENSE_CATEGORIES: [&str; 10] = [
    "Food & Dining",
    "Transport",
    "Shopping",
    "Entertainment",
    "Bills & Utilities",
    "Healthcare",
    "Education",
    "Travel",
    "Grocery",
    "Other",
];

pub fn categories_for(kind: TransactionKind) -> &'static [&'static str] {
    match kind {
        TransactionKind::Income => &INCOME_CATEGORIES,
        TransactionKind::Expense => &EXPENSE_CATEGORIES,
    }
}

/// Pre-selected category, reapplied whenever the kind toggles.
pub fn default_category(kind: TransactionKind) -> &'static str {
    categories_for(kind)[0]
}

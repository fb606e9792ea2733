use serde::Serialize;

use crate::core::aggregation::{
    by_category, by_month, count_by_category, net_balance, recent, top_n, total_for,
    CategoryCount, CategoryTotal, MonthlyTotals,
};
use crate::domain::{TransactionKind, TransactionRecord};

/// Transactions listed on the home screen before "show more".
pub const HOME_RECENT_LIMIT: usize = 5;
/// Month buckets shown in the statistics breakdown.
pub const STATISTICS_MONTH_LIMIT: usize = 6;
/// Categories listed per direction on the profile screen.
pub const PROFILE_TOP_CATEGORIES: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Totals {
    pub income: f64,
    pub expense: f64,
    pub balance: f64,
}

impl Totals {
    pub fn of(records: &[TransactionRecord]) -> Self {
        Self {
            income: total_for(records, TransactionKind::Income),
            expense: total_for(records, TransactionKind::Expense),
            balance: net_balance(records),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomeSummary<'a> {
    pub totals: Totals,
    pub recent: Vec<&'a TransactionRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatisticsSummary {
    pub totals: Totals,
    pub expense_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub monthly: Vec<MonthlyTotals>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub transaction_count: usize,
    pub totals: Totals,
    pub top_expense_categories: Vec<CategoryCount>,
    pub top_income_categories: Vec<CategoryCount>,
}

/// Derives the per-screen views from one owner's records. Each call recomputes
/// from scratch.
pub struct SummaryService;

impl SummaryService {
    pub fn home(records: &[TransactionRecord], recent_limit: usize) -> HomeSummary<'_> {
        HomeSummary {
            totals: Totals::of(records),
            recent: recent(records, recent_limit),
        }
    }

    pub fn statistics(records: &[TransactionRecord]) -> StatisticsSummary {
        let monthly = by_month(records);
        StatisticsSummary {
            totals: Totals::of(records),
            expense_by_category: by_category(records, TransactionKind::Expense),
            income_by_category: by_category(records, TransactionKind::Income),
            monthly: top_n(&monthly, STATISTICS_MONTH_LIMIT).to_vec(),
        }
    }

    pub fn profile(records: &[TransactionRecord]) -> ProfileSummary {
        let expense_counts = count_by_category(records, TransactionKind::Expense);
        let income_counts = count_by_category(records, TransactionKind::Income);
        ProfileSummary {
            transaction_count: records.len(),
            totals: Totals::of(records),
            top_expense_categories: top_n(&expense_counts, PROFILE_TOP_CATEGORIES).to_vec(),
            top_income_categories: top_n(&income_counts, PROFILE_TOP_CATEGORIES).to_vec(),
        }
    }
}

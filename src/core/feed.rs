//! The statistics screen as a flat list of tagged items.

use serde::Serialize;

use crate::core::aggregation::{CategoryTotal, MonthlyTotals};
use crate::core::services::{StatisticsSummary, Totals};
use crate::domain::TransactionKind;

pub const HEADER_EXPENSES: &str = "Expenses";
pub const HEADER_INCOMES: &str = "Incomes";
pub const HEADER_MONTHLY: &str = "Monthly Breakdown";

/// Default spacing between ad slots within a section.
pub const AD_INTERVAL: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum StatisticsItem {
    Summary,
    Balance,
    Header(String),
    Category {
        entry: CategoryTotal,
        kind: TransactionKind,
    },
    Monthly(MonthlyTotals),
    Ad,
}

/// Flattens a statistics summary into display order.
///
/// With `ad_interval = Some(n)` an [`StatisticsItem::Ad`] follows every `n`th entry
/// of a section, except after the section's final entry. Empty sections emit
/// neither header nor entries.
pub fn build_statistics_feed(
    summary: &StatisticsSummary,
    ad_interval: Option<usize>,
) -> Vec<StatisticsItem> {
    let mut items = vec![StatisticsItem::Summary, StatisticsItem::Balance];

    push_section(
        &mut items,
        HEADER_EXPENSES,
        &summary.expense_by_category,
        ad_interval,
        |entry| StatisticsItem::Category {
            entry: entry.clone(),
            kind: TransactionKind::Expense,
        },
    );
    push_section(
        &mut items,
        HEADER_INCOMES,
        &summary.income_by_category,
        ad_interval,
        |entry| StatisticsItem::Category {
            entry: entry.clone(),
            kind: TransactionKind::Income,
        },
    );
    push_section(
        &mut items,
        HEADER_MONTHLY,
        &summary.monthly,
        ad_interval,
        |bucket| StatisticsItem::Monthly(bucket.clone()),
    );

    items
}

fn push_section<T>(
    items: &mut Vec<StatisticsItem>,
    title: &str,
    entries: &[T],
    ad_interval: Option<usize>,
    to_item: impl Fn(&T) -> StatisticsItem,
) {
    if entries.is_empty() {
        return;
    }
    items.push(StatisticsItem::Header(title.to_string()));
    for (index, entry) in entries.iter().enumerate() {
        items.push(to_item(entry));
        let is_last = index + 1 == entries.len();
        if let Some(interval) = ad_interval.filter(|interval| *interval > 0) {
            if (index + 1) % interval == 0 && !is_last {
                items.push(StatisticsItem::Ad);
            }
        }
    }
}

/// Rendering dispatcher: one hook per item variant.
pub trait FeedRenderer {
    type Output;

    fn summary(&mut self, totals: &Totals) -> Self::Output;
    fn balance(&mut self, balance: f64) -> Self::Output;
    fn header(&mut self, title: &str) -> Self::Output;
    fn category(&mut self, entry: &CategoryTotal, kind: TransactionKind) -> Self::Output;
    fn monthly(&mut self, bucket: &MonthlyTotals) -> Self::Output;
    fn ad(&mut self) -> Self::Output;
}

/// Routes every item to the matching renderer hook, in order.
pub fn render_feed<R: FeedRenderer>(
    renderer: &mut R,
    totals: &Totals,
    items: &[StatisticsItem],
) -> Vec<R::Output> {
    items
        .iter()
        .map(|item| match item {
            StatisticsItem::Summary => renderer.summary(totals),
            StatisticsItem::Balance => renderer.balance(totals.balance),
            StatisticsItem::Header(title) => renderer.header(title),
            StatisticsItem::Category { entry, kind } => renderer.category(entry, *kind),
            StatisticsItem::Monthly(bucket) => renderer.monthly(bucket),
            StatisticsItem::Ad => renderer.ad(),
        })
        .collect()
}

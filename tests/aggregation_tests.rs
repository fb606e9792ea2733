mod common;

use std::collections::HashSet;

use common::{day, record, sample_documents};
use expense_core::{
    core::{
        aggregation::{by_category, by_month, net_balance, top_n, total_for, MonthLabel},
        services::TransactionService,
    },
    currency::{format_amount, Currency},
    domain::TransactionKind::{Expense, Income},
};

#[test]
fn balance_is_income_minus_expense() {
    let records = vec![
        record("a", Income, 1000.0, "Salary", day(2024, 1, 1)),
        record("b", Expense, 300.0, "Rent", day(2024, 1, 2)),
        record("c", Expense, 200.0, "Food", day(2024, 1, 3)),
    ];
    assert_eq!(total_for(&records, Income), 1000.0);
    assert_eq!(total_for(&records, Expense), 500.0);
    assert_eq!(net_balance(&records), 500.0);
    assert_eq!(
        net_balance(&records),
        total_for(&records, Income) - total_for(&records, Expense)
    );
}

#[test]
fn food_and_travel_scenario() {
    let records = vec![
        record("a", Expense, 100.0, "Food", day(2024, 1, 1)),
        record("b", Expense, 150.0, "Food", day(2024, 1, 2)),
        record("c", Expense, 50.0, "Travel", day(2024, 1, 3)),
    ];
    let pairs: Vec<(String, f64)> = by_category(&records, Expense)
        .into_iter()
        .map(|total| (total.category, total.amount))
        .collect();
    assert_eq!(pairs, vec![("Food".to_string(), 250.0), ("Travel".to_string(), 50.0)]);
}

#[test]
fn month_bucket_count_matches_distinct_labels() {
    let records = vec![
        record("a", Expense, 10.0, "Food", day(2024, 1, 15)),
        record("b", Expense, 20.0, "Food", day(2024, 2, 1)),
        record("c", Income, 5.0, "Gift", day(2024, 2, 28)),
        record("d", Income, 1.0, "Gift", None),
        record("e", Expense, 2.0, "Food", None),
    ];
    let distinct: HashSet<String> = records
        .iter()
        .filter(|r| r.occurred_at.is_some())
        .map(|r| MonthLabel::of(r).to_string())
        .collect();
    let months = by_month(&records);
    assert_eq!(months.len(), distinct.len() + 1);
    assert_eq!(months.last().map(|m| m.label), Some(MonthLabel::Unknown));
    assert_eq!(months[0].label.to_string(), "Feb 2024");
    assert_eq!((months[0].income, months[0].expense), (5.0, 20.0));
}

#[test]
fn top_n_returns_ordered_prefix() {
    let records = vec![
        record("a", Expense, 5.0, "A", day(2024, 1, 1)),
        record("b", Expense, 4.0, "B", day(2024, 1, 1)),
        record("c", Expense, 3.0, "C", day(2024, 1, 1)),
    ];
    let ranked = by_category(&records, Expense);
    for n in 0..5 {
        let prefix = top_n(&ranked, n);
        assert_eq!(prefix.len(), n.min(ranked.len()));
        assert_eq!(prefix, &ranked[..prefix.len()]);
    }
}

#[test]
fn exported_documents_aggregate_end_to_end() {
    let documents = sample_documents();
    let snapshot = TransactionService::ingest("owner-1", documents.as_array().unwrap());
    assert_eq!(snapshot.records.len(), 5);
    assert_eq!(snapshot.skipped, 2);

    let records = snapshot.records();
    assert_eq!(format_amount(total_for(records, Income), Currency::Rupee), "₹1020.00");
    assert_eq!(format_amount(total_for(records, Expense), Currency::Rupee), "₹300.00");
    assert_eq!(format_amount(net_balance(records), Currency::Dollar), "$720.00");

    let labels: Vec<String> = by_month(records).iter().map(|m| m.label.to_string()).collect();
    assert_eq!(labels, vec!["Feb 2024", "Jan 2024", "Unknown"]);

    let ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["4", "3", "2", "1", "5"]);
}

#[test]
fn local_midnight_entries_bucket_in_their_own_month() {
    let documents = serde_json::json!([
        {"id": "late", "title": "Chai", "amount": 40, "category": "Food & Dining",
         "type": "EXPENSE", "timestamp": "2024-02-01T00:30:00+05:30", "userId": "owner-1"}
    ]);
    let snapshot = TransactionService::ingest("owner-1", documents.as_array().unwrap());
    let record = &snapshot.records()[0];
    assert_eq!(record.display_date(), "Feb 01, 2024");

    let months = by_month(snapshot.records());
    assert_eq!(months.len(), 1);
    assert_eq!(months[0].label.to_string(), "Feb 2024");
}

#[test]
fn resent_documents_count_once() {
    let documents = serde_json::json!([
        {"id": "x", "title": "Rent", "amount": 500, "category": "Bills & Utilities",
         "type": "EXPENSE", "timestamp": "2024-03-01T10:00:00Z", "userId": "owner-1"},
        {"id": "x", "title": "Rent (edited)", "amount": 450, "category": "Bills & Utilities",
         "type": "EXPENSE", "timestamp": "2024-03-01T10:00:00Z", "userId": "owner-1"}
    ]);
    let snapshot = TransactionService::ingest("owner-1", documents.as_array().unwrap());
    assert_eq!(snapshot.records().len(), 1);
    assert_eq!(snapshot.skipped, 0);
    assert_eq!(total_for(snapshot.records(), Expense), 450.0);
    assert_eq!(snapshot.records()[0].title, "Rent (edited)");
}

#[test]
fn aggregation_leaves_input_untouched() {
    let records = vec![
        record("b", Expense, 1.0, "Z", day(2023, 1, 1)),
        record("a", Income, 2.0, "A", day(2024, 1, 1)),
    ];
    let before = records.clone();
    let _ = by_category(&records, Expense);
    let _ = by_month(&records);
    let _ = net_balance(&records);
    assert_eq!(records, before);
}

#[test]
fn formatting_examples() {
    assert_eq!(format_amount(1234.5, Currency::Rupee), "₹1234.50");
    assert_eq!(format_amount(0.0, Currency::Dollar), "$0.00");
}

//! Pure summarization of transaction lists for the dashboard.
//!
//! Every function here is a single-pass, side-effect-free fold over a
//! snapshot of the transaction list. Handlers fetch the list from the store
//! and pass it in; nothing here performs I/O.

use serde::{Deserialize, Serialize};
use time::{Date, Month};

use crate::models::Transaction;

/// How many transactions the dashboard shows as "recent".
pub const RECENT_TRANSACTION_COUNT: usize = 3;

/// The summed amount for one calendar month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyTotal {
    /// The month label, e.g. "Jan 2024".
    pub month: String,
    /// The sum of transaction amounts in that month.
    pub total: f64,
}

/// The summed amount for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryTotal {
    /// The category label, exactly as stored.
    pub category: String,
    /// The sum of transaction amounts in that category.
    pub total: f64,
}

/// Sum transaction amounts per calendar month.
///
/// Groups appear in the order their month is first seen while folding the
/// input, not in calendar order. The store returns transactions
/// date-descending, so the months come out reverse-chronologically.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = Vec::new();

    for transaction in transactions {
        let label = month_label(transaction.date.date());

        match totals.iter_mut().find(|entry| entry.month == label) {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(MonthlyTotal {
                month: label,
                total: transaction.amount,
            }),
        }
    }

    totals
}

/// Sum transaction amounts per category, in first-seen order.
///
/// Categories are grouped by their stored text. The "Other" fallback label is
/// a display concern and does not merge groups here.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();

    for transaction in transactions {
        match totals
            .iter_mut()
            .find(|entry| entry.category == transaction.category)
        {
            Some(entry) => entry.total += transaction.amount,
            None => totals.push(CategoryTotal {
                category: transaction.category.clone(),
                total: transaction.amount,
            }),
        }
    }

    totals
}

/// The sum of all transaction amounts, with no filtering.
pub fn total_expenses(transactions: &[Transaction]) -> f64 {
    transactions.iter().map(|transaction| transaction.amount).sum()
}

/// The percentage change of this month's total versus last month's.
///
/// `today` determines which calendar month is "current". A previous month
/// with no transactions yields 0.0 rather than an error or infinity, so a
/// first month of data always reads as "no change".
pub fn month_over_month_change(transactions: &[Transaction], today: Date) -> f64 {
    let totals = monthly_totals(transactions);
    let total_for = |label: &str| {
        totals
            .iter()
            .find(|entry| entry.month == label)
            .map_or(0.0, |entry| entry.total)
    };

    let current_total = total_for(&month_label(today));
    let previous_total = total_for(&previous_month_label(today));

    if previous_total == 0.0 {
        0.0
    } else {
        (current_total - previous_total) / previous_total * 100.0
    }
}

/// The most recent transactions, taken from the head of the list.
///
/// The input is expected to be date-descending already; this slices, it does
/// not re-sort.
pub fn recent_transactions(transactions: &[Transaction]) -> &[Transaction] {
    &transactions[..transactions.len().min(RECENT_TRANSACTION_COUNT)]
}

/// Format a date as its month label, e.g. "Jan 2024".
pub fn month_label(date: Date) -> String {
    format!("{} {}", month_abbreviation(date.month()), date.year())
}

fn previous_month_label(today: Date) -> String {
    let (year, month) = match today.month() {
        Month::January => (today.year() - 1, Month::December),
        month => (today.year(), month.previous()),
    };

    format!("{} {year}", month_abbreviation(month))
}

fn month_abbreviation(month: Month) -> &'static str {
    match month {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    }
}

#[cfg(test)]
mod tests {
    use time::{
        OffsetDateTime,
        macros::{date, datetime},
    };

    use crate::models::Transaction;

    use super::{
        CategoryTotal, MonthlyTotal, category_totals, month_label, month_over_month_change,
        monthly_totals, recent_transactions, total_expenses,
    };

    fn transaction(id: i64, amount: f64, date: OffsetDateTime, category: &str) -> Transaction {
        Transaction {
            id,
            amount,
            description: format!("Transaction {id}"),
            date,
            category: category.to_owned(),
        }
    }

    /// The worked example: two January purchases and one February purchase,
    /// listed date-descending as the store returns them.
    fn sample_transactions() -> Vec<Transaction> {
        vec![
            transaction(3, 5.0, datetime!(2024-02-01 0:00 UTC), "Transport"),
            transaction(2, 20.0, datetime!(2024-01-20 0:00 UTC), "Food"),
            transaction(1, 10.0, datetime!(2024-01-05 0:00 UTC), "Food"),
        ]
    }

    #[test]
    fn monthly_totals_sum_per_month() {
        let totals = monthly_totals(&sample_transactions());

        assert_eq!(
            totals,
            vec![
                MonthlyTotal {
                    month: "Feb 2024".to_owned(),
                    total: 5.0
                },
                MonthlyTotal {
                    month: "Jan 2024".to_owned(),
                    total: 30.0
                },
            ]
        );
    }

    #[test]
    fn monthly_totals_follow_first_seen_order() {
        // Date-descending input means the newest month is seen first.
        let totals = monthly_totals(&sample_transactions());

        assert_eq!(totals[0].month, "Feb 2024");
        assert_eq!(totals[1].month, "Jan 2024");
    }

    #[test]
    fn monthly_totals_of_empty_list_are_empty() {
        assert_eq!(monthly_totals(&[]), vec![]);
    }

    #[test]
    fn category_totals_sum_per_category() {
        let totals = category_totals(&sample_transactions());

        assert_eq!(
            totals,
            vec![
                CategoryTotal {
                    category: "Transport".to_owned(),
                    total: 5.0
                },
                CategoryTotal {
                    category: "Food".to_owned(),
                    total: 30.0
                },
            ]
        );
    }

    #[test]
    fn category_totals_do_not_merge_unknown_categories() {
        let transactions = vec![
            transaction(1, 1.0, datetime!(2024-01-05 0:00 UTC), "Gambling"),
            transaction(2, 2.0, datetime!(2024-01-06 0:00 UTC), "Alchemy"),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn total_expenses_sums_everything() {
        assert_eq!(total_expenses(&sample_transactions()), 35.0);
    }

    #[test]
    fn total_expenses_of_empty_list_is_zero() {
        assert_eq!(total_expenses(&[]), 0.0);
    }

    #[test]
    fn month_over_month_change_compares_adjacent_months() {
        // Jan 30.0 -> Feb 5.0 seen from February.
        let change = month_over_month_change(&sample_transactions(), date!(2024 - 02 - 15));

        assert!((change - (-83.333)).abs() < 0.001);
    }

    #[test]
    fn month_over_month_change_with_empty_previous_month_is_zero() {
        // No December 2023 transactions exist.
        let change = month_over_month_change(&sample_transactions(), date!(2024 - 01 - 15));

        assert_eq!(change, 0.0);
    }

    #[test]
    fn month_over_month_change_crosses_year_boundary() {
        let transactions = vec![
            transaction(2, 10.0, datetime!(2024-01-10 0:00 UTC), "Food"),
            transaction(1, 20.0, datetime!(2023-12-10 0:00 UTC), "Food"),
        ];

        let change = month_over_month_change(&transactions, date!(2024 - 01 - 15));

        assert_eq!(change, -50.0);
    }

    #[test]
    fn recent_transactions_take_at_most_three_from_the_head() {
        let transactions = vec![
            transaction(4, 1.0, datetime!(2024-02-04 0:00 UTC), "Food"),
            transaction(3, 2.0, datetime!(2024-02-03 0:00 UTC), "Food"),
            transaction(2, 3.0, datetime!(2024-02-02 0:00 UTC), "Food"),
            transaction(1, 4.0, datetime!(2024-02-01 0:00 UTC), "Food"),
        ];

        let recent = recent_transactions(&transactions);

        assert_eq!(recent, &transactions[..3]);
    }

    #[test]
    fn recent_transactions_of_short_list_return_everything() {
        let transactions = sample_transactions();

        assert_eq!(recent_transactions(&transactions), &transactions[..]);
    }

    #[test]
    fn month_labels_use_three_letter_abbreviations() {
        assert_eq!(month_label(date!(2024 - 09 - 01)), "Sep 2024");
    }
}

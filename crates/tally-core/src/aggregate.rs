//! Monthly aggregation

use std::collections::BTreeMap;

use crate::error::{Error, Result};
use crate::models::{Amount, MonthlyTotal, NormalizedExpense};

/// Sum expenses per `YYYY-MM` month
///
/// Returned totals are ascending by month key. The key is fixed-width and
/// zero-padded, so lexicographic order is chronological order.
pub fn aggregate_by_month(expenses: &[NormalizedExpense]) -> Result<Vec<MonthlyTotal>> {
    let mut buckets: BTreeMap<String, Amount> = BTreeMap::new();

    for expense in expenses {
        *buckets.entry(expense.month_key()).or_default() += expense.amount;
    }

    buckets
        .into_iter()
        .map(|(month, amount)| {
            if !amount.is_finite() {
                return Err(Error::NonFiniteTotal(month));
            }
            Ok(MonthlyTotal { month, amount })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn expense(amount: Amount, y: i32, m: u32, d: u32) -> NormalizedExpense {
        NormalizedExpense {
            id: None,
            amount,
            date: NaiveDate::from_ymd_opt(y, m, d)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate_by_month(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_groups_and_sums_by_month() {
        let expenses = vec![
            expense(Amount::Int(100), 2024, 1, 3),
            expense(Amount::Int(25), 2024, 1, 28),
            expense(Amount::Float(10.5), 2024, 2, 1),
        ];
        let totals = aggregate_by_month(&expenses).unwrap();
        assert_eq!(
            totals,
            vec![
                MonthlyTotal {
                    month: "2024-01".to_string(),
                    amount: Amount::Int(125),
                },
                MonthlyTotal {
                    month: "2024-02".to_string(),
                    amount: Amount::Float(10.5),
                },
            ]
        );
    }

    #[test]
    fn test_output_sorted_across_years() {
        // Input deliberately out of order
        let expenses = vec![
            expense(Amount::Int(1), 2024, 10, 1),
            expense(Amount::Int(1), 2023, 12, 1),
            expense(Amount::Int(1), 2024, 2, 1),
        ];
        let months: Vec<String> = aggregate_by_month(&expenses)
            .unwrap()
            .into_iter()
            .map(|t| t.month)
            .collect();
        assert_eq!(months, vec!["2023-12", "2024-02", "2024-10"]);
    }

    #[test]
    fn test_duplicates_are_summed() {
        let expenses = vec![
            expense(Amount::Int(40), 2024, 5, 5),
            expense(Amount::Int(40), 2024, 5, 5),
        ];
        let totals = aggregate_by_month(&expenses).unwrap();
        assert_eq!(totals.len(), 1);
        assert_eq!(totals[0].amount, Amount::Int(80));
    }

    #[test]
    fn test_non_finite_total_is_an_error() {
        let expenses = vec![
            expense(Amount::Float(f64::MAX), 2024, 1, 1),
            expense(Amount::Float(f64::MAX), 2024, 1, 2),
        ];
        let err = aggregate_by_month(&expenses).unwrap_err();
        assert!(matches!(err, Error::NonFiniteTotal(ref m) if m == "2024-01"));
    }
}

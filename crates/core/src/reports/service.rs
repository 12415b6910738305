//! Report generation service.

use rust_decimal::Decimal;

use super::types::{CategoryAmount, CategoryPerformance, CategoryShare, MonthReport};
use crate::calendar::MonthKey;
use crate::category::{Category, CategoryResolver};
use crate::expense::{Expense, Partition};

/// Service for generating month-scoped reports.
pub struct ReportService;

impl ReportService {
    /// Computes per-category totals and percentage shares for one month.
    ///
    /// Vacation-partitioned expenses are excluded. Unresolved category
    /// references accumulate under the fallback category, so for a non-zero
    /// total the percentages always sum to 100. Shares are sorted
    /// descending by amount; ties keep directory order. Zero-amount
    /// categories are dropped.
    #[must_use]
    pub fn category_performance(
        expenses: &[Expense],
        categories: &[Category],
        month: MonthKey,
    ) -> CategoryPerformance {
        let resolver = CategoryResolver::new(categories);
        let (sums, total) = Self::non_vacation_sums(expenses, &resolver, month);

        let mut shares: Vec<CategoryShare> = resolver
            .categories()
            .iter()
            .zip(&sums)
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(category, amount)| CategoryShare {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                amount: *amount,
                percentage: if total.is_zero() {
                    Decimal::ZERO
                } else {
                    *amount / total * Decimal::ONE_HUNDRED
                },
            })
            .collect();
        // Stable sort: equal amounts keep directory order.
        shares.sort_by(|a, b| b.amount.cmp(&a.amount));

        CategoryPerformance {
            month,
            total,
            shares,
        }
    }

    /// Computes the full statistics for a single calendar month.
    ///
    /// Vacation expenses count toward `total` and `vacation` but are
    /// excluded from the category breakdown. The daily average uses the
    /// month's true calendar length, leap years included.
    #[must_use]
    pub fn month_report(
        expenses: &[Expense],
        categories: &[Category],
        month: MonthKey,
    ) -> MonthReport {
        let resolver = CategoryResolver::new(categories);

        let mut total = Decimal::ZERO;
        let mut regular = Decimal::ZERO;
        let mut extra = Decimal::ZERO;
        let mut vacation = Decimal::ZERO;
        let mut sums = vec![Decimal::ZERO; resolver.len()];
        let mut transactions: Vec<Expense> = Vec::new();

        for expense in expenses {
            if !month.contains(expense.date) {
                continue;
            }

            total += expense.amount;
            let partition = expense.partition();
            match partition {
                Partition::Vacation => vacation += expense.amount,
                Partition::Extra => extra += expense.amount,
                Partition::Regular => regular += expense.amount,
            }

            if partition != Partition::Vacation {
                sums[resolver.position(&expense.category_id)] += expense.amount;
            }
            transactions.push(expense.clone());
        }

        let mut category_breakdown: Vec<CategoryAmount> = resolver
            .categories()
            .iter()
            .zip(&sums)
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(category, amount)| CategoryAmount {
                category_id: category.id.clone(),
                name: category.name.clone(),
                color: category.color.clone(),
                amount: *amount,
            })
            .collect();
        category_breakdown.sort_by(|a, b| b.amount.cmp(&a.amount));

        // Stable: equal dates keep input order within one invocation.
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        let daily_average = total / Decimal::from(month.days_in_month());

        MonthReport {
            month,
            total,
            regular,
            extra,
            vacation,
            category_breakdown,
            daily_average,
            transactions,
        }
    }

    /// Accumulates non-vacation amounts per resolved directory position for
    /// the target month, returning the per-category sums and their total.
    fn non_vacation_sums(
        expenses: &[Expense],
        resolver: &CategoryResolver,
        month: MonthKey,
    ) -> (Vec<Decimal>, Decimal) {
        let mut sums = vec![Decimal::ZERO; resolver.len()];
        let mut total = Decimal::ZERO;

        for expense in expenses {
            if expense.partition() == Partition::Vacation || !month.contains(expense.date) {
                continue;
            }
            sums[resolver.position(&expense.category_id)] += expense.amount;
            total += expense.amount;
        }

        (sums, total)
    }
}

//! Trend computation service.

use std::collections::BTreeMap;

use chrono::Datelike;
use rust_decimal::Decimal;

use super::types::{MonthBucket, MtdStats};
use crate::calendar::{MonthKey, ReferenceDate};
use crate::expense::{Expense, Partition};

/// Number of most recent month buckets retained in the trend output.
const TREND_WINDOW_MONTHS: usize = 12;

/// Service for trend statistics over the full expense snapshot.
pub struct TrendService;

impl TrendService {
    /// Groups expenses into calendar-month buckets with partitioned sums.
    ///
    /// Buckets are sorted ascending by key and truncated to the most recent
    /// 12. Months without expenses are never materialized, so gaps in the
    /// history produce no zero-bucket. Deterministic for a given input.
    #[must_use]
    pub fn monthly_buckets(expenses: &[Expense]) -> Vec<MonthBucket> {
        let mut buckets: BTreeMap<MonthKey, MonthBucket> = BTreeMap::new();

        for expense in expenses {
            let key = expense.month_key();
            let bucket = buckets
                .entry(key)
                .or_insert_with(|| MonthBucket::empty(key));

            match expense.partition() {
                Partition::Vacation => bucket.vacation += expense.amount,
                Partition::Extra => bucket.extra += expense.amount,
                Partition::Regular => bucket.regular += expense.amount,
            }
        }

        let mut buckets: Vec<MonthBucket> = buckets.into_values().collect();
        if buckets.len() > TREND_WINDOW_MONTHS {
            buckets.drain(..buckets.len() - TREND_WINDOW_MONTHS);
        }
        buckets
    }

    /// Computes current vs. prior-year month-to-date totals of ordinary
    /// spending.
    ///
    /// Only regular-partition expenses count: vacation and extra expenses
    /// are both excluded from every field. The reference day is NOT clamped
    /// against the target month's real length: asking for day 31 in a
    /// shorter month simply admits every expense of that month. Preserved
    /// deliberately for compatibility with the historical behavior.
    #[must_use]
    pub fn mtd_comparison(expenses: &[Expense], reference: ReferenceDate) -> MtdStats {
        let mut current_month_total = Decimal::ZERO;
        let mut current_mtd = Decimal::ZERO;
        let mut last_year_mtd = Decimal::ZERO;

        for expense in expenses {
            if expense.partition() != Partition::Regular {
                continue;
            }

            let (year, month, day) = (
                expense.date.year(),
                expense.date.month(),
                expense.date.day(),
            );
            if month != reference.month {
                continue;
            }
            let within_day_filter = day <= reference.day;

            if year == reference.year {
                current_month_total += expense.amount;
                if within_day_filter {
                    current_mtd += expense.amount;
                }
            } else if year == reference.year - 1 && within_day_filter {
                last_year_mtd += expense.amount;
            }
        }

        let percent_delta = if last_year_mtd > Decimal::ZERO {
            ((current_mtd - last_year_mtd) / last_year_mtd * Decimal::ONE_HUNDRED).round_dp(2)
        } else {
            Decimal::ZERO
        };

        MtdStats {
            current_month_total,
            current_mtd,
            last_year_mtd,
            percent_delta,
        }
    }
}

//! Focolare reporting CLI.
//!
//! Loads a JSON snapshot of expenses and categories, runs the aggregation
//! engine over it, and prints the resulting statistics. All I/O, clock
//! reads, and logging live here; the engine itself stays pure.
//!
//! Usage: focolare [path/to/snapshot.json]

use anyhow::Context;
use chrono::Local;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use focolare_core::calendar::{MonthKey, ReferenceDate};
use focolare_core::category::Category;
use focolare_core::expense::Expense;
use focolare_core::reports::ReportService;
use focolare_core::store::{CategoryDirectory, LedgerStore, Snapshot};
use focolare_core::trends::TrendService;
use focolare_shared::AppConfig;

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "focolare=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration; a CLI argument overrides the configured path
    let config = AppConfig::load().context("Failed to load configuration")?;
    let snapshot_path = std::env::args()
        .nth(1)
        .unwrap_or(config.data.snapshot_path);
    let symbol = config.report.currency_symbol;

    // Fetch the snapshot once; every computation reads the same data
    let payload = std::fs::read_to_string(&snapshot_path)
        .with_context(|| format!("Failed to read snapshot {snapshot_path}"))?;
    let snapshot = Snapshot::from_json(&payload)?;
    let expenses = LedgerStore::fetch_all(&snapshot)?;
    let categories = CategoryDirectory::fetch_all(&snapshot)?;
    info!(
        expenses = expenses.len(),
        categories = categories.len(),
        "Snapshot loaded from {snapshot_path}"
    );

    let today = Local::now().date_naive();
    let reference = ReferenceDate::from_date(today);
    let current_month = reference.month_key();

    print_trends(&expenses, &symbol);
    print_mtd(&expenses, reference, &symbol);
    print_month(&expenses, &categories, current_month, &symbol);

    Ok(())
}

fn print_trends(expenses: &[Expense], symbol: &str) {
    println!("\nMonthly trend (last 12 months)");
    println!("{:-<58}", "");
    for bucket in TrendService::monthly_buckets(expenses) {
        println!(
            "{:<10} regular {symbol}{:>10} | extra {symbol}{:>9} | vacation {symbol}{:>9}",
            bucket.label,
            bucket.regular.round_dp(2),
            bucket.extra.round_dp(2),
            bucket.vacation.round_dp(2),
        );
    }
}

fn print_mtd(
    expenses: &[Expense],
    reference: ReferenceDate,
    symbol: &str,
) {
    let stats = TrendService::mtd_comparison(expenses, reference);
    println!("\nMonth-to-date (day {})", reference.day);
    println!("{:-<58}", "");
    println!("  This month so far   {symbol}{}", stats.current_mtd.round_dp(2));
    println!(
        "  Same point last year {symbol}{}",
        stats.last_year_mtd.round_dp(2)
    );
    println!("  Change               {}%", stats.percent_delta);
    println!(
        "  Whole month          {symbol}{}",
        stats.current_month_total.round_dp(2)
    );
}

fn print_month(
    expenses: &[Expense],
    categories: &[Category],
    month: MonthKey,
    symbol: &str,
) {
    let report = ReportService::month_report(expenses, categories, month);
    println!("\nMonth detail for {}", month.label());
    println!("{:-<58}", "");
    println!("  Total    {symbol}{}", report.total.round_dp(2));
    println!("  Regular  {symbol}{}", report.regular.round_dp(2));
    println!("  Extra    {symbol}{}", report.extra.round_dp(2));
    println!("  Vacation {symbol}{}", report.vacation.round_dp(2));
    println!("  Daily average {symbol}{}", report.daily_average.round_dp(2));

    let performance = ReportService::category_performance(expenses, categories, month);
    println!("\n  Category shares");
    for share in &performance.shares {
        println!(
            "    {:<16} {symbol}{:>10}  {:>6}%",
            share.name,
            share.amount.round_dp(2),
            share.percentage.round_dp(1),
        );
    }
}

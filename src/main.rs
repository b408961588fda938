//! Rental Underwriter CLI
//!
//! Command-line interface for projecting a rental deal and comparing strategies

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use rental_underwriter::config::{effective_config, load_deal, load_deals};
use rental_underwriter::metrics::{equity_irr, BreakEven, KpiSummary};
use rental_underwriter::output::write_rows_csv_file;
use rental_underwriter::projection::DEFAULT_HORIZON_YEARS;
use rental_underwriter::{ProjectionRow, ScenarioRunner, Strategy};

#[derive(Parser)]
#[command(name = "rental-underwriter", version, about = "Rental property cash-flow underwriting")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project one strategy month by month
    Project {
        /// Deal JSON file
        #[arg(long)]
        deal: PathBuf,

        /// STR, MTR or LTR
        #[arg(long, default_value = "STR")]
        strategy: Strategy,

        /// Horizon in years
        #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
        years: u32,

        /// Calendar year of the first projected January
        #[arg(long)]
        start_year: Option<i32>,

        /// Show yearly rows instead of monthly
        #[arg(long)]
        yearly: bool,

        /// Write the rows to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Compare STR, MTR and LTR for one deal
    Compare {
        /// Deal JSON file
        #[arg(long)]
        deal: PathBuf,

        /// Horizon in years
        #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
        years: u32,
    },
    /// Run one strategy across every deal in a pipeline file
    Batch {
        /// JSON file holding an array of deals
        #[arg(long)]
        deals: PathBuf,

        /// STR, MTR or LTR
        #[arg(long, default_value = "STR")]
        strategy: Strategy,

        /// Horizon in years
        #[arg(long, default_value_t = DEFAULT_HORIZON_YEARS)]
        years: u32,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    match Cli::parse().command {
        Command::Project { deal, strategy, years, start_year, yearly, csv, json } => {
            project(deal, strategy, years, start_year, yearly, csv, json)
        }
        Command::Compare { deal, years } => compare(deal, years),
        Command::Batch { deals, strategy, years } => batch(deals, strategy, years),
    }
}

fn project(
    path: PathBuf,
    strategy: Strategy,
    years: u32,
    start_year: Option<i32>,
    yearly: bool,
    csv: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let file = load_deal(&path).with_context(|| format!("loading {}", path.display()))?;
    file.deal.validate().context("deal failed validation")?;

    let mut runner = ScenarioRunner::new(years);
    if let Some(year) = start_year {
        runner = runner.with_start_year(year);
    }
    let result = runner.run(&file.deal, &file.amenities, strategy);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let rows = if yearly { result.yearly() } else { result.monthly.clone() };

    println!("{} projection over {} months", strategy, result.monthly.len());
    println!("{}", "=".repeat(40));
    print_rows(&rows);

    if let Some(csv_path) = csv {
        write_rows_csv_file(&rows, &csv_path)
            .with_context(|| format!("writing {}", csv_path.display()))?;
        println!("\nRows written to: {}", csv_path.display());
    }

    if let Some(kpis) = result.kpis(1) {
        println!("\nYear 1 KPIs:");
        print_kpis(&kpis);
    }

    let capital = result.deal.capital_structure();
    let break_even = BreakEven::analyze(&result.monthly, &capital);
    let summary = result.summary();

    println!("\nSummary:");
    println!("  Cash Invested: ${:.2}", capital.cash_portion);
    println!("  HELOC Funded: ${:.2}", capital.heloc_portion);
    println!("  Total Net Cash: ${:.2}", summary.total_net_cash);
    println!("  Final Property Value: ${:.2}", summary.final_property_value);
    println!("  Final Equity: ${:.2}", summary.final_equity);
    println!("  Break-even Month: {}", month_or_na(break_even.effective_month()));
    println!("  Payback Month: {}", month_or_na(break_even.payback_month));
    println!("  Equity IRR: {}", pct_or_na(equity_irr(&result.monthly, &capital).map(|r| r * 100.0)));

    Ok(())
}

fn compare(path: PathBuf, years: u32) -> Result<()> {
    let file = load_deal(&path).with_context(|| format!("loading {}", path.display()))?;
    file.deal.validate().context("deal failed validation")?;

    let comparison = ScenarioRunner::new(years).compare_strategies(&file.deal, &file.amenities);

    println!("Strategy comparison over {} years", years);
    println!("{:>8} {:>10} {:>10} {:>10} {:>8} {:>10} {:>14} {:>10}",
        "Strategy", "CapRate", "CoC", "DSCR", "TotDSCR", "IRR", "NetCash", "BreakEven");
    println!("{}", "-".repeat(88));

    for c in &comparison {
        let kpis = c.year_one.as_ref();
        println!("{:>8} {:>10} {:>10} {:>10} {:>8} {:>10} {:>14.2} {:>10}",
            c.strategy,
            pct_or_na(kpis.and_then(|k| k.cap_rate)),
            pct_or_na(kpis.and_then(|k| k.cash_on_cash)),
            ratio_or_na(kpis.and_then(|k| k.dscr)),
            ratio_or_na(kpis.and_then(|k| k.total_dscr)),
            pct_or_na(c.equity_irr.map(|r| r * 100.0)),
            c.total_net_cash,
            month_or_na(c.break_even.effective_month()),
        );
    }

    Ok(())
}

fn batch(path: PathBuf, strategy: Strategy, years: u32) -> Result<()> {
    let files = load_deals(&path).with_context(|| format!("loading {}", path.display()))?;

    let mut deals = Vec::with_capacity(files.len());
    for (i, file) in files.iter().enumerate() {
        file.deal
            .validate()
            .with_context(|| format!("deal {} failed validation", i + 1))?;
        deals.push(effective_config(&file.deal, &file.amenities));
    }

    let results = ScenarioRunner::new(years).run_batch(&deals, strategy);

    println!("{} batch over {} years ({} deals)", strategy, years, results.len());
    println!("{:>4} {:>12} {:>10} {:>10} {:>8} {:>14} {:>14}",
        "#", "Price", "CapRate", "CoC", "DSCR", "NetCash", "FinalEquity");
    println!("{}", "-".repeat(78));

    for (i, result) in results.iter().enumerate() {
        let kpis = result.kpis(1);
        let summary = result.summary();
        println!("{:>4} {:>12.0} {:>10} {:>10} {:>8} {:>14.2} {:>14.2}",
            i + 1,
            result.deal.price,
            pct_or_na(kpis.as_ref().and_then(|k| k.cap_rate)),
            pct_or_na(kpis.as_ref().and_then(|k| k.cash_on_cash)),
            ratio_or_na(kpis.as_ref().and_then(|k| k.dscr)),
            summary.total_net_cash,
            summary.final_equity,
        );
    }

    Ok(())
}

fn print_rows(rows: &[ProjectionRow]) {
    println!("{:>10} {:>12} {:>7} {:>9} {:>12} {:>12} {:>12} {:>12} {:>14}",
        "Period", "Revenue", "Occ", "ADR", "NOI", "Mortgage", "HELOC Bal", "NetCash", "MortgageBal");
    println!("{}", "-".repeat(110));

    for row in rows {
        println!("{:>10} {:>12.2} {:>6.1}% {:>9.2} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>14.2}",
            row.label,
            row.revenue,
            row.occupancy * 100.0,
            row.adr,
            row.noi_after_platform,
            row.mortgage_payment,
            row.heloc_balance,
            row.net_cash_to_owner,
            row.mortgage_balance,
        );
    }
}

fn print_kpis(kpis: &KpiSummary) {
    println!("  Gross Revenue: ${:.2}", kpis.annual_revenue);
    println!("  NOI: ${:.2}", kpis.annual_noi);
    println!("  Cap Rate: {}", pct_or_na(kpis.cap_rate));
    println!("  Gross Yield: {}", pct_or_na(kpis.gross_yield));
    println!("  Cash-on-Cash: {}", pct_or_na(kpis.cash_on_cash));
    println!("  DSCR: {}", ratio_or_na(kpis.dscr));
    println!("  Total DSCR: {}", ratio_or_na(kpis.total_dscr));
}

fn pct_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}%", v),
        _ => "N/A".to_string(),
    }
}

fn ratio_or_na(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() => format!("{:.2}x", v),
        _ => "N/A".to_string(),
    }
}

fn month_or_na(month: Option<usize>) -> String {
    month.map(|m| (m + 1).to_string()).unwrap_or_else(|| "N/A".to_string())
}

//! Print the hotel revenue dashboard for one set of scenario parameters
//!
//! Uses the synthetic five-year history unless `--history` points at a
//! `date,value` CSV. Optionally writes the detail table to CSV.

use anyhow::{Context, Result};
use clap::Parser;
use hotel_projection::dashboard::{Dashboard, DashboardRequest, TableRow, ViewMode};
use hotel_projection::format::{format_currency, format_percentage};
use hotel_projection::history::load_history;
use hotel_projection::projection::Granularity;
use hotel_projection::{DashboardConfig, Scenario, ScenarioParameters};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "hotel_projection", about = "Project hotel revenue scenarios and yields")]
struct Args {
    /// Historical revenue CSV (`date,value`); synthetic series if omitted
    #[arg(long)]
    history: Option<PathBuf>,

    /// Dashboard config JSON (initial investment, synthetic history settings)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Expected annual inflation in percent
    #[arg(long, default_value_t = 4.5, allow_negative_numbers = true)]
    inflation: f64,

    /// Annual organic growth in percent
    #[arg(long, default_value_t = 2.0, allow_negative_numbers = true)]
    growth: f64,

    /// Projection horizon in years (1-25)
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Scenario used for the summary cards
    #[arg(long, default_value = "moderate")]
    scenario: Scenario,

    /// Table resolution: monthly or yearly
    #[arg(long, default_value = "yearly")]
    granularity: Granularity,

    /// Table units: value or percent
    #[arg(long, default_value = "value")]
    view: ViewMode,

    /// Write the detail table to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let start = Instant::now();

    let config = match &args.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => DashboardConfig::default(),
    };

    let dashboard = match &args.history {
        Some(path) => {
            let history = load_history(path)
                .with_context(|| format!("Failed to load history {}", path.display()))?;
            Dashboard::new(history, config)?
        }
        None => Dashboard::synthetic(config)?,
    };

    let request = DashboardRequest {
        params: ScenarioParameters {
            annual_inflation_rate_percent: args.inflation,
            annual_organic_growth_percent: args.growth,
            horizon_years: args.years,
        },
        scenario: args.scenario,
        granularity: args.granularity,
        view: args.view,
    };
    let view = dashboard.view(&request).context("Projection failed")?;

    println!("Initial investment: {}", format_currency(view.initial_investment));
    println!(
        "Parameters: IPC {}%, growth {}%, {} years, {}",
        args.inflation,
        args.growth,
        args.years,
        args.scenario.label()
    );
    println!();
    for card in &view.cards {
        println!("  {:<32} {:>22}   {}", card.title, card.value, card.subtitle);
    }

    println!();
    println!("{:<10} {:>22} {:>22} {:>22}", "Period", "Pessimistic", "Moderate", "Optimistic");
    for row in &view.table {
        println!(
            "{:<10} {:>22} {:>22} {:>22}{}",
            row.label,
            cell(row.pessimistic, args.view),
            cell(row.moderate, args.view),
            cell(row.optimistic, args.view),
            if row.historical { "  (actual)" } else { "" }
        );
    }

    if let Some(path) = &args.output {
        write_table(path, &view.table)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("\nTable written to {}", path.display());
    }

    log::info!("dashboard computed in {:?}", start.elapsed());
    Ok(())
}

fn cell(value: f64, view: ViewMode) -> String {
    match view {
        ViewMode::Value => format_currency(value),
        ViewMode::Percent => format_percentage(value),
    }
}

fn write_table(path: &Path, rows: &[TableRow]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(File::create(path)?);
    for row in rows {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

//! Command-line appraisal tool
//!
//! Runs NPV, BCR, optimism bias and discount schedule calculations from the
//! command line or a CSV file. Supports JSON output via --json.
//! When --rate / --optimism-bias are omitted, config is read from
//! APPRAISAL_RATE_CATEGORY and APPRAISAL_PROJECT_TYPE.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use green_book_appraisal::{
    appraisal::loader::load_cost_benefit,
    apply_optimism_bias, calculate_bcr, calculate_npv,
    format::pounds,
    rates::MAX_HORIZON,
    AppraisalConfig, AppraisalSummary, DiscountSchedule, ProjectType, RateCategory,
    SensitivityRunner,
};
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "appraise", version, about = "Green Book cost-benefit appraisal")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Net Present Value of a cash flow stream
    Npv {
        /// Cash flows, comma separated (costs negative)
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true, required = true)]
        flows: Vec<f64>,

        #[command(flatten)]
        timing: Timing,
    },
    /// Benefit-Cost Ratio of aligned cost and benefit streams
    Bcr {
        /// Costs by year, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        costs: Vec<f64>,

        /// Benefits by year, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        benefits: Vec<f64>,

        #[command(flatten)]
        timing: Timing,
    },
    /// Apply optimism bias to a cost estimate
    Uplift {
        cost_estimate: f64,

        #[arg(long, value_enum, default_value_t = ProjectType::default())]
        project_type: ProjectType,
    },
    /// Print the discount schedule to a horizon
    Schedule {
        /// Last year to tabulate (at most 1000)
        #[arg(long, default_value_t = 50, value_parser = clap::value_parser!(u32).range(0..=MAX_HORIZON as i64))]
        horizon: u32,

        #[arg(long, value_enum)]
        rate: Option<RateCategory>,
    },
    /// Appraise a year,cost,benefit CSV file
    Csv {
        path: PathBuf,

        #[arg(long, value_enum)]
        rate: Option<RateCategory>,

        /// Uplift costs for this project type before discounting
        #[arg(long, value_enum)]
        optimism_bias: Option<ProjectType>,

        /// Repeat the appraisal under every rate category
        #[arg(long)]
        sensitivity: bool,
    },
}

/// Year and rate options shared by npv and bcr
#[derive(Debug, Args)]
struct Timing {
    /// Years of each value, comma separated (default 0, 1, 2, ...)
    #[arg(long, value_delimiter = ',')]
    years: Option<Vec<u32>>,

    #[arg(long, value_enum)]
    rate: Option<RateCategory>,
}

#[derive(Serialize)]
struct ValueOutput {
    rate_category: RateCategory,
    value: f64,
}

#[derive(Serialize)]
struct UpliftOutput {
    project_type: ProjectType,
    uplift: f64,
    cost_estimate: f64,
    adjusted: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let env_config = AppraisalConfig::from_env().context("Invalid appraisal environment")?;

    match cli.command {
        Command::Npv { flows, timing } => {
            let category = timing.rate.unwrap_or(env_config.rate_category);
            let npv = calculate_npv(&flows, timing.years.as_deref(), category)?;
            if cli.json {
                print_json(&ValueOutput { rate_category: category, value: npv })?;
            } else {
                println!("NPV ({} rates): {}", category, pounds(npv));
            }
        }
        Command::Bcr { costs, benefits, timing } => {
            let category = timing.rate.unwrap_or(env_config.rate_category);
            let bcr = calculate_bcr(&costs, &benefits, timing.years.as_deref(), category)?;
            if cli.json {
                print_json(&ValueOutput { rate_category: category, value: bcr })?;
            } else {
                println!("BCR ({} rates): {:.2}", category, bcr);
            }
        }
        Command::Uplift { cost_estimate, project_type } => {
            let adjusted = apply_optimism_bias(cost_estimate, project_type);
            if cli.json {
                print_json(&UpliftOutput {
                    project_type,
                    uplift: project_type.uplift(),
                    cost_estimate,
                    adjusted,
                })?;
            } else {
                println!("Initial cost: {}", pounds(cost_estimate));
                println!(
                    "With optimism bias ({}, +{:.0}%): {}",
                    project_type,
                    project_type.uplift() * 100.0,
                    pounds(adjusted)
                );
            }
        }
        Command::Schedule { horizon, rate } => {
            let schedule = DiscountSchedule::new(rate.unwrap_or(env_config.rate_category), horizon);
            if cli.json {
                print_json(&schedule.rows())?;
            } else {
                println!("{:>5} {:>8} {:>12}", "Year", "Rate", "Factor");
                println!("{}", "-".repeat(27));
                for row in schedule.rows() {
                    println!("{:>5} {:>7.1}% {:>12.8}", row.year, row.rate * 100.0, row.factor);
                }
            }
        }
        Command::Csv { path, rate, optimism_bias, sensitivity } => {
            let series = load_cost_benefit(&path)
                .with_context(|| format!("Failed to load {}", path.display()))?;

            let config = AppraisalConfig {
                rate_category: rate.unwrap_or(env_config.rate_category),
                optimism_bias: optimism_bias.or(env_config.optimism_bias),
            };

            let mut runner = SensitivityRunner::new(series);
            if let Some(project_type) = config.optimism_bias {
                runner = runner.with_optimism_bias(project_type);
            }

            let summaries = if sensitivity {
                runner.run_categories(&RateCategory::ALL)
            } else {
                vec![runner.run(&config)]
            };

            if cli.json {
                print_json(&summaries)?;
            } else {
                for summary in &summaries {
                    print_summary(summary);
                }
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_summary(summary: &AppraisalSummary) {
    println!("Rate category: {} ({} years)", summary.rate_category, summary.years);
    if let Some(project_type) = summary.optimism_bias {
        println!("  Optimism bias: {} (+{:.0}%)", project_type, project_type.uplift() * 100.0);
        println!("  PV costs (unadjusted): {}", pounds(summary.pv_costs_unadjusted));
    }
    println!("  PV costs: {}", pounds(summary.pv_costs));
    println!("  PV benefits: {}", pounds(summary.pv_benefits));
    println!("  NPV: {}", pounds(summary.npv));
    match summary.bcr {
        Some(bcr) => println!("  BCR: {:.2}", bcr),
        None => println!("  BCR: n/a (zero discounted costs)"),
    }
}

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

mod config;
mod goal_cmd;
mod process_cmd;
mod state;

#[derive(Parser, Debug)]
#[command(
    name = "famledger",
    version,
    about = "Privacy-first household statement analysis and savings goals"
)]
struct Cli {
    /// Debug logging (ignored when RUST_LOG is set)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the full pipeline on a statement and print the result as JSON
    Process {
        /// Statement file (.pdf or plain text)
        path: PathBuf,

        /// JSON file describing a savings goal
        #[arg(long)]
        goal: Option<PathBuf>,

        /// Single-line JSON output
        #[arg(long)]
        compact: bool,

        /// Also write normalized transactions as CSV
        #[arg(long)]
        csv_out: Option<PathBuf>,

        /// Explain the latest month against the goal (stderr)
        #[arg(long)]
        explain: bool,
    },

    /// Savings goal calculations
    Goal {
        #[command(subcommand)]
        command: GoalCommand,
    },

    /// Print the redacted text of a statement and the patterns that fired
    Redact { path: PathBuf },

    /// Manage ~/.famledger/config.toml
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Args, Debug, Clone)]
struct GoalArgs {
    /// Amount to reach
    #[arg(long)]
    target: f64,

    /// Amount already saved
    #[arg(long, default_value_t = 0.0)]
    current: f64,

    /// Monthly contribution
    #[arg(long, allow_negative_numbers = true)]
    contribution: f64,

    /// Advisory target date (YYYY-MM-DD)
    #[arg(long)]
    target_date: Option<String>,

    /// Goal name
    #[arg(long, default_value = "Savings goal")]
    name: String,
}

#[derive(Subcommand, Debug)]
enum GoalCommand {
    /// Months and years until the target is reached
    Project(GoalArgs),

    /// Projection under hypothetical monthly adjustments
    Simulate {
        #[command(flatten)]
        goal: GoalArgs,

        #[arg(long)]
        extra_savings: Option<f64>,

        #[arg(long)]
        extra_income: Option<f64>,

        #[arg(long)]
        reduced_expenses: Option<f64>,
    },

    /// Rule-based suggestions to reach the goal sooner
    Recommend(GoalArgs),
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config if none exists
    Init,
    /// Print the effective config
    Show,
}

fn init_logging(verbose: bool, level: &str) {
    // Priority: RUST_LOG env var > --verbose flag > config level > info
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load_config()?;
    init_logging(cli.verbose, &cfg.logging.level);

    match cli.command {
        Command::Process {
            path,
            goal,
            compact,
            csv_out,
            explain,
        } => process_cmd::run(
            &cfg,
            &process_cmd::ProcessOptions {
                path,
                goal,
                pretty: cfg.output.pretty && !compact,
                csv_out,
                explain,
            },
        )?,

        Command::Goal { command } => match command {
            GoalCommand::Project(args) => goal_cmd::project(&args.into_goal())?,
            GoalCommand::Simulate {
                goal,
                extra_savings,
                extra_income,
                reduced_expenses,
            } => {
                let defaults = cfg.simulation;
                let what_if = famledger_core::WhatIf {
                    extra_monthly_savings: extra_savings.unwrap_or(defaults.extra_monthly_savings),
                    extra_monthly_income: extra_income.unwrap_or(defaults.extra_monthly_income),
                    reduced_monthly_expenses: reduced_expenses
                        .unwrap_or(defaults.reduced_monthly_expenses),
                };
                goal_cmd::simulate(&goal.into_goal(), &what_if)?
            }
            GoalCommand::Recommend(args) => goal_cmd::recommend(&args.into_goal())?,
        },

        Command::Redact { path } => process_cmd::redact(&path)?,

        Command::Config { command } => match command {
            ConfigCommand::Init => config::init_config()?,
            ConfigCommand::Show => config::show_config()?,
        },
    }

    Ok(())
}

impl GoalArgs {
    fn into_goal(self) -> famledger_core::GoalRequest {
        famledger_core::GoalRequest {
            id: None,
            name: Some(self.name),
            target_amount: self.target,
            current_amount: self.current,
            monthly_contribution: self.contribution,
            target_date: self.target_date,
            what_if: None,
        }
    }
}

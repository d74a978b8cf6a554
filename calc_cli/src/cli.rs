//! Command-line definitions.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use calc_core::CalculatorInputs;

/// Sub-directory of the user data dir holding persisted preferences
pub const DATA_DIR_NAME: &str = "calc";

#[derive(Parser, Debug)]
#[command(name = "calc_cli", version, about = "What does manual admin work cost you?")]
pub struct Cli {
    /// Content document overriding the built-in text
    #[arg(long, global = true, env = "CALC_CONTENT")]
    pub content: Option<PathBuf>,

    /// Directory for persisted preferences (cookie consent) [default: per-user data dir]
    #[arg(long, global = true, env = "CALC_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Where persisted preferences live: `--data-dir`/`CALC_DATA_DIR`, else
    /// `<user data dir>/calc` so the choice follows the user across working
    /// directories.
    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.data_dir {
            return Ok(dir.clone());
        }
        dirs::data_dir()
            .map(|dir| dir.join(DATA_DIR_NAME))
            .context("no per-user data directory on this platform; pass --data-dir")
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Compute the results once and exit
    Estimate(EstimateArgs),

    /// Live session: change inputs and watch the results update
    Interactive,

    /// Manage cookie notice acceptance
    Consent {
        #[command(subcommand)]
        action: ConsentAction,
    },
}

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// People doing admin work
    #[arg(long, allow_negative_numbers = true)]
    pub people: Option<f64>,

    /// Admin hours per person per week
    #[arg(long, allow_negative_numbers = true)]
    pub hours_per_week: Option<f64>,

    /// Fully-loaded cost per hour (USD)
    #[arg(long, allow_negative_numbers = true)]
    pub cost_per_hour: Option<f64>,

    /// One-time automation cost (USD)
    #[arg(long, allow_negative_numbers = true)]
    pub automation_cost: Option<f64>,

    /// Print inputs and results as JSON
    #[arg(long)]
    pub json: bool,
}

impl EstimateArgs {
    /// Inputs from the flags, with defaults for anything not given.
    pub fn inputs(&self) -> CalculatorInputs {
        let defaults = CalculatorInputs::default();
        CalculatorInputs::new(
            self.people.unwrap_or(defaults.people),
            self.hours_per_week.unwrap_or(defaults.hours_per_week),
            self.cost_per_hour.unwrap_or(defaults.cost_per_hour),
            self.automation_cost.unwrap_or(defaults.automation_cost),
        )
    }
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsentAction {
    /// Show whether the notice was accepted
    Status,
    /// Accept the cookie notice
    Accept,
    /// Forget a previous acceptance
    Revoke,
}

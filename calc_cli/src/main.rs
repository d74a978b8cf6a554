//! # Manual-Work Cost Calculator CLI
//!
//! Terminal front-end for `calc_core`: a one-shot estimate, a live
//! interactive session, and cookie-notice consent management.

mod cli;
mod render;
mod session;

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use calc_core::consent::ConsentStore;
use calc_core::content::{site_content, SiteContent};
use calc_core::format::summary;
use calc_core::compute_results;

use cli::{Cli, Commands, ConsentAction, EstimateArgs};
use session::Session;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let owned;
    let content: &SiteContent = match &cli.content {
        Some(path) => {
            owned = SiteContent::load(path)
                .with_context(|| format!("loading content from {}", path.display()))?;
            &owned
        }
        None => site_content().context("loading built-in content")?,
    };
    let consent = ConsentStore::new(cli.data_dir()?);

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Estimate(args) => estimate(content, &args, &mut io::stdout().lock()),
        Commands::Interactive => interactive(content, &consent),
        Commands::Consent { action } => manage_consent(content, &consent, action),
    }
}

/// Log to stderr. `RUST_LOG` wins over `-v`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// One-shot calculation. Non-finite metrics come out as JSON `null`.
fn estimate<W: Write>(content: &SiteContent, args: &EstimateArgs, out: &mut W) -> Result<()> {
    let inputs = args.inputs();
    inputs.validate()?;
    let results = compute_results(&inputs);
    debug!(?inputs, ?results, "estimate computed");

    if args.json {
        let payload = serde_json::json!({ "inputs": inputs, "results": results });
        writeln!(out, "{}", serde_json::to_string_pretty(&payload)?)?;
        return Ok(());
    }

    let calc = &content.calculator;
    write!(out, "{}", render::header(calc))?;
    writeln!(out)?;
    write!(out, "{}", render::inputs(calc, &inputs))?;
    writeln!(out)?;
    write!(out, "{}", render::results(calc, &results))?;
    writeln!(out)?;
    writeln!(out, "{}", summary(&results))?;
    Ok(())
}

fn interactive(content: &SiteContent, consent: &ConsentStore) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match consent.is_accepted() {
        Ok(true) => {}
        Ok(false) => writeln!(out, "{}\n", render::cookie_notice(&content.cookie_banner))?,
        Err(e) => tracing::warn!(error = %e, "could not read consent record"),
    }

    let mut session = Session::new(&content.calculator);
    session.run(io::stdin().lock(), &mut out)?;
    debug!(inputs = ?session.calculator().inputs(), "session ended");
    Ok(())
}

fn manage_consent(content: &SiteContent, consent: &ConsentStore, action: ConsentAction) -> Result<()> {
    match action {
        ConsentAction::Status => match consent.record()? {
            Some(record) if record.accepted => {
                println!("Accepted at {}", record.accepted_at.to_rfc3339());
            }
            _ => println!("Not accepted. {}", render::cookie_notice(&content.cookie_banner)),
        },
        ConsentAction::Accept => {
            let record = consent.accept()?;
            println!("{} ({})", content.cookie_banner.accept, record.accepted_at.to_rfc3339());
        }
        ConsentAction::Revoke => {
            consent.revoke()?;
            println!("Consent cleared");
        }
    }
    Ok(())
}

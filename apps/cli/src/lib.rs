//! Command-line application for generating shuffled MCQ sets.

pub mod app;
pub mod config;
pub mod error;
pub mod prompt;
pub mod render;

use std::io;

use clap::Parser;
use mcq_core::RandomPermuter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use app::{generate, Report};
pub use config::{Cli, Config};
pub use error::{CliError, Result};
pub use prompt::Prompter;
pub use render::{OutputFormat, Renderer};

pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?.with_cli(&cli);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout()).interactive(config.interactive);
    let mut permuter = RandomPermuter::from_entropy();

    let report = generate(&config, &mut prompter, &mut permuter)?;
    println!(
        "Shuffled MCQ options for {} set(s) of {} question(s) saved to '{}'.",
        report.sets,
        report.questions,
        report.output.display()
    );

    Ok(())
}

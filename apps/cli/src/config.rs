//! Run configuration.
//!
//! Values come from the environment (a `.env` file is loaded first) and
//! are then overridden by command-line flags.

use std::path::PathBuf;

use clap::Parser;
use mcq_core::QuestionOrder;

use crate::error::Result;
use crate::render::OutputFormat;

pub const DEFAULT_INPUT: &str = "input.txt";
pub const DEFAULT_BOILERPLATE: &str = "boilerplate.txt";
pub const DEFAULT_IMAGE: &str = "set_image.jpg";
pub const DEFAULT_OUTPUT_STEM: &str = "shuffled_output";
pub const DEFAULT_SUMMARY: &str = "Total marks: 5; Time: 6 minutes";

/// Command-line arguments.
#[derive(Parser, Debug, Default)]
#[command(
    name = "mcq-shuffle",
    version,
    about = "Generate randomized sets of multiple-choice questions"
)]
pub struct Cli {
    /// Question source file [env: MCQ_INPUT] [default: input.txt]
    #[arg(short, long, value_name = "path")]
    pub input: Option<PathBuf>,

    /// Boilerplate text printed before every set [env: MCQ_BOILERPLATE]
    #[arg(short, long, value_name = "path")]
    pub boilerplate: Option<PathBuf>,

    /// Image placed at the top of every set, if it exists [env: MCQ_IMAGE]
    #[arg(long, value_name = "path")]
    pub image: Option<PathBuf>,

    /// Output document [env: MCQ_OUTPUT] [default: shuffled_output.<ext>]
    #[arg(short, long, value_name = "path")]
    pub output: Option<PathBuf>,

    /// Summary line shown above the boilerplate [env: MCQ_SUMMARY]
    #[arg(long, value_name = "text")]
    pub summary: Option<String>,

    /// Output format [env: MCQ_FORMAT] [default: html]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Number of randomized sets to generate
    #[arg(short = 'n', long, value_name = "count")]
    pub sets: Option<usize>,

    /// Shuffle question order within each set
    #[arg(long, conflicts_with = "keep_order")]
    pub shuffle_questions: bool,

    /// Keep questions in source order
    #[arg(long)]
    pub keep_order: bool,

    /// Fail instead of prompting for missing answers
    #[arg(long)]
    pub non_interactive: bool,
}

/// Effective settings for one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub input: PathBuf,
    pub boilerplate: PathBuf,
    pub image: PathBuf,
    pub output: Option<PathBuf>,
    pub summary: String,
    pub format: OutputFormat,
    pub sets: Option<usize>,
    pub question_order: Option<QuestionOrder>,
    pub interactive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            boilerplate: PathBuf::from(DEFAULT_BOILERPLATE),
            image: PathBuf::from(DEFAULT_IMAGE),
            output: None,
            summary: DEFAULT_SUMMARY.to_string(),
            format: OutputFormat::default(),
            sets: None,
            question_order: None,
            interactive: true,
        }
    }
}

impl Config {
    /// Load settings from `MCQ_*` environment variables.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load settings from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let format = match lookup("MCQ_FORMAT") {
            Some(value) => value.parse()?,
            None => defaults.format,
        };

        Ok(Self {
            input: lookup("MCQ_INPUT").map(PathBuf::from).unwrap_or(defaults.input),
            boilerplate: lookup("MCQ_BOILERPLATE")
                .map(PathBuf::from)
                .unwrap_or(defaults.boilerplate),
            image: lookup("MCQ_IMAGE").map(PathBuf::from).unwrap_or(defaults.image),
            output: lookup("MCQ_OUTPUT").map(PathBuf::from),
            summary: lookup("MCQ_SUMMARY").unwrap_or(defaults.summary),
            format,
            ..defaults
        })
    }

    /// Apply command-line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Self {
        if let Some(input) = &cli.input {
            self.input = input.clone();
        }
        if let Some(boilerplate) = &cli.boilerplate {
            self.boilerplate = boilerplate.clone();
        }
        if let Some(image) = &cli.image {
            self.image = image.clone();
        }
        if let Some(output) = &cli.output {
            self.output = Some(output.clone());
        }
        if let Some(summary) = &cli.summary {
            self.summary = summary.clone();
        }
        if let Some(format) = cli.format {
            self.format = format;
        }
        if cli.sets.is_some() {
            self.sets = cli.sets;
        }
        if cli.shuffle_questions {
            self.question_order = Some(QuestionOrder::Shuffled);
        } else if cli.keep_order {
            self.question_order = Some(QuestionOrder::Original);
        }
        if cli.non_interactive {
            self.interactive = false;
        }
        self
    }

    /// Output path, defaulting to `shuffled_output.<ext>` for the format.
    pub fn output_path(&self, extension: &str) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("{}.{}", DEFAULT_OUTPUT_STEM, extension)))
    }
}

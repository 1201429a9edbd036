use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::sampler::Policy;

/// `respondent` — synthetic survey-response generator.
#[derive(Parser, Debug)]
#[command(name = "respondent")]
#[command(version = "0.1.0")]
#[command(about = "Generate and submit synthetic survey responses.", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate and submit responses until the target count is reached
    Run {
        /// Form identifier (defaults to config, then the fixture's own id)
        #[arg(short, long)]
        form: Option<String>,

        /// Number of successful submissions to reach
        #[arg(short, long)]
        count: Option<u64>,

        /// Answer selection policy
        #[arg(short, long, value_enum)]
        policy: Option<Policy>,

        /// Forms backend base URL (overrides config)
        #[arg(long, conflicts_with = "fixture")]
        base_url: Option<String>,

        /// Local JSON form descriptor; submissions stay in-process
        #[arg(long)]
        fixture: Option<PathBuf>,
    },

    /// Fetch a form and print its questions and answer domains
    Inspect {
        /// Form identifier (defaults to config, then the fixture's own id)
        #[arg(short, long)]
        form: Option<String>,

        /// Forms backend base URL (overrides config)
        #[arg(long, conflicts_with = "fixture")]
        base_url: Option<String>,

        /// Local JSON form descriptor
        #[arg(long)]
        fixture: Option<PathBuf>,
    },
}

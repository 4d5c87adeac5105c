use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use clap_complete::Shell;
use pageindex::{BuildOptions, OutputFormat};

#[derive(Debug, Parser)]
#[command(
    name = "pageindex",
    about = "Build a JSON index of documentation pages and their variants"
)]
pub struct Cli {
    /// Directory containing the pages*/ trees
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Number of worker threads (default: half the available CPUs)
    #[arg(short = 'j', long)]
    pub threads: Option<usize>,

    /// Pretty-print the JSON document
    #[arg(long)]
    pub pretty: bool,

    /// Increase log verbosity (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, hide = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            threads: self.threads,
            format: if self.pretty {
                OutputFormat::Pretty
            } else {
                OutputFormat::Compact
            },
        }
    }
}

/// Generate shell completions and print to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(
        shell,
        &mut cmd,
        "pageindex",
        &mut std::io::stdout(),
    );
}

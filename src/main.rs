use std::{
    io::{self, BufWriter},
    process::ExitCode,
};

use clap::Parser;
use pageindex::pipeline;
use tracing_subscriber::EnvFilter;

mod cli;

use cli::Cli;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("PAGEINDEX_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    if let Some(shell) = cli.completions {
        cli::print_completions(shell);
        return ExitCode::SUCCESS;
    }

    let stdout = BufWriter::new(io::stdout().lock());
    match pipeline::run(&cli.root, &cli.build_options(), stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("ERROR building index!");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

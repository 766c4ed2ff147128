//! Scenediff CLI: compare scene captures against baselines
//!
//! ## Usage
//!
//! ```bash
//! scenediff --baseline-dir baselines --capture-dir captures --output-dir out
//! scenediff --baseline-dir b --capture-dir c --output-dir out --enforce true
//! ```

use clap::Parser;
use scenediff_cli::{
    logging, Cli, CliConfig, CliResult, ColorChoice, RunConfig, SceneRunner, Verbosity,
    ENFORCEMENT_FAILED_MESSAGE,
};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<ExitCode> {
    let cli = Cli::parse();
    let config = build_config(&cli);
    logging::init(config.verbosity, config.color.should_color())?;

    let mut runner = SceneRunner::new(RunConfig::from_cli(&cli), &config);
    let report = runner.run()?;

    print!("{}", report.to_markdown());

    if report.should_fail() {
        eprintln!("{ENFORCEMENT_FAILED_MESSAGE}");
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn build_config(cli: &Cli) -> CliConfig {
    CliConfig::new()
        .with_verbosity(Verbosity::from_flags(cli.quiet, cli.verbose))
        .with_color(ColorChoice::from(cli.color))
}

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;

use entity_step::{
    config::RuntimeConfig,
    runner::{self, RunError},
    telemetry,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Advance a batch of scripted entities by one time step")]
struct Cli {
    /// Batch input: a time-step header followed by `id|behavior|x|y|z` records
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Destination for `id|x|y|z` result records
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Optional YAML file with runtime settings
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log filter directive, overrides the config file (e.g. `info`)
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<RuntimeConfig> {
    let config = match &cli.config {
        Some(path) => RuntimeConfig::from_yaml(path)
            .with_context(|| format!("Failed to load runtime config {}", path.display()))?,
        None => RuntimeConfig::default(),
    };
    Ok(config.with_log_level(cli.log_level.clone()))
}

fn run(cli: &Cli) -> Result<runner::RunSummary, RunError> {
    let config = load_config(cli).map_err(|err| RunError::Usage(format!("{err:#}")))?;
    telemetry::init_logging(&config.logging);
    runner::run_files(&cli.input, &cli.output)
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            eprintln!("{err}");
            return ExitCode::from(RunError::Usage(String::new()).exit_code());
        }
        Err(err) => {
            // --help and --version
            let _ = err.print();
            return ExitCode::SUCCESS;
        }
    };

    match run(&cli) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}

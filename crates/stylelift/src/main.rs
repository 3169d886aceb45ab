mod files;
mod lint;
mod output;

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
  Text,
  Json,
}

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct StyleliftCommand {
  /// Files or directories to lint
  #[arg(required = true)]
  pub paths: Vec<PathBuf>,
  /// Apply every suggested fix and write the files back
  #[arg(long)]
  pub fix: bool,
  #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
  pub format: OutputFormat,
  /// [possible values: "error", "warn", "info", "debug", "trace"]
  #[arg(long = "log-level", env = "RUST_LOG", hide = true)]
  pub _rust_log: Option<String>,
}

fn main() -> anyhow::Result<ExitCode> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(std::io::stderr)
    .init();

  let args = StyleliftCommand::parse();
  let start = std::time::Instant::now();

  let files = files::discover(&args.paths)?;
  let summary = lint::run(&files, args.fix);

  tracing::info!(
    "processed {} files errors {} in {:?}",
    summary.reports.len() + summary.failures,
    summary.failures,
    start.elapsed()
  );

  let mut stdout = std::io::stdout().lock();
  match args.format {
    OutputFormat::Text => output::write_text(&mut stdout, &summary.reports)?,
    OutputFormat::Json => output::write_json(&mut stdout, &summary.reports)?,
  }
  stdout.flush()?;

  if summary.is_clean() {
    Ok(ExitCode::SUCCESS)
  } else {
    Ok(ExitCode::FAILURE)
  }
}

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use taylordiff::config::{PRESET_NAMES, preset};
use taylordiff::report::{CsvOptions, Sweep, sweep, write_csv};
use taylordiff::{Config, Scalar};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// JSON file with the expression and approximation settings
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  /// Built-in expression (log-power, exp, self-power, reciprocal)
  #[arg(long, global = true)]
  preset: Option<String>,

  /// Differentiate the expression this many times before comparing
  #[arg(long, global = true)]
  derivative_order: Option<usize>,

  /// Point the Taylor series is expanded around
  #[arg(long, global = true, allow_negative_numbers = true)]
  expansion_point: Option<f64>,

  /// Number of Taylor series terms
  #[arg(long, global = true)]
  order: Option<usize>,

  /// Floating-point precision used for evaluation
  #[arg(long, global = true, value_enum, default_value_t = Precision::F32)]
  precision: Precision,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Precision {
  F32,
  F64,
}

#[derive(Subcommand)]
enum Commands {
  /// Evaluate the exact expression and its approximation at one point
  Eval {
    #[arg(allow_negative_numbers = true)]
    x: f64,
  },
  /// Print `x,exact,approx` rows for a range of x
  Report {
    #[arg(long, default_value_t = 1.25, allow_negative_numbers = true)]
    start: f64,
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true)]
    stop: f64,
    #[arg(long, default_value_t = 0.25)]
    step: f64,
    /// Print a header line
    #[arg(long)]
    header: bool,
    /// Add an |exact - approx| column
    #[arg(long)]
    error: bool,
  },
  /// Print the derivative chain used by the Taylor series
  Chain,
}

fn load_config(cli: &Cli) -> Result<Config> {
  let mut config = match &cli.config {
    Some(path) => Config::from_file(path)
      .with_context(|| format!("failed to load {}", path.display()))?,
    None => Config::default(),
  };
  if let Some(name) = &cli.preset {
    config.expression = preset(name).with_context(|| {
      format!("available presets: {}", PRESET_NAMES.join(", "))
    })?;
  }
  if let Some(derivative_order) = cli.derivative_order {
    config.derivative_order = derivative_order;
  }
  if let Some(expansion_point) = cli.expansion_point {
    config.expansion_point = expansion_point;
  }
  if let Some(order) = cli.order {
    config.taylor_order = order;
  }
  Ok(config)
}

fn run<T: Scalar>(config: &Config, command: &Commands) -> Result<()> {
  let approximation = config
    .build::<T>()
    .context("invalid approximation settings")?;
  let stdout = std::io::stdout();
  let mut out = stdout.lock();

  match command {
    Commands::Eval { x } => {
      let x = T::from_f64_lossy(*x);
      let exact = approximation.exact(x);
      let approx = approximation.approx(x);
      writeln!(out, "x:      {x}")?;
      writeln!(out, "exact:  {exact}")?;
      writeln!(out, "approx: {approx}")?;
      writeln!(out, "error:  {}", (exact - approx).abs())?;
    }
    Commands::Report {
      start,
      stop,
      step,
      header,
      error,
    } => {
      let range = Sweep::new(*start, *stop, *step)?;
      let rows = sweep(&approximation, &range);
      let options = CsvOptions {
        header: *header,
        error: *error,
      };
      write_csv(&mut out, rows, options)?;
    }
    Commands::Chain => {
      let expansion = approximation.expansion();
      for (n, (derivative, coefficient)) in expansion
        .chain()
        .iter()
        .zip(expansion.coefficients())
        .enumerate()
      {
        writeln!(
          out,
          "D^{n} ({} nodes, coefficient {coefficient}): {derivative}",
          derivative.size()
        )?;
      }
    }
  }
  Ok(())
}

fn main() {
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn")),
    )
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();

  let result = load_config(&cli).and_then(|config| match cli.precision {
    Precision::F32 => run::<f32>(&config, &cli.command),
    Precision::F64 => run::<f64>(&config, &cli.command),
  });

  if let Err(e) = result {
    eprintln!("Error: {:#}", e);
    std::process::exit(1);
  }
}

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

use anscombe::analysis::{analyze_all, anscombe_quartet, DatasetOutcome};
use anscombe::core::{AnalysisOptions, StatsError, VarianceConvention};
use anscombe::report::ReportWriter;
use clap::{Parser, ValueEnum};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Descriptive statistics and linear regression over Anscombe's quartet"
)]
struct Args {
    /// Report file to write
    #[arg(long, default_value = "results.txt")]
    output: PathBuf,

    /// Decimal places in the report
    #[arg(long, default_value_t = 2)]
    decimals: usize,

    /// Variance convention for variance and standard deviation
    #[arg(long, value_enum, default_value_t = Convention::Population)]
    convention: Convention,

    /// Also print the report to stdout
    #[arg(long)]
    stdout: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Convention {
    /// Divide by n
    Population,
    /// Divide by n - 1
    Sample,
}

impl From<Convention> for VarianceConvention {
    fn from(convention: Convention) -> Self {
        match convention {
            Convention::Population => VarianceConvention::Population,
            Convention::Sample => VarianceConvention::Sample,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every dataset was analysed successfully.
fn run(args: &Args) -> Result<bool, StatsError> {
    let options = AnalysisOptions::builder()
        .decimals(args.decimals)
        .variance_convention(args.convention.into())
        .build()?;

    let outcomes = analyze_all(&anscombe_quartet(), &options);

    let file = File::create(&args.output)?;
    let mut report = ReportWriter::new(BufWriter::new(file), &options);
    report.write_all(&outcomes)?;
    report.finish()?;

    if args.stdout {
        let mut echo = ReportWriter::new(io::stdout().lock(), &options);
        echo.write_all(&outcomes)?;
        echo.finish()?;
    }

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(
        path = %args.output.display(),
        datasets = outcomes.len(),
        failed,
        "report written"
    );

    Ok(outcomes.iter().all(DatasetOutcome::is_ok))
}

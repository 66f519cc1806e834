mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tracing::{error, info};

use crate::error::RunError;
use crate::input::load_input;
use crate::model::params::{Alignment, BandShiftParams};
use crate::pipeline::run_band_shift;
use crate::pipeline::stage8_rank::RuleOrder;
use crate::pipeline::stage9_report::{Stage9Input, write_reports};

/// Find rubric band shifts that move outlier marks toward a target distribution
#[derive(Parser, Debug)]
#[command(name = "rubric-bandshift")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Debug-level logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Only log warnings and errors
    #[arg(long, short, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyse one assignment and write rules.json, summary.json and report.txt
    Run(RunArgs),
}

#[derive(Args, Debug, Clone)]
struct RunArgs {
    /// Rubric definition (JSON)
    #[arg(long)]
    rubric: PathBuf,

    /// Student submissions with awarded bands (JSON)
    #[arg(long)]
    marks: PathBuf,

    /// Reference score per student (JSON array)
    #[arg(long)]
    reference: PathBuf,

    /// Output directory
    #[arg(long)]
    out: PathBuf,

    /// Minimum distance from the reference for a student to be analysed
    #[arg(long, default_value_t = BandShiftParams::default_v1().variance)]
    variance: f64,

    /// Maximum distance from the reference a band shift may leave
    #[arg(long, default_value_t = BandShiftParams::default_v1().threshold)]
    threshold: f64,

    /// How students are paired with reference values
    #[arg(long, value_enum, default_value_t = Alignment::Rank)]
    alignment: Alignment,

    /// Ordering of rules in rules.json and report.txt
    #[arg(long, value_enum, default_value_t = RuleOrder::FixCount)]
    order: RuleOrder,

    /// Number of rules listed in report.txt
    #[arg(long, default_value_t = 10)]
    top: usize,
}

impl RunArgs {
    fn params(&self) -> BandShiftParams {
        BandShiftParams {
            variance: self.variance,
            threshold: self.threshold,
            alignment: self.alignment,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    info!("rubric-bandshift v{}", env!("CARGO_PKG_VERSION"));

    let result = match cli.command {
        Command::Run(args) => run(&args),
    };
    if let Err(err) = result {
        error!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), RunError> {
    let params = args.params();
    params.validate()?;

    let bundle = load_input(&args.rubric, &args.marks, &args.reference)?;
    let report = run_band_shift(&bundle.rubric, &bundle.students, &bundle.reference, &params)?;

    let input = Stage9Input {
        bundle: &bundle,
        report: &report,
        order: args.order,
        top: args.top,
        tool_name: "rubric-bandshift".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;

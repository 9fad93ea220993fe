use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use reimburse::calibration::calibrationset::CalibrationSet;
use reimburse::reimbursement::calculator::{
    TripInput,
    compute
};
use reimburse::reimbursement::curvebuilder::build_residual_curve;
use reimburse::reimbursement::curvecache::CurveCache;
use reimburse::reimbursement::formula::FormulaConstants;

static CURVE_CACHE: CurveCache = CurveCache::new();

#[derive(Parser)]
#[command(name = "reimburse")]
#[command(about = "Travel-expense reimbursement estimator")]
#[command(version)]
struct Cli {
    /// Trip duration in days
    #[arg(allow_negative_numbers = true)]
    days: i64,

    /// Miles traveled over the whole trip
    #[arg(allow_negative_numbers = true)]
    miles: f64,

    /// Total receipts amount
    #[arg(allow_negative_numbers = true)]
    receipts: f64,

    /// Calibration dataset of historical cases with expected outputs
    #[arg(long, default_value = "public_cases.json")]
    cases: PathBuf,

    /// Log verbosity level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: tracing::Level,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt().with_max_level(cli.log_level).with_target(false).init();

    let calibration = CalibrationSet::from_file(&cli.cases)
        .with_context(|| format!("calibration dataset {}", cli.cases.display()))?;
    let constants = FormulaConstants::default();
    let curve = CURVE_CACHE.get_or_build(|| build_residual_curve(calibration.cases(), &constants));

    let input = TripInput::new(cli.days, cli.miles, cli.receipts);
    let amount = compute(&input, &constants, curve);
    println!("{:.2}", amount);

    Ok(())
}

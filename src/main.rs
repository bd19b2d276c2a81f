use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use np_chart::input::ChartRequest;
use np_chart::spc::NPChart;
use tracing::error;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the request path when no argument is given.
const REQUEST_ENV: &str = "NPCHART_REQUEST";

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let Some(path) = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| std::env::var_os(REQUEST_ENV).map(PathBuf::from))
    else {
        error!("usage: np-chart <request.toml> (or set {REQUEST_ENV})");
        return ExitCode::from(2);
    };

    match run(&path) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path) -> Result<()> {
    let request = ChartRequest::from_file(path)?;
    let chart = request
        .evaluate()
        .with_context(|| format!("cannot build np chart from {}", path.display()))?;
    report(&chart);
    Ok(())
}

/// Print the chart summary to stdout. Logging stays on stderr so the
/// report survives any `RUST_LOG` filter.
fn report(chart: &NPChart) {
    let params = chart.parameters();
    let limits = chart.control_limits();
    let values: Vec<i64> = chart.samples().iter().map(|s| s.value).collect();

    println!(
        "n = {}, p = {}, samples = {}",
        params.sample_size(),
        params.defect_rate(),
        values.len()
    );
    println!("observations = {values:?}");
    println!("CL    = n * p = {:.2}", limits.cl);
    println!("sigma = sqrt(n * p * (1 - p)) = {:.3}", chart.sigma());
    println!("UCL   = CL + 3 sigma = {:.2}", limits.ucl);
    if chart.lcl_clamped() {
        println!("LCL   = max(0, CL - 3 sigma) = {:.2} (clamped)", limits.lcl);
    } else {
        println!("LCL   = CL - 3 sigma = {:.2}", limits.lcl);
    }

    if chart.is_in_control() {
        println!("all points are within control limits");
    } else {
        println!(
            "out-of-control points at sample(s) {:?} with value(s) {:?}",
            chart.out_of_control_indices(),
            chart.out_of_control_values()
        );
    }
}

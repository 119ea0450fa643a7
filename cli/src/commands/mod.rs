//! CLI command implementations.

mod file;
mod record;
mod session;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use qrlabel_core::BatchReport;

pub use file::label_file;
pub use record::label_record;

/// Input could not be read at all
pub const EXIT_FATAL: u8 = 1;
/// Invalid invocation
pub const EXIT_USAGE: u8 = 2;
/// At least one record produced no label
pub const EXIT_PARTIAL: u8 = 3;
/// Interrupted with Ctrl+C
pub const EXIT_CANCELLED: u8 = 130;

/// Options shared by both modes.
pub struct RunOptions {
    pub destination: PathBuf,
    pub report: Option<PathBuf>,
    pub preview: bool,
}

/// Print the summary, write the JSON report if asked, and pick the exit code.
fn finish(report: &BatchReport, options: &RunOptions) -> anyhow::Result<ExitCode> {
    crate::ui::print_summary(report);

    if let Some(path) = &options.report {
        let json = report.to_json()?;
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
    }

    let code = if report.cancelled {
        ExitCode::from(EXIT_CANCELLED)
    } else if !report.failures.is_empty() {
        ExitCode::from(EXIT_PARTIAL)
    } else {
        ExitCode::SUCCESS
    };
    Ok(code)
}

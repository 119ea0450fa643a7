//! Batch (FILE) mode.

use std::path::PathBuf;
use std::process::ExitCode;

use qrlabel_core::{rows, LabelConfig, Labeler};

use super::session::run_labeler;
use super::{finish, RunOptions, EXIT_FATAL};

/// Generate a label for every data row of a spreadsheet or record list.
pub async fn label_file(input: PathBuf, config: LabelConfig, options: RunOptions) -> anyhow::Result<ExitCode> {
    let rows = match rows::open(&input).rows() {
        Ok(rows) => rows,
        Err(e) => {
            println!("\x1b[1;31m✗\x1b[0m Cannot read {}: {}", input.display(), e);
            return Ok(ExitCode::from(EXIT_FATAL));
        }
    };

    println!("\x1b[1mRows:\x1b[0m {}", rows.len());

    let labeler = Labeler::new(config, options.destination.clone());
    let report = run_labeler(labeler, move |labeler, cancel| labeler.run_batch(rows, cancel)).await?;

    finish(&report, &options)
}

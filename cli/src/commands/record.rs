//! Single-record (QR) mode.

use std::process::ExitCode;

use qrlabel_core::encoder::encode_matrix;
use qrlabel_core::{LabelConfig, Labeler, Record};

use super::session::run_labeler;
use super::{finish, RunOptions};
use crate::ui::print_qr_code;

/// Generate the label for one record given on the command line.
pub async fn label_record(raw: String, config: LabelConfig, options: RunOptions) -> anyhow::Result<ExitCode> {
    if options.preview {
        preview(&raw, &config);
    }

    let labeler = Labeler::new(config, options.destination.clone());
    let report = run_labeler(labeler, move |labeler, _| labeler.run_single(&raw)).await?;

    finish(&report, &options)
}

fn preview(raw: &str, config: &LabelConfig) {
    let Ok(record) = Record::parse(raw) else {
        return;
    };
    let request = config.encode_request(record.payload());
    match encode_matrix(&request.payload, &request.hints) {
        Ok(matrix) => print_qr_code(&matrix),
        Err(e) => eprintln!("Failed to generate QR preview: {}", e),
    }
}

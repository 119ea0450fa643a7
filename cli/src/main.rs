//! Qrlabel CLI - QR label generation for equipment and location records.

mod commands;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use qrlabel_core::constants::LABEL_SIZE;
use qrlabel_core::encoder::{ErrorCorrection, ImageFormat};
use qrlabel_core::LabelConfig;
use tracing_subscriber::EnvFilter;

use crate::commands::EXIT_USAGE;

#[derive(Parser)]
#[command(name = "qrlabel", version)]
#[command(about = "Generate labelled QR code images from records", long_about = None)]
struct Cli {
    /// QR to label one record, FILE to label every row of a spreadsheet or list
    #[arg(value_enum, ignore_case = true)]
    mode: Mode,

    /// Record text (QR mode) or input file path (FILE mode)
    input: String,

    /// Directory the label images are written to
    destination: PathBuf,

    /// Label edge length in pixels
    #[arg(long, default_value_t = LABEL_SIZE)]
    size: u32,

    /// Image format: png, jpg, gif or bmp (files keep the .png name)
    #[arg(long, default_value = "png")]
    format: ImageFormat,

    /// Error correction level: L, M, Q or H
    #[arg(long)]
    error_correction: Option<ErrorCorrection>,

    /// Character set for the QR payload, e.g. UTF-8 or ISO-8859-1
    #[arg(long)]
    charset: Option<String>,

    /// Font file for the category and payload lines
    #[arg(long, env = "QRLABEL_FONT")]
    font: Option<PathBuf>,

    /// Font file for display names in non-Latin scripts
    #[arg(long, env = "QRLABEL_SCRIPT_FONT")]
    script_font: Option<PathBuf>,

    /// Write a JSON batch report to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Print the QR symbol to the terminal (QR mode)
    #[arg(long)]
    preview: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Mode {
    /// Label a single record given on the command line
    Qr,
    /// Label every data row of an input file
    File,
}

impl Cli {
    fn label_config(&self) -> LabelConfig {
        LabelConfig {
            size: self.size,
            format: self.format,
            error_correction: self.error_correction,
            charset: self.charset.clone(),
            primary_font: self.font.clone(),
            script_font: self.script_font.clone(),
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive("qrlabel_core=warn".parse()?))
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(ExitCode::SUCCESS);
        }
        Err(_) => {
            ui::print_usage();
            return Ok(ExitCode::from(EXIT_USAGE));
        }
    };

    let config = cli.label_config();
    let options = commands::RunOptions {
        destination: cli.destination,
        report: cli.report,
        preview: cli.preview,
    };

    match cli.mode {
        Mode::Qr => commands::label_record(cli.input, config, options).await,
        Mode::File => commands::label_file(PathBuf::from(cli.input), config, options).await,
    }
}

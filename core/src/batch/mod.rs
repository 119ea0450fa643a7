//! Label pipeline and batch driver
//!
//! Each record goes parse -> derive filename -> encode -> write -> overlay.
//! Failures stop only the record they belong to: the batch logs them with
//! the raw record text and moves on.

mod report;

pub use report::{BatchReport, OverlayWarning, RecordFailure};

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::encoder::encode;
use crate::overlay::{overlay, DisplayNameOutcome, FontSet};
use crate::record::{output_path, Record};
use crate::{ErrorKind, LabelConfig, Result};

/// Shared stop request, checked between records
pub type CancelFlag = Arc<AtomicBool>;

/// Progress events emitted while labels are generated
#[derive(Debug, Clone)]
pub enum BatchEvent {
    /// A row was recognised as a header and skipped
    HeaderSkipped { raw: String },
    /// A label image was written
    LabelWritten { raw: String, path: PathBuf },
    /// The label exists but its text overlay is incomplete
    OverlayIncomplete { raw: String, path: PathBuf, message: String },
    /// A label path was already written earlier in this batch
    Collision { raw: String, path: PathBuf },
    /// A record produced no label
    RecordFailed { raw: String, kind: ErrorKind, message: String },
    /// Processing stopped before these many rows were reached
    Cancelled { remaining: usize },
}

/// How the text overlay went for a written label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayStatus {
    Complete,
    /// Category and payload drawn, display name left off
    NoDisplayName(String),
    /// Nothing drawn; the bare QR image is kept
    Failed(String),
}

/// A label written to disk
#[derive(Debug, Clone)]
pub struct LabelOutput {
    pub path: PathBuf,
    pub overlay: OverlayStatus,
}

/// Generates labels for records into one destination directory
pub struct Labeler {
    config: LabelConfig,
    destination: PathBuf,
    fonts: FontSet,
    events: Option<mpsc::UnboundedSender<BatchEvent>>,
}

impl Labeler {
    /// Create a labeler, loading fonts per the config
    pub fn new(config: LabelConfig, destination: impl Into<PathBuf>) -> Self {
        let fonts = FontSet::load(config.primary_font.as_deref(), config.script_font.as_deref());
        Self::with_fonts(config, destination, fonts)
    }

    pub fn with_fonts(config: LabelConfig, destination: impl Into<PathBuf>, fonts: FontSet) -> Self {
        Self {
            config,
            destination: destination.into(),
            fonts,
            events: None,
        }
    }

    /// Forward progress events to `tx`
    pub fn with_events(mut self, tx: mpsc::UnboundedSender<BatchEvent>) -> Self {
        self.events = Some(tx);
        self
    }

    fn emit(&self, event: BatchEvent) {
        if let Some(tx) = &self.events {
            let _ = tx.send(event);
        }
    }

    /// Run one raw record through the whole pipeline.
    ///
    /// Errors cover parsing, encoding and writing the base image. Overlay
    /// problems never fail the record; they come back in [`LabelOutput::overlay`].
    pub fn process(&self, raw: &str) -> Result<LabelOutput> {
        let record = Record::parse(raw)?;
        let path = output_path(&self.destination, &record);

        let raster = encode(&self.config.encode_request(record.payload()))?;
        raster.write(&path)?;

        let overlay = match overlay(&path, &record, &self.fonts) {
            Ok(DisplayNameOutcome::Rendered) => OverlayStatus::Complete,
            Ok(DisplayNameOutcome::Absent) => {
                OverlayStatus::NoDisplayName("record has no display name".to_string())
            }
            Ok(DisplayNameOutcome::Unsupported) => {
                OverlayStatus::NoDisplayName("no font covers the display name".to_string())
            }
            Err(e) => OverlayStatus::Failed(e.to_string()),
        };

        Ok(LabelOutput { path, overlay })
    }

    /// Process every row in order, skipping headers and blank rows.
    ///
    /// Every remaining row is attempted exactly once unless `cancel` is set,
    /// in which case the batch stops before the next row.
    pub fn run_batch(&self, rows: Vec<String>, cancel: &AtomicBool) -> BatchReport {
        let mut report = BatchReport::default();
        let mut written: HashSet<PathBuf> = HashSet::new();
        let total = rows.len();

        for (index, raw) in rows.into_iter().enumerate() {
            if cancel.load(Ordering::Relaxed) {
                tracing::info!("batch cancelled with {} rows left", total - index);
                report.cancelled = true;
                self.emit(BatchEvent::Cancelled { remaining: total - index });
                break;
            }

            if raw.is_empty() {
                continue;
            }
            if raw.contains(self.config.header_marker.as_str()) {
                tracing::debug!("skipping header row: {}", raw);
                report.headers_skipped += 1;
                self.emit(BatchEvent::HeaderSkipped { raw });
                continue;
            }

            report.attempted += 1;
            self.process_into(&raw, &mut report, &mut written);
        }

        tracing::info!(
            "batch finished: {} attempted, {} produced, {} failed",
            report.attempted,
            report.produced.len(),
            report.failures.len()
        );
        report
    }

    /// Process a single record supplied directly. No header filtering.
    pub fn run_single(&self, raw: &str) -> BatchReport {
        let mut report = BatchReport {
            attempted: 1,
            ..Default::default()
        };
        self.process_into(raw, &mut report, &mut HashSet::new());
        report
    }

    fn process_into(&self, raw: &str, report: &mut BatchReport, written: &mut HashSet<PathBuf>) {
        match self.process(raw) {
            Ok(output) => {
                if !written.insert(output.path.clone()) {
                    tracing::warn!("label {} overwritten by record: {}", output.path.display(), raw);
                    report.collisions.push(output.path.clone());
                    self.emit(BatchEvent::Collision {
                        raw: raw.to_string(),
                        path: output.path.clone(),
                    });
                }

                tracing::info!("label written: {}", output.path.display());
                self.emit(BatchEvent::LabelWritten {
                    raw: raw.to_string(),
                    path: output.path.clone(),
                });

                let message = match output.overlay {
                    OverlayStatus::Complete => None,
                    OverlayStatus::NoDisplayName(reason) => Some(format!("no display name rendered: {reason}")),
                    OverlayStatus::Failed(reason) => Some(reason),
                };
                if let Some(message) = message {
                    tracing::warn!("overlay incomplete for {}: {}", raw, message);
                    report.overlay_warnings.push(OverlayWarning {
                        raw: raw.to_string(),
                        path: output.path.clone(),
                        message: message.clone(),
                    });
                    self.emit(BatchEvent::OverlayIncomplete {
                        raw: raw.to_string(),
                        path: output.path.clone(),
                        message,
                    });
                }

                if !report.produced.contains(&output.path) {
                    report.produced.push(output.path);
                }
            }
            Err(e) => {
                tracing::warn!("[{}] record failed: {}: {}", e.kind(), raw, e);
                report.record_failure(raw, &e);
                self.emit(BatchEvent::RecordFailed {
                    raw: raw.to_string(),
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }
}

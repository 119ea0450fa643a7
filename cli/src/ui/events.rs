//! Progress and error lines for batch events.

use qrlabel_core::{BatchEvent, BatchReport};

/// Print one batch event.
pub fn print_event(event: &BatchEvent) {
    match event {
        BatchEvent::HeaderSkipped { raw } => {
            println!("\x1b[2m- header: {}\x1b[0m", raw);
        }
        BatchEvent::LabelWritten { path, .. } => {
            println!("\x1b[1;32m✓\x1b[0m {}", path.display());
        }
        BatchEvent::OverlayIncomplete { raw, message, .. } => {
            println!("\x1b[1;33m!\x1b[0m {}: {}", raw, message);
        }
        BatchEvent::Collision { raw, path } => {
            println!("\x1b[1;33m!\x1b[0m {} overwrites {}", raw, path.display());
        }
        BatchEvent::RecordFailed { raw, kind, message } => {
            println!("\x1b[1;31m✗\x1b[0m error machine [{}] {}: {}", kind, raw, message);
        }
        BatchEvent::Cancelled { remaining } => {
            println!("\x1b[1;33m⏹\x1b[0m Cancelled, {} rows not processed", remaining);
        }
    }
}

/// Print the end-of-run summary.
pub fn print_summary(report: &BatchReport) {
    println!();
    println!(
        "\x1b[1mDone:\x1b[0m {} produced, {} failed, {} overlay warnings, {} headers skipped",
        report.produced.len(),
        report.failures.len(),
        report.overlay_warnings.len(),
        report.headers_skipped
    );
}

//! Drives a labeling run on a blocking worker while printing its events.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use qrlabel_core::{BatchEvent, BatchReport, CancelFlag, Labeler};
use tokio::sync::mpsc;

use crate::ui::print_event;

/// Run `job` on the blocking pool, printing events until it finishes.
///
/// Ctrl+C sets the cancel flag; the record in flight still completes.
pub async fn run_labeler<F>(labeler: Labeler, job: F) -> anyhow::Result<BatchReport>
where
    F: FnOnce(&Labeler, &AtomicBool) -> BatchReport + Send + 'static,
{
    let (event_tx, mut events) = mpsc::unbounded_channel::<BatchEvent>();
    let labeler = labeler.with_events(event_tx);

    let cancel: CancelFlag = Arc::new(AtomicBool::new(false));
    let worker_cancel = cancel.clone();
    let mut worker = tokio::task::spawn_blocking(move || job(&labeler, worker_cancel.as_ref()));

    // Handle Ctrl+C gracefully
    let (stop_tx, mut stop_rx) = mpsc::channel::<()>(1);
    ctrlc::set_handler(move || {
        let _ = stop_tx.blocking_send(());
    })?;

    loop {
        tokio::select! {
            Some(event) = events.recv() => {
                print_event(&event);
            }
            _ = stop_rx.recv() => {
                tracing::info!("cancel requested");
                println!("\n\x1b[1;33mStopping after the current record...\x1b[0m");
                cancel.store(true, Ordering::Relaxed);
            }
            result = &mut worker => {
                let report = result?;
                while let Ok(event) = events.try_recv() {
                    print_event(&event);
                }
                return Ok(report);
            }
        }
    }
}

use crate::core::types::{ActionKind, Batch, ProgressEvent, Summary};
use crate::traits::PackageOperations;
use crate::ui;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cooperative cancellation flag shared between the queue and one worker run.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Percent reported before step `index` of `total`.
pub fn step_percent(index: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((index * 100) / total).min(100) as u8
}

/// Percent reported after a step finished (successfully or not). Never reaches 100.
pub fn result_percent(step: u8) -> u8 {
    step.saturating_add(10).min(99)
}

/// Run one batch to completion or cancellation on the calling thread.
///
/// Emits `(start, result)` per identifier, then `"<Label> Completed"` at 100 on a
/// clean run. The cancellation flag is checked before every identifier; an
/// in-flight command is never interrupted. A failing identifier is reported and
/// skipped. The terminal summary is returned, not emitted.
pub fn run_batch<F>(
    batch: &Batch,
    ops: &dyn PackageOperations,
    token: &CancellationToken,
    mut emit: F,
) -> Summary
where
    F: FnMut(ProgressEvent),
{
    let label = batch.action.label();
    let total = batch.len();

    for (index, identifier) in batch.identifiers.iter().enumerate() {
        if token.is_cancelled() {
            emit(ProgressEvent::new("Cancelled by user", 0));
            return Summary::Cancelled;
        }

        let percent = step_percent(index, total);
        emit(ProgressEvent::new(
            format!("{} {}...", label, identifier),
            percent,
        ));

        let result = match batch.action {
            ActionKind::Install => ops.install_or_upgrade(identifier),
            ActionKind::Uninstall => ops.uninstall(identifier),
        };

        let message = match result {
            Ok(output) => {
                if !output.success() {
                    ui::verbose(&format!(
                        "{} exited with code {} for {}",
                        batch.action, output.exit_code, identifier
                    ));
                }
                format!("{} done for {}", label, identifier)
            }
            Err(e) => format!("Error for {}: {}", identifier, e),
        };
        emit(ProgressEvent::new(message, result_percent(percent)));
    }

    emit(ProgressEvent::new(format!("{} Completed", label), 100));
    Summary::Done
}

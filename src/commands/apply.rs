//! Install and uninstall batches
//!
//! One invocation is one batch on a fresh `TaskQueue`. Progress is printed by a
//! `ConsoleListener`; Ctrl-C requests cooperative cancellation.

use crate::core::selection::SelectionSet;
use crate::core::types::{ActionKind, Summary};
use crate::error::{PkgdeckError, Result};
use crate::queue::{ChannelListener, ProgressListener, TaskQueue, WorkerEvent};
use crate::traits::PackageOperations;
use crate::ui as output;
use crate::ui::progress::ConsoleListener;
use std::sync::Arc;

pub struct ApplyOptions {
    pub action: ActionKind,
    pub ids: Vec<String>,
    /// Redraw a progress bar under the log lines.
    pub progress: bool,
    pub json: bool,
}

fn install_interrupt_handler(queue: &TaskQueue) {
    let queue = queue.clone();
    let installed = ctrlc::set_handler(move || {
        eprintln!();
        output::warning("Cancelling after the current package...");
        queue.cancel();
        queue.clear_pending();
    });

    if let Err(e) = installed {
        output::verbose(&format!("Ctrl-C handler not installed: {}", e));
    }
}

pub fn run<P>(options: ApplyOptions, ops: P) -> Result<Summary>
where
    P: PackageOperations + 'static,
{
    let selection: SelectionSet = options.ids.iter().collect();
    if selection.len() < options.ids.len() {
        output::verbose(&format!(
            "Ignoring {} duplicate identifier(s)",
            options.ids.len() - selection.len()
        ));
    }

    let Some(batch) = selection.to_batch(options.action) else {
        if !options.json {
            output::info("No packages selected; nothing to do.");
        }
        return Ok(Summary::Done);
    };

    let queue = TaskQueue::new(ops);
    let console: Arc<dyn ProgressListener> = if options.json {
        Arc::new(ConsoleListener::json())
    } else {
        Arc::new(ConsoleListener::new(options.progress))
    };
    let (outcome, rx) = ChannelListener::new();
    queue.subscribe(console);
    queue.subscribe(Arc::new(outcome));

    install_interrupt_handler(&queue);

    if !options.json {
        output::header(&format!("{}: {} package(s)", batch.action, batch.len()));
    }

    queue.enqueue(batch);
    queue.wait_idle();

    rx.try_iter()
        .find_map(|event| match event {
            WorkerEvent::Finished(summary) => Some(summary),
            WorkerEvent::Progress(_) => None,
        })
        .ok_or_else(|| PkgdeckError::Other("Worker ended without a summary".to_string()))
}

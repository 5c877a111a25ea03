//! Re-run a callback whenever a file changes.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Duration;

use notify::{RecursiveMode, Watcher};

use crate::commands::read_source;
use crate::error::CliError;

/// Quiet period that coalesces the burst of events an editor save produces.
const DEBOUNCE: Duration = Duration::from_millis(100);

/// Watch `path` and call `on_change` with its new content after each change.
///
/// Watches the parent directory so editors that replace the file on save are
/// still followed. Blocks until the watcher shuts down. A file that is briefly
/// missing or unreadable is logged and skipped.
pub(crate) fn watch_file(
    path: &Path,
    mut on_change: impl FnMut(&str) -> Result<(), CliError>,
) -> Result<(), CliError> {
    let target = std::path::absolute(path)?;
    let dir = target
        .parent()
        .map_or_else(|| PathBuf::from("."), Path::to_path_buf);

    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
        // Receiver gone means we are shutting down
        let _ = tx.send(res);
    })?;
    watcher.watch(&dir, RecursiveMode::NonRecursive)?;

    while let Ok(res) = rx.recv() {
        if !is_relevant(&res, &target) {
            continue;
        }

        // Drain the rest of the burst
        while rx.recv_timeout(DEBOUNCE).is_ok() {}

        match read_source(&target) {
            Ok(markdown) => on_change(&markdown)?,
            Err(e) => tracing::warn!(error = %e, "Skipping change"),
        }
    }

    Ok(())
}

/// Whether a watcher event is a content change of `target`.
fn is_relevant(res: &notify::Result<notify::Event>, target: &Path) -> bool {
    match res {
        Ok(event) => {
            matches!(
                event.kind,
                notify::EventKind::Create(_) | notify::EventKind::Modify(_)
            ) && event.paths.iter().any(|p| p == target)
        }
        Err(e) => {
            tracing::warn!(error = %e, "File watcher error");
            false
        }
    }
}

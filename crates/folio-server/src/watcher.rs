//! File watching for live updates.

use std::path::{Path, PathBuf};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::Duration;

use notify::{RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc as async_mpsc;

use folio_content::ResourceKind;

/// Events emitted by the file watcher.
#[derive(Debug, Clone, PartialEq)]
pub enum WatchEvent {
    /// A content resource changed
    ContentModified(ResourceKind, PathBuf),

    /// File was created
    Created(PathBuf),

    /// File was deleted
    Deleted(PathBuf),

    /// Any other modification
    Modified(PathBuf),
}

impl WatchEvent {
    /// Path the event refers to.
    pub fn path(&self) -> &Path {
        match self {
            WatchEvent::ContentModified(_, path)
            | WatchEvent::Created(path)
            | WatchEvent::Deleted(path)
            | WatchEvent::Modified(path) => path,
        }
    }
}

/// How long a path must stay quiet before its change is reported.
const QUIET_PERIOD: Duration = Duration::from_millis(100);

/// File watcher for detecting changes.
pub struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Create a new file watcher for the given paths.
    ///
    /// Returns the watcher and a channel to receive events. Paths that do not
    /// exist are skipped.
    pub fn new(
        paths: &[PathBuf],
    ) -> Result<(Self, async_mpsc::Receiver<WatchEvent>), std::io::Error> {
        let (sync_tx, sync_rx) = mpsc::channel();
        let (async_tx, async_rx) = async_mpsc::channel(100);

        let mut watcher = notify::recommended_watcher(move |res: Result<notify::Event, _>| {
            if let Ok(event) = res {
                let _ = sync_tx.send(event);
            }
        })
        .map_err(std::io::Error::other)?;

        for path in paths {
            if path.exists() {
                watcher
                    .watch(path, RecursiveMode::Recursive)
                    .map_err(std::io::Error::other)?;
            }
        }

        // Changes are held per path and reported once the path goes quiet, so
        // a write split across several raw events surfaces as one event.
        std::thread::spawn(move || {
            let mut pending: Vec<WatchEvent> = Vec::new();

            loop {
                match sync_rx.recv_timeout(QUIET_PERIOD) {
                    Ok(event) => {
                        for path in &event.paths {
                            if let Some(e) = classify_event(path, &event.kind) {
                                pending.retain(|p| p.path() != e.path());
                                pending.push(e);
                            }
                        }
                    }
                    Err(RecvTimeoutError::Timeout) => {
                        if !flush(&mut pending, &async_tx) {
                            return;
                        }
                    }
                    Err(RecvTimeoutError::Disconnected) => {
                        flush(&mut pending, &async_tx);
                        return;
                    }
                }
            }
        });

        Ok((Self { _watcher: watcher }, async_rx))
    }
}

/// Send every pending event. Returns false once the receiver is gone.
fn flush(pending: &mut Vec<WatchEvent>, tx: &async_mpsc::Sender<WatchEvent>) -> bool {
    for event in pending.drain(..) {
        if tx.blocking_send(event).is_err() {
            return false;
        }
    }
    true
}

/// Classify a notify event into a WatchEvent.
fn classify_event(path: &Path, kind: &notify::EventKind) -> Option<WatchEvent> {
    use notify::EventKind;

    match kind {
        EventKind::Create(_) | EventKind::Modify(_) => {
            if let Some(resource) = content_kind(path) {
                return Some(WatchEvent::ContentModified(resource, path.to_path_buf()));
            }

            if matches!(kind, EventKind::Create(_)) {
                Some(WatchEvent::Created(path.to_path_buf()))
            } else {
                Some(WatchEvent::Modified(path.to_path_buf()))
            }
        }
        EventKind::Remove(_) => Some(WatchEvent::Deleted(path.to_path_buf())),
        _ => None,
    }
}

/// Resource kind for a `data/<kind>.json` path.
fn content_kind(path: &Path) -> Option<ResourceKind> {
    let parent = path.parent()?.file_name()?.to_str()?;
    if parent != "data" {
        return None;
    }
    ResourceKind::from_file_name(path.file_name()?.to_str()?)
}

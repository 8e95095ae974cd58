use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::time::{Duration, Instant};

use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;

use zebec::error::{Chainable, Error, Result};
use zebec::{ChangedFile, Configuration, Pipeline};

/// How long the tree must be quiet before a batch is compiled.
const DEBOUNCE: Duration = Duration::from_millis(100);
const POLL: Duration = Duration::from_millis(50);

/// Changes seen since the last batch.
#[derive(Debug, Default)]
struct Pending {
    files: FxHashSet<ChangedFile>,
    last_change: Option<Instant>,
}

impl Pending {
    fn add(&mut self, file: ChangedFile) {
        self.files.insert(file);
        self.last_change = Some(Instant::now());
    }

    fn is_settled(&self) -> bool {
        !self.files.is_empty()
            && self.last_change.map_or(false, |last| last.elapsed() >= DEBOUNCE)
    }

    /// Drains the batch, dropping files that were removed since.
    fn take(&mut self) -> Vec<ChangedFile> {
        self.last_change = None;
        self.files.drain().filter(|file| file.path.is_file()).collect()
    }
}

/// The changed file for `path`, if it's one the pipeline compiles.
fn accept(config: &Configuration, path: &Path) -> Option<ChangedFile> {
    let file = ChangedFile::from_path(path)?;
    (config.watches(&file.extension) && !file.is_artifact()).then_some(file)
}

fn is_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

/// Recompiles changed files until the watcher goes away.
pub fn watch(pipeline: &Pipeline) -> Result<()> {
    let config = pipeline.config();
    let (tx, rx) = mpsc::channel();
    let mut watcher = notify::recommended_watcher(move |event: notify::Result<Event>| match event {
        Ok(event) if is_change(&event.kind) => {
            for path in event.paths {
                let _ = tx.send(path);
            }
        }
        Ok(_) => {}
        Err(e) => log::warn!("watch error: {e}"),
    }).map_err(Error::from_std)?;

    watcher.watch(&config.source, RecursiveMode::Recursive)
        .map_err(Error::from_std)
        .chain_with(|| zebec::error! {
            "failed to watch source directory",
            "source" => config.source.display(),
        })?;

    log::info!("watching {}", config.source.display());
    let mut pending = Pending::default();
    loop {
        match rx.recv_timeout(POLL) {
            Ok(path) => if let Some(file) = accept(config, &path) {
                log::debug!("changed: {}", path.display());
                pending.add(file);
            },
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return Ok(()),
        }

        if pending.is_settled() {
            let files = pending.take();
            if !files.is_empty() {
                crate::report(&pipeline.handle_all(&files));
            }
        }
    }
}

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;

use crate::config::Configuration;
use crate::error::{Chainable, Error, Result};
use crate::io::{self, Sink, Source};
use crate::pipeline::{resolve, ChangedFile, PathPlan, WriteLocks};
use crate::transform::{self, Context};
use crate::util::human_bytes;

/// Turns change events into written artifacts.
///
/// A pipeline holds no per-event state, so one instance may handle events
/// for distinct files concurrently.
#[derive(Debug)]
pub struct Pipeline {
    config: Arc<Configuration>,
    verbose: bool,
    locks: WriteLocks,
}

/// The outcome of a batch of events.
#[derive(Debug, Default)]
pub struct Summary {
    pub written: Vec<PathBuf>,
    /// Events that produced no output.
    pub skipped: usize,
    pub failed: Vec<(PathBuf, Error)>,
}

impl Summary {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

impl Pipeline {
    pub fn new<C: Into<Arc<Configuration>>>(config: C, verbose: bool) -> Self {
        Pipeline { config: config.into(), verbose, locks: WriteLocks::new() }
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn resolve(&self, changed: &ChangedFile) -> Option<PathPlan> {
        resolve(&changed.path, &self.config.source, &self.config.destination)
    }

    /// Transforms `changed` and writes the result, returning its path.
    ///
    /// `Ok(None)` means there was nothing to write: the file is outside the
    /// source tree, unsupported, or failed to transform. Errors are reserved
    /// for failures to read the input or write the output.
    pub fn handle(&self, changed: &ChangedFile) -> Result<Option<PathBuf>> {
        if changed.is_artifact() {
            log::debug!("skipping artifact {}", changed.path.display());
            return Ok(None);
        }

        let Some(plan) = self.resolve(changed) else {
            log::debug!("{} is outside {}", changed.path.display(), self.config.source.display());
            return Ok(None);
        };

        let content = changed.path.as_path().read()?;
        let ctx = Context {
            stem: &plan.stem,
            config: &self.config,
            created: io::created(&changed.path),
            verbose: self.verbose,
        };

        let Some(result) = transform::dispatch(&ctx, &changed.extension, &content) else {
            return Ok(None);
        };

        fs::create_dir_all(&plan.parent).chain_with(|| error! {
            "failed to create output directory",
            "directory" => plan.parent.display(),
        })?;

        let output = plan.parent.join(&result.file_name);
        if self.verbose {
            log::info!("{}", size_report(&plan, content.len(), result.content.len()));
        }

        self.locks.with(&output, || output.as_path().write(&result.content))?;
        Ok(Some(output))
    }

    /// Handles `changed`, passing the outcome to `done`.
    pub fn process<F>(&self, changed: &ChangedFile, done: F)
        where F: FnOnce(Result<Option<PathBuf>>)
    {
        done(self.handle(changed))
    }

    /// Handles every file in `files` in parallel.
    pub fn handle_all(&self, files: &[ChangedFile]) -> Summary {
        let outcomes: Vec<_> = files.par_iter()
            .map(|file| (file, self.handle(file)))
            .collect();

        let mut summary = Summary::default();
        for (file, outcome) in outcomes {
            match outcome {
                Ok(Some(path)) => summary.written.push(path),
                Ok(None) => summary.skipped += 1,
                Err(e) => summary.failed.push((file.path.clone(), e)),
            }
        }

        summary
    }

    /// Every file under the source root with a configured extension.
    pub fn sources(&self) -> Result<Vec<ChangedFile>> {
        let root = &self.config.source;
        if !root.is_dir() {
            return err! {
                "source is not a directory",
                "source" => root.display(),
            };
        }

        let files = jwalk::WalkDir::new(root)
            .follow_links(true)
            .sort(true)
            .into_iter()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| ChangedFile::from_path(entry.path()))
            .filter(|file| self.config.watches(&file.extension))
            .collect();

        Ok(files)
    }

    /// Handles every file [`Pipeline::sources()`] finds.
    pub fn build_all(&self) -> Result<Summary> {
        Ok(self.handle_all(&self.sources()?))
    }
}

/// `Compiled post.ktml, 1.2 KiB → 800 B`.
fn size_report(plan: &PathPlan, original: usize, transformed: usize) -> String {
    let name = plan.destination.file_name().unwrap_or_default().to_string_lossy();
    format!("Compiled {name}, {} → {}", human_bytes(original), human_bytes(transformed))
}

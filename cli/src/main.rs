use std::path::PathBuf;
use std::process::ExitCode;

use zebec::error::{Chainable, Result};
use zebec::config::CONFIG_FILE;
use zebec::{Ingest, Pipeline, Summary};

mod watch;

mod flags {
    use std::path::PathBuf;

    xflags::xflags! {
        /// Compiles a site's sources into its destination tree.
        cmd zebec {
            /// Configuration file, `zebec.toml` in the working directory if unset.
            optional -c, --config config: PathBuf
            /// Report every compiled file and every skipped one.
            optional -v, --verbose

            /// Compile every source file once.
            cmd build {}

            /// Compile every source file, then recompile files as they change.
            default cmd watch {}
        }
    }
}

fn main() -> ExitCode {
    let flags = flags::Zebec::from_env_or_exit();
    let level = if flags.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(flags) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Returns whether every file compiled.
fn run(flags: flags::Zebec) -> Result<bool> {
    let path = flags.config.unwrap_or_else(|| PathBuf::from(CONFIG_FILE));
    let path = std::fs::canonicalize(&path).chain_with(|| zebec::error! {
        "failed to locate configuration",
        "file path" => path.display(),
    })?;

    let pipeline = Pipeline::new(Ingest::read(&path)?, flags.verbose);
    let summary = pipeline.build_all()?;
    report(&summary);

    match flags.subcommand {
        flags::ZebecCmd::Build(_) => Ok(summary.is_success()),
        flags::ZebecCmd::Watch(_) => watch::watch(&pipeline).map(|_| true),
    }
}

pub fn report(summary: &Summary) {
    for (path, error) in &summary.failed {
        log::error!("{}\n{error}", path.display());
    }

    println!("{} written, {} skipped, {} failed",
        summary.written.len(), summary.skipped, summary.failed.len());
}

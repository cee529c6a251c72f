//! Logging setup for ascult.
//!
//! Events go to `ascult.log` under the XDG state dir. The CLI falls back to
//! [`init_logging_stderr`] when that file cannot be opened.

use anyhow::{Context, Result};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,ascult=debug,ascult_core=debug";

/// Path of the log file: `~/.local/state/ascult/ascult.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ascult")?;
    Ok(xdg_dirs.get_state_home().join("ascult").join("ascult.log"))
}

/// Per-event handle onto the shared log file.
///
/// If the descriptor can't be duplicated for an event, that event is written
/// to stderr rather than lost.
enum EventSink {
    Log(File),
    Stderr,
}

impl Write for EventSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            EventSink::Log(f) => f.write(buf),
            EventSink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            EventSink::Log(f) => f.flush(),
            EventSink::Stderr => io::stderr().lock().flush(),
        }
    }
}

struct LogFile(File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EventSink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EventSink::Log(f),
            Err(_) => EventSink::Stderr,
        }
    }
}

/// Install the global subscriber writing to [`log_path`].
///
/// Errors if the state dir or file can't be created, or a subscriber is
/// already installed.
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating log dir {}", dir.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(LogFile(file)))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("installing log subscriber: {e}"))?;

    tracing::info!(path = %path.display(), "ascult logging initialized");
    Ok(())
}

/// Stderr-only logging. Never fails; a second install is ignored.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

/// `RUST_LOG` if set and valid, otherwise [`DEFAULT_FILTER`].
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_lives_under_ascult_state_dir() {
        let path = log_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "ascult.log");
        assert_eq!(path.parent().unwrap().file_name().unwrap(), "ascult");
    }

    #[test]
    fn default_filter_parses() {
        EnvFilter::try_new(DEFAULT_FILTER).unwrap();
    }

    #[test]
    fn event_sink_writes_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ascult.log");
        let make = LogFile(File::create(&path).unwrap());
        let mut w = make.make_writer();
        w.write_all(b"hello\n").unwrap();
        w.flush().unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello\n");
    }
}

//! Tracing initialization for `pw-io`.
//!
//! Behavior:
//! - Verbosity comes from `LogLevel` (no RUST_LOG override).
//! - Console events go to stderr so stdout stays clean for command output.
//! - JSON or compact formatting is selected by the `json` flag.
//! - If `log_file` opens, a non-blocking file layer is added; keep the returned
//!   guard alive until exit so buffered lines are flushed.

use anyhow::Result;
use chrono::Local;
use std::fmt as stdfmt;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{Layer, Registry};
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

use pw_io::LogLevel;
use pw_io::output as out;
use pw_io::platform::open_log_file_secure_append;

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Human-friendly timestamp formatter (DD/MM/YY HH:MM:SS)
struct LocalHumanTime;
impl FormatTime for LocalHumanTime {
    fn format_time(&self, w: &mut tsfmt::format::Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%d/%m/%y %H:%M:%S"))
    }
}

fn fmt_layer<W>(writer: W, json: bool, ansi: bool) -> BoxedLayer
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let base = tsfmt::layer()
        .with_timer(LocalHumanTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(ansi)
        .with_writer(writer);
    if json { base.json().boxed() } else { base.compact().boxed() }
}

/// Initialize tracing. Returns the file writer guard when file logging is active.
pub fn init_tracing(level: LogLevel, log_file: Option<&Path>, json: bool) -> Result<Option<WorkerGuard>> {
    let mut layers: Vec<BoxedLayer> = vec![fmt_layer(std::io::stderr, json, atty::is(atty::Stream::Stderr))];
    let mut guard = None;

    if let Some(path) = log_file {
        match open_log_file_secure_append(path) {
            Ok(file) => {
                let (writer, g) = tracing_appender::non_blocking(file);
                layers.push(fmt_layer(writer, json, false));
                guard = Some(g);
            }
            Err(e) => {
                out::print_warn(&format!(
                    "File logging to '{}' was not enabled ({e}). Logs will continue to stderr.",
                    path.display()
                ));
            }
        }
    }

    registry()
        .with(layers)
        .with(EnvFilter::new(level.filter_directive()))
        .try_init()?;
    Ok(guard)
}

//! Logging setup.
//!
//! Installs a `tracing-subscriber` fmt subscriber whose output lands in the
//! browser console. Each formatted event is buffered and emitted on drop, at
//! the console method matching its level (`error`, `warn`, or `log`).
//! Off wasm32 the same lines go to stderr.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;

/// Install the global subscriber at `level` (trace, debug, info, warn,
/// error, off). Unparseable levels fall back to `info`.
///
/// Returns `false` if a subscriber was already installed; the existing one
/// is left in place.
pub fn init(level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(parse_level(level))
        .with_ansi(false)
        .without_time()
        .try_init()
        .is_ok()
}

fn parse_level(level: &str) -> LevelFilter {
    level.trim().parse().unwrap_or(LevelFilter::INFO)
}

/// [`MakeWriter`] producing one [`ConsoleWriter`] per event.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Buffers one formatted event and flushes it to the console on drop.
#[derive(Debug)]
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }

    /// Buffered text without the trailing newline, or `None` if empty.
    fn take_line(&mut self) -> Option<String> {
        let text = String::from_utf8_lossy(&self.buf).trim_end().to_string();
        self.buf.clear();
        (!text.is_empty()).then_some(text)
    }
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if let Some(line) = self.take_line() {
            emit(self.level, &line);
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let line = wasm_bindgen::JsValue::from_str(line);
    if level == Level::ERROR {
        web_sys::console::error_1(&line);
    } else if level == Level::WARN {
        web_sys::console::warn_1(&line);
    } else {
        web_sys::console::log_1(&line);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

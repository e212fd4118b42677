//! Forward `tracing` output to the browser console

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;
use web_sys::console;

/// Buffers one formatted event and emits it on drop
pub struct ConsoleWriter {
    buffer: Vec<u8>,
    level: Level,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buffer);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }

        let message = JsValue::from_str(line);
        match self.level {
            Level::ERROR => console::error_1(&message),
            Level::WARN => console::warn_1(&message),
            Level::INFO => console::info_1(&message),
            _ => console::debug_1(&message),
        }
    }
}

pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            buffer: Vec::new(),
            level: Level::INFO,
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            buffer: Vec::new(),
            level: *meta.level(),
        }
    }
}

/// Install the console subscriber; later calls are no-ops
pub fn init_logging() {
    // Browsers have no wall clock suitable for the fmt timer
    let _ = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter)
        .with_max_level(Level::DEBUG)
        .with_target(false)
        .without_time()
        .try_init();
}

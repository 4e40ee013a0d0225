use std::io;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing_subscriber::fmt::MakeWriter;

/// The on-screen log panel's contents.
///
/// Lines are only ever appended; the newest line is last. Clones share the
/// same buffer, so the front end keeps one clone for rendering while the
/// logging stack holds another as a sink.
#[derive(Debug, Clone, Default)]
pub struct DisplayLog {
    lines: Arc<Mutex<Vec<String>>>,
}

impl DisplayLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every line, oldest first.
    pub fn lines(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn append(&self, text: &str) {
        self.lock().extend(text.lines().map(str::to_owned));
    }

    // The buffer is append-only, so a panic mid-push cannot leave it inconsistent.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.lines.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Collects one formatted event and appends it to the panel when dropped.
pub struct DisplayWriter {
    log: DisplayLog,
    buffer: Vec<u8>,
}

impl io::Write for DisplayWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for DisplayWriter {
    fn drop(&mut self) {
        if !self.buffer.is_empty() {
            self.log.append(&String::from_utf8_lossy(&self.buffer));
        }
    }
}

impl<'a> MakeWriter<'a> for DisplayLog {
    type Writer = DisplayWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DisplayWriter { log: self.clone(), buffer: Vec::new() }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn writer_appends_on_drop() {
        let log = DisplayLog::new();
        {
            let mut writer = log.make_writer();
            writer.write_all(b"first part, ").unwrap();
            writer.write_all(b"same line\n").unwrap();
            assert!(log.is_empty());
        }
        assert_eq!(log.lines(), vec!["first part, same line".to_string()]);
    }

    #[test]
    fn clones_share_the_buffer() {
        let log = DisplayLog::new();
        let sink = log.clone();
        sink.make_writer().write_all(b"one\ntwo\n").unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.last().as_deref(), Some("two"));
    }
}

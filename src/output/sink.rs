//! Cloneable handle over a byte destination. Every clone shares one writer behind a
//! mutex, so a line handed to [`Sink::write_counted`] reaches the destination in one piece.

use parking_lot::Mutex;
use std::fmt;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// What a sink writes to; kept for diagnostics and config round-trips.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    Stderr,
    Stdout,
    File(PathBuf),
    Writer,
}

/// Clones share the destination, so a logger and a test can hold the same sink.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
    kind: SinkKind,
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").field("kind", &self.kind).finish()
    }
}

impl Sink {
    #[must_use]
    pub fn stderr() -> Self {
        Self::with_kind(Box::new(io::stderr()), SinkKind::Stderr)
    }

    #[must_use]
    pub fn stdout() -> Self {
        Self::with_kind(Box::new(io::stdout()), SinkKind::Stdout)
    }

    /// Appends to `path`, creating the file and its parent directories as needed.
    ///
    /// # Errors
    /// Fails if the directory can't be created or the file can't be opened.
    pub fn file(path: impl AsRef<Path>) -> crate::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self::with_kind(
            Box::new(file),
            SinkKind::File(path.to_path_buf()),
        ))
    }

    /// Any other writer: sockets, pipes, test doubles.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self::with_kind(Box::new(writer), SinkKind::Writer)
    }

    /// In-memory sink plus a handle for reading back what was written.
    #[must_use]
    pub fn buffer() -> (Self, Buffer) {
        let buffer = Buffer::default();
        (Self::writer(buffer.clone()), buffer)
    }

    fn with_kind(writer: Box<dyn Write + Send>, kind: SinkKind) -> Self {
        Self {
            writer: Arc::new(Mutex::new(writer)),
            kind,
        }
    }

    #[must_use]
    pub const fn kind(&self) -> &SinkKind {
        &self.kind
    }

    /// Whether both handles share one destination.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.writer, &other.writer)
    }

    /// Writes all of `bytes` and reports how many that was.
    ///
    /// # Errors
    /// I/O errors from the destination; nothing is retried.
    pub fn write_counted(&self, bytes: &[u8]) -> io::Result<usize> {
        self.writer.lock().write_all(bytes)?;
        Ok(bytes.len())
    }

    /// # Errors
    /// I/O errors from the destination.
    pub fn flush(&self) -> io::Result<()> {
        self.writer.lock().flush()
    }
}

/// Shared growable byte buffer; clones see the same bytes.
#[derive(Debug, Clone, Default)]
pub struct Buffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl Buffer {
    /// Everything written so far, lossily decoded.
    #[must_use]
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock()).into_owned()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(ToString::to_string).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.lock().is_empty()
    }

    pub fn clear(&self) {
        self.bytes.lock().clear();
    }
}

impl Write for Buffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

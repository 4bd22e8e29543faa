use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock, RwLock};

/// Stderr sink with an optional log file copy.
#[derive(Clone)]
struct SharedWriter {
    file: Arc<RwLock<Option<std::fs::File>>>,
}

struct TeeWriter<E: Write> {
    stderr: E,
    file: Arc<RwLock<Option<std::fs::File>>>,
}

impl SharedWriter {
    fn new() -> Self {
        Self {
            file: Arc::new(RwLock::new(None)),
        }
    }

    fn set_file(&self, log_file: Option<&Path>) {
        let file = log_file.and_then(|path| {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                let _ = std::fs::create_dir_all(parent);
            }
            OpenOptions::new().create(true).append(true).open(path).ok()
        });
        if let Ok(mut guard) = self.file.write() {
            *guard = file;
        }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedWriter {
    type Writer = TeeWriter<io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        TeeWriter {
            stderr: io::stderr(),
            file: self.file.clone(),
        }
    }
}

impl<E: Write> Write for TeeWriter<E> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.stderr.write(buf)?;
        if let Ok(mut guard) = self.file.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.write_all(&buf[..written]);
            }
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stderr.flush()?;
        if let Ok(mut guard) = self.file.write() {
            if let Some(file) = guard.as_mut() {
                let _ = file.flush();
            }
        }
        Ok(())
    }
}

static WRITER: OnceLock<SharedWriter> = OnceLock::new();

/// Bridge `log` records into a `tracing` fmt subscriber filtered by `RUST_LOG`.
pub fn init(log_file: Option<&Path>) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let writer = WRITER.get_or_init(SharedWriter::new).clone();
    writer.set_file(log_file);

    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(writer)
        .try_init();
}

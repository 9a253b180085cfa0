use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing_subscriber::EnvFilter;

/// Log sink that always writes to stderr and mirrors into an optional file.
#[derive(Clone)]
struct SharedWriter {
    inner: Arc<RwLock<Option<std::fs::File>>>,
}

struct MultiWriter {
    inner: Arc<RwLock<Option<std::fs::File>>>,
}

impl SharedWriter {
    fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(None)),
        }
    }

    fn set_file(&self, log_file: Option<&Path>) -> io::Result<()> {
        let file = match log_file {
            Some(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent)?;
                }
                Some(OpenOptions::new().create(true).append(true).open(path)?)
            }
            None => None,
        };
        *self.inner.write().unwrap_or_else(PoisonError::into_inner) = file;
        Ok(())
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SharedWriter {
    type Writer = MultiWriter;

    fn make_writer(&'a self) -> Self::Writer {
        MultiWriter {
            inner: self.inner.clone(),
        }
    }
}

impl Write for MultiWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = io::stderr().write(buf)?;
        if let Some(file) = &mut *self.inner.write().unwrap_or_else(PoisonError::into_inner) {
            let _ = file.write_all(&buf[..written]);
        }
        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        if let Some(file) = &mut *self.inner.write().unwrap_or_else(PoisonError::into_inner) {
            let _ = file.flush();
        }
        Ok(())
    }
}

static WRITER: OnceLock<SharedWriter> = OnceLock::new();

/// Installs the global subscriber. `RUST_LOG` wins over `level` when set.
pub fn init(level: &str, json: bool, log_file: Option<&Path>) {
    let _ = tracing_log::LogTracer::init();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = WRITER.get_or_init(SharedWriter::new).clone();
    if let Err(e) = writer.set_file(log_file) {
        eprintln!("failed to open log file: {}", e);
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_ansi(log_file.is_none())
        .with_writer(writer);

    let _ = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}

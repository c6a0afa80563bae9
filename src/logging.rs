//! 日志：显式构造的 tracing 分发器，由调用方注入客户端，库本身不安装全局日志。
//!
//! Explicitly constructed logging dependency.
//!
//! A [`Logger`] owns a `tracing` [`Dispatch`]. The client runs every call under
//! its logger's dispatcher, so two clients with different loggers never share
//! output and the library never touches the process-wide default.
//!
//! | Constructor | Output |
//! |-------------|--------|
//! | [`Logger::new`] | stdout, level from argument (overridable by `RUST_LOG`) |
//! | [`Logger::with_writer`] | any `MakeWriter`, fixed level |
//! | [`Logger::capture`] | in-memory [`LogBuffer`] for tests |
//! | [`Logger::current`] | whatever dispatcher is ambient at construction time |
//! | [`Logger::silent`] | discards everything |

use crate::{Error, Result};
use std::future::Future;
use std::io;
use std::sync::{Arc, Mutex};
use tracing::instrument::{WithDispatch, WithSubscriber};
use tracing::{Dispatch, Level};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

#[derive(Clone)]
pub struct Logger {
    dispatch: Dispatch,
}

impl Logger {
    /// Console logger at `level`; a `RUST_LOG` directive takes precedence when set.
    pub fn new(level: Level) -> Self {
        let filter = EnvFilter::builder()
            .with_default_directive(LevelFilter::from_level(level).into())
            .from_env_lossy();
        let subscriber = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    pub fn with_writer<W>(level: Level, make_writer: W) -> Self
    where
        W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
    {
        let subscriber = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_ansi(false)
            .with_target(true)
            .with_writer(make_writer)
            .finish();
        Self {
            dispatch: Dispatch::new(subscriber),
        }
    }

    /// Logger writing into a shared in-memory buffer.
    pub fn capture(level: Level) -> (Self, LogBuffer) {
        let buffer = LogBuffer::default();
        let writer = buffer.clone();
        (Self::with_writer(level, move || writer.clone()), buffer)
    }

    /// Reuse the dispatcher that is current where this is called.
    pub fn current() -> Self {
        Self {
            dispatch: tracing::dispatcher::get_default(|d| d.clone()),
        }
    }

    pub fn silent() -> Self {
        Self {
            dispatch: Dispatch::none(),
        }
    }

    pub fn dispatch(&self) -> &Dispatch {
        &self.dispatch
    }

    /// Make this logger the process-wide default. Intended for binaries only.
    pub fn install_global(&self) -> Result<()> {
        tracing::dispatcher::set_global_default(self.dispatch.clone())
            .map_err(|e| Error::configuration(format!("failed to install global logger: {}", e)))
    }

    pub(crate) fn attach<F: Future>(&self, fut: F) -> WithDispatch<F> {
        fut.with_subscriber(self.dispatch.clone())
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::current()
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger").finish_non_exhaustive()
    }
}

/// Shared byte buffer that log lines are written into.
#[derive(Clone, Default)]
pub struct LogBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.bytes.lock().unwrap_or_else(|e| e.into_inner());
        String::from_utf8_lossy(&bytes).into_owned()
    }

    pub fn clear(&self) {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner()).clear();
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.lock().unwrap_or_else(|e| e.into_inner()).is_empty()
    }
}

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_respects_level() {
        let (logger, buffer) = Logger::capture(Level::WARN);
        tracing::dispatcher::with_default(logger.dispatch(), || {
            tracing::info!("hidden message");
            tracing::warn!("visible message");
        });
        let out = buffer.contents();
        assert!(out.contains("visible message"));
        assert!(!out.contains("hidden message"));
    }

    #[test]
    fn test_loggers_are_isolated() {
        let (first, first_buf) = Logger::capture(Level::INFO);
        let (_second, second_buf) = Logger::capture(Level::INFO);
        tracing::dispatcher::with_default(first.dispatch(), || {
            tracing::info!("only for first");
        });
        assert!(first_buf.contents().contains("only for first"));
        assert!(second_buf.is_empty());
    }

    #[test]
    fn test_attach_scopes_future() {
        let (logger, buffer) = Logger::capture(Level::DEBUG);
        tokio_test::block_on(logger.attach(async {
            tracing::debug!("inside attached future");
        }));
        assert!(buffer.contents().contains("inside attached future"));

        buffer.clear();
        tracing::debug!("outside attached future");
        assert!(buffer.is_empty());
    }

    #[test]
    fn test_silent_logger_drops_events() {
        let logger = Logger::silent();
        tracing::dispatcher::with_default(logger.dispatch(), || {
            tracing::error!("nobody hears this");
        });
    }
}

mod wiring;

use std::{future::Future, time::Duration};

use anyhow::{Context as AnyhowContext, Result};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::{context, rest, storage::MemoryStore, storage::SightingStore};

/// How long in-flight requests get to drain once shutdown starts.
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(5);

/// Wires the store into the HTTP API and owns the process lifecycle.
pub struct App<S = MemoryStore> {
    ctx: context::Context,
    store: S,
    shutdown: CancellationToken,
    shutdown_timeout: Duration,
}

impl App {
    pub fn from_cli() -> Self {
        let cli = crate::cli::parse();
        let ctx = context::Context::from_cli(&cli);

        crate::tracing::init(&ctx.log_level, ctx.log_json, ctx.log_file.as_deref());
        wiring::log_startup_info(&ctx);

        let store = wiring::init_store(&ctx);
        App::new(ctx, store)
    }
}

impl<S: SightingStore + Clone + Send + Sync + 'static> App<S> {
    /// The store is injected here, so tests can hand in their own.
    pub fn new(ctx: context::Context, store: S) -> Self {
        Self {
            ctx,
            store,
            shutdown: CancellationToken::new(),
            shutdown_timeout: SHUTDOWN_TIMEOUT,
        }
    }

    pub fn with_shutdown_timeout(mut self, timeout: Duration) -> Self {
        self.shutdown_timeout = timeout;
        self
    }

    pub async fn run_daemon(&self) -> Result<()> {
        let rest_handle = self.spawn_rest_server();
        self.wait_for_shutdown(rest_handle, shutdown_signal()).await
    }

    fn spawn_rest_server(&self) -> JoinHandle<Result<()>> {
        let addr = self.ctx.listen;
        let store = self.store.clone();
        let token = self.shutdown.clone();

        tokio::spawn(async move { rest::serve(addr, store, token).await })
    }

    async fn wait_for_shutdown(
        &self,
        mut rest_task: JoinHandle<Result<()>>,
        signal: impl Future<Output = ()>,
    ) -> Result<()> {
        let finished = tokio::select! {
            _ = signal => {
                log::info!("🧨 Shutdown signal received, shutting down");
                None
            }
            res = &mut rest_task => {
                log::error!("HTTP task exited unexpectedly");
                Some(res)
            }
        };

        // Broadcast shutdown signal
        self.shutdown.cancel();

        let res = match finished {
            Some(res) => res,
            None => match tokio::time::timeout(self.shutdown_timeout, &mut rest_task).await {
                Ok(res) => res,
                Err(_) => {
                    log::warn!(
                        "⏱️ HTTP server did not stop within {:?}, aborting",
                        self.shutdown_timeout
                    );
                    rest_task.abort();
                    return Ok(());
                }
            },
        };
        res.context("HTTP task panicked")?
            .context("HTTP server failed")?;

        log::info!("✅ Shutdown complete");
        Ok(())
    }
}

/// Resolves on Ctrl-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                log::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

pub async fn run() -> Result<()> {
    let app = App::from_cli();
    app.run_daemon().await
}

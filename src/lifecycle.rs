//! Process lifecycle: load, bind, serve, open the desktop, shut down.
//!
//! ```text
//! Starting ──bind ok──▶ Serving ──signal / server exit──▶ ShuttingDown ──drained or grace over──▶ Stopped
//! ```
//!
//! The accept loop runs on its own task. It publishes a ready notification
//! once it is accepting, and only then are the browser and window steps run,
//! in that order, off the async runtime threads.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::launch::Desktop;
use crate::port;
use crate::scenario::{documents_from_dir, embedded_documents, ScenarioStore};
use crate::server::{self, AppState, Page};

/// Where the process is in its run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    Starting,
    Serving,
    ShuttingDown,
    Stopped,
}

/// Why the serving phase ended.
#[derive(Debug)]
pub enum StopReason {
    /// Interrupt or terminate signal (or the caller's own stop future).
    Signal,
    /// The server task ended on its own, which only happens on failure.
    ServerExited(Option<String>),
}

/// How the shutdown went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// All connections finished within the grace period.
    Graceful,
    /// The grace period ran out; remaining connections were abandoned.
    TimedOut,
    /// The server task had already ended.
    AlreadyStopped,
}

/// A running HTTP server on its own task.
pub struct ServerHandle {
    local_addr: SocketAddr,
    state: LifecycleState,
    shutdown_tx: Option<oneshot::Sender<()>>,
    ready_rx: Option<oneshot::Receiver<()>>,
    task: JoinHandle<std::io::Result<()>>,
    finished: bool,
}

impl ServerHandle {
    /// Bind `addr` and start serving `app` in the background.
    ///
    /// The bind is the authoritative availability check: if it fails, the
    /// error is returned and nothing is spawned.
    pub async fn bind(addr: SocketAddr, app: Router) -> std::io::Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Self::spawn(listener, app)
    }

    /// Start serving `app` on an already bound listener.
    pub fn spawn(listener: TcpListener, app: Router) -> std::io::Result<Self> {
        let local_addr = listener.local_addr()?;
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
        let (ready_tx, ready_rx) = oneshot::channel::<()>();

        let serve = axum::serve(listener, app).with_graceful_shutdown(async move {
            let _ = shutdown_rx.await;
        });
        let task = tokio::spawn(async move {
            let _ = ready_tx.send(());
            serve.await
        });

        debug!(%local_addr, "server task spawned");
        Ok(Self {
            local_addr,
            state: LifecycleState::Serving,
            shutdown_tx: Some(shutdown_tx),
            ready_rx: Some(ready_rx),
            task,
            finished: false,
        })
    }

    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    /// URL a local browser should use to reach the server.
    pub fn url(&self) -> String {
        server_url(self.local_addr)
    }

    /// Resolves once the accept loop is running; errors if it never starts.
    ///
    /// Can be taken only once.
    pub fn take_ready(&mut self) -> Option<oneshot::Receiver<()>> {
        self.ready_rx.take()
    }

    /// Serve until `stop` resolves or the server task ends by itself.
    pub async fn run_until<F>(&mut self, stop: F) -> StopReason
    where
        F: Future<Output = ()>,
    {
        let reason = tokio::select! {
            _ = stop => StopReason::Signal,
            result = &mut self.task => {
                self.finished = true;
                StopReason::ServerExited(match result {
                    Ok(Ok(())) => None,
                    Ok(Err(e)) => Some(e.to_string()),
                    Err(e) => Some(e.to_string()),
                })
            }
        };
        self.transition(LifecycleState::ShuttingDown);
        reason
    }

    /// Stop accepting and give in-flight requests at most `grace` to finish.
    pub async fn shutdown(mut self, grace: Duration) -> ShutdownOutcome {
        self.transition(LifecycleState::ShuttingDown);
        if self.finished {
            self.transition(LifecycleState::Stopped);
            return ShutdownOutcome::AlreadyStopped;
        }

        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }

        let outcome = match tokio::time::timeout(grace, &mut self.task).await {
            Ok(Ok(Ok(()))) => ShutdownOutcome::Graceful,
            Ok(Ok(Err(e))) => {
                error!(error = %e, "server stopped with error");
                ShutdownOutcome::Graceful
            }
            Ok(Err(e)) => {
                error!(error = %e, "server task failed");
                ShutdownOutcome::Graceful
            }
            Err(_) => {
                warn!(
                    grace_ms = grace.as_millis() as u64,
                    "grace period elapsed; abandoning open connections"
                );
                self.task.abort();
                ShutdownOutcome::TimedOut
            }
        };
        self.transition(LifecycleState::Stopped);
        outcome
    }

    fn transition(&mut self, next: LifecycleState) {
        if self.state != next {
            debug!(from = ?self.state, to = ?next, "lifecycle transition");
            self.state = next;
        }
    }
}

/// `http://localhost:<port>` for loopback and wildcard binds, the bound address otherwise.
pub fn server_url(addr: SocketAddr) -> String {
    let ip = addr.ip();
    if ip.is_loopback() || ip.is_unspecified() {
        format!("http://localhost:{}", addr.port())
    } else {
        format!("http://{}", addr)
    }
}

/// Build the scenario store from the configured source.
///
/// An unreadable scenario directory leaves the corpus empty; it is not fatal.
pub fn load_store(config: &Config) -> ScenarioStore {
    let documents = match &config.scenarios_dir {
        Some(dir) => match documents_from_dir(dir) {
            Ok(documents) => documents,
            Err(e) => {
                error!(error = %e, "failed to read scenario directory");
                Vec::new()
            }
        },
        None => embedded_documents(),
    };
    let (store, _report) = ScenarioStore::load(documents);
    store
}

/// Browser and window steps to run once the server is ready.
#[derive(Debug, Clone, Copy)]
pub struct DesktopSteps {
    pub open_browser: bool,
    pub minimize_window: bool,
    pub minimize_delay: Duration,
}

impl From<&Config> for DesktopSteps {
    fn from(config: &Config) -> Self {
        Self {
            open_browser: config.open_browser,
            minimize_window: config.minimize_window,
            minimize_delay: config.minimize_delay,
        }
    }
}

/// Wait for `ready`, open the browser at `url`, then minimize the console.
///
/// Everything here is best-effort. If the server never becomes ready
/// nothing is attempted.
pub async fn run_desktop_steps(
    desktop: Arc<Desktop>,
    ready: oneshot::Receiver<()>,
    url: String,
    steps: DesktopSteps,
) {
    if ready.await.is_err() {
        debug!("server never became ready; skipping browser and window steps");
        return;
    }

    if steps.open_browser {
        let desktop = Arc::clone(&desktop);
        let url = url.clone();
        if let Err(e) = tokio::task::spawn_blocking(move || open_browser(&desktop, &url)).await {
            debug!(error = %e, "browser step did not complete");
        }
    }

    if steps.minimize_window {
        tokio::time::sleep(steps.minimize_delay).await;
        if let Err(e) = tokio::task::spawn_blocking(move || minimize_window(&desktop)).await {
            debug!(error = %e, "minimize step did not complete");
        }
    }
}

fn open_browser(desktop: &Desktop, url: &str) {
    match desktop.open_url(url) {
        Ok(method) => info!(%method, url, "opened browser"),
        Err(e) => {
            error!(error = %e, url, "failed to open browser");
            println!("Open {} in your browser manually", url);
        }
    }
}

fn minimize_window(desktop: &Desktop) {
    match desktop.minimize() {
        Ok(method) => debug!(%method, "minimized console window"),
        Err(e) => debug!(error = %e, "failed to minimize console window"),
    }
}

/// Resolves on Ctrl+C, or SIGINT/SIGTERM on Unix.
///
/// The Unix handlers are installed when this is called, not when the future
/// is first polled, so a signal arriving in between is not lost.
#[cfg(unix)]
pub fn shutdown_signal() -> impl Future<Output = ()> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &'static str| match signal(kind) {
        Ok(stream) => Some(stream),
        Err(e) => {
            warn!(error = %e, signal = name, "failed to install signal handler");
            None
        }
    };
    let interrupt = listen(SignalKind::interrupt(), "SIGINT");
    let terminate = listen(SignalKind::terminate(), "SIGTERM");

    async move {
        let wait = |stream: Option<tokio::signal::unix::Signal>| async move {
            match stream {
                Some(mut stream) => {
                    stream.recv().await;
                }
                None => std::future::pending::<()>().await,
            }
        };
        tokio::select! {
            _ = wait(interrupt) => {},
            _ = wait(terminate) => {},
        }
    }
}

/// Resolves on Ctrl+C, or SIGINT/SIGTERM on Unix.
#[cfg(not(unix))]
pub fn shutdown_signal() -> impl Future<Output = ()> {
    async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    }
}

fn print_banner(scenarios: usize, port: u16, url: &str, open_browser: bool) {
    println!("Starting hackterm...");
    println!("{} scenarios ready", scenarios);
    println!("Serving on port {} at {}", port, url);
    if open_browser {
        println!("Opening your browser...");
    }
    println!("Press Ctrl+C to quit");
    println!();
}

/// Run the whole application until a termination signal.
///
/// Returns an error if the listener cannot be bound or the server fails
/// while serving; a signal-triggered shutdown is a success.
pub async fn run(config: Config) -> Result<()> {
    debug!(state = ?LifecycleState::Starting, "lifecycle transition");

    let store = load_store(&config);
    let scenario_count = store.len();
    let page = match &config.page_path {
        Some(path) => Page::File(path.clone()),
        None => Page::embedded(),
    };
    let app = server::router(AppState::new(store, page), config.request_timeout);

    let port = port::find_available_in(config.host, config.preferred_port, config.port_window);
    let addr = SocketAddr::new(config.host, port);
    let mut server = ServerHandle::bind(addr, app)
        .await
        .with_context(|| format!("failed to start server on {}", addr))?;

    let url = server.url();
    let stop = shutdown_signal();
    info!(address = %server.local_addr(), "server started");
    print_banner(scenario_count, server.local_addr().port(), &url, config.open_browser);

    let desktop_task = server.take_ready().map(|ready| {
        tokio::spawn(run_desktop_steps(
            Arc::new(Desktop::new()),
            ready,
            url.clone(),
            DesktopSteps::from(&config),
        ))
    });

    let reason = server.run_until(stop).await;
    let failure = match reason {
        StopReason::Signal => {
            info!("shutdown signal received, stopping server");
            None
        }
        StopReason::ServerExited(error) => {
            let message = error.unwrap_or_else(|| "server exited unexpectedly".to_string());
            error!(error = %message, "server stopped, shutting down");
            Some(message)
        }
    };

    if let Some(task) = desktop_task {
        task.abort();
    }

    match server.shutdown(config.shutdown_grace).await {
        ShutdownOutcome::Graceful | ShutdownOutcome::AlreadyStopped => {
            info!("server shut down cleanly")
        }
        ShutdownOutcome::TimedOut => warn!("server shut down with requests still in flight"),
    }

    if let Some(message) = failure {
        bail!("server failed: {}", message);
    }
    Ok(())
}

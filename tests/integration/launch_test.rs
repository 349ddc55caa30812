//! Integration tests for the browser and window steps

use std::sync::{Arc, Mutex};
use std::time::Duration;

use hackterm::launch::{Desktop, DesktopTool, LaunchMethod, ToolError};
use hackterm::lifecycle::{run_desktop_steps, DesktopSteps};
use tokio::sync::oneshot;

type CallLog = Arc<Mutex<Vec<String>>>;

/// Tool that records calls and succeeds.
struct RecordingTool {
    method: LaunchMethod,
    opens: bool,
    calls: CallLog,
}

impl DesktopTool for RecordingTool {
    fn method(&self) -> LaunchMethod {
        self.method
    }

    fn is_available(&self) -> bool {
        true
    }

    fn can_open_urls(&self) -> bool {
        self.opens
    }

    fn can_minimize(&self) -> bool {
        !self.opens
    }

    fn try_open_url(&self, url: &str) -> Result<(), ToolError> {
        self.calls.lock().unwrap().push(format!("open {}", url));
        Ok(())
    }

    fn try_minimize(&self) -> Result<(), ToolError> {
        self.calls.lock().unwrap().push("minimize".to_string());
        Ok(())
    }
}

fn recording_desktop(calls: &CallLog) -> Arc<Desktop> {
    Arc::new(Desktop::with_tools(vec![
        Box::new(RecordingTool {
            method: LaunchMethod::Wmctrl,
            opens: false,
            calls: Arc::clone(calls),
        }),
        Box::new(RecordingTool {
            method: LaunchMethod::XdgOpen,
            opens: true,
            calls: Arc::clone(calls),
        }),
    ]))
}

fn all_steps() -> DesktopSteps {
    DesktopSteps {
        open_browser: true,
        minimize_window: true,
        minimize_delay: Duration::from_millis(10),
    }
}

#[tokio::test]
async fn browser_opens_before_window_is_minimized() {
    let calls = CallLog::default();
    let (ready_tx, ready_rx) = oneshot::channel();
    ready_tx.send(()).unwrap();

    run_desktop_steps(
        recording_desktop(&calls),
        ready_rx,
        "http://localhost:8080".to_string(),
        all_steps(),
    )
    .await;

    assert_eq!(
        *calls.lock().unwrap(),
        vec!["open http://localhost:8080", "minimize"]
    );
}

#[tokio::test]
async fn nothing_happens_until_ready() {
    let calls = CallLog::default();
    let (ready_tx, ready_rx) = oneshot::channel::<()>();

    let task = tokio::spawn(run_desktop_steps(
        recording_desktop(&calls),
        ready_rx,
        "http://localhost:8080".to_string(),
        all_steps(),
    ));

    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(calls.lock().unwrap().is_empty());

    ready_tx.send(()).unwrap();
    task.await.unwrap();
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn server_that_never_starts_skips_desktop_steps() {
    let calls = CallLog::default();
    let (ready_tx, ready_rx) = oneshot::channel::<()>();
    drop(ready_tx);

    run_desktop_steps(
        recording_desktop(&calls),
        ready_rx,
        "http://localhost:8080".to_string(),
        all_steps(),
    )
    .await;

    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn disabled_steps_are_skipped() {
    let calls = CallLog::default();
    let (ready_tx, ready_rx) = oneshot::channel();
    ready_tx.send(()).unwrap();

    run_desktop_steps(
        recording_desktop(&calls),
        ready_rx,
        "http://localhost:8080".to_string(),
        DesktopSteps {
            open_browser: false,
            ..all_steps()
        },
    )
    .await;

    assert_eq!(*calls.lock().unwrap(), vec!["minimize"]);
}

#[tokio::test]
async fn unsupported_platform_never_panics() {
    let (ready_tx, ready_rx) = oneshot::channel();
    ready_tx.send(()).unwrap();

    run_desktop_steps(
        Arc::new(Desktop::with_tools(vec![])),
        ready_rx,
        "http://localhost:8080".to_string(),
        all_steps(),
    )
    .await;
}

//! Integration tests for serving and shutting down over real sockets

use std::net::{Ipv4Addr, SocketAddr};
use std::time::{Duration, Instant};

use axum::routing::get;
use axum::Router;
use hackterm::lifecycle::{LifecycleState, ServerHandle, ShutdownOutcome, StopReason};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::helpers::{app_with, two_scenario_store};

fn any_local_port() -> SocketAddr {
    SocketAddr::from((Ipv4Addr::LOCALHOST, 0))
}

async fn start() -> ServerHandle {
    ServerHandle::bind(any_local_port(), app_with(two_scenario_store()))
        .await
        .unwrap()
}

/// Raw HTTP/1.1 GET; returns the whole response text.
async fn http_get(addr: SocketAddr, path: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "GET {} HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n",
        path
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8(response).unwrap()
}

#[tokio::test]
async fn serves_requests_once_ready() {
    let mut server = start().await;
    assert_eq!(server.state(), LifecycleState::Serving);

    server.take_ready().unwrap().await.unwrap();
    let response = http_get(server.local_addr(), "/api/scenario/2").await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.ends_with(r#"[{"type":"out","text":"done"}]"#), "{response}");

    assert_eq!(
        server.shutdown(Duration::from_secs(1)).await,
        ShutdownOutcome::Graceful
    );
}

#[tokio::test]
async fn ready_can_be_taken_once() {
    let mut server = start().await;
    assert!(server.take_ready().is_some());
    assert!(server.take_ready().is_none());
    server.shutdown(Duration::from_secs(1)).await;
}

#[tokio::test]
async fn url_points_at_localhost() {
    let server = start().await;
    assert_eq!(
        server.url(),
        format!("http://localhost:{}", server.local_addr().port())
    );
    server.shutdown(Duration::from_secs(1)).await;
}

#[tokio::test]
async fn binding_a_busy_port_fails() {
    let server = start().await;
    let result = ServerHandle::bind(server.local_addr(), app_with(two_scenario_store())).await;
    assert!(result.is_err());
    server.shutdown(Duration::from_secs(1)).await;
}

#[tokio::test]
async fn run_until_returns_when_stop_resolves() {
    let mut server = start().await;
    let reason = server
        .run_until(tokio::time::sleep(Duration::from_millis(20)))
        .await;

    assert!(matches!(reason, StopReason::Signal));
    assert_eq!(server.state(), LifecycleState::ShuttingDown);
    server.shutdown(Duration::from_secs(1)).await;
}

#[tokio::test]
async fn idle_server_stops_gracefully_and_refuses_new_connections() {
    let mut server = start().await;
    server.take_ready().unwrap().await.unwrap();
    let addr = server.local_addr();

    assert_eq!(
        server.shutdown(Duration::from_secs(1)).await,
        ShutdownOutcome::Graceful
    );
    assert!(TcpStream::connect(addr).await.is_err());
}

#[tokio::test]
async fn stuck_connection_does_not_outlast_grace_period() {
    let mut server = start().await;
    server.take_ready().unwrap().await.unwrap();
    let addr = server.local_addr();

    // Half a request line keeps the connection busy until the grace expires.
    let mut stuck = TcpStream::connect(addr).await.unwrap();
    stuck.write_all(b"GET /api/scen").await.unwrap();
    tokio::time::sleep(Duration::from_millis(50)).await;

    let grace = Duration::from_millis(300);
    let started = Instant::now();
    let outcome = server.shutdown(grace).await;
    let elapsed = started.elapsed();

    assert!(
        matches!(outcome, ShutdownOutcome::Graceful | ShutdownOutcome::TimedOut),
        "{outcome:?}"
    );
    assert!(elapsed < grace + Duration::from_millis(500), "{elapsed:?}");
    drop(stuck);
}

#[tokio::test]
async fn hung_handler_is_abandoned_when_grace_runs_out() {
    let app = Router::new().route("/hang", get(|| std::future::pending::<()>()));
    let mut server = ServerHandle::bind(any_local_port(), app).await.unwrap();
    server.take_ready().unwrap().await.unwrap();
    let addr = server.local_addr();

    let mut client = TcpStream::connect(addr).await.unwrap();
    client
        .write_all(b"GET /hang HTTP/1.1\r\nHost: localhost\r\n\r\n")
        .await
        .unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let grace = Duration::from_millis(300);
    let started = Instant::now();
    let outcome = server.shutdown(grace).await;
    let elapsed = started.elapsed();

    assert_eq!(outcome, ShutdownOutcome::TimedOut);
    assert!(elapsed >= grace, "{elapsed:?}");
    assert!(elapsed < grace + Duration::from_millis(500), "{elapsed:?}");
    assert!(TcpStream::connect(addr).await.is_err());
    drop(client);
}

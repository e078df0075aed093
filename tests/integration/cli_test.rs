//! Integration tests for the CLI commands against a local HTTP server

use crypto_monitor::cli::{TickerArgs, WatchArgs};
use crypto_monitor::config::Config;
use std::num::NonZeroUsize;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const TICKER_JSON: &str = r#"{"ticker":{"high":"352000","low":"341250.12","vol":"48.5","last":"349999.99","buy":"349900","sell":"350010.5","open":"343000","date":1700000000}}"#;

/// Serve one canned response per accepted connection, `connections` times
async fn serve(
    status_line: &'static str,
    body: &'static str,
    connections: usize,
) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}/", listener.local_addr().unwrap());

    let handle = tokio::spawn(async move {
        for _ in 0..connections {
            let (mut socket, _) = listener.accept().await.unwrap();

            let mut head = Vec::new();
            let mut chunk = [0u8; 1024];
            while !head.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut chunk).await.unwrap();
                if n == 0 {
                    break;
                }
                head.extend_from_slice(&chunk[..n]);
            }

            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        }
    });

    (base_url, handle)
}

fn config_for(base_url: &str) -> Config {
    let mut config = Config::default();
    config.api.base_url = base_url.to_string();
    config.api.timeout_secs = 5;
    config
}

#[tokio::test]
async fn test_ticker_command_prints_ticker() {
    let (base_url, server) = serve("200 OK", TICKER_JSON, 1).await;

    let args = TickerArgs { json: true };
    args.execute(&config_for(&base_url)).await.unwrap();
    server.await.unwrap();
}

#[tokio::test]
async fn test_ticker_command_fails_on_http_error() {
    let (base_url, server) = serve("404 Not Found", r#"{"error":"unknown coin"}"#, 1).await;

    let args = TickerArgs { json: false };
    let err = args.execute(&config_for(&base_url)).await.unwrap_err();
    let message = err.to_string();
    assert!(message.contains("404"), "unexpected error: {message}");
    assert!(message.contains("unknown coin"));
    server.await.unwrap();
}

#[tokio::test]
async fn test_ticker_command_rejects_zero_timeout() {
    let (base_url, server) = serve("200 OK", TICKER_JSON, 1).await;
    let toml = format!("[api]\nbase_url = \"{base_url}\"\ntimeout_secs = 0\n");
    let config: Config = toml::from_str(&toml).unwrap();

    let err = TickerArgs { json: false }
        .execute(&config)
        .await
        .unwrap_err();
    assert!(err.to_string().contains("timeout_secs"));
    server.abort();
}

#[tokio::test]
async fn test_watch_stops_after_count() {
    let (base_url, server) = serve("200 OK", TICKER_JSON, 1).await;

    let args = WatchArgs {
        interval: Some(1),
        count: NonZeroUsize::new(1),
    };
    let result = tokio::time::timeout(
        Duration::from_secs(10),
        args.execute(&config_for(&base_url)),
    )
    .await
    .expect("watch should stop after one snapshot");

    assert!(result.is_ok());
    server.await.unwrap();
}

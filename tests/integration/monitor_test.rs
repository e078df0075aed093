//! Integration tests for the polling ticker feed

use async_trait::async_trait;
use crypto_monitor::api::{ApiError, HttpRequest, HttpTransport, MercadoBitcoinService, RawResponse};
use crypto_monitor::monitor::{PollingFeed, TickerFeed};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use rust_decimal::Decimal;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Returns a ticker whose last price increases with every call
struct CountingTransport {
    calls: AtomicU64,
}

#[async_trait]
impl HttpTransport for CountingTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<RawResponse, ApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        let body = format!(
            r#"{{"ticker":{{"high":"10","low":"1","vol":"1","last":"{call}","buy":"1","sell":"2","date":1700000000}}}}"#
        );
        Ok(RawResponse {
            status: StatusCode::OK,
            headers: HeaderMap::new(),
            body: body.into_bytes(),
        })
    }
}

/// Always unreachable
struct DownTransport;

#[async_trait]
impl HttpTransport for DownTransport {
    async fn execute(&self, _request: HttpRequest) -> Result<RawResponse, ApiError> {
        Err(ApiError::transport("network unreachable"))
    }
}

#[tokio::test]
async fn test_snapshots_arrive_in_order() {
    let service = MercadoBitcoinService::new(CountingTransport {
        calls: AtomicU64::new(0),
    });
    let feed = PollingFeed::new(service, Duration::from_millis(10));
    let mut rx = feed.subscribe().await.unwrap();

    for expected in 1..=3u64 {
        let snapshot = tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(snapshot.ticker.last, Decimal::from(expected));
        assert_eq!(snapshot.status, 200);
    }

    let latest = feed.latest().await.unwrap();
    assert!(latest.ticker.last >= Decimal::from(3));
}

#[tokio::test]
async fn test_unreachable_api_yields_no_snapshots() {
    let feed = PollingFeed::new(
        MercadoBitcoinService::new(DownTransport),
        Duration::from_millis(10),
    );
    let mut rx = feed.subscribe().await.unwrap();

    let result = tokio::time::timeout(Duration::from_millis(100), rx.recv()).await;
    assert!(result.is_err(), "expected no snapshot");
    assert!(feed.latest().await.is_none());
}

//! # Concurrent Access Tests
//!
//! Requests racing an external writer that rewrites the health file and
//! appends to the log must always produce well-formed responses.

mod common;

use common::{test_environment, StatusFixture, TestServer};
use futures::future::join_all;
use reqwest::StatusCode;
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Lines written by the fixture or the appending writer
fn is_log_line(line: &str) -> bool {
    ["log line ", "appended line "].iter().any(|prefix| {
        line.strip_prefix(prefix).is_some_and(|n| n.parse::<u64>().is_ok())
    })
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_during_writes_stay_well_formed() {
    let fixture = StatusFixture::new();
    fixture.write_health("OK");
    fixture.write_log_lines(50);
    let server = Arc::new(TestServer::start(fixture.config(), test_environment()).await);

    let stop = Arc::new(AtomicBool::new(false));
    let writer = {
        let stop = stop.clone();
        let health_file = fixture.health_file();
        let log_file = fixture.log_file();
        tokio::task::spawn_blocking(move || {
            let mut round = 0u64;
            while !stop.load(Ordering::Relaxed) {
                std::fs::write(&health_file, format!("  round {round}\n")).unwrap();
                let mut log = OpenOptions::new().append(true).open(&log_file).unwrap();
                // One write per line so readers never see half a line
                log.write_all(format!("appended line {round}\n").as_bytes()).unwrap();
                round += 1;
            }
        })
    };

    let requests = (0..64).map(|i| {
        let server = server.clone();
        async move {
            if i % 2 == 0 {
                let response = server.get("/status").await;
                assert_eq!(response.status(), StatusCode::OK);
                let text = response.text().await.unwrap();
                let body: Value = serde_json::from_str(&text).expect("status body is JSON");
                let message = body["message"].as_str().expect("message is a string");
                assert_eq!(message, message.trim());
            } else {
                let response = server.get("/logs?max_lines=20").await;
                assert_eq!(response.status(), StatusCode::OK);
                let text = response.text().await.unwrap();
                assert_eq!(text.lines().count(), 20, "log tail: {text:?}");
                assert!(text.ends_with('\n'));
                for line in text.lines() {
                    assert!(is_log_line(line), "unexpected log line {line:?}");
                }
            }
        }
    });
    join_all(requests).await;

    stop.store(true, Ordering::Relaxed);
    writer.await.unwrap();

    let server = Arc::try_unwrap(server).unwrap_or_else(|_| panic!("server still shared"));
    server.shutdown().await;
}

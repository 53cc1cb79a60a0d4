//! Tests for the HTTP and file feed sources.

use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

use tempfile::TempDir;

use neo_feed::{FeedConfig, FeedError, FeedSource, FileFeed, HttpFeed};

const BODY: &str = r#"{"element_count": 1, "near_earth_objects": {"2020-01-01": [{"name": "X"}]}}"#;

/// Serves one canned HTTP response and returns the endpoint URL.
fn serve_once(status_line: &'static str, body: &'static str) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();
        let mut request = Vec::new();
        let mut buf = [0u8; 1024];
        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let read = stream.read(&mut buf).unwrap();
            if read == 0 {
                break;
            }
            request.extend_from_slice(&buf[..read]);
        }
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).unwrap();
    });
    format!("http://{addr}/api/incoming")
}

#[tokio::test]
async fn http_feed_decodes_ok_response() {
    let endpoint = serve_once("HTTP/1.1 200 OK", BODY);
    let feed = HttpFeed::new(endpoint).unwrap();

    let payload = feed.fetch().await.unwrap();

    assert_eq!(payload.object_count(), 1);
}

#[tokio::test]
async fn http_feed_rejects_non_ok_status() {
    let endpoint = serve_once("HTTP/1.1 503 Service Unavailable", "{}");
    let feed = HttpFeed::new(endpoint).unwrap();

    let err = feed.fetch().await.unwrap_err();

    assert_eq!(err, FeedError::Status { status: 503 });
}

#[tokio::test]
async fn http_feed_treats_other_success_codes_as_failures() {
    let endpoint = serve_once("HTTP/1.1 204 No Content", "");
    let feed = HttpFeed::new(endpoint).unwrap();

    let err = feed.fetch().await.unwrap_err();

    assert_eq!(err, FeedError::Status { status: 204 });
}

#[tokio::test]
async fn http_feed_reports_malformed_body() {
    let endpoint = serve_once("HTTP/1.1 200 OK", "<html>oops</html>");
    let feed = HttpFeed::new(endpoint).unwrap();

    let err = feed.fetch().await.unwrap_err();

    assert!(matches!(err, FeedError::Decode(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn http_feed_reports_connection_failure() {
    // Bind then drop to get a port nobody listens on.
    let addr = TcpListener::bind("127.0.0.1:0").unwrap().local_addr().unwrap();
    let feed = HttpFeed::new(format!("http://{addr}/api/incoming")).unwrap();

    let err = feed.fetch().await.unwrap_err();

    assert!(matches!(err, FeedError::Transport(_)));
}

#[tokio::test]
async fn file_feed_reads_saved_body() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feed.json");
    fs::write(&path, BODY).unwrap();

    let payload = FileFeed::new(&path).fetch().await.unwrap();

    assert_eq!(payload.object_count(), 1);
    assert_eq!(FileFeed::new(&path).describe(), path.display().to_string());
}

#[tokio::test]
async fn file_feed_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();

    let err = FileFeed::new(dir.path().join("absent.json")).fetch().await.unwrap_err();

    assert!(matches!(err, FeedError::Io(_)));
}

#[tokio::test]
async fn config_source_reads_input_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("feed.json");
    fs::write(&path, BODY).unwrap();

    let source = FeedConfig::default().with_input(Some(path)).source().unwrap();

    assert_eq!(source.fetch().await.unwrap().object_count(), 1);
}

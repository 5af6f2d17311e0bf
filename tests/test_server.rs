mod common;

use common::{start_server, up_batch, up_query, up_series};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use ropee::codec::{decode, encode};
use ropee::test_utils::RecordingBuilder;
use ropee::{Credentials, QueryResult, ReadResult};

#[test]
fn test_write_then_read() {
    let builder = RecordingBuilder::new().with_series(vec![up_series()]);
    let (server, url) = start_server(builder.clone());
    let client = Client::new();

    // caller credentials on /write are ignored
    let resp = client
        .post(&format!("{}/write", url))
        .basic_auth("mallory", Some("secret"))
        .header("Content-Encoding", "snappy")
        .body(encode(&up_batch()).unwrap())
        .send()
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().unwrap(), "ok");

    let resp = client
        .post(&format!("{}/read", url))
        .body(encode(&up_query()).unwrap())
        .send()
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers()["content-type"], "application/x-protobuf");
    assert_eq!(resp.headers()["content-encoding"], "snappy");
    let result: ReadResult = decode(&resp.bytes().unwrap()).unwrap();
    assert_eq!(result, ReadResult::new(vec![QueryResult::new(vec![up_series()])]));

    {
        let recorded = builder.recorded();
        let recorded = recorded.lock().unwrap();
        assert_eq!(recorded.writes, vec![up_batch()]);
        assert_eq!(recorded.reads, vec![up_query()]);
        // static write handle, then the read handle with empty credentials
        assert_eq!(
            recorded.built_with,
            vec![Credentials::default(), Credentials::new("", "")]
        );
    }

    let metrics = client
        .get(&format!("{}/metrics", url))
        .send()
        .unwrap()
        .text()
        .unwrap();
    assert!(metrics.contains("ropee_write_requests_total 1"));
    assert!(metrics.contains("ropee_read_requests_total 1"));

    server.shutdown();
}

#[test]
fn test_read_basic_auth_passthrough() {
    let builder = RecordingBuilder::new();
    let (server, url) = start_server(builder.clone());

    let resp = Client::new()
        .post(&format!("{}/read", url))
        .basic_auth("grafana", Some("p4ss:word"))
        .body(encode(&up_query()).unwrap())
        .send()
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let recorded = builder.recorded();
    let recorded = recorded.lock().unwrap();
    assert_eq!(recorded.built_with.last(), Some(&Credentials::new("grafana", "p4ss:word")));

    server.shutdown();
}

#[test]
fn test_malformed_bodies() {
    let builder = RecordingBuilder::new();
    let (server, url) = start_server(builder.clone());
    let client = Client::new();

    for path in &["write", "read"] {
        let resp = client
            .post(&format!("{}/{}", url, path))
            .body("definitely not snappy")
            .send()
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
    assert_eq!(builder.call_count(), 0);

    let metrics = client
        .get(&format!("{}/metrics", url))
        .send()
        .unwrap()
        .text()
        .unwrap();
    assert!(metrics.contains("ropee_write_requests_total 0"));
    assert!(metrics.contains("ropee_read_requests_total 0"));

    server.shutdown();
}

#[test]
fn test_backend_failure_status() {
    let builder = RecordingBuilder::new().failing_call("hec is down");
    let (server, url) = start_server(builder);

    let resp = Client::new()
        .post(&format!("{}/write", url))
        .body(encode(&up_batch()).unwrap())
        .send()
        .unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(resp.text().unwrap(), "hec is down");

    server.shutdown();
}

#[test]
fn test_routing() {
    let (server, url) = start_server(RecordingBuilder::new());
    let client = Client::new();

    let resp = client.get(&format!("{}/write", url)).send().unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let resp = client.post(&format!("{}/metrics", url)).send().unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
    let resp = client.get(&format!("{}/api/v1/query", url)).send().unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    server.shutdown();
}

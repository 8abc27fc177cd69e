//! ReqwestTransport against a bare TCP listener standing in for the API

use std::net::SocketAddr;
use std::time::Duration;

use kotoba_config::lookup::LookupConfig;
use kotoba_lookup::{HttpRequest, HttpTransport, JishoClient, ReqwestTransport, TransportError};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

const BODY: &str = r#"{"data":[{"japanese":[{"word":"猫","reading":"ねこ"}],"senses":[]}]}"#;

fn transport() -> ReqwestTransport {
    let client = reqwest::Client::builder().no_proxy().build().unwrap();
    ReqwestTransport::with_client(client)
}

async fn read_head(stream: &mut TcpStream) -> String {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = stream.read(&mut buf).await.unwrap();
        if n == 0 {
            break;
        }
        head.extend_from_slice(&buf[..n]);
    }
    String::from_utf8(head).unwrap()
}

/// Answers one request with `body` and hands back the raw request head
async fn serve_once(body: &'static str) -> (SocketAddr, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let head = read_head(&mut stream).await;

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.unwrap();
        head
    });

    (addr, handle)
}

#[tokio::test]
async fn search_sends_encoded_keyword_and_no_cache_headers() {
    let (addr, server) = serve_once(BODY).await;
    let config = LookupConfig {
        base_url: format!("http://{addr}"),
        ..LookupConfig::default()
    };
    let client = JishoClient::with_transport(transport(), config);

    let words = client.search(" 猫 ").await.unwrap();

    assert_eq!(words.len(), 1);
    assert_eq!(words[0].headword(), Some("猫"));

    let head = server.await.unwrap();
    let request_line = head.lines().next().unwrap();
    assert_eq!(
        request_line,
        "GET /api/v1/search/words?keyword=%E7%8C%AB HTTP/1.1"
    );

    let head = head.to_ascii_lowercase();
    assert!(head.contains("\r\ncache-control: no-cache\r\n"), "{head}");
    assert!(head.contains("\r\npragma: no-cache\r\n"), "{head}");
}

#[tokio::test]
async fn cache_headers_only_when_bypassing() {
    let (addr, server) = serve_once("{}").await;

    let response = transport()
        .send(HttpRequest {
            url: format!("http://{addr}/api/v1/search/words"),
            query: vec![("keyword".to_string(), "a b&c".to_string())],
            timeout: Duration::from_secs(5),
            bypass_cache: false,
        })
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, b"{}");

    let head = server.await.unwrap();
    assert!(head.starts_with("GET /api/v1/search/words?keyword=a+b%26c HTTP/1.1"));
    let head = head.to_ascii_lowercase();
    assert!(!head.contains("cache-control"));
    assert!(!head.contains("pragma"));
}

#[tokio::test]
async fn silent_server_hits_the_request_timeout() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    // Accept and read, never answer
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let _ = read_head(&mut stream).await;
        tokio::time::sleep(Duration::from_secs(10)).await;
    });

    let err = transport()
        .send(HttpRequest {
            url: format!("http://{addr}/api/v1/search/words"),
            query: vec![("keyword".to_string(), "猫".to_string())],
            timeout: Duration::from_millis(200),
            bypass_cache: true,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, TransportError::Timeout), "{err:?}");
    server.abort();
}

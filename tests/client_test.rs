//! 解析API連携テスト
//!
//! ローカルのTCPサーバーを解析サービスの代わりに立てて、
//! 送信内容とページ状態への反映を検証

use disaster_scene::client::AnalysisClient;
use disaster_scene::selection::SelectedImage;
use disaster_scene_common::{AnalysisOutcome, PageState, Report, Severity};
use tempfile::{tempdir, TempDir};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use tokio::sync::oneshot;

fn sample_image() -> (TempDir, SelectedImage) {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("flood.jpg");
    std::fs::write(&path, b"\xFF\xD8\xFFfake-jpeg-bytes").unwrap();
    let image = SelectedImage::open(&path).expect("画像を開けない");
    (dir, image)
}

/// 1回だけ応答するサーバー。受信したリクエスト全体を返す。
async fn serve_once(status_line: &'static str, body: &'static str) -> (String, oneshot::Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (tx, rx) = oneshot::channel();

    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let request = read_request(&mut socket).await;

        let response = format!(
            "{}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status_line,
            body.len(),
            body
        );
        socket.write_all(response.as_bytes()).await.unwrap();
        socket.shutdown().await.ok();
        let _ = tx.send(request);
    });

    (format!("http://{}/analyze/", addr), rx)
}

async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    loop {
        let n = socket.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);

        let text = String::from_utf8_lossy(&buf);
        if let Some(header_end) = text.find("\r\n\r\n") {
            let content_length = text[..header_end]
                .lines()
                .find_map(|line| {
                    let (name, value) = line.split_once(':')?;
                    name.eq_ignore_ascii_case("content-length")
                        .then(|| value.trim().parse::<usize>().ok())
                        .flatten()
                });
            let received = buf.len() - (header_end + 4);
            match content_length {
                Some(len) if received >= len => break,
                None if text.ends_with("--\r\n") => break,
                _ => {}
            }
        }
    }

    String::from_utf8_lossy(&buf).to_string()
}

#[tokio::test]
async fn test_success_populates_page() {
    let (endpoint, request_rx) =
        serve_once("HTTP/1.1 200 OK", r#"{"caption": "X", "report": "Y"}"#).await;
    let (_dir, image) = sample_image();

    let mut page = PageState::new();
    page.select(image.clone());
    let ticket = page.begin_generate().unwrap();

    let outcome = AnalysisClient::new(endpoint).run(&image).await;
    assert!(matches!(outcome, AnalysisOutcome::Success(_)));
    assert!(page.complete(ticket, outcome));

    assert!(!page.is_loading());
    assert_eq!(page.caption(), Some("X"));
    assert_eq!(page.report(), Some(&Report::Text("Y".to_string())));

    let request = request_rx.await.unwrap();
    assert!(request.starts_with("POST /analyze/ HTTP/1.1"));
    assert!(request.contains("multipart/form-data"));
    assert!(request.contains(r#"name="file""#));
    assert!(request.contains(r#"filename="flood.jpg""#));
    assert!(request.contains("fake-jpeg-bytes"));
}

#[tokio::test]
async fn test_structured_report_response() {
    let (endpoint, _rx) = serve_once(
        "HTTP/1.1 200 OK",
        r#"{"caption": "a collapsed building", "report": {"disasterType": "Earthquake", "severity": "Critical", "immediateThreats": ["Aftershocks", "Gas leak"]}}"#,
    )
    .await;
    let (_dir, image) = sample_image();

    let response = AnalysisClient::new(endpoint).analyze(&image).await.unwrap();
    let report = response.report.as_structured().expect("構造化レポートではない");
    assert_eq!(report.severity, Severity::Critical);
    assert_eq!(report.immediate_threats, vec!["Aftershocks", "Gas leak"]);
}

#[tokio::test]
async fn test_non_success_status_is_failure() {
    let (endpoint, _rx) =
        serve_once("HTTP/1.1 500 Internal Server Error", r#"{"detail": "boom"}"#).await;
    let (_dir, image) = sample_image();

    let mut page = PageState::new();
    page.select(image.clone());
    let ticket = page.begin_generate().unwrap();
    let outcome = AnalysisClient::new(endpoint).run(&image).await;
    page.complete(ticket, outcome);

    assert!(!page.is_loading());
    assert_eq!(page.caption(), Some("❌ Failed to generate caption."));
    assert_eq!(
        page.report().and_then(|r| r.as_text()),
        Some("❌ Failed to generate report.")
    );
}

#[tokio::test]
async fn test_connection_refused_is_failure() {
    // 使われていないポートを確保してから閉じる
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let (_dir, image) = sample_image();
    let mut page = PageState::new();
    page.select(image.clone());
    let ticket = page.begin_generate().unwrap();

    let outcome = AnalysisClient::new(format!("http://{}/analyze/", addr)).run(&image).await;
    assert!(matches!(outcome, AnalysisOutcome::Failure(_)));
    page.complete(ticket, outcome);

    assert!(!page.is_loading());
    assert_eq!(page.caption(), Some("❌ Failed to generate caption."));
    assert_eq!(
        page.report().and_then(|r| r.as_text()),
        Some("❌ Failed to generate report.")
    );

    // 失敗後も再実行できる
    assert!(page.begin_generate().is_some());
}

#[tokio::test]
async fn test_undecodable_body_is_failure() {
    let (endpoint, _rx) = serve_once("HTTP/1.1 200 OK", "not json").await;
    let (_dir, image) = sample_image();

    let outcome = AnalysisClient::new(endpoint).run(&image).await;
    assert!(matches!(outcome, AnalysisOutcome::Failure(_)));
}

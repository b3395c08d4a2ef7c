//! HttpFetcher against a local mock server

use kodegen_tools_page_ripper::{CaptureConfig, Fetch, FetchError, HttpFetcher, fetch_bytes};

#[tokio::test]
async fn test_fetch_returns_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/img/a.png")
        .with_status(200)
        .with_header("content-type", "image/png")
        .with_body(b"\x89PNG".to_vec())
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&CaptureConfig::default()).unwrap();
    let url = format!("{}/img/a.png", server.url());
    let bytes = fetcher.fetch(&url).await.unwrap();

    assert_eq!(bytes, b"\x89PNG");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_fetch_sends_configured_user_agent() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/")
        .match_header("user-agent", "ripper-test/1.0")
        .with_status(200)
        .with_body("ok")
        .create_async()
        .await;

    let config = CaptureConfig::builder()
        .user_agent("ripper-test/1.0")
        .build()
        .unwrap();
    let fetcher = HttpFetcher::new(&config).unwrap();
    fetcher.fetch(&format!("{}/", server.url())).await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_error_status_is_reported() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/missing.css")
        .with_status(404)
        .create_async()
        .await;

    let fetcher = HttpFetcher::new(&CaptureConfig::default()).unwrap();
    let err = fetcher
        .fetch(&format!("{}/missing.css", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 404, .. }));
}

#[tokio::test]
async fn test_oversized_body_is_refused() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/clip.mp4")
        .with_status(200)
        .with_body(vec![0u8; 64])
        .create_async()
        .await;

    let config = CaptureConfig::builder().max_resource_size(16).build().unwrap();
    let fetcher = HttpFetcher::new(&config).unwrap();
    let err = fetcher
        .fetch(&format!("{}/clip.mp4", server.url()))
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::TooLarge { limit: 16, .. }));
}

#[tokio::test]
async fn test_data_urls_never_reach_the_network() {
    // No server: a network request would fail.
    let fetcher = HttpFetcher::new(&CaptureConfig::default()).unwrap();

    let bytes = fetch_bytes(&fetcher, "data:text/plain;base64,aGk=").await.unwrap();

    assert_eq!(bytes, b"hi");
}

//! HTTP client tests against the in-process mock Data API.

use std::sync::Arc;

use mock_api::{InMemoryRepository, MockServer, MockState, Repository, StoredVideo};
use youtube_api::{ApiError, HttpYouTubeApi, SearchRequest, YouTubeApi};

const KEY: &str = "test-key";

async fn start_server(state: MockState) -> MockServer {
    MockServer::start(state).await.expect("mock server should bind")
}

fn sample_state() -> MockState {
    MockState::new(Arc::new(InMemoryRepository::with_sample_data()), KEY)
}

fn knapsack_request(max_results: u32) -> SearchRequest {
    SearchRequest {
        query: "knapsack".to_string(),
        max_results,
        region_code: Some("US".to_string()),
        relevance_language: Some("en".to_string()),
    }
}

#[tokio::test]
async fn search_returns_video_ids_in_upstream_order() {
    let server = start_server(sample_state()).await;
    let api = HttpYouTubeApi::new(KEY, server.base_url()).unwrap();

    let response = api.search_list(&knapsack_request(25)).await.unwrap();
    let ids: Vec<&str> = response.items.iter().map(|item| item.id.video_id.as_str()).collect();

    assert_eq!(ids, vec!["knap-1", "knap-2", "knap-3", "knap-4"]);
    assert_eq!(server.state().search_calls(), 1);
}

#[tokio::test]
async fn search_respects_max_results() {
    let server = start_server(sample_state()).await;
    let api = HttpYouTubeApi::new(KEY, server.base_url()).unwrap();

    let response = api.search_list(&knapsack_request(2)).await.unwrap();
    assert_eq!(response.items.len(), 2);
    assert_eq!(response.page_info.total_results, 4);
}

#[tokio::test]
async fn videos_list_hydrates_and_drops_unknown_ids() {
    let server = start_server(sample_state()).await;
    let api = HttpYouTubeApi::new(KEY, server.base_url()).unwrap();

    let ids = vec!["knap-4".to_string(), "deleted".to_string(), "knap-1".to_string()];
    let response = api.videos_list(&ids).await.unwrap();

    assert_eq!(response.items.len(), 2);
    let hidden_likes = &response.items[0];
    assert_eq!(hidden_likes.id, "knap-4");
    assert_eq!(hidden_likes.snippet.channel_title, "Hidden Likes");
    assert_eq!(hidden_likes.statistics.view_count, 45_000);
    assert_eq!(hidden_likes.statistics.like_count, 0);
    assert_eq!(hidden_likes.content_details.duration.as_deref(), Some("PT9M30S"));
    assert_eq!(server.state().videos_calls(), 1);
}

#[tokio::test]
async fn invalid_key_surfaces_status_error() {
    let server = start_server(sample_state()).await;
    let api = HttpYouTubeApi::new("wrong-key", server.base_url()).unwrap();

    let err = api.search_list(&knapsack_request(5)).await.unwrap_err();
    match &err {
        ApiError::Status { endpoint, status, message, .. } => {
            assert_eq!(*endpoint, "search");
            assert_eq!(*status, 400);
            assert!(message.contains("API key not valid"));
        }
        other => panic!("expected status error, got {other:?}"),
    }
    assert_eq!(err.reason(), Some("badRequest"));
}

#[tokio::test]
async fn quota_exhaustion_is_reported_with_reason() {
    let server = start_server(sample_state().with_quota_exhausted()).await;
    let api = HttpYouTubeApi::new(KEY, server.base_url()).unwrap();

    let err = api.videos_list(&["knap-1".to_string()]).await.unwrap_err();
    assert_eq!(err.reason(), Some("quotaExceeded"));
    assert!(err.to_string().starts_with("HTTP 403 from videos"));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    // Bind and release a port so nothing is listening on it
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap();

    let api = HttpYouTubeApi::new(KEY, format!("http://{addr}/youtube/v3")).unwrap();
    let err = api.search_list(&knapsack_request(5)).await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
}

#[tokio::test]
async fn transport_errors_do_not_reveal_the_api_key() {
    let secret = "SUPER-SECRET-KEY";
    let addr = std::net::TcpListener::bind("127.0.0.1:0")
        .and_then(|listener| listener.local_addr())
        .unwrap();

    let api = HttpYouTubeApi::new(secret, format!("http://{addr}/youtube/v3")).unwrap();
    let search_err = api.search_list(&knapsack_request(5)).await.unwrap_err();
    let videos_err = api.videos_list(&["knap-1".to_string()]).await.unwrap_err();

    for err in [search_err, videos_err] {
        assert!(matches!(err, ApiError::Transport(_)), "got {err:?}");
        assert!(!err.to_string().contains(secret), "leaked in Display: {err}");
        assert!(!format!("{err:?}").contains(secret), "leaked in Debug: {err:?}");
    }
}

#[tokio::test]
async fn unknown_path_surfaces_status_error() {
    let repo = Arc::new(InMemoryRepository::new());
    repo.add_video(StoredVideo::new("x", "anything"));
    let server = start_server(MockState::new(repo, KEY)).await;
    let api = HttpYouTubeApi::new(KEY, format!("{}/v4", server.base_url())).unwrap();

    let err = api.search_list(&knapsack_request(5)).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }), "got {err:?}");
}

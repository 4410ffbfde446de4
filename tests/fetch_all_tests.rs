//! Full-collection fetching and incremental paging against a mock API.

mod common;

use common::{character, client, episode, ids, location, page};
use rickmorty::{fetcher, Error, PagerState};
use serde_json::json;
use std::time::{Duration, Instant};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_page(
    server: &MockServer,
    resource: &str,
    number: u32,
    template: ResponseTemplate,
    expected_calls: u64,
) {
    Mock::given(method("GET"))
        .and(path(format!("/api/{}/", resource)))
        .and(query_param("page", number.to_string()))
        .respond_with(template)
        .expect(expected_calls)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_single_page_collection_returns_first_page() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/location"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("location", vec![location(1), location(2)], 1, 1, 2)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/location/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&mock_server)
        .await;

    let locations = client(&mock_server).location().get_all().await.unwrap();
    assert_eq!(ids(&locations), vec![1, 2]);
}

#[tokio::test]
async fn test_out_of_order_pages_are_sorted_by_id() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("character", vec![character(2), character(1)], 1, 3, 6)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    // Page 2 is slow so page 3 completes first.
    mount_page(
        &mock_server,
        "character",
        2,
        ResponseTemplate::new(200)
            .set_body_json(page("character", vec![character(4), character(3)], 2, 3, 6))
            .set_delay(Duration::from_millis(200)),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "character",
        3,
        ResponseTemplate::new(200)
            .set_body_json(page("character", vec![character(6), character(5)], 3, 3, 6)),
        1,
    )
    .await;

    let characters = client(&mock_server).character().get_all().await.unwrap();
    assert_eq!(ids(&characters), vec![1, 2, 3, 4, 5, 6]);
}

#[tokio::test]
async fn test_fetch_all_requests_every_page_once() {
    let mock_server = MockServer::start().await;
    let pages = 5;

    Mock::given(method("GET"))
        .and(path("/api/episode"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page("episode", vec![episode(1)], 1, pages, 5)),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    mount_page(&mock_server, "episode", 1, ResponseTemplate::new(200), 0).await;
    for number in 2..=pages {
        mount_page(
            &mock_server,
            "episode",
            number,
            ResponseTemplate::new(200)
                .set_body_json(page("episode", vec![episode(number)], number, pages, 5)),
            1,
        )
        .await;
    }

    let episodes = fetcher::fetch_all(&client(&mock_server).episode())
        .await
        .unwrap();

    assert_eq!(ids(&episodes), vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn test_pages_are_requested_concurrently() {
    let mock_server = MockServer::start().await;
    let pages = 5;
    let delay = Duration::from_millis(300);

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("character", vec![character(1)], 1, pages, 5)),
        )
        .mount(&mock_server)
        .await;

    for number in 2..=pages {
        mount_page(
            &mock_server,
            "character",
            number,
            ResponseTemplate::new(200)
                .set_body_json(page("character", vec![character(number)], number, pages, 5))
                .set_delay(delay),
            1,
        )
        .await;
    }

    let started = Instant::now();
    let characters = client(&mock_server).character().get_all().await.unwrap();
    let elapsed = started.elapsed();

    assert_eq!(ids(&characters), vec![1, 2, 3, 4, 5]);
    // Sequential requests would take at least 4 * 300ms.
    assert!(
        elapsed < delay * 3,
        "pages were not fetched concurrently: took {:?}",
        elapsed
    );
}

#[tokio::test]
async fn test_duplicate_ids_across_pages_are_merged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/location"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("location", vec![location(1), location(2)], 1, 2, 4)),
        )
        .mount(&mock_server)
        .await;

    // Collection shifted between requests: location 2 shows up again.
    mount_page(
        &mock_server,
        "location",
        2,
        ResponseTemplate::new(200)
            .set_body_json(page("location", vec![location(2), location(3)], 2, 2, 4)),
        1,
    )
    .await;

    let locations = client(&mock_server).location().get_all().await.unwrap();
    assert_eq!(ids(&locations), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_failing_page_fails_whole_fetch() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/character"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(page("character", vec![character(1)], 1, 3, 3)),
        )
        .mount(&mock_server)
        .await;

    // Page 2 may or may not be requested before page 3 fails the call.
    Mock::given(method("GET"))
        .and(path("/api/character/"))
        .and(query_param("page", "2"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("character", vec![character(2)], 2, 3, 3))
                .set_delay(Duration::from_millis(100)),
        )
        .mount(&mock_server)
        .await;
    mount_page(
        &mock_server,
        "character",
        3,
        ResponseTemplate::new(500).set_body_json(json!({"error": "Internal server error"})),
        1,
    )
    .await;

    let result = client(&mock_server).character().get_all().await;

    match result {
        Err(Error::Http {
            status, message, ..
        }) => {
            assert_eq!(status.as_u16(), 500);
            assert_eq!(message, "Internal server error");
        }
        other => panic!("Expected Http error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_failing_first_page_makes_no_page_requests() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/episode"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/episode/"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).episode().get_all().await;
    assert!(matches!(result, Err(Error::Decoding { .. })));
}

#[tokio::test]
async fn test_pager_stops_after_last_page() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "location",
        1,
        ResponseTemplate::new(200)
            .set_body_json(page("location", vec![location(1), location(2)], 1, 2, 3)),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "location",
        2,
        ResponseTemplate::new(200).set_body_json(page("location", vec![location(3)], 2, 2, 3)),
        1,
    )
    .await;
    mount_page(&mock_server, "location", 3, ResponseTemplate::new(200), 0).await;

    let mut pager = client(&mock_server).location().pager();

    assert_eq!(pager.load_next().await.unwrap().len(), 2);
    assert_eq!(pager.state(), PagerState::Idle);

    assert_eq!(pager.load_next().await.unwrap().len(), 1);
    assert_eq!(pager.state(), PagerState::Exhausted);

    assert!(pager.load_next().await.unwrap().is_empty());
    assert_eq!(ids(pager.items()), vec![1, 2, 3]);
}

#[tokio::test]
async fn test_pager_exhausts_on_not_found() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "episode",
        1,
        ResponseTemplate::new(200).set_body_json(page("episode", vec![episode(1)], 1, 2, 2)),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "episode",
        2,
        ResponseTemplate::new(404).set_body_json(json!({"error": "There is nothing here"})),
        1,
    )
    .await;

    let mut pager = client(&mock_server).episode().pager();

    pager.load_more_if_needed(None).await.unwrap();
    assert_eq!(pager.items().len(), 1);

    let added = pager.load_more_if_needed(Some(0)).await.unwrap();
    assert!(added.is_empty());
    assert!(!pager.can_load_more());
    assert_eq!(ids(pager.items()), vec![1]);
}

#[tokio::test]
async fn test_pager_error_leaves_items_unchanged() {
    let mock_server = MockServer::start().await;

    mount_page(
        &mock_server,
        "character",
        1,
        ResponseTemplate::new(200)
            .set_body_json(page("character", vec![character(1)], 1, 3, 3)),
        1,
    )
    .await;
    mount_page(
        &mock_server,
        "character",
        2,
        ResponseTemplate::new(503).set_body_string("unavailable"),
        1,
    )
    .await;

    let mut pager = client(&mock_server).character().pager();
    pager.load_next().await.unwrap();

    let result = pager.load_next().await;
    assert!(matches!(result, Err(Error::UnknownHttp { .. })));
    assert_eq!(pager.state(), PagerState::Idle);
    assert_eq!(pager.next_page(), 2);
    assert_eq!(ids(pager.items()), vec![1]);
}

#[tokio::test]
async fn test_cancelled_load_returns_pager_to_idle() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/episode/"))
        .and(query_param("page", "1"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(page("episode", vec![episode(1), episode(2)], 1, 2, 3))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&mock_server)
        .await;

    let mut pager = client(&mock_server).episode().pager();

    let cancelled = tokio::time::timeout(Duration::from_millis(50), pager.load_next()).await;
    assert!(cancelled.is_err(), "request should have timed out");
    assert_eq!(pager.state(), PagerState::Idle);
    assert!(!pager.is_loading());
    assert_eq!(pager.next_page(), 1);
    assert!(pager.items().is_empty());

    assert_eq!(pager.load_next().await.unwrap().len(), 2);
    assert_eq!(pager.state(), PagerState::Idle);
    assert_eq!(ids(pager.items()), vec![1, 2]);
}

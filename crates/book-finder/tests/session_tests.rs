//! Search session tests: query ownership and wholesale replacement.

use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use book_finder::config::api;
use book_finder::{BookSearchService, CatalogClient, Config, SearchSession};

fn setup_session(mock_server: &MockServer) -> SearchSession {
    let client = CatalogClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    SearchSession::new(BookSearchService::new(client))
}

async fn mount(mock_server: &MockServer, query: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(api::VOLUMES_PATH))
        .and(query_param("q", query))
        .respond_with(response)
        .expect(1)
        .mount(mock_server)
        .await;
}

fn titles(session: &SearchSession) -> Vec<&str> {
    session.books().iter().map(|b| b.title.as_str()).collect()
}

#[tokio::test]
async fn test_new_session_is_empty() {
    let mock_server = MockServer::start().await;
    let session = setup_session(&mock_server);
    assert_eq!(session.query(), "");
    assert!(session.books().is_empty());
}

#[tokio::test]
async fn test_each_submit_replaces_books() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "dune",
        ResponseTemplate::new(200).set_body_json(json!({
            "items": [{"volumeInfo": {"title": "Dune"}}, {"volumeInfo": {"title": "Dune Messiah"}}]
        })),
    )
    .await;
    mount(
        &mock_server,
        "emma",
        ResponseTemplate::new(200).set_body_json(json!({"items": [{"volumeInfo": {"title": "Emma"}}]})),
    )
    .await;

    let mut session = setup_session(&mock_server);

    session.set_query("dune");
    assert_eq!(session.submit().await.len(), 2);
    assert_eq!(titles(&session), ["Dune", "Dune Messiah"]);

    session.set_query("emma");
    session.submit().await;
    assert_eq!(session.query(), "emma");
    assert_eq!(titles(&session), ["Emma"]);
}

#[tokio::test]
async fn test_failed_submit_clears_previous_books() {
    let mock_server = MockServer::start().await;
    mount(
        &mock_server,
        "dune",
        ResponseTemplate::new(200).set_body_json(json!({"items": [{"volumeInfo": {"title": "Dune"}}]})),
    )
    .await;
    mount(&mock_server, "broken", ResponseTemplate::new(500)).await;

    let mut session = setup_session(&mock_server);

    session.set_query("dune");
    session.submit().await;
    assert_eq!(titles(&session), ["Dune"]);

    session.set_query("broken");
    assert!(session.submit().await.is_empty());
    assert!(session.books().is_empty());
}

#[tokio::test]
async fn test_editing_query_does_not_search() {
    let mock_server = MockServer::start().await;
    let mut session = setup_session(&mock_server);

    session.set_query("du");
    session.set_query("dun");
    session.set_query("dune");

    assert_eq!(session.query(), "dune");
    assert!(mock_server.received_requests().await.unwrap().is_empty());
}

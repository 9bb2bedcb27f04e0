//! Mock-based tests for the arXiv client: feed parsing, error mapping, caching.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use scholarsift::client::ArxivClient;
use scholarsift::config::Config;
use scholarsift::error::ClientError;
use scholarsift::models::{SearchField, SearchQuery, SortBy, SortOrder};

fn setup_client(mock_server: &MockServer) -> ArxivClient {
    let config = Config::for_testing(&mock_server.uri());
    ArxivClient::new(config).unwrap()
}

fn sample_entry(id: &str, title: &str, authors: &[&str]) -> String {
    let authors: String = authors
        .iter()
        .map(|name| format!("<author><name>{name}</name></author>"))
        .collect();

    format!(
        r#"<entry>
            <id>http://arxiv.org/abs/{id}</id>
            <updated>2024-03-02T17:46:25Z</updated>
            <published>2024-03-01T18:59:59Z</published>
            <title>{title}</title>
            <summary>  A study of
            {title}, with whitespace to flatten.  </summary>
            {authors}
            <arxiv:comment xmlns:arxiv="http://arxiv.org/schemas/atom">12 pages</arxiv:comment>
            <link href="http://arxiv.org/abs/{id}" rel="alternate" type="text/html"/>
            <link title="pdf" href="http://arxiv.org/pdf/{id}" rel="related" type="application/pdf"/>
            <arxiv:primary_category xmlns:arxiv="http://arxiv.org/schemas/atom" term="cs.CL"/>
            <category term="cs.CL"/>
            <category term="cs.LG"/>
        </entry>"#
    )
}

fn atom_feed(total: u64, entries: &[String]) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom" xmlns:opensearch="http://a9.com/-/spec/opensearch/1.1/" xmlns:arxiv="http://arxiv.org/schemas/atom">
  <title>ArXiv Query: search_query=all:test</title>
  <id>http://arxiv.org/api/fixture</id>
  <opensearch:totalResults>{total}</opensearch:totalResults>
  <opensearch:startIndex>0</opensearch:startIndex>
  <opensearch:itemsPerPage>{}</opensearch:itemsPerPage>
  {}
</feed>"#,
        entries.len(),
        entries.join("\n")
    )
}

fn atom_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body, "application/atom+xml; charset=UTF-8")
}

// =============================================================================
// Feed parsing
// =============================================================================

#[tokio::test]
async fn test_search_parses_feed() {
    let mock_server = MockServer::start().await;

    let feed = atom_feed(
        412,
        &[
            sample_entry("2403.01001v1", "Attention For Everyone", &["Jane Roe", "John Doe"]),
            sample_entry("2403.01002v2", "A Second Paper", &["Solo Author"]),
        ],
    );

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:attention"))
        .respond_with(atom_response(feed))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let query = SearchQuery::keyword("attention");

    let result = client.search(&query).await.unwrap();

    assert_eq!(result.total, 412);
    assert_eq!(result.papers.len(), 2);

    let first = &result.papers[0];
    assert_eq!(first.arxiv_id, "2403.01001v1");
    assert_eq!(first.title, "Attention For Everyone");
    // Author order comes from the feed
    assert_eq!(first.authors, vec!["Jane Roe", "John Doe"]);
    assert_eq!(first.published_date(), "2024-03-01");
    assert_eq!(first.pdf_link(), "http://arxiv.org/pdf/2403.01001v1");
    assert_eq!(first.categories, vec!["cs.CL", "cs.LG"]);
    // Newlines and runs of spaces in the summary are flattened
    assert_eq!(
        first.summary,
        "A study of Attention For Everyone, with whitespace to flatten."
    );
}

#[tokio::test]
async fn test_search_empty_feed_is_empty_result() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(atom_feed(0, &[])))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let result = client.search(&SearchQuery::keyword("xyzzy")).await.unwrap();

    assert!(result.is_empty());
    assert_eq!(result.total, 0);
}

#[tokio::test]
async fn test_search_sends_field_prefix_and_sort() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "ti:transformers"))
        .and(query_param("max_results", "3"))
        .and(query_param("sortBy", "submittedDate"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(atom_response(atom_feed(0, &[])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let query = SearchQuery::keyword("transformers")
        .with_field(SearchField::Title)
        .with_max_results(3)
        .with_sort(SortBy::SubmittedDate, SortOrder::Descending);

    client.search(&query).await.unwrap();
}

#[tokio::test]
async fn test_blank_query_rejected_before_upstream() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(atom_feed(0, &[])))
        .expect(0) // a blank query must never produce an upstream request
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);

    for blank in ["", "  ", "\t\n"] {
        let err = client.search(&SearchQuery::keyword(blank)).await.unwrap_err();
        assert!(matches!(err, ClientError::BadRequest { .. }), "{blank:?} should be rejected");
    }
}

#[tokio::test]
async fn test_search_surfaces_api_error_entry() {
    let mock_server = MockServer::start().await;

    let error_feed = atom_feed(
        1,
        &[r#"<entry>
            <id>http://arxiv.org/api/errors#incorrect_field</id>
            <title>Error</title>
            <summary>malformed search_query</summary>
        </entry>"#
            .to_string()],
    );

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(error_feed))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchQuery::keyword("bad")).await.unwrap_err();

    match err {
        ClientError::Feed { message } => assert_eq!(message, "malformed search_query"),
        other => panic!("expected feed error, got {other:?}"),
    }
}

// =============================================================================
// Status code mapping
// =============================================================================

#[tokio::test]
async fn test_search_maps_bad_request() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad query"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchQuery::keyword("q")).await.unwrap_err();

    assert!(matches!(err, ClientError::BadRequest { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_search_maps_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(404).set_body_string("no such endpoint"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchQuery::keyword("q")).await.unwrap_err();

    assert!(matches!(err, ClientError::NotFound { .. }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_search_maps_rate_limit_with_retry_after() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(429).insert_header("Retry-After", "120"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchQuery::keyword("q")).await.unwrap_err();

    match err {
        ClientError::RateLimited { retry_after } => {
            assert_eq!(retry_after, std::time::Duration::from_secs(120));
        }
        other => panic!("expected rate limit error, got {other:?}"),
    }
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_search_maps_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let err = client.search(&SearchQuery::keyword("q")).await.unwrap_err();

    match err {
        ClientError::Server { status, .. } => assert_eq!(status, 503),
        other => panic!("expected server error, got {other:?}"),
    }
}

// =============================================================================
// Caching
// =============================================================================

#[tokio::test]
async fn test_repeated_search_hits_cache() {
    let mock_server = MockServer::start().await;

    let feed = atom_feed(1, &[sample_entry("2403.01001v1", "Cached Paper", &["Jane Roe"])]);

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(atom_response(feed))
        .expect(1) // second search must not reach the mock
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let query = SearchQuery::keyword("cached");

    let first = client.search(&query).await.unwrap();
    let second = client.search(&query).await.unwrap();

    assert_eq!(first.papers.len(), 1);
    assert_eq!(second.papers.len(), 1);
    assert_eq!(second.papers[0].title, "Cached Paper");
}

#[tokio::test]
async fn test_different_queries_are_cached_separately() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:first"))
        .respond_with(atom_response(atom_feed(
            1,
            &[sample_entry("1111.00001v1", "First", &["A"])],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "all:second"))
        .respond_with(atom_response(atom_feed(
            1,
            &[sample_entry("2222.00002v1", "Second", &["B"])],
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);

    let first = client.search(&SearchQuery::keyword("first")).await.unwrap();
    let second = client.search(&SearchQuery::keyword("second")).await.unwrap();

    assert_eq!(first.papers[0].title, "First");
    assert_eq!(second.papers[0].title, "Second");
}

// =============================================================================
// Fetch by id
// =============================================================================

#[tokio::test]
async fn test_get_by_ids_filters_blank_placeholders() {
    let mock_server = MockServer::start().await;

    // Unknown ids come back as entries with an empty title
    let feed = atom_feed(
        2,
        &[
            sample_entry("2403.01001v1", "Known Paper", &["Jane Roe"]),
            r#"<entry>
                <id>http://arxiv.org/abs/9999.99999</id>
                <title></title>
                <summary></summary>
            </entry>"#
                .to_string(),
        ],
    );

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("id_list", "2403.01001v1,9999.99999"))
        .respond_with(atom_response(feed))
        .mount(&mock_server)
        .await;

    let client = setup_client(&mock_server);
    let papers = client
        .get_by_ids(&["2403.01001v1".to_string(), "9999.99999".to_string()])
        .await
        .unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].title, "Known Paper");
}

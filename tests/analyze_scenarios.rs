// End-to-end analysis tests against mock origins

use std::sync::Arc;
use web_analyzer::{
    AccessibilityCache, AnalyzeError, AnalyzerConfig, HeadingCounts, HtmlVersion, LinkCache,
    PageAnalyzer,
};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helpers
// ============================================================================

async fn serve_html(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/html")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

async fn head_ok(server: &MockServer, route: &str) {
    Mock::given(method("HEAD"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200))
        .mount(server)
        .await;
}

fn analyzer() -> PageAnalyzer {
    PageAnalyzer::new(AnalyzerConfig::default()).unwrap()
}

// ============================================================================
// Scenario A: full page with internal + external link and a login form
// ============================================================================

#[tokio::test]
async fn test_scenario_a_full_page() {
    let origin = MockServer::start().await;
    let elsewhere = MockServer::start().await;

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head><title>Integration Test</title></head>
<body>
    <h1>Main</h1>
    <h2>Sub</h2>
    <a href="/">Home</a>
    <a href="{}/about">External</a>
    <form>
        <input type="text" name="user"/>
        <input type="password" name="pass"/>
    </form>
</body>
</html>"#,
        elsewhere.uri()
    );

    serve_html(&origin, "/", html).await;
    head_ok(&origin, "/").await;
    head_ok(&elsewhere, "/about").await;

    let result = analyzer().analyze(&origin.uri()).await.unwrap();

    assert_eq!(result.html_version, HtmlVersion::Html5);
    assert_eq!(result.page_title, "Integration Test");
    assert_eq!(
        result.headings,
        HeadingCounts {
            h1: 1,
            h2: 1,
            ..HeadingCounts::default()
        }
    );
    assert_eq!(result.links.total, 2);
    assert_eq!(result.links.internal, 1);
    assert_eq!(result.links.external, 1);
    assert_eq!(result.links.inaccessible, 0);
    assert!(result.links.inaccessible_urls.is_empty());
    assert!(result.contains_login_form);
}

// ============================================================================
// Scenario B: anchors without href don't count
// ============================================================================

#[tokio::test]
async fn test_scenario_b_anchor_without_href() {
    let origin = MockServer::start().await;
    serve_html(
        &origin,
        "/",
        r#"<html><body><a>Broken</a><a name="top">Top</a><a href="/ok">Ok</a></body></html>"#
            .to_string(),
    )
    .await;
    head_ok(&origin, "/ok").await;

    let result = analyzer().analyze(&origin.uri()).await.unwrap();

    assert_eq!(result.links.total, 1);
    assert_eq!(result.links.internal, 1);
    assert_eq!(result.page_title, "No title found");
    assert_eq!(result.html_version, HtmlVersion::Unknown);
}

// ============================================================================
// Scenario C: the page itself is missing
// ============================================================================

#[tokio::test]
async fn test_scenario_c_page_not_found() {
    let origin = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&origin)
        .await;

    let outcome = analyzer()
        .analyze(&format!("{}/missing", origin.uri()))
        .await;

    let err = outcome.expect_err("a 404 page must not produce a result");
    assert!(matches!(err, AnalyzeError::HttpStatus { .. }));
    assert!(err.to_string().contains("404"));
}

// ============================================================================
// Link classification
// ============================================================================

#[tokio::test]
async fn test_counts_add_up_with_broken_and_malformed_links() {
    let origin = MockServer::start().await;
    let html = r#"<!doctype html>
        <a href="/alive">alive</a>
        <a href="/dead">dead</a>
        <a href="/error">error</a>
        <a href="http://[malformed">bad</a>
        <a href="">empty</a>
    "#;
    serve_html(&origin, "/", html.to_string()).await;
    head_ok(&origin, "/alive").await;
    Mock::given(method("HEAD"))
        .and(path("/error"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&origin)
        .await;
    // "/dead" is not mounted: wiremock answers 404

    let result = analyzer().analyze(&origin.uri()).await.unwrap();
    let links = &result.links;

    assert_eq!(links.total, 4);
    assert_eq!(links.internal, 1);
    assert_eq!(links.external, 0);
    assert_eq!(links.inaccessible, 3);
    assert_eq!(links.internal + links.external + links.inaccessible, links.total);

    let mut dead = links.inaccessible_urls.clone();
    dead.sort();
    let mut expected = vec![
        format!("{}/dead", origin.uri()),
        format!("{}/error", origin.uri()),
        "http://[malformed".to_string(),
    ];
    expected.sort();
    assert_eq!(dead, expected);
}

// ============================================================================
// Cache behavior across analyses
// ============================================================================

#[tokio::test]
async fn test_second_analysis_uses_warm_cache() {
    let origin = MockServer::start().await;
    serve_html(
        &origin,
        "/",
        r#"<a href="/a">a</a><a href="/b">b</a><a href="/missing">m</a>"#.to_string(),
    )
    .await;

    for route in ["/a", "/b"] {
        Mock::given(method("HEAD"))
            .and(path(route))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&origin)
            .await;
    }
    Mock::given(method("HEAD"))
        .and(path("/missing"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&origin)
        .await;

    let analyzer = analyzer();
    let first = analyzer.analyze(&origin.uri()).await.unwrap();
    let second = analyzer.analyze(&origin.uri()).await.unwrap();

    assert_eq!(first.links, second.links);
    assert_eq!(second.links.internal, 2);
    assert_eq!(second.links.inaccessible, 1);
    // The .expect(1) mocks are verified when `origin` drops
}

#[tokio::test]
async fn test_cache_is_shared_between_analyzers() {
    let origin = MockServer::start().await;
    serve_html(&origin, "/", r#"<a href="/shared">s</a>"#.to_string()).await;
    Mock::given(method("HEAD"))
        .and(path("/shared"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&origin)
        .await;

    let cache = Arc::new(LinkCache::new(100, None));
    let one = PageAnalyzer::with_cache(AnalyzerConfig::default(), cache.clone()).unwrap();
    let two = PageAnalyzer::with_cache(AnalyzerConfig::default(), cache.clone()).unwrap();

    one.analyze(&origin.uri()).await.unwrap();
    let result = two.analyze(&origin.uri()).await.unwrap();

    assert_eq!(result.links.internal, 1);
    assert_eq!(
        cache.lookup(&format!("{}/shared", origin.uri())),
        Some(true)
    );
}

#[tokio::test]
async fn test_concurrent_analyses_of_different_pages() {
    let origin = MockServer::start().await;
    for page in 0..3 {
        let html: String = (0..15)
            .map(|i| format!(r#"<a href="/p{}/l{}">x</a>"#, page, i))
            .collect();
        serve_html(&origin, &format!("/page{}", page), html).await;
    }
    Mock::given(method("HEAD"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&origin)
        .await;

    let analyzer = analyzer();
    let targets: Vec<String> = (0..3).map(|p| format!("{}/page{}", origin.uri(), p)).collect();
    let results = futures::future::join_all(targets.iter().map(|t| analyzer.analyze(t))).await;

    for result in results {
        let result = result.unwrap();
        assert_eq!(result.links.total, 15);
        assert_eq!(result.links.internal, 15);
    }
}

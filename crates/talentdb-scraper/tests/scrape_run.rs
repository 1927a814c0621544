//! Integration tests for `scrape_profiles`.
//!
//! Uses `wiremock` to serve a listing page and profile pages locally, so no
//! real network traffic is made.

use std::time::Duration;

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use talentdb_scraper::{scrape_profiles, ScrapeSettings, ScraperError, TalentClient};

fn test_client(timeout_secs: u64) -> TalentClient {
    TalentClient::new("talentdb-test/0.1", timeout_secs).expect("failed to build test client")
}

fn settings(server: &MockServer) -> ScrapeSettings {
    ScrapeSettings {
        base_url: server.uri(),
        listing_url: format!("{}/influencers-nz", server.uri()),
        inter_request_delay_ms: 0,
    }
}

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_raw(body.to_owned(), "text/html; charset=utf-8")
}

const LISTING: &str = r#"
<html><body>
  <header id="header"><a href="/"><img src="/logo.png"></a></header>
  <main>
    <a href="/talent/ana-sports"><img src="//cdn.example.com/ana.jpg"></a>
    <a href="/talent/ben"><img src="https://cdn.example.com/ben.jpg"></a>
    <a href="/talent/cat-beauty"><img data-src="https://cdn.example.com/cat.jpg"></a>
  </main>
</body></html>
"#;

fn profile_page(name: &str, followers: &str) -> String {
    format!(
        r#"<html><body>
          <h1>{name}</h1>
          <div class="sqs-html-content">
            <p>{name} creates content.</p>
            <p><a href="https://instagram.com/{name}">Instagram</a> {followers}</p>
          </div>
        </body></html>"#
    )
}

async fn mount_listing(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/influencers-nz"))
        .respond_with(html_response(LISTING))
        .mount(server)
        .await;
}

#[tokio::test]
async fn listing_failure_aborts_run() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/influencers-nz"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let result = scrape_profiles(&test_client(5), &settings(&server)).await;
    assert!(
        matches!(result, Err(ScraperError::UnexpectedStatus { status: 503, .. })),
        "expected UnexpectedStatus(503), got: {result:?}"
    );
}

#[tokio::test]
async fn scrapes_every_profile_in_listing_order() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    for (slug, name, followers) in [
        ("ana-sports", "Ana", "1.2k"),
        ("ben", "Ben", "3,400"),
        ("cat-beauty", "Cat", "5M"),
    ] {
        Mock::given(method("GET"))
            .and(path(format!("/talent/{slug}")))
            .respond_with(html_response(&profile_page(name, followers)))
            .mount(&server)
            .await;
    }

    let outcome = scrape_profiles(&test_client(5), &settings(&server))
        .await
        .expect("scrape should succeed");

    let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Ben", "Cat"]);
    assert_eq!(outcome.summary.candidates, 3);
    assert_eq!(outcome.summary.scraped, 3);
    assert_eq!(outcome.summary.failed, 0);

    let ana = &outcome.records[0];
    assert_eq!(ana.page_url, format!("{}/talent/ana-sports", server.uri()));
    assert_eq!(ana.image_url, "https://cdn.example.com/ana.jpg");
    assert_eq!(ana.bio, "Ana creates content.");
    assert_eq!(ana.instagram_ref, "https://instagram.com/Ana");
    assert_eq!(ana.instagram_followers, "1.2k");
    assert_eq!(outcome.records[2].image_url, "https://cdn.example.com/cat.jpg");
}

#[tokio::test]
async fn failed_profile_is_skipped_and_run_continues() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("GET"))
        .and(path("/talent/ana-sports"))
        .respond_with(html_response(&profile_page("Ana", "1k")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/talent/ben"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/talent/cat-beauty"))
        .respond_with(html_response(&profile_page("Cat", "2k")))
        .mount(&server)
        .await;

    let outcome = scrape_profiles(&test_client(5), &settings(&server))
        .await
        .expect("profile failures must not abort the run");

    let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ana", "Cat"]);
    assert_eq!(outcome.summary.failed, 1);
    assert_eq!(outcome.summary.scraped, 2);
}

#[tokio::test]
async fn timed_out_profile_contributes_no_record() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("GET"))
        .and(path("/talent/ana-sports"))
        .respond_with(
            html_response(&profile_page("Ana", "1k")).set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;
    for (slug, name) in [("ben", "Ben"), ("cat-beauty", "Cat")] {
        Mock::given(method("GET"))
            .and(path(format!("/talent/{slug}")))
            .respond_with(html_response(&profile_page(name, "7k")))
            .mount(&server)
            .await;
    }

    let outcome = scrape_profiles(&test_client(1), &settings(&server))
        .await
        .expect("a timeout must not abort the run");

    let names: Vec<&str> = outcome.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Ben", "Cat"]);
    assert_eq!(outcome.summary.failed, 1);
}

#[tokio::test]
async fn profile_without_heading_still_yields_record() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    Mock::given(method("GET"))
        .respond_with(html_response("<html><body><p>under construction</p></body></html>"))
        .with_priority(10)
        .mount(&server)
        .await;

    let outcome = scrape_profiles(&test_client(5), &settings(&server))
        .await
        .expect("scrape should succeed");

    assert_eq!(outcome.records.len(), 3);
    assert!(outcome.records.iter().all(|r| r.name == "Unknown"));
}

#[tokio::test]
async fn pause_follows_failed_profiles_too() {
    let server = MockServer::start().await;
    mount_listing(&server).await;
    for slug in ["ana-sports", "ben", "cat-beauty"] {
        Mock::given(method("GET"))
            .and(path(format!("/talent/{slug}")))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;
    }

    let settings = ScrapeSettings {
        inter_request_delay_ms: 200,
        ..settings(&server)
    };
    let started = std::time::Instant::now();
    let outcome = scrape_profiles(&test_client(5), &settings)
        .await
        .expect("listing succeeded");
    let elapsed = started.elapsed();

    assert_eq!(outcome.summary.failed, 3);
    assert!(outcome.records.is_empty());
    assert!(
        elapsed >= Duration::from_millis(600),
        "expected one 200ms pause per failed profile, run took {elapsed:?}"
    );
}

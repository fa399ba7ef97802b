//! Integration tests for the HTTP fetcher
//!
//! These tests run the fetcher against wiremock servers to check the retry
//! rules: success returns at once, 403 and transport errors retry, and any
//! other error status gives up after a single request.

use async_trait::async_trait;
use sitemap_gen::config::FetcherConfig;
use sitemap_gen::crawler::{
    build_http_client, FetchResult, HttpFetcher, PageFetcher, RetryPolicy, RotatingIdentities,
    Sleeper,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use url::Url;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Records requested delays instead of waiting
#[derive(Clone, Default)]
struct RecordingSleeper {
    delays: Arc<Mutex<Vec<Duration>>>,
}

impl RecordingSleeper {
    fn delays(&self) -> Vec<Duration> {
        self.delays.lock().unwrap().clone()
    }
}

#[async_trait]
impl Sleeper for RecordingSleeper {
    async fn sleep(&self, duration: Duration) {
        self.delays.lock().unwrap().push(duration);
    }
}

const DELAY: Duration = Duration::from_secs(2);

fn create_fetcher(
    identities: &[&str],
    max_retries: u32,
    timeout_secs: u64,
) -> (HttpFetcher<RotatingIdentities, RecordingSleeper>, RecordingSleeper) {
    let config = FetcherConfig {
        request_timeout_secs: timeout_secs,
        ..FetcherConfig::default()
    };
    let client = build_http_client(&config).expect("Failed to build client");
    let sleeper = RecordingSleeper::default();
    let fetcher = HttpFetcher::new(
        client,
        RotatingIdentities::new(identities.iter().copied()),
        sleeper.clone(),
        RetryPolicy::new(max_retries, DELAY),
    );
    (fetcher, sleeper)
}

fn page_url(server: &MockServer, route: &str) -> Url {
    Url::parse(&format!("{}{}", server.uri(), route)).expect("Failed to parse mock URL")
}

#[tokio::test]
async fn test_success_returns_body_on_first_attempt() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>home</html>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/")).await;

    assert_eq!(
        result,
        FetchResult::Success {
            body: "<html>home</html>".to_string(),
            attempts: 1,
        }
    );
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_forbidden_twice_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/guarded"))
        .respond_with(ResponseTemplate::new(403))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/guarded"))
        .respond_with(ResponseTemplate::new(200).set_body_string("finally"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/guarded")).await;

    assert_eq!(
        result,
        FetchResult::Success {
            body: "finally".to_string(),
            attempts: 3,
        }
    );
    assert_eq!(sleeper.delays(), vec![DELAY, DELAY]);
}

#[tokio::test]
async fn test_server_error_is_terminal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/broken")).await;

    assert_eq!(
        result,
        FetchResult::Failed {
            status_code: 500,
            attempts: 1,
        }
    );
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_not_found_is_terminal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, _sleeper) = create_fetcher(&["TestAgent/1.0"], 5, 10);
    let body = fetcher.fetch(&page_url(&mock_server, "/gone")).await;

    assert_eq!(body, None);
}

#[tokio::test]
async fn test_non_ok_success_status_is_terminal() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/empty")).await;

    assert_eq!(
        result,
        FetchResult::Failed {
            status_code: 204,
            attempts: 1,
        }
    );
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_maximum_retry_count_does_not_overflow() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, _sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher
        .fetch_with_retries(&page_url(&mock_server, "/"), u32::MAX)
        .await;

    assert_eq!(
        result,
        FetchResult::Success {
            body: "ok".to_string(),
            attempts: 1,
        }
    );
}

#[tokio::test]
async fn test_forbidden_every_time_exhausts_retries() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locked"))
        .respond_with(ResponseTemplate::new(403))
        .expect(3)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/locked")).await;

    assert_eq!(result, FetchResult::Exhausted { attempts: 3 });
    // No wait after the final attempt
    assert_eq!(sleeper.delays().len(), 2);
}

#[tokio::test]
async fn test_explicit_retry_count_overrides_policy() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/locked"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 10);
    let result = fetcher
        .fetch_with_retries(&page_url(&mock_server, "/locked"), 0)
        .await;

    assert_eq!(result, FetchResult::Exhausted { attempts: 1 });
    assert!(sleeper.delays().is_empty());
}

#[tokio::test]
async fn test_identity_rotates_between_attempts() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "BlockedAgent/1.0"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/"))
        .and(header("user-agent", "WelcomeAgent/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string("welcome"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let (fetcher, _sleeper) = create_fetcher(&["BlockedAgent/1.0", "WelcomeAgent/2.0"], 2, 10);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/")).await;

    assert_eq!(
        result,
        FetchResult::Success {
            body: "welcome".to_string(),
            attempts: 2,
        }
    );
}

#[tokio::test]
async fn test_timeout_is_retried() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("too late")
                .set_delay(Duration::from_secs(3)),
        )
        .expect(2)
        .mount(&mock_server)
        .await;

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 1, 1);
    let result = fetcher.fetch_page(&page_url(&mock_server, "/slow")).await;

    assert_eq!(result, FetchResult::Exhausted { attempts: 2 });
    assert_eq!(sleeper.delays(), vec![DELAY]);
}

#[tokio::test]
async fn test_connection_refused_is_retried() {
    // Bind then release a port so nothing is listening on it
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let url = Url::parse(&format!("http://127.0.0.1:{}/", port)).unwrap();

    let (fetcher, sleeper) = create_fetcher(&["TestAgent/1.0"], 2, 5);
    let result = fetcher.fetch_page(&url).await;

    assert_eq!(result, FetchResult::Exhausted { attempts: 3 });
    assert_eq!(sleeper.delays().len(), 2);
}

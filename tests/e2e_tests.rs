//! End-to-end integration tests
//!
//! These tests run the complete export pipeline, including the real reqwest
//! transport, against a local mock of the Up Banking API. Each test:
//! 1. Mounts JSON fixtures from tests/fixtures/export/ on a wiremock server
//! 2. Runs the export into a temporary directory
//! 3. Compares the written CSV with the expected fixture, or checks the
//!    number of requests the server received
//!
//! Fixtures contain `{{server}}` wherever the API would return an absolute
//! URL (next links); it is replaced with the mock server's address.
//!
//! The pipeline uses a blocking HTTP client, so it runs on the blocking pool
//! while the mock server keeps serving on the async runtime.

#[cfg(test)]
mod tests {
    use rstest::rstest;
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::Duration;
    use tempfile::tempdir;
    use up_bank_export::{ExportConfig, ExportError, ExportPipeline, ExportSummary};
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FIXTURE_DIR: &str = "tests/fixtures/export";
    const TOKEN: &str = "up:yeah:test-token";
    const EMPTY_PAGE: &str = r#"{"data": [], "links": {"prev": null, "next": null}}"#;

    /// Read a fixture and substitute the mock server address
    fn fixture(name: &str, server: &MockServer) -> String {
        let path = format!("{}/{}", FIXTURE_DIR, name);
        fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path, e))
            .replace("{{server}}", &server.uri())
    }

    fn config(server: &MockServer, output: PathBuf) -> ExportConfig {
        let mut config = ExportConfig::new(format!("{}/api/v1", server.uri()), TOKEN, 2, output);
        config.retry.unavailable_delay = Duration::ZERO;
        config.retry.max_unavailable_retries = 3;
        config.timeout = Duration::from_secs(10);
        config
    }

    /// Run the pipeline on the blocking pool
    async fn run_export(config: ExportConfig) -> Result<ExportSummary, ExportError> {
        tokio::task::spawn_blocking(move || {
            ExportPipeline::from_config(config).and_then(|pipeline| pipeline.run())
        })
        .await
        .expect("export task panicked")
    }

    async fn mount_page(server: &MockServer, url_path: &str, query: (&str, &str), body: String) {
        Mock::given(method("GET"))
            .and(path(url_path))
            .and(query_param(query.0, query.1))
            .and(header("authorization", format!("Bearer {}", TOKEN).as_str()))
            .and(header("connection", "close"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    /// Mount the full account/transaction/category fixture set
    async fn mount_bank(server: &MockServer) {
        mount_page(
            server,
            "/api/v1/accounts",
            ("page[size]", "2"),
            fixture("accounts.json", server),
        )
        .await;
        mount_page(
            server,
            "/api/v1/accounts/acc-1/transactions",
            ("page[size]", "2"),
            fixture("transactions_acc-1_page1.json", server),
        )
        .await;
        mount_page(
            server,
            "/api/v1/accounts/acc-1/transactions",
            ("page[after]", "t2"),
            fixture("transactions_acc-1_page2.json", server),
        )
        .await;
        mount_page(
            server,
            "/api/v1/accounts/acc-2/transactions",
            ("page[size]", "2"),
            fixture("transactions_acc-2_page1.json", server),
        )
        .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/categories"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(fixture("categories.json", server)),
            )
            .mount(server)
            .await;
    }

    fn read(path: &Path) -> String {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read output {}: {}", path.display(), e))
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_full_export_matches_expected() {
        let server = MockServer::start().await;
        mount_bank(&server).await;

        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("UpAccountTransactions.csv");
        let categories_output = dir.path().join("UpCategories.csv");
        let mut config = config(&server, output.clone());
        config.categories_output_path = Some(categories_output.clone());

        let summary = run_export(config).await.expect("export failed");

        assert_eq!(
            summary,
            ExportSummary {
                accounts: 2,
                rows: 4,
                category_pairs: Some(4)
            }
        );

        let expected = fs::read_to_string(format!("{}/expected.csv", FIXTURE_DIR)).unwrap();
        let actual = read(&output);
        assert_eq!(
            actual, expected,
            "\n\nActual output:\n{}\n\nExpected output:\n{}\n",
            actual, expected
        );

        let expected_categories =
            fs::read_to_string(format!("{}/expected_categories.csv", FIXTURE_DIR)).unwrap();
        assert_eq!(read(&categories_output), expected_categories);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_requests_carry_only_essential_headers() {
        let server = MockServer::start().await;
        mount_bank(&server).await;

        let dir = tempdir().expect("Failed to create temp dir");
        run_export(config(&server, dir.path().join("out.csv")))
            .await
            .expect("export failed");

        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 4);
        for request in &requests {
            assert_eq!(
                request.headers.get("connection").unwrap().to_str().unwrap(),
                "close"
            );
            assert!(!request.headers.contains_key("user-agent"));
            assert!(!request.headers.contains_key("accept-encoding"));
            assert!(!request.headers.contains_key("cookie"));
        }
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_repeated_export_is_byte_identical() {
        let server = MockServer::start().await;
        mount_bank(&server).await;

        let dir = tempdir().expect("Failed to create temp dir");
        let first = dir.path().join("first.csv");
        let second = dir.path().join("second.csv");

        run_export(config(&server, first.clone())).await.unwrap();
        run_export(config(&server, second.clone())).await.unwrap();

        assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
    }

    /// A transient status served `times` times before the listing succeeds
    #[rstest]
    #[case::unprocessable_once(422, 1, 2)]
    #[case::unavailable_twice(503, 2, 3)]
    #[tokio::test(flavor = "multi_thread")]
    async fn test_transient_status_is_retried(
        #[case] status: u16,
        #[case] times: u64,
        #[case] expected_requests: usize,
    ) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts"))
            .respond_with(
                ResponseTemplate::new(status)
                    .set_body_string(format!(r#"{{"errors": [{{"status": "{}"}}]}}"#, status)),
            )
            .up_to_n_times(times)
            .with_priority(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts"))
            .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_PAGE))
            .mount(&server)
            .await;

        let dir = tempdir().expect("Failed to create temp dir");
        let summary = run_export(config(&server, dir.path().join("out.csv")))
            .await
            .expect("export failed");

        assert_eq!(summary.accounts, 0);
        let requests = server.received_requests().await.unwrap();
        assert_eq!(requests.len(), expected_requests);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unavailable_beyond_budget_fails_run() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts"))
            .respond_with(ResponseTemplate::new(503).set_body_string("{}"))
            .mount(&server)
            .await;

        let dir = tempdir().expect("Failed to create temp dir");
        let result = run_export(config(&server, dir.path().join("out.csv"))).await;

        assert_eq!(
            result,
            Err(ExportError::MissingResponse {
                endpoint: "/accounts".to_string()
            })
        );
        // First attempt plus three retries
        assert_eq!(server.received_requests().await.unwrap().len(), 4);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_error_document_exports_header_only() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/accounts"))
            .respond_with(ResponseTemplate::new(401).set_body_string(
                r#"{"errors": [{"status": "401", "title": "Not Authorized"}]}"#,
            ))
            .mount(&server)
            .await;

        let dir = tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("out.csv");
        let summary = run_export(config(&server, output.clone())).await.unwrap();

        assert_eq!(summary.rows, 0);
        assert_eq!(read(&output).lines().count(), 1);
    }
}

//! Snapshot fetcher integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures;
    use crate::{assert_err, assert_ok};
    use netmon_live::config::ServerConfig;
    use netmon_live::core::types::{MetricKind, SnapshotPayload};
    use netmon_live::client::SnapshotFetcher;
    use netmon_live::utils::error::{ErrorCategory, MonitorError};
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> SnapshotFetcher {
        let config = ServerConfig {
            base_url: server.uri(),
            request_timeout_secs: 2,
            ..ServerConfig::default()
        };
        assert_ok!(SnapshotFetcher::new(&config))
    }

    async fn serve(server: &MockServer, route: &str, response: ResponseTemplate) {
        Mock::given(method("GET"))
            .and(path(route))
            .respond_with(response)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_fetch_total_packets() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/metrics/total_packets",
            ResponseTemplate::new(200).set_body_json(fixtures::total_packets_body(42)),
        )
        .await;

        let payload = assert_ok!(fetcher_for(&server).fetch_snapshot(MetricKind::TotalPackets).await);
        assert_eq!(payload, SnapshotPayload::TotalPackets(42));
    }

    #[tokio::test]
    async fn test_fetch_sends_user_agent() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/metrics/total_packets"))
            .and(header(
                "user-agent",
                format!("netmon-live/{}", env!("CARGO_PKG_VERSION")).as_str(),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(fixtures::total_packets_body(1)))
            .expect(1)
            .mount(&server)
            .await;

        assert_ok!(fetcher_for(&server).fetch_snapshot(MetricKind::TotalPackets).await);
    }

    #[tokio::test]
    async fn test_fetch_missing_field() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/metrics/total_packets",
            ResponseTemplate::new(200).set_body_json(json!({})),
        )
        .await;

        let err = assert_err!(fetcher_for(&server).fetch_snapshot(MetricKind::TotalPackets).await);
        assert!(matches!(err, MonitorError::MissingField { .. }));
        assert_eq!(err.category(), ErrorCategory::Decode);
    }

    #[tokio::test]
    async fn test_fetch_server_error_status() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/metrics/connections",
            ResponseTemplate::new(500)
                .set_body_json(json!({"error": "Connections data not available."})),
        )
        .await;

        let err = assert_err!(fetcher_for(&server).fetch_snapshot(MetricKind::Connections).await);
        match err {
            MonitorError::Status { status, url } => {
                assert_eq!(status, 500);
                assert!(url.ends_with("/metrics/connections"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_error_body_with_ok_status() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/metrics/protocol_counts",
            ResponseTemplate::new(200).set_body_json(json!({"error": "capture not running"})),
        )
        .await;

        let err = assert_err!(
            fetcher_for(&server)
                .fetch_snapshot(MetricKind::ProtocolCounts)
                .await
        );
        assert!(matches!(err, MonitorError::Server(ref m) if m == "capture not running"));
    }

    #[tokio::test]
    async fn test_fetch_malformed_body() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/metrics/total_packets",
            ResponseTemplate::new(200).set_body_string("<html>oops</html>"),
        )
        .await;

        let err = assert_err!(fetcher_for(&server).fetch_snapshot(MetricKind::TotalPackets).await);
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn test_fetch_tables() {
        let server = MockServer::start().await;
        serve(
            &server,
            "/metrics/protocol_counts",
            ResponseTemplate::new(200).set_body_json(fixtures::protocol_counts_body()),
        )
        .await;
        serve(
            &server,
            "/metrics/connections",
            ResponseTemplate::new(200).set_body_json(fixtures::connections_body()),
        )
        .await;

        let fetcher = fetcher_for(&server);

        let SnapshotPayload::ProtocolCounts(counts) =
            assert_ok!(fetcher.fetch_snapshot(MetricKind::ProtocolCounts).await)
        else {
            panic!("wrong payload kind");
        };
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[2].protocol, "ICMP");

        let SnapshotPayload::Connections(connections) =
            assert_ok!(fetcher.fetch_snapshot(MetricKind::Connections).await)
        else {
            panic!("wrong payload kind");
        };
        assert_eq!(connections.len(), 2);
        assert_eq!(connections[1].source_domain, "N/A");
        assert_eq!(connections[0].destination_port, 443);
    }

    #[tokio::test]
    async fn test_fetch_unreachable_server() {
        let config = ServerConfig {
            base_url: "http://127.0.0.1:1".to_string(),
            request_timeout_secs: 2,
            ..ServerConfig::default()
        };
        let fetcher = assert_ok!(SnapshotFetcher::new(&config));

        let err = assert_err!(fetcher.fetch_snapshot(MetricKind::TotalPackets).await);
        assert!(err.is_transport());
        assert!(err.category().is_recoverable());
    }
}

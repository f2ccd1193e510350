//! Configuration integration tests
//!
//! Loading from YAML files and environment-style lookups, and the validation
//! rules that guard the client at startup.

#[cfg(test)]
mod tests {
    use crate::{assert_err, assert_ok};
    use netmon_live::config::{ClientConfig, Config, Validate};
    use netmon_live::utils::logging::{LogFormat, LogLevel};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(yaml: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(yaml.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_partial_yaml_fills_defaults() {
        let file = write_config(
            r#"
server:
  base_url: "https://monitor.example.com"
polling:
  interval_ms: 2500
history:
  packet_capacity: 30
logging:
  level: debug
  format: json
"#,
        );

        let config = assert_ok!(Config::from_file(file.path()).await);
        assert_eq!(config.server().base_url, "https://monitor.example.com");
        assert_eq!(config.polling().interval_ms, 2500);
        assert!(config.polling().fetch_on_start);
        assert_eq!(config.history().packet_capacity, 30);
        assert_eq!(config.history().rate_capacity, 60);
        assert_eq!(config.channel().reconnect_delay_ms, 5000);
        assert_eq!(config.logging().level, LogLevel::Debug);
        assert_eq!(config.logging().format, LogFormat::Json);
        assert_eq!(
            assert_ok!(config.server().updates_url()).as_str(),
            "wss://monitor.example.com/ws/updates"
        );
    }

    #[tokio::test]
    async fn test_zero_poll_interval_rejected_at_load() {
        let file = write_config(
            r#"
polling:
  enabled: true
  interval_ms: 0
"#,
        );

        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Poll interval"));
    }

    #[tokio::test]
    async fn test_unparseable_yaml_is_config_error() {
        let file = write_config("server: [unterminated");
        let err = assert_err!(Config::from_file(file.path()).await);
        assert!(err.to_string().contains("Failed to parse config"));
    }

    #[tokio::test]
    async fn test_env_overrides_file_settings() {
        let file = write_config(
            r#"
polling:
  enabled: false
  interval_ms: 2000
history:
  packet_capacity: 30
"#,
        );
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NETMON_POLL_ENABLED", "true"),
            ("NETMON_POLL_INTERVAL_MS", "5000"),
        ]);

        let config = assert_ok!(
            Config::load_with(Some(file.path()), |key| vars.get(key).map(|v| v.to_string())).await
        );

        assert!(config.polling().enabled);
        assert_eq!(config.polling().interval_ms, 5000);
        assert_eq!(config.history().packet_capacity, 30);
    }

    #[tokio::test]
    async fn test_env_can_repair_file_before_validation() {
        let file = write_config("channel:\n  reconnect_delay_ms: 0\n");

        let broken = Config::load_with(Some(file.path()), |_| None).await;
        assert!(broken.is_err());

        let config = assert_ok!(
            Config::load_with(Some(file.path()), |key| {
                (key == "NETMON_RECONNECT_DELAY_MS").then(|| "1500".to_string())
            })
            .await
        );
        assert_eq!(config.channel().reconnect_delay_ms, 1500);
    }

    #[test]
    fn test_env_lookup_overrides() {
        let vars: HashMap<&str, &str> = HashMap::from([
            ("NETMON_SERVER_URL", "http://10.1.2.3:9000"),
            ("NETMON_POLL_ENABLED", "false"),
            ("NETMON_RECONNECT_DELAY_MS", "1500"),
            ("NETMON_HISTORY_CAPACITY", "30"),
        ]);

        let config = assert_ok!(ClientConfig::from_vars(|key| vars
            .get(key)
            .map(|v| v.to_string())));

        assert_eq!(config.server.base_url, "http://10.1.2.3:9000");
        assert!(!config.polling.enabled);
        assert_eq!(config.channel.reconnect_delay_ms, 1500);
        assert_eq!(config.history.packet_capacity, 30);
        assert_eq!(config.history.rate_capacity, 30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_lookup_rejects_garbage() {
        let result = ClientConfig::from_vars(|key| {
            (key == "NETMON_POLL_INTERVAL_MS").then(|| "soon".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_rules() {
        let mut config = ClientConfig::default();
        assert!(config.validate().is_ok());

        config.channel.reconnect_delay_ms = 0;
        assert!(assert_err!(config.validate()).contains("Reconnect delay"));

        let mut config = ClientConfig::default();
        config.server.base_url = "ftp://monitor.local".to_string();
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.server.updates_url = Some("http://monitor.local/ws".to_string());
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.history.rate_capacity = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.polling.enabled = false;
        config.polling.fetch_on_start = false;
        config.channel.enabled = false;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip_preserves_settings() {
        let mut config = Config::default();
        config.client.display.max_connection_rows = 5;
        config.client.server.updates_url = Some("ws://10.0.0.1:8000/live".to_string());

        let yaml = assert_ok!(config.to_yaml());
        let parsed: ClientConfig = assert_ok!(serde_yaml::from_str(&yaml));
        assert_eq!(parsed, config.client);
    }
}

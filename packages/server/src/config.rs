//! Server configuration (command line).

use std::time::Duration;

use clap::Parser;

/// Upper bound for either heartbeat setting (one day)
const MAX_HEARTBEAT_SECS: u64 = 86_400;

/// geo-relay server options
#[derive(Debug, Clone, Parser)]
#[command(author, version, about)]
pub struct ServerConfig {
    /// Address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3002)]
    pub port: u16,

    /// Seconds between server pings on each connection
    #[arg(
        long,
        default_value_t = 25,
        value_parser = clap::value_parser!(u64).range(1..=MAX_HEARTBEAT_SECS)
    )]
    pub ping_interval_secs: u64,

    /// Extra seconds of silence tolerated after a ping before closing
    #[arg(
        long,
        default_value_t = 20,
        value_parser = clap::value_parser!(u64).range(0..=MAX_HEARTBEAT_SECS)
    )]
    pub ping_timeout_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, default_value = "debug")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3002,
            ping_interval_secs: 25,
            ping_timeout_secs: 20,
            log_level: "debug".to_string(),
        }
    }
}

impl ServerConfig {
    /// `host:port` to bind
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn ping_interval(&self) -> Duration {
        Duration::from_secs(self.ping_interval_secs)
    }

    /// A connection silent for this long is treated as closed
    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(
            self.ping_interval_secs
                .saturating_add(self.ping_timeout_secs),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        // テスト項目: 引数なしでデフォルト値が使われる
        // when (操作):
        let config = ServerConfig::parse_from(["geo-relay-server"]);

        // then (期待する結果):
        assert_eq!(config.bind_address(), "0.0.0.0:3002");
        assert_eq!(config.ping_interval(), Duration::from_secs(25));
        assert_eq!(config.idle_timeout(), Duration::from_secs(45));
        assert_eq!(config.log_level, ServerConfig::default().log_level);
    }

    #[test]
    fn test_parse_overrides() {
        // テスト項目: 引数で各値を上書きできる
        // when (操作):
        let config = ServerConfig::parse_from([
            "geo-relay-server",
            "-H",
            "127.0.0.1",
            "--port",
            "8080",
            "--ping-interval-secs",
            "5",
            "--ping-timeout-secs",
            "1",
        ]);

        // then (期待する結果):
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.idle_timeout(), Duration::from_secs(6));
    }

    #[test]
    fn test_parse_rejects_zero_ping_interval() {
        // テスト項目: ping 間隔 0 秒は拒否される
        // when (操作):
        let result =
            ServerConfig::try_parse_from(["geo-relay-server", "--ping-interval-secs", "0"]);

        // then (期待する結果):
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rejects_oversized_heartbeat() {
        // テスト項目: 上限（1 日）を超える ping 間隔・タイムアウトは拒否される
        // given (前提条件):
        let cases = [
            ["--ping-interval-secs", "18446744073709551615"],
            ["--ping-interval-secs", "86401"],
            ["--ping-timeout-secs", "18446744073709551615"],
        ];

        for [flag, value] in cases {
            // when (操作):
            let result = ServerConfig::try_parse_from(["geo-relay-server", flag, value]);

            // then (期待する結果):
            assert!(result.is_err(), "{flag} {value} should be rejected");
        }
    }

    #[test]
    fn test_idle_timeout_saturates() {
        // テスト項目: 直接組み立てた設定でも idle_timeout はオーバーフローしない
        // given (前提条件):
        let config = ServerConfig {
            ping_interval_secs: u64::MAX,
            ping_timeout_secs: 1,
            ..ServerConfig::default()
        };

        // when (操作):
        let timeout = config.idle_timeout();

        // then (期待する結果):
        assert_eq!(timeout, Duration::from_secs(u64::MAX));
    }
}

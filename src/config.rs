//! Startup configuration.
//!
//! Everything is read from the environment once, before the terminal UI
//! starts. Use the builder methods to override values in tests.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `MOCK_INTERVIEW_API_BASE_URL` | `http://localhost:5000` |
//! | `MOCK_INTERVIEW_API_TIMEOUT` | `30000` (milliseconds) |
//! | `MOCK_INTERVIEW_LOG` | `info` |
//! | `MOCK_INTERVIEW_LOG_FILE` | `<cache dir>/mock-interview/mock-interview.log` |
//! | `MOCK_INTERVIEW_EXPORT_DIR` | document dir, else home, else `.` |

use std::path::PathBuf;
use std::time::Duration;

use crate::traits::Headers;

pub const ENV_API_BASE_URL: &str = "MOCK_INTERVIEW_API_BASE_URL";
pub const ENV_API_TIMEOUT: &str = "MOCK_INTERVIEW_API_TIMEOUT";
pub const ENV_LOG: &str = "MOCK_INTERVIEW_LOG";
pub const ENV_LOG_FILE: &str = "MOCK_INTERVIEW_LOG_FILE";
pub const ENV_EXPORT_DIR: &str = "MOCK_INTERVIEW_EXPORT_DIR";

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Seconds each question may stay on screen before it is skipped.
pub const QUESTION_TIME_LIMIT_SECS: u32 = 300;

/// Period of the backend health probe.
pub const HEALTH_CHECK_INTERVAL: Duration = Duration::from_secs(30);

/// Connection settings for the backend API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Base URL without a trailing slash
    pub base_url: String,
    /// Deadline applied to every request
    pub timeout: Duration,
    /// Headers sent with every request
    pub headers: Headers,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            headers,
        }
    }
}

impl ApiConfig {
    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Add or replace a default header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api: ApiConfig,
    /// `tracing_subscriber::EnvFilter` directive
    pub log_filter: String,
    /// Log destination; `None` disables file logging
    pub log_file: Option<PathBuf>,
    /// Countdown per question, in seconds
    pub question_time_limit: u32,
    /// Period of the health probe
    pub health_check_interval: Duration,
    /// Where exported reports are written
    pub export_dir: PathBuf,
    /// Hand exported reports to the OS viewer
    pub open_exports: bool,
    /// Rejected environment values, logged once the subscriber is up
    pub warnings: Vec<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            log_file: default_log_file(),
            question_time_limit: QUESTION_TIME_LIMIT_SECS,
            health_check_interval: HEALTH_CHECK_INTERVAL,
            export_dir: default_export_dir(),
            open_exports: true,
            warnings: Vec::new(),
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset. A timeout that is not a positive integer
    /// falls back to the default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = get(ENV_API_BASE_URL) {
            config.api = config.api.with_base_url(url.trim());
        }

        if let Some(raw) = get(ENV_API_TIMEOUT) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.api.timeout = Duration::from_millis(ms),
                _ => config
                    .warnings
                    .push(format!("Ignoring invalid {}={:?}", ENV_API_TIMEOUT, raw)),
            }
        }

        if let Some(filter) = get(ENV_LOG) {
            config.log_filter = filter;
        }

        if let Some(path) = get(ENV_LOG_FILE) {
            config.log_file = Some(PathBuf::from(path));
        }

        if let Some(dir) = get(ENV_EXPORT_DIR) {
            config.export_dir = PathBuf::from(dir);
        }

        config
    }

    pub fn with_api(mut self, api: ApiConfig) -> Self {
        self.api = api;
        self
    }

    pub fn with_question_time_limit(mut self, secs: u32) -> Self {
        self.question_time_limit = secs;
        self
    }

    pub fn with_health_check_interval(mut self, interval: Duration) -> Self {
        self.health_check_interval = interval;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }

    /// Write exports to `dir`; `open` controls the OS viewer hand-off.
    pub fn with_export(mut self, dir: impl Into<PathBuf>, open: bool) -> Self {
        self.export_dir = dir.into();
        self.open_exports = open;
        self
    }
}

fn default_log_file() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("mock-interview").join("mock-interview.log"))
}

fn default_export_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.api.timeout, Duration::from_millis(30_000));
        assert_eq!(
            config.api.headers.get("Content-Type").map(String::as_str),
            Some("application/json")
        );
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.question_time_limit, 300);
        assert_eq!(config.health_check_interval, Duration::from_secs(30));
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_API_BASE_URL, "https://interview.example.com/"),
            (ENV_API_TIMEOUT, "5000"),
            (ENV_LOG, "mock_interview=debug"),
            (ENV_LOG_FILE, "/tmp/interview.log"),
            (ENV_EXPORT_DIR, "/tmp/reports"),
        ]));
        assert_eq!(config.api.base_url, "https://interview.example.com");
        assert_eq!(config.api.timeout, Duration::from_millis(5000));
        assert_eq!(config.log_filter, "mock_interview=debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/interview.log")));
        assert_eq!(config.export_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_invalid_timeout_falls_back() {
        for raw in ["abc", "0", "-5", "  "] {
            let config = AppConfig::from_lookup(lookup_from(&[(ENV_API_TIMEOUT, raw)]));
            assert_eq!(config.api.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS), "{raw}");
        }

        let config = AppConfig::from_lookup(lookup_from(&[(ENV_API_TIMEOUT, "abc")]));
        assert_eq!(config.warnings.len(), 1);
        assert!(config.warnings[0].contains(ENV_API_TIMEOUT));
        assert!(AppConfig::from_lookup(lookup_from(&[])).warnings.is_empty());
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::new()
            .with_api(ApiConfig::default().with_header("X-Client", "tui"))
            .with_question_time_limit(10)
            .with_health_check_interval(Duration::from_secs(1))
            .with_log_file(None)
            .with_export("/tmp/out", false);
        assert_eq!(config.api.headers.len(), 2);
        assert!(!config.open_exports);
        assert_eq!(config.question_time_limit, 10);
        assert!(config.log_file.is_none());
    }

    #[test]
    #[serial_test::serial]
    fn test_from_env_reads_process_environment() {
        std::env::set_var(ENV_API_BASE_URL, "http://10.0.0.5:5000");
        let config = AppConfig::from_env();
        std::env::remove_var(ENV_API_BASE_URL);
        assert_eq!(config.api.base_url, "http://10.0.0.5:5000");
    }
}

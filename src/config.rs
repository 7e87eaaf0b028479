//! Build-time configuration and route table.
//!
//! A static wasm bundle has no process environment at runtime, so values are
//! baked in with `option_env!` when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

pub const HOME_ROUTE: &str = "/";
pub const LOGIN_ROUTE: &str = "/dang-nhap";
pub const REGISTER_ROUTE: &str = "/dang-ky";
pub const ACCOUNT_ROUTE: &str = "/tai-khoan";
pub const ADMIN_ROUTE: &str = "/admin";

/// Backend location used by the auth API helpers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: &str) -> Self {
        Self { base_url: base_url.trim_end_matches('/').to_owned() }
    }

    /// Build from `CTPN_API_BASE_URL`, falling back to the local backend.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("CTPN_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    /// Join `path` onto the base URL with exactly one `/` between them.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

/// Log level from `CTPN_LOG_LEVEL`.
pub fn log_level() -> log::Level {
    parse_log_level(option_env!("CTPN_LOG_LEVEL"))
}

fn parse_log_level(raw: Option<&str>) -> log::Level {
    raw.and_then(|v| v.trim().parse::<log::Level>().ok())
        .unwrap_or(DEFAULT_LOG_LEVEL)
}

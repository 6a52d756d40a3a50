//! Server runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into the servers. Request
//! handlers never read process-wide environment variables.

use crate::constants::{DEFAULT_GRPC_ADDR, DEFAULT_REST_ADDR};
use crate::{SirsError, SirsResult};
use std::net::SocketAddr;

/// Configuration shared by the gRPC and REST servers.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    grpc_addr: SocketAddr,
    rest_addr: SocketAddr,
    api_key: Option<String>,
    enable_reflection: bool,
    allow_unauthenticated: bool,
}

impl ServerConfig {
    /// Builds a configuration from raw (typically environment) values.
    ///
    /// `None`, empty or whitespace-only values fall back to the defaults: `0.0.0.0:50051` for
    /// gRPC, `0.0.0.0:3000` for REST, no API key, reflection disabled and unauthenticated gRPC
    /// access disabled.
    ///
    /// # Errors
    ///
    /// Returns `SirsError::InvalidConfig` if an address is not a socket address or a flag is not
    /// `true` or `false`.
    pub fn from_values(
        grpc_addr: Option<String>,
        rest_addr: Option<String>,
        api_key: Option<String>,
        enable_reflection: Option<String>,
        allow_unauthenticated: Option<String>,
    ) -> SirsResult<Self> {
        Ok(Self {
            grpc_addr: parse_addr("SIRS_ADDR", grpc_addr, DEFAULT_GRPC_ADDR)?,
            rest_addr: parse_addr("SIRS_REST_ADDR", rest_addr, DEFAULT_REST_ADDR)?,
            api_key: non_empty(api_key),
            enable_reflection: parse_flag("SIRS_ENABLE_REFLECTION", enable_reflection)?,
            allow_unauthenticated: parse_flag("SIRS_ALLOW_UNAUTHENTICATED", allow_unauthenticated)?,
        })
    }

    /// Reads `SIRS_ADDR`, `SIRS_REST_ADDR`, `API_KEY`, `SIRS_ENABLE_REFLECTION` and
    /// `SIRS_ALLOW_UNAUTHENTICATED`.
    pub fn from_env() -> SirsResult<Self> {
        Self::from_values(
            std::env::var("SIRS_ADDR").ok(),
            std::env::var("SIRS_REST_ADDR").ok(),
            std::env::var("API_KEY").ok(),
            std::env::var("SIRS_ENABLE_REFLECTION").ok(),
            std::env::var("SIRS_ALLOW_UNAUTHENTICATED").ok(),
        )
    }

    pub fn grpc_addr(&self) -> SocketAddr {
        self.grpc_addr
    }

    pub fn rest_addr(&self) -> SocketAddr {
        self.rest_addr
    }

    /// API key required by the gRPC server, if one is configured.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    pub fn enable_reflection(&self) -> bool {
        self.enable_reflection
    }

    /// Whether gRPC requests are served without an API key when `API_KEY` is unset.
    ///
    /// Has no effect once a key is configured.
    pub fn allow_unauthenticated(&self) -> bool {
        self.allow_unauthenticated
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_flag(name: &str, value: Option<String>) -> SirsResult<bool> {
    match non_empty(value).as_deref() {
        None => Ok(false),
        Some(v) if v.eq_ignore_ascii_case("true") => Ok(true),
        Some(v) if v.eq_ignore_ascii_case("false") => Ok(false),
        Some(v) => Err(SirsError::InvalidConfig(format!(
            "{name} must be true or false, got {v:?}"
        ))),
    }
}

fn parse_addr(name: &str, value: Option<String>, default: &str) -> SirsResult<SocketAddr> {
    let raw = non_empty(value).unwrap_or_else(|| default.to_string());
    raw.parse()
        .map_err(|e| SirsError::InvalidConfig(format!("{name} {raw:?} is not a socket address: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_unset() {
        let cfg = ServerConfig::from_values(None, None, None, None, None).unwrap();
        assert_eq!(cfg.grpc_addr().to_string(), DEFAULT_GRPC_ADDR);
        assert_eq!(cfg.rest_addr().to_string(), DEFAULT_REST_ADDR);
        assert_eq!(cfg.api_key(), None);
        assert!(!cfg.enable_reflection());
        assert!(!cfg.allow_unauthenticated());
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let cfg = ServerConfig::from_values(
            Some("  ".into()),
            Some(String::new()),
            Some(" ".into()),
            Some(String::new()),
            Some("  ".into()),
        )
        .unwrap();
        assert_eq!(cfg.rest_addr().to_string(), DEFAULT_REST_ADDR);
        assert_eq!(cfg.api_key(), None);
        assert!(!cfg.allow_unauthenticated());
    }

    #[test]
    fn test_explicit_values() {
        let cfg = ServerConfig::from_values(
            Some("127.0.0.1:6000".into()),
            Some("127.0.0.1:8080".into()),
            Some("secret".into()),
            Some("TRUE".into()),
            Some("false".into()),
        )
        .unwrap();
        assert_eq!(cfg.grpc_addr().port(), 6000);
        assert_eq!(cfg.rest_addr().port(), 8080);
        assert_eq!(cfg.api_key(), Some("secret"));
        assert!(cfg.enable_reflection());
        assert!(!cfg.allow_unauthenticated());
    }

    #[test]
    fn test_unauthenticated_access_is_opt_in() {
        let cfg = ServerConfig::from_values(None, None, None, None, Some("True".into())).unwrap();
        assert_eq!(cfg.api_key(), None);
        assert!(cfg.allow_unauthenticated());

        let err =
            ServerConfig::from_values(None, None, None, None, Some("1".into())).unwrap_err();
        assert!(
            matches!(err, SirsError::InvalidConfig(ref m) if m.contains("SIRS_ALLOW_UNAUTHENTICATED"))
        );
    }

    #[test]
    fn test_invalid_address_is_rejected() {
        let err = ServerConfig::from_values(None, Some("localhost".into()), None, None, None)
            .unwrap_err();
        assert!(matches!(err, SirsError::InvalidConfig(ref m) if m.contains("SIRS_REST_ADDR")));
    }

    #[test]
    fn test_invalid_reflection_flag_is_rejected() {
        let err =
            ServerConfig::from_values(None, None, None, Some("yes".into()), None).unwrap_err();
        assert!(matches!(err, SirsError::InvalidConfig(ref m) if m.contains("SIRS_ENABLE_REFLECTION")));
    }
}

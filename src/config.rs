//! Fetch configuration.
//!
//! `FetchConfig` controls how [`fetch`](crate::net::fetch) talks to the
//! network: the user agent it sends, an optional overall request timeout and
//! how many redirects it follows.
//!
//! ```rust
//! use gosub_net::config::FetchConfig;
//! use std::time::Duration;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = FetchConfig::builder()
//!     .user_agent("Gosub/0.1")
//!     .timeout(Duration::from_secs(10))
//!     .max_redirects(3)
//!     .build()?; // returns Result<FetchConfig, ConfigError>
//! assert_eq!(cfg.max_redirects, 3);
//! # Ok(()) }
//! ```
use std::time::Duration;

use crate::errors::ConfigError;

const DEFAULT_USER_AGENT: &str = "Gosub/1.0 (X11; Linux x86_64) Gecko/20250802 GosubBrowser/1.0";

#[derive(Debug, Clone)]
pub struct FetchConfig {
    /// User agent string for HTTP requests
    pub user_agent: String,
    /// Total time allowed for a request, `None` waits forever
    pub timeout: Option<Duration>,
    /// Redirects followed before giving up
    pub max_redirects: usize,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: None,
            max_redirects: 10,
        }
    }
}

impl FetchConfig {
    pub fn builder() -> FetchConfigBuilder {
        FetchConfigBuilder::default()
    }
}

#[derive(Debug, Clone, Default)]
pub struct FetchConfigBuilder {
    inner: FetchConfig,
}

impl FetchConfigBuilder {
    #[inline]
    fn map(mut self, f: impl FnOnce(&mut FetchConfig)) -> Self {
        f(&mut self.inner);
        self
    }

    pub fn user_agent<S: Into<String>>(self, ua: S) -> Self { self.map(|c| c.user_agent = ua.into()) }
    pub fn timeout(self, timeout: Duration) -> Self { self.map(|c| c.timeout = Some(timeout)) }
    pub fn max_redirects(self, n: usize) -> Self { self.map(|c| c.max_redirects = n) }

    /// Apply multiple changes in one go.
    pub fn with(self, f: impl FnOnce(&mut FetchConfig)) -> Self { self.map(f) }

    /// Validate and build the final config.
    pub fn build(self) -> Result<FetchConfig, ConfigError> {
        validate(&self.inner)?;
        Ok(self.inner)
    }
}

fn validate(c: &FetchConfig) -> Result<(), ConfigError> {
    if c.user_agent.trim().is_empty() {
        return Err(ConfigError::EmptyUserAgent);
    }
    if c.timeout == Some(Duration::ZERO) {
        return Err(ConfigError::ZeroTimeout);
    }
    Ok(())
}

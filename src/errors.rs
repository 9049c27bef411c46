#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("User agent must not be empty")]
    EmptyUserAgent,

    #[error("Timeout must be larger than zero")]
    ZeroTimeout,
}

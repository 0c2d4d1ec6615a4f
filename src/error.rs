pub type Result<T> = std::result::Result<T, ConfigError>;

/// A panel attribute that cannot produce a usable [`crate::model::PanelConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("`{key}` must be a positive integer")]
    NotPositive { key: &'static str },

    #[error("`{key}` must be at most {max}, got {value}")]
    TooLarge {
        key: &'static str,
        value: u32,
        max: u32,
    },

    #[error("`{key}` expects an integer, got `{value}`")]
    InvalidNumber { key: &'static str, value: String },

    #[error("`{key}` expects 0 or 1, got `{value}`")]
    InvalidFlag { key: &'static str, value: String },

    #[error("`switch` expects 0, 1 or 2, got `{0}`")]
    InvalidSwitchMode(String),
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable holds something that is not an absolute http(s) URL.
    ///
    /// The bot backend origin must include a scheme and host, e.g.
    /// `http://localhost:2009`. Check the `.env.example` file.
    #[error("Invalid URL in {var} '{value}': {reason}")]
    InvalidUrl {
        /// Name of the offending variable
        var: &'static str,
        /// The value as read from the environment
        value: String,
        /// Why the value was rejected
        reason: String,
    },

    /// Environment variable expected to hold a whole number of seconds.
    #[error("Invalid number in {var}: '{value}'")]
    InvalidNumber {
        /// Name of the offending variable
        var: &'static str,
        /// The value as read from the environment
        value: String,
    },
}

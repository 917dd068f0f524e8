use thiserror::Error;

/// Easy alias for error handling
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can happen while logging in. The `Display` text of each of
/// these is shown to the user as-is.
#[derive(Debug, Error)]
pub enum Error {
    /// The server answered, but not with a success. We deliberately don't
    /// keep the status or body around.
    #[error("Failed to login")]
    LoginFailed,

    /// We couldn't parse a URL, for example if the server URL was invalid.
    #[error("URL error: {0}")]
    UrlParse(#[from] url::ParseError),

    /// We couldn't talk to the server at all, for example because the
    /// connection was refused.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

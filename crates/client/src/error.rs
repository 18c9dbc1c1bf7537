/// Failures of a remote call, converted to a display string at the store
/// boundary.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connection refused, decode error, ...).
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// A non-success response from the server, with its error message.
    #[error("server returned {status}: {message}")]
    Api { status: u16, message: String },
}

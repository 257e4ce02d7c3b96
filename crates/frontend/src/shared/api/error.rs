/// Failure taxonomy shared by all fetch adapters.
///
/// Every variant is recovered at the call site with a user-facing message
/// and a retry affordance; nothing is retried automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Transport-level failure (connection refused, aborted, CORS).
    Network(String),
    /// The server answered with a non-2xx status.
    BadStatus(u16),
    /// The body arrived but does not match the expected schema.
    MalformedBody(String),
    /// Identify was invoked without a chosen image.
    NoFileSelected,
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Network error: {e}"),
            FetchError::BadStatus(status) => write!(f, "Server returned HTTP {status}"),
            FetchError::MalformedBody(e) => write!(f, "Unexpected response: {e}"),
            FetchError::NoFileSelected => write!(f, "No file selected"),
        }
    }
}

impl std::error::Error for FetchError {}

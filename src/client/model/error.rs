/// Failure of a request to the backend.
///
/// `status` is the HTTP status of a non-success response, or
/// [`ApiError::NETWORK`] when no response was received at all.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiError {
    pub status: u64,
    pub message: String,
}

impl ApiError {
    /// Status used when the request never reached the backend.
    pub const NETWORK: u64 = 0;

    pub fn network(message: impl Into<String>) -> Self {
        Self {
            status: Self::NETWORK,
            message: message.into(),
        }
    }

    /// True for transport failures, false for HTTP error statuses.
    pub fn is_network(&self) -> bool {
        self.status == Self::NETWORK
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

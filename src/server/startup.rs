use std::time::Duration;

use crate::server::error::AppError;

/// Upper bound for a single backend request.
const BACKEND_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Builds the HTTP client used for every backend request.
///
/// Redirects are not followed; the proxy only ever talks to the configured host.
///
/// # Returns
/// - `Ok(reqwest::Client)` - Configured client
/// - `Err(AppError::ReqwestErr)` - TLS backend failed to initialize
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .timeout(BACKEND_REQUEST_TIMEOUT)
        .build()?;

    Ok(client)
}

use crate::error::GatewayError;

/// Build an HTTP client that keeps the backend's session cookie between
/// requests.
///
/// No request timeout is set; the transport defaults apply.
pub fn build_client() -> Result<reqwest::Client, GatewayError> {
    let client = reqwest::Client::builder()
        .cookie_store(true)
        .user_agent(concat!("hrportal/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

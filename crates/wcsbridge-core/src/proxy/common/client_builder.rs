use std::time::Duration;

use crate::error::AppError;

/// Build the outbound HTTP client.
///
/// `timeout_secs` of `None` keeps reqwest's default (no overall timeout).
pub fn build_http_client(timeout_secs: Option<u64>) -> Result<reqwest::Client, AppError> {
    let mut builder = reqwest::Client::builder().tcp_nodelay(true);

    if let Some(secs) = timeout_secs {
        builder = builder.timeout(Duration::from_secs(secs));
    }

    Ok(builder.build()?)
}

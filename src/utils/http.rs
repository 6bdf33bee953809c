// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use crate::error::{AppError, Result};

/// Create a configured asynchronous HTTP client.
pub fn create_async_client(user_agent: &str, timeout_secs: u64) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

/// Fetch a page and return its body text.
///
/// Non-2xx responses surface as [`AppError::Status`] rather than being
/// parsed as page content.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(AppError::Status(status.as_u16()));
    }
    Ok(response.text().await?)
}

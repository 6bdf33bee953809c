// src/services/catalog.rs

//! LMS course-catalog client.
//!
//! Walks the paginated courses endpoint, following `Link: <url>;
//! rel="next"` headers until exhausted. Auth and shape problems map to
//! typed errors; there are no retries and no partial results.

use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};

use crate::error::{AppError, Result};
use crate::models::{CatalogConfig, Course};
use crate::utils::http::create_async_client;

/// Client for a user's active course list on the LMS.
pub struct CatalogClient {
    config: CatalogConfig,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Create a catalog client with the given settings.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        let client = create_async_client("thrive/0.1", config.timeout_secs)?;
        Ok(Self { config, client })
    }

    /// URL of the first catalog page.
    fn first_page_url(&self) -> String {
        format!(
            "{}/api/v1/courses?enrollment_state=active&per_page={}",
            self.config.base_url.trim_end_matches('/'),
            self.config.per_page
        )
    }

    /// Fetch every active course for the token holder, in server order.
    pub async fn fetch_courses(&self, token: &str) -> Result<Vec<Course>> {
        let mut courses = Vec::new();
        let mut next_url = Some(self.first_page_url());
        let mut pages = 0usize;

        while let Some(url) = next_url {
            let response = self
                .client
                .get(&url)
                .header(AUTHORIZATION, format!("Bearer {token}"))
                .header(ACCEPT, "application/json")
                .send()
                .await?;

            let status = response.status();
            match status.as_u16() {
                401 => return Err(AppError::Auth),
                403 => return Err(AppError::Permission),
                code if !status.is_success() => return Err(AppError::Status(code)),
                _ => {}
            }

            next_url = response
                .headers()
                .get(LINK)
                .and_then(|v| v.to_str().ok())
                .and_then(parse_next_link);

            let text = response.text().await?;
            let body: serde_json::Value = serde_json::from_str(&text)
                .map_err(|e| AppError::shape(format!("body is not valid JSON: {e}")))?;
            let serde_json::Value::Array(page) = body else {
                return Err(AppError::shape("expected a JSON array of courses"));
            };
            for item in page {
                courses.push(serde_json::from_value::<Course>(item)?);
            }
            pages += 1;
        }

        log::info!("Fetched {} courses across {} catalog pages", courses.len(), pages);
        Ok(courses)
    }
}

/// Pull the `rel="next"` URL out of a `Link` header value.
///
/// The header is a comma-separated list of `<url>; rel="value"` pairs.
/// Commas inside the angle-bracketed URLs do not occur in practice on
/// this API, so a plain split is sufficient.
pub fn parse_next_link(header: &str) -> Option<String> {
    for part in header.split(',') {
        let mut segments = part.split(';');
        let url = segments.next()?.trim();
        if !(url.starts_with('<') && url.ends_with('>')) {
            continue;
        }
        let is_next = segments.any(|param| {
            let param = param.trim();
            param == "rel=\"next\"" || param == "rel=next"
        });
        if is_next {
            return Some(url[1..url.len() - 1].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_next_link_present() {
        let header = r#"<https://lms.example.edu/api/v1/courses?page=2&per_page=100>; rel="current",<https://lms.example.edu/api/v1/courses?page=3&per_page=100>; rel="next",<https://lms.example.edu/api/v1/courses?page=1&per_page=100>; rel="first""#;
        assert_eq!(
            parse_next_link(header),
            Some("https://lms.example.edu/api/v1/courses?page=3&per_page=100".to_string())
        );
    }

    #[test]
    fn test_parse_next_link_absent() {
        let header = r#"<https://lms.example.edu/api/v1/courses?page=1>; rel="first",<https://lms.example.edu/api/v1/courses?page=1>; rel="last""#;
        assert_eq!(parse_next_link(header), None);
    }

    #[test]
    fn test_parse_next_link_tolerates_spacing() {
        let header = r#"<https://x.edu/a?page=2> ;  rel="next" , <https://x.edu/a?page=1>; rel="prev""#;
        assert_eq!(parse_next_link(header), Some("https://x.edu/a?page=2".to_string()));
    }

    #[test]
    fn test_parse_next_link_empty() {
        assert_eq!(parse_next_link(""), None);
    }

    #[test]
    fn test_first_page_url_shape() {
        let client = CatalogClient::new(CatalogConfig {
            base_url: "https://lms.example.edu/".to_string(),
            per_page: 100,
            timeout_secs: 10,
        })
        .unwrap();
        assert_eq!(
            client.first_page_url(),
            "https://lms.example.edu/api/v1/courses?enrollment_state=active&per_page=100"
        );
    }
}

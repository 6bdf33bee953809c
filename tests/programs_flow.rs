//! End-to-end programs listing: scrape -> cache -> paginate.

use httpmock::prelude::*;

use thrive::app::App;
use thrive::models::Config;

fn services_html(count: usize) -> String {
    let links: String = (0..count)
        .map(|i| format!(r#"<a href="/svc/{i}">Service {i}</a>"#))
        .collect();
    format!("<html><body><main>{links}</main></body></html>")
}

fn app_for(server: &MockServer) -> App {
    let mut config = Config::default();
    config.scraper.services_url = server.url("/services");
    config.scraper.user_agent = "thrive-test/0.1".to_string();
    App::new(config).unwrap()
}

#[tokio::test]
async fn paginates_scraped_catalog_with_defaults() {
    let server = MockServer::start();
    let page_mock = server.mock(|when, then| {
        when.method(GET).path("/services");
        then.status(200).body(services_html(45));
    });

    let app = app_for(&server);

    let page = app.programs(None, None).await.unwrap();
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 20);
    assert_eq!(page.total_items, 45);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 20);

    // Garbled params fall back silently; beyond-last clamps.
    let page = app.programs(Some("garbage"), Some("0")).await.unwrap();
    assert_eq!(page.page_number, 1);
    assert_eq!(page.page_size, 20);

    let page = app.programs(Some("99"), Some("20")).await.unwrap();
    assert_eq!(page.page_number, 3);
    assert_eq!(page.items.len(), 5);

    // All three listings came from one upstream fetch.
    page_mock.assert();
}

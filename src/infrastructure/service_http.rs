use anyhow::Context;
use log::debug;
use reqwest::Client;

use crate::{CategoryService, FetcherConfig, RawResponse, StdResult};

const USER_AGENT: &str = concat!("category-fetcher/", env!("CARGO_PKG_VERSION"));

/// Fetches the category listing over HTTP.
pub struct HttpCategoryService {
    client: Client,
    endpoint: String,
}

impl HttpCategoryService {
    /// Creates a new `HttpCategoryService` from the given configuration.
    pub fn try_new(config: &FetcherConfig) -> StdResult<Self> {
        let mut builder = Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .with_context(|| "Failed to build the HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.endpoint.to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl CategoryService for HttpCategoryService {
    async fn get_categories(&self) -> StdResult<RawResponse> {
        debug!("Requesting categories: GET {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to request categories from {}", self.endpoint))?;
        let status = response.status();
        let metadata = format!("{:?} {} {}", response.version(), status, response.url());
        let body = response
            .text()
            .await
            .with_context(|| format!("Failed to read the response body from {}", self.endpoint))?;

        Ok(RawResponse::new(
            status.as_u16(),
            &metadata,
            (!body.is_empty()).then_some(body),
        ))
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use httpmock::MockServer;
    use serde_json::json;

    use super::*;

    fn config_for(server: &MockServer) -> FetcherConfig {
        FetcherConfig::new(&server.url("/categories.php"))
    }

    #[tokio::test]
    async fn get_categories_returns_status_and_body() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/categories.php");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(json!({"categories": [{"id": 1, "name": "Books"}]}));
        });
        let service = HttpCategoryService::try_new(&config_for(&server)).unwrap();

        let response = service.get_categories().await.unwrap();

        mock.assert();
        assert_eq!(200, response.status());
        assert!(response.metadata().contains("200"));
        let body: serde_json::Value = serde_json::from_str(response.body().unwrap()).unwrap();
        assert_eq!(json!({"categories": [{"id": 1, "name": "Books"}]}), body);
    }

    #[tokio::test]
    async fn get_categories_keeps_error_status() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method("GET").path("/categories.php");
            then.status(500).body("internal error");
        });
        let service = HttpCategoryService::try_new(&config_for(&server)).unwrap();

        let response = service.get_categories().await.unwrap();

        mock.assert();
        assert_eq!(500, response.status());
        assert!(!response.is_success());
        assert_eq!(Some("internal error"), response.body());
    }

    #[tokio::test]
    async fn get_categories_maps_empty_body_to_none() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/categories.php");
            then.status(200);
        });
        let service = HttpCategoryService::try_new(&config_for(&server)).unwrap();

        let response = service.get_categories().await.unwrap();

        assert_eq!(None, response.body());
    }

    #[tokio::test]
    async fn get_categories_fails_on_timeout() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method("GET").path("/categories.php");
            then.status(200)
                .delay(Duration::from_millis(500))
                .json_body(json!({"categories": []}));
        });
        let config = FetcherConfig {
            timeout: Some(Duration::from_millis(50)),
            ..config_for(&server)
        };
        let service = HttpCategoryService::try_new(&config).unwrap();

        service
            .get_categories()
            .await
            .expect_err("Expected a timeout error");
    }
}

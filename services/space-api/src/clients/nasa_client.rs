use reqwest::Client;
use tracing::info;

use super::USER_AGENT;
use crate::config::Config;
use crate::domain::PartialImageRecord;
use crate::errors::UpstreamError;

/// Client for the NASA Astronomy Picture of the Day API.
///
/// Every call is a single attempt bounded by the configured timeout.
#[derive(Clone)]
pub struct NasaClient {
    client: Client,
    apod_url: String,
}

impl NasaClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(config.nasa_timeout())
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            apod_url: config.nasa_apod_url.clone(),
        })
    }

    /// Fetch today's picture
    pub async fn fetch_apod(&self, api_key: &str) -> Result<PartialImageRecord, UpstreamError> {
        info!("Fetching APOD from: {}", self.apod_url);

        let body = self.get(&[("api_key", api_key)]).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Fetch `count` random pictures
    pub async fn fetch_apod_batch(
        &self,
        api_key: &str,
        count: u32,
    ) -> Result<Vec<PartialImageRecord>, UpstreamError> {
        info!("Fetching {} APOD images from: {}", count, self.apod_url);

        let count = count.to_string();
        let body = self
            .get(&[("api_key", api_key), ("count", count.as_str())])
            .await?;
        Ok(serde_json::from_str(&body)?)
    }

    async fn get(&self, query: &[(&str, &str)]) -> Result<String, UpstreamError> {
        // Strip the URL from transport errors, it carries the api key
        let response = self
            .client
            .get(&self.apod_url)
            .query(query)
            .send()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| UpstreamError::Transport(e.without_url()))?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> NasaClient {
        let config = Config {
            nasa_apod_url: format!("{}/planetary/apod", server.uri()),
            nasa_timeout_secs: 1,
            ..Config::default()
        };
        NasaClient::new(&config).unwrap()
    }

    #[tokio::test]
    async fn fetch_apod_sends_key_and_parses_item() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/planetary/apod"))
            .and(query_param("api_key", "test-key"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "url": "https://apod.nasa.gov/apod/image/ngc1300.jpg",
                "title": "NGC 1300"
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let item = client_for(&mock_server).fetch_apod("test-key").await.unwrap();
        assert_eq!(item.title.as_deref(), Some("NGC 1300"));
        assert!(item.explanation.is_none());
    }

    #[tokio::test]
    async fn fetch_apod_batch_sends_count() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/planetary/apod"))
            .and(query_param("count", "2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "title": "One" },
                { "title": "Two" }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let items = client_for(&mock_server)
            .fetch_apod_batch("test-key", 2)
            .await
            .unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[1].title.as_deref(), Some("Two"));
    }

    #[tokio::test]
    async fn non_success_status_carries_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/planetary/apod"))
            .respond_with(ResponseTemplate::new(403).set_body_string("API_KEY_INVALID"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).fetch_apod("bad").await.unwrap_err();
        match err {
            UpstreamError::Status { status, body } => {
                assert_eq!(status.as_u16(), 403);
                assert_eq!(body, "API_KEY_INVALID");
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_upstream_times_out() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/planetary/apod"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({}))
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).fetch_apod("test-key").await.unwrap_err();
        match err {
            UpstreamError::Transport(e) => assert!(e.is_timeout()),
            other => panic!("expected transport error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_body_is_a_payload_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/planetary/apod"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).fetch_apod("test-key").await.unwrap_err();
        assert!(matches!(err, UpstreamError::Payload(_)));
    }
}

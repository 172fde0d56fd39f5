use tracing::info;

use crate::clients::InferenceClient;
use crate::config::Config;
use crate::domain::{build_prompt, ChatReply, GenerationParams};
use crate::errors::UpstreamError;

pub struct ChatService;

impl ChatService {
    /// Answer a message, or the canned reply when inference is unavailable.
    pub async fn respond(client: &InferenceClient, config: &Config, message: &str) -> ChatReply {
        match Self::try_respond(client, config, message).await {
            Ok(reply) => reply,
            Err(reason) => {
                reason.log("chat");
                ChatReply::canned()
            }
        }
    }

    pub async fn try_respond(
        client: &InferenceClient,
        config: &Config,
        message: &str,
    ) -> Result<ChatReply, UpstreamError> {
        let api_key = config
            .hf_key()
            .ok_or(UpstreamError::NotConfigured("Hugging Face"))?;

        let prompt = build_prompt(message);
        let text = client
            .generate(api_key, &prompt, &GenerationParams::default())
            .await?;

        info!("Chat reply generated ({} chars)", text.len());
        Ok(ChatReply::new(text.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CANNED_CHAT_REPLY;
    use serde_json::json;
    use wiremock::{
        matchers::{body_partial_json, method},
        Mock, MockServer, ResponseTemplate,
    };

    fn live_config(server: &MockServer) -> Config {
        Config {
            hf_api_key: "hf_live".to_string(),
            hf_inference_url: format!("{}/models", server.uri()),
            ..Config::default()
        }
    }

    #[tokio::test]
    async fn unconfigured_key_returns_canned_reply() {
        let config = Config::default();
        let client = InferenceClient::new(&config).unwrap();

        let reply = ChatService::respond(&client, &config, "hi").await;
        assert_eq!(reply.response, CANNED_CHAT_REPLY);
    }

    #[tokio::test]
    async fn generated_text_is_trimmed() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(body_partial_json(json!({
                "inputs": build_prompt("How far is the Moon?")
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "generated_text": "  About 384,400 km on average.\n" }
            ])))
            .expect(1)
            .mount(&mock_server)
            .await;

        let config = live_config(&mock_server);
        let client = InferenceClient::new(&config).unwrap();
        let reply = ChatService::respond(&client, &config, "How far is the Moon?").await;

        assert_eq!(reply.response, "About 384,400 km on average.");
    }

    #[tokio::test]
    async fn upstream_failure_returns_canned_reply() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Invalid credentials in Authorization header"
            })))
            .mount(&mock_server)
            .await;

        let config = live_config(&mock_server);
        let client = InferenceClient::new(&config).unwrap();
        let reply = ChatService::respond(&client, &config, "hi").await;

        assert_eq!(reply, ChatReply::canned());
    }
}

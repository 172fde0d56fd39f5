use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::USER_AGENT;
use crate::config::Config;
use crate::domain::GenerationParams;
use crate::errors::UpstreamError;

/// Client for the Hugging Face text-generation Inference API.
///
/// No request timeout is set; a call blocks until the upstream answers or
/// the connection fails.
#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct TextGenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParams,
}

#[derive(Debug, Deserialize)]
struct GeneratedText {
    generated_text: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TextGenerationResponse {
    Batch(Vec<GeneratedText>),
    Single(GeneratedText),
}

impl InferenceClient {
    pub fn new(config: &Config) -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;

        Ok(Self {
            client,
            base_url: config.hf_inference_url.trim_end_matches('/').to_string(),
            model: config.hf_model.clone(),
        })
    }

    fn model_url(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }

    /// Run one text-generation call and return the generated text.
    pub async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        params: &GenerationParams,
    ) -> Result<String, UpstreamError> {
        info!("Requesting text generation from model {}", self.model);
        debug!(prompt_len = prompt.len(), "Sending prompt to inference API");

        let response = self
            .client
            .post(self.model_url())
            .bearer_auth(api_key)
            .json(&TextGenerationRequest {
                inputs: prompt,
                parameters: params,
            })
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(UpstreamError::Status { status, body });
        }

        match serde_json::from_str::<TextGenerationResponse>(&body)? {
            TextGenerationResponse::Single(item) => Ok(item.generated_text),
            TextGenerationResponse::Batch(items) => items
                .into_iter()
                .next()
                .map(|item| item.generated_text)
                .ok_or_else(|| UpstreamError::Payload("empty generation list".to_string())),
        }
    }
}

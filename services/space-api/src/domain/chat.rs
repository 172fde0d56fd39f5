use serde::{Deserialize, Serialize};

/// Reply used both when inference is unconfigured and when it fails.
pub const CANNED_CHAT_REPLY: &str = "I'm here to help you learn about space! You can ask me about satellites, space debris, astronomy, or space exploration.";

pub const SYSTEM_PREAMBLE: &str =
    "You are a helpful AI assistant specializing in astronomy and space science.";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

impl ChatReply {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }

    pub fn canned() -> Self {
        Self::new(CANNED_CHAT_REPLY)
    }
}

/// Sampling parameters sent with every chat prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
    pub repetition_penalty: f32,
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: 200,
            temperature: 0.7,
            top_p: 0.95,
            repetition_penalty: 1.2,
            return_full_text: false,
        }
    }
}

pub fn build_prompt(message: &str) -> String {
    format!("{}\nUser: {}\nAssistant:", SYSTEM_PREAMBLE, message)
}

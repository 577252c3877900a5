//! Minimal OpenAI-compatible chat completion client.

use serde::Serialize;
use serde_json::Value;

pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
const MAX_TOKENS: u32 = 1000;

#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("response contained no message")]
    Empty,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
}

pub struct ChatClient {
    base_url: String,
    api_key: String,
    model: String,
}

impl ChatClient {
    pub fn new(base_url: &str, api_key: &str, model: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
            model: model.to_string(),
        }
    }

    /// Send `prompt` as a single user message and return the reply text.
    pub fn complete(&self, prompt: &str) -> Result<String, ProviderError> {
        let url = format!("{}/chat/completions", self.base_url);
        let text = ureq::post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .send_json(chat_request(&self.model, prompt))
            .map_err(|e| ProviderError::Http(format!("{url}: {e}")))?
            .into_body()
            .read_to_string()
            .map_err(|e| ProviderError::Http(format!("{url}: {e}")))?;
        extract_content(&text)
    }
}

fn chat_request<'a>(model: &'a str, prompt: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![ChatMessage {
            role: "user",
            content: prompt,
        }],
        max_tokens: MAX_TOKENS,
    }
}

/// `choices[0].message.content`, trimmed.
pub fn extract_content(json: &str) -> Result<String, ProviderError> {
    let v: Value =
        serde_json::from_str(json).map_err(|e| ProviderError::Parse(format!("response JSON: {e}")))?;
    let content = v["choices"][0]["message"]["content"]
        .as_str()
        .ok_or(ProviderError::Empty)?;
    Ok(content.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_shape() {
        let v = serde_json::to_value(chat_request("m1", "Fix this")).unwrap();
        assert_eq!(v["model"], "m1");
        assert_eq!(v["max_tokens"], 1000);
        assert_eq!(v["messages"][0]["role"], "user");
        assert_eq!(v["messages"][0]["content"], "Fix this");
    }

    #[test]
    fn test_extract_content() {
        let json = r#"{"choices":[{"message":{"role":"assistant","content":"  Fixed.\n"}}]}"#;
        assert_eq!(extract_content(json).unwrap(), "Fixed.");
    }

    #[test]
    fn test_extract_content_missing() {
        assert!(matches!(
            extract_content(r#"{"choices":[]}"#),
            Err(ProviderError::Empty)
        ));
        assert!(matches!(
            extract_content("<html>"),
            Err(ProviderError::Parse(_))
        ));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let c = ChatClient::new("http://localhost:8080/v1/", "k", "m");
        assert_eq!(c.base_url, "http://localhost:8080/v1");
    }
}

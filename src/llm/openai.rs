use reqwest::Client;
use serde_json::{json, Value};

pub type LlmError = Box<dyn std::error::Error + Send + Sync>;

const OPENAI_API_URL: &str = "https://api.openai.com/v1/chat/completions";
const MODEL: &str = "gpt-3.5-turbo";

const STRUCTURE_SYSTEM_PROMPT: &str = "You are a helpful chemistry assistant.";
const ANIMATION_SYSTEM_PROMPT: &str = "You are a helpful chemistry visualization assistant.";

#[derive(Clone)]
pub struct OpenAiClient {
    http: Client,
    base_url: String,
}

impl OpenAiClient {
    pub fn new() -> Self {
        Self {
            http: Client::new(),
            base_url: OPENAI_API_URL.to_string(),
        }
    }

    pub async fn request_structure(
        &self,
        api_key: &str,
        formula: &str,
    ) -> Result<String, LlmError> {
        let prompt = format!(
            "Given the formula {formula}, describe its molecular structure with approximate 3D \
             coordinates for each atom (e.g., C at (0,0,0), H at (1,1,1)). Format your response \
             as a JSON object with 'atoms' array containing objects with 'element' and 'position' \
             [x,y,z], and a 'description' field with a brief explanation of the structure."
        );
        self.chat(api_key, STRUCTURE_SYSTEM_PROMPT, &prompt).await
    }

    pub async fn request_animation(
        &self,
        api_key: &str,
        formula: &str,
    ) -> Result<String, LlmError> {
        let prompt = format!(
            "Describe a 5-step educational animation sequence for a 3D {formula} molecule (e.g., \
             rotate to show bonds, zoom into central atom, vibrate atoms). Format your response \
             as a JSON array of 5 string descriptions."
        );
        self.chat(api_key, ANIMATION_SYSTEM_PROMPT, &prompt).await
    }

    async fn chat(&self, api_key: &str, system: &str, user: &str) -> Result<String, LlmError> {
        let payload = json!({
            "model": MODEL,
            "messages": [
                {"role": "system", "content": system},
                {"role": "user", "content": user}
            ]
        });

        let response = self
            .http
            .post(&self.base_url)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(format!("HTTP {status}: {body}").into());
        }

        let value: Value = response.json().await?;
        let content =
            extract_content(&value).ok_or("missing message content in chat completion response")?;
        Ok(content.trim().to_string())
    }
}

impl Default for OpenAiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl OpenAiClient {
    pub(crate) fn with_base_url(base_url: String) -> Self {
        Self {
            http: Client::new(),
            base_url,
        }
    }
}

fn extract_content(value: &Value) -> Option<String> {
    let choice = value.get("choices")?.as_array()?.first()?;
    let text = choice.get("message")?.get("content")?.as_str()?;
    Some(text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pulls_content_from_first_choice() {
        let value: Value = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"O at (0,0,0)"}}]}"#,
        )
        .unwrap();
        assert_eq!(extract_content(&value).as_deref(), Some("O at (0,0,0)"));
    }

    #[test]
    fn missing_fields_yield_none() {
        for raw in [
            r#"{}"#,
            r#"{"choices":[]}"#,
            r#"{"choices":[{"message":{}}]}"#,
            r#"{"choices":[{"message":{"content":42}}]}"#,
        ] {
            let value: Value = serde_json::from_str(raw).unwrap();
            assert!(extract_content(&value).is_none());
        }
    }
}

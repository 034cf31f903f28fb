//! Google Gemini backend.
//!
//! Gemini has no system role; the system context is folded into the
//! first user turn. Assistant turns map to the `model` role.

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::ChatProvider;
use crate::error::AiError;
use crate::types::{ChatMessage, Role};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct GeminiProvider {
    client: Client,
    api_key: String,
    model: String,
}

impl GeminiProvider {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(REQUEST_TIMEOUT)
                .build()
                .unwrap_or_else(|_| Client::new()),
            api_key: api_key.into(),
            model: model.into(),
        }
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

fn build_contents(messages: &[ChatMessage], system_context: &str) -> Vec<Content> {
    let mut contents: Vec<Content> = Vec::with_capacity(messages.len());
    let mut pending_context = if system_context.is_empty() {
        None
    } else {
        Some(system_context)
    };

    for message in messages {
        let role = match message.role {
            Role::Assistant => "model",
            Role::System | Role::User => "user",
        };
        let text = match (role, pending_context.take()) {
            ("user", Some(context)) => format!("{}\n\n{}", context, message.content),
            (_, taken) => {
                pending_context = taken;
                message.content.clone()
            }
        };
        contents.push(Content {
            role: role.to_string(),
            parts: vec![Part { text }],
        });
    }

    // No user turn to attach the context to.
    if let Some(context) = pending_context {
        contents.insert(
            0,
            Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: context.to_string(),
                }],
            },
        );
    }

    contents
}

fn parse_reply(response: GenerateContentResponse) -> Result<String, AiError> {
    let text = response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|c| {
            c.content
                .parts
                .into_iter()
                .map(|p| p.text)
                .collect::<Vec<_>>()
                .join("")
        })
        .unwrap_or_default();

    if text.is_empty() {
        return Err(AiError::provider("Gemini response contained no candidates"));
    }
    Ok(text)
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    fn id(&self) -> &'static str {
        "gemini"
    }

    async fn send_chat(
        &self,
        messages: &[ChatMessage],
        system_context: &str,
    ) -> Result<String, AiError> {
        let url = format!("{}/{}:generateContent", BASE_URL, self.model);
        let contents = build_contents(messages, system_context);

        debug!("Sending {} turns to Gemini ({})", contents.len(), self.model);

        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest { contents })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::provider(format!(
                "Gemini returned {}: {}",
                status, body
            )));
        }

        parse_reply(response.json::<GenerateContentResponse>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_folds_into_first_user_turn() {
        let contents = build_contents(&[ChatMessage::user("How am I doing?")], "Portfolio: X");
        assert_eq!(contents.len(), 1);
        assert_eq!(contents[0].role, "user");
        assert!(contents[0].parts[0].text.starts_with("Portfolio: X"));
        assert!(contents[0].parts[0].text.ends_with("How am I doing?"));
    }

    #[test]
    fn test_assistant_maps_to_model_role() {
        let contents = build_contents(
            &[
                ChatMessage::user("hi"),
                ChatMessage::assistant("hello"),
                ChatMessage::user("how are you"),
            ],
            "",
        );
        let roles: Vec<&str> = contents.iter().map(|c| c.role.as_str()).collect();
        assert_eq!(roles, vec!["user", "model", "user"]);
    }

    #[test]
    fn test_context_without_user_turn_becomes_leading_turn() {
        let contents = build_contents(&[ChatMessage::assistant("earlier reply")], "Context");
        assert_eq!(contents.len(), 2);
        assert_eq!(contents[0].role, "user");
        assert_eq!(contents[0].parts[0].text, "Context");
    }

    #[test]
    fn test_parse_reply_joins_parts() {
        let response: GenerateContentResponse = serde_json::from_str(
            r#"{"candidates": [{"content": {"role": "model", "parts": [{"text": "Hel"}, {"text": "lo"}]}}]}"#,
        )
        .unwrap();
        assert_eq!(parse_reply(response).unwrap(), "Hello");
    }

    #[test]
    fn test_parse_reply_no_candidates() {
        let response: GenerateContentResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert!(matches!(
            parse_reply(response).unwrap_err(),
            AiError::Provider(_)
        ));
    }
}

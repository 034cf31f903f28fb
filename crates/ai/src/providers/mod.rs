//! Chat provider implementations.

mod gemini;
mod openai;

pub use gemini::GeminiProvider;
pub use openai::OpenAiProvider;

use async_trait::async_trait;

use crate::error::AiError;
use crate::types::ChatMessage;

/// A chat completion backend. The server picks one implementation at
/// startup; everything above this trait is provider-agnostic.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Stable provider identifier, e.g. `"openai"`.
    fn id(&self) -> &'static str;

    /// Send a conversation and return the assistant's reply text.
    ///
    /// `system_context` is prepended as the system prompt in whatever
    /// form the provider's API expects.
    async fn send_chat(
        &self,
        messages: &[ChatMessage],
        system_context: &str,
    ) -> Result<String, AiError>;
}

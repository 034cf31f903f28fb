//! LLM chat proxy for Folionest.
//!
//! A thin, stateless passthrough: the server hands user messages to a
//! configured `ChatProvider`, prefixed with a system context describing
//! the current portfolio. Providers are selected once at startup.

pub mod chat;
pub mod error;
pub mod providers;
pub mod types;

pub use chat::ChatService;
pub use error::AiError;
pub use providers::{ChatProvider, GeminiProvider, OpenAiProvider};
pub use types::{ChatMessage, ChatReply, Role};

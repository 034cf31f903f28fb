//! Chat orchestration: portfolio context assembly plus provider dispatch.

use log::debug;
use std::sync::Arc;

use crate::error::AiError;
use crate::providers::ChatProvider;
use crate::types::{ChatMessage, ChatReply};
use folionest_core::portfolio::{PortfolioServiceTrait, ValuationSnapshot};

pub struct ChatService {
    provider: Arc<dyn ChatProvider>,
    portfolio_service: Arc<dyn PortfolioServiceTrait>,
}

impl ChatService {
    pub fn new(
        provider: Arc<dyn ChatProvider>,
        portfolio_service: Arc<dyn PortfolioServiceTrait>,
    ) -> Self {
        Self {
            provider,
            portfolio_service,
        }
    }

    pub fn provider_id(&self) -> &'static str {
        self.provider.id()
    }

    /// Forward a conversation to the configured provider, prefixed with
    /// the current portfolio as system context.
    pub async fn send(&self, messages: &[ChatMessage]) -> Result<ChatReply, AiError> {
        if messages.is_empty() {
            return Err(AiError::invalid_input("messages must not be empty"));
        }

        let snapshot = self.portfolio_service.get_portfolio().await?;
        let context = build_portfolio_context(&snapshot);
        debug!(
            "Chat request: {} messages, provider {}",
            messages.len(),
            self.provider.id()
        );

        let content = self.provider.send_chat(messages, &context).await?;
        Ok(ChatReply {
            content,
            provider: self.provider.id().to_string(),
        })
    }
}

/// Render the snapshot as plain text for the system prompt.
pub fn build_portfolio_context(snapshot: &ValuationSnapshot) -> String {
    let mut lines = vec![
        "You are a personal finance assistant. The user's current portfolio:".to_string(),
    ];

    if snapshot.positions.is_empty() {
        lines.push("- no stock positions".to_string());
    }
    for position in &snapshot.positions {
        match (position.price, position.position_value) {
            (Some(price), Some(value)) => lines.push(format!(
                "- {}: {} shares at {} = {}",
                position.symbol, position.quantity, price, value
            )),
            _ => lines.push(format!(
                "- {}: {} shares (price unavailable)",
                position.symbol, position.quantity
            )),
        }
    }

    lines.push(format!(
        "Stock total: {}. Cash: {}. Grand total: {}.",
        snapshot.stock_total, snapshot.cash, snapshot.grand_total
    ));
    lines.join("\n")
}

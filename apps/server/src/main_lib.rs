use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;
use folionest_ai::{ChatProvider, ChatService, GeminiProvider, OpenAiProvider};
use folionest_core::holdings::{HoldingsService, HoldingsServiceTrait};
use folionest_core::portfolio::{PortfolioService, PortfolioServiceTrait};
use folionest_core::quotes::{QuoteService, QuoteServiceTrait};
use folionest_core::settings::{SettingsService, SettingsServiceTrait};
use folionest_market_data::{AlphaVantageProvider, FixtureProvider, MarketDataProvider};
use folionest_storage_sqlite::{db, HoldingsRepository, SettingsRepository};

const DEFAULT_OPENAI_MODEL: &str = "gpt-4o-mini";
const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";

pub struct AppState {
    pub holdings_service: Arc<dyn HoldingsServiceTrait>,
    pub settings_service: Arc<dyn SettingsServiceTrait>,
    pub portfolio_service: Arc<dyn PortfolioServiceTrait>,
    /// Absent when no API key is configured for the chosen chat backend;
    /// the chat endpoint then answers 502.
    pub chat_service: Option<Arc<ChatService>>,
    pub quote_service: Arc<dyn QuoteServiceTrait>,
    pub quote_provider_id: &'static str,
}

pub fn init_tracing() {
    let log_format = std::env::var("FN_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

fn build_quote_provider(config: &Config) -> Arc<dyn MarketDataProvider> {
    match &config.alpha_vantage_api_key {
        Some(key) => Arc::new(AlphaVantageProvider::new(key.clone())),
        None => {
            tracing::warn!(
                "ALPHA_VANTAGE_API_KEY not set; using fixture quotes (AAPL, MSFT, GOOGL only)"
            );
            Arc::new(FixtureProvider::new())
        }
    }
}

fn build_chat_provider(config: &Config) -> Option<Arc<dyn ChatProvider>> {
    match config.ai_provider.as_str() {
        "gemini" => config.gemini_api_key.as_ref().map(|key| {
            let model = config
                .ai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());
            Arc::new(GeminiProvider::new(key.clone(), model)) as Arc<dyn ChatProvider>
        }),
        _ => config.openai_api_key.as_ref().map(|key| {
            let model = config
                .ai_model
                .clone()
                .unwrap_or_else(|| DEFAULT_OPENAI_MODEL.to_string());
            Arc::new(OpenAiProvider::new(key.clone(), model)) as Arc<dyn ChatProvider>
        }),
    }
}

pub fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);

    let holdings_repository = Arc::new(HoldingsRepository::new(pool.clone()));
    let settings_repository = Arc::new(SettingsRepository::new(pool.clone()));

    let settings_service = Arc::new(SettingsService::new(settings_repository));
    let holdings_service = Arc::new(HoldingsService::new(holdings_repository.clone()));

    let quote_provider = build_quote_provider(config);
    let quote_provider_id = quote_provider.id();
    let quote_service: Arc<dyn QuoteServiceTrait> = Arc::new(QuoteService::new(quote_provider));

    let portfolio_service: Arc<dyn PortfolioServiceTrait> = Arc::new(PortfolioService::new(
        holdings_repository,
        settings_service.clone(),
        quote_service.clone(),
    ));

    let chat_service = match build_chat_provider(config) {
        Some(provider) => {
            tracing::info!("Chat backend: {}", provider.id());
            Some(Arc::new(ChatService::new(
                provider,
                portfolio_service.clone(),
            )))
        }
        None => {
            tracing::warn!(
                "No API key configured for chat provider '{}'; chat endpoint disabled",
                config.ai_provider
            );
            None
        }
    };

    Ok(Arc::new(AppState {
        holdings_service,
        settings_service,
        portfolio_service,
        chat_service,
        quote_service,
        quote_provider_id,
    }))
}

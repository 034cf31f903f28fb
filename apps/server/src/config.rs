//! Environment-driven server configuration.

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub db_path: String,
    /// Alpha Vantage key; the fixture quote provider is used when absent.
    pub alpha_vantage_api_key: Option<String>,
    /// Chat backend: "openai" (default) or "gemini".
    pub ai_provider: String,
    pub ai_model: Option<String>,
    pub openai_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            listen_addr: env_var("FN_LISTEN_ADDR").unwrap_or_else(|| "0.0.0.0:8080".to_string()),
            db_path: env_var("FN_DB_PATH").unwrap_or_else(|| "folionest.db".to_string()),
            alpha_vantage_api_key: env_var("ALPHA_VANTAGE_API_KEY"),
            ai_provider: env_var("FN_AI_PROVIDER").unwrap_or_else(|| "openai".to_string()),
            ai_model: env_var("FN_AI_MODEL"),
            openai_api_key: env_var("OPENAI_API_KEY"),
            gemini_api_key: env_var("GEMINI_API_KEY"),
        }
    }
}

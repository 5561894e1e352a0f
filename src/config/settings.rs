//! Settings structures for SearchDigest configuration

use crate::error::SearchError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main settings structure, loaded from settings.yml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub outgoing: OutgoingSettings,
    pub providers: ProvidersSettings,
    pub ai: AiSettings,
    pub live: LiveSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self> {
        let settings: Settings = serde_yaml::from_str(content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_env_from(|key| std::env::var(key).ok());
    }

    /// Merge with variables supplied by `lookup`
    pub fn merge_env_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("GOOGLE_API_KEY") {
            self.providers.google.api_key = Some(val);
        }
        if let Some(val) = lookup("CUSTOM_SEARCH_ENGINE_ID") {
            self.providers.google.engine_id = Some(val);
        }
        if let Some(val) = lookup("BING_API_KEY") {
            self.providers.bing.subscription_key = Some(val);
        }
        if let Some(val) = lookup("OPENAI_API_KEY") {
            self.ai.api_key = Some(val);
        }
        if let Some(val) = lookup("PERPLEXITY_API_KEY") {
            self.live.api_key = Some(val);
        }
        if let Some(val) = lookup("SEARCHDIGEST_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("SEARCHDIGEST_BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }
}

/// Server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 8888,
            bind_address: "127.0.0.1".to_string(),
        }
    }
}

/// Outgoing request settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutgoingSettings {
    /// Transport timeout in seconds, applied to every outbound call
    pub request_timeout: f64,
    /// Pool max size
    pub pool_maxsize: usize,
    /// Verify SSL certificates
    pub verify_ssl: bool,
    /// Proxy settings
    pub proxies: ProxySettings,
}

impl Default for OutgoingSettings {
    fn default() -> Self {
        Self {
            request_timeout: 10.0,
            pool_maxsize: 20,
            verify_ssl: true,
            proxies: ProxySettings::default(),
        }
    }
}

/// Proxy settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProxySettings {
    pub http: Option<String>,
    pub https: Option<String>,
    pub all: Option<String>,
}

/// Search provider settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersSettings {
    pub google: GoogleSettings,
    pub bing: BingSettings,
}

/// Google Custom Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GoogleSettings {
    /// API key
    pub api_key: Option<String>,
    /// Custom search engine id (`cx`)
    pub engine_id: Option<String>,
    /// Endpoint URL
    pub base_url: String,
    /// Maximum items requested per query
    pub page_size: u32,
}

impl Default for GoogleSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            engine_id: None,
            base_url: "https://www.googleapis.com/customsearch/v1".to_string(),
            page_size: crate::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Bing Web Search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BingSettings {
    /// `Ocp-Apim-Subscription-Key` value
    pub subscription_key: Option<String>,
    /// Endpoint URL
    pub base_url: String,
    /// Maximum items requested per query
    pub page_size: u32,
}

impl Default for BingSettings {
    fn default() -> Self {
        Self {
            subscription_key: None,
            base_url: "https://api.bing.microsoft.com/v7.0/search".to_string(),
            page_size: crate::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Generative AI settings used for digests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AiSettings {
    pub api_key: Option<String>,
    /// Base URL of an OpenAI-compatible API
    pub base_url: String,
    pub model: String,
}

impl Default for AiSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.openai.com/v1".to_string(),
            model: "gpt-4o-mini".to_string(),
        }
    }
}

/// Live summary provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LiveSettings {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for LiveSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://api.perplexity.ai".to_string(),
            model: "sonar-reasoning-pro".to_string(),
        }
    }
}

/// Credentials required by one pipeline run.
///
/// Resolved from [`Settings`] on every request so that a missing key is
/// reported before any outbound call is made.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub google_api_key: String,
    pub google_engine_id: String,
    pub bing_subscription_key: String,
    pub ai_api_key: String,
}

impl Credentials {
    pub fn resolve(settings: &Settings) -> Result<Self, SearchError> {
        Ok(Self {
            google_api_key: required(&settings.providers.google.api_key, "GOOGLE_API_KEY")?,
            google_engine_id: required(
                &settings.providers.google.engine_id,
                "CUSTOM_SEARCH_ENGINE_ID",
            )?,
            bing_subscription_key: required(
                &settings.providers.bing.subscription_key,
                "BING_API_KEY",
            )?,
            ai_api_key: required(&settings.ai.api_key, "OPENAI_API_KEY")?,
        })
    }
}

/// Credentials for the live summary endpoint
#[derive(Debug, Clone)]
pub struct LiveCredentials {
    pub api_key: String,
}

impl LiveCredentials {
    pub fn resolve(settings: &Settings) -> Result<Self, SearchError> {
        Ok(Self {
            api_key: required(&settings.live.api_key, "PERPLEXITY_API_KEY")?,
        })
    }
}

fn required(value: &Option<String>, name: &str) -> Result<String, SearchError> {
    match value.as_deref().map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        _ => Err(SearchError::Configuration(name.to_string())),
    }
}

use serde::{Deserialize, Serialize};

/// Hosted BART summarization model on the Hugging Face inference router.
pub const DEFAULT_ENDPOINT_URL: &str =
    "https://router.huggingface.co/hf-inference/models/facebook/bart-large-cnn";

/// Environment variable consulted first for the API key.
pub const DEFAULT_API_KEY_ENV: &str = "HF_API_KEY";

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub endpoint: EndpointConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub credentials: CredentialConfig,
}

/// Remote inference endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    /// Full URL of the summarization model endpoint.
    #[serde(default = "default_endpoint_url")]
    pub url: String,
    /// Total request timeout in seconds. Unset keeps the transport default.
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

/// Generation parameters sent with every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Maximum summary length in tokens (default: 130).
    #[serde(default = "default_max_length")]
    pub max_length: u32,
    /// Minimum summary length in tokens (default: 30).
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    /// Sampled decoding; `false` keeps output deterministic.
    #[serde(default)]
    pub do_sample: bool,
}

/// Limits applied to user text before dispatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Maximum accepted input length in characters (default: 5000).
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

/// Where the API key comes from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CredentialConfig {
    /// Environment variable holding the API key.
    #[serde(default = "default_api_key_env")]
    pub env_var: String,
    /// Key stored directly in the config file.
    #[serde(default)]
    pub api_key: Option<String>,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT_URL.to_string()
}

fn default_max_length() -> u32 {
    130
}

fn default_min_length() -> u32 {
    30
}

fn default_max_chars() -> usize {
    5000
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

impl EndpointConfig {
    /// Model identifier taken from the URL path, e.g. `facebook/bart-large-cnn`.
    ///
    /// Falls back to the full URL when the path has no `/models/` segment.
    pub fn model_id(&self) -> &str {
        match self.url.split_once("/models/") {
            Some((_, model)) if !model.is_empty() => model.trim_end_matches('/'),
            _ => self.url.as_str(),
        }
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            url: default_endpoint_url(),
            timeout_seconds: None,
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: default_max_length(),
            min_length: default_min_length(),
            do_sample: false,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_chars: default_max_chars(),
        }
    }
}

impl Default for CredentialConfig {
    fn default() -> Self {
        Self {
            env_var: default_api_key_env(),
            api_key: None,
        }
    }
}

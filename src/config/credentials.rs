//! Credential resolution for the inference endpoint.
//!
//! The API key is looked up through an ordered chain of [`CredentialSource`]s
//! (environment, config file, interactive prompt). The client receives the
//! chain instead of doing any lookup itself, so tests can pass a fixed key.

use thiserror::Error;

/// Wrapper for sensitive strings that prevents accidental logging.
///
/// The inner value is never exposed via Debug or Display traits.
/// Use `expose()` to access the actual value when needed for API calls.
#[derive(Clone)]
pub struct SecureString(String);

impl SecureString {
    /// Create a new secure string.
    pub fn new(value: String) -> Self {
        Self(value)
    }

    /// Expose the inner value.
    ///
    /// Use sparingly and only when actually sending to APIs.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SecureString(••••••••)")
    }
}

impl std::fmt::Display for SecureString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "••••••••")
    }
}

/// Outcome of asking one source for the API key.
#[derive(Debug, Clone)]
pub enum CredentialStatus {
    /// API key resolved successfully.
    Configured(SecureString),
    /// This source has no key.
    Unconfigured {
        /// Reason for missing configuration.
        reason: String,
    },
    /// The user asked to stop instead of entering a key.
    Cancelled,
}

impl CredentialStatus {
    /// Build a status from a raw value. Surrounding whitespace is dropped
    /// and an empty value counts as unconfigured.
    pub fn from_value(value: &str, source: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            CredentialStatus::Unconfigured {
                reason: format!("{} is empty", source),
            }
        } else {
            CredentialStatus::Configured(SecureString::new(trimmed.to_string()))
        }
    }
}

/// Errors from resolving a credential chain.
#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("API key cannot be empty ({reason})")]
    Missing { reason: String },

    #[error("Credential entry cancelled")]
    Cancelled,
}

/// Anything that can supply the API key.
pub trait CredentialSource {
    /// Short label used in logs and error messages.
    fn describe(&self) -> String;

    /// Look up the key. Called once at startup.
    fn resolve(&self) -> CredentialStatus;
}

/// Reads the key from an environment variable.
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl CredentialSource for EnvCredential {
    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }

    fn resolve(&self) -> CredentialStatus {
        match std::env::var(&self.var) {
            Ok(value) => CredentialStatus::from_value(&value, &self.describe()),
            Err(_) => CredentialStatus::Unconfigured {
                reason: format!("{} is not set", self.describe()),
            },
        }
    }
}

/// Uses the optional `api_key` from the config file.
pub struct ConfigCredential {
    api_key: Option<String>,
}

impl ConfigCredential {
    pub fn new(api_key: Option<String>) -> Self {
        Self { api_key }
    }
}

impl CredentialSource for ConfigCredential {
    fn describe(&self) -> String {
        "config file api_key".to_string()
    }

    fn resolve(&self) -> CredentialStatus {
        match &self.api_key {
            Some(value) => CredentialStatus::from_value(value, &self.describe()),
            None => CredentialStatus::Unconfigured {
                reason: "api_key is not set in config".to_string(),
            },
        }
    }
}

/// A fixed key, for tests and embedding.
pub struct StaticCredential(SecureString);

impl StaticCredential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(SecureString::new(value.into()))
    }
}

impl CredentialSource for StaticCredential {
    fn describe(&self) -> String {
        "static credential".to_string()
    }

    fn resolve(&self) -> CredentialStatus {
        CredentialStatus::from_value(self.0.expose(), &self.describe())
    }
}

/// Tries each source in order until one yields a key.
#[derive(Default)]
pub struct CredentialChain {
    sources: Vec<Box<dyn CredentialSource>>,
}

impl CredentialChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a source. Earlier sources take precedence.
    pub fn with(mut self, source: impl CredentialSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    /// Resolve to a key, or report why none was found.
    ///
    /// A `Cancelled` status stops the chain immediately.
    pub fn resolve_key(&self) -> Result<SecureString, CredentialError> {
        resolve_key(self)
    }
}

impl CredentialSource for CredentialChain {
    fn describe(&self) -> String {
        let names: Vec<String> = self.sources.iter().map(|s| s.describe()).collect();
        format!("credential chain [{}]", names.join(", "))
    }

    fn resolve(&self) -> CredentialStatus {
        let mut reasons = Vec::new();

        for source in &self.sources {
            match source.resolve() {
                CredentialStatus::Configured(key) => {
                    tracing::debug!(source = %source.describe(), "API key resolved");
                    return CredentialStatus::Configured(key);
                }
                CredentialStatus::Cancelled => {
                    tracing::debug!(source = %source.describe(), "Credential entry cancelled");
                    return CredentialStatus::Cancelled;
                }
                CredentialStatus::Unconfigured { reason } => reasons.push(reason),
            }
        }

        CredentialStatus::Unconfigured {
            reason: if reasons.is_empty() {
                "no credential sources configured".to_string()
            } else {
                reasons.join("; ")
            },
        }
    }
}

/// Resolve any single source to a key.
pub fn resolve_key(source: &dyn CredentialSource) -> Result<SecureString, CredentialError> {
    match source.resolve() {
        CredentialStatus::Configured(key) => Ok(key),
        CredentialStatus::Cancelled => Err(CredentialError::Cancelled),
        CredentialStatus::Unconfigured { reason } => Err(CredentialError::Missing { reason }),
    }
}

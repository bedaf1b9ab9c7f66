mod credentials;
mod loader;
mod types;

pub use credentials::{
    resolve_key, ConfigCredential, CredentialChain, CredentialError, CredentialSource,
    CredentialStatus, EnvCredential, SecureString, StaticCredential,
};
pub use loader::ConfigError;
pub use types::{
    Config, CredentialConfig, EndpointConfig, GenerationConfig, InputConfig,
    DEFAULT_API_KEY_ENV, DEFAULT_ENDPOINT_URL,
};

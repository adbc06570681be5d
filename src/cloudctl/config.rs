use crate::error::ConfigError;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use directories::ProjectDirs;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the config directory when set.
pub const HOME_ENV: &str = "CLOUDCTL_HOME";
pub const BINARY_NAME: &str = "cloudctl";

/// The logged-in user, as named by the access token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub name: String,
}

/// What commands may ask of the configuration.
pub trait Config {
    /// Name the tool was invoked as, for use in help and error text.
    fn binary_name(&self) -> &str;

    /// Base URL of the API.
    fn target(&self) -> &str;

    /// The bearer token without any `bearer ` prefix. Empty when logged out.
    fn access_token(&self) -> &str;

    fn skip_ssl_validation(&self) -> bool;

    fn current_user(&self) -> Result<User, ConfigError>;
}

/// On-disk settings, stored as `config.json` in the config directory.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ConfigFile {
    #[serde(default)]
    pub target: String,

    #[serde(default)]
    pub access_token: String,

    #[serde(default)]
    pub skip_ssl_validation: bool,
}

impl ConfigFile {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: ConfigFile = serde_json::from_str(&content)?;
        Ok(config)
    }
}

/// `$CLOUDCTL_HOME` if set, otherwise the platform config directory.
pub fn config_home() -> Result<PathBuf, ConfigError> {
    if let Some(home) = env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    ProjectDirs::from("com", "cloudctl", "cloudctl")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoConfigDir)
}

#[derive(Debug, Clone)]
pub struct CloudConfig {
    file: ConfigFile,
    binary_name: String,
}

impl CloudConfig {
    pub fn new(file: ConfigFile, binary_name: impl Into<String>) -> Self {
        Self {
            file,
            binary_name: binary_name.into(),
        }
    }

    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let file = ConfigFile::load(&config_dir)?;
        tracing::debug!(dir = %config_dir.as_ref().display(), target = %file.target, "loaded config");
        Ok(Self::new(file, BINARY_NAME))
    }

    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load(config_home()?)
    }
}

impl Config for CloudConfig {
    fn binary_name(&self) -> &str {
        &self.binary_name
    }

    fn target(&self) -> &str {
        self.file.target.trim_end_matches('/')
    }

    fn access_token(&self) -> &str {
        strip_bearer(&self.file.access_token)
    }

    fn skip_ssl_validation(&self) -> bool {
        self.file.skip_ssl_validation
    }

    fn current_user(&self) -> Result<User, ConfigError> {
        decode_user(self.access_token())
    }
}

fn strip_bearer(token: &str) -> &str {
    let token = token.trim();
    match token.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        _ => token,
    }
}

#[derive(Debug, Deserialize)]
struct TokenClaims {
    user_name: Option<String>,
    client_id: Option<String>,
}

/// Reads the user name out of a JWT access token's payload. Client
/// credential tokens carry no user, so their client id stands in.
fn decode_user(token: &str) -> Result<User, ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::NoAccessToken);
    }
    let payload = token
        .split('.')
        .nth(1)
        .ok_or_else(|| ConfigError::MalformedToken("expected a JWT".to_string()))?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|err| ConfigError::MalformedToken(err.to_string()))?;
    let claims: TokenClaims = serde_json::from_slice(&bytes)
        .map_err(|err| ConfigError::MalformedToken(err.to_string()))?;
    claims
        .user_name
        .or(claims.client_id)
        .map(|name| User { name })
        .ok_or_else(|| ConfigError::MalformedToken("token names no user".to_string()))
}

use thiserror::Error;

/// Failures talking to the platform API.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid API endpoint: {0}")]
    Url(#[from] url::ParseError),

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Unable to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid auth token: {description}")]
    InvalidAuthToken { description: String },

    #[error("You are not authorized to perform the requested action: {description}")]
    Forbidden { description: String },

    #[error("Resource not found: {description}")]
    ResourceNotFound { description: String },

    #[error("Unexpected response from the API ({status}): {description}")]
    UnexpectedResponse { status: u16, description: String },
}

/// Failures of actor operations.
#[derive(Error, Debug)]
pub enum ActionError {
    #[error("Organization '{name}' not found")]
    OrganizationNotFound { name: String },

    #[error("Organization name '{name}' matches multiple organizations: {}", .guids.join(", "))]
    MultipleOrganizationsFound { name: String, guids: Vec<String> },

    #[error("Quota definition '{guid}' not found")]
    QuotaDefinitionNotFound { guid: String },

    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No access token is configured")]
    NoAccessToken,

    #[error("Access token is malformed: {0}")]
    MalformedToken(String),

    #[error("Could not determine the config directory")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// What a command hands back to the CLI.
///
/// The named variants are the user-facing rewordings produced by
/// `command::shared`; everything else is carried through unchanged.
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("Organization '{name}' not found.")]
    OrganizationNotFound { name: String },

    #[error("The token provided is invalid or has expired. Refresh the access token in the config file.")]
    InvalidAuthToken,

    #[error("Not logged in. Set an access token in the {binary_name} config file.")]
    NotLoggedIn { binary_name: String },

    #[error("No API endpoint set. Set 'target' in the {binary_name} config file.")]
    NoApiSet { binary_name: String },

    #[error(transparent)]
    Action(#[from] ActionError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, CommandError>;

//! Error translation shared by commands.

use crate::error::{ActionError, ApiError, CommandError, ConfigError};

/// Rewords the actor errors that have a user-facing form; all others are
/// passed through unchanged.
pub fn handle_error(err: ActionError) -> CommandError {
    match err {
        ActionError::OrganizationNotFound { name } => CommandError::OrganizationNotFound { name },
        ActionError::Api(ApiError::InvalidAuthToken { .. }) => CommandError::InvalidAuthToken,
        other => CommandError::Action(other),
    }
}

pub fn handle_config_error(err: ConfigError, binary_name: &str) -> CommandError {
    match err {
        ConfigError::NoAccessToken => CommandError::NotLoggedIn {
            binary_name: binary_name.to_string(),
        },
        other => CommandError::Config(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_org_not_found_is_translated() {
        let err = handle_error(ActionError::OrganizationNotFound {
            name: "some-org".to_string(),
        });
        assert!(matches!(&err, CommandError::OrganizationNotFound { name } if name == "some-org"));
        assert_eq!(err.to_string(), "Organization 'some-org' not found.");
    }

    #[test]
    fn test_invalid_token_is_translated() {
        let err = handle_error(ActionError::Api(ApiError::InvalidAuthToken {
            description: "expired".to_string(),
        }));
        assert!(matches!(err, CommandError::InvalidAuthToken));
    }

    #[test]
    fn test_other_errors_pass_through() {
        let err = handle_error(ActionError::QuotaDefinitionNotFound {
            guid: "g".to_string(),
        });
        assert!(matches!(
            err,
            CommandError::Action(ActionError::QuotaDefinitionNotFound { .. })
        ));
        assert_eq!(err.to_string(), "Quota definition 'g' not found");
    }

    #[test]
    fn test_missing_token_means_not_logged_in() {
        let err = handle_config_error(ConfigError::NoAccessToken, "cloudctl");
        assert_eq!(
            err.to_string(),
            "Not logged in. Set an access token in the cloudctl config file."
        );

        let err = handle_config_error(ConfigError::MalformedToken("x".to_string()), "cloudctl");
        assert!(matches!(err, CommandError::Config(ConfigError::MalformedToken(_))));
    }
}

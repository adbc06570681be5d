use super::{ActionReply, Actor};
use crate::ccv2::CloudController;
use crate::error::{ActionError, ApiError};
use crate::model::QuotaDefinition;

impl<C: CloudController> Actor<C> {
    pub fn get_quota_definition(&self, guid: &str) -> ActionReply<QuotaDefinition> {
        tracing::debug!(guid, "fetching quota definition");
        self.client
            .get_quota_definition(guid)
            .map_err(|err| match err {
                ApiError::ResourceNotFound { .. } => ActionError::QuotaDefinitionNotFound {
                    guid: guid.to_string(),
                },
                other => other.into(),
            })
    }
}

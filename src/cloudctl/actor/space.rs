use super::{ActionReply, Actor};
use crate::ccv2::CloudController;
use crate::error::ActionError;
use crate::model::{Space, SpaceQuotaDefinition};

impl<C: CloudController> Actor<C> {
    pub fn get_organization_spaces(&self, org_guid: &str) -> ActionReply<Vec<Space>> {
        tracing::debug!(org_guid, "listing spaces");
        self.client
            .get_organization_spaces(org_guid)
            .map_err(ActionError::from)
    }

    pub fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> ActionReply<Vec<SpaceQuotaDefinition>> {
        tracing::debug!(org_guid, "listing space quota definitions");
        self.client
            .get_organization_space_quota_definitions(org_guid)
            .map_err(ActionError::from)
    }
}

use super::{ActionReply, Actor};
use crate::ccv2::CloudController;
use crate::error::ActionError;
use crate::model::Organization;
use crate::reply::Reply;

impl<C: CloudController> Actor<C> {
    /// Looks up the single organization called `name`.
    pub fn get_organization_by_name(&self, name: &str) -> ActionReply<Organization> {
        tracing::debug!(org = name, "looking up organization");
        Reply::collect(|warnings| {
            let mut orgs = self
                .client
                .get_organizations_by_name(name)
                .collect_into(warnings)?;
            match orgs.len() {
                0 => Err(ActionError::OrganizationNotFound {
                    name: name.to_string(),
                }),
                1 => Ok(orgs.remove(0)),
                _ => Err(ActionError::MultipleOrganizationsFound {
                    name: name.to_string(),
                    guids: orgs.into_iter().map(|org| org.guid).collect(),
                }),
            }
        })
    }
}

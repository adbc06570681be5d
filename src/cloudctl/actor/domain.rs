use super::{ActionReply, Actor};
use crate::ccv2::CloudController;
use crate::reply::Reply;

impl<C: CloudController> Actor<C> {
    /// Names of every domain usable by the organization: shared domains first,
    /// then the organization's private domains, each in server order.
    pub fn get_organization_domain_names(&self, org_guid: &str) -> ActionReply<Vec<String>> {
        tracing::debug!(org_guid, "listing domains");
        Reply::collect(|warnings| {
            let shared = self.client.get_shared_domains().collect_into(warnings)?;
            let private = self
                .client
                .get_organization_private_domains(org_guid)
                .collect_into(warnings)?;
            Ok(shared
                .into_iter()
                .chain(private)
                .map(|domain| domain.name)
                .collect())
        })
    }
}

//! In-memory [`CloudController`] for tests.
//!
//! Seed it with resources, per-endpoint warnings and per-endpoint failures;
//! it answers the way the HTTP client would.

use super::{error_for_status, ApiReply, CloudController};
use crate::model::{
    Domain, DomainKind, Organization, QuotaDefinition, Space, SpaceQuotaDefinition, Warnings,
};
use crate::reply::Reply;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Organizations,
    SharedDomains,
    PrivateDomains,
    QuotaDefinition,
    Spaces,
    SpaceQuotaDefinitions,
}

#[derive(Debug, Default)]
pub struct InMemoryCloudController {
    organizations: Vec<Organization>,
    shared_domains: Vec<Domain>,
    private_domains: HashMap<String, Vec<Domain>>,
    quota_definitions: HashMap<String, QuotaDefinition>,
    spaces: HashMap<String, Vec<Space>>,
    space_quota_definitions: HashMap<String, Vec<SpaceQuotaDefinition>>,
    warnings: HashMap<Endpoint, Warnings>,
    failures: HashMap<Endpoint, u16>,
}

impl InMemoryCloudController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_organization(mut self, guid: &str, name: &str, quota_guid: &str) -> Self {
        self.organizations.push(Organization {
            guid: guid.to_string(),
            name: name.to_string(),
            quota_definition_guid: quota_guid.to_string(),
        });
        self
    }

    pub fn with_shared_domain(mut self, name: &str) -> Self {
        self.shared_domains.push(domain(name, DomainKind::Shared));
        self
    }

    pub fn with_private_domain(mut self, org_guid: &str, name: &str) -> Self {
        self.private_domains
            .entry(org_guid.to_string())
            .or_default()
            .push(domain(name, DomainKind::Private));
        self
    }

    pub fn with_quota_definition(mut self, guid: &str, quota: QuotaDefinition) -> Self {
        self.quota_definitions.insert(guid.to_string(), quota);
        self
    }

    pub fn with_space(mut self, org_guid: &str, name: &str) -> Self {
        self.spaces.entry(org_guid.to_string()).or_default().push(Space {
            guid: format!("{}-guid", name),
            name: name.to_string(),
        });
        self
    }

    pub fn with_space_quota_definition(mut self, org_guid: &str, name: &str) -> Self {
        self.space_quota_definitions
            .entry(org_guid.to_string())
            .or_default()
            .push(SpaceQuotaDefinition {
                guid: format!("{}-guid", name),
                name: name.to_string(),
            });
        self
    }

    /// Warnings returned by every call to `endpoint`, failed or not.
    pub fn with_warnings(mut self, endpoint: Endpoint, warnings: &[&str]) -> Self {
        self.warnings.insert(
            endpoint,
            warnings.iter().map(|warning| warning.to_string()).collect(),
        );
        self
    }

    /// Makes every call to `endpoint` fail as if the server answered `status`.
    pub fn failing(mut self, endpoint: Endpoint, status: u16) -> Self {
        self.failures.insert(endpoint, status);
        self
    }

    fn respond<T>(&self, endpoint: Endpoint, value: impl FnOnce() -> Option<T>) -> ApiReply<T> {
        let warnings = self.warnings.get(&endpoint).cloned().unwrap_or_default();
        if let Some(status) = self.failures.get(&endpoint) {
            let description = format!("{:?} failed", endpoint);
            return Reply::err(error_for_status(*status, description), warnings);
        }
        match value() {
            Some(value) => Reply::ok(value, warnings),
            None => Reply::err(
                error_for_status(404, format!("{:?} not found", endpoint)),
                warnings,
            ),
        }
    }
}

fn domain(name: &str, kind: DomainKind) -> Domain {
    Domain {
        guid: format!("{}-guid", name),
        name: name.to_string(),
        kind,
    }
}

impl CloudController for InMemoryCloudController {
    fn get_organizations_by_name(&self, name: &str) -> ApiReply<Vec<Organization>> {
        self.respond(Endpoint::Organizations, || {
            Some(
                self.organizations
                    .iter()
                    .filter(|org| org.name == name)
                    .cloned()
                    .collect(),
            )
        })
    }

    fn get_shared_domains(&self) -> ApiReply<Vec<Domain>> {
        self.respond(Endpoint::SharedDomains, || Some(self.shared_domains.clone()))
    }

    fn get_organization_private_domains(&self, org_guid: &str) -> ApiReply<Vec<Domain>> {
        self.respond(Endpoint::PrivateDomains, || {
            Some(self.private_domains.get(org_guid).cloned().unwrap_or_default())
        })
    }

    fn get_quota_definition(&self, guid: &str) -> ApiReply<QuotaDefinition> {
        self.respond(Endpoint::QuotaDefinition, || {
            self.quota_definitions.get(guid).cloned()
        })
    }

    fn get_organization_spaces(&self, org_guid: &str) -> ApiReply<Vec<Space>> {
        self.respond(Endpoint::Spaces, || {
            Some(self.spaces.get(org_guid).cloned().unwrap_or_default())
        })
    }

    fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> ApiReply<Vec<SpaceQuotaDefinition>> {
        self.respond(Endpoint::SpaceQuotaDefinitions, || {
            Some(
                self.space_quota_definitions
                    .get(org_guid)
                    .cloned()
                    .unwrap_or_default(),
            )
        })
    }
}

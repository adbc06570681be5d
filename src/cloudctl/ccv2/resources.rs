//! Wire shapes of v2 responses.
//!
//! Every resource comes wrapped as `{"metadata": {"guid": ..}, "entity": {..}}`
//! and list endpoints page through `{"next_url": .., "resources": [..]}`.

use crate::model::{
    Domain, DomainKind, Limit, Organization, QuotaDefinition, Space, SpaceQuotaDefinition,
};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

#[derive(Debug, Deserialize)]
pub(crate) struct Page<E> {
    #[serde(default)]
    pub next_url: Option<String>,
    #[serde(default = "Vec::new")]
    pub resources: Vec<Resource<E>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Resource<E> {
    pub metadata: Metadata,
    pub entity: E,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Metadata {
    pub guid: String,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub error_code: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrganizationEntity {
    pub name: String,
    #[serde(default)]
    pub quota_definition_guid: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DomainEntity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpaceEntity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SpaceQuotaDefinitionEntity {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuotaDefinitionEntity {
    pub name: String,
    #[serde(deserialize_with = "limit")]
    pub memory_limit: Limit,
    #[serde(deserialize_with = "limit")]
    pub instance_memory_limit: Limit,
    #[serde(deserialize_with = "limit")]
    pub total_routes: Limit,
    #[serde(deserialize_with = "limit")]
    pub total_services: Limit,
    pub non_basic_services_allowed: bool,
    // Older controllers omit these two; absent means no limit.
    #[serde(default = "unlimited", deserialize_with = "limit")]
    pub app_instance_limit: Limit,
    #[serde(default = "unlimited", deserialize_with = "limit")]
    pub total_reserved_route_ports: Limit,
}

fn unlimited() -> Limit {
    Limit::Unlimited
}

fn limit<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Limit, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    Limit::from_wire(raw)
        .ok_or_else(|| D::Error::custom(format!("invalid limit {}: only -1 means unlimited", raw)))
}

impl Resource<DomainEntity> {
    pub(crate) fn into_domain(self, kind: DomainKind) -> Domain {
        Domain {
            guid: self.metadata.guid,
            name: self.entity.name,
            kind,
        }
    }
}

impl From<Resource<OrganizationEntity>> for Organization {
    fn from(resource: Resource<OrganizationEntity>) -> Self {
        Organization {
            guid: resource.metadata.guid,
            name: resource.entity.name,
            quota_definition_guid: resource.entity.quota_definition_guid,
        }
    }
}

impl From<Resource<SpaceEntity>> for Space {
    fn from(resource: Resource<SpaceEntity>) -> Self {
        Space {
            guid: resource.metadata.guid,
            name: resource.entity.name,
        }
    }
}

impl From<Resource<SpaceQuotaDefinitionEntity>> for SpaceQuotaDefinition {
    fn from(resource: Resource<SpaceQuotaDefinitionEntity>) -> Self {
        SpaceQuotaDefinition {
            guid: resource.metadata.guid,
            name: resource.entity.name,
        }
    }
}

impl From<Resource<QuotaDefinitionEntity>> for QuotaDefinition {
    fn from(resource: Resource<QuotaDefinitionEntity>) -> Self {
        let entity = resource.entity;
        QuotaDefinition {
            name: entity.name,
            memory_limit: entity.memory_limit,
            instance_memory_limit: entity.instance_memory_limit,
            total_routes: entity.total_routes,
            total_services: entity.total_services,
            non_basic_services_allowed: entity.non_basic_services_allowed,
            app_instance_limit: entity.app_instance_limit,
            total_reserved_route_ports: entity.total_reserved_route_ports,
        }
    }
}

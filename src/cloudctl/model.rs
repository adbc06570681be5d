//! Platform resources as the rest of the crate sees them.
//!
//! These are plain values decoded from API responses by [`crate::ccv2`]. Wire
//! quirks stop at that boundary: in particular the API's `-1` "no limit"
//! sentinel arrives here as [`Limit::Unlimited`].

use std::fmt;

/// Non-fatal advisory messages returned alongside an API result.
pub type Warnings = Vec<String>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organization {
    pub guid: String,
    pub name: String,
    pub quota_definition_guid: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Space {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SpaceQuotaDefinition {
    pub guid: String,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    Shared,
    Private,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Domain {
    pub guid: String,
    pub name: String,
    pub kind: DomainKind,
}

/// An upper bound that may be absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Unlimited,
    Max(u64),
}

impl Limit {
    /// Decodes the API encoding, where `-1` is the only spelling of "no limit".
    /// Any other negative value is invalid.
    pub fn from_wire(value: i64) -> Option<Self> {
        match value {
            -1 => Some(Limit::Unlimited),
            n => u64::try_from(n).ok().map(Limit::Max),
        }
    }
}

impl Default for Limit {
    fn default() -> Self {
        Limit::Max(0)
    }
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Unlimited => f.write_str("unlimited"),
            Limit::Max(n) => write!(f, "{}", n),
        }
    }
}

/// A named bundle of consumption limits applied to an organization.
///
/// Memory values are in megabytes. Any of the limits may be unlimited.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuotaDefinition {
    pub name: String,
    pub instance_memory_limit: Limit,
    pub memory_limit: Limit,
    pub total_routes: Limit,
    pub total_services: Limit,
    pub non_basic_services_allowed: bool,
    pub app_instance_limit: Limit,
    pub total_reserved_route_ports: Limit,
}

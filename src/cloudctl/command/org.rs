//! `cloudctl org ORG [--guid]`: show one organization.

use super::shared::{handle_config_error, handle_error};
use crate::actor::Actor;
use crate::ccv2::CloudController;
use crate::config::Config;
use crate::error::{ActionError, Result};
use crate::model::{Limit, Organization, QuotaDefinition, Space, SpaceQuotaDefinition};
use crate::reply::Reply;
use cloudui::Ui;
use minijinja::context;

/// The actor operations the org command depends on.
pub trait OrgActor {
    fn get_organization_by_name(&self, name: &str) -> Reply<Organization, ActionError>;
    fn get_organization_domain_names(&self, org_guid: &str) -> Reply<Vec<String>, ActionError>;
    fn get_quota_definition(&self, guid: &str) -> Reply<QuotaDefinition, ActionError>;
    fn get_organization_spaces(&self, org_guid: &str) -> Reply<Vec<Space>, ActionError>;
    fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> Reply<Vec<SpaceQuotaDefinition>, ActionError>;
}

impl<C: CloudController> OrgActor for Actor<C> {
    fn get_organization_by_name(&self, name: &str) -> Reply<Organization, ActionError> {
        Actor::get_organization_by_name(self, name)
    }

    fn get_organization_domain_names(&self, org_guid: &str) -> Reply<Vec<String>, ActionError> {
        Actor::get_organization_domain_names(self, org_guid)
    }

    fn get_quota_definition(&self, guid: &str) -> Reply<QuotaDefinition, ActionError> {
        Actor::get_quota_definition(self, guid)
    }

    fn get_organization_spaces(&self, org_guid: &str) -> Reply<Vec<Space>, ActionError> {
        Actor::get_organization_spaces(self, org_guid)
    }

    fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> Reply<Vec<SpaceQuotaDefinition>, ActionError> {
        Actor::get_organization_space_quota_definitions(self, org_guid)
    }
}

pub struct OrgCommand<A, C> {
    pub organization: String,
    pub guid: bool,
    pub actor: A,
    pub config: C,
}

impl<A: OrgActor, C: Config> OrgCommand<A, C> {
    pub fn new(organization: impl Into<String>, guid: bool, actor: A, config: C) -> Self {
        Self {
            organization: organization.into(),
            guid,
            actor,
            config,
        }
    }

    pub fn execute(&self, ui: &mut Ui) -> Result<()> {
        if self.guid {
            self.display_org_guid(ui)
        } else {
            self.display_org_summary(ui)
        }
    }

    fn display_org_guid(&self, ui: &mut Ui) -> Result<()> {
        let org = surface(ui, self.actor.get_organization_by_name(&self.organization))?;
        ui.display_text("{{ guid }}", context! { guid => org.guid });
        Ok(())
    }

    fn display_org_summary(&self, ui: &mut Ui) -> Result<()> {
        let user = self
            .config
            .current_user()
            .map_err(|err| handle_config_error(err, self.config.binary_name()))?;

        ui.display_text_with_flavor(
            "Getting info for org {{ org_name }} as {{ username }}...",
            context! { org_name => self.organization.as_str(), username => user.name },
        );
        ui.display_newline();

        let org = surface(ui, self.actor.get_organization_by_name(&self.organization))?;
        tracing::debug!(org = %org.name, guid = %org.guid, "resolved organization");

        let domain_names = surface(ui, self.actor.get_organization_domain_names(&org.guid))?;
        let quota = surface(
            ui,
            self.actor.get_quota_definition(&org.quota_definition_guid),
        )?;

        let spaces = surface(ui, self.actor.get_organization_spaces(&org.guid))?;
        let mut space_names: Vec<String> = spaces.into_iter().map(|space| space.name).collect();
        space_names.sort();

        let space_quotas = surface(
            ui,
            self.actor
                .get_organization_space_quota_definitions(&org.guid),
        )?;
        let mut space_quota_names: Vec<String> =
            space_quotas.into_iter().map(|quota| quota.name).collect();
        space_quota_names.sort();

        ui.display_text("{{ name }}:", context! { name => org.name });
        let table = vec![
            vec![
                ui.translate_text("domains:", context! {}),
                domain_names.join(", "),
            ],
            vec![
                ui.translate_text("quota:", context! {}),
                format_quota_definition(&quota),
            ],
            vec![
                ui.translate_text("spaces:", context! {}),
                space_names.join(", "),
            ],
            vec![
                ui.translate_text("space quotas:", context! {}),
                space_quota_names.join(", "),
            ],
        ];
        ui.display_table("", &table, 3);
        ui.display_ok();

        Ok(())
    }
}

/// Shows a reply's warnings, then unwraps it, translating any failure.
fn surface<T>(ui: &mut Ui, reply: Reply<T, ActionError>) -> Result<T> {
    let (result, warnings) = reply.into_parts();
    ui.display_warnings(&warnings);
    result.map_err(handle_error)
}

/// One-line summary of a quota, e.g.
/// `default (10M memory limit, 0M instance memory limit, 10 routes, ...)`.
pub fn format_quota_definition(quota: &QuotaDefinition) -> String {
    let paid_services = if quota.non_basic_services_allowed {
        "paid services allowed"
    } else {
        "paid services disallowed"
    };

    let parts = [
        format!("{} memory limit", megabytes(quota.memory_limit)),
        format!("{} instance memory limit", megabytes(quota.instance_memory_limit)),
        format!("{} routes", quota.total_routes),
        format!("{} services", quota.total_services),
        paid_services.to_string(),
        format!("{} app instance limit", quota.app_instance_limit),
        format!("{} route ports", quota.total_reserved_route_ports),
    ];

    format!("{} ({})", quota.name, parts.join(", "))
}

fn megabytes(limit: Limit) -> String {
    match limit {
        Limit::Unlimited => limit.to_string(),
        Limit::Max(n) => format!("{}M", n),
    }
}

//! Recording fakes for command tests.

use super::org::OrgActor;
use crate::config::{Config, User};
use crate::error::{ActionError, ConfigError};
use crate::model::{Organization, QuotaDefinition, Space, SpaceQuotaDefinition};
use crate::reply::Reply;
use std::cell::{Cell, RefCell};

/// One stubbed actor method: records its argument and answers with the
/// configured reply, or an empty success when none was set.
pub struct Stub<T> {
    reply: RefCell<Option<Reply<T, ActionError>>>,
    args: RefCell<Vec<String>>,
}

impl<T> Default for Stub<T> {
    fn default() -> Self {
        Self {
            reply: RefCell::new(None),
            args: RefCell::new(Vec::new()),
        }
    }
}

impl<T: Default> Stub<T> {
    pub fn returns(&self, result: Result<T, ActionError>, warnings: &[&str]) {
        let warnings = warnings.iter().map(|w| w.to_string()).collect();
        *self.reply.borrow_mut() = Some(Reply::new(result, warnings));
    }

    pub fn call_count(&self) -> usize {
        self.args.borrow().len()
    }

    pub fn args_for_call(&self, i: usize) -> String {
        self.args.borrow()[i].clone()
    }

    fn call(&self, arg: &str) -> Reply<T, ActionError> {
        self.args.borrow_mut().push(arg.to_string());
        self.reply
            .borrow_mut()
            .take()
            .unwrap_or_else(|| Reply::ok(T::default(), Vec::new()))
    }
}

#[derive(Default)]
pub struct FakeOrgActor {
    pub get_organization_by_name: Stub<Organization>,
    pub get_organization_domain_names: Stub<Vec<String>>,
    pub get_quota_definition: Stub<QuotaDefinition>,
    pub get_organization_spaces: Stub<Vec<Space>>,
    pub get_organization_space_quota_definitions: Stub<Vec<SpaceQuotaDefinition>>,
}

impl OrgActor for FakeOrgActor {
    fn get_organization_by_name(&self, name: &str) -> Reply<Organization, ActionError> {
        self.get_organization_by_name.call(name)
    }

    fn get_organization_domain_names(&self, org_guid: &str) -> Reply<Vec<String>, ActionError> {
        self.get_organization_domain_names.call(org_guid)
    }

    fn get_quota_definition(&self, guid: &str) -> Reply<QuotaDefinition, ActionError> {
        self.get_quota_definition.call(guid)
    }

    fn get_organization_spaces(&self, org_guid: &str) -> Reply<Vec<Space>, ActionError> {
        self.get_organization_spaces.call(org_guid)
    }

    fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> Reply<Vec<SpaceQuotaDefinition>, ActionError> {
        self.get_organization_space_quota_definitions.call(org_guid)
    }
}

/// Config whose `current_user` answers with `user`, unless an error was queued.
pub struct FakeConfig {
    pub user: Option<String>,
    current_user_error: RefCell<Option<ConfigError>>,
    current_user_calls: Cell<usize>,
}

impl FakeConfig {
    pub fn logged_in(user: &str) -> Self {
        Self {
            user: Some(user.to_string()),
            current_user_error: RefCell::new(None),
            current_user_calls: Cell::new(0),
        }
    }

    pub fn logged_out() -> Self {
        Self {
            user: None,
            current_user_error: RefCell::new(None),
            current_user_calls: Cell::new(0),
        }
    }

    pub fn failing_current_user(err: ConfigError) -> Self {
        let config = Self::logged_out();
        *config.current_user_error.borrow_mut() = Some(err);
        config
    }

    pub fn current_user_call_count(&self) -> usize {
        self.current_user_calls.get()
    }
}

impl Config for FakeConfig {
    fn binary_name(&self) -> &str {
        "faceman"
    }

    fn target(&self) -> &str {
        "https://api.example.com"
    }

    fn access_token(&self) -> &str {
        ""
    }

    fn skip_ssl_validation(&self) -> bool {
        false
    }

    fn current_user(&self) -> Result<User, ConfigError> {
        self.current_user_calls.set(self.current_user_calls.get() + 1);
        if let Some(err) = self.current_user_error.borrow_mut().take() {
            return Err(err);
        }
        match &self.user {
            Some(name) => Ok(User { name: name.clone() }),
            None => Err(ConfigError::NoAccessToken),
        }
    }
}

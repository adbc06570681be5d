//! # Cloud Controller v2 Client
//!
//! Thin wrapper over the platform's v2 REST API. Each [`CloudController`]
//! method maps to one endpoint (following `next_url` across pages for list
//! endpoints) and returns an [`ApiReply`]: the decoded resources plus every
//! warning the server sent in its `X-Cf-Warnings` headers, on success and on
//! failure alike.
//!
//! Status codes map onto [`ApiError`]:
//!
//! | Status | Error                             |
//! |--------|-----------------------------------|
//! | 401    | [`ApiError::InvalidAuthToken`]    |
//! | 403    | [`ApiError::Forbidden`]           |
//! | 404    | [`ApiError::ResourceNotFound`]    |
//! | other  | [`ApiError::UnexpectedResponse`]  |
//!
//! The actor layer only sees the [`CloudController`] trait, so its tests run
//! against [`memory::InMemoryCloudController`] instead of a live server.

use crate::error::ApiError;
use crate::model::{
    Domain, DomainKind, Organization, QuotaDefinition, Space, SpaceQuotaDefinition, Warnings,
};
use crate::reply::Reply;
use percent_encoding::percent_decode_str;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use std::time::Duration;
use url::Url;

#[cfg(any(test, feature = "test_utils"))]
pub mod memory;
mod resources;

use resources::{
    DomainEntity, ErrorBody, OrganizationEntity, Page, QuotaDefinitionEntity, Resource,
    SpaceEntity, SpaceQuotaDefinitionEntity,
};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
pub const WARNINGS_HEADER: &str = "X-Cf-Warnings";

pub type ApiReply<T> = Reply<T, ApiError>;

/// The v2 endpoints this client needs.
pub trait CloudController {
    /// Organizations whose name matches exactly. Usually zero or one.
    fn get_organizations_by_name(&self, name: &str) -> ApiReply<Vec<Organization>>;

    fn get_shared_domains(&self) -> ApiReply<Vec<Domain>>;

    fn get_organization_private_domains(&self, org_guid: &str) -> ApiReply<Vec<Domain>>;

    fn get_quota_definition(&self, guid: &str) -> ApiReply<QuotaDefinition>;

    fn get_organization_spaces(&self, org_guid: &str) -> ApiReply<Vec<Space>>;

    fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> ApiReply<Vec<SpaceQuotaDefinition>>;
}

#[derive(Debug, Clone)]
pub struct ClientBuilder {
    target: Url,
    access_token: Option<String>,
    skip_ssl_validation: bool,
}

impl ClientBuilder {
    pub fn new(target: &str) -> Result<Self, ApiError> {
        Ok(Self {
            target: Url::parse(target)?,
            access_token: None,
            skip_ssl_validation: false,
        })
    }

    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.access_token = if token.is_empty() { None } else { Some(token) };
        self
    }

    pub fn skip_ssl_validation(mut self, skip: bool) -> Self {
        self.skip_ssl_validation = skip;
        self
    }

    pub fn build(self) -> Result<Client, ApiError> {
        let http = HttpClient::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(concat!("cloudctl/", env!("CARGO_PKG_VERSION")))
            .danger_accept_invalid_certs(self.skip_ssl_validation)
            .build()?;
        Ok(Client {
            base_url: self.target,
            http,
            access_token: self.access_token,
        })
    }
}

/// Blocking HTTP implementation of [`CloudController`].
pub struct Client {
    base_url: Url,
    http: HttpClient,
    access_token: Option<String>,
}

impl Client {
    pub fn builder(target: &str) -> Result<ClientBuilder, ApiError> {
        ClientBuilder::new(target)
    }

    fn url(&self, path: &str, query: &[(&str, &str)]) -> Result<Url, ApiError> {
        let mut url = self.base_url.join(path)?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    fn get_body(&self, url: &Url, warnings: &mut Warnings) -> Result<String, ApiError> {
        tracing::debug!(%url, "GET");
        let mut req = self.http.get(url.clone());
        if let Some(token) = &self.access_token {
            req = req.bearer_auth(token);
        }
        let resp = req.send()?;
        let status = resp.status();
        warnings.extend(parse_warnings(resp.headers()));
        let body = resp.text()?;
        tracing::debug!(%url, status = status.as_u16(), "response");
        if status.is_success() {
            Ok(body)
        } else {
            Err(parse_error(status, &body))
        }
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        url: &Url,
        warnings: &mut Warnings,
    ) -> Result<T, ApiError> {
        let body = self.get_body(url, warnings)?;
        serde_json::from_str(&body).map_err(|source| ApiError::Decode {
            url: url.to_string(),
            source,
        })
    }

    fn get_resource<E, T>(&self, path: &str) -> ApiReply<T>
    where
        E: DeserializeOwned,
        T: From<Resource<E>>,
    {
        Reply::collect(|warnings| {
            let url = self.url(path, &[])?;
            let resource: Resource<E> = self.get_json(&url, warnings)?;
            Ok(resource.into())
        })
    }

    /// Walks every page of a list endpoint. A `next_url` that points back at
    /// the page just read ends the walk.
    fn get_paginated<E, T>(&self, path: &str, query: &[(&str, &str)]) -> ApiReply<Vec<T>>
    where
        E: DeserializeOwned,
        T: From<Resource<E>>,
    {
        Reply::collect(|warnings| {
            let mut items = Vec::new();
            let mut url = self.url(path, query)?;
            loop {
                let page: Page<E> = self.get_json(&url, warnings)?;
                items.extend(page.resources.into_iter().map(T::from));
                let next = match page.next_url.as_deref() {
                    Some(next) if !next.is_empty() => self.url(next, &[])?,
                    _ => break,
                };
                if next == url {
                    tracing::warn!(%url, "next_url repeats the current page");
                    break;
                }
                url = next;
            }
            Ok(items)
        })
    }

    fn get_domains(&self, path: &str, kind: DomainKind) -> ApiReply<Vec<Domain>> {
        self.get_paginated::<DomainEntity, Resource<DomainEntity>>(path, &[])
            .map(|resources| {
                resources
                    .into_iter()
                    .map(|resource| resource.into_domain(kind))
                    .collect()
            })
    }
}

impl CloudController for Client {
    fn get_organizations_by_name(&self, name: &str) -> ApiReply<Vec<Organization>> {
        let filter = format!("name:{}", name);
        self.get_paginated::<OrganizationEntity, _>("/v2/organizations", &[("q", filter.as_str())])
    }

    fn get_shared_domains(&self) -> ApiReply<Vec<Domain>> {
        self.get_domains("/v2/shared_domains", DomainKind::Shared)
    }

    fn get_organization_private_domains(&self, org_guid: &str) -> ApiReply<Vec<Domain>> {
        let path = format!("/v2/organizations/{}/private_domains", org_guid);
        self.get_domains(&path, DomainKind::Private)
    }

    fn get_quota_definition(&self, guid: &str) -> ApiReply<QuotaDefinition> {
        let path = format!("/v2/quota_definitions/{}", guid);
        self.get_resource::<QuotaDefinitionEntity, _>(&path)
    }

    fn get_organization_spaces(&self, org_guid: &str) -> ApiReply<Vec<Space>> {
        let path = format!("/v2/organizations/{}/spaces", org_guid);
        self.get_paginated::<SpaceEntity, _>(&path, &[])
    }

    fn get_organization_space_quota_definitions(
        &self,
        org_guid: &str,
    ) -> ApiReply<Vec<SpaceQuotaDefinition>> {
        let path = format!("/v2/organizations/{}/space_quota_definitions", org_guid);
        self.get_paginated::<SpaceQuotaDefinitionEntity, _>(&path, &[])
    }
}

/// Splits the comma-separated, URL-encoded warning headers into messages.
pub fn parse_warnings(headers: &HeaderMap) -> Warnings {
    headers
        .get_all(WARNINGS_HEADER)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(','))
        .map(str::trim)
        .filter(|warning| !warning.is_empty())
        .map(unescape_warning)
        .collect()
}

/// Query-style unescape: `+` is a space, `%XX` is a byte, everything else is
/// kept as is.
fn unescape_warning(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

fn parse_error(status: StatusCode, body: &str) -> ApiError {
    let parsed: ErrorBody = serde_json::from_str(body).unwrap_or_default();
    tracing::debug!(status = status.as_u16(), error_code = %parsed.error_code, "request failed");
    let description = if parsed.description.is_empty() {
        body.trim().to_string()
    } else {
        parsed.description
    };
    error_for_status(status.as_u16(), description)
}

/// Maps a non-success status onto the matching [`ApiError`] variant.
pub fn error_for_status(status: u16, description: String) -> ApiError {
    match status {
        401 => ApiError::InvalidAuthToken { description },
        403 => ApiError::Forbidden { description },
        404 => ApiError::ResourceNotFound { description },
        status => ApiError::UnexpectedResponse {
            status,
            description,
        },
    }
}

//! # Actor Layer
//!
//! Actions composed from one or more API calls. The actor owns a
//! [`CloudController`] and turns raw endpoint results into the answers
//! commands want: one organization by name, the combined domain names of an
//! organization, a quota definition that reports a missing GUID by name.
//!
//! Every action returns an [`ActionReply`], so warnings from each underlying
//! call reach the command even when a later call fails.

use crate::ccv2::CloudController;
use crate::error::ActionError;
use crate::reply::Reply;

mod domain;
mod organization;
mod quota_definition;
mod space;

pub type ActionReply<T> = Reply<T, ActionError>;

pub struct Actor<C: CloudController> {
    client: C,
}

impl<C: CloudController> Actor<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

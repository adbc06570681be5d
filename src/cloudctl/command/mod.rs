//! # Command Layer
//!
//! Commands hold their parsed arguments plus the collaborators they need (an
//! actor and the config) behind traits, and render through a [`cloudui::Ui`].
//! Nothing here touches the network or the process directly, so every
//! behavior is testable with fakes and in-memory output buffers.
//!
//! - `org`: show one organization's summary, or just its GUID
//! - `shared`: translation of actor errors into user-facing command errors

pub mod org;
pub mod shared;

#[cfg(test)]
mod fakes;

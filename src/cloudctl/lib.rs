//! # Cloudctl Architecture
//!
//! Cloudctl is a client library for the cloud platform's v2 control API, with
//! a thin CLI on top. Everything from the command layer inward is plain Rust
//! that never touches stdout, stderr or the process; the binary only wires
//! real collaborators together.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, loads config, sets up logging          │
//! │  - The ONLY place that knows about exit codes               │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (command/*.rs)                               │
//! │  - Sequences actor calls, surfaces warnings, renders output │
//! │  - Translates known failures into user-facing errors        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Actor Layer (actor/)                                       │
//! │  - Composes API calls into actions                          │
//! │  - Aggregates warnings across calls                         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (ccv2/)                                          │
//! │  - Abstract CloudController trait                           │
//! │  - Client (HTTP), InMemoryCloudController (testing)         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Warnings
//!
//! The server attaches advisory warnings to responses whether or not the
//! request succeeded. Every layer below the command returns a
//! [`reply::Reply`] so those warnings survive a failure, and commands print
//! them before looking at the result.
//!
//! ## Testing Strategy
//!
//! 1. **API** (`ccv2/`): requests and decoding against a local TCP stub.
//! 2. **Actor** (`actor/`): composition against `InMemoryCloudController`.
//! 3. **Commands** (`command/`): output and error translation with recording
//!    fakes and buffered [`cloudui::Ui`] streams.
//! 4. **CLI** (`tests/`): the built binary against a stub API server.
//!
//! ## Module Overview
//!
//! - [`ccv2`]: The v2 API client
//! - [`actor`]: Actions built from API calls
//! - [`command`]: Command logic and error translation
//! - [`config`]: Configuration file and current user
//! - [`model`]: Core data types (`Organization`, `QuotaDefinition`, `Limit`)
//! - [`reply`]: Results that carry warnings
//! - [`error`]: Error types
//! - `cli`: Argument parsing and logging for the binary (not part of the lib API)

pub mod actor;
pub mod ccv2;
pub mod command;
pub mod config;
pub mod error;
pub mod model;
pub mod reply;

//! # CLI Layer
//!
//! The only place that reads the process environment: it parses arguments,
//! installs logging, loads the config file and builds the HTTP client. Each
//! command then runs against those real collaborators.
//!
//! - `run()`: Main dispatch logic (called by `main.rs`)
//! - `init_context()`: Builds `AppContext` from the config file
//! - `handle_*()`: Per-command handlers

use super::logging;
use super::setup::{Cli, Commands};
use clap::Parser;
use cloudctl::actor::Actor;
use cloudctl::ccv2::{Client, ClientBuilder};
use cloudctl::command::org::OrgCommand;
use cloudctl::command::shared::handle_error;
use cloudctl::config::{CloudConfig, Config};
use cloudctl::error::{ActionError, CommandError, Result};
use cloudui::Ui;

struct AppContext {
    actor: Actor<Client>,
    config: CloudConfig,
}

pub fn run(ui: &mut Ui) -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Org { organization, guid } => handle_org(ui, organization, guid),
    }
}

fn init_context() -> Result<AppContext> {
    let config = CloudConfig::load_default()?;
    if config.target().is_empty() {
        return Err(CommandError::NoApiSet {
            binary_name: config.binary_name().to_string(),
        });
    }

    let client = ClientBuilder::new(config.target())
        .map(|builder| {
            builder
                .access_token(config.access_token())
                .skip_ssl_validation(config.skip_ssl_validation())
        })
        .and_then(ClientBuilder::build)
        .map_err(|err| handle_error(ActionError::from(err)))?;

    Ok(AppContext {
        actor: Actor::new(client),
        config,
    })
}

fn handle_org(ui: &mut Ui, organization: String, guid: bool) -> Result<()> {
    let ctx = init_context()?;
    OrgCommand::new(organization, guid, ctx.actor, ctx.config).execute(ui)
}

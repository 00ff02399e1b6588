//! Clap argument types.

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

use userdesk::models::UserId;
use userdesk::render::ViewRenderer;
use userdesk::store::State;

/// Manage user records over a REST API.
#[derive(Parser, Debug)]
#[command(
    name = "userdesk",
    version = userdesk::constants::VERSION,
    about = "Manage user records over a REST API.",
)]
pub struct Cli {
    /// Collection URL (default: http://localhost:3000/api/users/).
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file to use instead of ./.userdesk.toml.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for the rendered view.
    #[arg(long, global = true, default_value = "terminal")]
    pub format: OutputFormat,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', long = "verbose", global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored output.
    #[arg(long, global = true, default_value_t = false)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Fetch and show all users.
    List,

    /// Create a user.
    Add(AddArgs),

    /// Update an existing user.
    Edit(EditArgs),

    /// Delete a user.
    Delete(DeleteArgs),

    /// Interactive session: load once, then edit the list in place.
    Shell,

    /// Print the effective configuration.
    Config,

    /// Print version and build information.
    Version,
}

/// Arguments for the `add` subcommand.
#[derive(Parser, Debug)]
pub struct AddArgs {
    /// Name of the new user.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Email of the new user.
    #[arg(long, default_value = "")]
    pub email: String,
}

/// Arguments for the `edit` subcommand.
#[derive(Parser, Debug)]
pub struct EditArgs {
    /// Id of the user to update.
    pub id: UserId,

    /// New name (keeps the current one when omitted).
    #[arg(long)]
    pub name: Option<String>,

    /// New email (keeps the current one when omitted).
    #[arg(long)]
    pub email: Option<String>,
}

/// Arguments for the `delete` subcommand.
#[derive(Parser, Debug)]
pub struct DeleteArgs {
    /// Id of the user to delete.
    pub id: UserId,
}

/// Output format options.
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    Terminal,
    Json,
}

impl OutputFormat {
    /// Render the view using the renderer for this format.
    pub fn render(&self, state: &State) -> String {
        match self {
            OutputFormat::Terminal => userdesk::render::terminal::TerminalRenderer.render(state),
            OutputFormat::Json => userdesk::render::json::JsonRenderer.render(state),
        }
    }
}

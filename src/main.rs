//! userdesk: terminal client for user records.
//!
//! Entry point and error handling boundary. Uses `anyhow` for
//! ergonomic error propagation and user-facing messages.

mod cli;

use userdesk::api::HttpUserApi;
use userdesk::commands;
use userdesk::config::{CliOverrides, Config, Env};
use userdesk::constants;
use userdesk::logging;
use userdesk::view::UserListView;

use std::process;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::Parser;

use cli::args::{Cli, Command, OutputFormat};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Command::Version = cli.command {
        return run_version();
    }

    let work_dir = std::env::current_dir().context("failed to determine working directory")?;
    let mut config = Config::load(Some(&work_dir), cli.config.as_deref(), &Env::real())
        .context("failed to load configuration")?;
    config
        .apply_cli(&CliOverrides {
            api_url: cli.api_url.clone(),
        })
        .context("invalid configuration")?;

    logging::init(cli.verbose, &config.log.level)
        .map_err(|e| anyhow!("failed to initialise logging: {e}"))?;

    if let Command::Config = cli.command {
        print!("{}", config.to_toml());
        return Ok(());
    }

    let api = HttpUserApi::new(&config.api).context("failed to set up API client")?;
    let view = Arc::new(UserListView::new(Arc::new(api), config.view.stale_responses));
    let format = cli.format;

    let result = match cli.command {
        Command::List => commands::list(&view).await,
        Command::Add(args) => commands::add(&view, args.name, args.email).await,
        Command::Edit(args) => commands::edit(&view, args.id, args.name, args.email).await,
        Command::Delete(args) => commands::delete(&view, args.id).await,
        Command::Shell => {
            view.load().await;
            return cli::shell::run(view, format).await;
        }
        Command::Config | Command::Version => return Ok(()),
    };
    print_view(&view, format);
    Ok(result?)
}

/// Print detailed version and build information.
fn run_version() -> Result<()> {
    use colored::Colorize;

    println!(
        "{} {}",
        constants::APP_NAME.bold(),
        constants::VERSION.green().bold()
    );
    println!("{}  {}", "target:".dimmed(), constants::TARGET);
    Ok(())
}

fn print_view(view: &UserListView, format: OutputFormat) {
    println!("{}", format.render(&view.state()));
}

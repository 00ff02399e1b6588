//! Interactive shell over a mounted [`UserListView`].
//!
//! One command per line. Each command is awaited before the next prompt,
//! and the view is re-rendered after anything that can change it.

use std::io::Write;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use userdesk::models::UserId;
use userdesk::view::{Outcome, UserListView};

use super::args::OutputFormat;

pub const SHELL_HELP: &str = "\
Commands:
  list              show the list and form
  name <text>       set the name field
  email <text>      set the email field
  submit            add a user, or update the one being edited
  edit <id>         load a user into the form
  delete <id>       delete a user
  cancel            clear the form and stop editing
  reload            fetch the list again
  help              show this help
  quit              leave the shell";

/// A parsed shell line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Empty,
    List,
    Name(String),
    Email(String),
    Submit,
    Edit(UserId),
    Delete(UserId),
    Cancel,
    Reload,
    Help,
    Quit,
}

impl ShellCommand {
    /// Parse one input line. Field values keep inner whitespace.
    pub fn parse(line: &str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "" => Ok(ShellCommand::Empty),
            "list" | "ls" => Ok(ShellCommand::List),
            "name" => Ok(ShellCommand::Name(rest.to_string())),
            "email" => Ok(ShellCommand::Email(rest.to_string())),
            "submit" | "save" => Ok(ShellCommand::Submit),
            "edit" => parse_id(rest).map(ShellCommand::Edit),
            "delete" | "rm" => parse_id(rest).map(ShellCommand::Delete),
            "cancel" => Ok(ShellCommand::Cancel),
            "reload" => Ok(ShellCommand::Reload),
            "help" | "?" => Ok(ShellCommand::Help),
            "quit" | "exit" => Ok(ShellCommand::Quit),
            other => Err(format!("unknown command '{other}' (try 'help')")),
        }
    }
}

fn parse_id(raw: &str) -> Result<UserId, String> {
    if raw.is_empty() {
        return Err("expected a user id".to_string());
    }
    raw.parse::<UserId>()
        .map_err(|_| format!("invalid user id '{raw}'"))
}

/// Run the read-eval-render loop until `quit` or end of input.
pub async fn run(view: Arc<UserListView>, format: OutputFormat) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    println!("{}", format.render(&view.state()));

    loop {
        print!("{}> ", userdesk::constants::APP_NAME);
        std::io::stdout().flush().context("failed to flush stdout")?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            println!();
            return Ok(());
        };

        let command = match ShellCommand::parse(&line) {
            Ok(command) => command,
            Err(msg) => {
                eprintln!("{msg}");
                continue;
            }
        };

        let rerender = match command {
            ShellCommand::Empty => false,
            ShellCommand::List => true,
            ShellCommand::Name(name) => {
                view.set_name(name);
                true
            }
            ShellCommand::Email(email) => {
                view.set_email(email);
                true
            }
            ShellCommand::Submit => changed(view.submit().await),
            ShellCommand::Edit(id) => changed(view.begin_edit(id)),
            ShellCommand::Delete(id) => changed(view.delete(id).await),
            ShellCommand::Cancel => {
                view.reset_form();
                true
            }
            ShellCommand::Reload => changed(view.load().await),
            ShellCommand::Help => {
                println!("{SHELL_HELP}");
                false
            }
            ShellCommand::Quit => return Ok(()),
        };

        if rerender {
            println!("{}", format.render(&view.state()));
        }
    }
}

fn changed(outcome: Outcome) -> bool {
    outcome == Outcome::Applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_keeps_inner_whitespace() {
        assert_eq!(
            ShellCommand::parse("name  Ada Lovelace ").unwrap(),
            ShellCommand::Name("Ada Lovelace".to_string())
        );
    }

    #[test]
    fn parse_field_without_value_is_empty() {
        assert_eq!(
            ShellCommand::parse("email").unwrap(),
            ShellCommand::Email(String::new())
        );
    }

    #[test]
    fn parse_ids() {
        assert_eq!(ShellCommand::parse("edit 12").unwrap(), ShellCommand::Edit(12));
        assert_eq!(ShellCommand::parse("rm 3").unwrap(), ShellCommand::Delete(3));
        assert!(ShellCommand::parse("delete").unwrap_err().contains("expected a user id"));
        assert!(ShellCommand::parse("edit x").unwrap_err().contains("invalid user id"));
    }

    #[test]
    fn parse_is_case_insensitive_on_command_word() {
        assert_eq!(ShellCommand::parse("SUBMIT").unwrap(), ShellCommand::Submit);
        assert_eq!(ShellCommand::parse("Quit").unwrap(), ShellCommand::Quit);
    }

    #[test]
    fn parse_blank_and_unknown() {
        assert_eq!(ShellCommand::parse("   ").unwrap(), ShellCommand::Empty);
        assert!(ShellCommand::parse("frobnicate").unwrap_err().contains("unknown command"));
    }

    #[test]
    fn help_lists_every_command() {
        for word in ["list", "name", "email", "submit", "edit", "delete", "cancel", "reload", "quit"] {
            assert!(SHELL_HELP.contains(word), "missing {word}");
        }
    }
}

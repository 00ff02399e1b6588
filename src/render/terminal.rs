//! Terminal renderer: title, form, then one line per user.

use colored::Colorize;

use crate::constants::VIEW_TITLE;
use crate::models::FormMode;
use crate::render::ViewRenderer;
use crate::store::State;

/// Terminal renderer with colored, flowing text.
pub struct TerminalRenderer;

impl ViewRenderer for TerminalRenderer {
    fn render(&self, state: &State) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", VIEW_TITLE.bold()));

        let form = &state.form;
        output.push_str(&format!("  {}  {}\n", "Name: ".cyan(), field(&form.name)));
        output.push_str(&format!("  {}  {}\n", "Email:".cyan(), field(&form.email)));
        match form.mode {
            FormMode::Create => {
                output.push_str(&format!("  {}\n", "[Add User]".green().bold()));
            }
            FormMode::Edit(id) => {
                output.push_str(&format!(
                    "  {} {}\n",
                    "[Update User]".blue().bold(),
                    format!("editing #{id}").dimmed(),
                ));
            }
        }
        output.push('\n');

        if state.users.is_empty() {
            output.push_str(&format!("  {}\n", "No users.".dimmed()));
            return output;
        }

        for user in &state.users {
            let editing = form.mode.editing_id() == Some(user.id);
            let marker = if editing { "›".yellow().bold().to_string() } else { " ".to_string() };
            output.push_str(&format!(
                " {} {} - {} - {}   {} {}\n",
                marker,
                user.id,
                user.name,
                user.email,
                "[Edit]".yellow(),
                "[Delete]".red(),
            ));
        }

        output.push_str(&format!("{}\n", "───────────────────────────────────".dimmed()));
        output.push_str(&format!(
            " {} {}\n",
            state.users.len().to_string().bold(),
            if state.users.len() == 1 { "user" } else { "users" },
        ));

        output
    }
}

fn field(value: &str) -> String {
    if value.is_empty() {
        "(empty)".dimmed().to_string()
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FormState, User};

    #[test]
    fn render_empty_create_mode() {
        let output = TerminalRenderer.render(&State::default());
        assert!(output.contains("CRUD App for Users"));
        assert!(output.contains("Add User"));
        assert!(output.contains("No users."));
    }

    #[test]
    fn render_rows_in_order() {
        let state = State {
            users: vec![User::new(1, "A", "a@x"), User::new(2, "B", "b@x")],
            form: FormState::default(),
        };
        let output = TerminalRenderer.render(&state);
        let first = output.find("1 - A - a@x").unwrap();
        let second = output.find("2 - B - b@x").unwrap();
        assert!(first < second);
        assert!(output.contains("users"));
    }

    #[test]
    fn render_edit_mode() {
        let user = User::new(7, "Grace", "g@x");
        let state = State {
            form: FormState::editing(&user),
            users: vec![user],
        };
        let output = TerminalRenderer.render(&state);
        assert!(output.contains("Update User"));
        assert!(output.contains("editing #7"));
        assert!(output.contains("Grace"));
    }
}

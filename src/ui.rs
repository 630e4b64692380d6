// UI layer: the interactive prompt loop. Input comes through the
// `Prompter` trait so the loop can be driven by `dialoguer` in the binary
// and by a scripted list of answers in tests.

use crate::message::{Console, Message, MessageKind};
use crate::users::{UserDraft, UsersData};
use anyhow::{Context, Result};
use dialoguer::Input;
use std::fmt;
use std::io::Write;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Top-level commands understood by the prompt loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Add,
    Remove,
    Quit,
}

impl Action {
    pub const ALL: [Action; 4] = [Action::List, Action::Add, Action::Remove, Action::Quit];

    pub fn as_str(self) -> &'static str {
        match self {
            Action::List => "list",
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Quit => "quit",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Action::List => "show all users",
            Action::Add => "add new user to the list",
            Action::Remove => "remove user from the list",
            Action::Quit => "quit the app",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
#[error("Unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Action {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == trimmed)
            .ok_or_else(|| UnknownAction(trimmed.to_string()))
    }
}

/// Source of answers for the prompt loop.
pub trait Prompter {
    fn ask(&mut self, prompt: &str) -> Result<String>;
}

/// Terminal prompts backed by `dialoguer`. Empty answers are accepted so
/// that an empty name reaches validation instead of being re-asked.
#[derive(Default)]
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
            .with_context(|| format!("Failed to read answer to {:?}", prompt))?;
        Ok(answer)
    }
}

/// Welcome text and the list of available actions.
pub fn print_banner<W: Write>(console: &mut Console<W>) -> Result<()> {
    console.blank()?;
    console.line("Welcome to the UsersApp!")?;
    console.line("====================================")?;
    Message::show_colorized(console, MessageKind::Info, "Available actions")?;
    console.blank()?;
    for action in Action::ALL {
        console.line(format!("{} – {}", action, action.description()))?;
    }
    console.blank()?;
    Ok(())
}

/// Non-numeric answers become `None` and fail validation later.
fn parse_age(answer: &str) -> Option<i64> {
    answer.trim().parse().ok()
}

/// Main interactive loop. Reads one action per iteration and dispatches it
/// to `users` until the user quits.
pub fn main_menu<P, W>(
    users: &mut UsersData,
    prompter: &mut P,
    console: &mut Console<W>,
) -> Result<()>
where
    P: Prompter,
    W: Write,
{
    loop {
        let answer = prompter.ask("How can I help you?")?;
        let action = match answer.parse::<Action>() {
            Ok(action) => action,
            Err(e) => {
                debug!(input = %answer, "Unrecognized action");
                Message::show_colorized(console, MessageKind::Error, &e.to_string())?;
                continue;
            }
        };
        debug!(%action, "Dispatching action");

        match action {
            Action::List => users.show_all(console)?,
            Action::Add => {
                let name = prompter.ask("Enter name")?;
                let age = parse_age(&prompter.ask("Enter age")?);
                users.add(UserDraft::new(name, age), console)?;
            }
            Action::Remove => {
                let name = prompter.ask("Enter name")?;
                users.remove(&name, console)?;
            }
            Action::Quit => {
                Message::show_colorized(console, MessageKind::Info, "Bye bye!")?;
                break;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_parsing() {
        assert_eq!("list".parse::<Action>(), Ok(Action::List));
        assert_eq!("  add \n".parse::<Action>(), Ok(Action::Add));
        assert_eq!("remove".parse::<Action>(), Ok(Action::Remove));
        assert_eq!("quit".parse::<Action>(), Ok(Action::Quit));
        assert_eq!("Quit".parse::<Action>(), Err(UnknownAction("Quit".to_string())));
        assert!("".parse::<Action>().is_err());
    }

    #[test]
    fn test_parse_age() {
        assert_eq!(parse_age("30"), Some(30));
        assert_eq!(parse_age(" 7 "), Some(7));
        assert_eq!(parse_age("-3"), Some(-3));
        assert_eq!(parse_age("thirty"), None);
        assert_eq!(parse_age(""), None);
    }

    #[test]
    fn test_banner_lists_every_action() {
        let mut console = Console::new(Vec::new(), false);
        print_banner(&mut console).unwrap();
        let out = String::from_utf8(console.into_inner()).unwrap();

        assert!(out.contains("Welcome to the UsersApp!"));
        assert!(out.contains("ℹ Available actions"));
        for action in Action::ALL {
            assert!(out.contains(&format!("{} – {}", action, action.description())));
        }
    }
}

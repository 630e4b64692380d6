// In-memory user list. The pure operations (`try_add`, `try_remove`)
// return typed results; the reporting wrappers (`add`, `remove`,
// `show_all`) turn those results into console feedback so the prompt
// loop never has to deal with validation failures itself.

use crate::error::UserError;
use crate::message::{Console, Message, MessageKind};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use std::io::{self, Write};
use tracing::debug;

/// A stored entry. Only constructed through `User::try_from`, so every
/// value in `UsersData` has a non-empty name and a positive age.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct User {
    name: String,
    age: u32,
}

impl User {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u32 {
        self.age
    }
}

/// Unvalidated candidate as collected by the prompt layer. `age` is
/// `None` when the answer was not a number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserDraft {
    pub name: String,
    pub age: Option<i64>,
}

impl UserDraft {
    pub fn new(name: impl Into<String>, age: Option<i64>) -> Self {
        UserDraft {
            name: name.into(),
            age,
        }
    }
}

impl TryFrom<UserDraft> for User {
    type Error = UserError;

    fn try_from(draft: UserDraft) -> Result<Self, Self::Error> {
        if draft.name.is_empty() {
            return Err(UserError::EmptyName);
        }
        let age = draft
            .age
            .filter(|age| *age > 0)
            .and_then(|age| u32::try_from(age).ok())
            .ok_or(UserError::InvalidAge)?;
        Ok(User {
            name: draft.name,
            age,
        })
    }
}

/// Ordered list of users, insertion order preserved, duplicates allowed.
#[derive(Debug, Default)]
pub struct UsersData {
    data: Vec<User>,
}

impl UsersData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[User] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Validate and append. The list is untouched on error.
    pub fn try_add(&mut self, draft: UserDraft) -> Result<(), UserError> {
        let user = User::try_from(draft)?;
        debug!(user = %user.name, age = user.age, "Adding user");
        self.data.push(user);
        Ok(())
    }

    /// Remove every entry whose name equals `name` exactly. Returns how
    /// many entries were dropped.
    pub fn try_remove(&mut self, name: &str) -> Result<usize, UserError> {
        let before = self.data.len();
        self.data.retain(|user| user.name != name);
        let removed = before - self.data.len();
        if removed == 0 {
            return Err(UserError::NotFound(name.to_string()));
        }
        debug!(user = %name, removed, "Removed users");
        Ok(removed)
    }

    pub fn add<W: Write>(&mut self, draft: UserDraft, console: &mut Console<W>) -> io::Result<()> {
        match self.try_add(draft) {
            Ok(_) => Message::show_colorized(
                console,
                MessageKind::Success,
                "User has been successfully added!",
            ),
            Err(e) => {
                debug!(error = %e, "Rejected user");
                Message::show_colorized(console, MessageKind::Error, "Wrong data!")
            }
        }
    }

    pub fn remove<W: Write>(&mut self, name: &str, console: &mut Console<W>) -> io::Result<()> {
        match self.try_remove(name) {
            Ok(_) => Message::show_colorized(console, MessageKind::Success, "User deleted!"),
            Err(e) => {
                debug!(error = %e, "Nothing removed");
                Message::show_colorized(console, MessageKind::Error, "User not found...")
            }
        }
    }

    /// Print the header, then either the empty marker or the table.
    pub fn show_all<W: Write>(&self, console: &mut Console<W>) -> io::Result<()> {
        Message::show_colorized(console, MessageKind::Info, "Users data")?;

        if self.data.is_empty() {
            return Message::new("No data...").show(console);
        }
        console.line(self.table())
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL).set_header(vec!["(index)", "name", "age"]);
        for (index, user) in self.data.iter().enumerate() {
            table.add_row(vec![index.to_string(), user.name.clone(), user.age.to_string()]);
        }
        table
    }
}

//! Shared helpers for driving the prompt loop without a terminal.

use std::collections::VecDeque;
use users_app::message::Console;
use users_app::ui::{main_menu, Prompter};
use users_app::users::UsersData;

/// Answers prompts from a fixed script and records every prompt shown.
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: answers.iter().map(|a| a.to_string()).collect(),
            asked: Vec::new(),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<String> {
        self.asked.push(prompt.to_string());
        match self.answers.pop_front() {
            Some(answer) => Ok(answer),
            None => anyhow::bail!("script exhausted at prompt {:?}", prompt),
        }
    }
}

/// Result of running a scripted session.
pub struct Session {
    pub users: UsersData,
    pub output: String,
    pub prompter: ScriptedPrompter,
    pub result: anyhow::Result<()>,
}

/// Run `main_menu` on an empty list with colors disabled.
pub fn run_session(answers: &[&str]) -> Session {
    let mut users = UsersData::new();
    let mut prompter = ScriptedPrompter::new(answers);
    let mut console = Console::new(Vec::new(), false);
    let result = main_menu(&mut users, &mut prompter, &mut console);
    let output = String::from_utf8(console.into_inner()).expect("output is utf-8");
    Session {
        users,
        output,
        prompter,
        result,
    }
}

// Library root
// -----------
// This crate exposes a small library surface for the CLI. The binary
// (`main.rs`) wires these modules together and runs the prompt loop.
//
// Module responsibilities:
// - `users`: the in-memory user list and its add/remove/list operations.
// - `message`: colored, tagged output through a `Console` sink.
// - `ui`: the action prompt loop and the `Prompter` input seam.
// - `config`, `logging`: display preferences and tracing setup.
pub mod config;
pub mod error;
pub mod logging;
pub mod message;
pub mod ui;
pub mod users;

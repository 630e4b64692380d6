// Message module: everything that ends up on the terminal goes through a
// `Console`. Keeping the sink generic lets tests capture output in a
// `Vec<u8>` while the binary writes straight to stdout.

use crossterm::style::Stylize;
use std::fmt::Display;
use std::io::{self, Stdout, Write};

/// Presentation category of a line of output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Info,
    /// No tag and no color.
    Plain,
}

impl From<&str> for MessageKind {
    /// Unknown kinds fall back to `Plain` instead of failing.
    fn from(value: &str) -> Self {
        match value {
            "success" => MessageKind::Success,
            "error" => MessageKind::Error,
            "info" => MessageKind::Info,
            _ => MessageKind::Plain,
        }
    }
}

impl MessageKind {
    fn tag(self) -> Option<&'static str> {
        match self {
            MessageKind::Success => Some("✔"),
            MessageKind::Error => Some("✖"),
            MessageKind::Info => Some("ℹ"),
            MessageKind::Plain => None,
        }
    }

    /// Render `text` with this kind's tag, colored when `color` is set.
    pub fn decorate(self, text: &str, color: bool) -> String {
        let Some(tag) = self.tag() else {
            return text.to_string();
        };
        if !color {
            return format!("{} {}", tag, text);
        }
        match self {
            MessageKind::Success => format!("{} {}", tag.green().bold(), text),
            MessageKind::Error => format!("{} {}", tag.red().bold(), text),
            MessageKind::Info => format!("{} {}", tag.cyan().bold(), text),
            MessageKind::Plain => text.to_string(),
        }
    }
}

/// Output sink plus the color preference loaded from config.
pub struct Console<W: Write> {
    out: W,
    color: bool,
}

impl Console<Stdout> {
    pub fn stdout(color: bool) -> Self {
        Console::new(io::stdout(), color)
    }
}

impl<W: Write> Console<W> {
    pub fn new(out: W, color: bool) -> Self {
        Console { out, color }
    }

    pub fn color(&self) -> bool {
        self.color
    }

    /// Write one line followed by a newline.
    pub fn line(&mut self, text: impl Display) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }

    pub fn blank(&mut self) -> io::Result<()> {
        self.line("")
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// A piece of text that can be reshaped in place before being shown.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    content: String,
}

impl Message {
    pub fn new(content: impl Into<String>) -> Self {
        Message {
            content: content.into(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Print the content as-is.
    pub fn show<W: Write>(&self, console: &mut Console<W>) -> io::Result<()> {
        console.line(&self.content)
    }

    /// Uppercase the first character and lowercase the rest.
    pub fn capitalize(&mut self) {
        let mut chars = self.content.chars();
        if let Some(first) = chars.next() {
            let rest = chars.as_str().to_lowercase();
            self.content = first.to_uppercase().chain(rest.chars()).collect();
        }
    }

    pub fn to_upper_case(&mut self) {
        self.content = self.content.to_uppercase();
    }

    pub fn to_lower_case(&mut self) {
        self.content = self.content.to_lowercase();
    }

    /// Print `text` tagged according to `kind`.
    pub fn show_colorized<W: Write>(
        console: &mut Console<W>,
        kind: MessageKind,
        text: &str,
    ) -> io::Result<()> {
        let color = console.color();
        console.line(kind.decorate(text, color))
    }
}

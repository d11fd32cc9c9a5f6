//! Line editing for the interactive front end.
//!
//! Prompts go through a rustyline [`Editor`] with a helper that completes
//! and highlights chat commands and masks input while a password is typed.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::config::{ColorMode, Configurer};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Editor, Helper};

/// Slash commands offered for completion in the chat view.
pub const CHAT_COMMANDS: [&str; 13] = [
    "/copy", "/dislike", "/file", "/follow", "/help", "/history", "/index", "/like", "/logout",
    "/quit", "/retry", "/save", "/thread",
];

/// Result of reading one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C: abandon the current prompt.
    Interrupted,
    /// Ctrl-D or closed stdin: leave the app.
    Eof,
}

impl Input {
    /// Whether the app keeps running after this input.
    pub fn keep_going(&self) -> bool {
        !matches!(self, Input::Eof)
    }
}

/// Map a readline result onto [`Input`]. Errors other than Ctrl-C and
/// Ctrl-D are passed through.
pub fn classify(result: Result<String, ReadlineError>) -> Result<Input, ReadlineError> {
    match result {
        Ok(line) => Ok(Input::Line(line)),
        Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
        Err(ReadlineError::Eof) => Ok(Input::Eof),
        Err(e) => Err(e),
    }
}

/// Commands starting with `prefix`, alphabetically.
pub fn complete_command(prefix: &str) -> Vec<&'static str> {
    if !prefix.starts_with('/') || prefix.contains(' ') {
        return Vec::new();
    }
    CHAT_COMMANDS
        .iter()
        .copied()
        .filter(|cmd| cmd.starts_with(prefix))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct PromptHelper {
    /// Set while reading a password; the line is echoed as `*`.
    pub masking: bool,
}

impl Helper for PromptHelper {}

impl Completer for PromptHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        if self.masking {
            return Ok((0, Vec::new()));
        }
        let candidates = complete_command(&line[..pos])
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.to_string(),
                replacement: cmd.to_string(),
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for PromptHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if self.masking {
            Owned("*".repeat(line.chars().count()))
        } else if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for PromptHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if self.masking {
            return None;
        }
        let line = &line[..pos];
        complete_command(line)
            .into_iter()
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for PromptHelper {}

pub type LineEditor = Editor<PromptHelper, DefaultHistory>;

pub fn line_editor() -> rustyline::Result<LineEditor> {
    let mut editor = LineEditor::new()?;
    editor.set_helper(Some(PromptHelper::default()));
    Ok(editor)
}

/// Read one line.
pub fn read_line(editor: &mut LineEditor, prompt: &str) -> Result<Input, ReadlineError> {
    classify(editor.readline(prompt))
}

/// Read one line without showing what is typed. Never added to history.
pub fn read_secret(editor: &mut LineEditor, prompt: &str) -> Result<Input, ReadlineError> {
    set_masking(editor, true);
    // Masking is done by the highlighter, so it must run even without colour
    editor.set_color_mode(ColorMode::Forced);
    let result = editor.readline(prompt);
    editor.set_color_mode(ColorMode::Enabled);
    set_masking(editor, false);
    classify(result)
}

fn set_masking(editor: &mut LineEditor, masking: bool) {
    if let Some(helper) = editor.helper_mut() {
        helper.masking = masking;
    }
}

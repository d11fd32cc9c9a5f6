//! Line-oriented input parsing for each view.
//!
//! Numbers typed by the user are 1-based as shown on screen; the parsed
//! commands carry 0-based indices.

use std::path::PathBuf;

use hrportal_core::departments::{find_department, DEPARTMENTS};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command: {0} (type /help)")]
    UnknownCommand(String),

    #[error("{command} needs {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("not a valid number: {0}")]
    InvalidNumber(String),

    #[error("unknown choice: {0}")]
    UnknownChoice(String),
}

/// Input on the role selection screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChoice {
    Hr,
    Employee,
    Quit,
}

/// Input on the department grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridChoice {
    Department(&'static str),
    Back,
    Quit,
}

/// Input in the chat view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// Plain text: ask it right away.
    Ask(String),
    /// Empty line: send whatever is in the draft.
    SendDraft,
    History,
    /// Open the n-th entry of the history list.
    Thread(usize),
    SelectFile(PathBuf),
    Index,
    Like(usize),
    Dislike(usize),
    Follow { message: usize, follow_up: usize },
    Retry(usize),
    Copy(usize),
    Save { message: usize, file_name: Option<String> },
    Help,
    Logout,
    Quit,
}

pub fn parse_role_choice(line: &str) -> Result<RoleChoice, CommandError> {
    match line.trim().to_ascii_lowercase().as_str() {
        "1" | "hr" => Ok(RoleChoice::Hr),
        "2" | "employee" => Ok(RoleChoice::Employee),
        "q" | "quit" => Ok(RoleChoice::Quit),
        other => Err(CommandError::UnknownChoice(other.to_string())),
    }
}

/// Accepts a grid number or a department name.
pub fn parse_grid_choice(line: &str) -> Result<GridChoice, CommandError> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "b" | "back" => return Ok(GridChoice::Back),
        "q" | "quit" => return Ok(GridChoice::Quit),
        _ => {}
    }

    if let Ok(n) = trimmed.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| DEPARTMENTS.get(i).copied())
            .map(GridChoice::Department)
            .ok_or_else(|| CommandError::UnknownChoice(trimmed.to_string()));
    }

    find_department(trimmed)
        .map(GridChoice::Department)
        .map_err(|_| CommandError::UnknownChoice(trimmed.to_string()))
}

/// `:back` on any login prompt leaves the form.
pub fn is_back(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case(":back")
}

pub fn parse_chat(line: &str) -> Result<ChatCommand, CommandError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(ChatCommand::SendDraft);
    }
    let Some(rest) = trimmed.strip_prefix('/') else {
        return Ok(ChatCommand::Ask(trimmed.to_string()));
    };

    let mut words = rest.split_whitespace();
    let name = words.next().unwrap_or_default();
    match name {
        "history" | "h" => Ok(ChatCommand::History),
        "thread" => Ok(ChatCommand::Thread(index_arg("/thread", words.next())?)),
        "file" => {
            let path = rest.trim_start()[name.len()..].trim();
            if path.is_empty() {
                return Err(CommandError::MissingArgument {
                    command: "/file",
                    argument: "a path",
                });
            }
            Ok(ChatCommand::SelectFile(PathBuf::from(path)))
        }
        "index" => Ok(ChatCommand::Index),
        "like" => Ok(ChatCommand::Like(index_arg("/like", words.next())?)),
        "dislike" => Ok(ChatCommand::Dislike(index_arg("/dislike", words.next())?)),
        "follow" => {
            let message = index_arg("/follow", words.next())?;
            let follow_up = index_arg("/follow", words.next())?;
            Ok(ChatCommand::Follow { message, follow_up })
        }
        "retry" => Ok(ChatCommand::Retry(index_arg("/retry", words.next())?)),
        "copy" => Ok(ChatCommand::Copy(index_arg("/copy", words.next())?)),
        "save" => {
            let message = index_arg("/save", words.next())?;
            let file_name = words.next().map(str::to_string);
            Ok(ChatCommand::Save { message, file_name })
        }
        "help" | "?" => Ok(ChatCommand::Help),
        "logout" => Ok(ChatCommand::Logout),
        "quit" | "q" => Ok(ChatCommand::Quit),
        _ => Err(CommandError::UnknownCommand(format!("/{name}"))),
    }
}

fn index_arg(command: &'static str, word: Option<&str>) -> Result<usize, CommandError> {
    let word = word.ok_or(CommandError::MissingArgument {
        command,
        argument: "a number",
    })?;
    word.parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .ok_or_else(|| CommandError::InvalidNumber(word.to_string()))
}

//! Text renderers for each view. Everything returns a `String` so output can
//! be asserted on in tests with colouring switched off.

use std::fmt::Write as _;

use colored::Colorize;

use hrportal_core::departments::DEPARTMENTS;
use hrportal_core::models::history::HistoryThreadSummary;
use hrportal_core::models::message::{Delivery, Message, MessageRole};
use hrportal_core::render::{clean_follow_up, render_answer, Line};
use hrportal_session::session::Session;

pub fn role_select() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "=== HR AI Portal ===".bright_magenta().bold());
    let _ = writeln!(out, "Select your role:");
    let _ = writeln!(out, "  1) HR Admin");
    let _ = writeln!(out, "  2) Employee");
    let _ = writeln!(out, "{}", "  q) quit".bright_black());
    out
}

pub fn department_grid() -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Select your department:".bold());
    for (i, name) in DEPARTMENTS.iter().enumerate() {
        let _ = writeln!(out, "  {}) {name}", i + 1);
    }
    let _ = writeln!(out, "{}", "  b) back to roles".bright_black());
    out
}

pub fn login_form(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", session.login_heading().bold());
    let _ = writeln!(
        out,
        "{}",
        "Type :back at any prompt to go back.".bright_black()
    );
    out
}

/// Sidebar summary printed when the chat view opens.
pub fn chat_header(session: &Session) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{}",
        format!("=== {} Portal ===", session.department)
            .bright_magenta()
            .bold()
    );
    let _ = writeln!(
        out,
        "Logged in as {} ({}), {}",
        session.username,
        session.role.map(|r| r.as_str()).unwrap_or("unknown"),
        session.policy_region.label()
    );
    let _ = writeln!(out, "{}", "Type /help for commands.".bright_black());
    out
}

pub fn chat_help(is_hr: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Commands:".bold());
    let _ = writeln!(out, "  <text>              ask a question");
    let _ = writeln!(out, "  <empty line>        send the current draft");
    let _ = writeln!(out, "  /history            refresh the history list");
    let _ = writeln!(out, "  /thread <n>         open history entry n");
    let _ = writeln!(out, "  /like <n>           rate answer n up");
    let _ = writeln!(out, "  /dislike <n>        rate answer n down");
    let _ = writeln!(out, "  /follow <n> <k>     draft follow-up k of answer n");
    let _ = writeln!(out, "  /retry <n>          draft the question behind answer n");
    let _ = writeln!(out, "  /copy <n>           copy answer n to the clipboard");
    let _ = writeln!(out, "  /save <n> [file]    save answer n to the download folder");
    if is_hr {
        let _ = writeln!(out, "  /file <path>        select a policy PDF");
        let _ = writeln!(out, "  /index              upload and index the selected PDF");
    }
    let _ = writeln!(out, "  /logout             sign out");
    let _ = writeln!(out, "  /quit               exit");
    out
}

/// History list, newest first as delivered by the backend.
pub fn history(entries: &[HistoryThreadSummary]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "Recent Conversations".bold());
    if entries.is_empty() {
        let _ = writeln!(out, "{}", "  No recent conversations".bright_black());
        return out;
    }
    for (i, entry) in entries.iter().enumerate() {
        let when = entry
            .recorded_at()
            .map(|at| at.strftime("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| entry.timestamp.clone());
        let _ = writeln!(out, "  {}) {}", i + 1, entry.session_id.bold());
        let _ = writeln!(out, "     {}", entry.question);
        if !when.is_empty() {
            let _ = writeln!(out, "     {}", when.bright_black());
        }
    }
    out
}

/// One conversation entry, numbered 1-based.
pub fn message(number: usize, message: &Message, show_confidence: bool) -> String {
    let mut out = String::new();
    match message.role {
        MessageRole::User => {
            let marker = match message.delivery {
                Delivery::Pending => " …",
                Delivery::Delivered | Delivery::Failed => "",
            };
            let _ = writeln!(
                out,
                "{} {}{marker}",
                format!("[{number}] You:").bright_green().bold(),
                message.content
            );
        }
        MessageRole::Assistant => {
            let _ = writeln!(out, "{}", format!("[{number}] Assistant:").bright_blue().bold());
            if message.delivery == Delivery::Failed {
                let _ = writeln!(out, "  {}", message.content.red());
            } else {
                answer_body(&mut out, message, show_confidence);
            }
        }
    }
    out
}

fn answer_body(out: &mut String, message: &Message, show_confidence: bool) {
    let layout = render_answer(&message.content);
    for (i, paragraph) in layout.paragraphs.iter().enumerate() {
        if i > 0 {
            let _ = writeln!(out);
        }
        for line in &paragraph.lines {
            match line {
                Line::Plain(text) => {
                    let _ = writeln!(out, "  {text}");
                }
                Line::Labeled { label, text } if text.is_empty() => {
                    let _ = writeln!(out, "  {}", label.bold());
                }
                Line::Labeled { label, text } => {
                    let _ = writeln!(out, "  {} {text}", label.bold());
                }
            }
        }
    }

    if show_confidence && let Some(confidence) = message.confidence {
        let _ = writeln!(
            out,
            "  {} {confidence:.0}%",
            "Confidence:".bold()
        );
    }

    if !message.next_steps.trim().is_empty() {
        let _ = writeln!(out, "  {} {}", "Next step:".bold(), message.next_steps.trim());
    }

    if !message.suggested_follow_ups.is_empty() {
        let _ = writeln!(out, "  {}", "Suggested follow-ups:".bold());
        for (k, follow_up) in message.suggested_follow_ups.iter().enumerate() {
            let _ = writeln!(out, "    {}. {}", k + 1, clean_follow_up(follow_up));
        }
    }

    if let Some(liked) = message.liked {
        let verdict = if liked { "liked" } else { "disliked" };
        let _ = writeln!(out, "  {}", format!("({verdict})").bright_black());
    }
}

/// Blocking notice; the app waits for Enter after printing it.
pub fn alert(text: &str) -> String {
    format!("{} {text}\n{}", "!".yellow().bold(), "Press Enter to continue.".bright_black())
}

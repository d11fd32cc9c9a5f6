use std::path::Path;

use colored::Colorize;
use eyre::Result;

use hrportal_core::models::role::PolicyRegion;
use hrportal_gateway::Backend;
use hrportal_session::{Action, Controller, Outcome, View};
use hrportal_terminal::command::{self, ChatCommand, GridChoice, RoleChoice};
use hrportal_terminal::config::PortalConfig;
use hrportal_terminal::prompt::{self, Input, LineEditor};
use hrportal_terminal::screen;

const DEFAULT_ANSWER_FILE: &str = "answer.txt";

/// Interactive front end. Reads one line at a time and turns it into
/// controller actions.
pub struct App<'a> {
    controller: Controller,
    backend: &'a dyn Backend,
    config: &'a PortalConfig,
    editor: LineEditor,
    /// Created on first `/copy` and kept so the copied text stays owned.
    clipboard: Option<arboard::Clipboard>,
    /// Number of conversation entries already printed.
    shown: usize,
    in_chat: bool,
}

impl<'a> App<'a> {
    pub fn new(backend: &'a dyn Backend, config: &'a PortalConfig) -> Result<Self> {
        Ok(Self {
            controller: Controller::new(config.default_policy_region),
            backend,
            config,
            editor: prompt::line_editor()?,
            clipboard: None,
            shown: 0,
            in_chat: false,
        })
    }

    pub async fn run(mut self) -> Result<()> {
        loop {
            let keep_going = match self.controller.view() {
                View::RoleSelect => self.role_select().await?,
                View::DeptGrid => self.dept_grid().await?,
                View::Login => self.login().await?,
                View::Chat => self.chat().await?,
            };
            if !keep_going {
                break;
            }
        }
        println!("{}", "Goodbye!".bright_green());
        Ok(())
    }

    async fn role_select(&mut self) -> Result<bool> {
        print!("{}", screen::role_select());
        let line = match self.read("> ")? {
            Input::Line(line) => line,
            other => return Ok(other.keep_going()),
        };
        match command::parse_role_choice(&line) {
            Ok(RoleChoice::Hr) => {
                self.act(Action::ChooseHr).await?;
            }
            Ok(RoleChoice::Employee) => {
                self.act(Action::ChooseEmployee).await?;
            }
            Ok(RoleChoice::Quit) => return Ok(false),
            Err(e) => warn(&e.to_string()),
        }
        Ok(true)
    }

    async fn dept_grid(&mut self) -> Result<bool> {
        print!("{}", screen::department_grid());
        let line = match self.read("> ")? {
            Input::Line(line) => line,
            other => return Ok(other.keep_going()),
        };
        match command::parse_grid_choice(&line) {
            Ok(GridChoice::Department(name)) => {
                self.act(Action::PickDepartment(name.to_string())).await?;
            }
            Ok(GridChoice::Back) => {
                self.act(Action::GoBack).await?;
            }
            Ok(GridChoice::Quit) => return Ok(false),
            Err(e) => warn(&e.to_string()),
        }
        Ok(true)
    }

    async fn login(&mut self) -> Result<bool> {
        print!("{}", screen::login_form(self.controller.session()));

        let current = self.controller.session().policy_region;
        let region = match self.read(&format!("Policy region [{current}]: "))? {
            Input::Line(line) => line,
            other => return Ok(other.keep_going()),
        };
        if command::is_back(&region) {
            self.act(Action::GoBack).await?;
            return Ok(true);
        }
        if !region.trim().is_empty() {
            match region.parse::<PolicyRegion>() {
                Ok(parsed) => {
                    self.act(Action::SetPolicyRegion(parsed)).await?;
                }
                Err(e) => {
                    warn(&e.to_string());
                    return Ok(true);
                }
            }
        }

        let username = match self.read("Username: ")? {
            Input::Line(line) => line,
            other => return Ok(other.keep_going()),
        };
        if command::is_back(&username) {
            self.act(Action::GoBack).await?;
            return Ok(true);
        }
        let password = match prompt::read_secret(&mut self.editor, "Password: ")? {
            Input::Line(line) => line,
            other => return Ok(other.keep_going()),
        };
        if command::is_back(&password) {
            self.act(Action::GoBack).await?;
            return Ok(true);
        }

        self.act(Action::SetUsername(username.trim().to_string()))
            .await?;
        self.act(Action::SetPassword(password)).await?;
        self.act(Action::SubmitLogin).await?;
        Ok(true)
    }

    async fn chat(&mut self) -> Result<bool> {
        if !self.in_chat {
            self.in_chat = true;
            self.shown = 0;
            print!("{}", screen::chat_header(self.controller.session()));
            print!("{}", screen::history(self.controller.history()));
            self.print_new_messages();
        }

        let line = match self.read("you> ")? {
            Input::Line(line) => line,
            other => return Ok(other.keep_going()),
        };
        if !line.trim().is_empty() {
            let _ = self.editor.add_history_entry(line.as_str());
        }
        let cmd = match command::parse_chat(&line) {
            Ok(cmd) => cmd,
            Err(e) => {
                warn(&e.to_string());
                return Ok(true);
            }
        };

        match cmd {
            ChatCommand::Ask(text) => {
                self.act(Action::SetDraft(text)).await?;
                self.send_draft().await?;
            }
            ChatCommand::SendDraft => {
                if self.controller.draft().trim().is_empty() {
                    println!("{}", "Nothing to send. Type a question.".bright_black());
                } else {
                    self.send_draft().await?;
                }
            }
            ChatCommand::History => {
                self.act(Action::FetchHistory).await?;
                print!("{}", screen::history(self.controller.history()));
            }
            ChatCommand::Thread(n) => {
                let Some(entry) = self.controller.history().get(n) else {
                    warn(&format!("no history entry {}", n + 1));
                    return Ok(true);
                };
                let message_id = entry.message_id;
                self.act(Action::LoadThread(message_id)).await?;
                println!("{}", format!("--- thread {message_id} ---").bright_black());
                self.shown = 0;
                self.print_new_messages();
            }
            ChatCommand::SelectFile(path) => {
                if self.act(Action::SelectFile(path.clone())).await? {
                    println!("Selected {}", path.display());
                }
            }
            ChatCommand::Index => {
                println!("{}", "Uploading…".bright_black());
                self.act(Action::Upload).await?;
            }
            ChatCommand::Like(index) => self.rate(index, true).await?,
            ChatCommand::Dislike(index) => self.rate(index, false).await?,
            ChatCommand::Follow { message, follow_up } => {
                let action = Action::PrefillFollowUp {
                    index: message,
                    follow_up,
                };
                if self.act(action).await? {
                    self.show_draft();
                }
            }
            ChatCommand::Retry(index) => {
                if self.act(Action::Regenerate { index }).await? {
                    self.show_draft();
                }
            }
            ChatCommand::Copy(index) => self.copy_answer(index),
            ChatCommand::Save { message, file_name } => {
                self.save_answer(message, file_name.as_deref()).await;
            }
            ChatCommand::Help => print!("{}", screen::chat_help(self.controller.session().is_hr())),
            ChatCommand::Logout => {
                self.act(Action::Logout).await?;
            }
            ChatCommand::Quit => return Ok(false),
        }
        Ok(true)
    }

    async fn send_draft(&mut self) -> Result<()> {
        println!("{}", "Thinking…".bright_black());
        if self.act(Action::Send).await? {
            self.print_new_messages();
        }
        Ok(())
    }

    async fn rate(&mut self, index: usize, liked: bool) -> Result<()> {
        if self.act(Action::Feedback { index, liked }).await?
            && let Some(message) = self.controller.conversation().get(index)
        {
            print!(
                "{}",
                screen::message(index + 1, message, self.controller.shows_confidence())
            );
        }
        Ok(())
    }

    async fn save_answer(&self, index: usize, file_name: Option<&str>) {
        let Some(message) = self
            .controller
            .conversation()
            .get(index)
            .filter(|m| m.is_assistant())
        else {
            warn(&format!("no answer {}", index + 1));
            return;
        };

        let dir = self.config.download_dir();
        let path = dir.join(file_name.unwrap_or(DEFAULT_ANSWER_FILE));
        match write_answer(&dir, &path, &message.content).await {
            Ok(()) => println!("Saved to {}", path.display()),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to save answer");
                warn(&format!("could not save answer: {e}"));
            }
        }
    }

    fn copy_answer(&mut self, index: usize) {
        let Some(content) = self
            .controller
            .conversation()
            .get(index)
            .filter(|m| m.is_assistant())
            .map(|m| m.content.clone())
        else {
            warn(&format!("no answer {}", index + 1));
            return;
        };

        let clipboard = match self.clipboard.take() {
            Some(clipboard) => Ok(clipboard),
            None => arboard::Clipboard::new(),
        };
        let result = clipboard.and_then(|mut clipboard| {
            let copied = clipboard.set_text(content);
            self.clipboard = Some(clipboard);
            copied
        });
        match result {
            Ok(()) => println!("Copied answer {} to the clipboard.", index + 1),
            Err(e) => {
                tracing::warn!(error = %e, "clipboard unavailable");
                warn(&format!("could not copy answer: {e}"));
            }
        }
    }

    fn show_draft(&self) {
        println!(
            "{} {}",
            "Draft:".bold(),
            self.controller.draft()
        );
        println!("{}", "Press Enter to send it.".bright_black());
    }

    fn print_new_messages(&mut self) {
        let messages = self.controller.messages();
        if messages.len() < self.shown {
            self.shown = 0;
        }
        if messages.is_empty() {
            println!("{}", self.controller.welcome_text().bright_black());
        }
        let show_confidence = self.controller.shows_confidence();
        for (i, message) in messages.iter().enumerate().skip(self.shown) {
            print!("{}", screen::message(i + 1, message, show_confidence));
        }
        self.shown = messages.len();
    }

    /// Dispatch an action and handle its outcome. Returns whether the
    /// controller accepted it.
    async fn act(&mut self, action: Action) -> Result<bool> {
        match self.controller.dispatch(self.backend, action).await {
            Ok(Outcome::Alert(text)) => {
                print!("{}", screen::alert(&text));
                let _ = self.read("")?;
                Ok(true)
            }
            Ok(Outcome::Reloaded) => {
                self.in_chat = false;
                self.shown = 0;
                println!("{}", "Signed out.".bright_black());
                Ok(true)
            }
            Ok(Outcome::Done | Outcome::Ignored) => Ok(true),
            Err(e) => {
                warn(&e.to_string());
                Ok(false)
            }
        }
    }

    fn read(&mut self, label: &str) -> Result<Input> {
        let input = prompt::read_line(&mut self.editor, label)?;
        if input == Input::Interrupted {
            println!("{}", "Interrupted. Type /quit (or q on menus) to exit.".yellow());
        }
        Ok(input)
    }
}

async fn write_answer(dir: &Path, path: &Path, content: &str) -> std::io::Result<()> {
    tokio::fs::create_dir_all(dir).await?;
    tokio::fs::write(path, content).await
}

fn warn(text: &str) {
    println!("{}", text.yellow());
}

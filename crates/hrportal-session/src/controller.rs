use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::{debug, info, warn};

use hrportal_core::departments::{HR_DEPARTMENT, find_department, wire_department};
use hrportal_core::models::history::HistoryThreadSummary;
use hrportal_core::models::message::{Delivery, Message};
use hrportal_core::models::role::{PolicyRegion, Role};
use hrportal_core::models::wire::{QueryRequest, QueryResponse};
use hrportal_core::render::clean_follow_up;
use hrportal_gateway::{Backend, GatewayError, UploadRequest};

use crate::action::{Action, Outcome};
use crate::conversation::{ConversationStore, PendingQuery};
use crate::error::SessionError;
use crate::session::Session;
use crate::view::View;

pub const LOGIN_FAILED_ALERT: &str = "Invalid Credentials! Please try again.";
pub const NO_FILE_ALERT: &str = "Please select a PDF file.";
pub const UPLOAD_OK_ALERT: &str = "Policy uploaded and indexed successfully!";
pub const UPLOAD_FAILED_ALERT: &str = "Upload failed.";

static NEXT_GENERATION: AtomicU64 = AtomicU64::new(1);

/// Owner of all client state.
///
/// There is exactly one controller per running client and it is only ever
/// borrowed mutably by the frontend loop, so no locking is involved.
#[derive(Debug, Clone)]
pub struct Controller {
    view: View,
    session: Session,
    conversation: ConversationStore,
    history: Vec<HistoryThreadSummary>,
    selected_file: Option<PathBuf>,
    draft: String,
    last_question: String,
    /// Set while a query or upload is in flight.
    busy: bool,
    /// Policy region restored on reload.
    default_region: PolicyRegion,
    /// Unique per controller instance; a reload gets a fresh one so answers
    /// begun before it are dropped.
    generation: u64,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new(PolicyRegion::default())
    }
}

impl Controller {
    pub fn new(default_region: PolicyRegion) -> Self {
        Self {
            view: View::RoleSelect,
            session: Session::new(default_region),
            conversation: ConversationStore::default(),
            history: Vec::new(),
            selected_file: None,
            draft: String::new(),
            last_question: String::new(),
            busy: false,
            default_region,
            generation: NEXT_GENERATION.fetch_add(1, Ordering::Relaxed),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn conversation(&self) -> &ConversationStore {
        &self.conversation
    }

    pub fn messages(&self) -> &[Message] {
        self.conversation.messages()
    }

    pub fn history(&self) -> &[HistoryThreadSummary] {
        &self.history
    }

    pub fn selected_file(&self) -> Option<&Path> {
        self.selected_file.as_deref()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn last_question(&self) -> &str {
        &self.last_question
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    /// Answer confidence is only shown to HR admins.
    pub fn shows_confidence(&self) -> bool {
        self.session.is_hr()
    }

    /// Greeting shown while the conversation is empty.
    pub fn welcome_text(&self) -> String {
        format!(
            "Welcome to the {} AI Assistant. Ask me anything about your department policies.",
            self.session.department
        )
    }

    /// Apply one user action.
    ///
    /// Actions not offered by the current view are rejected without touching
    /// any state.
    pub async fn dispatch(
        &mut self,
        backend: &dyn Backend,
        action: Action,
    ) -> Result<Outcome, SessionError> {
        let name = action.name();

        match (self.view, action) {
            (View::RoleSelect, Action::ChooseHr) => {
                self.session.role = Some(Role::Hr);
                self.session.department = HR_DEPARTMENT.to_string();
                Ok(self.enter(View::Login))
            }
            (View::RoleSelect, Action::ChooseEmployee) => {
                self.session.role = Some(Role::Employee);
                self.session.department.clear();
                Ok(self.enter(View::DeptGrid))
            }

            (View::DeptGrid, Action::PickDepartment(picked)) => {
                let department = find_department(&picked)
                    .map_err(|_| SessionError::UnknownDepartment(picked.trim().to_string()))?;
                self.session.department = department.to_string();
                Ok(self.enter(View::Login))
            }
            (View::DeptGrid, Action::GoBack) => Ok(self.enter(View::RoleSelect)),

            (View::Login, Action::SetUsername(username)) => {
                self.session.username = username;
                Ok(Outcome::Done)
            }
            (View::Login, Action::SetPassword(password)) => {
                self.session.password = password;
                Ok(Outcome::Done)
            }
            (View::Login, Action::SetPolicyRegion(region)) => {
                self.session.policy_region = region;
                Ok(Outcome::Done)
            }
            (View::Login, Action::SubmitLogin) => self.submit_login(backend).await,
            (View::Login, Action::GoBack) => {
                let back = if self.session.is_hr() {
                    View::RoleSelect
                } else {
                    View::DeptGrid
                };
                Ok(self.enter(back))
            }

            (View::Chat, Action::SetDraft(text)) => {
                self.draft = text;
                Ok(Outcome::Done)
            }
            (View::Chat, Action::Send) => {
                if self.draft.trim().is_empty() {
                    return Ok(Outcome::Ignored);
                }
                if self.busy {
                    return Err(SessionError::Busy);
                }
                let question = std::mem::take(&mut self.draft);
                self.send_query(backend, &question).await
            }
            (View::Chat, Action::FetchHistory) => {
                self.fetch_history(backend).await;
                Ok(Outcome::Done)
            }
            (View::Chat, Action::LoadThread(message_id)) => {
                self.load_thread(backend, message_id).await;
                Ok(Outcome::Done)
            }
            (View::Chat, Action::SelectFile(path)) => {
                if !self.session.is_hr() {
                    return Err(SessionError::Forbidden);
                }
                self.selected_file = Some(path);
                Ok(Outcome::Done)
            }
            (View::Chat, Action::Upload) => self.upload(backend).await,
            (View::Chat, Action::Feedback { index, liked }) => {
                let message = self.assistant_message_mut(index)?;
                message.liked = Some(liked);
                Ok(Outcome::Done)
            }
            (View::Chat, Action::PrefillFollowUp { index, follow_up }) => {
                let message = self.assistant_message(index)?;
                let raw = message.suggested_follow_ups.get(follow_up).ok_or(
                    SessionError::UnknownFollowUp {
                        message: index,
                        follow_up,
                    },
                )?;
                let cleaned = clean_follow_up(raw);
                self.draft = cleaned;
                Ok(Outcome::Done)
            }
            (View::Chat, Action::Regenerate { index }) => {
                let message = self.assistant_message(index)?;
                let question = if message.question.is_empty() {
                    self.last_question.clone()
                } else {
                    message.question.clone()
                };
                self.draft = question;
                Ok(Outcome::Done)
            }
            (View::Chat, Action::Logout) => {
                info!(department = %self.session.department, "logging out");
                *self = Controller::new(self.default_region);
                Ok(Outcome::Reloaded)
            }

            (view, _) => Err(SessionError::InvalidTransition { view, action: name }),
        }
    }

    /// Send a question and wait for the answer.
    ///
    /// Always appends exactly two messages: the question and either the
    /// answer or an error placeholder. A successful answer refreshes the
    /// history list.
    pub async fn send_query(
        &mut self,
        backend: &dyn Backend,
        question: &str,
    ) -> Result<Outcome, SessionError> {
        if question.trim().is_empty() {
            return Ok(Outcome::Ignored);
        }
        let pending = self.begin_query(question)?;
        let result = backend.query(&pending.request).await;
        if self.finish_query(pending, result) {
            self.fetch_history(backend).await;
        }
        Ok(Outcome::Done)
    }

    /// First phase of a query: append the question as pending and mark the
    /// controller busy.
    pub fn begin_query(&mut self, question: &str) -> Result<PendingQuery, SessionError> {
        if self.view != View::Chat {
            return Err(SessionError::InvalidTransition {
                view: self.view,
                action: "send",
            });
        }
        if self.busy {
            return Err(SessionError::Busy);
        }
        if self.session.department.is_empty() {
            return Err(SessionError::MissingDepartment);
        }

        let index = self.conversation.push(Message::pending_question(question));
        self.last_question = question.to_string();
        self.busy = true;

        debug!(index, "question appended, awaiting answer");

        Ok(PendingQuery {
            index,
            generation: self.generation,
            request: QueryRequest {
                question: question.to_string(),
                policy_country: self.session.policy_region,
                department: wire_department(&self.session.department),
            },
        })
    }

    /// Second phase of a query: settle the question and append the answer,
    /// or the error placeholder when the call failed. Returns whether the
    /// query succeeded.
    ///
    /// A result for a query begun before a logout is discarded and leaves
    /// the controller untouched.
    pub fn finish_query(
        &mut self,
        pending: PendingQuery,
        result: Result<QueryResponse, GatewayError>,
    ) -> bool {
        if pending.generation != self.generation || self.view != View::Chat {
            debug!(
                view = %self.view,
                ok = result.is_ok(),
                "dropping answer from a previous session"
            );
            return false;
        }
        self.busy = false;
        let question = pending.request.question;

        match result {
            Ok(response) => {
                self.conversation
                    .settle(pending.index, &question, Delivery::Delivered);
                self.conversation.push(Message::answer(&question, response));
                true
            }
            Err(e) => {
                warn!(error = %e, "query failed");
                self.conversation
                    .settle(pending.index, &question, Delivery::Failed);
                self.conversation.push(Message::query_error(&question));
                false
            }
        }
    }

    /// Replace the history list for the current department. Failures keep
    /// the previous list.
    pub async fn fetch_history(&mut self, backend: &dyn Backend) {
        if self.session.department.is_empty() {
            return;
        }
        let department = wire_department(&self.session.department);

        match backend.history(&department).await {
            Ok(threads) => {
                debug!(count = threads.len(), "history refreshed");
                self.history = threads;
            }
            Err(e) => {
                warn!(error = %e, department = %department, "history fetch failed, keeping previous list");
            }
        }
    }

    /// Replace the conversation with a stored thread. Failures leave the
    /// conversation untouched.
    pub async fn load_thread(&mut self, backend: &dyn Backend, message_id: i64) {
        if self.session.department.is_empty() {
            return;
        }
        let department = wire_department(&self.session.department);

        match backend.thread(message_id, &department).await {
            Ok(messages) => {
                info!(message_id, count = messages.len(), "thread loaded");
                self.conversation
                    .replace(messages.into_iter().map(Message::from_thread).collect());
            }
            Err(e) => {
                warn!(error = %e, message_id, "thread load failed");
            }
        }
    }

    async fn submit_login(&mut self, backend: &dyn Backend) -> Result<Outcome, SessionError> {
        let role = self.session.role.ok_or(SessionError::InvalidTransition {
            view: self.view,
            action: "submit login",
        })?;
        if role == Role::Employee && self.session.department.is_empty() {
            return Err(SessionError::MissingDepartment);
        }

        let request = self.session.login_request(role);
        match backend.login(&request).await {
            Ok(()) => {
                info!(role = %role, department = %request.department, "login succeeded");
                self.enter(View::Chat);
                self.fetch_history(backend).await;
                Ok(Outcome::Done)
            }
            Err(e) => {
                warn!(error = %e, role = %role, "login failed");
                Ok(Outcome::Alert(LOGIN_FAILED_ALERT.to_string()))
            }
        }
    }

    async fn upload(&mut self, backend: &dyn Backend) -> Result<Outcome, SessionError> {
        if !self.session.is_hr() {
            return Err(SessionError::Forbidden);
        }
        if self.busy {
            return Err(SessionError::Busy);
        }
        let Some(file) = self.selected_file.clone() else {
            return Ok(Outcome::Alert(NO_FILE_ALERT.to_string()));
        };

        let request = UploadRequest {
            file,
            department: self.session.login_department().to_string(),
            role: Role::Employee,
        };

        self.busy = true;
        let result = backend.upload(&request).await;
        self.busy = false;

        match result {
            Ok(()) => {
                info!(file = %request.file.display(), "policy uploaded");
                self.selected_file = None;
                Ok(Outcome::Alert(UPLOAD_OK_ALERT.to_string()))
            }
            Err(e) => {
                warn!(error = %e, file = %request.file.display(), "policy upload failed");
                Ok(Outcome::Alert(UPLOAD_FAILED_ALERT.to_string()))
            }
        }
    }

    fn enter(&mut self, view: View) -> Outcome {
        debug!(from = %self.view, to = %view, "view transition");
        self.view = view;
        Outcome::Done
    }

    fn assistant_message(&self, index: usize) -> Result<&Message, SessionError> {
        self.conversation
            .get(index)
            .filter(|m| m.is_assistant())
            .ok_or(SessionError::UnknownMessage(index))
    }

    fn assistant_message_mut(&mut self, index: usize) -> Result<&mut Message, SessionError> {
        self.conversation
            .get_mut(index)
            .filter(|m| m.is_assistant())
            .ok_or(SessionError::UnknownMessage(index))
    }
}

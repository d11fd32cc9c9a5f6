use std::path::PathBuf;

use hrportal_core::models::role::PolicyRegion;

/// A user action. Every mutation of the controller goes through one of
/// these.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // role-select
    ChooseHr,
    ChooseEmployee,

    // dept-grid
    PickDepartment(String),

    // login
    SetUsername(String),
    SetPassword(String),
    SetPolicyRegion(PolicyRegion),
    SubmitLogin,

    /// "Back to Roles" on the grid, "Go Back" on the login form.
    GoBack,

    // chat
    SetDraft(String),
    /// Send the current draft as a question.
    Send,
    FetchHistory,
    LoadThread(i64),
    SelectFile(PathBuf),
    Upload,
    Feedback { index: usize, liked: bool },
    /// Copy a suggested follow-up of an answer into the draft.
    PrefillFollowUp { index: usize, follow_up: usize },
    /// Copy the question that produced an answer into the draft.
    Regenerate { index: usize },
    Logout,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::ChooseHr => "choose HR",
            Action::ChooseEmployee => "choose employee",
            Action::PickDepartment(_) => "pick department",
            Action::SetUsername(_) => "set username",
            Action::SetPassword(_) => "set password",
            Action::SetPolicyRegion(_) => "set policy region",
            Action::SubmitLogin => "submit login",
            Action::GoBack => "go back",
            Action::SetDraft(_) => "edit draft",
            Action::Send => "send",
            Action::FetchHistory => "fetch history",
            Action::LoadThread(_) => "load thread",
            Action::SelectFile(_) => "select file",
            Action::Upload => "upload",
            Action::Feedback { .. } => "feedback",
            Action::PrefillFollowUp { .. } => "prefill follow-up",
            Action::Regenerate { .. } => "regenerate",
            Action::Logout => "logout",
        }
    }
}

/// What the frontend has to do after an action was handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// State changed (or not); re-render.
    Done,
    /// Show a blocking message to the user.
    Alert(String),
    /// All in-memory state was discarded, as on a page reload.
    Reloaded,
    /// Nothing to do, e.g. sending an empty draft.
    Ignored,
}

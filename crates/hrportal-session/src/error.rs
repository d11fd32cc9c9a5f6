use thiserror::Error;

use crate::view::View;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("{action} is not available on the {view} view")]
    InvalidTransition { view: View, action: &'static str },

    #[error("no department selected")]
    MissingDepartment,

    #[error("unknown department: {0}")]
    UnknownDepartment(String),

    #[error("only HR admins can upload policies")]
    Forbidden,

    #[error("another request is still in progress")]
    Busy,

    #[error("no assistant message at position {0}")]
    UnknownMessage(usize),

    #[error("message {message} has no follow-up {follow_up}")]
    UnknownFollowUp { message: usize, follow_up: usize },
}

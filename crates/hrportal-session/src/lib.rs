//! hrportal-session
//!
//! The session/view controller of the HR portal client. A single owned
//! [`Controller`] holds the active view, the signed-in session, the live
//! conversation and the department history, and is mutated only through
//! [`Controller::dispatch`] and the two-phase query API.
//!
//! View transitions:
//!
//! | From        | Action          | To                                   |
//! |-------------|-----------------|--------------------------------------|
//! | role-select | choose HR       | login (department = HR)              |
//! | role-select | choose Employee | dept-grid                            |
//! | dept-grid   | pick department | login                                |
//! | dept-grid   | go back         | role-select                          |
//! | login       | submit          | chat on success, login on failure    |
//! | login       | go back         | role-select (HR) / dept-grid         |
//! | chat        | logout          | role-select, all state discarded     |

pub mod action;
pub mod controller;
pub mod conversation;
pub mod error;
pub mod session;
pub mod view;

pub use crate::action::{Action, Outcome};
pub use crate::controller::Controller;
pub use crate::error::SessionError;
pub use crate::view::View;

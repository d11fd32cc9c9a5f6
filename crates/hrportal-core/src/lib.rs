//! hrportal-core
//!
//! Pure domain types, backend wire shapes, the department catalogue and the
//! answer rendering transform. No I/O; this is the shared vocabulary of the
//! HR portal client.

pub mod departments;
pub mod error;
pub mod models;
pub mod render;

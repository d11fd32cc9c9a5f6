//! hrportal-terminal library root.
//!
//! Exposes the config layer, the command parser and the screen renderers so
//! integration tests can exercise them without driving stdin.

pub mod command;
pub mod config;
pub mod prompt;
pub mod screen;

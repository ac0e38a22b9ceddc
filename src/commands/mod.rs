//! CLI commands

pub mod author;
pub mod list;
pub mod new;
pub mod show;

//! Library crate for the `TermTodo` terminal todo list manager.

pub mod app;
pub mod config;
pub mod ui;

//! Library entry for prodcat exposing the catalog, view logic and TUI for the binary and
//! integration tests.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;

mod test_utils;

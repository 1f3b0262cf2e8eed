//! Parley - a terminal chat interface with a simulated assistant
//!
//! This library exposes modules for use in integration tests.

pub mod app;
pub mod config;
pub mod models;
pub mod responder;
pub mod session;
pub mod ui;
pub mod widgets;

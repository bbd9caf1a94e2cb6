//! Communication Tracker: a terminal dashboard for company outreach.
//!
//! The binary in `main.rs` owns the terminal; everything it drives lives here
//! so that integration tests can run the same code against a `TestBackend`.

pub mod app;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod modules;
pub mod ui;

pub mod action;
pub mod command;
pub mod context;
pub mod module;
pub mod state;

pub use action::{Action, NotifyLevel};
pub use command::{command_hint, parse_command, Command};
pub use context::Context;
pub use module::Module;
pub use state::{reduce, Tab, TrackerState, Transition};

//! Shared plumbing for the Virtual Esoteric Toolkit.
//!
//! Every tool in the toolkit is a [`Tool`] session: it owns its own state,
//! answers one line of input at a time, and tells the menu dispatcher
//! whether to keep it open, reset it, or return to the menu.

pub mod config;
pub mod error;
pub mod render;
pub mod tool;

pub use config::ToolkitConfig;
pub use error::{ToolError, ToolResult};
pub use render::boxed;
pub use tool::{Command, Reply, Tool, parse_yes_no};

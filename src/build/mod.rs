//! Single-file builder invocation.
//!
//! [`BuildCommand`] assembles the argument list, [`ensure_tool`] checks the
//! builder is installed, and [`invoke`] runs it while streaming its combined
//! stdout/stderr through [`OutputLines`].

mod command;
mod invoker;
mod lines;
mod tool;

pub use command::BuildCommand;
pub use invoker::{BuildSummary, invoke};
pub use lines::OutputLines;
pub use tool::ensure_tool;

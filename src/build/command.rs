//! Builder command construction.

use crate::config::BuilderSpec;
use std::fmt;

/// A fully assembled builder invocation.
///
/// Built once per run and moved into [`super::invoke`], which consumes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildCommand {
    program: String,
    args: Vec<String>,
}

impl BuildCommand {
    /// Command from an explicit program and argument list
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `<base args> --name <output> [--icon=<icon>] <entry point>`
    pub fn from_spec(spec: &BuilderSpec, use_icon: bool) -> Self {
        let mut args = spec.base_args.clone();
        args.push("--name".to_string());
        args.push(spec.output_name.clone());

        if use_icon {
            args.push(format!("--icon={}", spec.icon.display()));
        }

        args.push(spec.entry_point.display().to_string());

        Self::new(spec.program.clone(), args)
    }

    /// Executable to spawn
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments, in order
    pub fn args(&self) -> &[String] {
        &self.args
    }

    /// Whether an icon argument is present
    pub fn has_icon(&self) -> bool {
        self.args.iter().any(|a| a.starts_with("--icon"))
    }
}

impl fmt::Display for BuildCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

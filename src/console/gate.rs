//! Yes/no gate for the optional icon asset.

use std::io::{self, BufRead, Write};
use std::path::Path;

/// Gate progress
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateState {
    /// Looking for the icon
    Checking,
    /// Icon missing, waiting for an answer
    Prompting,
    /// Continue the build
    ResolvedYes {
        /// Whether the builder gets an icon argument
        use_icon: bool,
    },
    /// User declined; the run ends without building
    ResolvedNo,
}

/// Final answer of the gate together with how many times the question was asked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateResolution {
    /// `ResolvedYes` or `ResolvedNo`
    pub state: GateState,
    /// Number of prompts written
    pub prompts: usize,
}

impl GateResolution {
    /// Whether the build should go ahead
    pub fn proceed(&self) -> bool {
        matches!(self.state, GateState::ResolvedYes { .. })
    }

    /// Whether the builder gets an icon argument
    pub fn use_icon(&self) -> bool {
        matches!(self.state, GateState::ResolvedYes { use_icon: true })
    }
}

/// `y` / `n` in any case, surrounding whitespace ignored
pub fn parse_answer(input: &str) -> Option<bool> {
    match input.trim() {
        answer if answer.eq_ignore_ascii_case("y") => Some(true),
        answer if answer.eq_ignore_ascii_case("n") => Some(false),
        _ => None,
    }
}

/// Asks whether to continue without the icon when it is missing.
#[derive(Debug, Clone)]
pub struct IconGate<'a> {
    icon: &'a Path,
    assume_yes: bool,
}

impl<'a> IconGate<'a> {
    /// Gate for the given icon path
    pub fn new(icon: &'a Path) -> Self {
        Self {
            icon,
            assume_yes: false,
        }
    }

    /// Answer the prompt with yes without reading input
    pub fn assume_yes(mut self, yes: bool) -> Self {
        self.assume_yes = yes;
        self
    }

    /// Runs the gate to a resolved state.
    ///
    /// Reads one line per prompt from `input`. Anything other than `y`/`n`
    /// re-prompts. End of input resolves to [`GateState::ResolvedNo`].
    pub fn resolve<R, W>(&self, mut input: R, mut out: W) -> io::Result<GateResolution>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = GateState::Checking;
        let mut prompts = 0;

        loop {
            state = match state {
                GateState::Checking if self.icon.exists() => {
                    GateState::ResolvedYes { use_icon: true }
                }
                GateState::Checking if self.assume_yes => {
                    writeln!(
                        out,
                        "Icon file {} not found, continuing without an icon",
                        self.icon.display()
                    )?;
                    GateState::ResolvedYes { use_icon: false }
                }
                GateState::Checking => GateState::Prompting,
                GateState::Prompting => {
                    if prompts > 0 {
                        writeln!(out, "Invalid input, please enter y or n")?;
                    }
                    writeln!(
                        out,
                        "Icon file {} not found. Continue without an icon? (y/n)",
                        self.icon.display()
                    )?;
                    out.flush()?;
                    prompts += 1;

                    let mut line = String::new();
                    if input.read_line(&mut line)? == 0 {
                        log::debug!("Input closed while waiting for an answer");
                        GateState::ResolvedNo
                    } else {
                        match parse_answer(&line) {
                            Some(true) => {
                                writeln!(out, "Continuing without an icon...")?;
                                GateState::ResolvedYes { use_icon: false }
                            }
                            Some(false) => GateState::ResolvedNo,
                            None => GateState::Prompting,
                        }
                    }
                }
                resolved => return Ok(GateResolution { state: resolved, prompts }),
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    #[test]
    fn test_parse_answer() {
        assert_eq!(parse_answer("y\n"), Some(true));
        assert_eq!(parse_answer("  N  "), Some(false));
        assert_eq!(parse_answer("yes"), None);
        assert_eq!(parse_answer(""), None);
    }

    #[test]
    fn test_present_icon_skips_prompt() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let icon = temp.path().join("icon.ico");
        std::fs::write(&icon, b"\0\0\x01\0").unwrap();

        let mut out = Vec::new();
        let resolution = IconGate::new(&icon)
            .resolve(Cursor::new("n\n"), &mut out)
            .unwrap();

        assert_eq!(resolution.state, GateState::ResolvedYes { use_icon: true });
        assert_eq!(resolution.prompts, 0);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_then_upper_y() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let icon = temp.path().join("icon.ico");

        let mut out = Vec::new();
        let resolution = IconGate::new(&icon)
            .resolve(Cursor::new("x\nY\n"), &mut out)
            .unwrap();

        assert_eq!(resolution.prompts, 2);
        assert!(resolution.proceed());
        assert!(!resolution.use_icon());

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.matches("(y/n)").count(), 2);
        assert!(text.contains("Invalid input"));
    }

    #[test]
    fn test_negative_answer_resolves_no() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let icon = temp.path().join("icon.ico");

        let resolution = IconGate::new(&icon)
            .resolve(Cursor::new("maybe\nn\n"), Vec::new())
            .unwrap();

        assert_eq!(resolution.state, GateState::ResolvedNo);
        assert!(!resolution.proceed());
        assert_eq!(resolution.prompts, 2);
    }

    #[test]
    fn test_end_of_input_resolves_no() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let icon = temp.path().join("icon.ico");

        let resolution = IconGate::new(&icon)
            .resolve(Cursor::new("x\n"), Vec::new())
            .unwrap();

        assert_eq!(resolution.state, GateState::ResolvedNo);
    }

    #[test]
    fn test_assume_yes_never_reads() {
        let temp = TempDir::new().expect("Failed to create temp dir");
        let icon = temp.path().join("icon.ico");

        let resolution = IconGate::new(&icon)
            .assume_yes(true)
            .resolve(Cursor::new(""), Vec::new())
            .unwrap();

        assert_eq!(resolution.state, GateState::ResolvedYes { use_icon: false });
        assert_eq!(resolution.prompts, 0);
    }
}

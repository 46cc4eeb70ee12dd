//! "Press any key" pause before exit.
//!
//! Keeps the console window open when the tool is launched by
//! double-click. The reader is chosen once at startup by
//! [`probe_key_reader`].

use crate::cli::OutputManager;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::terminal;
use is_terminal::IsTerminal;
use std::io::{self, BufRead};

/// Blocks until the user acknowledges.
pub trait RawKeyReader {
    /// Wait for one key press (or line, depending on the implementation)
    fn wait_for_key(&mut self) -> io::Result<()>;

    /// Prompt shown before waiting
    fn prompt(&self) -> &'static str {
        "Press any key to exit..."
    }
}

/// Reads a single key press with the terminal in raw mode.
#[derive(Debug, Default)]
pub struct RawModeKeyReader;

/// Restores cooked mode even if reading fails
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

impl RawKeyReader for RawModeKeyReader {
    fn wait_for_key(&mut self) -> io::Result<()> {
        let _guard = RawModeGuard::enable()?;

        loop {
            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
            {
                return Ok(());
            }
        }
    }
}

/// Line-buffered fallback: waits for Enter.
#[derive(Debug)]
pub struct LineKeyReader<R> {
    input: R,
}

impl<R: BufRead> LineKeyReader<R> {
    /// Reader over any buffered input
    pub fn new(input: R) -> Self {
        Self { input }
    }
}

impl LineKeyReader<io::BufReader<io::Stdin>> {
    /// Reader over the process's stdin; the stdin lock is only taken while reading
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead> RawKeyReader for LineKeyReader<R> {
    fn wait_for_key(&mut self) -> io::Result<()> {
        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(())
    }

    fn prompt(&self) -> &'static str {
        "Press Enter to exit..."
    }
}

/// Picks raw-mode reading when stdin is an interactive terminal that
/// accepts raw mode, and the line reader otherwise.
pub fn probe_key_reader() -> Box<dyn RawKeyReader> {
    if io::stdin().is_terminal() && RawModeGuard::enable().is_ok() {
        log::debug!("Using raw-mode key reader");
        Box::new(RawModeKeyReader)
    } else {
        log::debug!("Using line key reader");
        Box::new(LineKeyReader::stdin())
    }
}

/// Prints the prompt and blocks. Never fails: a broken reader falls back to
/// a stdin line read, and a broken stdin just returns.
pub fn pause(reader: &mut dyn RawKeyReader, output: &OutputManager) {
    pause_with_fallback(reader, &mut LineKeyReader::stdin(), output);
}

fn pause_with_fallback(
    reader: &mut dyn RawKeyReader,
    fallback: &mut dyn RawKeyReader,
    output: &OutputManager,
) {
    output.println(reader.prompt());

    if let Err(e) = reader.wait_for_key() {
        log::debug!("Key reader failed ({}), falling back to line input", e);
        output.println(fallback.prompt());
        let _ = fallback.wait_for_key();
    }
}

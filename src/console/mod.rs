//! Interactive console pieces: the icon gate and the exit pause.

mod gate;
mod pause;

pub use gate::{GateResolution, GateState, IconGate, parse_answer};
pub use pause::{LineKeyReader, RawKeyReader, RawModeKeyReader, pause, probe_key_reader};

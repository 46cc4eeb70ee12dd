//! # onefile_packager
//!
//! Build orchestration for applications shipped as a single executable.
//!
//! The crate drives an external single-file builder (PyInstaller by default)
//! and assembles a distribution folder around the binary it produces.
//!
//! ## Features
//!
//! - **Dependency bootstrap**: probe the Python environment and install
//!   missing build packages one by one
//! - **Live build output**: the builder's stdout and stderr are merged and
//!   echoed line by line while it runs
//! - **Deterministic assembly**: a fixed manifest is copied into one output
//!   folder, with per-entry required/optional handling
//! - **Console friendly**: a y/n gate for the optional icon and a final
//!   "press any key" pause for double-click launches
//!
//! ## Usage
//!
//! ```bash
//! onefile_packager deps            # install missing build dependencies
//! onefile_packager deps --check    # report only
//! onefile_packager build           # build and assemble
//! onefile_packager build --yes --no-pause --output-dir out
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod build;
pub mod cli;
pub mod config;
pub mod console;
pub mod deps;
pub mod dist;
pub mod error;
pub mod pipeline;

pub use build::{BuildCommand, OutputLines};
pub use cli::{Args, OutputManager};
pub use config::{BuilderSpec, Dependency, ManifestEntry, PackagerConfig};
pub use dist::AssemblyReport;
pub use error::{PackagerError, Result};
pub use pipeline::BuildOutcome;

/// Normal completion
pub const EXIT_SUCCESS: i32 = 0;

/// Any fatal stage failure
pub const EXIT_FAILURE: i32 = 1;

/// User declined to continue at the icon prompt
pub const EXIT_CANCELLED: i32 = 2;

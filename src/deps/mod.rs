//! Build-time dependency checks and installation.

mod installer;
mod probe;

pub use installer::{InstallReport, PackageInstaller, PipInstaller, install_missing};
pub use probe::{DependencyProbe, PythonModuleProbe, missing_dependencies};

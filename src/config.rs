//! Pipeline configuration.
//!
//! Everything the pipeline needs to know about the project being packaged
//! lives in [`PackagerConfig`]. The defaults describe the FRP tunnel tool;
//! the CLI overrides individual fields and tests build their own values.

use std::env::consts::EXE_SUFFIX;
use std::path::{Path, PathBuf};

/// Name of the binary the builder produces (without platform suffix)
pub const OUTPUT_NAME: &str = "Tool_FRP_Non-official";

/// Application entry point handed to the builder
pub const ENTRY_POINT: &str = "app.pyw";

/// Optional icon asset
pub const ICON_FILE: &str = "icon.ico";

/// Distribution folder created next to the project
pub const OUTPUT_DIR: &str = "frp-tunnel-tool";

/// Interpreter used for probing and installing dependencies
#[cfg(windows)]
pub const DEFAULT_PYTHON: &str = "python";

/// Interpreter used for probing and installing dependencies
#[cfg(not(windows))]
pub const DEFAULT_PYTHON: &str = "python3";

/// A build-time package the pipeline needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dependency {
    /// Name passed to the package manager
    pub package: String,
    /// Import name checked by the prober, when it differs from the package name
    pub module: Option<String>,
}

impl Dependency {
    /// Dependency whose import name matches its package name
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            module: None,
        }
    }

    /// Dependency imported under a different name than it is installed as
    pub fn with_module(package: impl Into<String>, module: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            module: Some(module.into()),
        }
    }

    /// Name the prober resolves
    pub fn module_name(&self) -> &str {
        self.module.as_deref().unwrap_or(&self.package)
    }
}

/// One file to copy into the distribution folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    /// Source path, relative to the working directory
    pub source: PathBuf,
    /// Missing required entries abort assembly; missing optional ones are skipped
    pub required: bool,
}

impl ManifestEntry {
    /// Entry that must exist
    pub fn required(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            required: true,
        }
    }

    /// Entry that is skipped with a warning when absent
    pub fn optional(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            required: false,
        }
    }
}

/// How to invoke the single-file builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuilderSpec {
    /// Builder executable
    pub program: String,
    /// Leading arguments, in order (single-file mode)
    pub base_args: Vec<String>,
    /// Name of the produced binary
    pub output_name: String,
    /// Icon asset, passed as `--icon=<path>` when used
    pub icon: PathBuf,
    /// Application entry point, always the last argument
    pub entry_point: PathBuf,
    /// Flag used by the preflight check; `None` skips running the tool
    pub version_arg: Option<String>,
}

impl Default for BuilderSpec {
    fn default() -> Self {
        Self {
            program: "pyinstaller".to_string(),
            base_args: vec!["--onefile".to_string()],
            output_name: OUTPUT_NAME.to_string(),
            icon: PathBuf::from(ICON_FILE),
            entry_point: PathBuf::from(ENTRY_POINT),
            version_arg: Some("--version".to_string()),
        }
    }
}

/// Complete pipeline configuration
#[derive(Debug, Clone)]
pub struct PackagerConfig {
    /// Python interpreter used by the prober and installer
    pub python: String,
    /// Packages required before building
    pub dependencies: Vec<Dependency>,
    /// Files copied into the distribution folder, in order
    pub manifest: Vec<ManifestEntry>,
    /// Distribution folder
    pub output_dir: PathBuf,
    /// Builder invocation
    pub builder: BuilderSpec,
}

impl Default for PackagerConfig {
    fn default() -> Self {
        let binary = Path::new("dist").join(format!("{OUTPUT_NAME}{EXE_SUFFIX}"));

        Self {
            python: DEFAULT_PYTHON.to_string(),
            dependencies: vec![
                Dependency::with_module("pyyaml", "yaml"),
                Dependency::new("PyQt5"),
                Dependency::with_module("pyinstaller", "PyInstaller"),
                Dependency::new("tqdm"),
            ],
            manifest: vec![
                ManifestEntry::optional(binary),
                ManifestEntry::optional(format!("frpc{EXE_SUFFIX}")),
                ManifestEntry::optional("frpc.ini"),
                ManifestEntry::optional(ICON_FILE),
                ManifestEntry::optional("frp-LICENSE"),
                ManifestEntry::optional("NOTICE"),
            ],
            output_dir: PathBuf::from(OUTPUT_DIR),
            builder: BuilderSpec::default(),
        }
    }
}

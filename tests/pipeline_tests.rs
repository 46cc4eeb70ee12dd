use onefile_packager::error::{BuildError, PackagerError};
use onefile_packager::pipeline::{BuildOutcome, run_build};
use onefile_packager::{BuilderSpec, ManifestEntry, OutputManager, PackagerConfig};
use std::io::Cursor;
use std::path::Path;
use tempfile::TempDir;

fn config_in(root: &Path, builder: BuilderSpec, manifest: Vec<ManifestEntry>) -> PackagerConfig {
    PackagerConfig {
        manifest,
        output_dir: root.join("out"),
        builder,
        ..PackagerConfig::default()
    }
}

#[tokio::test]
async fn test_declining_stops_before_builder_is_spawned() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let builder = BuilderSpec {
        program: "no-such-builder-e41f".to_string(),
        icon: temp.path().join("icon.ico"),
        ..BuilderSpec::default()
    };
    let config = config_in(temp.path(), builder, vec![]);

    let mut prompts = Vec::new();
    let outcome = run_build(
        &config,
        false,
        Cursor::new("n\n"),
        &mut prompts,
        &OutputManager::quiet(),
    )
    .await
    .expect("cancellation is not an error");

    assert_eq!(outcome, BuildOutcome::Cancelled);
    assert!(!config.output_dir.exists());
    assert!(String::from_utf8(prompts).unwrap().contains("(y/n)"));
}

#[cfg(unix)]
#[tokio::test]
async fn test_build_then_assemble() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let dist = temp.path().join("dist");
    let script = format!(
        "echo collecting modules; mkdir -p '{0}' && printf binary > '{0}/app'; echo done 1>&2",
        dist.display()
    );
    let builder = BuilderSpec {
        program: "sh".to_string(),
        base_args: vec!["-c".to_string(), script],
        icon: temp.path().join("icon.ico"),
        version_arg: None,
        ..BuilderSpec::default()
    };
    std::fs::write(temp.path().join("NOTICE"), "notice").unwrap();
    let manifest = vec![
        ManifestEntry::required(dist.join("app")),
        ManifestEntry::optional(temp.path().join("NOTICE")),
        ManifestEntry::optional(temp.path().join("frpc.ini")),
    ];
    let config = config_in(temp.path(), builder, manifest);

    let outcome = run_build(
        &config,
        true,
        Cursor::new(""),
        Vec::new(),
        &OutputManager::quiet(),
    )
    .await
    .expect("build should succeed");

    let BuildOutcome::Completed(report) = outcome else {
        panic!("build was cancelled");
    };
    assert_eq!(report.copied.len(), 2);
    assert_eq!(report.skipped, vec![temp.path().join("frpc.ini")]);
    assert_eq!(
        std::fs::read_to_string(config.output_dir.join("app")).unwrap(),
        "binary"
    );
}

#[cfg(unix)]
#[tokio::test]
async fn test_failed_build_skips_assembly() {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let icon = temp.path().join("icon.ico");
    std::fs::write(&icon, b"\0\0\x01\0").unwrap();
    let builder = BuilderSpec {
        program: "sh".to_string(),
        base_args: vec![
            "-c".to_string(),
            "echo 'error: missing module' 1>&2; exit 4".to_string(),
        ],
        icon,
        version_arg: None,
        ..BuilderSpec::default()
    };
    let config = config_in(
        temp.path(),
        builder,
        vec![ManifestEntry::optional(temp.path().join("NOTICE"))],
    );

    let err = run_build(
        &config,
        false,
        Cursor::new(""),
        Vec::new(),
        &OutputManager::quiet(),
    )
    .await
    .unwrap_err();

    assert!(matches!(
        err,
        PackagerError::Build(BuildError::Failed { code: 4 })
    ));
    assert!(!config.output_dir.exists());
}

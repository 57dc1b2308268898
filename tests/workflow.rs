// tests/workflow.rs

//! End-to-end add flow against a registry directory on disk.

mod common;

use bearnie::packages::PendingPackages;
use bearnie::{
    Installer, OverwritePolicy, PackageManifest, ProjectConfig, RegistryClient, RegistryLocation,
    Resolver, SilentProgress,
};
use common::{component, file, names, write_registry_dir};
use std::path::PathBuf;

#[tokio::test]
async fn test_add_from_local_registry() {
    let registry_dir = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();

    let mut styles = component("styles", &[]);
    styles.category = "foundation".to_string();
    styles.files = vec![file("global.css", "styles/global.css", ":root {}\n")];

    let mut toast = component("toast", &["styles"]);
    toast.dependencies = names(&["clsx", "nanoid"]);
    toast.files.push(file("toast.ts", "utils/toast.ts", "export {};\n"));

    write_registry_dir(registry_dir.path(), &[styles, toast]);

    std::fs::write(
        project.path().join("package.json"),
        r#"{"dependencies":{"astro":"^5.0.0","clsx":"^2.1.0"}}"#,
    )
    .unwrap();
    ProjectConfig::default().save(project.path()).unwrap();

    let location = RegistryLocation::select(
        Some(registry_dir.path().to_path_buf()),
        Some("https://example.invalid/registry"),
    )
    .unwrap();
    let client = RegistryClient::new(&location).unwrap();

    let index = client.fetch_index().await.unwrap();
    assert_eq!(index.names(), names(&["styles", "toast"]));

    let plan = Resolver::new(client.clone())
        .plan(&names(&["toast"]))
        .await
        .unwrap();
    assert_eq!(plan.order, names(&["styles", "toast"]));
    assert_eq!(plan.extra_dependencies(), 1);

    let config = ProjectConfig::load_or_default(project.path()).unwrap();
    let report = Installer::new(client, project.path(), config)
        .with_policy(OverwritePolicy::from_force(false))
        .install_all(&plan.order, &SilentProgress::new())
        .await;

    assert!(report.is_complete());
    assert_eq!(report.installed, names(&["styles", "toast"]));
    assert_eq!(
        report.written,
        vec![
            PathBuf::from("src/components/bearnie/styles/global.css"),
            PathBuf::from("src/components/bearnie/toast/toast.astro"),
            PathBuf::from("src/utils/toast.ts"),
        ]
    );

    // Only packages the project doesn't already declare
    let manifest = PackageManifest::load(project.path()).unwrap();
    let pending = PendingPackages::from_report(&report, manifest.as_ref());
    assert_eq!(pending.dependencies, names(&["nanoid"]));
    assert!(pending.dev_dependencies.is_empty());
}

#[tokio::test]
async fn test_second_add_skips_everything() {
    let registry_dir = tempfile::tempdir().unwrap();
    let project = tempfile::tempdir().unwrap();
    write_registry_dir(registry_dir.path(), &[component("button", &[])]);

    let client = RegistryClient::new(&RegistryLocation::Local(registry_dir.path().to_path_buf()))
        .unwrap();
    let installer = Installer::new(client, project.path(), ProjectConfig::default());

    let first = installer
        .install_all(&names(&["button"]), &SilentProgress::new())
        .await;
    assert_eq!(first.written.len(), 1);

    let second = installer
        .install_all(&names(&["button"]), &SilentProgress::new())
        .await;
    assert!(second.written.is_empty());
    assert_eq!(second.skipped, first.written);
    assert!(second.is_complete());
}

#[tokio::test]
async fn test_missing_local_index_is_unavailable() {
    let registry_dir = tempfile::tempdir().unwrap();
    let client = RegistryClient::new(&RegistryLocation::Local(registry_dir.path().to_path_buf()))
        .unwrap();

    let err = client.fetch_index().await.unwrap_err();
    assert!(matches!(err, bearnie::Error::RegistryUnavailable(_)));
}

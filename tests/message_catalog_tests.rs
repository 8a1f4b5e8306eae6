//! Layered auth-error message catalogs
use std::fs;

use signup_check::messages::{
    friendly_auth_message, CatalogPriority, MessageCatalog, UNKNOWN_ERROR_MESSAGE,
};

const OVERRIDE: &str = r#"
[catalog]
name = "acme"

[[messages]]
error = "Invalid login credentials"
display = "Wrong email or password."

[[messages]]
error = "Account locked"
display = "Your account is locked. Contact support."
"#;

#[test]
fn test_builtin_mapping_and_fallback() {
    assert_eq!(
        friendly_auth_message("User already registered"),
        "An account with this email already exists. Try signing in instead."
    );
    assert_eq!(friendly_auth_message("Something new"), "Something new");
    assert_eq!(friendly_auth_message(""), UNKNOWN_ERROR_MESSAGE);
}

#[test]
fn test_workspace_catalog_overrides_builtin() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("acme.toml"), OVERRIDE).expect("write catalog");

    let catalog = MessageCatalog::with_directories(&[(
        dir.path().to_path_buf(),
        CatalogPriority::Workspace,
    )]);

    assert_eq!(
        catalog.friendly_message("Invalid login credentials"),
        "Wrong email or password."
    );
    assert_eq!(
        catalog.friendly_message("Account locked"),
        "Your account is locked. Contact support."
    );
    // Untouched built-in entries survive
    assert!(catalog.lookup("Email not confirmed").is_some());

    let entry = catalog.entry("Account locked").expect("entry");
    assert_eq!(entry.priority, CatalogPriority::Workspace);
    assert_eq!(entry.source_path.as_deref(), Some(dir.path().join("acme.toml").as_path()));
}

#[test]
fn test_global_does_not_beat_workspace() {
    let global = tempfile::tempdir().expect("tempdir");
    let workspace = tempfile::tempdir().expect("tempdir");
    fs::write(workspace.path().join("a.toml"), OVERRIDE).expect("write catalog");
    fs::write(
        global.path().join("a.toml"),
        "[catalog]\nname = \"g\"\n\n[[messages]]\nerror = \"Account locked\"\ndisplay = \"global\"\n",
    )
    .expect("write catalog");

    // Workspace loaded first, global afterwards: priority still decides
    let catalog = MessageCatalog::with_directories(&[
        (workspace.path().to_path_buf(), CatalogPriority::Workspace),
        (global.path().to_path_buf(), CatalogPriority::UserGlobal),
    ]);
    assert_eq!(
        catalog.lookup("Account locked"),
        Some("Your account is locked. Contact support.")
    );
}

#[test]
fn test_broken_files_are_skipped() {
    let dir = tempfile::tempdir().expect("tempdir");
    fs::write(dir.path().join("broken.toml"), "[[messages\nerror =").expect("write");
    fs::write(dir.path().join("good.toml"), OVERRIDE).expect("write");
    fs::write(dir.path().join("notes.txt"), "ignored").expect("write");

    let mut catalog = MessageCatalog::builtin();
    let loaded = catalog
        .load_directory(dir.path(), CatalogPriority::UserGlobal)
        .expect("load directory");
    assert_eq!(loaded, 1);
    assert!(catalog.lookup("Account locked").is_some());
}

#[test]
fn test_missing_directory_is_empty() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut catalog = MessageCatalog::new();
    let loaded = catalog
        .load_directory(&dir.path().join("nope"), CatalogPriority::Workspace)
        .expect("load directory");
    assert_eq!(loaded, 0);
    assert!(catalog.is_empty());
}

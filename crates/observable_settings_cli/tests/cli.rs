//! End-to-end runs of `settings-gen` over a temporary source tree.

use clap::Parser;
use observable_settings_cli::{Args, CliError, run};
use std::fs;
use std::path::Path;

const ROOT_SETTINGS: &str = r#"
#[derive(SettingsSource)]
pub struct AppSettings {
    #[observable_setting]
    _volume: f64,
    context: SettingsContext,
}
"#;

const UI_SETTINGS: &str = r#"
#[derive(SettingsSource)]
pub struct Theme {
    #[observable_setting("ui.accent")]
    _accent: String,
    context: SettingsContext,
}

fn helper() {
    struct Scratch {
        #[observable_setting]
        _temp: u8,
        context: SettingsContext,
    }
}
"#;

fn tree(dir: &Path) -> (String, String) {
    let src = dir.join("src");
    fs::create_dir_all(src.join("ui")).unwrap();
    let lib = src.join("lib.rs");
    let ui = src.join("ui").join("mod.rs");
    fs::write(&lib, ROOT_SETTINGS).unwrap();
    fs::write(&ui, UI_SETTINGS).unwrap();
    (
        lib.to_string_lossy().into_owned(),
        ui.to_string_lossy().into_owned(),
    )
}

#[test]
fn writes_one_file_per_type() {
    let dir = tempfile::tempdir().unwrap();
    let (lib, ui) = tree(dir.path());
    let out = dir.path().join("generated");

    let args = Args::parse_from([
        "settings-gen".to_string(),
        "--root".to_string(),
        dir.path().join("src").to_string_lossy().into_owned(),
        "--out-dir".to_string(),
        out.to_string_lossy().into_owned(),
        lib,
        ui,
    ]);
    let outcome = run(&args, &mut Vec::new()).unwrap();

    assert_eq!(outcome.units, 2);
    assert_eq!(outcome.diagnostics, 1);
    assert_eq!(
        outcome.written,
        vec![
            out.join("AppSettings_observable_settings.g.rs"),
            out.join("ui.Theme_observable_settings.g.rs"),
        ]
    );

    let theme = fs::read_to_string(out.join("ui.Theme_observable_settings.g.rs")).unwrap();
    assert!(theme.starts_with("// @generated by settings-gen for `ui::Theme`."));
    assert!(theme.contains("\"ui.accent\""));
    assert!(theme.contains(":: observable_settings_core :: ObservableSettings for Theme"));
    assert!(syn::parse_file(&theme).is_ok());
}

#[test]
fn prints_to_stdout_without_out_dir() {
    let dir = tempfile::tempdir().unwrap();
    let (lib, _) = tree(dir.path());

    let args = Args::parse_from([
        "settings-gen",
        "--crate-path",
        "observable_settings",
        lib.as_str(),
    ]);
    let mut stdout = Vec::new();
    let outcome = run(&args, &mut stdout).unwrap();

    assert!(outcome.written.is_empty());
    let text = String::from_utf8(stdout).unwrap();
    assert!(text.contains("observable_settings :: ObservableSettings for AppSettings"));
    assert!(text.contains("fn set_volume"));
}

#[test]
fn missing_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("absent.rs");

    let args = Args::parse_from(["settings-gen", missing.to_str().unwrap()]);
    let err = run(&args, &mut Vec::new()).unwrap_err();
    assert!(matches!(err, CliError::Codegen(_)), "{err}");
}

#[test]
fn unparseable_input_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.rs");
    fs::write(&broken, "pub struct {").unwrap();

    let args = Args::parse_from(["settings-gen", broken.to_str().unwrap()]);
    assert!(run(&args, &mut Vec::new()).is_err());
}

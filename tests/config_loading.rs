// Layered configuration as the CLI loads it
use std::fs;
use std::time::Duration;

use semtrack::config::{defaults::default_settings, load_settings};
use semtrack::render::{Color, Rgb, ThemeLookup};
use semtrack::{Category, TrackerConfig, TrackerError};
use serial_test::serial;
use tempfile::TempDir;

/// Points XDG_CONFIG_HOME at `dir` for the duration of `f`.
fn with_xdg<R>(dir: &TempDir, f: impl FnOnce() -> R) -> R {
    let original = std::env::var_os("XDG_CONFIG_HOME");
    // SAFETY: every test in this file is #[serial(xdg_env)]
    unsafe {
        std::env::set_var("XDG_CONFIG_HOME", dir.path());
    }
    let result = f();
    // SAFETY: Same as above - restoring original env state
    unsafe {
        match original {
            Some(val) => std::env::set_var("XDG_CONFIG_HOME", val),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }
    result
}

#[test]
#[serial(xdg_env)]
fn test_defaults_apply_without_any_config_file() {
    let xdg = TempDir::new().unwrap();

    let settings = with_xdg(&xdg, || load_settings(None)).unwrap();
    assert_eq!(settings, default_settings());

    let config = TrackerConfig::from(settings);
    assert_eq!(config.repaint_delay, Duration::from_millis(5));
    assert!(config.filter_while_pending);
}

#[test]
#[serial(xdg_env)]
fn test_explicit_file_overrides_user_file_per_theme_field() {
    let xdg = TempDir::new().unwrap();
    let user_dir = xdg.path().join("semtrack");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(
        user_dir.join("semtrack.toml"),
        r##"
repaintDelayMs = 30

[theme.class]
color = "#112233"
italic = true
"##,
    )
    .unwrap();

    let project = TempDir::new().unwrap();
    let explicit = project.path().join("semtrack.toml");
    fs::write(
        &explicit,
        r##"
[theme.class]
color = "#ff0000"
"##,
    )
    .unwrap();

    let settings = with_xdg(&xdg, || load_settings(Some(explicit.as_path()))).unwrap();
    let config = TrackerConfig::from(settings);
    assert_eq!(config.repaint_delay, Duration::from_millis(30));

    let style = config.theme.style_for(Category::Class).unwrap();
    assert_eq!(style.foreground, Color::Rgb(Rgb::new(0xff, 0, 0)));
    assert!(style.italic);
}

#[test]
#[serial(xdg_env)]
fn test_broken_user_file_is_skipped() {
    let xdg = TempDir::new().unwrap();
    let user_dir = xdg.path().join("semtrack");
    fs::create_dir_all(&user_dir).unwrap();
    fs::write(user_dir.join("semtrack.toml"), "repaintDelayMs = ").unwrap();

    let settings = with_xdg(&xdg, || load_settings(None)).unwrap();
    assert_eq!(settings, default_settings());
}

#[test]
#[serial(xdg_env)]
fn test_broken_explicit_file_is_an_error() {
    let xdg = TempDir::new().unwrap();
    let project = TempDir::new().unwrap();
    let explicit = project.path().join("semtrack.toml");
    fs::write(&explicit, "[theme.class]\ncolor = \"red\"\n").unwrap();

    let err = with_xdg(&xdg, || load_settings(Some(explicit.as_path()))).unwrap_err();
    assert!(matches!(err, TrackerError::Config { .. }));
}

use campaign_browser::config::Config;
use campaign_browser::keymap::{Action, KeyBinding, KeymapPreset};
use crossterm::event::{KeyCode, KeyModifiers};
use tempfile::TempDir;

#[test]
fn test_keymap_override_in_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");

    let mut config = Config::default();
    config.keymap.preset = KeymapPreset::Vim;
    // Map 'x' to Retry (normally 'r')
    config
        .keymap
        .overrides
        .push(KeyBinding::new("x", Action::Retry));
    config.save(&config_path).unwrap();

    let loaded = Config::load_or_create(&config_path).unwrap();
    assert_eq!(loaded.keymap.preset, KeymapPreset::Vim);
    assert_eq!(loaded.keymap.overrides.len(), 1);

    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('x'), KeyModifiers::NONE),
        Some(Action::Retry)
    );
    // The override shadows the preset binding for the same action
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('r'), KeyModifiers::NONE),
        None
    );
    // Unrelated preset bindings still work
    assert_eq!(
        loaded.keymap.get_action(KeyCode::Char('j'), KeyModifiers::NONE),
        Some(Action::MoveDown)
    );
    assert_eq!(loaded.keymap.footer_error(), "Retry: x | Quit: q");
}

#[test]
fn test_hand_written_keymap_section() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(
        &config_path,
        r#"
endpoint = "https://campaigns.test/v1/list"

[keymap]
preset = "vim"

[[keymap.overrides]]
key = "ctrl+l"
action = "refresh"
"#,
    )
    .unwrap();

    let config = Config::load_or_create(&config_path).unwrap();

    assert_eq!(config.endpoint, "https://campaigns.test/v1/list");
    assert_eq!(
        config
            .keymap
            .get_action(KeyCode::Char('l'), KeyModifiers::CONTROL),
        Some(Action::Refresh)
    );
    assert_eq!(
        config.keymap.get_action(KeyCode::F(5), KeyModifiers::NONE),
        None
    );
}

//! Tests for the config file text layer.

use crate::message::{MessageLevel, TracingSink};
use crate::test_fixtures::RecordingSink;

use super::defaults::key;
use super::{ConfigError, InputBinding, Kind, Registry, Settings, load_str, save_string};

const QUIET: TracingSink = TracingSink::with_mask(MessageLevel::empty());

fn registry() -> Registry {
    Registry::builtin().unwrap()
}

fn default_settings(registry: &Registry) -> Settings {
    let mut settings = Settings::default();
    registry.reset_to_defaults(&mut settings);
    settings
}

fn load(text: &str) -> (Settings, super::LoadReport) {
    let registry = registry();
    let mut settings = Settings::default();
    let report = load_str(&registry, &mut settings, text, &QUIET).unwrap();
    (settings, report)
}

mod saving {
    use super::*;

    #[test]
    fn starts_with_first_section_header() {
        let registry = registry();
        let text = save_string(&registry, &default_settings(&registry));

        assert!(text.starts_with("# Misc settings\n"));
        assert!(text.contains("\n\n# Sound settings\n"));
    }

    #[test]
    fn writes_values_by_kind() {
        let registry = registry();
        let text = save_string(&registry, &default_settings(&registry));

        assert!(text.contains("samplerate = 44100\n"));
        assert!(text.contains("hud_flags = 0x1f\n"));
        assert!(text.contains("fullscreen = true\n"));
        assert!(text.contains("mapcolor_back = 247\n"));
        assert!(text.contains("player_name = \"Player\"\n"));
        assert!(text.contains("autoload = []\n"));
        assert!(text.contains("key_up = { key = 173, mouse = -1, joy = -1 }\n"));
    }

    #[test]
    fn lists_every_entry_once() {
        let registry = registry();
        let text = save_string(&registry, &default_settings(&registry));

        for entry in registry.settings() {
            let prefix = format!("{} = ", entry.name());
            let count = text.lines().filter(|l| l.starts_with(&prefix)).count();
            assert_eq!(count, 1, "{}", entry.name());
        }
    }

    #[test]
    fn output_is_valid_toml() {
        let registry = registry();
        let text = save_string(&registry, &default_settings(&registry));

        let table: toml::Table = toml::from_str(&text).unwrap();
        assert_eq!(table.len(), registry.settings().count());
    }
}

mod round_trip {
    use super::*;

    #[test]
    fn defaults_survive_save_and_load() {
        let registry = registry();
        let original = default_settings(&registry);

        let (loaded, report) = load(&save_string(&registry, &original));

        assert_eq!(loaded, original);
        assert!(report.is_clean());
        assert!(report.defaulted.is_empty());
        assert_eq!(report.applied.len(), registry.settings().count());
    }

    #[test]
    fn edited_values_survive_save_and_load() {
        let registry = registry();
        let mut original = default_settings(&registry);
        original.misc.player_name = "say \"hi\" \\ bye".to_string();
        original.misc.hud_flags = 0xab;
        original.misc.autoload = vec!["a.wad".to_string(), "b c.deh".to_string()];
        original.files.wadfiles[2] = r"C:\doom\sigil.wad".to_string();
        original.sound.pitched_sounds = true;
        original.keys.fire = InputBinding::new(1, 2, 3);
        original.keys.automap = InputBinding::NONE;
        original.messages.chat_macros[0] = "I'm here".to_string();

        let (loaded, report) = load(&save_string(&registry, &original));

        assert_eq!(loaded, original);
        assert!(report.is_clean());
    }
}

mod loading {
    use super::*;

    #[test]
    fn empty_text_gives_defaults() {
        let registry = registry();
        let (settings, report) = load("");

        assert_eq!(settings, default_settings(&registry));
        assert!(report.applied.is_empty());
        assert_eq!(report.defaulted.len(), registry.settings().count());
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let (settings, report) = load("bogus = 1\nsfx_volume = 3\n");

        assert_eq!(settings.sound.sfx_volume, 3);
        assert_eq!(report.unknown, ["bogus"]);
        assert!(report.is_clean());
    }

    #[test]
    fn headers_are_not_keys() {
        let (_, report) = load("\"Sound settings\" = 1\n");
        assert_eq!(report.unknown, ["Sound settings"]);
    }

    #[test]
    fn out_of_range_uses_default() {
        let (settings, report) = load("sfx_volume = 3000\n");

        assert_eq!(settings.sound.sfx_volume, 8);
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            report.warnings[0],
            ConfigError::OutOfRange { value: 3000, .. }
        ));
        assert!(!report.applied.contains(&"sfx_volume"));
    }

    #[test]
    fn value_too_large_for_storage_uses_default() {
        let (settings, report) = load("samplerate = 99999999999\n");

        assert_eq!(settings.sound.samplerate, 44_100);
        assert!(matches!(
            report.warnings[0],
            ConfigError::OutOfRange { value: 99_999_999_999, .. }
        ));
    }

    #[test]
    fn unbounded_entries_take_any_integer() {
        let (settings, report) = load("message_timer = -5\n");

        assert_eq!(settings.messages.message_timer, -5);
        assert!(report.is_clean());
    }

    #[test]
    fn wrong_type_uses_default() {
        let (settings, report) = load("player_name = 5\n");

        assert_eq!(settings.misc.player_name, "Player");
        assert!(matches!(
            report.warnings[0],
            ConfigError::TypeMismatch { expected: Kind::String, found: "integer", .. }
        ));
    }

    #[test]
    fn hex_literal_is_read() {
        let (settings, _) = load("hud_flags = 0x2a\n");
        assert_eq!(settings.misc.hud_flags, 42);
    }

    #[test]
    fn boolean_accepts_zero_and_one() {
        let (settings, report) = load("fullscreen = 0\nuse_mouse = 1\n");

        assert!(!settings.video.fullscreen);
        assert!(settings.mouse.use_mouse);
        assert!(report.is_clean());
    }

    #[test]
    fn boolean_rejects_other_integers() {
        let (settings, report) = load("fullscreen = 2\n");

        assert!(settings.video.fullscreen);
        assert_eq!(report.warnings.len(), 1);
    }

    #[test]
    fn array_with_non_string_uses_default() {
        let (settings, report) = load("autoload = [\"a.wad\", 1]\n");

        assert!(settings.misc.autoload.is_empty());
        assert!(matches!(report.warnings[0], ConfigError::TypeMismatch { .. }));
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let registry = registry();
        let mut settings = Settings::default();

        let err = load_str(&registry, &mut settings, "sfx_volume = \n", &QUIET).unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }
}

mod inputs {
    use super::*;

    #[test]
    fn partial_table_leaves_fields_unset() {
        let (settings, report) = load("key_up = { key = 10 }\n");

        assert_eq!(settings.keys.up, InputBinding::key(10));
        assert!(report.is_clean());
    }

    #[test]
    fn bare_integer_binds_key_only() {
        let (settings, _) = load("key_fire = 42\n");
        assert_eq!(settings.keys.fire, InputBinding::key(42));
    }

    #[test]
    fn bad_field_keeps_the_good_ones() {
        let (settings, report) = load("key_fire = { key = 600, mouse = 4, joy = 5 }\n");

        assert_eq!(settings.keys.fire, InputBinding::new(key::RCTRL, 4, 5));
        assert_eq!(report.warnings.len(), 1);
        assert!(matches!(
            report.warnings[0],
            ConfigError::InvalidInput { field: "key", value: 600, .. }
        ));
    }

    #[test]
    fn unknown_field_uses_default() {
        let (settings, report) = load("key_up = { button = 3 }\n");

        assert_eq!(settings.keys.up, InputBinding::key(key::UPARROW));
        assert!(matches!(
            report.warnings[0],
            ConfigError::TypeMismatch { expected: Kind::Input, .. }
        ));
    }
}

mod reporting {
    use super::*;

    fn load_recorded(text: &str) -> RecordingSink {
        let registry = registry();
        let mut settings = Settings::default();
        let sink = RecordingSink::new();
        load_str(&registry, &mut settings, text, &sink).unwrap();
        sink
    }

    #[test]
    fn out_of_range_emits_one_warning() {
        let sink = load_recorded("sfx_volume = 3000\n");

        let warnings = sink.at(MessageLevel::WARN);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("sfx_volume"));
        assert!(warnings[0].ends_with("using default"));
    }

    #[test]
    fn type_mismatch_emits_one_warning() {
        let sink = load_recorded("player_name = 5\n");
        assert_eq!(sink.at(MessageLevel::WARN).len(), 1);
    }

    #[test]
    fn unknown_key_is_debug_only() {
        let sink = load_recorded("bogus = 1\n");

        assert!(sink.at(MessageLevel::WARN).is_empty());
        assert!(
            sink.at(MessageLevel::DEBUG)
                .iter()
                .any(|m| m.contains("'bogus'"))
        );
    }

    #[test]
    fn clean_load_emits_no_warnings() {
        let registry = registry();
        let text = save_string(&registry, &default_settings(&registry));

        let sink = load_recorded(&text);
        assert!(sink.at(MessageLevel::WARN).is_empty());
    }
}

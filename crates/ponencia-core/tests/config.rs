//! Layered configuration: defaults, project-local TOML, environment.

use std::path::PathBuf;

use figment::Jail;
use ponencia_core::PonenciaConfig;

#[test]
fn defaults_without_any_source() {
    Jail::expect_with(|_jail| {
        let config = PonenciaConfig::load().expect("defaults load");
        assert_eq!(config.segment.min_length, 500);
        assert!(config.segment.strip_inline_footnotes);
        assert_eq!(config.store.path, None);
        Ok(())
    });
}

#[test]
fn local_toml_overrides_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "ponencia.toml",
            r#"
[segment]
min_length = 1000

[store]
path = "corpus.duckdb"
full_text = true

[registry]
path = "data/justices.json"
"#,
        )?;

        let config = PonenciaConfig::load().expect("config loads");
        assert_eq!(config.segment.min_length, 1000);
        assert!(config.segment.strip_inline_footnotes);
        assert_eq!(config.store.path, Some(PathBuf::from("corpus.duckdb")));
        assert!(config.store.full_text);
        assert_eq!(config.registry.path, Some(PathBuf::from("data/justices.json")));
        Ok(())
    });
}

#[test]
fn env_beats_local_toml() {
    Jail::expect_with(|jail| {
        jail.create_file("ponencia.toml", "[segment]\nmin_length = 1000\n")?;
        jail.set_env("PONENCIA_SEGMENT__MIN_LENGTH", "200");
        jail.set_env("PONENCIA_SEGMENT__STRIP_INLINE_FOOTNOTES", "false");

        let config = PonenciaConfig::load().expect("config loads");
        assert_eq!(config.segment.min_length, 200);
        assert!(!config.segment.strip_inline_footnotes);
        Ok(())
    });
}

#[test]
fn invalid_value_is_a_config_error() {
    Jail::expect_with(|jail| {
        jail.set_env("PONENCIA_SEGMENT__MIN_LENGTH", "lots");
        let err = PonenciaConfig::load().unwrap_err();
        assert!(err.to_string().starts_with("configuration error"));
        Ok(())
    });
}

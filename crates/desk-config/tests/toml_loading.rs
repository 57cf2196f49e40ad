//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use pretty_assertions::assert_eq;
use desk_config::DeskConfig;

#[test]
fn loads_server_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "https://qa.example.com"
chat_timeout_secs = 120
user_agent = "desk-test"
"#,
        )?;

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.server.base_url, "https://qa.example.com");
        assert_eq!(config.server.chat_timeout_secs, 120);
        assert_eq!(config.server.user_agent, "desk-test");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[general]
default_qa_type = "DATABASE_QA"
"#,
        )?;

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.general.default_qa_type, "DATABASE_QA");
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.server.chat_timeout_secs, 600);
        assert_eq!(config.auth.keyring_service, "desk-cli");
        Ok(())
    });
}

#[test]
fn env_overrides_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[server]
base_url = "https://from-toml.example.com"
"#,
        )?;
        jail.set_env("DESK_SERVER__BASE_URL", "https://from-env.example.com");
        jail.set_env("DESK_AUTH__TOKEN", "tok-env");

        let config: DeskConfig = Figment::from(Serialized::defaults(DeskConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("DESK_").split("__"))
            .extract()?;

        assert_eq!(config.server.base_url, "https://from-env.example.com");
        assert!(config.auth.has_token());
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".desk")).expect("mkdir .desk");
        jail.create_file(
            ".desk/config.toml",
            r#"
[server]
chat_timeout_secs = 30
"#,
        )?;

        let config = DeskConfig::load().expect("config loads");
        assert_eq!(config.server.chat_timeout_secs, 30);
        Ok(())
    });
}

#[test]
fn wrong_type_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("DESK_SERVER__CHAT_TIMEOUT_SECS", "ten minutes");
        let result = DeskConfig::load();
        assert!(matches!(
            result,
            Err(desk_config::ConfigError::Figment(_))
        ));
        Ok(())
    });
}

//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use gw_config::{ConfigError, GwConfig};
use gw_core::GeoPoint;
use pretty_assertions::assert_eq;

fn from_file(path: &str) -> Result<GwConfig, ConfigError> {
    GwConfig::from_figment(
        &Figment::from(Serialized::defaults(GwConfig::default())).merge(Toml::file(path)),
    )
}

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://ops.guardwise.test/api"
timeout_secs = 20
"#,
        )?;

        let config = from_file("config.toml").expect("config loads");
        assert_eq!(config.api.base_url, "https://ops.guardwise.test/api");
        assert_eq!(config.api.timeout_secs, 20);
        assert!(config.api.user_agent.starts_with("guardwise-staff/"));
        Ok(())
    });
}

#[test]
fn loads_full_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://ops.guardwise.test/api/"

[polling]
conveyance_interval_secs = 15
attendance_interval_secs = 120
clock_tick_millis = 500

[location]
latitude = 12.9716
longitude = 77.5946
clock_in_timeout_secs = 8
report_timeout_secs = 3

[session]
dir = "/var/lib/guardwise"
"#,
        )?;

        let config = from_file("config.toml").expect("config loads");
        assert_eq!(config.api.normalized_base_url(), "https://ops.guardwise.test/api");
        assert_eq!(config.polling.conveyance_interval_secs, 15);
        assert_eq!(config.polling.attendance_interval_secs, 120);
        assert_eq!(config.polling.clock_tick_millis, 500);
        assert_eq!(
            config.location.fixed_position(),
            Some(GeoPoint::new(12.9716, 77.5946))
        );
        assert_eq!(config.location.clock_in_timeout_secs, 8);
        assert_eq!(config.location.report_timeout_secs, 3);
        assert_eq!(config.session.dir, "/var/lib/guardwise");
        Ok(())
    });
}

#[test]
fn partial_section_keeps_other_defaults() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[polling]
conveyance_interval_secs = 10
"#,
        )?;

        let config = from_file("config.toml").expect("config loads");
        assert_eq!(config.polling.conveyance_interval_secs, 10);
        assert_eq!(config.polling.attendance_interval_secs, 60);
        assert_eq!(config.polling.clock_tick_millis, 1_000);
        assert_eq!(config.api.base_url, "http://localhost:4000/api");
        Ok(())
    });
}

#[test]
fn invalid_values_fail_validation() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[polling]
clock_tick_millis = 0
"#,
        )?;

        let err = from_file("config.toml").expect_err("zero tick must be rejected");
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "polling.clock_tick_millis"));
        Ok(())
    });
}

#[test]
fn project_local_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".guardwise")?;
        jail.create_file(
            ".guardwise/config.toml",
            r#"
[api]
base_url = "https://site.guardwise.test/api"
"#,
        )?;

        let config = GwConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://site.guardwise.test/api");
        Ok(())
    });
}

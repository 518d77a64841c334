//! Configuration loading and validation for Vantage checks
//!
//! This module parses a TOML configuration into an ordered list of typed
//! check definitions, applies defaults (via serde defaults on schema types),
//! and performs strict validation with field-path error messages.
//!
//! Validation is deliberately narrow. Structural problems (duplicate names,
//! a bare `tcp` check without a port) are fatal at load time; a missing
//! `url` or `host` is not, because the probes surface those as DOWN results
//! per check rather than preventing startup. Unknown `type` strings also
//! pass validation and resolve to WARN results at probe time.

use crate::{CoreError, Result};
use schema::{CheckDefinition, DiskCheck, HttpCheck, TcpCheck, UnknownCheck};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Default config location; override with `VANTAGE_CONFIG` or `--config`
pub const DEFAULT_CONFIG_PATH: &str = "/config/vantage.toml";

/// One `[[services]]` entry as written in the config file.
///
/// All address fields are optional at parse time so that incomplete entries
/// load and surface as per-check failures instead of startup errors.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ServiceEntry {
    /// Unique check name
    pub name: String,
    /// Check kind: http | tcp | mysql | redis | anything else (unknown)
    #[serde(rename = "type")]
    pub kind: String,
    /// URL for http checks
    #[serde(default)]
    pub url: Option<String>,
    /// Host for tcp-family checks
    #[serde(default)]
    pub host: Option<String>,
    /// Port for tcp-family checks; defaults: mysql 3306, redis 6379
    #[serde(default)]
    pub port: Option<u16>,
    /// Request timeout in seconds for http checks
    #[serde(default)]
    pub timeout_s: Option<f64>,
}

/// The `[system]` table
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct SystemConfig {
    /// Disk checks to run each cycle
    #[serde(default)]
    pub disk_checks: Vec<DiskCheck>,
}

/// Top-level configuration, loaded once at startup and read-only afterwards
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Settings {
    /// Service checks, probed in file order
    #[serde(default)]
    pub services: Vec<ServiceEntry>,
    /// System-level checks
    #[serde(default)]
    pub system: SystemConfig,
}

impl Settings {
    /// Validate the configuration and return `Result<()>` with field-path errors
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for (i, svc) in self.services.iter().enumerate() {
            if svc.name.trim().is_empty() {
                return Err(CoreError::ValidationError(format!(
                    "services[{}].name: cannot be empty",
                    i
                )));
            }
            if !seen.insert(svc.name.clone()) {
                return Err(CoreError::ValidationError(format!(
                    "services[{}].name: duplicate name '{}'",
                    i, svc.name
                )));
            }
            // A bare tcp check has no sensible default port
            if svc.kind.eq_ignore_ascii_case("tcp") && svc.port.is_none() {
                return Err(CoreError::ValidationError(format!(
                    "services[{}].port: required for type 'tcp'",
                    i
                )));
            }
        }

        for (i, disk) in self.system.disk_checks.iter().enumerate() {
            if disk.warn_pct_free_below < 0.0 || disk.warn_pct_free_below > 100.0 {
                return Err(CoreError::ValidationError(format!(
                    "system.disk_checks[{}].warn_pct_free_below: must be between 0 and 100",
                    i
                )));
            }
        }

        Ok(())
    }

    /// Derive the ordered service check definitions
    #[must_use]
    pub fn service_definitions(&self) -> Vec<CheckDefinition> {
        self.services.iter().map(to_definition).collect()
    }

    /// Derive the ordered disk check definitions.
    ///
    /// Entries with an empty path are skipped.
    #[must_use]
    pub fn disk_definitions(&self) -> Vec<CheckDefinition> {
        self.system
            .disk_checks
            .iter()
            .filter(|d| !d.path.is_empty())
            .map(|d| CheckDefinition::Disk(d.clone()))
            .collect()
    }
}

fn to_definition(entry: &ServiceEntry) -> CheckDefinition {
    let kind = entry.kind.to_ascii_lowercase();
    match kind.as_str() {
        "http" => CheckDefinition::Http(HttpCheck {
            name: entry.name.clone(),
            url: entry.url.clone(),
            timeout_s: entry.timeout_s.unwrap_or(2.0),
        }),
        "mysql" => tcp_definition(entry, 3306, "mysql"),
        "redis" => tcp_definition(entry, 6379, "redis"),
        "tcp" => tcp_definition(entry, 0, "tcp"),
        _ => CheckDefinition::Unknown(UnknownCheck {
            name: entry.name.clone(),
            kind,
            target: unknown_target(entry),
        }),
    }
}

fn tcp_definition(entry: &ServiceEntry, default_port: u16, kind: &str) -> CheckDefinition {
    CheckDefinition::Tcp(TcpCheck {
        name: entry.name.clone(),
        host: entry.host.clone(),
        port: entry.port.unwrap_or(default_port),
        kind: kind.to_string(),
    })
}

fn unknown_target(entry: &ServiceEntry) -> String {
    if let Some(url) = &entry.url {
        return url.clone();
    }
    match (&entry.host, entry.port) {
        (None, None) => "-".to_string(),
        (host, port) => format!(
            "{}:{}",
            host.as_deref().unwrap_or("-"),
            port.map_or_else(|| "-".to_string(), |p| p.to_string())
        ),
    }
}

/// Load settings from a TOML file path
pub fn load_settings_from_toml_path(path: impl AsRef<Path>) -> Result<Settings> {
    let data = fs::read_to_string(&path).map_err(|e| {
        CoreError::ConfigurationError(format!(
            "Failed to read config {:?}: {}. Mount it and/or set VANTAGE_CONFIG.",
            path.as_ref(),
            e
        ))
    })?;
    load_settings_from_toml_str(&data)
}

/// Load settings from a TOML string
pub fn load_settings_from_toml_str(input: &str) -> Result<Settings> {
    let settings: Settings = toml::from_str(input)
        .map_err(|e| CoreError::ConfigurationError(format!("TOML parse error: {}", e)))?;
    settings.validate()?;
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
[[services]]
name = "workbench"
type = "http"
url = "http://127.0.0.1:8001/health"
timeout_s = 1.5

[[services]]
name = "db"
type = "mysql"
host = "127.0.0.1"

[[services]]
name = "cache"
type = "redis"
host = "127.0.0.1"
port = 6380

[[services]]
name = "mystery"
type = "quantum"

[[system.disk_checks]]
path = "/"

[[system.disk_checks]]
path = "/data"
warn_pct_free_below = 20.0
"#;

    #[test]
    fn test_load_sample_config() {
        let settings = load_settings_from_toml_str(SAMPLE).expect("config should load");
        assert_eq!(settings.services.len(), 4);
        assert_eq!(settings.system.disk_checks.len(), 2);
        assert_eq!(settings.system.disk_checks[0].warn_pct_free_below, 10.0);
        assert_eq!(settings.system.disk_checks[1].warn_pct_free_below, 20.0);
    }

    #[test]
    fn test_definitions_preserve_order_and_defaults() {
        let settings = load_settings_from_toml_str(SAMPLE).unwrap();
        let defs = settings.service_definitions();
        assert_eq!(defs.len(), 4);

        match &defs[0] {
            CheckDefinition::Http(c) => {
                assert_eq!(c.name, "workbench");
                assert_eq!(c.timeout_s, 1.5);
            }
            other => panic!("expected http definition, got {:?}", other),
        }
        match &defs[1] {
            CheckDefinition::Tcp(c) => {
                assert_eq!(c.port, 3306);
                assert_eq!(c.kind, "mysql");
            }
            other => panic!("expected tcp definition, got {:?}", other),
        }
        match &defs[2] {
            CheckDefinition::Tcp(c) => {
                assert_eq!(c.port, 6380);
                assert_eq!(c.kind, "redis");
            }
            other => panic!("expected tcp definition, got {:?}", other),
        }
        match &defs[3] {
            CheckDefinition::Unknown(c) => assert_eq!(c.kind, "quantum"),
            other => panic!("expected unknown definition, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_url_passes_validation() {
        let settings = load_settings_from_toml_str(
            r#"
[[services]]
name = "a"
type = "http"
"#,
        )
        .expect("missing url is a probe-time failure, not a config error");
        match &settings.service_definitions()[0] {
            CheckDefinition::Http(c) => assert_eq!(c.url, None),
            other => panic!("expected http definition, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let err = load_settings_from_toml_str(
            r#"
[[services]]
name = "a"
type = "http"

[[services]]
name = "a"
type = "redis"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("duplicate name 'a'"));
    }

    #[test]
    fn test_bare_tcp_requires_port() {
        let err = load_settings_from_toml_str(
            r#"
[[services]]
name = "raw"
type = "tcp"
host = "127.0.0.1"
"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("services[0].port"));
    }

    #[test]
    fn test_empty_disk_path_skipped() {
        let settings = load_settings_from_toml_str(
            r#"
[[system.disk_checks]]
path = ""

[[system.disk_checks]]
path = "/"
"#,
        )
        .unwrap();
        assert_eq!(settings.disk_definitions().len(), 1);
    }

    #[test]
    fn test_kind_matching_is_case_insensitive() {
        let settings = load_settings_from_toml_str(
            r#"
[[services]]
name = "a"
type = "HTTP"
url = "http://localhost/"
"#,
        )
        .unwrap();
        assert!(matches!(
            settings.service_definitions()[0],
            CheckDefinition::Http(_)
        ));
    }

    #[test]
    fn test_missing_file_is_configuration_error() {
        let err = load_settings_from_toml_path("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, CoreError::ConfigurationError(_)));
        assert!(err.to_string().contains("VANTAGE_CONFIG"));
    }

    #[test]
    fn test_load_from_tempfile() {
        use std::io::Write;
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        file.write_all(SAMPLE.as_bytes()).expect("write config");

        let settings = load_settings_from_toml_path(file.path()).expect("load from path");
        assert_eq!(settings.services.len(), 4);
    }
}

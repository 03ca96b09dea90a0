use figment::{Figment, providers::{Env, Format, Yaml}};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HitchConfig {
    #[serde(default)]
    pub admin: AdminApiConfig,
}

/// Where and how to reach the gateway admin API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminApiConfig {
    #[serde(default = "default_admin_url")]
    pub url: String,
    /// Admin API key (optional).
    pub api_key: Option<String>,
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_admin_url() -> String { "http://127.0.0.1:8001".into() }
fn default_timeout() -> u64 { 10 }

impl Default for HitchConfig {
    fn default() -> Self {
        Self {
            admin: AdminApiConfig::default(),
        }
    }
}

impl Default for AdminApiConfig {
    fn default() -> Self {
        Self {
            url: default_admin_url(),
            api_key: None,
            timeout_secs: default_timeout(),
        }
    }
}

impl HitchConfig {
    /// Load configuration from YAML file + env overrides.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let config: HitchConfig = Figment::new()
            .merge(Yaml::file(path))
            .merge(Env::prefixed("HITCH_").split("_"))
            .extract()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_admin_config_has_expected_values() {
        let cfg = AdminApiConfig::default();
        assert_eq!(cfg.url, "http://127.0.0.1:8001");
        assert!(cfg.api_key.is_none());
        assert_eq!(cfg.timeout_secs, 10);
    }

    #[test]
    fn load_from_valid_yaml_overrides_defaults() {
        let mut tmpfile = tempfile::NamedTempFile::new().unwrap();
        write!(
            tmpfile,
            "admin:\n  url: \"http://gateway:8001\"\n  api_key: \"secret\"\n"
        )
        .unwrap();
        let cfg = HitchConfig::load(tmpfile.path()).unwrap();
        assert_eq!(cfg.admin.url, "http://gateway:8001");
        assert_eq!(cfg.admin.api_key.as_deref(), Some("secret"));
        // Defaults still apply for unspecified fields
        assert_eq!(cfg.admin.timeout_secs, 10);
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let cfg = HitchConfig::load(std::path::Path::new("/nonexistent/hitch.yaml"));
        // Figment merges an empty provider for a missing file
        if let Ok(cfg) = cfg {
            assert_eq!(cfg.admin.url, "http://127.0.0.1:8001");
        }
    }
}

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use hrportal_core::models::role::PolicyRegion;
use hrportal_gateway::http::DEFAULT_API_BASE;

/// Current config version. Bump this when adding fields or changing shape.
/// Each bump requires a corresponding entry in [`migrate`].
const CURRENT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortalConfig {
    /// Schema version. Missing or 0 = pre-versioned config.
    #[serde(default)]
    pub config_version: u32,
    #[serde(default = "default_api_base")]
    pub api_base: String,
    /// Region preselected on the login form and restored on logout.
    #[serde(default)]
    pub default_policy_region: PolicyRegion,
    /// Where `/save` writes answers. Defaults to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            config_version: CURRENT_VERSION,
            api_base: default_api_base(),
            default_policy_region: PolicyRegion::default(),
            download_dir: None,
        }
    }
}

impl PortalConfig {
    pub fn download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

fn config_dir() -> eyre::Result<PathBuf> {
    let base = dirs::config_dir().ok_or_else(|| eyre::eyre!("no config directory found"))?;
    Ok(base.join("com.hrportal.terminal"))
}

pub fn config_path() -> eyre::Result<PathBuf> {
    Ok(config_dir()?.join("config.json"))
}

pub fn has_config() -> bool {
    config_path().map(|p| p.exists()).unwrap_or(false)
}

/// Load the user config, falling back to defaults when none exists yet.
pub fn load_config() -> eyre::Result<PortalConfig> {
    let path = config_path()?;
    if !path.exists() {
        return Ok(PortalConfig::default());
    }
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> eyre::Result<PortalConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| eyre::eyre!("failed to read config at {}: {e}", path.display()))?;
    parse_config(&contents)
}

/// Parse a config document, running migrations before deserializing.
pub fn parse_config(contents: &str) -> eyre::Result<PortalConfig> {
    let json: serde_json::Value = serde_json::from_str(contents)?;
    // A version too large for u32 is certainly newer than this build
    let on_disk_version = match json.get("config_version").and_then(|v| v.as_u64()) {
        Some(v) => u32::try_from(v).unwrap_or(u32::MAX),
        None => 0,
    };

    let migrated = migrate(json, on_disk_version)?;
    let config: PortalConfig = serde_json::from_value(migrated)?;
    Ok(config)
}

/// Run sequential migrations from `from_version` up to [`CURRENT_VERSION`].
fn migrate(mut json: serde_json::Value, from_version: u32) -> eyre::Result<serde_json::Value> {
    if from_version > CURRENT_VERSION {
        return Err(eyre::eyre!(
            "config_version {from_version} is newer than this build supports ({CURRENT_VERSION}). \
             Please update hrportal."
        ));
    }

    // v0 → v1: `country` became `default_policy_region`
    if from_version < 1 {
        let obj = json
            .as_object_mut()
            .ok_or_else(|| eyre::eyre!("config is not a JSON object"))?;
        let region = obj
            .remove("country")
            .unwrap_or_else(|| serde_json::Value::String(PolicyRegion::default().to_string()));
        obj.entry("default_policy_region").or_insert(region);
        obj.insert(
            "config_version".to_string(),
            serde_json::Value::Number(1.into()),
        );
        tracing::info!("migrated config v0 → v1 (country renamed to default_policy_region)");
    }

    Ok(json)
}

pub fn save_config(config: &PortalConfig) -> eyre::Result<()> {
    let dir = config_dir()?;
    save_config_to(&dir.join("config.json"), config)
}

/// Write `config` to `path`, stamping the current version.
pub fn save_config_to(path: &Path, config: &PortalConfig) -> eyre::Result<()> {
    let dir = path
        .parent()
        .ok_or_else(|| eyre::eyre!("config path {} has no parent", path.display()))?;
    std::fs::create_dir_all(dir)?;

    let mut stamped = config.clone();
    stamped.config_version = CURRENT_VERSION;
    let json = serde_json::to_string_pretty(&stamped)?;

    // Write to a temp file then rename for atomicity
    let tmp_path = path.with_extension("json.tmp");
    std::fs::write(&tmp_path, json.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)?;

    tracing::info!(path = %path.display(), "config saved");
    Ok(())
}

use crate::error::{PlacementError, Result};
use crate::types::config::PlacementConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "placement.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/placement/config.toml";

/// Loads the user-global config, then `explicit` (or `placement.toml` under `root`) over it.
pub fn load_config(root: &Path, explicit: Option<&Path>) -> Result<PlacementConfig> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, explicit, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    explicit: Option<&Path>,
    global_path: Option<&Path>,
) -> Result<PlacementConfig> {
    let local_path = match explicit {
        Some(path) if !path.exists() => {
            return Err(PlacementError::ConfigNotFound(path.display().to_string()));
        }
        Some(path) => path.to_path_buf(),
        None => root.join(DEFAULT_CONFIG_FILE),
    };

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &local_path)?;

    let cfg: PlacementConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PlacementError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(cfg)
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    debug!(path = %path.display(), "merging config file");
    let content = std::fs::read_to_string(path)?;
    let value: Value = toml::from_str(&content)
        .map_err(|e| PlacementError::ConfigParse(format!("{}: {}", path.display(), e)))?;
    merge_toml(merged, value);
    Ok(())
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::OutputFormat;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load_config_defaults_when_no_files_exist() {
        let dir = TempDir::new().expect("temp dir should be created");
        let cfg = load_config_with_global(dir.path(), None, None).expect("load should not fail");
        assert_eq!(cfg.output_format(), OutputFormat::Md);
        assert!(!cfg.report.show_breakdown);
    }

    #[test]
    fn load_config_layers_local_over_global() {
        let root = TempDir::new().expect("root temp dir should be created");
        let global_root = TempDir::new().expect("global temp dir should be created");
        let global_path = global_root.path().join("config.toml");

        fs::write(
            &global_path,
            r#"
[report]
format = "json"
show_breakdown = true
"#,
        )
        .expect("global config should write");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            r#"
[report]
format = "md"
"#,
        )
        .expect("local config should write");

        let cfg = load_config_with_global(root.path(), None, Some(&global_path))
            .expect("load should succeed");
        assert_eq!(cfg.output_format(), OutputFormat::Md);
        assert!(cfg.report.show_breakdown);
    }

    #[test]
    fn explicit_config_path_must_exist() {
        let root = TempDir::new().expect("temp dir should be created");
        let missing = root.path().join("missing.toml");
        let result = load_config_with_global(root.path(), Some(&missing), None);
        assert!(matches!(result, Err(PlacementError::ConfigNotFound(_))));
    }

    #[test]
    fn invalid_merged_config_is_rejected() {
        let root = TempDir::new().expect("temp dir should be created");
        fs::write(
            root.path().join(DEFAULT_CONFIG_FILE),
            "[report]\nformat = \"html\"\n",
        )
        .expect("config should write");
        let result = load_config_with_global(root.path(), None, None);
        assert!(matches!(result, Err(PlacementError::ConfigParse(_))));
    }
}

use anyhow::Context;
use canvas_typegen_codegen::TypeCatalog;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_NAME: &str = "canvas-typegen.config.json";

/// Directory searched for component files when none is given
pub const DEFAULT_COMPONENTS_ROOT: &str = "uniform/components";

/// Declaration file written when no output path is given
pub const DEFAULT_TYPES_OUTPUT_FILE: &str = "@types/generated/uniform.d.ts";

/// Generator configuration file format
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorConfig {
    #[serde(default = "default_components_root")]
    pub components_root: PathBuf,

    #[serde(default = "default_types_output_file")]
    pub types_output_file: PathBuf,

    /// Imported types for structured parameter kinds
    #[serde(default)]
    pub catalog: TypeCatalog,
}

fn default_components_root() -> PathBuf {
    PathBuf::from(DEFAULT_COMPONENTS_ROOT)
}

fn default_types_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_TYPES_OUTPUT_FILE)
}

impl GeneratorConfig {
    /// Load config from a directory
    pub fn load(cwd: &Path) -> anyhow::Result<Self> {
        let config_path = cwd.join(DEFAULT_CONFIG_NAME);

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {}", config_path.display()))?;
            let config: GeneratorConfig = serde_json::from_str(&content)
                .with_context(|| format!("Invalid config file {}", config_path.display()))?;
            Ok(config)
        } else {
            // Return default config if none exists
            Ok(GeneratorConfig::default())
        }
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            components_root: default_components_root(),
            types_output_file: default_types_output_file(),
            catalog: TypeCatalog::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_config() {
        let json = r#"{
            "componentsRoot": "canvas/components",
            "typesOutputFile": "src/types/canvas.d.ts",
            "catalog": {
                "slotChild": { "module": "./canvas", "name": "ChildComponent" }
            }
        }"#;

        let config: GeneratorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.components_root, PathBuf::from("canvas/components"));
        assert_eq!(config.types_output_file, PathBuf::from("src/types/canvas.d.ts"));
        assert_eq!(config.catalog.slot_child.module, "./canvas");
        assert_eq!(config.catalog.link, TypeCatalog::default().link);
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.components_root, PathBuf::from("uniform/components"));
        assert_eq!(
            config.types_output_file,
            PathBuf::from("@types/generated/uniform.d.ts")
        );
        assert_eq!(config.catalog, TypeCatalog::default());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = GeneratorConfig::load(dir.path()).unwrap();
        assert_eq!(config.components_root, PathBuf::from(DEFAULT_COMPONENTS_ROOT));
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_CONFIG_NAME), "{ nope").unwrap();

        let err = GeneratorConfig::load(dir.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
    }
}

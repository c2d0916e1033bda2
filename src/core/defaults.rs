use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::namespace;
use crate::paths;
use crate::registry::TypeRegistry;
use crate::utils::validation;

/// Root configuration structure for handlergen.json
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct HandlergenConfig {
    #[serde(default)]
    pub defaults: Defaults,
}

/// All configurable defaults that can be overridden via handlergen.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Defaults {
    /// Application root namespace, e.g. `App\`
    #[serde(default = "default_root_namespace")]
    pub root_namespace: String,

    /// Directory (relative to the project root) the root namespace maps to
    #[serde(default = "default_app_path")]
    pub app_path: String,

    /// Type every generated handler extends
    #[serde(default = "default_base_type")]
    pub base_type: String,

    /// Additional importable types accepted as `base_type`
    #[serde(default)]
    pub known_types: Vec<String>,

    /// Custom stub file; the embedded stub is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stub_path: Option<String>,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            root_namespace: default_root_namespace(),
            app_path: default_app_path(),
            base_type: default_base_type(),
            known_types: Vec::new(),
            stub_path: None,
        }
    }
}

impl Defaults {
    /// Registry of base types: the built-in default plus `known_types`.
    pub fn registry(&self) -> TypeRegistry {
        let mut registry = TypeRegistry::new(&self.known_types);
        registry.register(&default_base_type());
        registry
    }

    /// Check values the generator cannot work without.
    pub fn validate(&self) -> crate::Result<()> {
        validation::require_non_empty(
            &self.app_path,
            "app_path",
            "app_path cannot be empty",
        )?;

        let root = namespace::trim_root(&self.root_namespace);
        if !root.is_empty() && namespace::validate_override(root).is_err() {
            return Err(crate::Error::config_invalid_value(
                "root_namespace",
                Some(self.root_namespace.clone()),
                "Root namespace must be separator-delimited word segments",
            ));
        }

        Ok(())
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_root_namespace() -> String {
    r"App\".to_string()
}

fn default_app_path() -> String {
    "app".to_string()
}

fn default_base_type() -> String {
    r"App\Http\Handlers\Handler".to_string()
}

// =============================================================================
// Loading functions
// =============================================================================

/// Load defaults, merging file config with built-in defaults.
/// If handlergen.json is missing or invalid, silently returns built-in defaults.
pub fn load_defaults() -> Defaults {
    load_config().defaults
}

/// Load the full handlergen.json config, falling back to defaults on any error.
pub fn load_config() -> HandlergenConfig {
    match paths::handlergen_json() {
        Ok(path) => load_config_from(&path).unwrap_or_default(),
        Err(_) => HandlergenConfig::default(),
    }
}

/// Load config from an explicit path.
pub fn load_config_from(path: &Path) -> crate::Result<HandlergenConfig> {
    if !path.exists() {
        return Err(crate::Error::internal_io(
            format!("File not found: {}", path.display()),
            Some("read handlergen.json".to_string()),
        ));
    }

    let content = crate::utils::io::read_file(path, "read handlergen.json")?;

    serde_json::from_str(&content)
        .map_err(|e| crate::Error::config_invalid_json(path.display().to_string(), e))
}

/// Save config to handlergen.json file (creates if missing).
pub fn save_config(config: &HandlergenConfig) -> crate::Result<()> {
    save_config_to(&paths::handlergen_json()?, config)
}

pub fn save_config_to(path: &Path, config: &HandlergenConfig) -> crate::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("create {}", parent.display())))
        })?;
    }

    let content = serde_json::to_string_pretty(config).map_err(|e| {
        crate::Error::internal_json(e.to_string(), Some("serialize handlergen.json".to_string()))
    })?;

    crate::utils::io::write_file_atomic(path, &content, "write handlergen.json")
}

/// Check if handlergen.json file exists
pub fn config_exists() -> bool {
    paths::handlergen_json()
        .map(|p| p.exists())
        .unwrap_or(false)
}

/// Delete handlergen.json file (reset to defaults)
pub fn reset_config() -> crate::Result<bool> {
    let path = paths::handlergen_json()?;

    if path.exists() {
        fs::remove_file(&path).map_err(|e| {
            crate::Error::internal_io(e.to_string(), Some(format!("delete {}", path.display())))
        })?;
        Ok(true)
    } else {
        Ok(false)
    }
}

/// Get the path to handlergen.json (for display purposes)
pub fn config_path() -> crate::Result<String> {
    Ok(paths::handlergen_json()?.display().to_string())
}

/// Get built-in defaults (ignoring any file config)
pub fn builtin_defaults() -> Defaults {
    Defaults::default()
}

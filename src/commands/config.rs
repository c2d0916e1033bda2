use clap::{Args, Subcommand};
use serde::Serialize;
use serde_json::Value;

use handlergen::defaults::{self, Defaults, HandlergenConfig};
use handlergen::log_status;

use super::CmdResult;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Display configuration (merged defaults + file)
    Show {
        /// Show only built-in defaults (ignore handlergen.json)
        #[arg(long)]
        builtin: bool,
    },
    /// Set a configuration value at a JSON pointer path
    Set {
        /// JSON pointer path (e.g., /defaults/root_namespace)
        pointer: String,
        /// Value to set (JSON; bare words are taken as strings)
        value: String,
    },
    /// Reset configuration to built-in defaults (deletes handlergen.json)
    Reset,
    /// Show the path to handlergen.json
    Path,
}

#[derive(Debug, Default, Serialize)]
pub struct ConfigOutput {
    command: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<HandlergenConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    defaults: Option<Defaults>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exists: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pointer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    deleted: Option<bool>,
}

pub fn run(args: ConfigArgs, _global: &crate::commands::GlobalArgs) -> CmdResult<ConfigOutput> {
    match args.command {
        ConfigCommand::Show { builtin } => show(builtin),
        ConfigCommand::Set { pointer, value } => set(&pointer, &value),
        ConfigCommand::Reset => reset(),
        ConfigCommand::Path => path(),
    }
}

fn show(builtin: bool) -> CmdResult<ConfigOutput> {
    let output = if builtin {
        ConfigOutput {
            command: "config.show".to_string(),
            defaults: Some(defaults::builtin_defaults()),
            ..Default::default()
        }
    } else {
        ConfigOutput {
            command: "config.show".to_string(),
            config: Some(defaults::load_config()),
            ..Default::default()
        }
    };

    Ok((output, 0))
}

fn set(pointer: &str, value_str: &str) -> CmdResult<ConfigOutput> {
    // Namespaces are rarely valid JSON; fall back to a plain string.
    let value: Value =
        serde_json::from_str(value_str).unwrap_or_else(|_| Value::String(value_str.to_string()));

    let config = defaults::load_config();

    let mut config_json = serde_json::to_value(&config).map_err(|e| {
        handlergen::Error::internal_json(e.to_string(), Some("serialize config".to_string()))
    })?;

    handlergen::config::set_json_pointer(&mut config_json, pointer, value.clone())?;

    let config: HandlergenConfig = serde_json::from_value(config_json).map_err(|e| {
        handlergen::Error::validation_invalid_json(
            e,
            Some("deserialize config".to_string()),
            Some(value_str.chars().take(200).collect::<String>()),
        )
    })?;
    config.defaults.validate()?;

    defaults::save_config(&config)?;
    log_status!("config", "Set {}", pointer);

    Ok((
        ConfigOutput {
            command: "config.set".to_string(),
            config: Some(config),
            pointer: Some(pointer.to_string()),
            value: Some(value),
            ..Default::default()
        },
        0,
    ))
}

fn reset() -> CmdResult<ConfigOutput> {
    let deleted = defaults::reset_config()?;
    if deleted {
        log_status!("config", "Reset to built-in defaults");
    }

    Ok((
        ConfigOutput {
            command: "config.reset".to_string(),
            deleted: Some(deleted),
            ..Default::default()
        },
        0,
    ))
}

fn path() -> CmdResult<ConfigOutput> {
    Ok((
        ConfigOutput {
            command: "config.path".to_string(),
            path: Some(defaults::config_path()?),
            exists: Some(defaults::config_exists()),
            ..Default::default()
        },
        0,
    ))
}

//! Lua command translation
//!
//! Turns the typed entries of a content block into Lmod Lua commands.
//! Dispatch is a closed enum over the recognized content keys; values under
//! any other key pass through unchanged and never produce commands.

pub mod version;

use std::collections::HashMap;

use regex::Regex;
use serde_yaml::Value;

pub use version::{VersionArg, resolve_version};

/// The recognized content keys of a block, plus the open-ended rest
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKey {
    Modules,
    ModulePaths,
    Environment,
    Help,
    WhatIs,
    Unknown,
}

impl ContentKey {
    /// Classify a raw block key
    pub fn parse(key: &str) -> Self {
        match key {
            "modules" => ContentKey::Modules,
            "modulepaths" => ContentKey::ModulePaths,
            "environment" => ContentKey::Environment,
            "help" => ContentKey::Help,
            "whatis" => ContentKey::WhatIs,
            _ => ContentKey::Unknown,
        }
    }
}

/// Result of translating one block entry
#[derive(Debug, Clone, PartialEq)]
pub enum Translated {
    /// Ordered Lua commands, each terminated by one newline
    Commands(Vec<String>),
    /// Value under an unrecognized key, returned unchanged
    Passthrough(Value),
}

impl Translated {
    /// The commands to emit; a pass-through contributes none
    pub fn into_commands(self) -> Vec<String> {
        match self {
            Translated::Commands(commands) => commands,
            Translated::Passthrough(_) => Vec::new(),
        }
    }
}

/// Translates content-block entries into Lua commands.
///
/// Holds the environment snapshot used for version resolution, so the same
/// translator produces the same output no matter when it runs.
#[derive(Debug, Clone)]
pub struct LuaTranslator {
    env: HashMap<String, String>,
    placeholder: Regex,
}

impl LuaTranslator {
    /// Build a translator over a snapshot of the process environment
    pub fn new() -> Self {
        Self::with_env(std::env::vars().collect())
    }

    /// Build a translator over an explicit environment snapshot
    pub fn with_env(env: HashMap<String, String>) -> Self {
        Self {
            env,
            placeholder: version::placeholder_regex(),
        }
    }

    /// Translate the value stored under a block key.
    ///
    /// Never fails: unrecognized keys come back as [`Translated::Passthrough`],
    /// and empty or absent values yield an empty command list.
    pub fn translate(&self, key: &str, value: &Value) -> Translated {
        match ContentKey::parse(key) {
            ContentKey::Modules => Translated::Commands(self.modules(value)),
            ContentKey::ModulePaths => Translated::Commands(self.module_paths(value)),
            ContentKey::Environment => Translated::Commands(self.environment(value)),
            ContentKey::Help => Translated::Commands(self.help(value)),
            ContentKey::WhatIs => Translated::Commands(self.whatis(value)),
            ContentKey::Unknown => Translated::Passthrough(value.clone()),
        }
    }

    /// `load(pathJoin(...))` commands for a `modules` entry list
    fn modules(&self, value: &Value) -> Vec<String> {
        coerce_list(value)
            .iter()
            .map(|entry| self.module_command(&scalar_text(entry)))
            .collect()
    }

    /// One `load` command for a single `name/version` entry.
    ///
    /// A bare name gets the one-argument `pathJoin` form. Entries with more
    /// than one separator are malformed; they fall back to a verbatim
    /// `load` so one bad entry cannot sink the rest of the definition.
    fn module_command(&self, entry: &str) -> String {
        let parts: Vec<&str> = entry.split('/').collect();
        match parts.as_slice() {
            [name] => format!("load(pathJoin(\"{}\"))\n", name),
            [name, version] => {
                let arg = resolve_version(version, &self.placeholder, &self.env);
                format!("load(pathJoin(\"{}\", {}))\n", name, arg.to_lua())
            }
            _ => {
                log::debug!("malformed modules entry '{}', emitting verbatim", entry);
                format!("load(\"{}\")\n", entry)
            }
        }
    }

    /// `prepend_path` commands for a `modulepaths` entry list
    fn module_paths(&self, value: &Value) -> Vec<String> {
        coerce_list(value)
            .iter()
            .map(scalar_text)
            .filter(|path| path != "None")
            .map(|path| format!("prepend_path(\"MODULEPATH\", pathJoin(\"{}\"))\n", path))
            .collect()
    }

    /// `setenv` commands for an `environment` entry list.
    ///
    /// Each entry is a mapping; every key/value pair in it becomes one
    /// command, in mapping order.
    fn environment(&self, value: &Value) -> Vec<String> {
        let mut commands = Vec::new();
        for entry in coerce_list(value) {
            let Value::Mapping(pairs) = entry else {
                log::debug!("skipping non-mapping environment entry");
                continue;
            };
            for (key, val) in &pairs {
                commands.push(format!(
                    "setenv(\"{}\", \"{}\")\n",
                    scalar_text(key),
                    scalar_text(val)
                ));
            }
        }
        commands
    }

    /// `help` commands, double-bracket quoted, no escaping
    fn help(&self, value: &Value) -> Vec<String> {
        coerce_list(value)
            .iter()
            .map(|text| format!("help([[{}]])\n", scalar_text(text)))
            .collect()
    }

    /// `whatis` commands
    fn whatis(&self, value: &Value) -> Vec<String> {
        coerce_list(value)
            .iter()
            .map(|text| format!("whatis(\"{}\")\n", scalar_text(text)))
            .collect()
    }
}

impl Default for LuaTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Coerce a scalar into a one-element list; null, empty strings, and empty
/// sequences all mean "nothing here"
fn coerce_list(value: &Value) -> Vec<Value> {
    match value {
        Value::Null => Vec::new(),
        Value::String(text) if text.is_empty() => Vec::new(),
        Value::Sequence(items) => items.clone(),
        other => vec![other.clone()],
    }
}

/// Render a YAML scalar as the text that lands inside a command
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        _ => String::new(),
    }
}

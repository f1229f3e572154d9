//! Module definition schema
//!
//! Plain data types for one named module definition and the script
//! generated from it. No I/O and no translation logic here.

use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::translator::LuaTranslator;

/// Body of one module definition as it appears in YAML.
///
/// `help` and `whatis` accept a scalar or a sequence of scalars; the
/// translator applies the coercion. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Definition {
    pub help: Option<Value>,
    pub whatis: Option<Value>,
    #[serde(default)]
    pub content: Vec<Mapping>,
}

/// A named definition ready to be rendered into a Lua script
#[derive(Debug, Clone)]
pub struct Script {
    pub name: String,
    pub definition: Definition,
}

impl Script {
    pub fn new(name: impl Into<String>, definition: Definition) -> Self {
        Self {
            name: name.into(),
            definition,
        }
    }

    /// `help` commands for this definition, or an empty list
    pub fn help_commands(&self, translator: &LuaTranslator) -> Vec<String> {
        let value = self.definition.help.clone().unwrap_or(Value::Null);
        translator.translate("help", &value).into_commands()
    }

    /// Commands for every content block, blocks in document order and keys
    /// in block order
    pub fn content_commands(&self, translator: &LuaTranslator) -> Vec<String> {
        let mut commands = Vec::new();
        for block in &self.definition.content {
            for (key, value) in block {
                let Value::String(key) = key else {
                    log::debug!("skipping non-string content key in '{}'", self.name);
                    continue;
                };
                commands.extend(translator.translate(key, value).into_commands());
            }
        }
        commands
    }

    /// `whatis` commands for this definition, or an empty list
    pub fn whatis_commands(&self, translator: &LuaTranslator) -> Vec<String> {
        let value = self.definition.whatis.clone().unwrap_or(Value::Null);
        translator.translate("whatis", &value).into_commands()
    }

    /// Full script text: help, then content, then whatis.
    ///
    /// Every command carries its own trailing newline, so the result has no
    /// blank line at the end.
    pub fn render(&self, translator: &LuaTranslator) -> String {
        let mut text = String::new();
        for command in self
            .help_commands(translator)
            .into_iter()
            .chain(self.content_commands(translator))
            .chain(self.whatis_commands(translator))
        {
            text.push_str(&command);
        }
        text
    }
}

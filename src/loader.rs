//! Definition loading
//!
//! Parses one YAML document into an ordered list of [`Script`]s. YAML
//! anchors and aliases resolve during parsing; merge markers (`<<`) inside
//! a `content` sequence splice the referenced fragment's blocks in place.
//! Top-level entries whose name starts with the fragment sigil exist only
//! to be referenced and are never emitted.

use serde_yaml::{Mapping, Value};
use thiserror::Error;

use crate::script::{Definition, Script};

/// Leading sigil marking a top-level entry as a reusable fragment
pub const FRAGMENT_SIGIL: char = '^';

/// Marker key referencing a fragment from inside a content sequence
const MERGE_KEY: &str = "<<";

/// Errors from loading one document.
///
/// Both are fatal for the document they occur in only; sibling documents
/// keep processing.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("top-level YAML is not a mapping")]
    NotAMapping,
}

/// Parse a YAML document into scripts, in document order.
///
/// Definitions whose body does not deserialize are logged and skipped so
/// one bad definition cannot abort its siblings.
pub fn load_document(text: &str) -> Result<Vec<Script>, LoadError> {
    let root: Value = serde_yaml::from_str(text)?;
    let Value::Mapping(entries) = root else {
        return Err(LoadError::NotAMapping);
    };

    let mut scripts = Vec::new();
    for (key, body) in entries {
        let Value::String(name) = key else {
            log::warn!("skipping non-string definition name");
            continue;
        };
        if name.starts_with(FRAGMENT_SIGIL) {
            continue;
        }

        let body = expand_merges(body);
        match serde_yaml::from_value::<Definition>(body) {
            Ok(definition) => scripts.push(Script::new(name, definition)),
            Err(error) => log::error!("skipping definition '{}': {}", name, error),
        }
    }
    Ok(scripts)
}

/// Splice merge markers inside the body's `content` sequence
fn expand_merges(mut body: Value) -> Value {
    if let Value::Mapping(map) = &mut body {
        if let Some(Value::Sequence(items)) = map.get_mut("content") {
            *items = expand_blocks(std::mem::take(items));
        }
    }
    body
}

/// Expand one block sequence.
///
/// An item carrying the merge marker is replaced by the referenced blocks,
/// in their original order; a fragment may itself contain markers, so
/// spliced blocks expand again. Keys sharing an item with the marker
/// survive as a block placed after the spliced ones.
fn expand_blocks(items: Vec<Value>) -> Vec<Value> {
    let mut blocks = Vec::new();

    for item in items {
        let Value::Mapping(map) = item else {
            blocks.push(item);
            continue;
        };
        if !map.contains_key(MERGE_KEY) {
            blocks.push(Value::Mapping(map));
            continue;
        }

        let mut rest = Mapping::new();
        for (key, value) in map {
            if key.as_str() == Some(MERGE_KEY) {
                match value {
                    Value::Sequence(fragment) => blocks.extend(expand_blocks(fragment)),
                    single => blocks.extend(expand_blocks(vec![single])),
                }
            } else {
                rest.insert(key, value);
            }
        }
        if !rest.is_empty() {
            blocks.push(Value::Mapping(rest));
        }
    }

    blocks
}

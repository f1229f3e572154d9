//! Version placeholder resolution
//!
//! The version segment of a `modules` entry may name an environment
//! variable (`$VAR` or `${VAR}`). Resolution happens against a snapshot of
//! the environment taken when the translator is built, never against the
//! live process environment.

use std::collections::HashMap;

use regex::Regex;

/// Pattern for a version placeholder: `$VAR` or `${VAR}`, nothing else
/// before or after it.
const PLACEHOLDER_PATTERN: &str = r"^\$(?:\{([A-Za-z0-9_]+)\}|([A-Za-z0-9_]+))$";

/// Compile the placeholder pattern once per translator
pub(crate) fn placeholder_regex() -> Regex {
    Regex::new(PLACEHOLDER_PATTERN).expect("placeholder pattern is valid")
}

/// A resolved version argument for a `load(pathJoin(...))` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VersionArg {
    /// A plain version string, emitted as a quoted Lua string
    Literal(String),
    /// A raw Lua expression, emitted without quotes: either a value pulled
    /// from the environment snapshot or a deferred `os.getenv(...)` call
    Expr(String),
}

impl VersionArg {
    /// Render this argument as Lua source text
    pub fn to_lua(&self) -> String {
        match self {
            VersionArg::Literal(text) => format!("\"{}\"", text),
            VersionArg::Expr(expr) => expr.clone(),
        }
    }
}

/// Resolve a version segment against an environment snapshot.
///
/// Three outcomes:
/// - placeholder naming a set variable: the variable's value, unquoted
/// - placeholder naming an unset variable: a deferred `os.getenv("VAR")`
///   call, resolved when the generated script runs
/// - anything else: a literal version string, quoted
pub fn resolve_version(
    version: &str,
    placeholder: &Regex,
    env: &HashMap<String, String>,
) -> VersionArg {
    let Some(captures) = placeholder.captures(version) else {
        return VersionArg::Literal(version.to_string());
    };

    // Exactly one of the two groups matches, depending on brace style
    let var = captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
        .unwrap_or_default();

    match env.get(var) {
        Some(value) => VersionArg::Expr(value.clone()),
        None => VersionArg::Expr(format!("os.getenv(\"{}\")", var)),
    }
}

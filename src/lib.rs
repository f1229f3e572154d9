//! Lmod Modulefile Generator
//!
//! Transcribes declarative YAML module definitions into Lmod Lua scripts.
//!
//! This library provides:
//! - YAML definition loading with alias/merge expansion
//! - Translation of content blocks into Lua commands
//! - Version placeholder resolution against an environment snapshot
//! - Script rendering and output

pub mod config;
pub mod loader;
pub mod script;
pub mod translator;
pub mod writer;

// Re-exports for clean public API
pub use config::Config;
pub use loader::{FRAGMENT_SIGIL, LoadError, load_document};
pub use script::{Definition, Script};
pub use translator::{ContentKey, LuaTranslator, Translated, VersionArg};

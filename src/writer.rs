//! Script output
//!
//! Persists rendered scripts, one file per definition, named after the
//! definition. The destination directory is created on demand.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::script::Script;
use crate::translator::LuaTranslator;

/// Extension of the generated module-system scripts
pub const SCRIPT_EXTENSION: &str = "lua";

/// Create the output directory if it does not exist yet
pub fn ensure_output_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        log::warn!("'{}' directory does not exist... creating", path.display());
        fs::create_dir_all(path)
            .with_context(|| format!("Failed to create output directory: {}", path.display()))?;
    }
    Ok(())
}

/// Render every script through the translator and write it to
/// `<output_path>/<name>.lua`
pub fn write_scripts(
    scripts: &[Script],
    translator: &LuaTranslator,
    output_path: &Path,
) -> Result<()> {
    for script in scripts {
        let target = output_path.join(format!("{}.{}", script.name, SCRIPT_EXTENSION));
        log::debug!("writing {}", target.display());
        fs::write(&target, script.render(translator))
            .with_context(|| format!("Failed to write {}", target.display()))?;
    }
    Ok(())
}

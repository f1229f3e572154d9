use anyhow::Result;
use env_logger::Env;

use lmodgen::config::Config;
use lmodgen::translator::LuaTranslator;
use lmodgen::{loader, writer};

fn main() -> Result<()> {
    // Parse configuration from command line
    let config = Config::from_args_and_env()?;

    env_logger::Builder::from_env(Env::default().default_filter_or(&config.log_level)).init();

    writer::ensure_output_dir(&config.output_path)?;

    // One environment snapshot for the whole run; every document resolves
    // version placeholders against the same state
    let translator = LuaTranslator::new();

    for file in &config.files {
        log::debug!("queueing {}", file.display());

        let text = match std::fs::read_to_string(file) {
            Ok(text) => text,
            Err(error) => {
                log::error!("Failed to read {}: {}", file.display(), error);
                continue;
            }
        };

        // A document that fails to parse is skipped; the rest of the queue
        // still runs
        let scripts = match loader::load_document(&text) {
            Ok(scripts) => scripts,
            Err(error) => {
                log::error!("Invalid YAML file {}: {}", file.display(), error);
                continue;
            }
        };

        writer::write_scripts(&scripts, &translator, &config.output_path)?;
    }

    Ok(())
}

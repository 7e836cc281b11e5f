use crate::config::Config;
use crate::errors::{AppError, AppResult};

use crate::cli::parser::Commands;
use std::process::Command;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();

        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration ({}):\n", path.display());
            println!("{yaml}");
        }

        if *edit_config {
            let default_editor = std::env::var("EDITOR")
                .or_else(|_| std::env::var("VISUAL"))
                .unwrap_or_else(|_| {
                    if cfg!(target_os = "windows") {
                        "notepad".to_string()
                    } else {
                        "nano".to_string()
                    }
                });

            // --editor wins over $EDITOR
            let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

            match Command::new(&editor_to_use).arg(&path).status() {
                Ok(s) if s.success() => {
                    println!("✅ Configuration edited with '{editor_to_use}'");
                }
                _ => {
                    eprintln!(
                        "⚠️  Editor '{editor_to_use}' not available, falling back to '{default_editor}'"
                    );
                    match Command::new(&default_editor).arg(&path).status() {
                        Ok(s) if s.success() => {
                            println!("✅ Configuration edited with fallback '{default_editor}'");
                        }
                        _ => {
                            return Err(AppError::Config(format!(
                                "failed to edit {} with '{default_editor}'",
                                path.display()
                            )));
                        }
                    }
                }
            }
        }
    }

    Ok(())
}

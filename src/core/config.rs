use crate::config::Config;
use crate::errors::{AppError, AppResult};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        println!("{}", serde_yaml::to_string(cfg)?);
        Ok(())
    }

    /// Editor preference: explicit choice, then $EDITOR / $VISUAL, then a
    /// platform default. Falls back to the default when the first one fails.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<String> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let first = editor.clone().unwrap_or_else(|| default_editor.clone());

        for ed in [first, default_editor] {
            if let Ok(status) = Command::new(&ed).arg(path).status()
                && status.success()
            {
                return Ok(ed);
            }
        }

        Err(AppError::Config(format!(
            "no usable editor for {}",
            path.display()
        )))
    }
}

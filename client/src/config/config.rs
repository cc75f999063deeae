use std::path::PathBuf;

use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use common::games::tictactoe::FirstPlayer;
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn get_config_path() -> PathBuf {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME);
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

pub fn get_config_manager(
    path_override: Option<PathBuf>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path_override.unwrap_or_else(get_config_path))
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub first_player: FirstPlayer,
    #[serde(default)]
    pub seed: Option<u64>,
    pub human_glyph: String,
    pub bot_glyph: String,
}

fn validate_glyph(name: &str, glyph: &str) -> Result<(), String> {
    let mut chars = glyph.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if !c.is_whitespace() => Ok(()),
        _ => Err(format!("{} must be a single visible character, got {:?}", name, glyph)),
    }
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        validate_glyph("human_glyph", &self.human_glyph)?;
        validate_glyph("bot_glyph", &self.bot_glyph)?;
        if self.human_glyph == self.bot_glyph {
            return Err("human_glyph and bot_glyph must differ".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            first_player: FirstPlayer::Human,
            seed: None,
            human_glyph: "X".to_string(),
            bot_glyph: "O".to_string(),
        }
    }
}

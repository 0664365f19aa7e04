use crate::error::{Error, Result};
use crate::knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// JSON file replacing the built-in categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base: Option<PathBuf>,
    /// tracing filter directive, e.g. "debug" or "mediconnect_core=debug"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let config_content = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let config: Config = serde_json::from_str(&config_content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        let config_content = serde_json::to_string_pretty(self)?;
        fs::write(path, config_content).map_err(|e| Error::io(path, e))?;
        Ok(())
    }

    /// Configured knowledge base, or the built-in one
    pub fn knowledge_base(&self) -> Result<KnowledgeBase> {
        match &self.knowledge_base {
            Some(path) => KnowledgeBase::load(path),
            None => Ok(KnowledgeBase::builtin()),
        }
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(Error::NoConfigDir)?;
        Ok(config_dir.join("mediconnect").join("config.json"))
    }
}

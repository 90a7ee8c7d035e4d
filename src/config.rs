use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub corpus: CorpusConfig,
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Evaluation-corpus file locations
#[derive(Debug, Clone, Deserialize)]
pub struct CorpusConfig {
    /// Topic-definition file (query id and title markers).
    pub topics: PathBuf,
    /// Relevance-judgment file.
    pub qrels: PathBuf,
    /// Optional folder holding one document file per identifier.
    #[serde(default)]
    pub docs_dir: Option<PathBuf>,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file
    ///
    /// Looks for the config file in this order:
    /// 1. Path specified in TRECKIT_CONFIG environment variable
    /// 2. ./treckit.toml in current directory
    pub fn load() -> Result<Self> {
        let config_path = std::env::var("TRECKIT_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("treckit.toml"));
        Self::load_from(&config_path)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&config_str).context("Failed to parse treckit.toml")?;

        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<()> {
        if !self.corpus.topics.exists() {
            anyhow::bail!(
                "corpus.topics path does not exist: {}",
                self.corpus.topics.display()
            );
        }

        if !self.corpus.qrels.exists() {
            anyhow::bail!(
                "corpus.qrels path does not exist: {}",
                self.corpus.qrels.display()
            );
        }

        if let Some(docs_dir) = &self.corpus.docs_dir {
            if !docs_dir.is_dir() {
                anyhow::bail!("corpus.docs_dir must be a directory: {}", docs_dir.display());
            }
        }

        Ok(())
    }

    /// Get the topic file path
    pub fn topics_path(&self) -> &Path {
        &self.corpus.topics
    }

    /// Get the qrel file path
    pub fn qrels_path(&self) -> &Path {
        &self.corpus.qrels
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Configuration for the whole assistant service.
///
/// Every section falls back to its defaults, so a partial `config.yaml`
/// (or none at all) is valid.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub llm: LlmConfig,
    pub embedding: EmbeddingConfig,
    pub retrieval: RetrievalConfig,
    pub corpus: CorpusConfig,
    pub server: ServerConfig,
}

/// Configuration for the chat-completion model
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub model: String,
    /// Base URL of an OpenAI-compatible API (without the `/chat/completions` suffix)
    pub base_url: String,
    /// Name of the environment variable holding the API key
    pub api_key_env: String,
    pub temperature: f64,
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo-0125".to_string(),
            base_url: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            temperature: 0.7,
            timeout_secs: 600,
        }
    }
}

/// Configuration for the embedding model.
///
/// The embedding endpoint shares the base URL and credentials of [`LlmConfig`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    pub model: String,
    /// Maximum number of texts sent in one embeddings request
    pub batch_size: usize,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model: "text-embedding-3-small".to_string(),
            batch_size: 32,
        }
    }
}

/// How many candidates each corpus contributes and how relevant they must be.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub course_top_k: usize,
    /// Forum posts carry citable links, so they get the larger share
    pub forum_top_k: usize,
    /// Candidates scoring at or below this cosine similarity are dropped
    pub similarity_threshold: f32,
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            course_top_k: 2,
            forum_top_k: 3,
            similarity_threshold: 0.5,
        }
    }
}

/// Locations of the pre-scraped JSON corpora.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    pub course_path: PathBuf,
    pub forum_path: PathBuf,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            course_path: PathBuf::from("data/course_content.json"),
            forum_path: PathBuf::from("data/discourse_posts.json"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8000".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from `config.yaml` if it exists, otherwise use defaults.
    pub fn load_or_default() -> Self {
        Self::load("config.yaml").unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_llm_config_defaults() {
        let config = LlmConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo-0125");
        assert_eq!(config.temperature, 0.7);
        assert_eq!(config.api_key_env, "OPENAI_API_KEY");
    }

    #[test]
    fn test_retrieval_config_defaults() {
        let config = RetrievalConfig::default();
        assert_eq!(config.course_top_k, 2);
        assert_eq!(config.forum_top_k, 3);
        assert_eq!(config.similarity_threshold, 0.5);
    }

    #[test]
    fn test_corpus_config_defaults() {
        let config = CorpusConfig::default();
        assert_eq!(config.course_path, PathBuf::from("data/course_content.json"));
        assert_eq!(config.forum_path, PathBuf::from("data/discourse_posts.json"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm:\n  model: local-model\nserver:\n  bind: 127.0.0.1:9000").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.llm.model, "local-model");
        assert_eq!(config.llm.temperature, 0.7);
        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.retrieval.forum_top_k, 3);
        assert_eq!(config.embedding.batch_size, 32);
    }

    #[test]
    fn test_load_missing_file() {
        let result = Config::load("/nonexistent/tutor/config.yaml");
        assert!(matches!(result, Err(ConfigError::FileRead(_))));
    }

    #[test]
    fn test_load_invalid_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "llm: [not, a, mapping").unwrap();

        let result = Config::load(file.path());
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

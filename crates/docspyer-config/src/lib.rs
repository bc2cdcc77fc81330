use docspyer_engine::{DocstringVocabulary, MarkdownOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Settings for a docspyer run.
///
/// Every field has a default, so a config file only lists what it changes:
///
/// ```toml
/// output_dir = "~/site/docs"
///
/// [markdown]
/// list_class = "nav-list"
///
/// [docstrings]
/// sections = ["Notes", "Examples"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory for generated files. Output goes to stdout when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_dir: Option<PathBuf>,
    pub markdown: MarkdownOptions,
    pub docstrings: DocstringVocabulary,
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the output directory
        config.output_dir = config
            .output_dir
            .map(|dir| Self::expand_path(&dir).unwrap_or(dir));

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/docspyer");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Where generated output for `input` goes, if an output directory is set.
    ///
    /// The file keeps the input's stem and takes `extension`.
    pub fn output_path(&self, input: &Path, extension: &str) -> Option<PathBuf> {
        let dir = self.output_dir.as_ref()?;
        let stem = input.file_stem()?;
        Some(dir.join(stem).with_extension(extension))
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/docspyer/config.toml"));
    }

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_markdown_table() {
        let config_content = r#"
[markdown]
list_class = "nav-list"
html_indent = 2
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.markdown.list_class, "nav-list");
        assert_eq!(config.markdown.html_indent, 2);
        assert_eq!(
            config.markdown.default_code_class,
            MarkdownOptions::default().default_code_class
        );
        assert_eq!(config.docstrings, DocstringVocabulary::default());
        assert_eq!(config.output_dir, None);
    }

    #[test]
    fn test_docstring_vocabulary_override() {
        let config_content = r#"
[docstrings]
varlists = ["Parameters", "Yields"]
"#;

        let config: Config = toml::from_str(config_content).unwrap();

        assert_eq!(config.docstrings.varlists, vec!["Parameters", "Yields"]);
        assert_eq!(
            config.docstrings.sections,
            DocstringVocabulary::default().sections
        );
    }

    #[test]
    fn test_config_serialization_roundtrip() {
        let mut original = Config {
            output_dir: Some(PathBuf::from("/tmp/test-docs")),
            ..Config::default()
        };
        original.markdown.code_languages.push("rust".to_string());

        let toml_str = toml::to_string(&original).unwrap();
        let deserialized: Config = toml::from_str(&toml_str).unwrap();

        assert_eq!(original, deserialized);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DOCSPYER_TEST_VAR", "/test/env/path");
        }

        let path = PathBuf::from("$DOCSPYER_TEST_VAR/subdir");
        let expanded = Config::expand_path(&path);

        assert_eq!(expanded, Some(PathBuf::from("/test/env/path/subdir")));

        unsafe {
            env::remove_var("DOCSPYER_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        assert_eq!(Config::expand_path(&path), Some(path));
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_toml() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[markdown\nhtml_indent = 2").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested").join("config.toml");
        let test_config = Config {
            output_dir: Some(PathBuf::from("/tmp/test-docs")),
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }

    #[test]
    fn test_output_dir_with_env_var_in_toml() {
        unsafe {
            env::set_var("DOCSPYER_SITE", "/custom/site");
        }

        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "output_dir = \"$DOCSPYER_SITE/docs\"\n").unwrap();

        let config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(config.output_dir, Some(PathBuf::from("/custom/site/docs")));

        unsafe {
            env::remove_var("DOCSPYER_SITE");
        }
    }

    #[test]
    fn test_output_path() {
        let config = Config {
            output_dir: Some(PathBuf::from("/out")),
            ..Config::default()
        };

        assert_eq!(
            config.output_path(Path::new("docs/guide.md"), "html"),
            Some(PathBuf::from("/out/guide.html"))
        );
        assert_eq!(
            Config::default().output_path(Path::new("guide.md"), "html"),
            None
        );
    }
}

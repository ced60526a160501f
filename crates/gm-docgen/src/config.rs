use std::path::{Path, PathBuf};

use gm_search::SectionKind;
use serde::{Deserialize, Serialize};

/// Error raised while reading or writing a [DocgenConfig].
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// The configuration file could not be read or written.
    #[error("Cannot access configuration {}: {source}", path.display())]
    Io {
        /// File being accessed.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The content is not a valid docgen configuration.
    #[error("Invalid docgen configuration {origin}: {source}")]
    InvalidFormat {
        /// File name, or `<buffer>` for in-memory content.
        origin: String,
        /// Underlying error.
        source: serde_json::Error,
    },

    /// The content is not utf-8.
    #[error("Docgen configuration {origin} is not utf-8")]
    NotUtf8 {
        /// File name, or `<buffer>` for in-memory content.
        origin: String,
    },

    /// No section would be emitted.
    #[error("Docgen configuration {origin} lists no section")]
    NoSections {
        /// File name, or `<buffer>` for in-memory content.
        origin: String,
    },
}

const BUFFER_ORIGIN: &str = "<buffer>";

/// Settings of the search table generation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocgenConfig {
    /// Prefix of every anchor, relative to the search directory.
    pub html_root: String,
    /// Sections to emit, in manifest order.
    pub sections: Vec<SectionKind>,
    /// Directory receiving the scripts.
    pub output: PathBuf,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        Self {
            html_root: "../".to_string(),
            sections: SectionKind::ALL.to_vec(),
            output: PathBuf::from("search"),
        }
    }
}

impl DocgenConfig {
    /// Loads the configuration from a JSON file. Missing fields take their default.
    pub fn load<P: AsRef<Path>>(file: P) -> Result<Self, ConfigError> {
        let path = file.as_ref();
        let content = std::fs::read(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("Loading docgen configuration {}", path.display());

        Self::parse(&content, path.display().to_string())
    }

    /// Loads the configuration from a JSON buffer.
    pub fn load_binary(data: &[u8]) -> Result<Self, ConfigError> {
        Self::parse(data, BUFFER_ORIGIN.to_string())
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save<P: AsRef<Path>>(&self, file: P) -> Result<(), ConfigError> {
        let path = file.as_ref();
        let content = self.to_json().map_err(|source| ConfigError::InvalidFormat {
            origin: path.display().to_string(),
            source,
        })?;

        std::fs::write(path, content).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Pretty-printed JSON form of the configuration.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn parse(data: &[u8], origin: String) -> Result<Self, ConfigError> {
        let content = match core::str::from_utf8(data) {
            Ok(content) => content,
            Err(_) => return Err(ConfigError::NotUtf8 { origin }),
        };
        let config: Self = match serde_json::from_str(content) {
            Ok(config) => config,
            Err(source) => return Err(ConfigError::InvalidFormat { origin, source }),
        };

        if config.sections.is_empty() {
            return Err(ConfigError::NoSections { origin });
        }

        Ok(config)
    }

    /// Replaces the emitted sections.
    pub fn with_sections(mut self, sections: Vec<SectionKind>) -> Self {
        self.sections = sections;
        self
    }

    /// Replaces the output directory.
    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    /// Replaces the anchor prefix.
    pub fn with_html_root(mut self, html_root: String) -> Self {
        self.html_root = html_root;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_fill_missing_fields_with_defaults() {
        let config = DocgenConfig::load_binary(br#"{ "sections": ["files"] }"#).unwrap();

        assert_eq!(config.sections, [SectionKind::Files]);
        assert_eq!(config.html_root, "../");
        assert_eq!(config.output, PathBuf::from("search"));
    }

    #[test]
    fn should_save_and_load() {
        let directory = tempfile::tempdir().unwrap();
        let file = directory.path().join("docgen.json");
        let config = DocgenConfig::default()
            .with_html_root("/docs/".to_string())
            .with_sections(vec![SectionKind::Classes, SectionKind::Functions]);

        config.save(&file).unwrap();
        let loaded = DocgenConfig::load(&file).unwrap();

        assert_eq!(loaded, config);
    }

    #[test]
    fn should_report_missing_file_with_its_path() {
        let error = DocgenConfig::load("/does/not/exist.json").unwrap_err();

        match &error {
            ConfigError::Io { path, source } => {
                assert_eq!(path, Path::new("/does/not/exist.json"));
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(error
            .to_string()
            .starts_with("Cannot access configuration /does/not/exist.json: "));
    }

    #[test]
    fn should_name_the_file_of_an_invalid_section() {
        let directory = tempfile::tempdir().unwrap();
        let file = directory.path().join("docgen.json");
        std::fs::write(&file, r#"{ "sections": ["namespaces"] }"#).unwrap();

        let error = DocgenConfig::load(&file).unwrap_err();

        assert!(matches!(&error, ConfigError::InvalidFormat { origin, .. } if *origin == file.display().to_string()));
        let message = error.to_string();
        assert!(message.contains("docgen.json"));
        assert!(message.contains("unknown variant `namespaces`"));
    }

    #[test]
    fn should_reject_non_utf8_buffers() {
        let error = DocgenConfig::load_binary(&[0xff, 0xfe]).unwrap_err();

        assert!(matches!(&error, ConfigError::NotUtf8 { origin } if origin == "<buffer>"));
        assert_eq!(error.to_string(), "Docgen configuration <buffer> is not utf-8");
    }

    #[test]
    fn should_reject_empty_section_list() {
        let error = DocgenConfig::load_binary(br#"{ "sections": [] }"#).unwrap_err();

        assert!(matches!(error, ConfigError::NoSections { .. }));
    }
}

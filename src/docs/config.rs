//! Configuration loading
//!
//! `defaults/comdoc.default.toml` is embedded into the binary so that the documented
//! defaults and the runtime behavior stay in sync. User files are layered on top of
//! those defaults via [`Loader`] before deserializing into [`ComdocConfig`].

use crate::docs::assembler::FileKind;
use crate::docs::extraction::IndentationStrategy;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat};
use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;

const DEFAULT_TOML: &str = include_str!("../../defaults/comdoc.default.toml");

/// Configuration file picked up from a project directory
pub const PROJECT_CONFIG_FILE: &str = "comdoc.toml";

/// Top-level configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ComdocConfig {
    pub files: FilesConfig,
    pub comments: CommentsConfig,
    pub indentation: IndentationConfig,
    pub processing: ProcessingConfig,
    pub output: OutputConfig,
}

/// Maps file extensions to pipelines
#[derive(Debug, Clone, Deserialize)]
pub struct FilesConfig {
    pub markdown_extensions: Vec<String>,
    pub source_extensions: Vec<String>,
    /// Source extensions where `'` starts a character literal rather than a string
    pub char_literal_extensions: Vec<String>,
    pub unknown: UnknownFilePolicy,
}

/// Handling of extensions listed in neither group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UnknownFilePolicy {
    /// Refuse the file
    Reject,
    /// Process the file as commented source
    Source,
}

impl FilesConfig {
    /// The pipeline for `path`, or `None` if the file should be rejected
    pub fn kind_for(&self, path: &Path) -> Option<FileKind> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .unwrap_or("");
        let matches = |candidates: &[String]| {
            candidates
                .iter()
                .any(|candidate| candidate.eq_ignore_ascii_case(extension))
        };

        if matches(&self.markdown_extensions) {
            Some(FileKind::Markdown)
        } else if matches(&self.source_extensions) {
            Some(FileKind::CommentedSource)
        } else {
            match self.unknown {
                UnknownFilePolicy::Reject => None,
                UnknownFilePolicy::Source => Some(FileKind::CommentedSource),
            }
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommentsConfig {
    pub sigil: char,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IndentationConfig {
    pub strategy: IndentationStrategy,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProcessingConfig {
    pub concurrency: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    Summary,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputFormat::Summary => "summary",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "summary" => Ok(OutputFormat::Summary),
            "json" => Ok(OutputFormat::Json),
            "yaml" => Ok(OutputFormat::Yaml),
            other => Err(ConfigError::Message(format!(
                "unknown output format `{}` (expected summary, json or yaml)",
                other
            ))),
        }
    }
}

impl ComdocConfig {
    /// Checks the constraints deserialization can't express
    fn validate(&self) -> Result<(), ConfigError> {
        if self.processing.concurrency == 0 {
            return Err(ConfigError::Message(
                "processing.concurrency must be at least 1".to_string(),
            ));
        }
        if self.comments.sigil.is_whitespace() {
            return Err(ConfigError::Message(
                "comments.sigil must not be whitespace".to_string(),
            ));
        }
        let files = &self.files;
        let shared = files.markdown_extensions.iter().find(|markdown| {
            files
                .source_extensions
                .iter()
                .any(|source| source.eq_ignore_ascii_case(markdown))
        });
        if let Some(extension) = shared {
            return Err(ConfigError::Message(format!(
                "extension `{}` is listed as both markdown and source",
                extension
            )));
        }
        Ok(())
    }
}

/// Layers configuration sources over the embedded defaults.
///
/// Later layers win: defaults, then the project's `comdoc.toml`, then an explicit
/// configuration file, then command-line settings.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer [PROJECT_CONFIG_FILE] from `dir`, if there is one
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let source = File::from(dir.as_ref().join(PROJECT_CONFIG_FILE))
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer a configuration file that must exist
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Result<Self, ConfigError> {
        self.builder = self.builder.set_override("output.format", format.as_str())?;
        Ok(self)
    }

    /// Merge the layers, deserialize and validate
    pub fn build(self) -> Result<ComdocConfig, ConfigError> {
        let config: ComdocConfig = self.builder.build()?.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

pub fn load_defaults() -> Result<ComdocConfig, ConfigError> {
    Loader::new().build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_default_config() {
        let config = load_defaults().expect("defaults to deserialize");
        assert_eq!(config.comments.sigil, '>');
        assert_eq!(config.indentation.strategy, IndentationStrategy::FirstLine);
        assert_eq!(config.files.unknown, UnknownFilePolicy::Reject);
        assert_eq!(config.processing.concurrency, 8);
        assert_eq!(config.output.format, OutputFormat::Summary);
    }

    #[test]
    fn format_override_wins() {
        let config = Loader::new()
            .with_format(OutputFormat::Json)
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
        assert!("html".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn layers_user_file() {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "[files]\nunknown = \"source\"\n\n[comments]\nsigil = \"!\"").unwrap();

        let config = Loader::new()
            .with_file(file.path())
            .build()
            .expect("config to build");
        assert_eq!(config.files.unknown, UnknownFilePolicy::Source);
        assert_eq!(config.comments.sigil, '!');
        // Untouched keys keep their defaults
        assert_eq!(config.files.markdown_extensions, vec!["md", "markdown"]);
    }

    #[test]
    fn project_file_is_optional() {
        let empty = tempfile::tempdir().expect("temp dir");
        let config = Loader::new()
            .with_project_dir(empty.path())
            .build()
            .expect("config to build");
        assert_eq!(config.processing.concurrency, 8);

        let project = tempfile::tempdir().expect("temp dir");
        std::fs::write(
            project.path().join(PROJECT_CONFIG_FILE),
            "[indentation]\nstrategy = \"minimum\"\n",
        )
        .unwrap();
        let config = Loader::new()
            .with_project_dir(project.path())
            .build()
            .expect("config to build");
        assert_eq!(config.indentation.strategy, IndentationStrategy::Minimum);
    }

    #[test]
    fn rejects_invalid_settings() {
        let cases = [
            "[processing]\nconcurrency = 0\n",
            "[comments]\nsigil = \" \"\n",
            "[files]\nsource_extensions = [\"js\", \"MD\"]\n",
        ];
        for contents in cases {
            let mut file = tempfile::Builder::new()
                .suffix(".toml")
                .tempfile()
                .expect("temp file");
            write!(file, "{}", contents).unwrap();
            let error = Loader::new().with_file(file.path()).build().unwrap_err();
            assert!(matches!(error, ConfigError::Message(_)), "{}", contents);
        }
    }

    #[test]
    fn resolves_file_kinds() {
        let config = load_defaults().unwrap();
        assert_eq!(
            config.files.kind_for(Path::new("docs/intro.md")),
            Some(FileKind::Markdown)
        );
        assert_eq!(
            config.files.kind_for(Path::new("README.MARKDOWN")),
            Some(FileKind::Markdown)
        );
        assert_eq!(
            config.files.kind_for(Path::new("lib/process-file.js")),
            Some(FileKind::CommentedSource)
        );
        assert_eq!(config.files.kind_for(Path::new("logo.png")), None);
        assert_eq!(config.files.kind_for(Path::new("Makefile")), None);
    }

    #[test]
    fn unknown_extensions_fall_back_to_source() {
        let mut config = load_defaults().unwrap();
        config.files.unknown = UnknownFilePolicy::Source;
        assert_eq!(
            config.files.kind_for(Path::new("script.zig")),
            Some(FileKind::CommentedSource)
        );
    }
}

use crate::errors::ConfigError;
use anyhow::{Context, Result};
use clap::ArgMatches;
use kwgen_codegen::TableTemplate;
use kwgen_fs::walk_dir::walk_for_file;
use kwgen_scan::Markers;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

pub const CONFIG_FILE_NAME: &str = "kwgen.toml";
pub const DEFAULT_INPUT: &str = "token.h";
pub const DEFAULT_OUTPUT: &str = "token_convert.h";

/// Contents of `kwgen.toml`. Every key is optional.
#[derive(Deserialize, Debug, Clone, Default, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KwgenConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub markers: MarkersConfig,
    #[serde(default)]
    pub table: TableConfig,
}

#[derive(Deserialize, Debug, Clone, Default, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Deserialize, Debug, Clone, Default, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MarkersConfig {
    pub start: Option<String>,
    pub end: Option<String>,
}

#[derive(Deserialize, Debug, Clone, Default, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TableConfig {
    pub header: Option<String>,
    pub enum_type: Option<String>,
    pub name: Option<String>,
}

/// Values given on the command line. They win over `kwgen.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

impl Overrides {
    pub fn from_args(args: &ArgMatches) -> Self {
        Self {
            input: args.get_one::<PathBuf>("input").cloned(),
            output: args.get_one::<PathBuf>("output").cloned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Header declaring the token enumeration.
    pub input_path: PathBuf,
    /// Destination of the generated table, overwritten on every run.
    pub output_path: PathBuf,
    pub markers: Markers,
    pub template: TableTemplate,
    /// The `kwgen.toml` this config was read from, if any.
    pub file: Option<PathBuf>,
}

impl Config {
    /// A config with the built-in markers and template.
    pub fn new(input_path: impl Into<PathBuf>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            markers: Markers::default(),
            template: TableTemplate::default(),
            file: None,
        }
    }

    /// Resolves the configuration for a run started in `cwd`.
    ///
    /// Uses `explicit` when given, otherwise the nearest `kwgen.toml` in
    /// `cwd` or its ancestors, otherwise built-in defaults.
    pub fn get(cwd: &Path, explicit: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                let path = cwd.join(path);
                if !path.is_file() {
                    return Err(ConfigError::ConfigFileNotFound(path).into());
                }
                Some(path)
            }
            None => walk_for_file(cwd, CONFIG_FILE_NAME),
        };

        let Some(path) = path else {
            debug!("no {CONFIG_FILE_NAME} found, using defaults");
            return Self::parse(KwgenConfig::default(), cwd, cwd, overrides);
        };

        debug!(path = %path.display(), "loading config");

        let content = fs_err::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        let config = Self::from_toml(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let base = path.parent().unwrap_or(cwd).to_path_buf();
        let mut config = Self::parse(config, &base, cwd, overrides)?;
        config.file = Some(path);

        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<KwgenConfig, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Fills in defaults and applies overrides.
    ///
    /// Paths from the file resolve against `base`, the directory holding
    /// the file. Paths from the command line resolve against `cwd`.
    pub fn parse(config: KwgenConfig, base: &Path, cwd: &Path, overrides: &Overrides) -> Result<Self> {
        let KwgenConfig {
            paths,
            markers,
            table,
        } = config;

        let input_path = resolve_path(
            overrides.input.as_deref(),
            paths.input,
            "paths.input",
            DEFAULT_INPUT,
            base,
            cwd,
        )?;
        let output_path = resolve_path(
            overrides.output.as_deref(),
            paths.output,
            "paths.output",
            DEFAULT_OUTPUT,
            base,
            cwd,
        )?;

        let markers = Markers::new(
            non_empty(markers.start, "markers.start", Markers::DEFAULT_START)?,
            non_empty(markers.end, "markers.end", Markers::DEFAULT_END)?,
        );

        let template = TableTemplate {
            header: non_empty(table.header, "table.header", TableTemplate::DEFAULT_HEADER)?,
            enum_type: non_empty(
                table.enum_type,
                "table.enum_type",
                TableTemplate::DEFAULT_ENUM_TYPE,
            )?,
            table_name: non_empty(table.name, "table.name", TableTemplate::DEFAULT_TABLE_NAME)?,
        };

        Ok(Self {
            input_path,
            output_path,
            markers,
            template,
            file: None,
        })
    }
}

fn resolve_path(
    arg: Option<&Path>,
    value: Option<PathBuf>,
    key: &'static str,
    default: &str,
    base: &Path,
    cwd: &Path,
) -> Result<PathBuf, ConfigError> {
    if let Some(arg) = arg {
        return Ok(cwd.join(arg));
    }

    match value {
        Some(value) if value.as_os_str().is_empty() => Err(ConfigError::EmptyValue(key)),
        Some(value) => Ok(base.join(value)),
        None => Ok(base.join(default)),
    }
}

fn non_empty(value: Option<String>, key: &'static str, default: &str) -> Result<String, ConfigError> {
    match value {
        Some(value) if value.is_empty() => Err(ConfigError::EmptyValue(key)),
        Some(value) => Ok(value),
        None => Ok(default.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults_without_file() {
        let config = Config::parse(
            KwgenConfig::default(),
            Path::new("/proj"),
            Path::new("/proj"),
            &Overrides::default(),
        )
        .unwrap();

        assert_eq!(config.input_path, Path::new("/proj/token.h"));
        assert_eq!(config.output_path, Path::new("/proj/token_convert.h"));
        assert_eq!(config.markers, Markers::default());
        assert_eq!(config.template, TableTemplate::default());
    }

    #[test]
    fn test_full_file() {
        let file = Config::from_toml(
            r#"
[paths]
input = "include/tokens.h"
output = "gen/keywords.h"

[markers]
start = "@keywords"
end = "@end"

[table]
header = "tokens.h"
enum_type = "Tok"
name = "keywords"
"#,
        )
        .unwrap();

        let config = Config::parse(file, Path::new("/proj"), Path::new("/proj/src"), &Overrides::default()).unwrap();

        assert_eq!(config.input_path, Path::new("/proj/include/tokens.h"));
        assert_eq!(config.output_path, Path::new("/proj/gen/keywords.h"));
        assert_eq!(config.markers, Markers::new("@keywords", "@end"));
        assert_eq!(config.template.enum_type, "Tok");
        assert_eq!(config.template.table_name, "keywords");
    }

    #[test]
    fn test_overrides_resolve_against_cwd() {
        let file = Config::from_toml("[paths]\ninput = \"a.h\"\n").unwrap();
        let overrides = Overrides {
            input: Some(PathBuf::from("b.h")),
            output: None,
        };

        let config = Config::parse(file, Path::new("/proj"), Path::new("/proj/src"), &overrides).unwrap();

        assert_eq!(config.input_path, Path::new("/proj/src/b.h"));
        assert_eq!(config.output_path, Path::new("/proj/token_convert.h"));
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let err = Config::from_toml("[paths]\ninptu = \"a.h\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParseError(_)));
    }

    #[test]
    fn test_empty_marker_is_rejected() {
        let file = Config::from_toml("[markers]\nend = \"\"\n").unwrap();
        let err = Config::parse(file, Path::new("/"), Path::new("/"), &Overrides::default()).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::EmptyValue("markers.end"))
        ));
    }

    #[test]
    fn test_discovers_file_in_ancestor() {
        let root = tempfile::tempdir().unwrap();
        let nested = root.path().join("src");
        fs::create_dir_all(&nested).unwrap();
        fs::write(
            root.path().join(CONFIG_FILE_NAME),
            "[paths]\noutput = \"gen.h\"\n",
        )
        .unwrap();

        let config = Config::get(&nested, None, &Overrides::default()).unwrap();

        assert_eq!(config.file, Some(root.path().join(CONFIG_FILE_NAME)));
        assert_eq!(config.input_path, root.path().join("token.h"));
        assert_eq!(config.output_path, root.path().join("gen.h"));
    }

    #[test]
    fn test_missing_explicit_file() {
        let root = tempfile::tempdir().unwrap();

        let err = Config::get(root.path(), Some(Path::new("custom.toml")), &Overrides::default())
            .unwrap_err();

        assert!(matches!(
            err.downcast_ref::<ConfigError>(),
            Some(ConfigError::ConfigFileNotFound(_))
        ));
    }

    #[test]
    fn test_malformed_file_mentions_path() {
        let root = tempfile::tempdir().unwrap();
        fs::write(root.path().join(CONFIG_FILE_NAME), "[paths\n").unwrap();

        let err = Config::get(root.path(), None, &Overrides::default()).unwrap_err();

        assert!(format!("{err}").contains(CONFIG_FILE_NAME));
    }
}

//! `graph-models.toml` loading.
//!
//! # Resolution Algorithm
//!
//! 1. `--config` flag (must exist)
//! 2. `GRAPH_MODELS_CONFIG` environment variable
//! 3. Current directory
//! 4. Parent directories (walk up to filesystem root)
//! 5. XDG config directory (`~/.config/graph-models/config.toml`)
//!
//! Nothing found means defaults. A file that is found but malformed is an
//! error.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;

/// File name searched for in the current and parent directories.
pub const CONFIG_FILE_NAME: &str = "graph-models.toml";
/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "GRAPH_MODELS_CONFIG";

/// Errors that can occur while resolving or loading configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// I/O error when reading a config file.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error when a config file is malformed.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// A config file named on the command line does not exist.
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The working directory could not be determined.
    #[error("cannot determine current directory: {0}")]
    CurrentDir(#[from] std::io::Error),
}

/// Settings read from `graph-models.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub output: OutputConfig,
    pub roundtrip: RoundtripConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Indent JSON written to stdout.
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RoundtripConfig {
    /// Treat explicit `null`s that re-encode as absent as lossless.
    pub allow_dropped_nulls: bool,
}

impl Default for RoundtripConfig {
    fn default() -> Self {
        Self {
            allow_dropped_nulls: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    pub filter: Option<String>,
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// A resolved configuration and where it came from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedConfig {
    pub config: Config,
    /// `None` when defaults are in use.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Loads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Finds and loads the config for this process.
    ///
    /// # Errors
    ///
    /// Returns `Err(ConfigError)` if:
    /// - `explicit` names a file that does not exist
    /// - The current directory cannot be read
    /// - A found config file cannot be read or parsed
    pub fn resolve(explicit: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let current = std::env::current_dir()?;
        resolve_in(explicit, env_override(), &current, xdg_config_path())
    }
}

/// Resolution with every input supplied by the caller.
fn resolve_in(
    explicit: Option<&Path>,
    env_path: Option<PathBuf>,
    current: &Path,
    xdg_path: Option<PathBuf>,
) -> Result<LoadedConfig, ConfigError> {
    if let Some(path) = explicit {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        return load_from(path.to_path_buf());
    }

    if let Some(path) = env_path
        && path.exists()
    {
        return load_from(path);
    }

    for dir in current.ancestors() {
        let path = dir.join(CONFIG_FILE_NAME);
        if path.exists() {
            return load_from(path);
        }
    }

    if let Some(path) = xdg_path
        && path.exists()
    {
        return load_from(path);
    }

    Ok(LoadedConfig::default())
}

fn load_from(path: PathBuf) -> Result<LoadedConfig, ConfigError> {
    let config = Config::load(&path)?;
    Ok(LoadedConfig {
        config,
        path: Some(path),
    })
}

fn env_override() -> Option<PathBuf> {
    std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from)
}

fn xdg_config_path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("graph-models").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    const SAMPLE: &str = r#"
[output]
pretty = false

[roundtrip]
allow_dropped_nulls = false

[logging]
filter = "graph_models=debug"
format = "json"
"#;

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("write config");
        path
    }

    #[test]
    fn test_defaults_when_nothing_found() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");

        // Act
        let loaded = resolve_in(None, None, temp.path(), None).expect("resolve");

        // Assert
        // A graph-models.toml above the temp dir would be picked up here.
        assert!(loaded.path.is_none());
        let defaults = loaded.config;
        assert!(defaults.output.pretty);
        assert!(defaults.roundtrip.allow_dropped_nulls);
        assert_eq!(defaults.logging.format, LogFormat::Text);
        assert!(defaults.logging.filter.is_none());
    }

    #[test]
    fn test_load_reads_every_section() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let path = write(temp.path(), CONFIG_FILE_NAME, SAMPLE);

        // Act
        let config = Config::load(&path).expect("load");

        // Assert
        assert!(!config.output.pretty);
        assert!(!config.roundtrip.allow_dropped_nulls);
        assert_eq!(config.logging.filter.as_deref(), Some("graph_models=debug"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_missing_sections_keep_defaults() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let path = write(temp.path(), CONFIG_FILE_NAME, "[output]\npretty = false\n");

        // Act
        let config = Config::load(&path).expect("load");

        // Assert
        assert!(!config.output.pretty);
        assert!(config.roundtrip.allow_dropped_nulls);
    }

    #[test]
    fn test_resolve_walks_up_directories() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let nested = temp.path().join("deeply/nested/project");
        fs::create_dir_all(&nested).expect("mkdir");
        let expected = write(temp.path(), CONFIG_FILE_NAME, SAMPLE);

        // Act
        let loaded = resolve_in(None, None, &nested, None).expect("resolve");

        // Assert
        assert_eq!(loaded.path, Some(expected));
        assert_eq!(loaded.config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_explicit_path_beats_env_and_directories() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        write(temp.path(), CONFIG_FILE_NAME, "[output]\npretty = true\n");
        let env_path = write(temp.path(), "env.toml", "[output]\npretty = true\n");
        let explicit = write(temp.path(), "explicit.toml", SAMPLE);

        // Act
        let loaded =
            resolve_in(Some(&explicit), Some(env_path), temp.path(), None).expect("resolve");

        // Assert
        assert_eq!(loaded.path, Some(explicit));
        assert!(!loaded.config.output.pretty);
    }

    #[test]
    fn test_env_path_beats_current_directory() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        write(temp.path(), CONFIG_FILE_NAME, "[output]\npretty = true\n");
        let env_path = write(temp.path(), "env.toml", SAMPLE);

        // Act
        let loaded = resolve_in(None, Some(env_path.clone()), temp.path(), None).expect("resolve");

        // Assert
        assert_eq!(loaded.path, Some(env_path));
    }

    #[test]
    fn test_missing_env_path_falls_through() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let local = write(temp.path(), CONFIG_FILE_NAME, SAMPLE);

        // Act
        let loaded = resolve_in(None, Some(temp.path().join("absent.toml")), temp.path(), None)
            .expect("resolve");

        // Assert
        assert_eq!(loaded.path, Some(local));
    }

    #[test]
    fn test_xdg_path_is_last_resort() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let project = temp.path().join("project");
        let xdg_dir = temp.path().join("xdg");
        fs::create_dir_all(&project).expect("mkdir");
        fs::create_dir_all(&xdg_dir).expect("mkdir");
        let xdg = write(&xdg_dir, "config.toml", SAMPLE);

        // Act
        let loaded = resolve_in(None, None, &project, Some(xdg.clone())).expect("resolve");

        // Assert
        assert_eq!(loaded.path, Some(xdg));
    }

    #[test]
    fn test_missing_explicit_path_is_an_error() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let missing = temp.path().join("nope.toml");

        // Act
        let result = resolve_in(Some(&missing), None, temp.path(), None);

        // Assert
        assert!(matches!(result, Err(ConfigError::NotFound(path)) if path == missing));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        write(temp.path(), CONFIG_FILE_NAME, "[output]\npretty = \"very\"\n");

        // Act
        let result = resolve_in(None, None, temp.path(), None);

        // Assert
        let err = result.expect_err("malformed config");
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_unknown_keys_are_rejected() {
        // Arrange
        let temp = TempDir::new().expect("tempdir");
        let path = write(temp.path(), CONFIG_FILE_NAME, "[output]\ncolour = true\n");

        // Act
        let result = Config::load(&path);

        // Assert
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_resolve_reads_env_var_and_cwd() {
        // Arrange
        let _lock = crate::testing::test_lock();
        let temp = TempDir::new().expect("tempdir");
        let env_config = write(temp.path(), "from-env.toml", SAMPLE);
        let original_dir = std::env::current_dir().expect("cwd");
        let original_env = std::env::var_os(CONFIG_ENV_VAR);
        std::env::set_current_dir(temp.path()).expect("chdir");
        unsafe {
            std::env::set_var(CONFIG_ENV_VAR, &env_config);
        }

        // Act
        let result = Config::resolve(None);

        // Restore environment
        unsafe {
            match original_env {
                Some(value) => std::env::set_var(CONFIG_ENV_VAR, value),
                None => std::env::remove_var(CONFIG_ENV_VAR),
            }
        }
        std::env::set_current_dir(original_dir).expect("chdir back");

        // Assert
        let loaded = result.expect("resolve");
        assert_eq!(
            loaded.path.as_deref().and_then(Path::file_name),
            Some(std::ffi::OsStr::new("from-env.toml"))
        );
        assert_eq!(loaded.config.logging.format, LogFormat::Json);
    }
}

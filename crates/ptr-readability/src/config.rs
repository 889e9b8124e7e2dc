//! Configuration loading and discovery.
//!
//! Configuration is merged from, lowest precedence first:
//! 1. Built-in defaults
//! 2. User config in the XDG config directory
//! 3. Project config found by walking up from a search root
//! 4. Explicit files
//! 5. `PTR_`-prefixed environment variables
//!
//! # Supported formats
//!
//! TOML (`.toml`), YAML (`.yaml`, `.yml`) and JSON (`.json`).
//!
//! # Config file locations (in order of precedence, highest first):
//! - `ptr-readability.<ext>` in current directory or any parent
//! - `.ptr-readability.<ext>` in current directory or any parent
//! - `ptr.<ext>` in current directory or any parent
//! - `.ptr.<ext>` in current directory or any parent
//! - `~/.config/ptr-readability/config.<ext>` (user config)
//!
//! When multiple files exist in the same directory, all are merged via figment.
//!
//! # Example
//! ```no_run
//! use camino::Utf8PathBuf;
//! use ptr_readability::config::ConfigLoader;
//!
//! let cwd = Utf8PathBuf::try_from(std::env::current_dir().unwrap()).unwrap();
//! let (config, _sources) = ConfigLoader::new()
//!     .with_project_search(&cwd)
//!     .load()
//!     .unwrap();
//! println!("word list: {:?}", config.word_list);
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use figment::Figment;
use figment::providers::{Env, Format, Json, Serialized, Toml, Yaml};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::tags::PunctuationSet;

/// The configuration for ptr-readability.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Reference long-word list (one word per line). Required to build
    /// [`Resources`](crate::resources::Resources) from configuration.
    pub word_list: Option<Utf8PathBuf>,
    /// Optional hyphenation dictionary (one hyphenated word per line).
    pub hyphenation_dictionary: Option<Utf8PathBuf>,
    /// Which punctuation tags are stripped before counting words.
    pub punctuation: PunctuationSet,
    /// Compute per-sentence records on a thread pool.
    pub parallel: bool,
    /// Worker thread count. Omit to use the global rayon pool.
    pub threads: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_list: None,
            hyphenation_dictionary: None,
            punctuation: PunctuationSet::Standard,
            parallel: true,
            threads: None,
        }
    }
}

/// Metadata about which configuration sources were loaded.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigSources {
    /// Project config files found by walking up, ordered low→high precedence.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub project_files: Vec<Utf8PathBuf>,
    /// User config file from XDG config directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_file: Option<Utf8PathBuf>,
    /// Explicit config files loaded.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigSources {
    /// Returns the highest-precedence config file that was loaded.
    ///
    /// Precedence: explicit files > project files > user file.
    pub fn primary_file(&self) -> Option<&Utf8Path> {
        self.explicit_files
            .last()
            .map(Utf8PathBuf::as_path)
            .or_else(|| self.project_files.last().map(Utf8PathBuf::as_path))
            .or(self.user_file.as_deref())
    }
}

/// Supported configuration file extensions (in order of preference).
const CONFIG_EXTENSIONS: &[&str] = &["toml", "yaml", "yml", "json"];

/// Application name for XDG directory lookup.
const APP_NAME: &str = "ptr-readability";

/// Config file stems (in precedence order, lowest first).
const APP_NAMES: &[&str] = &["ptr", "ptr-readability"];

/// Prefix for environment variable overrides.
const ENV_PREFIX: &str = "PTR_";

/// Builder for loading configuration from multiple sources.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    project_search_root: Option<Utf8PathBuf>,
    include_user_config: bool,
    /// Stop searching when we hit a directory containing this file/dir.
    boundary_marker: Option<String>,
    explicit_files: Vec<Utf8PathBuf>,
}

impl ConfigLoader {
    /// Create a new config loader with default settings.
    pub fn new() -> Self {
        Self {
            project_search_root: None,
            include_user_config: true,
            boundary_marker: Some(".git".to_string()),
            explicit_files: Vec::new(),
        }
    }

    /// Set the starting directory for project config search.
    pub fn with_project_search<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.project_search_root = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set whether to include user config from `~/.config/ptr-readability/`.
    pub const fn with_user_config(mut self, include: bool) -> Self {
        self.include_user_config = include;
        self
    }

    /// Set a boundary marker to stop directory traversal. Default is `.git`.
    pub fn with_boundary_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.boundary_marker = Some(marker.into());
        self
    }

    /// Disable boundary marker (search all the way to filesystem root).
    pub fn without_boundary_marker(mut self) -> Self {
        self.boundary_marker = None;
        self
    }

    /// Add an explicit config file to load. Later files take precedence.
    pub fn with_file<P: AsRef<Utf8Path>>(mut self, path: P) -> Self {
        self.explicit_files.push(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration, merging all discovered sources.
    #[tracing::instrument(skip(self), fields(search_root = ?self.project_search_root))]
    pub fn load(self) -> ConfigResult<(Config, ConfigSources)> {
        tracing::debug!("loading configuration");
        let mut figment = Figment::new().merge(Serialized::defaults(Config::default()));
        let mut sources = ConfigSources::default();

        if self.include_user_config
            && let Some(user_config) = Self::find_user_config()
        {
            figment = Self::merge_file(figment, &user_config);
            sources.user_file = Some(user_config);
        }

        if let Some(ref root) = self.project_search_root {
            let project_configs = self.find_project_configs(root);
            for pc in &project_configs {
                figment = Self::merge_file(figment, pc);
            }
            sources.project_files = project_configs;
        }

        for file in &self.explicit_files {
            figment = Self::merge_file(figment, file);
        }
        sources.explicit_files = self.explicit_files;

        // PTR_WORD_LIST=/usr/share/dict/long.txt, PTR_PARALLEL=false, etc.
        figment = figment.merge(Env::prefixed(ENV_PREFIX).lowercase(true));

        let config: Config = figment
            .extract()
            .map_err(|e| ConfigError::Deserialize(Box::new(e)))?;
        tracing::info!(
            punctuation = config.punctuation.as_str(),
            parallel = config.parallel,
            word_list = ?config.word_list,
            "configuration loaded"
        );
        Ok((config, sources))
    }

    /// Load configuration, returning an error if no config file is found.
    pub fn load_or_error(self) -> ConfigResult<(Config, ConfigSources)> {
        let has_user = self.include_user_config && Self::find_user_config().is_some();
        let has_project = self
            .project_search_root
            .as_ref()
            .is_some_and(|root| !self.find_project_configs(root).is_empty());
        let has_explicit = !self.explicit_files.is_empty();

        if !has_user && !has_project && !has_explicit {
            return Err(ConfigError::NotFound);
        }

        self.load()
    }

    /// Find project config files by walking up from the given directory.
    ///
    /// Only the closest directory with any match contributes. Files are
    /// ordered low-to-high precedence: `ptr` before `ptr-readability`,
    /// dotfiles before regular files within each name.
    fn find_project_configs(&self, start: &Utf8Path) -> Vec<Utf8PathBuf> {
        let mut current = Some(start.to_path_buf());

        while let Some(dir) = current {
            let mut found = Vec::new();
            for app_name in APP_NAMES {
                for ext in CONFIG_EXTENSIONS {
                    let dotfile = dir.join(format!(".{app_name}.{ext}"));
                    if dotfile.is_file() {
                        found.push(dotfile);
                    }
                }
                for ext in CONFIG_EXTENSIONS {
                    let regular = dir.join(format!("{app_name}.{ext}"));
                    if regular.is_file() {
                        found.push(regular);
                    }
                }
            }

            if !found.is_empty() {
                return found;
            }

            // Checked after the config files so a config beside the marker is found.
            if let Some(ref marker) = self.boundary_marker
                && dir.join(marker).exists()
                && dir != start
            {
                break;
            }

            current = dir.parent().map(Utf8Path::to_path_buf);
        }

        Vec::new()
    }

    fn find_user_config() -> Option<Utf8PathBuf> {
        let config_dir = user_config_dir()?;
        CONFIG_EXTENSIONS
            .iter()
            .map(|ext| config_dir.join(format!("config.{ext}")))
            .find(|path| path.is_file())
    }

    /// Merge a config file into the figment, detecting format from extension.
    fn merge_file(figment: Figment, path: &Utf8Path) -> Figment {
        match path.extension() {
            Some("yaml" | "yml") => figment.merge(Yaml::file_exact(path.as_str())),
            Some("json") => figment.merge(Json::file_exact(path.as_str())),
            _ => figment.merge(Toml::file_exact(path.as_str())),
        }
    }
}

/// Get the user config directory path.
///
/// Returns `~/.config/ptr-readability/` on Linux,
/// `~/Library/Application Support/ptr-readability/` on macOS, and the
/// equivalent elsewhere.
pub fn user_config_dir() -> Option<Utf8PathBuf> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)?;
    Utf8PathBuf::from_path_buf(proj_dirs.config_dir().to_path_buf()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::sync::Mutex;
    use tempfile::TempDir;

    /// Serializes tests that mutate environment variables.
    static TEST_ENV_MUTEX: Mutex<()> = Mutex::new(());

    fn utf8(path: std::path::PathBuf) -> Utf8PathBuf {
        Utf8PathBuf::try_from(path).unwrap()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.word_list.is_none());
        assert_eq!(config.punctuation, PunctuationSet::Standard);
        assert!(config.parallel);
        assert!(config.threads.is_none());
    }

    #[test]
    fn test_loader_builds_with_defaults() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load()
            .unwrap();

        assert_eq!(config, Config::default());
        assert!(sources.primary_file().is_none());
    }

    #[test]
    fn test_single_file_overrides_default() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.toml");
        fs::write(
            &config_path,
            r#"word_list = "/srv/ptr/long-words.txt"
punctuation = "extended"
parallel = false
threads = 4
"#,
        )
        .unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(config_path))
            .load()
            .unwrap();

        assert_eq!(
            config.word_list.as_ref().map(|p| p.as_str()),
            Some("/srv/ptr/long-words.txt")
        );
        assert_eq!(config.punctuation, PunctuationSet::Extended);
        assert!(!config.parallel);
        assert_eq!(config.threads, Some(4));
        assert!(sources.primary_file().is_some());
    }

    #[test]
    fn test_later_file_overrides_earlier() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let base = tmp.path().join("base.toml");
        fs::write(&base, "threads = 2\nparallel = false\n").unwrap();
        let overrides = tmp.path().join("override.yaml");
        fs::write(&overrides, "threads: 8\n").unwrap();

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(base))
            .with_file(utf8(overrides))
            .load()
            .unwrap();

        assert_eq!(config.threads, Some(8));
        assert!(!config.parallel, "unset keys keep earlier values");
    }

    #[test]
    fn test_project_config_discovery() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let project_dir = tmp.path().join("project");
        let sub_dir = project_dir.join("corpora").join("wsj");
        fs::create_dir_all(&sub_dir).unwrap();
        fs::write(
            project_dir.join(".ptr.toml"),
            r#"punctuation = "extended""#,
        )
        .unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(sub_dir))
            .load()
            .unwrap();

        assert_eq!(config.punctuation, PunctuationSet::Extended);
        assert_eq!(sources.project_files.len(), 1);
    }

    #[test]
    fn test_boundary_marker_stops_search() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let parent = tmp.path().join("parent");
        let child = parent.join("child");
        let work = child.join("work");
        fs::create_dir_all(&work).unwrap();

        fs::write(parent.join(".ptr.toml"), "threads = 3\n").unwrap();
        fs::create_dir(child.join(".git")).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_boundary_marker(".git")
            .with_project_search(utf8(work))
            .load()
            .unwrap();

        assert!(config.threads.is_none());
        assert!(sources.project_files.is_empty());
    }

    #[test]
    fn test_explicit_file_overrides_project_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("ptr.toml"), "threads = 2\n").unwrap();
        let explicit = tmp.path().join("run.json");
        fs::write(&explicit, r#"{ "threads": 16 }"#).unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path().to_path_buf()))
            .with_file(utf8(explicit))
            .load()
            .unwrap();

        assert_eq!(config.threads, Some(16));
        assert_eq!(sources.project_files.len(), 1);
        assert!(sources.primary_file().unwrap().as_str().ends_with("run.json"));
    }

    #[test]
    fn ptr_readability_overrides_ptr_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".ptr.toml"), "threads = 1\nparallel = false\n").unwrap();
        fs::write(tmp.path().join("ptr-readability.toml"), "threads = 6\n").unwrap();

        let (config, sources) = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .with_project_search(utf8(tmp.path().to_path_buf()))
            .load()
            .unwrap();

        assert_eq!(config.threads, Some(6));
        assert!(!config.parallel);
        assert_eq!(sources.project_files.len(), 2);
    }

    #[test]
    fn test_load_or_error_fails_when_no_config() {
        let result = ConfigLoader::new()
            .with_user_config(false)
            .without_boundary_marker()
            .load_or_error();

        assert!(matches!(result, Err(ConfigError::NotFound)));
    }

    #[test]
    fn invalid_punctuation_is_rejected() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.toml");
        fs::write(&path, r#"punctuation = "everything""#).unwrap();

        let result = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(path))
            .load();
        assert!(matches!(result, Err(ConfigError::Deserialize(_))));
    }

    #[test]
    #[allow(unsafe_code)]
    fn test_env_var_overrides_file_config() {
        let _lock = TEST_ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "punctuation = \"standard\"\n").unwrap();

        // SAFETY: Test environment; the mutex serializes env access across tests.
        unsafe {
            std::env::set_var("PTR_PUNCTUATION", "extended");
        }

        let (config, _sources) = ConfigLoader::new()
            .with_user_config(false)
            .with_file(utf8(path))
            .load()
            .unwrap();

        // SAFETY: Cleanup after test.
        unsafe {
            std::env::remove_var("PTR_PUNCTUATION");
        }

        assert_eq!(config.punctuation, PunctuationSet::Extended);
    }

    #[test]
    fn config_deserializes_from_yaml() {
        let yaml = r"
word_list: data/long-words.txt
hyphenation_dictionary: data/hyphen.dic
punctuation: extended
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(
            config.hyphenation_dictionary.unwrap().as_str(),
            "data/hyphen.dic"
        );
        assert_eq!(config.punctuation, PunctuationSet::Extended);
        assert!(config.parallel, "omitted fields take defaults");
    }
}

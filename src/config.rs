use crate::error::{FarmPlanError, Result};
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct CatalogConfig {
    /// Plan catalog file (YAML or JSON). The built-in catalog is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn all() -> &'static [OutputFormat] {
        &[OutputFormat::Table, OutputFormat::Json, OutputFormat::Yaml]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default filter directive when neither RUST_LOG nor -v is given
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and defaults are used if nothing is found.
    pub fn load(config_override: Option<&PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(FarmPlanError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.clone()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmPlanError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML after substituting `${VAR}` placeholders from the environment
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        serde_yaml::from_str(&content)
            .map_err(|e| FarmPlanError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Search for config.yaml in standard locations.
    fn find_config_path() -> Option<PathBuf> {
        // Try current directory first
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        // Then the XDG config directory
        let xdg_config = dirs::config_dir()?.join("farmplan").join("config.yaml");
        xdg_config.exists().then_some(xdg_config)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path().is_some(),
        }
    }

    /// Default path for writing new config files (~/.config/farmplan/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmPlanError::Config("Cannot determine config directory".into()))?
            .join("farmplan");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to `target`, or to the
    /// default location when no target is given.
    pub fn setup_interactive(target: Option<&PathBuf>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up farmplan!");
        println!();

        let catalog_path: String = Input::new()
            .with_prompt("  Plan catalog file (leave blank for built-in plans)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(|e| FarmPlanError::Config(format!("Input error: {}", e)))?;

        let formats: Vec<&str> = OutputFormat::all().iter().map(|f| f.as_str()).collect();
        let format_idx = Select::new()
            .with_prompt("  Output format")
            .items(&formats)
            .default(0)
            .interact()
            .map_err(|e| FarmPlanError::Config(format!("Input error: {}", e)))?;

        let log_level: String = Input::new()
            .with_prompt("  Log level")
            .default(default_log_level())
            .interact_text()
            .map_err(|e| FarmPlanError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            catalog: CatalogConfig {
                path: (!catalog_path.trim().is_empty())
                    .then(|| PathBuf::from(catalog_path.trim())),
            },
            output: OutputConfig {
                format: OutputFormat::all()[format_idx],
            },
            logging: LoggingConfig { level: log_level },
        };

        let config_path = match target {
            Some(p) => p.clone(),
            None => Self::default_config_path()?,
        };
        config.save(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn save(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)
            .map_err(|e| FarmPlanError::Config(format!("Failed to serialize config: {}", e)))?;

        // Write with a header comment
        let content = format!(
            "# farmplan configuration\n# Generated by `farmplan init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        // Find all ${VAR_NAME} patterns and substitute
        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| FarmPlanError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

pub mod init;
mod schema;
mod sheet;

pub use schema::{
    ColorMode, Config, MarksInput, SheetCourse, SheetFile, StudentInfo, DEFAULT_DECIMALS,
    MAX_DECIMALS,
};
pub use sheet::{load_sheet, parse_sheet};

use anyhow::{Context, Result};
use atomic_write_file::AtomicWriteFile;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Get the config directory path (~/.config/gpa-calc/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".config").join("gpa-calc"))
}

/// Get the default config file path (~/.config/gpa-calc/config.yaml)
pub fn get_config_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   (~/.config/gpa-calc/config.yaml) and falls back to built-in defaults
///   when that file does not exist.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                anyhow::bail!("Config file not found at {}", p.display());
            }
            p
        }
        None => {
            let p = get_config_path()?;
            if !p.exists() {
                return Ok(Config::default());
            }
            p
        }
    };

    let config_content = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    parse_config(&config_content)
        .with_context(|| format!("Failed to parse config: invalid YAML in {}", config_path.display()))
}

pub fn parse_config(content: &str) -> Result<Config> {
    let config: Config = serde_saphyr::from_str(content)?;
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Some(decimals) = config.decimals {
        if decimals > MAX_DECIMALS {
            errors.push(format!(
                "decimals: {} is more than the maximum of {}",
                decimals, MAX_DECIMALS
            ));
        }
    }

    if let Err(table_errors) = crate::grading::validate_table(
        &crate::grading::BANDED_SCALE,
        config.effective_scale().breakpoints(),
    ) {
        errors.extend(table_errors.into_iter().map(|e| format!("grading table: {}", e)));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Save configuration to a YAML file atomically, creating parent directories.
pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let yaml = serde_saphyr::to_string(config)
        .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write config to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save config to {}", path.display()))?;

    Ok(())
}

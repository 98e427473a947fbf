use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::CONFIG_PATH_ENV;
use crate::error::{OutlineError, Result};
use crate::settings::{self, OutlineConfig, PartialOutlineConfig};

pub fn config_file_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    std::env::var_os(CONFIG_PATH_ENV)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

pub(crate) fn normalize_outline_config(config: OutlineConfig) -> OutlineConfig {
    let max_text_length = settings::normalize_max_text_length(config.max_text_length);

    OutlineConfig {
        max_text_length,
        lookback_window: settings::normalize_lookback_window(
            config.lookback_window,
            max_text_length,
        ),
        ellipsis: settings::normalize_ellipsis(Some(config.ellipsis.as_str())),
        max_depth: settings::normalize_max_depth(config.max_depth),
        format: settings::normalize_format(Some(config.format.as_str())),
    }
}

pub fn parse_config(raw: &str) -> std::result::Result<OutlineConfig, serde_json::Error> {
    if raw.trim().is_empty() {
        return Ok(OutlineConfig::default());
    }

    let partial: PartialOutlineConfig = serde_json::from_str(raw)?;
    Ok(merge_partial_config(OutlineConfig::default(), partial))
}

pub(crate) fn merge_partial_config(
    mut config: OutlineConfig,
    partial: PartialOutlineConfig,
) -> OutlineConfig {
    if let Some(max_text_length) = partial.max_text_length {
        config.max_text_length = max_text_length;
    }

    if let Some(lookback_window) = partial.lookback_window {
        config.lookback_window = lookback_window;
    }

    if let Some(ellipsis) = partial.ellipsis {
        config.ellipsis = ellipsis;
    }

    if let Some(max_depth) = partial.max_depth {
        config.max_depth = max_depth;
    }

    if let Some(format) = partial.format {
        config.format = format;
    }

    normalize_outline_config(config)
}

/// Loads the outline config from `path`. A missing or blank file yields the defaults.
pub fn load_config(path: Option<&Path>) -> Result<OutlineConfig> {
    let Some(path) = path else {
        return Ok(OutlineConfig::default());
    };

    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(OutlineConfig::default());
    }

    let raw = fs::read_to_string(path).map_err(|source| OutlineError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_config(&raw).map_err(|source| OutlineError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), "loaded outline config");
    Ok(config)
}

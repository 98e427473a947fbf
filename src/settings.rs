use crate::constants::{
    DEFAULT_MAX_DEPTH, DEFAULT_OUTPUT_FORMAT, ELLIPSIS, MAX_CONFIGURABLE_TEXT_LENGTH,
    MAX_DEPTH_LIMIT, MAX_TEXT_LENGTH, MIN_DEPTH_LIMIT, MIN_TEXT_LENGTH, TRUNCATION_LOOKBACK,
};
use crate::outline::OutlineOptions;

#[derive(serde::Serialize, serde::Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OutlineConfig {
    pub max_text_length: usize,
    pub lookback_window: usize,
    pub ellipsis: String,
    pub max_depth: usize,
    pub format: String,
}

#[derive(serde::Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct PartialOutlineConfig {
    pub(crate) max_text_length: Option<usize>,
    pub(crate) lookback_window: Option<usize>,
    pub(crate) ellipsis: Option<String>,
    pub(crate) max_depth: Option<usize>,
    pub(crate) format: Option<String>,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_text_length: MAX_TEXT_LENGTH,
            lookback_window: TRUNCATION_LOOKBACK,
            ellipsis: ELLIPSIS.to_string(),
            max_depth: DEFAULT_MAX_DEPTH,
            format: DEFAULT_OUTPUT_FORMAT.to_string(),
        }
    }
}

impl OutlineConfig {
    pub fn outline_options(&self) -> OutlineOptions {
        OutlineOptions {
            max_text_length: self.max_text_length,
            lookback_window: self.lookback_window,
            ellipsis: self.ellipsis.clone(),
            max_depth: self.max_depth,
        }
    }
}

pub(crate) fn normalize_max_text_length(max_text_length: usize) -> usize {
    max_text_length.clamp(MIN_TEXT_LENGTH, MAX_CONFIGURABLE_TEXT_LENGTH)
}

pub(crate) fn normalize_lookback_window(lookback_window: usize, max_text_length: usize) -> usize {
    lookback_window.clamp(1, max_text_length.saturating_sub(1).max(1))
}

pub(crate) fn normalize_ellipsis(ellipsis: Option<&str>) -> String {
    match ellipsis {
        Some(value) if !value.trim().is_empty() => value.to_string(),
        _ => ELLIPSIS.to_string(),
    }
}

pub(crate) fn normalize_max_depth(max_depth: usize) -> usize {
    max_depth.clamp(MIN_DEPTH_LIMIT, MAX_DEPTH_LIMIT)
}

pub(crate) fn normalize_format(format: Option<&str>) -> String {
    match format.map(|value| value.trim().to_lowercase()) {
        Some(value) if value == "json" => "json".to_string(),
        _ => DEFAULT_OUTPUT_FORMAT.to_string(),
    }
}

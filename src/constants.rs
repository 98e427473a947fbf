pub const MAX_TEXT_LENGTH: usize = 50;
pub const TRUNCATION_LOOKBACK: usize = 20;
pub const ELLIPSIS: &str = "\u{2026}";
pub const DEFAULT_ROOT_LABEL: &str = "Untitled";
pub const DEFAULT_MAX_DEPTH: usize = 512;
pub const DEFAULT_OUTPUT_FORMAT: &str = "text";
pub const CONFIG_PATH_ENV: &str = "SOY_OUTLINE_CONFIG";

pub(crate) const MIN_TEXT_LENGTH: usize = TRUNCATION_LOOKBACK + 1;
pub(crate) const MAX_CONFIGURABLE_TEXT_LENGTH: usize = 400;
pub(crate) const MIN_DEPTH_LIMIT: usize = 16;
pub(crate) const MAX_DEPTH_LIMIT: usize = 4096;

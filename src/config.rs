use serde::{Deserialize, Serialize};

use crate::modes::InputMethod;

/// Caller-controlled switches read on every keystroke.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub input_method: InputMethod,
    /// Off: every key is inserted verbatim.
    pub vietnamese_mode: bool,
    /// Place marks on the correct vowel of the whole word and move them as
    /// the word grows. Off: marks apply to the character before the caret.
    pub smart_mark: bool,
    /// Classic tone position for trailing `oa`, `oe`, `uy` (`hòa`, `khỏe`,
    /// `thùy`) instead of the modern one (`hoà`, `khoẻ`, `thuỳ`).
    pub classic_position: bool,
    /// Report when a repeated accent key removed the mark it had just added,
    /// so the host can swallow that key.
    pub repeat_key_removes_mark: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            input_method: InputMethod::Telex,
            vietnamese_mode: true,
            smart_mark: true,
            classic_position: false,
            repeat_key_removes_mark: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from TOML string. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Serialize configuration to TOML string.
    pub fn to_toml_string(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

use serde::{Deserialize, Serialize};

/// The one language label served by the regional (dialect-aware) voice provider.
pub const LOCAL_LANGUAGE_LABEL: &str = "中文";

/// Voice routing class for a request's `language` label.
///
/// Only an exact match on [`LOCAL_LANGUAGE_LABEL`] is `Local`; every other label,
/// including unknown ones like `"French"`, is `NonLocal` and goes through the
/// multilingual provider. This is independent from the prompt template default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceLanguage {
    Local,
    NonLocal,
}

impl VoiceLanguage {
    pub fn from_label(label: &str) -> Self {
        if label == LOCAL_LANGUAGE_LABEL {
            VoiceLanguage::Local
        } else {
            VoiceLanguage::NonLocal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoiceLanguage::Local => "local",
            VoiceLanguage::NonLocal => "non_local",
        }
    }
}

impl std::fmt::Display for VoiceLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

use serde::{Deserialize, Serialize};

pub const DEFAULT_TAG_NAME: &str = "snippet";
pub const DEFAULT_COMMENT_LEADER: &str = "#";
pub const DEFAULT_EXTENSION: &str = "py";

/// Settings shared by the scanner, tokenizer and sanitizer for one run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Name of the one structural tag, e.g. `snippet` for `<snippet name="..">`.
    pub tag_name: String,
    /// Single-line comment leader of the scanned language.
    pub comment_leader: String,
    /// Extension (without the dot) of the files to scan.
    pub extension: String,
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tag_name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = tag_name.into();
        self
    }

    pub fn with_comment_leader(mut self, comment_leader: impl Into<String>) -> Self {
        self.comment_leader = comment_leader.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        let extension: String = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            tag_name: DEFAULT_TAG_NAME.to_string(),
            comment_leader: DEFAULT_COMMENT_LEADER.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }
}

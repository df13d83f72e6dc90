use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::SnippetMap;

/// Writes a snippet map as a JSON object keyed by snippet name.
pub struct JsonFormatter {
    /// Indented output instead of a single line
    pretty: bool,
    /// Source paths are written relative to this directory when set
    root: Option<PathBuf>,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self {
            pretty: true,
            root: None,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn format_to_file(&self, snippets: &SnippetMap, output_path: &Path) -> Result<()> {
        let json_content = self.format(snippets)?;
        fs::write(output_path, json_content)?;
        Ok(())
    }

    pub fn format(&self, snippets: &SnippetMap) -> Result<String> {
        let entries: BTreeMap<&str, SnippetEntry<'_>> = snippets
            .iter()
            .map(|snippet| {
                let entry = SnippetEntry {
                    file: super::display_path(&snippet.source_file, self.root.as_deref()),
                    content: &snippet.content,
                };
                (snippet.name.as_str(), entry)
            })
            .collect();

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&entries)?
        } else {
            serde_json::to_string(&entries)?
        };
        Ok(rendered)
    }
}

/// Output shape of one snippet, keyed by its name in the enclosing object.
#[derive(Debug, Serialize)]
struct SnippetEntry<'a> {
    file: String,
    content: &'a str,
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

use anyhow::Result;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::SnippetMap;

/// Renders every snippet as a Markdown section with a fenced code block.
pub struct MarkdownFormatter {
    /// Info string put on each code fence, e.g. `python`
    language: String,
    root: Option<PathBuf>,
}

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self {
            language: String::new(),
            root: None,
        }
    }

    /// Fence language guessed from a source extension.
    pub fn for_extension(extension: &str) -> Self {
        let language = match extension.trim_start_matches('.') {
            "py" | "pyi" | "pyw" => "python",
            "rs" => "rust",
            "ts" | "tsx" => "typescript",
            "js" | "jsx" | "mjs" => "javascript",
            "sh" | "bash" => "bash",
            "yml" | "yaml" => "yaml",
            "toml" => "toml",
            "sql" => "sql",
            other => other,
        };
        Self::new().with_language(language)
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.root = Some(root.into());
        self
    }

    pub fn format_to_file(&self, snippets: &SnippetMap, output_path: &Path) -> Result<()> {
        let content = self.format(snippets)?;
        fs::write(output_path, content)?;
        Ok(())
    }

    pub fn format(&self, snippets: &SnippetMap) -> Result<String> {
        let mut output = String::new();
        writeln!(output, "# Snippets")?;

        for snippet in snippets.iter() {
            let fence = fence_for(&snippet.content);
            let file = super::display_path(&snippet.source_file, self.root.as_deref());

            writeln!(output)?;
            writeln!(output, "## {}", snippet.name)?;
            writeln!(output)?;
            writeln!(output, "Source: `{}`", file)?;
            writeln!(output)?;
            writeln!(output, "{}{}", fence, self.language)?;
            if !snippet.content.is_empty() {
                writeln!(output, "{}", snippet.content)?;
            }
            writeln!(output, "{}", fence)?;
        }

        Ok(output)
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// A backtick fence longer than any backtick run inside `content`.
fn fence_for(content: &str) -> String {
    let longest = content
        .split(|c: char| c != '`')
        .map(str::len)
        .max()
        .unwrap_or(0);
    "`".repeat(longest.max(2) + 1)
}

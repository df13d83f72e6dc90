pub mod common;
pub mod sanitizer;
pub mod stack;
pub mod tokenizer;

use std::path::Path;

use crate::core::error::SnippetResult;
use crate::core::{ExtractorConfig, RawSnippet, Snippet};

pub use sanitizer::TextSanitizer;
pub use stack::NestingStackMachine;
pub use tokenizer::{TagEvent, TagTokenizer};

/// Per-file pipeline: tokenizer, stack machine, sanitizer.
#[derive(Debug, Clone)]
pub struct SnippetParser {
    tokenizer: TagTokenizer,
    sanitizer: TextSanitizer,
}

impl SnippetParser {
    pub fn new(config: &ExtractorConfig) -> SnippetResult<Self> {
        let tokenizer = TagTokenizer::new(&config.tag_name)?;
        let sanitizer = TextSanitizer::new(tokenizer.clone(), config.comment_leader.clone());
        Ok(Self {
            tokenizer,
            sanitizer,
        })
    }

    /// Named, unsanitized regions of `source` in close order.
    pub fn parse_source(&self, file_path: &Path, source: &str) -> SnippetResult<Vec<RawSnippet>> {
        NestingStackMachine::run(file_path, self.tokenizer.tokenize(source))
    }

    pub fn sanitize(&self, raw: RawSnippet) -> Snippet {
        let content = self.sanitizer.sanitize(&raw.content);
        Snippet::new(raw.name, raw.source_file, content)
    }

    /// Reads `file_path` and returns its sanitized snippets in close order.
    pub fn parse_file(&self, file_path: &Path) -> SnippetResult<Vec<Snippet>> {
        let source = common::read_source(file_path)?;
        let raw = self.parse_source(file_path, &source)?;
        Ok(raw.into_iter().map(|snippet| self.sanitize(snippet)).collect())
    }
}

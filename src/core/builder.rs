use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::Path;

use super::error::SnippetResult;
use super::{ExtractorConfig, FileScanner, Snippet, SnippetMap};
use crate::parsers::SnippetParser;

/// Builds the global snippet table for one run.
pub struct SnippetMapBuilder {
    config: ExtractorConfig,
    file_scanner: FileScanner,
    parser: SnippetParser,
}

impl SnippetMapBuilder {
    pub fn new(config: ExtractorConfig) -> SnippetResult<Self> {
        let parser = SnippetParser::new(&config)?;
        Ok(Self {
            config,
            file_scanner: FileScanner::new(),
            parser,
        })
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extracts the sanitized snippets of a single file.
    pub fn extract_file(&self, file_path: &Path) -> SnippetResult<Vec<Snippet>> {
        self.parser.parse_file(file_path)
    }

    /// Builds the map from `files`, in the given order.
    ///
    /// Files are extracted in parallel but merged sequentially, so the error
    /// reported is always the first one in file order (and close order within
    /// a file).
    pub fn build<P>(&self, files: &[P]) -> SnippetResult<SnippetMap>
    where
        P: AsRef<Path> + Sync,
    {
        let per_file: Vec<SnippetResult<Vec<Snippet>>> = files
            .par_iter()
            .map(|file| self.extract_file(file.as_ref()))
            .collect();

        let mut snippet_map = SnippetMap::new();
        for (file, extracted) in files.iter().zip(per_file) {
            let snippets = extracted?;
            if !snippets.is_empty() {
                tracing::info!(
                    file = %file.as_ref().display(),
                    count = snippets.len(),
                    "collected snippets"
                );
            }
            for snippet in snippets {
                snippet_map.insert(snippet)?;
            }
        }

        Ok(snippet_map)
    }

    /// Scans `root_path` for files with the configured extension and builds
    /// the map from them.
    pub fn collect_from_directory(&self, root_path: &Path) -> Result<SnippetMap> {
        tracing::debug!(root = %root_path.display(), "scanning for snippet sources");
        let files = self
            .file_scanner
            .scan_directory(root_path, &[self.config.extension.as_str()])?;
        tracing::debug!(count = files.len(), "found source files");

        let snippet_map = self
            .build(&files)
            .with_context(|| format!("Failed to collect snippets under {}", root_path.display()))?;
        Ok(snippet_map)
    }
}

use anyhow::Result;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub struct FileScanner;

impl FileScanner {
    pub fn new() -> Self {
        Self
    }

    /// Lists every regular file under `root_path` whose extension is one of
    /// `extensions`, sorted by path.
    pub fn scan_directory(&self, root_path: &Path, extensions: &[&str]) -> Result<Vec<PathBuf>> {
        if !root_path.is_dir() {
            anyhow::bail!("Not a directory: {}", root_path.display());
        }

        let wanted: HashSet<&str> = extensions
            .iter()
            .map(|ext| ext.trim_start_matches('.'))
            .filter(|ext| !ext.is_empty())
            .collect();

        // Collect all entries first for parallel filtering
        let entries: Vec<_> = WalkDir::new(root_path)
            .follow_links(false)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .collect();

        let mut files: Vec<PathBuf> = entries
            .par_iter()
            .filter_map(|entry| {
                let path = entry.path();
                path.extension()
                    .and_then(|ext| ext.to_str())
                    .filter(|ext| wanted.contains(ext))
                    .map(|_| path.to_path_buf())
            })
            .collect();

        files.sort();
        tracing::debug!(
            root = %root_path.display(),
            count = files.len(),
            "scanned directory"
        );

        Ok(files)
    }
}

impl Default for FileScanner {
    fn default() -> Self {
        Self::new()
    }
}

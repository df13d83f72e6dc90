pub mod json;
pub mod markdown;

use std::path::Path;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;

/// Path as written to output, relative to `root` when it lies under it.
fn display_path(path: &Path, root: Option<&Path>) -> String {
    root.and_then(|root| path.strip_prefix(root).ok())
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

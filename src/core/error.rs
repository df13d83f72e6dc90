use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal errors raised while building a snippet map.
///
/// Every variant aborts the whole run; there is no partial map.
#[derive(Debug, Error)]
pub enum SnippetError {
    /// A closing tag appeared while no tag was open.
    #[error("unbalanced closing tag: closing tag found before any opening tag in {}", file.display())]
    UnbalancedCloseTag { file: PathBuf },

    /// The file ended while one or more tags were still open.
    #[error("unclosed tag(s) {} at end of {}", names.join(", "), file.display())]
    UnclosedTag { file: PathBuf, names: Vec<String> },

    /// The same snippet name was completed twice.
    #[error(
        "duplicate snippet name '{name}' in {} (first defined in {})",
        file.display(),
        first_defined_in.display()
    )]
    DuplicateSnippetName {
        name: String,
        file: PathBuf,
        first_defined_in: PathBuf,
    },

    #[error("failed to read {}: {source}", file.display())]
    FileReadFailure {
        file: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configured structural tag name cannot be used as a tag.
    #[error("invalid tag name '{tag}': expected a letter followed by letters, digits, '_' or '-'")]
    InvalidTagName { tag: String },
}

impl SnippetError {
    /// File the error was raised for, when it concerns a single file.
    pub fn file(&self) -> Option<&PathBuf> {
        match self {
            SnippetError::UnbalancedCloseTag { file }
            | SnippetError::UnclosedTag { file, .. }
            | SnippetError::DuplicateSnippetName { file, .. }
            | SnippetError::FileReadFailure { file, .. } => Some(file),
            SnippetError::InvalidTagName { .. } => None,
        }
    }
}

pub type SnippetResult<T> = Result<T, SnippetError>;

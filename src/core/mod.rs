pub mod builder;
pub mod config;
pub mod error;
pub mod scanner;
pub mod snippet;

pub use builder::SnippetMapBuilder;
pub use config::ExtractorConfig;
pub use error::{SnippetError, SnippetResult};
pub use scanner::FileScanner;
pub use snippet::{RawSnippet, Snippet, SnippetMap};

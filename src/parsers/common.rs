use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::Path;

use crate::core::error::{SnippetError, SnippetResult};

/// Reads a whole source file, mapping any I/O failure to a `FileReadFailure`
/// that names the file.
pub fn read_source(file_path: &Path) -> SnippetResult<String> {
    read_buffered(file_path).map_err(|source| SnippetError::FileReadFailure {
        file: file_path.to_path_buf(),
        source,
    })
}

/// Buffered read sized to the file so small files need one allocation.
fn read_buffered(file_path: &Path) -> io::Result<String> {
    let file = File::open(file_path)?;
    let file_size = file.metadata()?.len() as usize;

    let mut reader = BufReader::with_capacity(file_size.clamp(1, 8192), file);

    let mut content = String::with_capacity(file_size);
    reader.read_to_string(&mut content)?;
    Ok(content)
}

use std::path::{Path, PathBuf};

use super::tokenizer::TagEvent;
use crate::core::error::{SnippetError, SnippetResult};
use crate::core::RawSnippet;

/// In-progress snippet between an opening tag and its matching close.
#[derive(Debug, Clone)]
struct Accumulator {
    name: Option<String>,
    source_file: PathBuf,
    content: String,
}

/// Matches opening and closing tags of one file and collects the text each
/// region encloses.
///
/// Text is appended to every open accumulator, not only the innermost one, so
/// a parent region ends up with the full text of its children. The raw markup
/// of a child's own tags is appended to its ancestors only.
pub struct NestingStackMachine {
    source_file: PathBuf,
    stack: Vec<Accumulator>,
    completed: Vec<Accumulator>,
}

impl NestingStackMachine {
    pub fn new(source_file: &Path) -> Self {
        Self {
            source_file: source_file.to_path_buf(),
            stack: Vec::new(),
            completed: Vec::new(),
        }
    }

    /// Runs a whole event stream and returns the named snippets in close order.
    pub fn run<I>(source_file: &Path, events: I) -> SnippetResult<Vec<RawSnippet>>
    where
        I: IntoIterator<Item = TagEvent>,
    {
        let mut machine = Self::new(source_file);
        for event in events {
            machine.feed(event)?;
        }
        machine.finish()
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn feed(&mut self, event: TagEvent) -> SnippetResult<()> {
        match event {
            TagEvent::Open { name, raw, .. } => {
                self.append_to_open(&raw);
                self.stack.push(Accumulator {
                    name,
                    source_file: self.source_file.clone(),
                    content: String::new(),
                });
            }
            TagEvent::Text(text) => self.append_to_open(&text),
            TagEvent::Close { raw } => {
                let accumulator =
                    self.stack
                        .pop()
                        .ok_or_else(|| SnippetError::UnbalancedCloseTag {
                            file: self.source_file.clone(),
                        })?;
                self.completed.push(accumulator);
                self.append_to_open(&raw);
            }
        }
        Ok(())
    }

    /// Ends the stream. Fails if any tag is still open.
    pub fn finish(self) -> SnippetResult<Vec<RawSnippet>> {
        if !self.stack.is_empty() {
            let names = self
                .stack
                .iter()
                .map(|acc| match acc.name.as_deref() {
                    Some(name) if !name.is_empty() => name.to_string(),
                    _ => "<unnamed>".to_string(),
                })
                .collect();
            return Err(SnippetError::UnclosedTag {
                file: self.source_file,
                names,
            });
        }

        Ok(self
            .completed
            .into_iter()
            .filter_map(|region| match region.name {
                Some(name) if !name.is_empty() => Some(RawSnippet::new(
                    name,
                    region.source_file,
                    region.content,
                )),
                _ => None,
            })
            .collect())
    }

    fn append_to_open(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        for accumulator in &mut self.stack {
            accumulator.content.push_str(text);
        }
    }
}

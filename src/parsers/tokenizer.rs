use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

use crate::core::error::{SnippetError, SnippetResult};

/// One structural event in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagEvent {
    /// An opening tag. `raw` is the tag text exactly as written in the file.
    Open {
        name: Option<String>,
        attributes: Vec<(String, String)>,
        raw: String,
    },
    /// A run of text between structural tags, including any inert markup.
    Text(String),
    /// A closing tag. Self-closing tags produce an `Open` followed by a `Close`
    /// with an empty `raw`.
    Close { raw: String },
}

impl TagEvent {
    pub fn is_open(&self) -> bool {
        matches!(self, TagEvent::Open { .. })
    }

    pub fn is_close(&self) -> bool {
        matches!(self, TagEvent::Close { .. })
    }
}

static ATTRIBUTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"([A-Za-z_:][-A-Za-z0-9_:.]*)(?:\s*=\s*(?:"([^"]*)"|'([^']*)'|([^\s"'=<>`/]+)))?"#,
    )
    .expect("attribute pattern is a valid regex")
});

/// Recognizes a single tag vocabulary (`<tag name="..">`, `</tag>`) and hands
/// everything else back as text.
#[derive(Debug, Clone)]
pub struct TagTokenizer {
    tag_pattern: Regex,
    /// Start of an opening or closing tag, whether or not it ends on the line.
    tag_start_pattern: Regex,
}

impl TagTokenizer {
    pub fn new(tag_name: &str) -> SnippetResult<Self> {
        if !is_valid_tag_name(tag_name) {
            return Err(SnippetError::InvalidTagName {
                tag: tag_name.to_string(),
            });
        }

        // Group 1: closing slash. Group 2: attribute section, which must be
        // separated from the name so `<snippets>` is not a match. Quoted values
        // may contain '>'.
        let tag_pattern = Regex::new(&format!(
            r#"(?i)<(/)?{}((?:\s|/)(?:[^>"']|"[^"]*"|'[^']*')*)?>"#,
            regex::escape(tag_name)
        ))
        .map_err(|_| SnippetError::InvalidTagName {
            tag: tag_name.to_string(),
        })?;

        let tag_start_pattern = Regex::new(&format!(
            r"(?i)</?{}(?:[\s/>]|$)",
            regex::escape(tag_name)
        ))
        .map_err(|_| SnippetError::InvalidTagName {
            tag: tag_name.to_string(),
        })?;

        Ok(Self {
            tag_pattern,
            tag_start_pattern,
        })
    }

    /// Splits `source` into tag events in document order.
    pub fn tokenize(&self, source: &str) -> Vec<TagEvent> {
        let mut events = Vec::new();
        let mut cursor = 0;

        for captures in self.tag_pattern.captures_iter(source) {
            let whole = match captures.get(0) {
                Some(m) => m,
                None => continue,
            };

            if whole.start() > cursor {
                events.push(TagEvent::Text(source[cursor..whole.start()].to_string()));
            }
            cursor = whole.end();

            let raw = whole.as_str().to_string();
            if captures.get(1).is_some() {
                events.push(TagEvent::Close { raw });
                continue;
            }

            let attribute_text = captures.get(2).map(|m| m.as_str()).unwrap_or("");
            let self_closing = attribute_text.trim_end().ends_with('/');
            let attributes = self.parse_attributes(attribute_text);
            let name = attributes
                .iter()
                .find(|(key, _)| key == "name")
                .map(|(_, value)| value.clone());

            events.push(TagEvent::Open {
                name,
                attributes,
                raw,
            });
            if self_closing {
                events.push(TagEvent::Close { raw: String::new() });
            }
        }

        if cursor < source.len() {
            events.push(TagEvent::Text(source[cursor..].to_string()));
        }

        events
    }

    /// True when `line` contains an opening or closing form of the tag,
    /// including the first line of a tag that continues on later lines.
    pub fn is_tag_line(&self, line: &str) -> bool {
        self.tag_start_pattern.is_match(line)
    }

    /// Byte ranges of every complete tag in `text`; a range may span lines.
    pub fn tag_spans<'a>(&'a self, text: &'a str) -> impl Iterator<Item = Range<usize>> + 'a {
        self.tag_pattern.find_iter(text).map(|m| m.range())
    }

    fn parse_attributes(&self, attribute_text: &str) -> Vec<(String, String)> {
        ATTRIBUTE_PATTERN
            .captures_iter(attribute_text)
            .filter_map(|captures| {
                let key = captures.get(1)?.as_str().to_ascii_lowercase();
                let value = captures
                    .get(2)
                    .or_else(|| captures.get(3))
                    .or_else(|| captures.get(4))
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default();
                Some((key, value))
            })
            .collect()
    }
}

fn is_valid_tag_name(tag_name: &str) -> bool {
    let mut chars = tag_name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        }
        _ => false,
    }
}

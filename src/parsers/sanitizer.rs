use super::tokenizer::TagTokenizer;

/// Turns raw accumulated region text into publishable snippet content.
///
/// Never fails: steps whose precondition does not hold are no-ops.
#[derive(Debug, Clone)]
pub struct TextSanitizer {
    tokenizer: TagTokenizer,
    comment_leader: String,
}

impl TextSanitizer {
    pub fn new(tokenizer: TagTokenizer, comment_leader: impl Into<String>) -> Self {
        Self {
            tokenizer,
            comment_leader: comment_leader.into(),
        }
    }

    pub fn comment_leader(&self) -> &str {
        &self.comment_leader
    }

    pub fn sanitize(&self, raw: &str) -> String {
        // Line terminator of the opening tag's own line.
        let text = raw
            .strip_prefix("\r\n")
            .or_else(|| raw.strip_prefix('\n'))
            .unwrap_or(raw);

        let indent = leading_spaces(text);

        let mut body = text.trim();
        // Left behind when the closing tag sits after a comment leader.
        if !self.comment_leader.is_empty() {
            if let Some(stripped) = body.strip_suffix(self.comment_leader.as_str()) {
                body = stripped;
            }
        }

        let lines: Vec<&str> = body.lines().map(|line| dedent(line, indent)).collect();
        let tagged = self.tag_lines(&lines);

        let kept: Vec<&str> = lines
            .iter()
            .zip(tagged)
            .filter(|(_, is_tag)| !is_tag)
            .map(|(line, _)| *line)
            .collect();

        kept.join("\n").trim().to_string()
    }

    /// Marks every line that holds part of a structural tag. A tag may span
    /// several lines when its attributes are wrapped.
    fn tag_lines(&self, lines: &[&str]) -> Vec<bool> {
        let mut tagged: Vec<bool> = lines
            .iter()
            .map(|line| self.tokenizer.is_tag_line(line))
            .collect();

        let joined = lines.join("\n");
        let mut line_starts = Vec::with_capacity(lines.len());
        let mut offset = 0;
        for line in lines {
            line_starts.push(offset);
            offset += line.len() + 1;
        }
        let line_of = |pos: usize| line_starts.partition_point(|&start| start <= pos) - 1;

        for span in self.tokenizer.tag_spans(&joined) {
            if span.is_empty() {
                continue;
            }
            for flag in &mut tagged[line_of(span.start)..=line_of(span.end - 1)] {
                *flag = true;
            }
        }

        tagged
    }
}

fn leading_spaces(text: &str) -> &str {
    let width = text.len() - text.trim_start_matches(' ').len();
    &text[..width]
}

fn dedent<'a>(line: &'a str, indent: &str) -> &'a str {
    if indent.is_empty() {
        return line;
    }
    line.strip_prefix(indent).unwrap_or(line)
}

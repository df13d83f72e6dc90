use snipmap::parsers::{TagTokenizer, TextSanitizer};

fn sanitizer() -> TextSanitizer {
    TextSanitizer::new(TagTokenizer::new("snippet").unwrap(), "#")
}

#[test]
fn uniform_indentation_is_removed() {
    assert_eq!(sanitizer().sanitize("    line1\n    line2"), "line1\nline2");
}

#[test]
fn trailing_comment_leader_is_removed() {
    assert_eq!(sanitizer().sanitize("\nvalue = compute()  #"), "value = compute()");
    assert_eq!(sanitizer().sanitize("...code #"), "...code");
}

#[test]
fn indented_block_keeps_relative_indentation() {
    let raw = "\n    def add(a, b):\n        return a + b\n    # ";
    assert_eq!(sanitizer().sanitize(raw), "def add(a, b):\n    return a + b");
}

#[test]
fn nested_tag_lines_are_dropped() {
    let raw = concat!(
        "\nimport os\n",
        "# <snippet name=\"inner\">\n",
        "x = 1\n",
        "# </snippet>\n",
        "y = 2\n# "
    );
    assert_eq!(sanitizer().sanitize(raw), "import os\nx = 1\ny = 2");
}

#[test]
fn lines_without_the_prefix_are_left_alone() {
    assert_eq!(sanitizer().sanitize("\n    a\n  b\n    c"), "a\n  b\nc");
}

#[test]
fn only_one_leading_line_break_is_stripped() {
    // The second break is part of the content and is trimmed, so the
    // indentation of the first content line is not detected.
    assert_eq!(sanitizer().sanitize("\n\n    a\n    b"), "a\n    b");
}

#[test]
fn windows_line_endings_are_handled() {
    assert_eq!(sanitizer().sanitize("\r\n    a\r\n    b\r\n"), "a\nb");
}

#[test]
fn already_sanitized_text_is_unchanged() {
    let sanitizer = sanitizer();
    let clean = "def f():\n    return 1";

    assert_eq!(sanitizer.sanitize(clean), clean);

    let once = sanitizer.sanitize("\n    x = 1\n    if x:\n        y = 2\n    #");
    assert_eq!(sanitizer.sanitize(&once), once);
}

#[test]
fn multi_character_comment_leader() {
    let sanitizer = TextSanitizer::new(TagTokenizer::new("snippet").unwrap(), "//");
    assert_eq!(sanitizer.comment_leader(), "//");
    assert_eq!(sanitizer.sanitize("\n    let x = 1;\n    // "), "let x = 1;");
}

#[test]
fn empty_and_whitespace_input_never_fails() {
    assert_eq!(sanitizer().sanitize(""), "");
    assert_eq!(sanitizer().sanitize("\n   \n  "), "");
    assert_eq!(sanitizer().sanitize("#"), "");
}

#[test]
fn tag_wrapped_over_several_lines_is_dropped_entirely() {
    let raw = concat!(
        "\nimport os\n",
        "# <snippet\n",
        "#     lang=\"py\"\n",
        "#     name=\"inner\">\n",
        "x = 1\n",
        "# </snippet\n",
        "# >\n",
        "y = 2\n# "
    );
    assert_eq!(sanitizer().sanitize(raw), "import os\nx = 1\ny = 2");
}

#[test]
fn dangling_tag_start_line_is_dropped() {
    // The tag never closes inside the text, but its first line is still markup.
    assert_eq!(sanitizer().sanitize("\na = 1\n# <SNIPPET\nb = 2"), "a = 1\nb = 2");
}

use super::*;

// ========================================================================
// Declared type
// ========================================================================

#[test]
fn test_declared_type_wins() {
    let text = "def foo():\n    pass\n";
    assert_eq!(classify(text, Some("markdown")), ContentType::Markdown);
    assert_eq!(classify("plain words", Some("code")), ContentType::Code);
}

#[test]
fn test_declared_type_case_insensitive() {
    assert_eq!(classify("", Some("MarkDown")), ContentType::Markdown);
    assert_eq!(classify("", Some("CODE")), ContentType::Code);
}

#[test]
fn test_declared_aliases() {
    assert_eq!(classify("", Some("transcription")), ContentType::Transcript);
    assert_eq!(classify("", Some("default")), ContentType::Text);
}

#[test]
fn test_unknown_declared_type_uses_heuristics() {
    assert_eq!(classify("# Title\n\nBody", Some("pdf")), ContentType::Markdown);
    assert_eq!(classify("just words", Some("")), ContentType::Text);
}

#[test]
fn test_padded_declared_type_not_recognized() {
    assert_eq!(ContentType::from_name(" code "), None);
    assert_eq!(classify("# Title\n\nBody", Some(" code ")), ContentType::Markdown);
    assert!(" markdown".parse::<ContentType>().is_err());
}

// ========================================================================
// Heuristics
// ========================================================================

#[test]
fn test_detect_code_keywords() {
    let cases = [
        "def handler(event):\n    return event",
        "class Foo:\n    pass",
        "function go() {}",
        "import os\nprint(os.getcwd())",
        "const x = 1;\nexport default x",
    ];

    for text in cases {
        assert_eq!(classify(text, None), ContentType::Code, "Failed for {:?}", text);
    }
}

#[test]
fn test_code_keyword_must_start_line() {
    assert_eq!(
        classify("we need to define a class of problems", None),
        ContentType::Text
    );
    assert_eq!(classify("    def indented():", None), ContentType::Text);
}

#[test]
fn test_code_keyword_case_sensitive() {
    assert_eq!(classify("Import duties rose sharply.", None), ContentType::Text);
}

#[test]
fn test_detect_markdown_heading() {
    assert_eq!(classify("intro\n## Setup\nsteps", None), ContentType::Markdown);
    assert_eq!(classify("###### Deep", None), ContentType::Markdown);
}

#[test]
fn test_seven_hashes_not_heading() {
    assert_eq!(classify("####### nope", None), ContentType::Text);
    assert_eq!(classify("#hashtag", None), ContentType::Text);
}

#[test]
fn test_detect_transcript_markers() {
    assert_eq!(
        classify("[00:01:15] Welcome back to the show", None),
        ContentType::Transcript
    );
    assert_eq!(
        classify("and then Speaker 2: said hello", None),
        ContentType::Transcript
    );
}

#[test]
fn test_default_is_text() {
    assert_eq!(classify("Nothing structural here at all.", None), ContentType::Text);
    assert_eq!(classify("", None), ContentType::Text);
}

#[test]
fn test_code_beats_markdown() {
    let text = "# Heading\n\ndef run():\n    pass\n";
    assert_eq!(classify(text, None), ContentType::Code);
}

#[test]
fn test_markdown_beats_transcript() {
    let text = "## Episode 4\n[00:00:01] Host: hi";
    assert_eq!(classify(text, None), ContentType::Markdown);
}

// ========================================================================
// ContentType
// ========================================================================

#[test]
fn test_content_type_names_roundtrip() {
    for content_type in ContentType::ALL {
        assert_eq!(content_type.as_str().parse::<ContentType>(), Ok(content_type));
    }
}

#[test]
fn test_content_type_parse_unknown() {
    let err = "yaml".parse::<ContentType>().unwrap_err();
    assert_eq!(err.to_string(), "unknown content type: yaml");
}

#[test]
fn test_content_type_serializes_lowercase() {
    let json = serde_json::to_string(&ContentType::Transcript).unwrap();
    assert_eq!(json, "\"transcript\"");
}

use serde_json::json;
use smart_chunker::{ChunkResponse, ChunkSuccess, Chunker, ContentType, respond};

fn run(input: serde_json::Value) -> ChunkResponse {
    respond(&input.to_string(), &Chunker::new(), None)
}

fn expect_success(response: ChunkResponse) -> ChunkSuccess {
    match response {
        ChunkResponse::Success(success) => success,
        ChunkResponse::Failure(failure) => panic!("unexpected failure: {}", failure.error),
    }
}

#[test]
fn unbroken_text_single_window() {
    let content = "a".repeat(600);
    let success = expect_success(run(json!({ "content": content })));

    assert_eq!(success.content_type, ContentType::Text);
    assert_eq!(success.chunk_count, 1);
    assert_eq!(success.total_chars, 600);
    assert_eq!(success.chunks[0].text, content);
    assert_eq!(success.chunks[0].start_pos, Some(0));
    assert_eq!(success.chunks[0].end_pos, Some(600));
}

#[test]
fn markdown_sections_split_at_heading() {
    let paragraph = "Markdown body text keeps going for a while here. ".repeat(36);
    let first = format!("## Installation\n\n{}\n\n", paragraph.trim_end());
    let content = format!("{}## Usage\n\n{}", first, paragraph);
    assert!(content.len() > 2000);

    let success = expect_success(run(json!({ "content": content })));
    let split = first.chars().count();

    assert_eq!(success.content_type, ContentType::Markdown);
    assert!(success.chunk_count >= 2);
    assert_eq!(success.chunks[0].end_pos, Some(split));
    assert!(success.chunks[0].text.starts_with("## Installation"));
    assert!(success.chunks[1].text.contains("## Usage"));
}

#[test]
fn declared_code_without_syntax_degrades() {
    let content = "Plain prose that has been declared as code. ".repeat(80);
    let success = expect_success(run(json!({
        "content": content,
        "content_type": "code",
        "metadata": {"path": "notes.txt"}
    })));

    assert_eq!(success.content_type, ContentType::Code);
    assert!(success.chunk_count >= 2);
    for chunk in &success.chunks {
        assert!(chunk.text.ends_with('.'), "chunk {} cut mid-sentence", chunk.index);
        assert_eq!(chunk.total, success.chunk_count);
        assert_eq!(chunk.metadata["path"], "notes.txt");
    }
}

#[test]
fn empty_content_fails() {
    for content in ["", "    \n  "] {
        let response = run(json!({ "content": content }));
        assert!(!response.is_success());
        assert!(response.chunks().is_empty());

        let value: serde_json::Value =
            serde_json::from_str(&response.to_json(false).unwrap()).unwrap();
        assert_eq!(value["success"], false);
        assert!(!value["error"].as_str().unwrap().is_empty());
    }
}

#[test]
fn transcript_detected_and_sized() {
    let content: String = (0..60)
        .map(|i| format!("[00:00:{:02}] Speaker {}: We talked about the roadmap again today.\n", i, i % 2 + 1))
        .collect();
    let success = expect_success(run(json!({ "content": content })));

    assert_eq!(success.content_type, ContentType::Transcript);
    assert!(success.chunk_count >= 2);
    for chunk in &success.chunks[..success.chunk_count - 1] {
        assert!(chunk.char_count <= 3000);
        let end = chunk.end_pos.unwrap();
        assert!(content[end..].starts_with("[00:"), "cut inside a turn at {}", end);
    }
}

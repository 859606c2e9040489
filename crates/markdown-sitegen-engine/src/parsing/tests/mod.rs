//! Integration tests for the parsing module.
//!
//! Fixtures (`.md`) and their expected rendering (`.html`) are co-located in
//! `fixtures/`.

use pretty_assertions::assert_eq;

use crate::error::Error;
use crate::parsing::{extract_title, parse_document, parse_document_with};
use markdown_sitegen_config::MarkupConfig;

// Fixture-based tests

#[test]
fn fixture_tolkien_page() {
    assert_fixture("tolkien_page");
}

#[test]
fn fixture_raw_zones() {
    assert_fixture("raw_zones");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.html")).unwrap();

    let html = parse_document(&md).unwrap().render().unwrap();
    assert_eq!(html, expected.trim_end());
}

// Assembler tests

#[test]
fn title_and_body() {
    let md = "# Title\n\nSome **bold** text.";

    assert_eq!(extract_title(md).unwrap(), "Title");
    assert_eq!(
        parse_document(md).unwrap().render().unwrap(),
        "<div><h1>Title</h1><p>Some <b>bold</b> text.</p></div>"
    );
}

#[test]
fn title_is_first_level_one_heading() {
    let md = "## Not this\n\nIntro\n\n#   The Title  \n\n# Second";
    assert_eq!(extract_title(md).unwrap(), "The Title");
}

#[test]
fn title_inside_code_fence_is_ignored() {
    let md = "```\n# Not a title\n```\n\n# Real";
    assert_eq!(extract_title(md).unwrap(), "Real");
}

#[test]
fn missing_title() {
    assert_eq!(extract_title("## Only h2\n\ntext"), Err(Error::NoTitle));
    assert_eq!(extract_title(""), Err(Error::NoTitle));
}

#[test]
fn root_tag_comes_from_markup() {
    let markup = MarkupConfig {
        root_tag: "article".to_string(),
        ..MarkupConfig::default()
    };
    let node = parse_document_with("hi", &markup).unwrap();
    assert_eq!(node.render().unwrap(), "<article><p>hi</p></article>");
}

#[test]
fn empty_document_has_no_blocks() {
    let node = parse_document("\n\n\n").unwrap();
    assert!(node.children().is_empty());
    assert!(matches!(node.render(), Err(Error::Structural(_))));
}

#[test]
fn inline_error_fails_whole_document() {
    let md = "# Fine\n\nBroken *emphasis";
    assert_eq!(
        parse_document(md),
        Err(Error::UnmatchedDelimiter {
            delimiter: "*".to_string(),
            text: "Broken *emphasis".to_string(),
        })
    );
}

#[test]
fn render_is_deterministic() {
    let node = parse_document("# A\n\n> b\n> c\n\n- d").unwrap();
    assert_eq!(node.render().unwrap(), node.render().unwrap());
}

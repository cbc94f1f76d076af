//! Diagnostics rendered from real pipeline errors

use ratc::frontend::core::source::SourceStream;
use ratc::util::diagnostic::{Diagnostic, EmitterConfig, TextEmitter};
use ratc::Compiler;
use std::fs;
use tempfile::TempDir;

fn plain_emitter() -> TextEmitter {
    TextEmitter::with_config(EmitterConfig {
        use_colors: false,
        ..Default::default()
    })
}

#[test]
fn test_lex_error_snippet_from_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("lex.rat");
    fs::write(&path, "let a = 1\n\nlet s = \"open\n").unwrap();

    let err = Compiler::new().parse_file(&path).unwrap_err();
    let diagnostic = Diagnostic::from(&err);
    let mut source = SourceStream::open(&path).unwrap();
    let output = plain_emitter().render(&diagnostic, &mut source);

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("error: lexer error: unterminated string literal"));
    assert!(lines[1].ends_with("lex.rat:3:9"));
    assert_eq!(lines[3], "3 | let s = \"open");
    assert_eq!(lines[4], "  |         ^");
}

#[test]
fn test_out_of_tokens_points_after_last_token() {
    let text = "fn f() {\n  ret 1\n";
    let err = Compiler::new().parse_source("f.rat", text).unwrap_err();
    let diagnostic = Diagnostic::from(&err);
    let mut source = SourceStream::from_source("f.rat", text);
    let output = plain_emitter().render(&diagnostic, &mut source);
    assert!(output.contains("expected '}'"), "{}", output);
    assert!(output.contains("f.rat:2:8"), "{}", output);
}

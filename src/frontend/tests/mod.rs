//! Compiler pipeline tests

use crate::frontend::core::lexer::LexError;
use crate::frontend::core::parser::{ParseError, Stmt};
use crate::frontend::core::source::SourceError;
use crate::frontend::{CompileError, Compiler};
use crate::util::span::Position;
use std::io::Write;
use std::path::Path;

#[test]
fn test_parse_source() {
    let program = Compiler::new()
        .parse_source("inline.rat", "let x = 1\nfn_ main() {\n  f(x)\n}")
        .unwrap();
    assert_eq!(program.len(), 2);
    assert!(matches!(program[1], Stmt::FunctionDecl(_)));
}

#[test]
fn test_lex_error_is_wrapped() {
    let err = Compiler::new().parse_source("bad.rat", "let x = \"open").unwrap_err();
    assert!(matches!(err, CompileError::Lex(LexError::UnterminatedString { .. })));
    assert_eq!(err.stage(), "lexer");
    assert_eq!(err.position(), Some(Position::new(1, 9)));
}

#[test]
fn test_parse_error_is_wrapped() {
    let err = Compiler::new().parse_source("bad.rat", "let x =").unwrap_err();
    assert!(matches!(err, CompileError::Parse(ParseError::OutOfTokens { .. })));
    assert_eq!(err.stage(), "parser");
    assert_eq!(err.to_string(), "out of tokens after 1:7, expected an expression");
}

#[test]
fn test_wrong_extension() {
    let err = Compiler::new()
        .tokenize_file(Path::new("program.txt"))
        .unwrap_err();
    assert!(matches!(err, CompileError::Source(SourceError::InvalidExtension { .. })));
    assert_eq!(err.stage(), "source");
    assert_eq!(err.position(), None);
}

#[test]
fn test_parse_file() {
    let mut file = tempfile::Builder::new().suffix(".rat").tempfile().unwrap();
    writeln!(file, "int total = 0").unwrap();
    writeln!(file, "if total > 1 {{ ret total }} else {{ rev }}").unwrap();

    let compiler = Compiler::new();
    let tokens = compiler.tokenize_file(file.path()).unwrap();
    assert!(!tokens.is_empty());
    let program = compiler.parse_file(file.path()).unwrap();
    assert_eq!(program.len(), 2);
}

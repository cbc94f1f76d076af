//! Integration tests for the library pipeline: file → tokens → AST

use ratc::frontend::core::parser::{ConditionalStatement, Expr, Stmt};
use ratc::{compile_file, CompileError, Compiler, TokenKind};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper function to create a test file
fn create_test_file(
    dir: &TempDir,
    name: &str,
    content: &str,
) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

const FIBONACCI: &str = r#"// naive fibonacci
fn fib(n) -> int {
    if n <= 1 {
        ret n
    } else {
        ret fib(n - 1) + fib(n - 2)
    }
}

fn_ main() {
    int limit = 10
    let label: string = "fib"
    op result
    print(label, fib(limit))
}
"#;

#[test]
fn test_compile_program() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "fib.rat", FIBONACCI);

    let program = compile_file(&file).unwrap();
    assert_eq!(program.len(), 2);

    let Stmt::FunctionDecl(fib) = &program[0] else {
        panic!("expected fib declaration");
    };
    assert_eq!(fib.name, "fib");
    assert_eq!(fib.params.len(), 1);
    let Stmt::Conditional(cond) = &fib.body[0] else {
        panic!("expected conditional");
    };
    let links: Vec<&ConditionalStatement> = cond.chain().collect();
    assert_eq!(links.len(), 2);
    let Stmt::Return(ret) = &links[1].body[0] else {
        panic!("expected return");
    };
    assert_eq!(
        ret.value.as_ref().map(Expr::to_string),
        Some("(+ (fib (- n 1)) (fib (- n 2)))".to_string())
    );

    let Stmt::FunctionDecl(main) = &program[1] else {
        panic!("expected main declaration");
    };
    assert_eq!(main.body.len(), 4);
    assert!(matches!(&main.body[3], Stmt::Expression(_)));
}

#[test]
fn test_tokens_in_source_order() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "fib.rat", FIBONACCI);

    let tokens = Compiler::new().tokenize_file(&file).unwrap();
    assert_eq!(tokens[0].kind, TokenKind::CommentSeparator);
    assert_eq!(tokens[1].lexeme, " naive fibonacci");
    for pair in tokens.windows(2) {
        assert!(pair[0].position < pair[1].position, "{} !< {}", pair[0], pair[1]);
        assert!(!(pair[0].is_terminator() && pair[1].is_terminator()));
    }
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let err = compile_file(&temp_dir.path().join("absent.rat")).unwrap_err();
    assert!(matches!(err, CompileError::Source(_)));
}

#[test]
fn test_wrong_extension_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "program.txt", "let x = 1");
    let err = compile_file(&file).unwrap_err();
    assert_eq!(err.stage(), "source");
}

#[test]
fn test_error_position_survives_pipeline() {
    let temp_dir = TempDir::new().unwrap();
    let file = create_test_file(&temp_dir, "bad.rat", "let ok = 1\nlet bad = 'xy'\n");
    let err = compile_file(&file).unwrap_err();
    assert_eq!(err.stage(), "lexer");
    let position = err.position().unwrap();
    assert_eq!((position.line, position.column), (2, 11));
}

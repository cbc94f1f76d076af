//! Literal scanning and lexeme validation
//! Handles numeric-lexeme validation, string and char literal scanning

use super::symbols::{is_escape_char, Symbol};
use super::tokenizer::Lexer;
use crate::frontend::core::lexer::tokens::*;
use once_cell::sync::Lazy;
use regex::Regex;

/// Digits, then either a float tail (`.`, fraction, `f`/`d`) or an integer
/// tail (`u` and/or one of `i c l s`).
static NUMERIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)((\.)?([0-9]*)?(d|f)?|(u)?[icls]?)$").expect("valid numeric pattern")
});

/// Check if character can continue an identifier
pub fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// Check if character can start an identifier
pub fn is_identifier_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

/// Characters accepted inside a string literal body
pub fn is_string_char(c: char) -> bool {
    !c.is_control() || c.is_whitespace()
}

/// Characters accepted inside a char literal
pub fn is_char_literal_char(c: char) -> bool {
    !c.is_control()
}

/// Validate a numeric lexeme.
///
/// Unsigned and floating markers are mutually exclusive: `12.5u` and
/// `123uf` are rejected even where the pattern alone would be ambiguous.
pub fn is_numeric_sequence(lexeme: &str) -> bool {
    if !NUMERIC_PATTERN.is_match(lexeme) {
        return false;
    }
    let is_unsigned = lexeme.contains('u');
    let is_float = lexeme.contains('f') || lexeme.contains('d') || lexeme.contains('.');
    !(is_unsigned && is_float)
}

/// Validate an identifier lexeme; it may not start with a digit
pub fn is_identifier_sequence(lexeme: &str) -> bool {
    let mut chars = lexeme.chars();
    match chars.next() {
        Some(first) if is_identifier_start(first) => chars.all(is_identifier_char),
        _ => false,
    }
}

/// Numeric type implied by a validated literal's suffix
pub fn numeric_type(lexeme: &str) -> Symbol {
    let unsigned = lexeme.contains('u');
    match lexeme.chars().last() {
        Some('f') => Symbol::TypeFloat,
        Some('d') => Symbol::TypeDouble,
        _ if lexeme.contains('.') => Symbol::TypeDouble,
        Some('l') if unsigned => Symbol::TypeUlong,
        Some('l') => Symbol::TypeLong,
        Some('s') if unsigned => Symbol::TypeUshort,
        Some('s') => Symbol::TypeShort,
        Some('c') if unsigned => Symbol::TypeUchar,
        Some('c') => Symbol::TypeChar,
        _ if unsigned => Symbol::TypeUint,
        _ => Symbol::TypeInt,
    }
}

/// Scan a string literal; the opening quote is the next character.
///
/// The emitted lexeme keeps both quotes. A backslash takes the following
/// character verbatim, so `\"` does not close the literal.
pub fn scan_string(lexer: &mut Lexer) -> Result<(), LexError> {
    let start = lexer.source().position();
    let mut lexeme = String::new();
    if let Some(open) = lexer.source_mut().read_char() {
        lexeme.push(open);
    }

    loop {
        let at = lexer.source().position();
        match lexer.source_mut().read_char() {
            None | Some('\n') => return Err(LexError::UnterminatedString { position: start }),
            Some('"') => {
                lexeme.push('"');
                break;
            }
            Some('\\') => {
                lexeme.push('\\');
                let escaped_at = lexer.source().position();
                match lexer.source_mut().read_char() {
                    None | Some('\n') => {
                        return Err(LexError::UnterminatedString { position: start })
                    }
                    Some(c) if is_string_char(c) => lexeme.push(c),
                    Some(c) => {
                        return Err(LexError::InvalidStringChar {
                            ch: c,
                            position: escaped_at,
                        })
                    }
                }
            }
            Some(c) if is_string_char(c) => lexeme.push(c),
            Some(c) => return Err(LexError::InvalidStringChar { ch: c, position: at }),
        }
    }

    lexer.push(TokenKind::StringLiteral, lexeme, start);
    Ok(())
}

/// Scan a char literal; the opening quote is the next character.
///
/// A quote right after the closing quote is swallowed too, which lets
/// `'\''` through as a four-character lexeme.
pub fn scan_char(lexer: &mut Lexer) -> Result<(), LexError> {
    let start = lexer.source().position();
    let mut lexeme = String::new();
    if let Some(open) = lexer.source_mut().read_char() {
        lexeme.push(open);
    }

    loop {
        match lexer.source_mut().read_char() {
            None => return Err(LexError::UnterminatedChar { position: start }),
            Some('\'') => {
                lexeme.push('\'');
                if lexer.source().peek_char() == Some('\'') {
                    lexer.source_mut().read_char();
                    lexeme.push('\'');
                }
                break;
            }
            Some(c) if is_char_literal_char(c) => lexeme.push(c),
            Some(c) => {
                lexeme.push(c);
                return Err(LexError::InvalidCharLiteral {
                    lexeme,
                    position: start,
                });
            }
        }
    }

    if !is_valid_char_literal(&lexeme) {
        return Err(LexError::InvalidCharLiteral {
            lexeme,
            position: start,
        });
    }

    lexer.push(TokenKind::CharLiteral, lexeme, start);
    Ok(())
}

/// `'x'` with `x` not a backslash, or `'\e'` with `e` a known escape
pub fn is_valid_char_literal(lexeme: &str) -> bool {
    let chars: Vec<char> = lexeme.chars().collect();
    match chars.as_slice() {
        ['\'', c, '\''] => *c != '\\',
        ['\'', '\\', e, '\''] => is_escape_char(*e),
        _ => false,
    }
}

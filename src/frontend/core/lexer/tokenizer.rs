//! Tokenizer implementation
//! Main lexer structure and maximal-munch token generation

use super::literals::{
    is_identifier_char, is_identifier_sequence, is_numeric_sequence, scan_char, scan_string,
};
use super::symbols::{
    is_comment_separator, is_keyword, is_operator, is_punctuator, is_table_entry, is_type,
    STATEMENT_TERMINATOR,
};
use crate::frontend::core::lexer::tokens::*;
use crate::frontend::core::source::SourceStream;
use crate::util::span::Position;

/// Main lexer structure
///
/// Owns the source stream and the token sequence built so far. Each call to
/// [`Lexer::advance_token`] appends at most one token.
pub struct Lexer {
    source: SourceStream,
    tokens: Vec<Token>,
}

impl Lexer {
    /// Create a new lexer over the given stream
    pub fn new(source: SourceStream) -> Self {
        Self {
            source,
            tokens: Vec::new(),
        }
    }

    /// Underlying stream
    pub fn source(&self) -> &SourceStream {
        &self.source
    }

    pub(crate) fn source_mut(&mut self) -> &mut SourceStream {
        &mut self.source
    }

    /// Tokens produced so far
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Hand back the tokens and the stream (for diagnostics)
    pub fn into_parts(self) -> (Vec<Token>, SourceStream) {
        (self.tokens, self.source)
    }

    /// Append a token. A terminator directly after another terminator is
    /// dropped, so blank lines never yield empty statements.
    pub fn push(
        &mut self,
        kind: TokenKind,
        lexeme: impl Into<String>,
        position: Position,
    ) {
        if kind == TokenKind::StatementTerminator
            && self.tokens.last().is_some_and(Token::is_terminator)
        {
            return;
        }
        let token = Token::new(kind, lexeme, position);
        tracing::trace!("{}", token);
        self.tokens.push(token);
    }

    /// Run until input is exhausted
    pub fn run(&mut self) -> Result<(), LexError> {
        while self.advance_token()? {}
        Ok(())
    }

    /// Lex the next token. Returns `Ok(false)` once input is exhausted.
    pub fn advance_token(&mut self) -> Result<bool, LexError> {
        let before = self.source.position();
        if self.source.advance_whitespace() {
            self.push(
                TokenKind::StatementTerminator,
                STATEMENT_TERMINATOR.to_string(),
                before,
            );
            return Ok(true);
        }

        let Some(ch) = self.source.peek_char() else {
            return Ok(false);
        };
        let start = self.source.position();

        match ch {
            '"' => scan_string(self)?,
            '\'' => scan_char(self)?,
            STATEMENT_TERMINATOR => {
                self.source.read_char();
                self.push(TokenKind::StatementTerminator, ch.to_string(), start);
            }
            c if is_punctuator(c) => {
                self.source.read_char();
                self.push(TokenKind::Punctuator, c.to_string(), start);
            }
            _ => self.scan_candidate(start)?,
        }
        Ok(true)
    }

    /// Accumulate a candidate lexeme with one character of lookahead.
    fn scan_candidate(
        &mut self,
        start: Position,
    ) -> Result<(), LexError> {
        let mut candidate = String::new();
        // Set when the lookahead is known to extend the candidate into a
        // longer table entry; the next character is then never a boundary.
        let mut extending = false;

        while let Some(ch) = self.source.read_char() {
            if !candidate.is_empty() && !extending && is_boundary(&candidate, ch) {
                self.source.reverse()?;
                break;
            }
            candidate.push(ch);
            extending = false;

            let Some(kind) = table_kind(&candidate) else {
                continue;
            };
            let lookahead = self.source.peek_char();
            let extends = lookahead.is_some_and(|next| {
                let mut longer = candidate.clone();
                longer.push(next);
                is_table_entry(&longer)
            });
            if extends {
                extending = true;
                continue;
            }
            let word_continues = matches!(kind, TokenKind::Keyword | TokenKind::Type)
                && lookahead.is_some_and(is_identifier_char);
            if word_continues {
                continue;
            }

            self.push(kind, candidate, start);
            if kind == TokenKind::CommentSeparator {
                self.scan_comment_body();
            }
            return Ok(());
        }

        let kind = classify(&candidate, start)?;
        self.push(kind, candidate, start);
        Ok(())
    }

    /// Rest of the physical line after `//`, newline excluded
    fn scan_comment_body(&mut self) {
        let start = self.source.position();
        let mut body = String::new();
        while let Some(ch) = self.source.peek_char() {
            if ch == '\n' {
                break;
            }
            self.source.read_char();
            body.push(ch);
        }
        if body.ends_with('\r') {
            body.pop();
        }
        self.push(TokenKind::CommentBody, body, start);
    }
}

/// Table lookup in priority order: keyword, type, comment marker, operator
fn table_kind(candidate: &str) -> Option<TokenKind> {
    if is_keyword(candidate) {
        Some(TokenKind::Keyword)
    } else if is_type(candidate) {
        Some(TokenKind::Type)
    } else if is_comment_separator(candidate) {
        Some(TokenKind::CommentSeparator)
    } else if is_operator(candidate) {
        Some(TokenKind::Operator)
    } else {
        None
    }
}

/// Whether `ch` ends the candidate instead of joining it
fn is_boundary(
    candidate: &str,
    ch: char,
) -> bool {
    if ch.is_whitespace() || is_punctuator(ch) || ch == STATEMENT_TERMINATOR {
        return true;
    }
    let is_word = candidate.starts_with(is_identifier_char);
    if is_word {
        !(is_identifier_char(ch) || ch == '.')
    } else {
        is_identifier_char(ch)
    }
}

/// Classify a finished candidate that matched no table
fn classify(
    candidate: &str,
    start: Position,
) -> Result<TokenKind, LexError> {
    match (is_numeric_sequence(candidate), is_identifier_sequence(candidate)) {
        (true, true) => Err(LexError::AmbiguousToken {
            lexeme: candidate.to_string(),
            position: start,
        }),
        (true, false) => Ok(TokenKind::NumericLiteral),
        (false, true) => Ok(TokenKind::Identifier),
        (false, false) => Err(LexError::UnrecognizedToken {
            lexeme: candidate.to_string(),
            position: start,
        }),
    }
}

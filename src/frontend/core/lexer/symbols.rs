//! Classifier tables
//!
//! Fixed string tables for keywords, types, punctuators and operators, and a
//! bidirectional lexeme ↔ [`Symbol`] table covering the full constituent
//! symbol space. All tables are built once per process and never mutated.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

/// Keywords
pub const KEYWORDS: &[&str] = &[
    "let", "op", "if", "else", "fn", "fn_", "fn?", "fn/", "null", "ret", "rev",
];

/// Built-in type names
pub const TYPES: &[&str] = &[
    "int", "float", "double", "bool", "char", "long", "short", "pointer", "uint", "ulong",
    "ushort", "uchar", "string", "void",
];

/// Operators
pub const OPERATORS: &[&str] = &[
    "=", "+", "-", "*", "/", "%", "==", "!=", "<", ">", "<=", ">=", "&&", "||", "!", "&", "|",
    "^", "~", "<<", ">>", "->", "=>",
];

/// Single-character punctuators
pub const PUNCTUATORS: &[char] = &[':', '\'', '"', '[', ']', '{', '}', '(', ')', ','];

/// Characters allowed after a backslash in a char literal
pub const ESCAPE_CHARS: &[char] = &['n', 't', 'r', 'b', 'f', 'v', 'a', '\\', '?', '\'', '"', '0'];

/// Line comment marker
pub const COMMENT_SEPARATOR: &str = "//";

/// Explicit statement terminator; newlines produce the same token
pub const STATEMENT_TERMINATOR: char = ';';

static KEYWORD_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| KEYWORDS.iter().copied().collect());
static TYPE_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| TYPES.iter().copied().collect());
static OPERATOR_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| OPERATORS.iter().copied().collect());

/// Whether `s` is a keyword
pub fn is_keyword(s: &str) -> bool {
    KEYWORD_SET.contains(s)
}

/// Whether `s` is a built-in type name
pub fn is_type(s: &str) -> bool {
    TYPE_SET.contains(s)
}

/// Whether `s` is an operator
pub fn is_operator(s: &str) -> bool {
    OPERATOR_SET.contains(s)
}

/// Whether `s` is the line comment marker
pub fn is_comment_separator(s: &str) -> bool {
    s == COMMENT_SEPARATOR
}

/// Whether `c` is a punctuator
pub fn is_punctuator(c: char) -> bool {
    PUNCTUATORS.contains(&c)
}

/// Whether `c` may follow a backslash in a char literal
pub fn is_escape_char(c: char) -> bool {
    ESCAPE_CHARS.contains(&c)
}

/// Whether `s` is an entry of any lexer table
pub fn is_table_entry(s: &str) -> bool {
    is_keyword(s) || is_type(s) || is_comment_separator(s) || is_operator(s)
}

/// Constituent symbol
///
/// The full symbol space of the language. Symbols with a surface spelling
/// are in the bidirectional table; `VariableId` and `FunctionId` only ever
/// tag AST nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    // Identifiers
    VariableId,
    FunctionId,

    // Types
    TypeInt,
    TypeFloat,
    TypeDouble,
    TypeBool,
    TypeChar,
    TypeLong,
    TypeShort,
    TypePointer,
    TypeUint,
    TypeUlong,
    TypeUshort,
    TypeUchar,
    TypeString,
    TypeVoid,

    NullLiteral,

    // Keywords
    VariableDeclarationLet,
    VariableDeclarationOp,
    FunctionDeclarationF,
    FunctionDeclarationFVoid,
    FunctionDeclarationFOptional,
    FunctionDeclarationFLambda,
    FunctionReturn,
    FunctionReturnVoid,
    ConditionalIf,
    ConditionalElse,
    ConditionalElseIf,
    PatternMatch,

    // Punctuators
    Colon,
    SingleQuote,
    DoubleQuote,
    Comma,
    BracketOpen,
    BracketClose,
    BraceOpen,
    BraceClose,
    ParenthesesOpen,
    ParenthesesClose,
    CommentLine,
    CommentBlockOpen,
    CommentBlockClose,
    Newline,

    // Operators
    Assignment,
    ArithmeticAdd,
    ArithmeticSub,
    ArithmeticMul,
    ArithmeticDiv,
    ArithmeticMod,
    ComparisonEq,
    ComparisonNeq,
    ComparisonLt,
    ComparisonGt,
    ComparisonLte,
    ComparisonGte,
    LogicalAnd,
    LogicalOr,
    LogicalNot,
    BitwiseAnd,
    BitwiseOr,
    BitwiseXor,
    BitwiseNeg,
    BitwiseSl,
    BitwiseSr,
    Arrow,
    FatArrow,
}

impl Symbol {
    /// Surface spelling, if the symbol has one
    pub fn lexeme(self) -> Option<&'static str> {
        lexeme_of(self)
    }

    /// Whether the symbol names a built-in type
    pub fn is_type(self) -> bool {
        matches!(
            self,
            Symbol::TypeInt
                | Symbol::TypeFloat
                | Symbol::TypeDouble
                | Symbol::TypeBool
                | Symbol::TypeChar
                | Symbol::TypeLong
                | Symbol::TypeShort
                | Symbol::TypePointer
                | Symbol::TypeUint
                | Symbol::TypeUlong
                | Symbol::TypeUshort
                | Symbol::TypeUchar
                | Symbol::TypeString
                | Symbol::TypeVoid
        )
    }
}

impl fmt::Display for Symbol {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self.lexeme() {
            Some(lexeme) => f.write_str(lexeme),
            None => write!(f, "{:?}", self),
        }
    }
}

/// Lexeme ↔ symbol pairs
const SYMBOL_ENTRIES: &[(&str, Symbol)] = &[
    ("int", Symbol::TypeInt),
    ("float", Symbol::TypeFloat),
    ("double", Symbol::TypeDouble),
    ("bool", Symbol::TypeBool),
    ("char", Symbol::TypeChar),
    ("long", Symbol::TypeLong),
    ("short", Symbol::TypeShort),
    ("pointer", Symbol::TypePointer),
    ("uint", Symbol::TypeUint),
    ("ulong", Symbol::TypeUlong),
    ("ushort", Symbol::TypeUshort),
    ("uchar", Symbol::TypeUchar),
    ("string", Symbol::TypeString),
    ("void", Symbol::TypeVoid),
    ("let", Symbol::VariableDeclarationLet),
    ("op", Symbol::VariableDeclarationOp),
    ("fn", Symbol::FunctionDeclarationF),
    ("fn_", Symbol::FunctionDeclarationFVoid),
    ("fn?", Symbol::FunctionDeclarationFOptional),
    ("fn/", Symbol::FunctionDeclarationFLambda),
    ("ret", Symbol::FunctionReturn),
    ("rev", Symbol::FunctionReturnVoid),
    ("if", Symbol::ConditionalIf),
    ("else", Symbol::ConditionalElse),
    ("else if", Symbol::ConditionalElseIf),
    ("match", Symbol::PatternMatch),
    ("null", Symbol::NullLiteral),
    (":", Symbol::Colon),
    ("'", Symbol::SingleQuote),
    ("\"", Symbol::DoubleQuote),
    (",", Symbol::Comma),
    ("[", Symbol::BracketOpen),
    ("]", Symbol::BracketClose),
    ("{", Symbol::BraceOpen),
    ("}", Symbol::BraceClose),
    ("(", Symbol::ParenthesesOpen),
    (")", Symbol::ParenthesesClose),
    ("//", Symbol::CommentLine),
    ("/*", Symbol::CommentBlockOpen),
    ("*/", Symbol::CommentBlockClose),
    (";", Symbol::Newline),
    ("=", Symbol::Assignment),
    ("+", Symbol::ArithmeticAdd),
    ("-", Symbol::ArithmeticSub),
    ("*", Symbol::ArithmeticMul),
    ("/", Symbol::ArithmeticDiv),
    ("%", Symbol::ArithmeticMod),
    ("==", Symbol::ComparisonEq),
    ("!=", Symbol::ComparisonNeq),
    ("<", Symbol::ComparisonLt),
    (">", Symbol::ComparisonGt),
    ("<=", Symbol::ComparisonLte),
    (">=", Symbol::ComparisonGte),
    ("&&", Symbol::LogicalAnd),
    ("||", Symbol::LogicalOr),
    ("!", Symbol::LogicalNot),
    ("&", Symbol::BitwiseAnd),
    ("|", Symbol::BitwiseOr),
    ("^", Symbol::BitwiseXor),
    ("~", Symbol::BitwiseNeg),
    ("<<", Symbol::BitwiseSl),
    (">>", Symbol::BitwiseSr),
    ("->", Symbol::Arrow),
    ("=>", Symbol::FatArrow),
];

/// A pair that would break the bijection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableError {
    #[error("lexeme '{0}' is mapped twice")]
    DuplicateLexeme(&'static str),
    #[error("symbol {0:?} is mapped twice")]
    DuplicateSymbol(Symbol),
}

/// Bidirectional lexeme ↔ symbol table
#[derive(Debug)]
pub struct SymbolTable {
    forward: IndexMap<&'static str, Symbol>,
    reverse: IndexMap<Symbol, &'static str>,
}

impl SymbolTable {
    /// Build a table, rejecting any duplicate on either side
    pub fn from_entries(entries: &[(&'static str, Symbol)]) -> Result<Self, TableError> {
        let mut forward = IndexMap::with_capacity(entries.len());
        let mut reverse = IndexMap::with_capacity(entries.len());
        for &(lexeme, symbol) in entries {
            if forward.insert(lexeme, symbol).is_some() {
                return Err(TableError::DuplicateLexeme(lexeme));
            }
            if reverse.insert(symbol, lexeme).is_some() {
                return Err(TableError::DuplicateSymbol(symbol));
            }
        }
        Ok(Self { forward, reverse })
    }

    /// Symbol for a lexeme
    pub fn forward_at(
        &self,
        lexeme: &str,
    ) -> Option<Symbol> {
        self.forward.get(lexeme).copied()
    }

    /// Lexeme for a symbol
    pub fn reverse_at(
        &self,
        symbol: Symbol,
    ) -> Option<&'static str> {
        self.reverse.get(&symbol).copied()
    }

    /// Entries in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, Symbol)> + '_ {
        self.forward.iter().map(|(&lexeme, &symbol)| (lexeme, symbol))
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}

/// The process-wide symbol table
pub static SYMBOLS: Lazy<SymbolTable> = Lazy::new(|| match SymbolTable::from_entries(SYMBOL_ENTRIES) {
    Ok(table) => table,
    Err(err) => panic!("symbol table is not a bijection: {}", err),
});

/// Symbol for a lexeme
pub fn symbol_of(lexeme: &str) -> Option<Symbol> {
    SYMBOLS.forward_at(lexeme)
}

/// Lexeme for a symbol
pub fn lexeme_of(symbol: Symbol) -> Option<&'static str> {
    SYMBOLS.reverse_at(symbol)
}

//! Abstract Syntax Tree types
//!
//! Strict trees: every node owns its children. A program is a flat
//! `Vec<Stmt>`; only the else / else-if chain of a conditional is linked.

use crate::frontend::core::lexer::Symbol;
use crate::util::span::Position;
use serde::Serialize;
use std::fmt;

/// Named value: a variable reference or a function parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identifier {
    pub name: String,
    pub position: Position,
}

impl Identifier {
    pub fn new(
        name: impl Into<String>,
        position: Position,
    ) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }
}

/// Expression
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Expr {
    Binary {
        op: Symbol,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
        position: Position,
    },
    Unary {
        op: Symbol,
        operand: Box<Expr>,
        position: Position,
    },
    /// Numeric literal with the type implied by its suffix
    Numeric {
        ty: Symbol,
        value: String,
        position: Position,
    },
    /// String literal; `value` keeps the quotes
    String { value: String, position: Position },
    /// Char literal; `value` keeps the quotes
    Char { value: String, position: Position },
    Null { position: Position },
    Identifier(Identifier),
    Call {
        name: String,
        args: Vec<Expr>,
        position: Position,
    },
}

impl Expr {
    /// Constituent symbol tagging this node
    pub fn symbol(&self) -> Symbol {
        match self {
            Expr::Binary { op, .. } | Expr::Unary { op, .. } => *op,
            Expr::Numeric { ty, .. } => *ty,
            Expr::String { .. } => Symbol::TypeString,
            Expr::Char { .. } => Symbol::TypeChar,
            Expr::Null { .. } => Symbol::NullLiteral,
            Expr::Identifier(_) => Symbol::VariableId,
            Expr::Call { .. } => Symbol::FunctionId,
        }
    }

    /// Position of the node's leading token (the operator, for binaries)
    pub fn position(&self) -> Position {
        match self {
            Expr::Binary { position, .. }
            | Expr::Unary { position, .. }
            | Expr::Numeric { position, .. }
            | Expr::String { position, .. }
            | Expr::Char { position, .. }
            | Expr::Null { position }
            | Expr::Call { position, .. } => *position,
            Expr::Identifier(ident) => ident.position,
        }
    }
}

/// Prefix rendering: `(+ 1 (* 2 x))`, calls as `(f a b)`
impl fmt::Display for Expr {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        match self {
            Expr::Binary { op, lhs, rhs, .. } => write!(f, "({} {} {})", op, lhs, rhs),
            Expr::Unary { op, operand, .. } => write!(f, "({} {})", op, operand),
            Expr::Numeric { value, .. } | Expr::String { value, .. } | Expr::Char { value, .. } => {
                f.write_str(value)
            }
            Expr::Null { .. } => f.write_str("null"),
            Expr::Identifier(ident) => f.write_str(&ident.name),
            Expr::Call { name, args, .. } => {
                write!(f, "({}", name)?;
                for arg in args {
                    write!(f, " {}", arg)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Statement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Stmt {
    FunctionDecl(FunctionDecl),
    VariableDecl(VariableDecl),
    Conditional(ConditionalStatement),
    Return(ReturnStatement),
    Expression(ExpressionStatement),
}

impl Stmt {
    pub fn position(&self) -> Position {
        match self {
            Stmt::FunctionDecl(decl) => decl.position,
            Stmt::VariableDecl(decl) => decl.position,
            Stmt::Conditional(cond) => cond.position,
            Stmt::Return(ret) => ret.position,
            Stmt::Expression(stmt) => stmt.position,
        }
    }

    /// Short node name for logs
    pub fn kind_name(&self) -> &'static str {
        match self {
            Stmt::FunctionDecl(_) => "function declaration",
            Stmt::VariableDecl(_) => "variable declaration",
            Stmt::Conditional(_) => "conditional",
            Stmt::Return(_) => "return",
            Stmt::Expression(_) => "expression statement",
        }
    }
}

/// `fn NAME(params) [-> TYPE] { body }` and its `fn_` / `fn?` / `fn/` variants
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FunctionDecl {
    /// Which declaration keyword introduced the function
    pub kind: Symbol,
    pub name: String,
    pub position: Position,
    pub params: Vec<Identifier>,
    /// `TypeVoid` when no `-> TYPE` is given
    pub return_type: Symbol,
    pub body: Vec<Stmt>,
}

/// `let`, `op` or `TYPE NAME` declaration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableDecl {
    /// `VariableDeclarationLet`, `VariableDeclarationOp`, or the leading type
    pub kind: Symbol,
    pub name: String,
    pub position: Position,
    /// Declared type, from `: TYPE` or a leading type
    pub ty: Option<Symbol>,
    pub value: Option<Expr>,
}

/// One link of an `if` / `else if` / `else` chain
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConditionalStatement {
    /// `ConditionalIf`, `ConditionalElseIf` or `ConditionalElse`
    pub kind: Symbol,
    pub position: Position,
    /// `None` only for a final `else`
    pub condition: Option<Expr>,
    pub body: Vec<Stmt>,
    pub next: Option<Box<ConditionalStatement>>,
}

impl ConditionalStatement {
    /// This link followed by every later one
    pub fn chain(&self) -> impl Iterator<Item = &ConditionalStatement> {
        std::iter::successors(Some(self), |link| link.next.as_deref())
    }
}

/// `ret EXPR` or `rev`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnStatement {
    pub kind: Symbol,
    pub position: Position,
    pub value: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExpressionStatement {
    pub expr: Expr,
    pub position: Position,
}

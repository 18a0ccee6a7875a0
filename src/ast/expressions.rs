use std::fmt::{Display, Formatter};

use crate::lexer::tokens::Token;

use super::{ast::Expr, statements::BlockStmt};

// LITERALS

/// Symbol Expression
/// Represents an identifier in the AST.
#[derive(Debug, Clone)]
pub struct SymbolExpr {
    pub token: Token,
    pub value: String,
}

impl Display for SymbolExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Number Expression
/// Represents an integer literal in the AST.
#[derive(Debug, Clone)]
pub struct NumberExpr {
    pub token: Token,
    pub value: i64,
}

impl Display for NumberExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

/// Boolean Expression
/// Represents `true` or `false` in the AST.
#[derive(Debug, Clone)]
pub struct BooleanExpr {
    pub token: Token,
    pub value: bool,
}

impl Display for BooleanExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.literal)
    }
}

// COMPLEX

/// Prefix Expression
/// Represents a prefix operation (`-x`, `!x`) on an expression in the AST.
#[derive(Debug, Clone)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right)
    }
}

/// Infix Expression
/// Represents a binary operation between two expressions in the AST.
///
/// `token` is the operator token.
#[derive(Debug, Clone)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: String,
    pub right: Box<Expr>,
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

/// If Expression
/// Represents `if (<condition>) { ... } else { ... }`. The else branch is optional.
#[derive(Debug, Clone)]
pub struct IfExpr {
    pub token: Token,
    pub condition: Box<Expr>,
    pub consequence: BlockStmt,
    pub alternative: Option<BlockStmt>,
}

impl Display for IfExpr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;

        if let Some(alternative) = &self.alternative {
            write!(f, "else {}", alternative)?;
        }

        Ok(())
    }
}

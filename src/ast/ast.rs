use std::{
    fmt::{Display, Formatter},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    expressions::{BooleanExpr, IfExpr, InfixExpr, NumberExpr, PrefixExpr, SymbolExpr},
    statements::{BlockStmt, ExpressionStmt, LetStmt, ReturnStmt},
};

/// Statement
///
/// Closed set of statement kinds. Consumers match exhaustively.
#[derive(Debug, Clone)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
    Block(BlockStmt),
}

impl Stmt {
    /// The token the statement was parsed from.
    pub fn token(&self) -> &Token {
        match self {
            Stmt::Let(stmt) => &stmt.token,
            Stmt::Return(stmt) => &stmt.token,
            Stmt::Expression(stmt) => &stmt.token,
            Stmt::Block(stmt) => &stmt.token,
        }
    }

    /// Literal of the originating token, for diagnostics.
    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => stmt.fmt(f),
            Stmt::Return(stmt) => stmt.fmt(f),
            Stmt::Expression(stmt) => stmt.fmt(f),
            Stmt::Block(stmt) => stmt.fmt(f),
        }
    }
}

/// Expression
///
/// Closed set of expression kinds. Grouping parentheses leave no node behind,
/// they only shape the tree.
#[derive(Debug, Clone)]
pub enum Expr {
    Symbol(SymbolExpr),
    Number(NumberExpr),
    Boolean(BooleanExpr),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
    If(IfExpr),
}

impl Expr {
    pub fn token(&self) -> &Token {
        match self {
            Expr::Symbol(expr) => &expr.token,
            Expr::Number(expr) => &expr.token,
            Expr::Boolean(expr) => &expr.token,
            Expr::Prefix(expr) => &expr.token,
            Expr::Infix(expr) => &expr.token,
            Expr::If(expr) => &expr.token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Symbol(expr) => expr.fmt(f),
            Expr::Number(expr) => expr.fmt(f),
            Expr::Boolean(expr) => expr.fmt(f),
            Expr::Prefix(expr) => expr.fmt(f),
            Expr::Infix(expr) => expr.fmt(f),
            Expr::If(expr) => expr.fmt(f),
        }
    }
}

/// Root of every tree produced by the parser.
///
/// Statements are kept in source order. `Display` renders the canonical,
/// fully parenthesised text of the whole program.
#[derive(Debug, Clone, Default)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        match self.statements.first() {
            Some(stmt) => stmt.token_literal(),
            None => "",
        }
    }

    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}

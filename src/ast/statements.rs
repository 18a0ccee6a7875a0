use std::{
    fmt::{Display, Formatter},
    slice::Iter,
};

use crate::lexer::tokens::Token;

use super::{
    ast::{Expr, Stmt},
    expressions::SymbolExpr,
};

#[derive(Debug, Clone)]
pub struct BlockStmt {
    /// The opening `{`
    pub token: Token,
    pub body: Vec<Stmt>,
}

impl BlockStmt {
    pub fn iter(&self) -> Iter<'_, Stmt> {
        self.body.iter()
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

impl Display for BlockStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.body {
            write!(f, "{}", stmt)?;
        }

        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct ExpressionStmt {
    /// First token of the expression
    pub token: Token,
    pub expression: Expr,
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// `let <name> = <value>;`
#[derive(Debug, Clone)]
pub struct LetStmt {
    pub token: Token,
    pub name: SymbolExpr,
    pub value: Expr,
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = {};", self.token.literal, self.name, self.value)
    }
}

#[derive(Debug, Clone)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Expr,
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {};", self.token.literal, self.value)
    }
}

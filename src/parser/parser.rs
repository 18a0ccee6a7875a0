//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the program loop.
//! The parser reads tokens from the lexer on demand and keeps exactly one
//! token of lookahead. Expressions are parsed Pratt style with the NUD/LED
//! tables from `lookups`; see `expr` and `stmt` for the handlers.

use std::mem;

use tracing::debug;

use crate::{
    ast::ast::{Program, Stmt},
    errors::errors::{Error, ErrorImpl, ErrorList},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{BindingPower, Lookups, LOOKUPS},
    stmt::parse_stmt,
};

/// Deepest expression nesting before the parser gives up on a statement.
///
/// Every level costs several stack frames (`parse_expr`, a NUD handler and,
/// for `if`, the block and statement parsers), so this stays well inside the
/// 2 MiB stack of a spawned thread.
pub const MAX_NESTING_DEPTH: usize = 128;

/// The main parser structure that maintains parsing state.
///
/// Holds the lexer, the current token, the lookahead token and the errors
/// collected so far. The dispatch tables are shared and read-only.
pub struct Parser {
    /// Source of tokens, pulled one at a time
    lexer: Lexer,
    /// The token under examination
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors in detection order
    errors: ErrorList,
    /// Current `parse_expr` depth
    nesting_depth: usize,
    lookups: &'static Lookups,
}

impl Parser {
    /// Creates a parser and primes the current and lookahead tokens.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Parser {
            lexer,
            current,
            peek,
            errors: ErrorList::new(),
            nesting_depth: 0,
            lookups: &*LOOKUPS,
        }
    }

    pub fn lookups(&self) -> &'static Lookups {
        self.lookups
    }

    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token(&self) -> &Token {
        &self.peek
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    pub fn current_is(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn peek_is(&self, kind: TokenKind) -> bool {
        self.peek.kind == kind
    }

    /// Shifts the lookahead into the current slot and pulls a new lookahead.
    pub fn next_token(&mut self) {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
    }

    /// Advances when the lookahead is `kind`.
    ///
    /// Otherwise nothing is consumed and an `UnexpectedToken` error is
    /// returned for the caller to propagate.
    pub fn expect_peek(&mut self, kind: TokenKind) -> Result<(), Error> {
        if self.peek_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(Error::new(
                ErrorImpl::UnexpectedToken {
                    expected: kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ))
        }
    }

    /// Enters one level of expression nesting.
    ///
    /// Fails with `NestingTooDeep` at the current token once
    /// `MAX_NESTING_DEPTH` levels are open. Pair every `Ok` with
    /// `leave_nesting`.
    pub fn enter_nesting(&mut self) -> Result<(), Error> {
        if self.nesting_depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(
                ErrorImpl::NestingTooDeep {
                    max: MAX_NESTING_DEPTH,
                },
                self.get_position(),
            ));
        }

        self.nesting_depth += 1;
        Ok(())
    }

    pub fn leave_nesting(&mut self) {
        debug_assert!(self.nesting_depth > 0, "leave_nesting without enter_nesting");
        self.nesting_depth = self.nesting_depth.saturating_sub(1);
    }

    pub fn nesting_depth(&self) -> usize {
        self.nesting_depth
    }

    pub fn current_precedence(&self) -> BindingPower {
        self.lookups.get_bp(self.current.kind)
    }

    pub fn peek_precedence(&self) -> BindingPower {
        self.lookups.get_bp(self.peek.kind)
    }

    /// Position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }

    pub fn errors(&self) -> &ErrorList {
        &self.errors
    }

    pub fn into_errors(self) -> ErrorList {
        self.errors
    }

    pub fn record_error(&mut self, error: Error) {
        debug!(error = %error, offset = error.get_position().0, "recorded parse error");
        self.errors.push(error);
    }

    /// Parses one statement, recording its error instead of returning it.
    ///
    /// Used by both the program loop and block parsing, so a broken statement
    /// contributes nothing and parsing carries on with the next token.
    pub fn parse_stmt_or_record(&mut self) -> Option<Stmt> {
        match parse_stmt(self) {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                self.record_error(error);
                None
            }
        }
    }

    /// Parses statements until EOF.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while !self.current_is(TokenKind::EOF) {
            if let Some(stmt) = self.parse_stmt_or_record() {
                program.statements.push(stmt);
            }
            self.next_token();
        }

        debug!(
            file = %self.lexer.file(),
            statements = program.len(),
            errors = self.errors.len(),
            "parsed program"
        );

        program
    }
}

/// Parses a source text into a Program.
///
/// This is the main entry point. The returned errors are in detection order;
/// when any are present the program may be partial and must not be evaluated.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Name of the source used in positions, `"shell"` when omitted
pub fn parse(source: String, file: Option<String>) -> (Program, ErrorList) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}

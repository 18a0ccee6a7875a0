use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::{
    ast::ast::{Expr, Stmt},
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Binding power of an operator, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,      // ==
    LessGreater, // > or <
    Sum,         // +
    Product,     // *
    Prefix,      // -x or !x
    Call,        // f(x)
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
/// Prefix handler, called when a token kind starts an expression.
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
/// Infix handler, called with the already parsed left hand side.
pub type LEDHandler = fn(&mut Parser, Expr) -> Result<Expr, Error>;

pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, LEDHandler>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;

/// Dispatch tables shared by every parser. Built once, never mutated.
#[derive(Default)]
pub struct Lookups {
    stmt_lookup: StmtLookup,
    nud_lookup: NUDLookup,
    led_lookup: LEDLookup,
    binding_power_lookup: BPLookup,
}

impl Lookups {
    fn led(&mut self, kind: TokenKind, binding_power: BindingPower, led_fn: LEDHandler) {
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, led_fn);
    }

    fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    pub fn get_stmt(&self, kind: TokenKind) -> Option<StmtHandler> {
        self.stmt_lookup.get(&kind).copied()
    }

    pub fn get_nud(&self, kind: TokenKind) -> Option<NUDHandler> {
        self.nud_lookup.get(&kind).copied()
    }

    pub fn get_led(&self, kind: TokenKind) -> Option<LEDHandler> {
        self.led_lookup.get(&kind).copied()
    }

    /// Binding power of `kind` in infix position, `Lowest` if it has none.
    pub fn get_bp(&self, kind: TokenKind) -> BindingPower {
        self.binding_power_lookup
            .get(&kind)
            .copied()
            .unwrap_or(BindingPower::Lowest)
    }
}

fn create_token_lookups() -> Lookups {
    let mut lookups = Lookups::default();

    // Equality and relational
    lookups.led(TokenKind::Equals, BindingPower::Equals, parse_infix_expr);
    lookups.led(TokenKind::NotEquals, BindingPower::Equals, parse_infix_expr);
    lookups.led(TokenKind::Less, BindingPower::LessGreater, parse_infix_expr);
    lookups.led(TokenKind::Greater, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    lookups.led(TokenKind::Plus, BindingPower::Sum, parse_infix_expr);
    lookups.led(TokenKind::Dash, BindingPower::Sum, parse_infix_expr);
    lookups.led(TokenKind::Star, BindingPower::Product, parse_infix_expr);
    lookups.led(TokenKind::Slash, BindingPower::Product, parse_infix_expr);

    // Literals and symbols
    lookups.nud(TokenKind::Identifier, parse_symbol_expr);
    lookups.nud(TokenKind::Number, parse_number_expr);
    lookups.nud(TokenKind::True, parse_boolean_expr);
    lookups.nud(TokenKind::False, parse_boolean_expr);
    lookups.nud(TokenKind::Not, parse_prefix_expr);
    lookups.nud(TokenKind::Dash, parse_prefix_expr);
    lookups.nud(TokenKind::OpenParen, parse_grouping_expr);
    lookups.nud(TokenKind::If, parse_if_expr);

    // Statements
    lookups.stmt(TokenKind::Let, parse_let_stmt);
    lookups.stmt(TokenKind::Return, parse_return_stmt);

    lookups
}

lazy_static! {
    pub static ref LOOKUPS: Lookups = create_token_lookups();
}
